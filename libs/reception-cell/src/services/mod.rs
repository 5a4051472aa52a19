pub mod billing;
pub mod queue;

pub use billing::BillingService;
pub use queue::QueueService;
