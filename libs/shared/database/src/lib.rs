pub mod backend;
pub mod error;
pub mod memory;
pub mod session;
pub mod supabase;

pub use backend::RecordBackend;
pub use error::DatabaseError;
pub use memory::InMemoryBackend;
pub use session::{Database, Session};
pub use supabase::{SupabaseClient, DEFAULT_PAGE_SIZE};
