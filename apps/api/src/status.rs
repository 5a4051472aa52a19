use axum::{routing::get, Json, Router};

use shared_models::response::MessageResponse;

/// Modules that only report that they are mounted: (path, title).
pub const MODULES: &[(&str, &str)] = &[
    ("/doctors", "Doctors"),
    ("/maternity", "Maternity"),
    ("/radiology", "Radiology"),
    ("/finance", "Finance & Accounting"),
    ("/nursing", "Nursing Care Management"),
    ("/administration", "Administration"),
    ("/hr", "Human Resource Management"),
    ("/bed", "Bed Management"),
    ("/settings", "Settings"),
    ("/insurance", "Insurance Management"),
];

pub fn status_routes() -> Router {
    let root = Router::new().route(
        "/",
        get(|| async { Json(MessageResponse::new("HMS backend is running")) }),
    );

    MODULES.iter().fold(root, |router, &(path, title)| {
        let message = format!("{} module active", title);
        router.route(
            path,
            get(move || {
                let message = message.clone();
                async move { Json(MessageResponse::new(message)) }
            }),
        )
    })
}
