use axum::Router;

use appointment_cell::appointment_routes;
use reception_cell::reception_routes;
use shared_database::Database;

use crate::status::status_routes;

pub fn create_router(database: Database) -> Router {
    Router::new()
        .merge(status_routes())
        .nest("/appointments", appointment_routes(database.clone()))
        .nest("/reception", reception_routes(database))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use shared_utils::test_utils::response_json;

    async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        (status, response_json(response).await)
    }

    #[tokio::test]
    async fn root_reports_running() {
        let app = create_router(Database::in_memory());

        let (status, body) = call(app, "GET", "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "HMS backend is running" }));
    }

    #[tokio::test]
    async fn every_module_reports_active() {
        let database = Database::in_memory();

        for (path, title) in crate::status::MODULES {
            let (status, body) = call(create_router(database.clone()), "GET", path, None).await;
            assert_eq!(status, StatusCode::OK, "{}", path);
            assert_eq!(body["message"], format!("{} module active", title));
        }

        let (_, finance) = call(create_router(database), "GET", "/finance", None).await;
        assert_eq!(finance["message"], "Finance & Accounting module active");
    }

    #[tokio::test]
    async fn cells_share_one_store() {
        let database = Database::in_memory();

        let (status, appointment) = call(
            create_router(database.clone()),
            "POST",
            "/appointments/create",
            Some(json!({ "patient_name": "Jane Doe", "doctor_name": "Dr. Smith" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(appointment["id"], 1);

        let (status, bill) = call(
            create_router(database.clone()),
            "POST",
            "/reception/walkin-bill",
            Some(json!({
                "service": "X-Ray",
                "description": "Chest",
                "total_amount": 500,
                "status": "pending",
                "patient_id": 7
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bill["id"], 1);

        let (_, listed) = call(create_router(database.clone()), "GET", "/appointments", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, _) = call(create_router(database.clone()), "PUT", "/appointments/1/cancel", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(database.active_sessions(), 0);
    }
}
