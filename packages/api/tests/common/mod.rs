use api::{AdminToken, ApiClient, ApiConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const ADMIN_SECRET: &str = "hr-admin-secret";

/// Start a mock backend and a client pointed at its `/api/v1` root.
pub async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(ApiConfig::new(format!("{}/api/v1/", server.uri())));
    (server, client)
}

pub fn admin_token() -> AdminToken {
    AdminToken::new(ADMIN_SECRET).unwrap_or_else(|| panic!("test token is not blank"))
}

pub fn candidate_json(id: i64, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "full_name": name,
        "date_of_birth": "1994-06-30",
        "years_of_experience": 5,
        "department": "Operations",
        "email": format!("candidate{id}@example.com"),
        "phone": "+962791234567",
        "current_status": status,
        "created_at": "2024-05-01T09:30:00.000123",
        "resume_url": format!("uploads/{name}-cv.pdf"),
    })
}

pub fn history_json(id: i64, candidate_id: i64, status: &str, feedback: Option<&str>) -> Value {
    json!({
        "id": id,
        "candidate_id": candidate_id,
        "status": status,
        "feedback": feedback,
        "changed_at": "2024-05-02T10:00:00",
        "changed_by": if id == 1 { "system" } else { "admin_1" },
    })
}
