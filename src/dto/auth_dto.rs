use serde::{Deserialize, Serialize};

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// Login response con bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: String,
    pub username: String,
}

impl LoginResponse {
    pub fn new(access_token: String, user_id: String, username: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user_id,
            username,
        }
    }
}

// Conteos agregados para el dashboard
#[derive(Debug, Serialize)]
pub struct DashboardCounts {
    pub clientes: i64,
    pub vehiculos: i64,
    pub contratos: i64,
}
