//! Auth API

use shared::client::{LoginRequest, LoginResponse};

use crate::{ClientResult, HttpClient, Session};

impl HttpClient {
    /// Login with username and password and store the session
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("/auth/login", &request).await?;
        self.auth().set(Session::from(response.clone())).await;
        tracing::info!(user = %response.user.username, role = %response.user.role, "Logged in");
        Ok(response)
    }

    /// Forget the session; the backend keeps no logout state
    pub async fn logout(&self) {
        self.auth().clear().await;
        tracing::info!("Logged out");
    }
}
