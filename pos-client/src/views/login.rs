//! Login view

use shared::client::UserInfo;
use shared::validation::{self, MAX_NAME_LEN, MAX_PASSWORD_LEN};

use crate::{ClientResult, HttpClient};

pub struct LoginView {
    client: HttpClient,
}

impl LoginView {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Submit credentials; on success the session is stored in the auth context
    pub async fn submit(&self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let username = username.trim();
        validation::validate_required_text(username, "username", MAX_NAME_LEN)?;
        validation::validate_required_text(password, "password", MAX_PASSWORD_LEN)?;

        let response = self.client.login(username, password).await?;
        Ok(response.user)
    }

    pub async fn logout(&self) {
        self.client.logout().await;
    }

    pub async fn current_user(&self) -> Option<UserInfo> {
        self.client.auth().user().await
    }
}
