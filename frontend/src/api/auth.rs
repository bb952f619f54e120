use log::info;
use reqwest::multipart::Form;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User},
};

impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let form = Form::new()
            .text("username", request.username.clone())
            .text("password", request.password.clone())
            .text("name", request.name.clone());
        let url = self.endpoint("/register").await;
        let response = self.send(self.http_client().post(url).multipart(form)).await?;
        Self::parse_json(response).await
    }

    /// Exchanges credentials for a token and stores the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let form = Form::new()
            .text("username", request.username.clone())
            .text("password", request.password.clone());
        let url = self.endpoint("/login").await;
        let response = self.send(self.http_client().post(url).multipart(form)).await?;
        let login_response: LoginResponse = Self::parse_json(response).await?;

        if !login_response.token.is_empty() {
            self.session()
                .set(&login_response.token, &login_response.user)
                .map_err(|e| ApiError::unknown(e.to_string()))?;
            info!("Signed in as user {}", login_response.user.id);
        }
        Ok(login_response)
    }

    /// The backend keeps no server-side session, so logging out is local.
    pub fn logout(&self) {
        self.session().clear();
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }
}
