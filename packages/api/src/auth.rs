//! Identity lifecycle endpoints: login, register, forgot/reset password.

use reqwest::Method;
use serde::Serialize;
use store::Session;

use crate::client::{ApiClient, MessageBody};
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct PasswordRequest<'a> {
    password: &'a str,
}

impl ApiClient {
    /// `POST /auth/login`, returns the token and identity to persist.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let builder = self
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest { email, password });
        self.send(builder).await
    }

    /// `POST /auth/register` creates the account and logs it in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        let builder = self.request(Method::POST, "/auth/register").json(&RegisterRequest {
            name,
            email,
            password,
        });
        self.send(builder).await
    }

    /// `POST /auth/forgot` asks the server to email a reset link.
    pub async fn request_password_reset(&self, email: &str) -> Result<Option<String>, ApiError> {
        let builder = self
            .request(Method::POST, "/auth/forgot")
            .json(&EmailRequest { email });
        let body: MessageBody = self.send(builder).await?;
        Ok(body.message)
    }

    /// `POST /auth/reset/:token` sets a new account password from an emailed token.
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        let builder = self
            .request(Method::POST, &format!("/auth/reset/{token}"))
            .json(&PasswordRequest { password });
        let body: MessageBody = self.send(builder).await?;
        Ok(body.message)
    }
}

/// Minimum account password length enforced before calling the reset endpoint.
pub const MIN_ACCOUNT_PASSWORD_LEN: usize = 6;

/// Local check for the reset-password form.
pub fn validate_account_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_ACCOUNT_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_ACCOUNT_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_body() {
        let json = serde_json::to_value(LoginRequest {
            email: "ada@example.com",
            password: "secret",
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "ada@example.com", "password": "secret"})
        );
    }

    #[test]
    fn test_validate_account_password() {
        assert!(validate_account_password("12345").is_err());
        assert!(validate_account_password("123456").is_ok());
    }
}
