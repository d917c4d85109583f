//! # Vault gate: access control in front of the personal documents
//!
//! The vault is guarded by a second password, separate from the account password.
//! Which form the gate shows is never stored: [`gate_mode`] recomputes it from the
//! session identity and the one piece of navigation state the form owns
//! ([`GateNav`]).
//!
//! | Identity | `has_vault_password` | Nav | Mode |
//! |----------|---------------------|-----|------|
//! | not yet resolved | - | - | [`GateMode::Loading`] |
//! | present | `false` | any | [`GateMode::Setup`] |
//! | present | `true` | `Default` | [`GateMode::Unlock`] |
//! | present | `true` | `ForgotPassword` | [`GateMode::Reset`] |
//!
//! ## Submissions
//!
//! [`submit`] validates a [`GateSubmission`] locally first; a validation failure
//! returns [`GateError::Validation`] without touching the backend. Otherwise exactly
//! one backend call is made:
//!
//! | Submission | Endpoint | On success |
//! |------------|----------|-----------|
//! | `Unlock` | `POST /auth/docs-password/verify` | unlock |
//! | `Setup` | `POST /auth/docs-password/set` | patch `has_vault_password`, unlock |
//! | `Reset` | `POST /auth/docs-password/reset` | patch `has_vault_password`, unlock, nav back to `Default` |
//!
//! Rejections carry the server message verbatim, or a per-mode fallback. There is no
//! retry and no client-side lockout.
//!
//! ## Unlock flag
//!
//! [`VaultAccess`] is the in-memory unlocked flag. [`VaultAccess::unlock`] reports
//! whether the call actually flipped it, which is what drives the single document
//! fetch after a successful submission.

use std::future::Future;

use reqwest::Method;
use serde::Serialize;
use store::{IdentityPatch, SessionIdentity};
use thiserror::Error;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Minimum vault password length, checked before any request.
pub const MIN_VAULT_PASSWORD_LEN: usize = 4;

/// The form the gate is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateMode {
    Loading,
    Unlock,
    Setup,
    Reset,
}

/// Navigation inside the gate form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateNav {
    #[default]
    Default,
    ForgotPassword,
}

impl GateNav {
    /// "Forgot password" link; only meaningful from the unlock form.
    pub fn forgot(self, mode: GateMode) -> Self {
        if mode == GateMode::Unlock {
            GateNav::ForgotPassword
        } else {
            self
        }
    }

    /// "Back" link from the reset form.
    pub fn back(self) -> Self {
        GateNav::Default
    }
}

/// Derive the gate mode from the session identity and form navigation.
pub fn gate_mode(identity: Option<&SessionIdentity>, nav: GateNav) -> GateMode {
    match identity {
        None => GateMode::Loading,
        Some(user) if !user.has_vault_password => GateMode::Setup,
        Some(_) => match nav {
            GateNav::Default => GateMode::Unlock,
            GateNav::ForgotPassword => GateMode::Reset,
        },
    }
}

/// Whether the vault has been unlocked in this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VaultAccess {
    #[default]
    Locked,
    Unlocked,
}

impl VaultAccess {
    pub fn is_unlocked(&self) -> bool {
        *self == VaultAccess::Unlocked
    }

    /// Flip to unlocked. Returns `true` only if it was locked before.
    pub fn unlock(&mut self) -> bool {
        let was_locked = *self == VaultAccess::Locked;
        *self = VaultAccess::Unlocked;
        was_locked
    }
}

/// What the user submitted from the gate form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateSubmission {
    Unlock {
        password: String,
    },
    Setup {
        password: String,
    },
    Reset {
        account_password: String,
        new_password: String,
    },
}

impl GateSubmission {
    pub fn mode(&self) -> GateMode {
        match self {
            GateSubmission::Unlock { .. } => GateMode::Unlock,
            GateSubmission::Setup { .. } => GateMode::Setup,
            GateSubmission::Reset { .. } => GateMode::Reset,
        }
    }

    /// Checks that need no server round trip.
    pub fn validate(&self) -> Result<(), GateError> {
        match self {
            GateSubmission::Unlock { password } => {
                if password.is_empty() {
                    return Err(GateError::Validation("Password is required"));
                }
            }
            GateSubmission::Setup { password } => check_new_password(password)?,
            GateSubmission::Reset {
                account_password,
                new_password,
            } => {
                if account_password.is_empty() {
                    return Err(GateError::Validation("Account password is required"));
                }
                check_new_password(new_password)?;
            }
        }
        Ok(())
    }

    fn fallback_message(&self) -> &'static str {
        match self {
            GateSubmission::Unlock { .. } => "Incorrect password",
            GateSubmission::Setup { .. } => "Failed to set password",
            GateSubmission::Reset { .. } => "Reset failed",
        }
    }
}

fn check_new_password(password: &str) -> Result<(), GateError> {
    if password.chars().count() < MIN_VAULT_PASSWORD_LEN {
        return Err(GateError::Validation(
            "Password must be at least 4 characters",
        ));
    }
    Ok(())
}

/// Why a gate submission did not unlock the vault.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GateError {
    /// Caught locally; no request was made.
    #[error("{0}")]
    Validation(&'static str),
    /// The server (or the network) rejected the submission.
    #[error("{0}")]
    Rejected(String),
}

/// Follow-up state after a successful submission.
#[derive(Clone, Debug, PartialEq)]
pub struct GateOutcome {
    /// Identity patch to apply, if the submission changed the account.
    pub patch: Option<IdentityPatch>,
    /// Navigation to restore for the next time the gate is shown.
    pub nav: GateNav,
}

/// The three vault password operations the gate needs from the server.
pub trait VaultBackend {
    fn verify_vault_password(
        &self,
        password: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn set_vault_password(&self, password: &str) -> impl Future<Output = Result<(), ApiError>>;
    fn reset_vault_password(
        &self,
        account_password: &str,
        new_password: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// Validate and send a gate submission.
pub async fn submit<B: VaultBackend>(
    backend: &B,
    submission: &GateSubmission,
) -> Result<GateOutcome, GateError> {
    submission.validate()?;

    let result = match submission {
        GateSubmission::Unlock { password } => backend.verify_vault_password(password).await,
        GateSubmission::Setup { password } => backend.set_vault_password(password).await,
        GateSubmission::Reset {
            account_password,
            new_password,
        } => {
            backend
                .reset_vault_password(account_password, new_password)
                .await
        }
    };

    if let Err(e) = result {
        tracing::warn!("Vault {:?} rejected: {}", submission.mode(), e);
        return Err(GateError::Rejected(
            e.message_or(submission.fallback_message()),
        ));
    }

    Ok(match submission {
        GateSubmission::Unlock { .. } => GateOutcome {
            patch: None,
            nav: GateNav::Default,
        },
        GateSubmission::Setup { .. } | GateSubmission::Reset { .. } => GateOutcome {
            patch: Some(IdentityPatch::vault_configured()),
            nav: GateNav::Default,
        },
    })
}

#[derive(Debug, Serialize)]
struct VaultPasswordRequest<'a> {
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VaultResetRequest<'a> {
    account_password: &'a str,
    new_password: &'a str,
}

impl VaultBackend for ApiClient {
    async fn verify_vault_password(&self, password: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/auth/docs-password/verify")
            .json(&VaultPasswordRequest { password });
        self.send_empty(builder).await
    }

    async fn set_vault_password(&self, password: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/auth/docs-password/set")
            .json(&VaultPasswordRequest { password });
        self.send_empty(builder).await
    }

    async fn reset_vault_password(
        &self,
        account_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/auth/docs-password/reset")
            .json(&VaultResetRequest {
                account_password,
                new_password,
            });
        self.send_empty(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every call; rejects with `reject` when set.
    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<String>>,
        reject: Option<Option<String>>,
    }

    impl RecordingBackend {
        fn rejecting(message: Option<&str>) -> Self {
            Self {
                reject: Some(message.map(str::to_string)),
                ..Self::default()
            }
        }

        fn respond(&self, call: String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.reject {
                Some(message) => Err(ApiError::Server {
                    status: 401,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl VaultBackend for RecordingBackend {
        async fn verify_vault_password(&self, password: &str) -> Result<(), ApiError> {
            self.respond(format!("verify:{password}"))
        }

        async fn set_vault_password(&self, password: &str) -> Result<(), ApiError> {
            self.respond(format!("set:{password}"))
        }

        async fn reset_vault_password(
            &self,
            account_password: &str,
            new_password: &str,
        ) -> Result<(), ApiError> {
            self.respond(format!("reset:{account_password}:{new_password}"))
        }
    }

    fn identity(has_vault_password: bool) -> SessionIdentity {
        SessionIdentity {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: store::Role::User,
            has_vault_password,
            favorites: Default::default(),
        }
    }

    #[test]
    fn test_mode_without_identity_is_loading() {
        assert_eq!(gate_mode(None, GateNav::Default), GateMode::Loading);
        assert_eq!(gate_mode(None, GateNav::ForgotPassword), GateMode::Loading);
    }

    #[test]
    fn test_unconfigured_vault_is_always_setup() {
        let user = identity(false);
        assert_eq!(gate_mode(Some(&user), GateNav::Default), GateMode::Setup);
        assert_eq!(gate_mode(Some(&user), GateNav::ForgotPassword), GateMode::Setup);
    }

    #[test]
    fn test_configured_vault_unlock_and_reset() {
        let user = identity(true);
        let nav = GateNav::default();
        assert_eq!(gate_mode(Some(&user), nav), GateMode::Unlock);

        let nav = nav.forgot(gate_mode(Some(&user), nav));
        assert_eq!(gate_mode(Some(&user), nav), GateMode::Reset);

        let nav = nav.back();
        assert_eq!(gate_mode(Some(&user), nav), GateMode::Unlock);
    }

    #[test]
    fn test_forgot_only_from_unlock() {
        assert_eq!(GateNav::Default.forgot(GateMode::Setup), GateNav::Default);
        assert_eq!(GateNav::Default.forgot(GateMode::Loading), GateNav::Default);
    }

    #[tokio::test]
    async fn test_short_setup_password_makes_no_call() {
        let backend = RecordingBackend::default();
        let result = submit(
            &backend,
            &GateSubmission::Setup {
                password: "abc".to_string(),
            },
        )
        .await;
        assert_eq!(
            result,
            Err(GateError::Validation("Password must be at least 4 characters"))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_short_reset_password_makes_no_call() {
        let backend = RecordingBackend::default();
        let result = submit(
            &backend,
            &GateSubmission::Reset {
                account_password: "account-pass".to_string(),
                new_password: "12".to_string(),
            },
        )
        .await;
        assert!(matches!(result, Err(GateError::Validation(_))));

        let result = submit(
            &backend,
            &GateSubmission::Reset {
                account_password: String::new(),
                new_password: "1234".to_string(),
            },
        )
        .await;
        assert_eq!(
            result,
            Err(GateError::Validation("Account password is required"))
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_unlock_makes_no_call() {
        let backend = RecordingBackend::default();
        let result = submit(
            &backend,
            &GateSubmission::Unlock {
                password: String::new(),
            },
        )
        .await;
        assert!(matches!(result, Err(GateError::Validation(_))));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_setup_success_patches_identity() {
        let backend = RecordingBackend::default();
        let outcome = submit(
            &backend,
            &GateSubmission::Setup {
                password: "1234".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(backend.calls(), vec!["set:1234"]);
        assert_eq!(outcome.patch, Some(IdentityPatch::vault_configured()));

        let mut user = identity(false);
        user.apply(outcome.patch.unwrap());
        assert_eq!(gate_mode(Some(&user), outcome.nav), GateMode::Unlock);
    }

    #[tokio::test]
    async fn test_reset_success_returns_to_unlock() {
        let backend = RecordingBackend::default();
        let outcome = submit(
            &backend,
            &GateSubmission::Reset {
                account_password: "hunter22".to_string(),
                new_password: "9876".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(backend.calls(), vec!["reset:hunter22:9876"]);
        assert_eq!(outcome.nav, GateNav::Default);
        assert!(outcome.patch.is_some());
    }

    #[tokio::test]
    async fn test_unlock_success_has_no_patch() {
        let backend = RecordingBackend::default();
        let outcome = submit(
            &backend,
            &GateSubmission::Unlock {
                password: "1234".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(backend.calls(), vec!["verify:1234"]);
        assert!(outcome.patch.is_none());
    }

    #[tokio::test]
    async fn test_rejection_uses_server_message() {
        let backend = RecordingBackend::rejecting(Some("Wrong vault password"));
        let result = submit(
            &backend,
            &GateSubmission::Unlock {
                password: "1234".to_string(),
            },
        )
        .await;
        assert_eq!(
            result,
            Err(GateError::Rejected("Wrong vault password".to_string()))
        );
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let backend = RecordingBackend::rejecting(None);
        let unlock = submit(
            &backend,
            &GateSubmission::Unlock {
                password: "1234".to_string(),
            },
        )
        .await;
        assert_eq!(unlock, Err(GateError::Rejected("Incorrect password".to_string())));

        let setup = submit(
            &backend,
            &GateSubmission::Setup {
                password: "1234".to_string(),
            },
        )
        .await;
        assert_eq!(setup, Err(GateError::Rejected("Failed to set password".to_string())));

        let reset = submit(
            &backend,
            &GateSubmission::Reset {
                account_password: "pw".to_string(),
                new_password: "1234".to_string(),
            },
        )
        .await;
        assert_eq!(reset, Err(GateError::Rejected("Reset failed".to_string())));
    }

    #[tokio::test]
    async fn test_document_list_revealed_exactly_once() {
        let backend = RecordingBackend::default();
        let mut access = VaultAccess::default();
        let mut fetches = 0;

        for _ in 0..2 {
            let submission = GateSubmission::Unlock {
                password: "1234".to_string(),
            };
            if submit(&backend, &submission).await.is_ok() && access.unlock() {
                fetches += 1;
            }
        }

        assert!(access.is_unlocked());
        assert_eq!(fetches, 1);
    }

    #[test]
    fn test_reset_body_field_names() {
        let json = serde_json::to_value(VaultResetRequest {
            account_password: "a",
            new_password: "b",
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"accountPassword": "a", "newPassword": "b"})
        );
    }
}
