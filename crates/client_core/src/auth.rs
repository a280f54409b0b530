//! Simulated sign-in and sign-up.
//!
//! There is no account service: any input that passes form validation is
//! accepted after a fixed delay. The delay runs as a spawned task tied to a
//! `CancellationToken`, so a view that goes away cancels its pending
//! completion instead of leaking it.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_SIGNUP_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub kind: AuthKind,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Completed(AuthRequest),
    Cancelled(AuthKind),
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Resolves once the request has been accepted.
    async fn authenticate(&self, request: &AuthRequest);
}

/// Accepts every request after a per-kind delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAuth {
    pub login_delay: Duration,
    pub signup_delay: Duration,
}

impl Default for SimulatedAuth {
    fn default() -> Self {
        Self {
            login_delay: DEFAULT_LOGIN_DELAY,
            signup_delay: DEFAULT_SIGNUP_DELAY,
        }
    }
}

#[async_trait]
impl AuthBackend for SimulatedAuth {
    async fn authenticate(&self, request: &AuthRequest) {
        let delay = match request.kind {
            AuthKind::Login => self.login_delay,
            AuthKind::Signup => self.signup_delay,
        };
        tokio::time::sleep(delay).await;
    }
}

/// A pending auth task. Dropping the handle cancels the task.
pub struct AuthHandle {
    kind: AuthKind,
    token: CancellationToken,
    join: Option<JoinHandle<AuthOutcome>>,
}

impl AuthHandle {
    /// Starts `request` on the current tokio runtime.
    pub fn spawn(backend: Arc<dyn AuthBackend>, request: AuthRequest) -> Self {
        let kind = request.kind;
        let token = CancellationToken::new();
        let task_token = token.clone();
        info!(?kind, email = %request.email, "auth started");

        let join = tokio::spawn(async move {
            let completed = tokio::select! {
                _ = task_token.cancelled() => false,
                _ = backend.authenticate(&request) => true,
            };
            if completed {
                info!(?kind, email = %request.email, "auth completed");
                AuthOutcome::Completed(request)
            } else {
                info!(?kind, "auth cancelled");
                AuthOutcome::Cancelled(kind)
            }
        });

        Self {
            kind,
            token,
            join: Some(join),
        }
    }

    pub fn kind(&self) -> AuthKind {
        self.kind
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, JoinHandle::is_finished)
    }

    pub async fn wait(mut self) -> AuthOutcome {
        let Some(join) = self.join.take() else {
            return AuthOutcome::Cancelled(self.kind);
        };
        match join.await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(kind = ?self.kind, %error, "auth task did not finish");
                AuthOutcome::Cancelled(self.kind)
            }
        }
    }
}

impl Drop for AuthHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
