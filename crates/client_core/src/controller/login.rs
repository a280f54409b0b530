//! Login form. Any well-formed email and password is accepted.

use crate::{
    auth::{AuthKind, AuthRequest},
    controller::events::{Effect, Notice},
    validation::validate_login,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    SetEmail(String),
    SetPassword(String),
    TogglePasswordVisibility,
    Submit,
}

impl LoginState {
    pub fn reduce(mut self, action: LoginAction) -> (Self, Option<Effect>) {
        match action {
            LoginAction::SetEmail(email) => self.email = email,
            LoginAction::SetPassword(password) => self.password = password,
            LoginAction::TogglePasswordVisibility => self.show_password = !self.show_password,
            LoginAction::Submit => {
                if self.loading {
                    return (self, None);
                }
                if let Err(error) = validate_login(&self.email, &self.password) {
                    return (self, Some(Effect::Notify(Notice::from(error))));
                }
                self.loading = true;
                let request = AuthRequest {
                    kind: AuthKind::Login,
                    email: self.email.clone(),
                    display_name: None,
                };
                return (self, Some(Effect::Authenticate(request)));
            }
        }
        (self, None)
    }

    /// Clears the loading flag once the auth task ends either way.
    pub fn settle(self) -> Self {
        Self {
            loading: false,
            ..self
        }
    }
}

pub fn welcome_notice() -> Notice {
    Notice::info("Welcome back!", "You've been successfully logged in.")
}

#[cfg(test)]
mod tests {
    use shared::error::ValidationError;

    use super::*;

    fn filled(email: &str, password: &str) -> LoginState {
        let (state, _) = LoginState::default().reduce(LoginAction::SetEmail(email.to_string()));
        let (state, _) = state.reduce(LoginAction::SetPassword(password.to_string()));
        state
    }

    #[test]
    fn missing_fields_block_submit() {
        let (state, effect) = filled("", "secret").reduce(LoginAction::Submit);
        assert!(!state.loading);
        assert_eq!(
            effect,
            Some(Effect::Notify(Notice::from(ValidationError::MissingFields)))
        );
    }

    #[test]
    fn email_without_at_is_rejected() {
        let (state, effect) = filled("sarah", "secret").reduce(LoginAction::Submit);
        assert!(!state.loading);
        let Some(Effect::Notify(notice)) = effect else {
            panic!("expected a notice");
        };
        assert_eq!(notice.title, "Invalid Email");
        assert!(notice.is_destructive());
    }

    #[test]
    fn valid_submit_requests_auth_once() {
        let (state, effect) = filled("sarah@example.com", "x").reduce(LoginAction::Submit);
        assert!(state.loading);
        assert_eq!(
            effect,
            Some(Effect::Authenticate(AuthRequest {
                kind: AuthKind::Login,
                email: "sarah@example.com".to_string(),
                display_name: None,
            }))
        );

        let (state, effect) = state.reduce(LoginAction::Submit);
        assert!(effect.is_none());
        assert!(!state.settle().loading);
    }

    #[test]
    fn toggle_reveals_password() {
        let (state, _) = LoginState::default().reduce(LoginAction::TogglePasswordVisibility);
        assert!(state.show_password);
    }
}
