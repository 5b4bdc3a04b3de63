//! Session authentication state and the route guard.
//!
//! `AuthState` is a small reducer-style state container. The guard turns it
//! into a render decision for protected routes:
//!
//! | status | authenticated | decision |
//! |--------|---------------|----------|
//! | `Loading` | any | `ShowLoading` |
//! | other | `false` | `Redirect(Login)` |
//! | other | `true` | `Render` |

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    /// Unix timestamp of registration
    pub joined_at: i64,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub status: AuthStatus,
    pub error: Option<String>,
}

impl AuthState {
    pub fn login(&mut self, user: User) {
        self.is_authenticated = true;
        self.user = Some(user);
        self.status = AuthStatus::Succeeded;
        self.error = None;
    }

    pub fn logout(&mut self) {
        *self = AuthState::default();
    }

    /// Merge fields into the current user. No-op when signed out.
    pub fn update_user(&mut self, update: UserUpdate) {
        if let Some(user) = self.user.as_mut() {
            if let Some(name) = update.display_name {
                user.display_name = name;
            }
            if let Some(email) = update.email {
                user.email = email;
            }
            if let Some(avatar) = update.avatar_url {
                user.avatar_url = avatar;
            }
        }
    }

    pub fn set_loading(&mut self) {
        self.status = AuthStatus::Loading;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.status = AuthStatus::Failed;
        self.error = Some(error.into());
    }
}

/// Where an unauthenticated visitor is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    ShowLoading,
    Redirect(RedirectTarget),
    Render,
}

/// Decide what a protected route shows for the given session.
pub fn guard(auth: &AuthState) -> GuardDecision {
    if auth.status == AuthStatus::Loading {
        return GuardDecision::ShowLoading;
    }
    if !auth.is_authenticated {
        return GuardDecision::Redirect(RedirectTarget::Login);
    }
    GuardDecision::Render
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            display_name: "Seeker".into(),
            email: "seeker@example.com".into(),
            avatar_url: None,
            joined_at: 0,
        }
    }

    #[test]
    fn guard_shows_loading_while_loading() {
        let mut auth = AuthState::default();
        auth.set_loading();
        assert_eq!(guard(&auth), GuardDecision::ShowLoading);

        // Loading wins even over an authenticated session
        auth.is_authenticated = true;
        assert_eq!(guard(&auth), GuardDecision::ShowLoading);
    }

    #[test]
    fn guard_redirects_when_signed_out() {
        let auth = AuthState::default();
        assert_eq!(guard(&auth), GuardDecision::Redirect(RedirectTarget::Login));

        let mut failed = AuthState::default();
        failed.set_error("bad password");
        assert_eq!(guard(&failed), GuardDecision::Redirect(RedirectTarget::Login));
    }

    #[test]
    fn guard_renders_when_signed_in() {
        let mut auth = AuthState::default();
        auth.login(user());
        assert_eq!(guard(&auth), GuardDecision::Render);
    }

    #[test]
    fn logout_resets_everything() {
        let mut auth = AuthState::default();
        auth.login(user());
        auth.logout();
        assert_eq!(auth, AuthState::default());
    }

    #[test]
    fn update_user_merges_fields() {
        let mut auth = AuthState::default();
        auth.login(user());
        auth.update_user(UserUpdate {
            display_name: Some("Oracle".into()),
            ..Default::default()
        });
        let u = auth.user.unwrap();
        assert_eq!(u.display_name, "Oracle");
        assert_eq!(u.email, "seeker@example.com");
    }

    #[test]
    fn update_user_without_session_is_noop() {
        let mut auth = AuthState::default();
        auth.update_user(UserUpdate {
            display_name: Some("Ghost".into()),
            ..Default::default()
        });
        assert!(auth.user.is_none());
    }

    #[test]
    fn set_error_marks_failed() {
        let mut auth = AuthState::default();
        auth.set_error("offline");
        assert_eq!(auth.status, AuthStatus::Failed);
        assert_eq!(auth.error.as_deref(), Some("offline"));
    }
}
