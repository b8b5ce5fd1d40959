use contracts::system::auth::{AuthResponse, LoginRequest};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api::{ApiClient, ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session restore in progress
    Checking,
    Authenticated,
    NotAuthenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<User>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            status: AuthStatus::Checking,
            user: None,
        }
    }
}

impl AuthState {
    pub fn authenticated(user: User) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            user: Some(user),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            status: AuthStatus::NotAuthenticated,
            user: None,
        }
    }

    /// State after a login or check-status round trip
    pub fn from_result(result: &Result<AuthResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Self::authenticated(response.user.clone()),
            Err(_) => Self::anonymous(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Session of the current visitor, provided through context by `App`
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    login_open: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            login_open: RwSignal::new(false),
        }
    }

    pub fn state(&self) -> Signal<AuthState> {
        self.state.into()
    }

    pub fn status(&self) -> AuthStatus {
        self.state.with(|s| s.status)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(AuthState::is_admin)
    }

    pub fn login_open(&self) -> bool {
        self.login_open.get()
    }

    pub fn open_login(&self) {
        self.login_open.set(true);
    }

    pub fn close_login(&self) {
        self.login_open.set(false);
    }

    /// Restore the session from the stored token
    pub fn check_auth(&self, client: ApiClient) {
        let state = self.state;
        state.set(AuthState::default());
        spawn_local(async move {
            let result = api::restore_session(&client, storage::get_access_token()).await;
            match &result {
                Ok(response) => {
                    storage::save_access_token(&response.token);
                    log::info!("Session restored for {}", response.user.email);
                }
                Err(ApiError::NoSession) => {}
                Err(e) => {
                    log::warn!("Session restore failed: {}", e);
                    storage::clear_tokens();
                }
            }
            state.set(AuthState::from_result(&result));
        });
    }

    pub async fn login(
        &self,
        client: &ApiClient,
        email: String,
        password: String,
    ) -> Result<User, ApiError> {
        let response = api::login(client, &LoginRequest { email, password }).await?;
        storage::save_access_token(&response.token);
        log::info!("Logged in as {}", response.user.email);
        self.state.set(AuthState::authenticated(response.user.clone()));
        self.login_open.set(false);
        Ok(response.user)
    }

    pub fn logout(&self) {
        storage::clear_tokens();
        self.state.set(AuthState::anonymous());
        log::info!("Logged out");
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UserRole;

    fn user(role_id: i64) -> User {
        User {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Vera".into(),
            email: "ana@agromar.ec".into(),
            user_role: vec![UserRole { role_id, role: None }],
        }
    }

    #[test]
    fn test_initial_state_is_checking() {
        let state = AuthState::default();
        assert_eq!(state.status, AuthStatus::Checking);
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_admin_requires_authenticated_admin() {
        assert!(AuthState::authenticated(user(1)).is_admin());
        assert!(!AuthState::authenticated(user(2)).is_admin());

        let stale = AuthState {
            status: AuthStatus::NotAuthenticated,
            user: Some(user(1)),
        };
        assert!(!stale.is_admin());
    }

    #[test]
    fn test_state_from_result() {
        let ok = Ok(AuthResponse {
            token: "t".into(),
            user: user(3),
        });
        assert_eq!(AuthState::from_result(&ok), AuthState::authenticated(user(3)));
        assert_eq!(
            AuthState::from_result(&Err(ApiError::NoSession)),
            AuthState::anonymous()
        );
    }
}
