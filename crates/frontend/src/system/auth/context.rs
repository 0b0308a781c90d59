use leptos::prelude::*;

use crate::shared::api_utils::ApiError;

use super::storage;

/// Session state threaded through the component tree. Transforms stay
/// token-free; only the I/O layer reads the token out of this state.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from localStorage on mount; the token is only
    // validated when the first authorized call goes out.
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login and store the session token
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = super::api::login(username, password).await?;

    storage::save_token(&response.access_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
    });

    Ok(())
}

/// Helper: Drop the session locally
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}

/// An expired session (401) already cleared the stored token; reset the
/// in-memory state too so the login surface reappears. Other errors pass
/// through untouched.
pub fn expire_if_unauthorized(set_auth_state: WriteSignal<AuthState>, error: &ApiError) {
    if matches!(error, ApiError::Unauthorized) {
        set_auth_state.set(AuthState::default());
    }
}
