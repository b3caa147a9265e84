use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

/// Restores the session from storage synchronously; there is no token
/// refresh, so a stale token is only discovered by the first 401.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let restored = match storage::get_token() {
        Some(token) => AuthState {
            access_token: Some(token),
            user_info: storage::get_user(),
        },
        None => AuthState::default(),
    };
    let (auth_state, set_auth_state) = signal(restored);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn sign_in(set_auth_state: WriteSignal<AuthState>, response: LoginResponse) {
    storage::save_session(&response.token, &response.user);
    log::info!("Signed in as {}", response.user.username);
    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(response.user),
    });
}

/// Local sign-out; the API keeps no session to revoke.
pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
