use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;

use super::storage;

/// In-memory session identity. Tokens live in local storage and are read
/// by the HTTP layer at send time; the context only carries who is signed
/// in.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Auth context provider component.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from the stored user. There is no current-user
    // endpoint; a stale token gets invalidated by the first 401.
    let (auth_state, set_auth_state) = signal(AuthState {
        user: storage::get_user(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a successful login and flip the auth gate.
pub fn apply_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    storage::save_session(&response.user, &response.access, &response.refresh);
    set_auth_state.set(AuthState {
        user: Some(response.user),
    });
}

/// Clear the session everywhere. The backend holds no client session to
/// revoke; dropping the tokens is the whole logout.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

/// Current user snapshot, untracked. For call sites that need the role at
/// event time rather than reactively.
pub fn current_user(auth_state: ReadSignal<AuthState>) -> Option<UserInfo> {
    auth_state.with_untracked(|state| state.user.clone())
}
