use contracts::system::auth::{LoginRequest, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Optimistic restore: the shell renders at once from the cached profile
    // and is dropped back to login if the token turns out to be rejected.
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
        user_info: storage::get_user(),
    });

    Effect::new(move |_| {
        if auth_state.with_untracked(|s| s.access_token.is_none()) {
            return;
        }
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user_info) => {
                    storage::save_user(&user_info);
                    set_auth_state.update(|s| s.user_info = Some(user_info));
                }
                Err(e) => {
                    log::warn!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
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

/// Helper: Perform login
pub async fn do_login(
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let request = request.validate().map_err(|e| e.to_string())?;
    let response = api::login(&request).await?;

    storage::save_access_token(&response.token);
    storage::save_user(&response.user);

    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
