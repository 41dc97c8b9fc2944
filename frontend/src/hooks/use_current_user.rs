use shared::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Checking,
    SignedIn(User),
    SignedOut,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Ask the API once who is signed in. Any failure counts as signed out.
#[hook]
pub fn use_current_user(api_client: &ApiClient) -> AuthState {
    let auth = use_state(|| AuthState::Checking);

    {
        let api_client = api_client.clone();
        let auth = auth.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let state = match api_client.current_user().await {
                    Ok(Some(user)) => AuthState::SignedIn(user),
                    Ok(None) => AuthState::SignedOut,
                    Err(e) => {
                        log::warn!("Could not determine current user: {}", e);
                        AuthState::SignedOut
                    }
                };
                auth.set(state);
            });
            || ()
        });
    }

    (*auth).clone()
}
