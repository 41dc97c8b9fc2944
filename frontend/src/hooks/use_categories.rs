use shared::{Category, CategoryCriteria};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{ApiClient, CategoryApi};
use crate::services::notifications::Notifier;

#[derive(Clone, PartialEq)]
pub struct CategoryState {
    pub categories: Vec<Category>,
    pub loading: bool,
}

pub struct UseCategoriesResult {
    pub state: CategoryState,
    pub refresh: Callback<()>,
}

/// Categories sorted by name, loaded on mount and on demand
#[hook]
pub fn use_categories(api_client: &ApiClient, notifier: &Notifier) -> UseCategoriesResult {
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let categories = categories.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let categories = categories.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_categories(&CategoryCriteria::default()).await {
                    Ok(loaded) => {
                        log::debug!("Loaded {} categories", loaded.len());
                        categories.set(loaded);
                    }
                    Err(e) => notifier.error("Failed to load categories", Some(&e)),
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseCategoriesResult {
        state: CategoryState {
            categories: (*categories).clone(),
            loading: *loading,
        },
        refresh,
    }
}
