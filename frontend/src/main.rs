use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod routes;
mod services;

use components::category_list::CategoryList;
use components::expense_list::ExpenseList;
use components::header::Header;
use components::login_prompt::LoginPrompt;
use components::toasts::Toasts;
use config::AppConfig;
use hooks::use_current_user::{use_current_user, AuthState};
use hooks::use_notifications::use_notifications;
use routes::{guard, login_href, return_url_from_query, Route, RouteDecision, DEFAULT_ROUTE};
use services::api::ApiClient;

/// Path and query of the page currently shown, e.g. `/expenses?x=1`
fn current_url() -> String {
    let location = gloo::utils::window().location();
    format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    )
}

fn current_route() -> Route {
    Route::from_path(&gloo::utils::window().location().pathname().unwrap_or_default())
}

fn update_history(url: &str, replace: bool) {
    let history = gloo::utils::history();
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(url))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(url))
    };
    if let Err(e) = result {
        log::warn!("Could not update browser history: {:?}", e);
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_build_env());
    let api_client = use_memo((), {
        let api_url = config.api_url.clone();
        move |_| ApiClient::with_base_url(api_url)
    });
    let notifications = use_notifications();
    let auth = use_current_user(&api_client);
    let route = use_state(current_route);

    // Keep the route in step with the back and forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "popstate", move |_| {
                route.set(current_route());
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            update_history(&target.path(), false);
            route.set(target);
        })
    };

    let decision = match &auth {
        AuthState::Checking => None,
        AuthState::SignedIn(user) => Some(guard(*route, Some(user), &current_url())),
        AuthState::SignedOut => Some(guard(*route, None, &current_url())),
    };

    // Redirects only touch the address bar once the user is known
    {
        let route = route.clone();
        use_effect_with((decision.clone(), auth.user().is_some()), move |(decision, signed_in)| {
            match decision {
                Some(RouteDecision::RedirectToLogin { return_url }) => {
                    update_history(&login_href(return_url.as_deref()), true);
                    route.set(Route::Login);
                }
                Some(RouteDecision::Allow(Route::Login)) if *signed_in => {
                    let search = gloo::utils::window().location().search().unwrap_or_default();
                    let target = return_url_from_query(&search)
                        .unwrap_or_else(|| DEFAULT_ROUTE.path());
                    update_history(&target, true);
                    route.set(Route::from_path(&target));
                }
                _ => {}
            }
            || ()
        });
    }

    let content = match decision {
        None => html! { <div class="loading">{"Checking sign-in..."}</div> },
        Some(RouteDecision::RedirectToLogin { return_url }) => html! {
            <LoginPrompt {return_url} />
        },
        Some(RouteDecision::Allow(Route::Login)) => {
            let search = gloo::utils::window().location().search().unwrap_or_default();
            html! { <LoginPrompt return_url={return_url_from_query(&search)} /> }
        }
        Some(RouteDecision::Allow(Route::Expenses)) => html! {
            <ExpenseList
                api_client={(*api_client).clone()}
                notifier={notifications.notifier.clone()}
                config={(*config).clone()}
            />
        },
        Some(RouteDecision::Allow(Route::Categories)) => html! {
            <CategoryList
                api_client={(*api_client).clone()}
                notifier={notifications.notifier.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <Header
                current_route={*route}
                user={auth.user().cloned()}
                on_navigate={on_navigate}
            />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
            <Toasts items={notifications.items} on_dismiss={notifications.dismiss} />
        </div>
    }
}

fn main() {
    services::logging::init();
    yew::Renderer::<App>::new().render();
}
