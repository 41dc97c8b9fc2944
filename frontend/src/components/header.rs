use shared::User;
use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: Route,
    pub user: Option<User>,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_link = |route: Route, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(route);
        });
        let class = if props.current_route == route {
            "nav-link active"
        } else {
            "nav-link"
        };

        html! {
            <a href={route.path()} {class} {onclick}>{label}</a>
        }
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Expense Tracker"}</h1>
                <div class="header-right">
                    {if props.user.is_some() {
                        html! {
                            <nav class="header-nav">
                                {nav_link(Route::Expenses, "Expenses")}
                                {nav_link(Route::Categories, "Categories")}
                            </nav>
                        }
                    } else {
                        html! {}
                    }}
                    <span class="header-user">
                        {match &props.user {
                            Some(user) => user
                                .name
                                .clone()
                                .or_else(|| user.email.clone())
                                .unwrap_or_else(|| user.id.clone()),
                            None => String::new(),
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
