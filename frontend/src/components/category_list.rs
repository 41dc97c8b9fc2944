use shared::Category;
use yew::prelude::*;

use super::category_modal::CategoryModal;
use crate::hooks::use_categories::use_categories;
use crate::services::api::ApiClient;
use crate::services::expense_editor::ModalResult;
use crate::services::notifications::Notifier;

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub api_client: ApiClient,
    pub notifier: Notifier,
}

#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    let categories = use_categories(&props.api_client, &props.notifier);
    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Category>::None);

    let on_add = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            modal_open.set(true);
        })
    };

    let on_modal_close = {
        let modal_open = modal_open.clone();
        let refresh = categories.refresh.clone();
        Callback::from(move |result: ModalResult| {
            modal_open.set(false);
            if result.requires_reload() {
                refresh.emit(());
            }
        })
    };

    html! {
        <section class="categories-section">
            <div class="categories-toolbar">
                <h2>{"Categories"}</h2>
                <button class="btn btn-primary" onclick={on_add}>{"Add category"}</button>
            </div>

            {if categories.state.loading && categories.state.categories.is_empty() {
                html! { <div class="loading">{"Loading categories..."}</div> }
            } else if categories.state.categories.is_empty() {
                html! { <div class="empty-state">{"No categories yet."}</div> }
            } else {
                html! {
                    <ul class="category-items">
                        {for categories.state.categories.iter().map(|category| {
                            let onclick = {
                                let modal_open = modal_open.clone();
                                let editing = editing.clone();
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| {
                                    editing.set(Some(category.clone()));
                                    modal_open.set(true);
                                })
                            };
                            let swatch = category
                                .color
                                .as_ref()
                                .map(|color| format!("background-color: {}", color));

                            html! {
                                <li class="category-item" key={category.id.clone()} {onclick}>
                                    <span class="category-swatch" style={swatch}></span>
                                    <span class="category-name">{&category.name}</span>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}

            <CategoryModal
                is_open={*modal_open}
                category={(*editing).clone()}
                api_client={props.api_client.clone()}
                notifier={props.notifier.clone()}
                on_close={on_modal_close}
            />
        </section>
    }
}
