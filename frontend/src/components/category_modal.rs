use shared::{Category, CategoryUpsertRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use crate::services::expense_editor::{self, ModalResult};
use crate::services::notifications::Notifier;

const DEFAULT_COLOR: &str = "#4caf50";

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub is_open: bool,
    /// `None` creates a new category
    pub category: Option<Category>,
    pub api_client: ApiClient,
    pub notifier: Notifier,
    pub on_close: Callback<ModalResult>,
}

#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    let name = use_state(String::new);
    let color = use_state(|| DEFAULT_COLOR.to_string());
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    use_effect_with((props.is_open, props.category.clone()), {
        let name = name.clone();
        let color = color.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        move |(is_open, category)| {
            if *is_open {
                name.set(category.as_ref().map(|c| c.name.clone()).unwrap_or_default());
                color.set(
                    category
                        .as_ref()
                        .and_then(|c| c.color.clone())
                        .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                );
                is_submitting.set(false);
                error_message.set(None);
            }
            || ()
        }
    });

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_color_change = {
        let color = color.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            color.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let color = color.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let id = props.category.as_ref().map(|c| c.id.clone());
        let api_client = props.api_client.clone();
        let notifier = props.notifier.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = CategoryUpsertRequest {
                id: id.clone(),
                name: name.trim().to_string(),
                color: Some((*color).clone()),
            };
            is_submitting.set(true);
            error_message.set(None);

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                match expense_editor::save_category(&api_client, &notifier, &request).await {
                    Ok(_) => on_close.emit(ModalResult::Saved),
                    Err(ApiError::InvalidCategory(error)) => error_message.set(Some(error.message())),
                    Err(_) => {}
                }
                is_submitting.set(false);
            });
        })
    };

    let on_delete = {
        let is_submitting = is_submitting.clone();
        let id = props.category.as_ref().map(|c| c.id.clone());
        let api_client = props.api_client.clone();
        let notifier = props.notifier.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(id) = id.clone() else {
                return;
            };
            is_submitting.set(true);

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let is_submitting = is_submitting.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                if expense_editor::delete_category(&api_client, &notifier, &id).await.is_ok() {
                    on_close.emit(ModalResult::Deleted);
                }
                is_submitting.set(false);
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(ModalResult::Cancelled);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(ModalResult::Cancelled))
    };

    if !props.is_open {
        return html! {};
    }

    let is_edit = props.category.is_some();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{if is_edit { "Edit Category" } else { "New Category" }}</h3>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-errors">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="category-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="category-name">{"Name"}</label>
                        <input
                            id="category-name"
                            type="text"
                            maxlength="40"
                            value={(*name).clone()}
                            onchange={on_name_change}
                            disabled={*is_submitting}
                            autofocus=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="category-color">{"Color"}</label>
                        <input
                            id="category-color"
                            type="color"
                            value={(*color).clone()}
                            onchange={on_color_change}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Saving..." } else { "Save" }}
                        </button>
                        {if is_edit {
                            html! {
                                <button
                                    type="button"
                                    class="btn btn-danger"
                                    onclick={on_delete}
                                    disabled={*is_submitting}
                                >
                                    {"Delete"}
                                </button>
                            }
                        } else {
                            html! {}
                        }}
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
