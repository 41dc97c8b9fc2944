use shared::{Category, ExpenseForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use crate::services::expense_editor::{self, ModalResult};
use crate::services::notifications::Notifier;

#[derive(Properties, PartialEq)]
pub struct ExpenseModalProps {
    pub is_open: bool,
    /// Starting values, blank for a new expense
    pub form: ExpenseForm,
    /// Selectable categories, already including the edited expense's own
    pub categories: Vec<Category>,
    pub api_client: ApiClient,
    pub notifier: Notifier,
    pub on_close: Callback<ModalResult>,
}

#[function_component(ExpenseModal)]
pub fn expense_modal(props: &ExpenseModalProps) -> Html {
    let form = use_state(|| props.form.clone());
    let is_submitting = use_state(|| false);
    let errors = use_state(Vec::<String>::new);

    // Reset state when the modal opens
    use_effect_with((props.is_open, props.form.clone()), {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let errors = errors.clone();
        move |(is_open, initial)| {
            if *is_open {
                form.set(initial.clone());
                is_submitting.set(false);
                errors.set(Vec::new());
            }
            || ()
        }
    });

    let on_name_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ExpenseForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_amount_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ExpenseForm {
                amount: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_date_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ExpenseForm {
                date: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            form.set(ExpenseForm {
                category_id: (!value.is_empty()).then_some(value),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let errors = errors.clone();
        let categories = props.categories.clone();
        let api_client = props.api_client.clone();
        let notifier = props.notifier.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            is_submitting.set(true);
            errors.set(Vec::new());

            let current = (*form).clone();
            let categories = categories.clone();
            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let is_submitting = is_submitting.clone();
            let errors = errors.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                match expense_editor::save_expense(&api_client, &notifier, &current, &categories).await {
                    Ok(_) => on_close.emit(ModalResult::Saved),
                    Err(ApiError::InvalidInput(invalid)) => {
                        errors.set(invalid.iter().map(|e| e.message()).collect());
                    }
                    Err(_) => {}
                }
                is_submitting.set(false);
            });
        })
    };

    let on_delete = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let api_client = props.api_client.clone();
        let notifier = props.notifier.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(id) = form.id.clone() else {
                return;
            };
            is_submitting.set(true);

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let is_submitting = is_submitting.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                if expense_editor::delete_expense(&api_client, &notifier, &id).await.is_ok() {
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
        Callback::from(move |_: MouseEvent| {
            on_close.emit(ModalResult::Cancelled);
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">
                    {if form.is_edit() { "Edit Expense" } else { "New Expense" }}
                </h3>

                {if errors.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="form-errors">
                            {for errors.iter().map(|error| html! { <li>{error}</li> })}
                        </ul>
                    }
                }}

                <form class="expense-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="expense-name">{"Name"}</label>
                        <input
                            id="expense-name"
                            type="text"
                            value={form.name.clone()}
                            onchange={on_name_change}
                            disabled={*is_submitting}
                            autofocus=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="expense-amount">{"Amount"}</label>
                        <input
                            id="expense-amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            value={form.amount.clone()}
                            onchange={on_amount_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="expense-date">{"Date"}</label>
                        <input
                            id="expense-date"
                            type="date"
                            value={form.date.clone()}
                            onchange={on_date_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="expense-category">{"Category"}</label>
                        <select id="expense-category" onchange={on_category_change} disabled={*is_submitting}>
                            <option value="" selected={form.category_id.is_none()}>{"No category"}</option>
                            {for props.categories.iter().map(|category| html! {
                                <option
                                    value={category.id.clone()}
                                    selected={form.category_id.as_deref() == Some(category.id.as_str())}
                                >
                                    {&category.name}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Saving..." } else { "Save" }}
                        </button>
                        {if form.is_edit() {
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
