use shared::{ensure_category_listed, Category, Expense, ExpenseForm, ExpenseGroup, YearMonth};
use yew::prelude::*;

use super::expense_filters::ExpenseFilterForm;
use super::expense_modal::ExpenseModal;
use crate::config::AppConfig;
use crate::hooks::use_categories::use_categories;
use crate::hooks::use_expense_list::{use_expense_list, ExpenseFilters};
use crate::services::api::ApiClient;
use crate::services::date_utils::{format_amount, format_group_heading, is_today};
use crate::services::expense_editor::ModalResult;
use crate::services::notifications::Notifier;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub api_client: ApiClient,
    pub notifier: Notifier,
    pub config: AppConfig,
}

/// What the expense modal was opened with
#[derive(Clone, PartialEq)]
struct ModalTarget {
    form: ExpenseForm,
    categories: Vec<Category>,
}

impl ModalTarget {
    /// New expenses start on the first day of the month being viewed
    fn create(year_month: YearMonth, categories: &[Category]) -> Self {
        Self {
            form: ExpenseForm::for_date(year_month.first_day()),
            categories: categories.to_vec(),
        }
    }

    fn edit(expense: &Expense, categories: &[Category]) -> Self {
        let mut categories = categories.to_vec();
        ensure_category_listed(&mut categories, expense.category.as_ref());
        Self {
            form: ExpenseForm::from_expense(expense),
            categories,
        }
    }
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    let list = use_expense_list(&props.api_client, &props.notifier, &props.config);
    let categories = use_categories(&props.api_client, &props.notifier);
    let modal = use_state(|| Option::<ModalTarget>::None);

    let state = list.state;
    let actions = list.actions;

    let on_previous = {
        let previous_month = actions.previous_month.clone();
        Callback::from(move |_: MouseEvent| previous_month.emit(()))
    };

    let on_next = {
        let next_month = actions.next_month.clone();
        Callback::from(move |_: MouseEvent| next_month.emit(()))
    };

    let on_load_more = {
        let load_more = actions.load_more.clone();
        Callback::from(move |_: MouseEvent| load_more.emit(()))
    };

    let on_add = {
        let modal = modal.clone();
        let all_categories = categories.state.categories.clone();
        let year_month = state.scope.year_month;
        Callback::from(move |_: MouseEvent| {
            modal.set(Some(ModalTarget::create(year_month, &all_categories)));
        })
    };

    let on_edit = {
        let modal = modal.clone();
        let all_categories = categories.state.categories.clone();
        Callback::from(move |expense: Expense| {
            modal.set(Some(ModalTarget::edit(&expense, &all_categories)));
        })
    };

    let on_modal_close = {
        let modal = modal.clone();
        let reload = actions.reload.clone();
        Callback::from(move |result: ModalResult| {
            modal.set(None);
            if result.requires_reload() {
                reload.emit(());
            }
        })
    };

    let applied = ExpenseFilters::from_scope(&state.scope);

    html! {
        <section class="expenses-section">
            <div class="expenses-toolbar">
                <div class="month-nav">
                    <button class="btn btn-secondary" onclick={on_previous}>{"‹"}</button>
                    <h2 class="month-label">{state.scope.year_month.label()}</h2>
                    <button class="btn btn-secondary" onclick={on_next}>{"›"}</button>
                </div>
                <button class="btn btn-primary" onclick={on_add}>{"Add expense"}</button>
            </div>

            <ExpenseFilterForm
                applied={applied}
                categories={categories.state.categories.clone()}
                on_apply={actions.apply_filters.clone()}
            />

            {match &state.groups {
                None => html! { <div class="loading">{"Loading expenses..."}</div> },
                Some(groups) if groups.is_empty() && !state.loading => html! {
                    <div class="empty-state">{"No expenses this month."}</div>
                },
                Some(groups) => html! {
                    <div class="expense-groups">
                        {for groups.iter().map(|group| render_group(group, &on_edit))}
                    </div>
                },
            }}

            {if state.loading && state.groups.is_some() {
                html! { <div class="loading">{"Loading more..."}</div> }
            } else if !state.last_page_reached && state.groups.is_some() {
                html! {
                    <button class="btn btn-secondary load-more" onclick={on_load_more}>
                        {"Load more"}
                    </button>
                }
            } else {
                html! {}
            }}

            {if let Some(target) = (*modal).clone() {
                html! {
                    <ExpenseModal
                        is_open={true}
                        form={target.form}
                        categories={target.categories}
                        api_client={props.api_client.clone()}
                        notifier={props.notifier.clone()}
                        on_close={on_modal_close}
                    />
                }
            } else {
                html! {}
            }}
        </section>
    }
}

fn render_group(group: &ExpenseGroup, on_edit: &Callback<Expense>) -> Html {
    let heading_class = if is_today(group.date) {
        "group-heading today"
    } else {
        "group-heading"
    };

    html! {
        <div class="expense-group" key={group.date.to_string()}>
            <div class={heading_class}>
                <span class="group-date">{format_group_heading(group.date)}</span>
                <span class="group-total">{format_amount(group.total())}</span>
            </div>
            <ul class="expense-items">
                {for group.expenses.iter().map(|expense| {
                    let onclick = {
                        let on_edit = on_edit.clone();
                        let expense = expense.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                    };

                    html! {
                        <li class="expense-item" key={expense.id.clone()} {onclick}>
                            <span class="expense-name">{&expense.name}</span>
                            {match &expense.category {
                                Some(category) => html! {
                                    <span
                                        class="expense-category"
                                        style={category.color.as_ref().map(|c| format!("background-color: {}", c))}
                                    >
                                        {&category.name}
                                    </span>
                                },
                                None => html! {},
                            }}
                            <span class="expense-amount">{format_amount(expense.amount)}</span>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
