use shared::{Category, SortOption};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_expense_list::ExpenseFilters;

#[derive(Properties, PartialEq)]
pub struct ExpenseFiltersProps {
    /// Filters currently applied to the list
    pub applied: ExpenseFilters,
    pub categories: Vec<Category>,
    pub on_apply: Callback<ExpenseFilters>,
}

fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

#[function_component(ExpenseFilterForm)]
pub fn expense_filter_form(props: &ExpenseFiltersProps) -> Html {
    let draft = use_state(|| props.applied.clone());

    // Follow the applied filters when they change from outside
    use_effect_with(props.applied.clone(), {
        let draft = draft.clone();
        move |applied| {
            draft.set(applied.clone());
            || ()
        }
    });

    let on_search_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ExpenseFilters {
                search: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_sort_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let sort = SortOption::from_param(&select.value()).unwrap_or_default();
            draft.set(ExpenseFilters {
                sort,
                ..(*draft).clone()
            });
        })
    };

    let on_categories_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(ExpenseFilters {
                category_ids: selected_values(&select),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_apply.emit((*draft).clone());
        })
    };

    let on_clear = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ExpenseFilters::default());
            on_apply.emit(ExpenseFilters::default());
        })
    };

    html! {
        <form class="expense-filters" onsubmit={on_submit}>
            <input
                type="search"
                class="filter-search"
                placeholder="Search by name"
                value={draft.search.clone()}
                oninput={on_search_input}
            />
            <select class="filter-sort" onchange={on_sort_change}>
                {for SortOption::ALL.iter().map(|option| html! {
                    <option
                        value={option.as_param()}
                        selected={*option == draft.sort}
                    >
                        {option.label()}
                    </option>
                })}
            </select>
            <select class="filter-categories" multiple=true onchange={on_categories_change}>
                {for props.categories.iter().map(|category| html! {
                    <option
                        value={category.id.clone()}
                        selected={draft.category_ids.contains(&category.id)}
                    >
                        {&category.name}
                    </option>
                })}
            </select>
            <button type="submit" class="btn btn-primary">{"Apply"}</button>
            <button type="button" class="btn btn-secondary" onclick={on_clear}>{"Clear"}</button>
        </form>
    }
}
