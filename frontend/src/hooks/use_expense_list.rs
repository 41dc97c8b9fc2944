use std::future::Future;
use std::rc::Rc;

use shared::{SortOption, YearMonth};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::api::ApiClient;
use crate::services::expense_pager::{
    ExpensePager, ExpenseScope, LoadOutcome, PagerSnapshot, PagerState,
};
use crate::services::notifications::Notifier;

/// Values of the search/sort/category filter bar
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseFilters {
    pub search: String,
    pub sort: SortOption,
    pub category_ids: Vec<String>,
}

impl ExpenseFilters {
    pub fn from_scope(scope: &ExpenseScope) -> Self {
        Self {
            search: scope.name.clone().unwrap_or_default(),
            sort: scope.sort,
            category_ids: scope.category_ids.clone(),
        }
    }

    /// Scope for `year_month` with these filters applied
    pub fn to_scope(&self, year_month: YearMonth) -> ExpenseScope {
        let search = self.search.trim();
        ExpenseScope {
            year_month,
            name: (!search.is_empty()).then(|| search.to_string()),
            category_ids: self.category_ids.clone(),
            sort: self.sort,
        }
    }
}

pub struct UseExpenseListResult {
    pub state: PagerSnapshot,
    pub actions: UseExpenseListActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpenseListActions {
    pub previous_month: Callback<()>,
    pub next_month: Callback<()>,
    pub apply_filters: Callback<ExpenseFilters>,
    /// Start the current scope over (pull-to-refresh, after save/delete)
    pub reload: Callback<()>,
    pub load_more: Callback<()>,
}

type Pager = Rc<ExpensePager<ApiClient>>;

fn spawn_pager<F, Fut>(pager: &Pager, action: F)
where
    F: FnOnce(Pager) -> Fut + 'static,
    Fut: Future<Output = LoadOutcome> + 'static,
{
    let pager = pager.clone();
    spawn_local(async move {
        let outcome = action(pager).await;
        log::debug!("Expense list load finished: {:?}", outcome);
    });
}

#[hook]
pub fn use_expense_list(
    api_client: &ApiClient,
    notifier: &Notifier,
    config: &AppConfig,
) -> UseExpenseListResult {
    let rerender = use_force_update();

    let pager: Pager = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let config = config.clone();
        let rerender = rerender.clone();
        use_memo((), move |_| {
            let state = PagerState::from_config(
                ExpenseScope::for_month(YearMonth::current()),
                &config,
            );
            ExpensePager::new(api_client, notifier, state)
                .with_observer(Callback::from(move |_| rerender.force_update()))
        })
    };

    // First load on mount
    {
        let pager = pager.clone();
        use_effect_with((), move |_| {
            spawn_pager(&pager, |pager| async move { pager.reload().await });
            || ()
        });
    }

    let previous_month = {
        let pager = pager.clone();
        use_callback((), move |_, _| {
            spawn_pager(&pager, |pager| async move { pager.change_month(-1).await });
        })
    };

    let next_month = {
        let pager = pager.clone();
        use_callback((), move |_, _| {
            spawn_pager(&pager, |pager| async move { pager.change_month(1).await });
        })
    };

    let apply_filters = {
        let pager = pager.clone();
        use_callback((), move |filters: ExpenseFilters, _| {
            let year_month = pager.snapshot().scope.year_month;
            let scope = filters.to_scope(year_month);
            spawn_pager(&pager, move |pager| async move { pager.change_scope(scope).await });
        })
    };

    let reload = {
        let pager = pager.clone();
        use_callback((), move |_, _| {
            spawn_pager(&pager, |pager| async move { pager.reload().await });
        })
    };

    let load_more = {
        let pager = pager.clone();
        use_callback((), move |_, _| {
            spawn_pager(&pager, |pager| async move { pager.load_more().await });
        })
    };

    UseExpenseListResult {
        state: pager.snapshot(),
        actions: UseExpenseListActions {
            previous_month,
            next_month,
            apply_filters,
            reload,
            load_more,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_to_scope_trims_search() {
        let filters = ExpenseFilters {
            search: "  coffee  ".to_string(),
            sort: SortOption::NameDesc,
            category_ids: vec!["c1".to_string()],
        };
        let may = YearMonth::new(2024, 5).unwrap();
        let scope = filters.to_scope(may);

        assert_eq!(scope.name.as_deref(), Some("coffee"));
        assert_eq!(scope.sort, SortOption::NameDesc);
        assert_eq!(scope.year_month, may);
        assert_eq!(ExpenseFilters::from_scope(&scope).search, "coffee");
    }

    #[test]
    fn test_blank_search_clears_name_filter() {
        let filters = ExpenseFilters {
            search: "   ".to_string(),
            ..ExpenseFilters::default()
        };
        let scope = filters.to_scope(YearMonth::new(2024, 1).unwrap());
        assert!(scope.name.is_none());
        assert_eq!(scope.sort, SortOption::DateDesc);
    }
}
