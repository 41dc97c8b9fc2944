//! Incremental, date-grouped loading of the monthly expense list.
//!
//! [`PagerState`] is the synchronous state machine: it knows which page to ask
//! for next, merges responses into date groups and decides when to stop.
//! [`ExpensePager`] drives it against an [`ExpenseApi`] with a plain loop.
//!
//! Every load sequence runs under a generation number. Changing the scope
//! starts a new generation, so responses that arrive for an older one are
//! dropped instead of being merged into the new month's list.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use yew::Callback;
use shared::{
    group_by_date, merge_groups, Expense, ExpenseCriteria, ExpenseGroup, Page, SortOption,
    YearMonth,
};

use super::api::ExpenseApi;
use super::error::ApiError;
use super::notifications::Notifier;
use crate::config::AppConfig;

/// One fixed combination of month and filters
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseScope {
    pub year_month: YearMonth,
    pub name: Option<String>,
    pub category_ids: Vec<String>,
    pub sort: SortOption,
}

impl ExpenseScope {
    pub fn for_month(year_month: YearMonth) -> Self {
        Self {
            year_month,
            name: None,
            category_ids: Vec::new(),
            sort: SortOption::default(),
        }
    }

    /// Same filters, different month
    pub fn with_month(&self, year_month: YearMonth) -> Self {
        Self {
            year_month,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerPhase {
    Idle,
    Loading,
}

/// Proof that a load sequence was started for a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Answer to a "load more" request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    Started(LoadTicket),
    /// The server already reported the last page
    Exhausted,
    /// A load is in flight
    Busy,
}

/// What the state machine wants after merging a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Too few groups and more data available: fetch the next page now
    Continue,
    Done,
    /// The response belongs to a superseded generation and was dropped
    Stale,
}

/// How a driver call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Completed,
    Exhausted,
    Busy,
    Superseded,
    Failed,
}

/// Pagination state for one scope at a time
#[derive(Debug, Clone)]
pub struct PagerState {
    scope: ExpenseScope,
    generation: u64,
    /// Page the next request asks for; only advances once a page is applied
    next_page: u32,
    last_page_reached: bool,
    groups: Option<Vec<ExpenseGroup>>,
    phase: PagerPhase,
    page_size: u32,
    min_groups: usize,
}

impl PagerState {
    pub fn new(scope: ExpenseScope, page_size: u32, min_groups: usize) -> Self {
        Self {
            scope,
            generation: 0,
            next_page: 0,
            last_page_reached: false,
            groups: None,
            phase: PagerPhase::Idle,
            page_size,
            min_groups,
        }
    }

    pub fn from_config(scope: ExpenseScope, config: &AppConfig) -> Self {
        Self::new(scope, config.page_size, config.min_visible_groups)
    }

    pub fn scope(&self) -> &ExpenseScope {
        &self.scope
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PagerPhase::Loading
    }

    /// Switch to `scope` and start over. Page counter, groups and terminal
    /// flag are cleared together; any in-flight sequence becomes stale.
    pub fn reset(&mut self, scope: ExpenseScope) -> LoadTicket {
        self.scope = scope;
        self.generation += 1;
        self.next_page = 0;
        self.groups = None;
        self.last_page_reached = false;
        self.phase = PagerPhase::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Start over with the current scope
    pub fn refresh(&mut self) -> LoadTicket {
        let scope = self.scope.clone();
        self.reset(scope)
    }

    pub fn begin_load_more(&mut self) -> LoadMore {
        if self.last_page_reached {
            return LoadMore::Exhausted;
        }
        if self.phase == PagerPhase::Loading {
            return LoadMore::Busy;
        }

        self.phase = PagerPhase::Loading;
        LoadMore::Started(LoadTicket {
            generation: self.generation,
        })
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Query for the ticket's next page, `None` once the ticket is stale
    pub fn criteria_for(&self, ticket: &LoadTicket) -> Option<ExpenseCriteria> {
        if !self.is_current(ticket) {
            return None;
        }

        Some(ExpenseCriteria {
            year_month: self.scope.year_month,
            page: self.next_page,
            size: self.page_size,
            sort: self.scope.sort,
            name: self.scope.name.clone(),
            category_ids: self.scope.category_ids.clone(),
        })
    }

    pub fn apply_page(&mut self, ticket: &LoadTicket, page: Page<Expense>) -> PageOutcome {
        if !self.is_current(ticket) {
            debug!(
                "Dropping page {} of stale generation {} (current {})",
                page.number, ticket.generation, self.generation
            );
            return PageOutcome::Stale;
        }

        let received = page.content.len();
        self.next_page += 1;
        let groups = self.groups.get_or_insert_with(Vec::new);
        merge_groups(groups, group_by_date(page.content));

        if !page.last && received > 0 && groups.len() < self.min_groups {
            debug!(
                "Only {} date groups after page {}, loading page {}",
                groups.len(),
                page.number,
                self.next_page
            );
            return PageOutcome::Continue;
        }

        self.last_page_reached = page.last;
        self.phase = PagerPhase::Idle;
        PageOutcome::Done
    }

    /// End the sequence after an error. The failed page stays next in line.
    /// Returns false for a stale ticket, which must not clear the busy flag of
    /// the newer sequence.
    pub fn fail(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = PagerPhase::Idle;
        true
    }

    pub fn snapshot(&self) -> PagerSnapshot {
        PagerSnapshot {
            scope: self.scope.clone(),
            groups: self.groups.clone(),
            loading: self.is_loading(),
            last_page_reached: self.last_page_reached,
        }
    }
}

/// Read-only copy of the state for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct PagerSnapshot {
    pub scope: ExpenseScope,
    pub groups: Option<Vec<ExpenseGroup>>,
    pub loading: bool,
    pub last_page_reached: bool,
}

/// Async driver around [`PagerState`]
pub struct ExpensePager<A> {
    api: A,
    notifier: Notifier,
    state: Rc<RefCell<PagerState>>,
    on_change: Option<Callback<()>>,
}

impl<A: Clone> Clone for ExpensePager<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<A: ExpenseApi> ExpensePager<A> {
    pub fn new(api: A, notifier: Notifier, state: PagerState) -> Self {
        Self {
            api,
            notifier,
            state: Rc::new(RefCell::new(state)),
            on_change: None,
        }
    }

    /// Called after every state transition so a view can re-render
    pub fn with_observer(mut self, on_change: Callback<()>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    fn changed(&self) {
        if let Some(on_change) = &self.on_change {
            on_change.emit(());
        }
    }

    pub fn snapshot(&self) -> PagerSnapshot {
        self.state.borrow().snapshot()
    }

    pub async fn change_scope(&self, scope: ExpenseScope) -> LoadOutcome {
        info!("Loading expenses for {} ({:?})", scope.year_month, scope.sort);
        let ticket = self.state.borrow_mut().reset(scope);
        self.changed();
        self.load(ticket).await
    }

    /// Navigate by whole months, keeping the filters
    pub async fn change_month(&self, delta: i32) -> LoadOutcome {
        let scope = {
            let state = self.state.borrow();
            let scope = state.scope();
            scope.with_month(scope.year_month.add_months(delta))
        };
        self.change_scope(scope).await
    }

    pub async fn reload(&self) -> LoadOutcome {
        let ticket = self.state.borrow_mut().refresh();
        self.changed();
        self.load(ticket).await
    }

    /// User-triggered next page. Returns immediately when there is nothing
    /// more to load or a load is already running.
    pub async fn load_more(&self) -> LoadOutcome {
        let request = self.state.borrow_mut().begin_load_more();
        match request {
            LoadMore::Started(ticket) => {
                self.changed();
                self.load(ticket).await
            }
            LoadMore::Exhausted => LoadOutcome::Exhausted,
            LoadMore::Busy => LoadOutcome::Busy,
        }
    }

    /// Fetch pages for `ticket` until the state machine is satisfied
    pub async fn load(&self, ticket: LoadTicket) -> LoadOutcome {
        loop {
            let criteria = match self.state.borrow().criteria_for(&ticket) {
                Some(criteria) => criteria,
                None => return LoadOutcome::Superseded,
            };

            let page = match self.api.list_expenses(&criteria).await {
                Ok(page) => page,
                Err(error) => return self.handle_failure(&ticket, &error),
            };

            let outcome = self.state.borrow_mut().apply_page(&ticket, page);
            if outcome != PageOutcome::Stale {
                self.changed();
            }
            match outcome {
                PageOutcome::Continue => continue,
                PageOutcome::Done => return LoadOutcome::Completed,
                PageOutcome::Stale => return LoadOutcome::Superseded,
            }
        }
    }

    fn handle_failure(&self, ticket: &LoadTicket, error: &ApiError) -> LoadOutcome {
        let current = self.state.borrow_mut().fail(ticket);
        if !current {
            debug!("Ignoring failure of stale generation {}", ticket.generation());
            return LoadOutcome::Superseded;
        }
        self.changed();
        self.notifier.error("Failed to load expenses", Some(error));
        LoadOutcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::testing::recording_notifier;
    use crate::services::notifications::NotificationKind;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use shared::ExpenseUpsertRequest;
    use std::collections::VecDeque;

    fn may_2024() -> ExpenseScope {
        ExpenseScope::for_month(YearMonth::new(2024, 5).unwrap())
    }

    fn expense(id: u32, date: &str) -> Expense {
        Expense {
            id: id.to_string(),
            name: format!("Expense {}", id),
            amount: 10.0,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: None,
            created_at: None,
        }
    }

    /// `count` expenses starting at `first_id`, all on `date`
    fn same_day(first_id: u32, count: u32, date: &str) -> Vec<Expense> {
        (first_id..first_id + count).map(|id| expense(id, date)).collect()
    }

    /// One expense per day, `days` distinct dates starting at `first_day` of May 2024
    fn one_per_day(first_id: u32, first_day: u32, days: u32) -> Vec<Expense> {
        (0..days)
            .map(|offset| expense(first_id + offset, &format!("2024-05-{:02}", first_day + offset)))
            .collect()
    }

    /// Scripted API: answers list calls from a queue and records every request
    #[derive(Clone, Default)]
    struct ScriptedApi {
        responses: Rc<RefCell<VecDeque<Result<Page<Expense>, ApiError>>>>,
        requests: Rc<RefCell<Vec<ExpenseCriteria>>>,
    }

    impl ScriptedApi {
        fn with(responses: Vec<Result<Page<Expense>, ApiError>>) -> Self {
            Self {
                responses: Rc::new(RefCell::new(responses.into())),
                requests: Rc::default(),
            }
        }

        fn pages(&self) -> Vec<u32> {
            self.requests.borrow().iter().map(|c| c.page).collect()
        }
    }

    #[async_trait(?Send)]
    impl ExpenseApi for ScriptedApi {
        async fn list_expenses(&self, criteria: &ExpenseCriteria) -> Result<Page<Expense>, ApiError> {
            self.requests.borrow_mut().push(criteria.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Page::new(vec![], criteria.page, true)))
        }

        async fn upsert_expense(&self, _request: &ExpenseUpsertRequest) -> Result<Expense, ApiError> {
            unimplemented!("not used by the pager")
        }

        async fn delete_expense(&self, _id: &str) -> Result<(), ApiError> {
            unimplemented!("not used by the pager")
        }
    }

    fn pager(api: ScriptedApi) -> ExpensePager<ScriptedApi> {
        let (notifier, _) = recording_notifier();
        ExpensePager::new(api, notifier, PagerState::new(may_2024(), 10, 10))
    }

    #[test]
    fn test_reset_clears_counter_groups_and_flag_together() {
        let mut state = PagerState::new(may_2024(), 10, 1);
        let ticket = state.reset(may_2024());
        assert_eq!(state.apply_page(&ticket, Page::new(one_per_day(1, 1, 3), 0, true)), PageOutcome::Done);
        assert!(state.last_page_reached);
        assert!(state.groups.is_some());

        state.next_page = 4;
        let june = may_2024().with_month(YearMonth::new(2024, 6).unwrap());
        state.reset(june.clone());

        assert_eq!(state.next_page, 0);
        assert!(state.groups.is_none());
        assert!(!state.last_page_reached);
        assert!(state.is_loading());
        assert_eq!(state.scope(), &june);
    }

    #[test]
    fn test_sparse_page_requests_next_page() {
        let mut state = PagerState::new(may_2024(), 10, 10);
        let ticket = state.reset(may_2024());

        let outcome = state.apply_page(&ticket, Page::new(same_day(1, 10, "2024-05-01"), 0, false));
        assert_eq!(outcome, PageOutcome::Continue);
        assert_eq!(state.next_page, 1);
        assert_eq!(state.criteria_for(&ticket).unwrap().page, 1);
        assert!(state.is_loading());
    }

    #[test]
    fn test_empty_non_last_page_stops_without_terminal_flag() {
        let mut state = PagerState::new(may_2024(), 10, 10);
        let ticket = state.reset(may_2024());

        assert_eq!(state.apply_page(&ticket, Page::new(vec![], 0, false)), PageOutcome::Done);
        assert!(!state.last_page_reached);
        assert_eq!(state.groups, Some(vec![]));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut state = PagerState::new(may_2024(), 10, 10);
        let old = state.reset(may_2024());
        let new = state.refresh();

        assert!(state.criteria_for(&old).is_none());
        assert_eq!(
            state.apply_page(&old, Page::new(one_per_day(1, 1, 5), 0, true)),
            PageOutcome::Stale
        );
        assert!(state.groups.is_none());
        assert!(!state.fail(&old));
        assert!(state.is_loading());
        assert_eq!(new.generation(), old.generation() + 1);
    }

    #[test]
    fn test_load_more_guards() {
        let mut state = PagerState::new(may_2024(), 10, 1);
        let ticket = state.reset(may_2024());
        assert_eq!(state.begin_load_more(), LoadMore::Busy);

        state.apply_page(&ticket, Page::new(one_per_day(1, 1, 2), 0, false));
        match state.begin_load_more() {
            LoadMore::Started(more) => assert_eq!(state.criteria_for(&more).unwrap().page, 1),
            other => panic!("expected Started, got {:?}", other),
        }
        assert_eq!(state.begin_load_more(), LoadMore::Busy);
    }

    #[test]
    fn test_load_more_after_last_page_is_exhausted() {
        let mut state = PagerState::new(may_2024(), 10, 10);
        let ticket = state.reset(may_2024());
        state.apply_page(&ticket, Page::new(one_per_day(1, 1, 3), 0, true));

        assert_eq!(state.begin_load_more(), LoadMore::Exhausted);
        assert_eq!(state.next_page, 1);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_single_day_first_page_triggers_second_request() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(same_day(1, 10, "2024-05-01"), 0, false)),
            Ok(Page::new(one_per_day(11, 2, 10), 1, false)),
        ]);
        let pager = pager(api.clone());

        assert_eq!(pager.change_scope(may_2024()).await, LoadOutcome::Completed);
        assert_eq!(api.pages(), vec![0, 1]);

        let snapshot = pager.snapshot();
        assert_eq!(snapshot.groups.as_ref().unwrap().len(), 11);
        assert!(!snapshot.loading);
        assert!(!snapshot.last_page_reached);
    }

    #[tokio::test]
    async fn test_auto_continues_until_enough_groups() {
        // 3 + 3 + 3 distinct dates stay below 10, the fourth page tips it over
        let api = ScriptedApi::with(vec![
            Ok(Page::new(one_per_day(1, 1, 3), 0, false)),
            Ok(Page::new(one_per_day(4, 4, 3), 1, false)),
            Ok(Page::new(one_per_day(7, 7, 3), 2, false)),
            Ok(Page::new(one_per_day(10, 10, 3), 3, false)),
            Ok(Page::new(one_per_day(13, 13, 3), 4, false)),
        ]);
        let pager = pager(api.clone());

        assert_eq!(pager.change_scope(may_2024()).await, LoadOutcome::Completed);
        assert_eq!(api.pages(), vec![0, 1, 2, 3]);
        assert_eq!(pager.snapshot().groups.unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_stops_at_last_page() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(one_per_day(1, 1, 2), 0, false)),
            Ok(Page::new(one_per_day(3, 3, 2), 1, true)),
        ]);
        let pager = pager(api.clone());

        assert_eq!(pager.change_scope(may_2024()).await, LoadOutcome::Completed);
        assert_eq!(api.pages(), vec![0, 1]);
        assert!(pager.snapshot().last_page_reached);

        assert_eq!(pager.load_more().await, LoadOutcome::Exhausted);
        assert_eq!(api.pages(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_requests_carry_scope_filters() {
        let api = ScriptedApi::with(vec![Ok(Page::new(vec![], 0, true))]);
        let pager = pager(api.clone());

        let scope = ExpenseScope {
            name: Some("coffee".to_string()),
            category_ids: vec!["c1".to_string()],
            sort: SortOption::NameAsc,
            ..may_2024()
        };
        pager.change_scope(scope).await;

        let requests = api.requests.borrow();
        assert_eq!(requests[0].name.as_deref(), Some("coffee"));
        assert_eq!(requests[0].category_ids, vec!["c1".to_string()]);
        assert_eq!(requests[0].sort, SortOption::NameAsc);
        assert_eq!(requests[0].size, 10);
        assert_eq!(requests[0].year_month.to_string(), "202405");
    }

    #[tokio::test]
    async fn test_load_more_fetches_next_page_and_merges() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(one_per_day(1, 1, 10), 0, false)),
            Ok(Page::new(vec![expense(10, "2024-05-10"), expense(11, "2024-05-11")], 1, true)),
        ]);
        let pager = pager(api.clone());

        pager.change_scope(may_2024()).await;
        assert_eq!(api.pages(), vec![0]);

        assert_eq!(pager.load_more().await, LoadOutcome::Completed);
        assert_eq!(api.pages(), vec![0, 1]);

        let snapshot = pager.snapshot();
        let groups = snapshot.groups.unwrap();
        assert_eq!(groups.len(), 11);
        assert_eq!(groups[9].expenses.len(), 1);
        assert!(snapshot.last_page_reached);
    }

    #[tokio::test]
    async fn test_error_clears_loading_and_notifies() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(same_day(1, 10, "2024-05-01"), 0, false)),
            Err(ApiError::Server {
                status: 500,
                message: "database unavailable".to_string(),
            }),
        ]);
        let (notifier, log) = recording_notifier();
        let pager = ExpensePager::new(api.clone(), notifier, PagerState::new(may_2024(), 10, 10));

        assert_eq!(pager.change_scope(may_2024()).await, LoadOutcome::Failed);
        assert_eq!(api.pages(), vec![0, 1]);

        let snapshot = pager.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.groups.unwrap().len(), 1);

        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, NotificationKind::Error);
        assert_eq!(log[0].message, "Failed to load expenses. database unavailable");
    }

    #[tokio::test]
    async fn test_failed_load_more_retries_same_page() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(one_per_day(1, 1, 10), 0, false)),
            Err(ApiError::Network("offline".to_string())),
            Ok(Page::new(one_per_day(11, 11, 2), 1, true)),
        ]);
        let pager = pager(api.clone());

        assert_eq!(pager.change_scope(may_2024()).await, LoadOutcome::Completed);
        assert_eq!(pager.load_more().await, LoadOutcome::Failed);
        assert_eq!(pager.load_more().await, LoadOutcome::Completed);

        assert_eq!(api.pages(), vec![0, 1, 1]);
        let snapshot = pager.snapshot();
        assert_eq!(snapshot.groups.unwrap().len(), 12);
        assert!(snapshot.last_page_reached);
    }

    #[tokio::test]
    async fn test_failure_during_auto_continue_keeps_page_pending() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(same_day(1, 10, "2024-05-01"), 0, false)),
            Err(ApiError::Network("offline".to_string())),
            Ok(Page::new(one_per_day(11, 2, 10), 1, true)),
        ]);
        let pager = pager(api.clone());

        assert_eq!(pager.change_scope(may_2024()).await, LoadOutcome::Failed);
        assert_eq!(api.pages(), vec![0, 1]);

        assert_eq!(pager.load_more().await, LoadOutcome::Completed);
        assert_eq!(api.pages(), vec![0, 1, 1]);
        assert_eq!(pager.snapshot().groups.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_change_month_keeps_filters() {
        let api = ScriptedApi::default();
        let pager = pager(api.clone());

        let scope = ExpenseScope {
            name: Some("rent".to_string()),
            ..may_2024()
        };
        pager.change_scope(scope).await;
        pager.change_month(-5).await;

        let requests = api.requests.borrow();
        assert_eq!(requests[1].year_month.to_string(), "202312");
        assert_eq!(requests[1].name.as_deref(), Some("rent"));
        assert_eq!(requests[1].page, 0);
    }

    #[tokio::test]
    async fn test_reload_starts_from_first_page() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(one_per_day(1, 1, 10), 0, false)),
            Ok(Page::new(one_per_day(11, 11, 1), 1, true)),
            Ok(Page::new(one_per_day(1, 1, 2), 0, true)),
        ]);
        let pager = pager(api.clone());

        pager.change_scope(may_2024()).await;
        pager.load_more().await;
        let before = pager.state.borrow().generation;

        assert_eq!(pager.reload().await, LoadOutcome::Completed);
        assert_eq!(api.pages(), vec![0, 1, 0]);
        assert_eq!(pager.state.borrow().generation, before + 1);
        assert_eq!(pager.snapshot().groups.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_observer_sees_each_transition() {
        let api = ScriptedApi::with(vec![
            Ok(Page::new(same_day(1, 10, "2024-05-01"), 0, false)),
            Ok(Page::new(one_per_day(11, 2, 10), 1, true)),
        ]);
        let changes = Rc::new(RefCell::new(0));
        let observer = {
            let changes = changes.clone();
            Callback::from(move |_| *changes.borrow_mut() += 1)
        };
        let pager = pager(api).with_observer(observer);

        pager.change_scope(may_2024()).await;
        // reset, first page, second page
        assert_eq!(*changes.borrow(), 3);
    }

    #[tokio::test]
    async fn test_superseded_sequence_stops_quietly() {
        let api = ScriptedApi::with(vec![Ok(Page::new(one_per_day(1, 1, 3), 0, false))]);
        let (notifier, log) = recording_notifier();
        let pager = ExpensePager::new(api.clone(), notifier, PagerState::new(may_2024(), 10, 10));

        let stale = pager.state.borrow_mut().reset(may_2024());
        pager.state.borrow_mut().refresh();

        assert_eq!(pager.load(stale).await, LoadOutcome::Superseded);
        assert!(api.pages().is_empty());
        assert!(pager.snapshot().groups.is_none());
        assert!(log.borrow().is_empty());
    }
}
