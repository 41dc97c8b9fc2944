//! Save and delete flows behind the expense and category modals.
//!
//! Each function performs one API call and reports the outcome to the user;
//! the caller only decides whether to close the modal and reload the list.

use log::info;
use shared::{Category, CategoryUpsertRequest, Expense, ExpenseForm};

use super::api::{CategoryApi, ExpenseApi};
use super::error::ApiError;
use super::notifications::Notifier;

/// How a modal was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    Saved,
    Deleted,
    Cancelled,
}

impl ModalResult {
    /// Only a save or delete changes what the list shows
    pub fn requires_reload(&self) -> bool {
        matches!(self, ModalResult::Saved | ModalResult::Deleted)
    }
}

pub async fn save_expense<A: ExpenseApi>(
    api: &A,
    notifier: &Notifier,
    form: &ExpenseForm,
    categories: &[Category],
) -> Result<Expense, ApiError> {
    let request = match form.to_request(categories) {
        Ok(request) => request,
        Err(errors) => {
            notifier.error("Please fill out the form correctly.", None);
            return Err(ApiError::InvalidInput(errors));
        }
    };

    match api.upsert_expense(&request).await {
        Ok(expense) => {
            info!("Saved expense {}", expense.id);
            notifier.success("Expense saved successfully.");
            Ok(expense)
        }
        Err(error) => {
            notifier.error("Failed to save the expense", Some(&error));
            Err(error)
        }
    }
}

pub async fn delete_expense<A: ExpenseApi>(
    api: &A,
    notifier: &Notifier,
    id: &str,
) -> Result<(), ApiError> {
    match api.delete_expense(id).await {
        Ok(()) => {
            info!("Deleted expense {}", id);
            notifier.success("Expense deleted successfully.");
            Ok(())
        }
        Err(error) => {
            if error.is_not_found() {
                info!("Expense {} was already gone", id);
            }
            notifier.error("Failed to delete the expense", Some(&error));
            Err(error)
        }
    }
}

pub async fn save_category<A: CategoryApi>(
    api: &A,
    notifier: &Notifier,
    request: &CategoryUpsertRequest,
) -> Result<Category, ApiError> {
    if let Err(error) = request.validate() {
        notifier.error("Please fill out the form correctly.", None);
        return Err(ApiError::InvalidCategory(error));
    }

    match api.upsert_category(request).await {
        Ok(category) => {
            notifier.success("Category saved successfully.");
            Ok(category)
        }
        Err(error) => {
            notifier.error("Failed to save the category", Some(&error));
            Err(error)
        }
    }
}

pub async fn delete_category<A: CategoryApi>(
    api: &A,
    notifier: &Notifier,
    id: &str,
) -> Result<(), ApiError> {
    match api.delete_category(id).await {
        Ok(()) => {
            notifier.success("Category deleted successfully.");
            Ok(())
        }
        // The server refuses to delete a category that expenses still use
        Err(error @ ApiError::Validation { .. }) => {
            notifier.warning("Failed to delete the category", &error);
            Err(error)
        }
        Err(error) => {
            notifier.error("Failed to delete the category", Some(&error));
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::expense_pager::{ExpensePager, ExpenseScope, PagerState};
    use crate::services::notifications::testing::recording_notifier;
    use crate::services::notifications::NotificationKind;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use shared::{CategoryCriteria, ExpenseCriteria, ExpenseUpsertRequest, Page, YearMonth};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory expense store that counts every call it receives
    #[derive(Clone, Default)]
    struct InMemoryApi {
        expenses: Rc<RefCell<HashMap<String, Expense>>>,
        categories: Rc<RefCell<Vec<Category>>>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl InMemoryApi {
        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ExpenseApi for InMemoryApi {
        async fn list_expenses(&self, criteria: &ExpenseCriteria) -> Result<Page<Expense>, ApiError> {
            self.calls.borrow_mut().push(format!("list {}", criteria.page));
            let content: Vec<Expense> = self.expenses.borrow().values().cloned().collect();
            Ok(Page::new(content, criteria.page, true))
        }

        async fn upsert_expense(&self, request: &ExpenseUpsertRequest) -> Result<Expense, ApiError> {
            self.calls.borrow_mut().push("upsert".to_string());
            let id = request.id.clone().unwrap_or_else(|| "new-1".to_string());
            let expense = Expense {
                id: id.clone(),
                name: request.name.clone(),
                amount: request.amount,
                date: request.date,
                category: request.category.clone(),
                created_at: None,
            };
            self.expenses.borrow_mut().insert(id, expense.clone());
            Ok(expense)
        }

        async fn delete_expense(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {}", id));
            match self.expenses.borrow_mut().remove(id) {
                Some(_) => Ok(()),
                None => Err(ApiError::NotFound(format!("Expense {} not found", id))),
            }
        }
    }

    #[async_trait(?Send)]
    impl CategoryApi for InMemoryApi {
        async fn list_categories(&self, _criteria: &CategoryCriteria) -> Result<Vec<Category>, ApiError> {
            Ok(self.categories.borrow().clone())
        }

        async fn upsert_category(&self, request: &CategoryUpsertRequest) -> Result<Category, ApiError> {
            self.calls.borrow_mut().push("upsert category".to_string());
            let category = Category {
                id: request.id.clone().unwrap_or_else(|| "cat-1".to_string()),
                name: request.name.clone(),
                color: request.color.clone(),
            };
            self.categories.borrow_mut().push(category.clone());
            Ok(category)
        }

        async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete category {}", id));
            Err(ApiError::Validation {
                status: 409,
                message: "Category is referenced by expenses".to_string(),
            })
        }
    }

    fn form(amount: &str) -> ExpenseForm {
        ExpenseForm {
            id: None,
            name: "Groceries".to_string(),
            amount: amount.to_string(),
            date: "2024-05-01".to_string(),
            category_id: None,
        }
    }

    #[tokio::test]
    async fn test_negative_amount_rejected_before_network() {
        let api = InMemoryApi::default();
        let (notifier, log) = recording_notifier();

        let result = save_expense(&api, &notifier, &form("-5"), &[]).await;

        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
        assert_eq!(api.call_count(), 0);
        assert_eq!(log.borrow()[0].message, "Please fill out the form correctly.");
    }

    #[tokio::test]
    async fn test_save_creates_and_notifies() {
        let api = InMemoryApi::default();
        let (notifier, log) = recording_notifier();

        let expense = save_expense(&api, &notifier, &form("12.30"), &[]).await.unwrap();

        assert_eq!(expense.id, "new-1");
        assert_eq!(expense.amount, 12.3);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(log.borrow()[0].kind, NotificationKind::Success);
        assert_eq!(log.borrow()[0].message, "Expense saved successfully.");
    }

    #[tokio::test]
    async fn test_delete_missing_expense_reports_not_found() {
        let api = InMemoryApi::default();
        let (notifier, log) = recording_notifier();
        let pager = ExpensePager::new(
            api.clone(),
            notifier.clone(),
            PagerState::new(ExpenseScope::for_month(YearMonth::new(2024, 5).unwrap()), 10, 10),
        );

        save_expense(&api, &notifier, &form("9.99"), &[]).await.unwrap();
        pager.reload().await;
        let before = pager.snapshot();

        let result = delete_expense(&api, &notifier, "42").await;

        assert!(result.unwrap_err().is_not_found());
        let log = log.borrow();
        let last = log.last().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.message, "Failed to delete the expense. Expense 42 not found");
        assert_eq!(pager.snapshot(), before);
        assert!(!before.loading);
    }

    #[tokio::test]
    async fn test_delete_existing_expense() {
        let api = InMemoryApi::default();
        let (notifier, log) = recording_notifier();
        let saved = save_expense(&api, &notifier, &form("3"), &[]).await.unwrap();

        delete_expense(&api, &notifier, &saved.id).await.unwrap();

        assert!(api.expenses.borrow().is_empty());
        assert_eq!(log.borrow().last().unwrap().message, "Expense deleted successfully.");
    }

    #[tokio::test]
    async fn test_category_flows() {
        let api = InMemoryApi::default();
        let (notifier, log) = recording_notifier();

        let blank = CategoryUpsertRequest {
            id: None,
            name: " ".to_string(),
            color: None,
        };
        assert!(save_category(&api, &notifier, &blank).await.is_err());
        assert_eq!(api.call_count(), 0);

        let food = CategoryUpsertRequest {
            name: "Food".to_string(),
            ..blank
        };
        let saved = save_category(&api, &notifier, &food).await.unwrap();
        assert_eq!(saved.name, "Food");

        assert!(delete_category(&api, &notifier, &saved.id).await.is_err());
        let log = log.borrow();
        assert_eq!(log[1].message, "Category saved successfully.");
        assert_eq!(log[2].kind, NotificationKind::Warning);
        assert_eq!(
            log[2].message,
            "Failed to delete the category. Category is referenced by expenses"
        );
    }

    #[test]
    fn test_modal_result_reload() {
        assert!(ModalResult::Saved.requires_reload());
        assert!(ModalResult::Deleted.requires_reload());
        assert!(!ModalResult::Cancelled.requires_reload());
    }
}
