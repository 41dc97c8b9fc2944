//! Date grouping for the paged expense list.
//!
//! Groups keep the order in which their date was first seen, which is the
//! order the server returned the expenses in. Within one group an expense id
//! appears at most once, even when overlapping pages deliver it twice.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Expense;

/// All loaded expenses that share one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseGroup {
    pub date: NaiveDate,
    pub expenses: Vec<Expense>,
}

impl ExpenseGroup {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            expenses: Vec::new(),
        }
    }

    pub fn contains(&self, expense_id: &str) -> bool {
        self.expenses.iter().any(|e| e.id == expense_id)
    }

    /// Sum of the group's amounts, shown next to the date divider
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Append unless the id is already present. Returns whether it was added.
    fn push_unique(&mut self, expense: Expense) -> bool {
        if self.contains(&expense.id) {
            return false;
        }
        self.expenses.push(expense);
        true
    }
}

/// Group one page of expenses by date, in first-seen order
pub fn group_by_date(expenses: Vec<Expense>) -> Vec<ExpenseGroup> {
    let mut groups: Vec<ExpenseGroup> = Vec::new();

    for expense in expenses {
        match groups.iter_mut().find(|g| g.date == expense.date) {
            Some(group) => {
                group.push_unique(expense);
            }
            None => {
                let mut group = ExpenseGroup::new(expense.date);
                group.push_unique(expense);
                groups.push(group);
            }
        }
    }

    groups
}

/// Merge freshly grouped expenses into the accumulated list.
///
/// Items for a known date are appended to that group (skipping ids it already
/// holds); unknown dates become new groups at the end.
pub fn merge_groups(existing: &mut Vec<ExpenseGroup>, incoming: Vec<ExpenseGroup>) {
    for new_group in incoming {
        match existing.iter_mut().find(|g| g.date == new_group.date) {
            Some(group) => {
                for expense in new_group.expenses {
                    group.push_unique(expense);
                }
            }
            None => existing.push(new_group),
        }
    }
}
