use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Category, CategoryUpsertRequest, Expense, ExpenseUpsertRequest};

pub const MIN_NAME_LENGTH: usize = 3;
pub const MIN_AMOUNT: f64 = 0.01;
pub const MAX_CATEGORY_NAME_LENGTH: usize = 40;

/// Specific validation errors for the expense form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    NameTooShort(usize),
    EmptyAmount,
    InvalidAmountFormat(String),
    AmountTooSmall(f64),
    EmptyDate,
    InvalidDate(String),
}

impl ExpenseValidationError {
    pub fn message(&self) -> String {
        match self {
            ExpenseValidationError::EmptyName => "Name is required".to_string(),
            ExpenseValidationError::NameTooShort(len) => format!(
                "Name must be at least {} characters (got {})",
                MIN_NAME_LENGTH, len
            ),
            ExpenseValidationError::EmptyAmount => "Amount is required".to_string(),
            ExpenseValidationError::InvalidAmountFormat(input) => {
                format!("'{}' is not a valid amount", input)
            }
            ExpenseValidationError::AmountTooSmall(amount) => {
                format!("Amount must be at least {:.2} (got {})", MIN_AMOUNT, amount)
            }
            ExpenseValidationError::EmptyDate => "Date is required".to_string(),
            ExpenseValidationError::InvalidDate(input) => {
                format!("'{}' is not a valid date (YYYY-MM-DD)", input)
            }
        }
    }
}

/// Validation result for the expense form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseFormValidation {
    pub is_valid: bool,
    pub errors: Vec<ExpenseValidationError>,
    pub cleaned_amount: Option<f64>,
    pub parsed_date: Option<NaiveDate>,
}

/// Raw input of the create/edit expense modal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseForm {
    pub id: Option<String>,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub category_id: Option<String>,
}

impl ExpenseForm {
    /// Blank form preset to `date`
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Form pre-filled for editing an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: Some(expense.id.clone()),
            name: expense.name.clone(),
            amount: format!("{:.2}", expense.amount),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category_id: expense.category.as_ref().map(|c| c.id.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> ExpenseFormValidation {
        let mut errors = Vec::new();

        errors.extend(validate_name(&self.name));

        let amount_input = self.amount.trim();
        let cleaned_amount = if amount_input.is_empty() {
            errors.push(ExpenseValidationError::EmptyAmount);
            None
        } else {
            match amount_input.parse::<f64>() {
                Ok(amount) if amount.is_finite() => match validate_amount(amount) {
                    Some(error) => {
                        errors.push(error);
                        None
                    }
                    None => Some(amount),
                },
                _ => {
                    errors.push(ExpenseValidationError::InvalidAmountFormat(
                        amount_input.to_string(),
                    ));
                    None
                }
            }
        };

        let date_input = self.date.trim();
        let parsed_date = if date_input.is_empty() {
            errors.push(ExpenseValidationError::EmptyDate);
            None
        } else {
            match NaiveDate::parse_from_str(date_input, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(ExpenseValidationError::InvalidDate(date_input.to_string()));
                    None
                }
            }
        };

        ExpenseFormValidation {
            is_valid: errors.is_empty(),
            errors,
            cleaned_amount,
            parsed_date,
        }
    }

    /// Build the upsert payload, resolving the selected category from `categories`
    pub fn to_request(
        &self,
        categories: &[Category],
    ) -> Result<ExpenseUpsertRequest, Vec<ExpenseValidationError>> {
        let validation = self.validate();
        let (amount, date) = match (validation.cleaned_amount, validation.parsed_date) {
            (Some(amount), Some(date)) if validation.is_valid => (amount, date),
            _ => return Err(validation.errors),
        };

        let category_id = self.category_id.clone().filter(|id| !id.is_empty());
        let category = category_id
            .as_ref()
            .and_then(|id| categories.iter().find(|c| &c.id == id).cloned());

        Ok(ExpenseUpsertRequest {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            amount,
            date,
            category_id,
            category,
        })
    }
}

impl ExpenseUpsertRequest {
    /// Re-check the payload rules so a bad request never reaches the network
    pub fn validate(&self) -> Result<(), Vec<ExpenseValidationError>> {
        let mut errors = validate_name(&self.name);
        if !self.amount.is_finite() {
            errors.push(ExpenseValidationError::InvalidAmountFormat(
                self.amount.to_string(),
            ));
        } else if let Some(error) = validate_amount(self.amount) {
            errors.push(error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_name(name: &str) -> Vec<ExpenseValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        vec![ExpenseValidationError::EmptyName]
    } else if trimmed.chars().count() < MIN_NAME_LENGTH {
        vec![ExpenseValidationError::NameTooShort(trimmed.chars().count())]
    } else {
        Vec::new()
    }
}

fn validate_amount(amount: f64) -> Option<ExpenseValidationError> {
    if amount < MIN_AMOUNT {
        Some(ExpenseValidationError::AmountTooSmall(amount))
    } else {
        None
    }
}

/// Specific validation errors for the category form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl CategoryValidationError {
    pub fn message(&self) -> String {
        match self {
            CategoryValidationError::EmptyName => "Name is required".to_string(),
            CategoryValidationError::NameTooLong(len) => format!(
                "Name must be at most {} characters (got {})",
                MAX_CATEGORY_NAME_LENGTH, len
            ),
        }
    }
}

impl CategoryUpsertRequest {
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let length = self.name.trim().chars().count();
        if length == 0 {
            Err(CategoryValidationError::EmptyName)
        } else if length > MAX_CATEGORY_NAME_LENGTH {
            Err(CategoryValidationError::NameTooLong(length))
        } else {
            Ok(())
        }
    }
}

/// Make sure the category of an expense being edited is selectable, even if
/// the category list was loaded without it.
pub fn ensure_category_listed(categories: &mut Vec<Category>, category: Option<&Category>) {
    if let Some(category) = category {
        if !categories.iter().any(|c| c.id == category.id) {
            categories.push(category.clone());
        }
    }
}
