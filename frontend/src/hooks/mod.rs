pub mod use_categories;
pub mod use_current_user;
pub mod use_expense_list;
pub mod use_notifications;
