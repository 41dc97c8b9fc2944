pub mod category_list;
pub mod category_modal;
pub mod expense_filters;
pub mod expense_list;
pub mod expense_modal;
pub mod header;
pub mod login_prompt;
pub mod toasts;
