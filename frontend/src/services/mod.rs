pub mod api;
pub mod date_utils;
pub mod error;
pub mod expense_editor;
pub mod expense_pager;
pub mod logging;
pub mod notifications;
