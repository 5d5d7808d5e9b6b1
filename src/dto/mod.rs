//! DTO modules that bridge services with the JSON API.

pub mod api;
pub mod lists;
pub mod logs;
pub mod merchants;
pub mod withdrawals;
