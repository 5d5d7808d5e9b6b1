//! Domain entities shown by the admin dashboard's list views.

pub mod account;
pub mod agent;
pub mod bonus;
pub mod merchant;
pub mod network;
pub mod system_log;
pub mod transaction;
pub mod types;
pub mod user;
pub mod withdrawal;
