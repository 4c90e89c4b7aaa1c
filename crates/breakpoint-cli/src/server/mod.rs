//! Web server: classification form and JSON API.

pub mod app;
pub mod error;
pub mod handlers;
pub mod page;
pub mod state;
