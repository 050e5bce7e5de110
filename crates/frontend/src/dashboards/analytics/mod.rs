pub mod api;
pub mod cache;
pub mod hook;
pub mod ui;
