pub mod api;
pub mod notifications;
pub mod ui;
