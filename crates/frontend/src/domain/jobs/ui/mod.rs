pub mod dashboard;
pub mod details;
pub mod editor;

pub use dashboard::Dashboard;
pub use details::JobDetailsPage;
pub use editor::JobEditor;
