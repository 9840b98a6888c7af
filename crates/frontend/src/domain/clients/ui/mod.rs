pub mod editor;
pub mod list;

pub use editor::ClientEditor;
pub use list::ClientList;
