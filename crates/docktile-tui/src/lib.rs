pub mod cursor;
pub mod filter;
pub mod layout;
pub mod list_widget;
pub mod screen;
pub mod snapshot;
pub mod sort;
pub mod theme;
pub mod widgets;

pub use cursor::{Cursor, SharedCursor};
pub use list_widget::ListWidget;
pub use screen::{Screen, TerminalScreen};
pub use theme::Theme;
