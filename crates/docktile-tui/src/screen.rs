use std::sync::{Mutex, PoisonError};

use ratatui::layout::Rect;

use crate::cursor::SharedCursor;

/// Drawing surface a list widget renders for: viewport bounds plus the cursor that outlives any one widget.
pub trait Screen: Send + Sync {
    fn cursor(&self) -> &SharedCursor;
    fn area(&self) -> Rect;
}

#[derive(Debug, Default)]
pub struct TerminalScreen {
    cursor: SharedCursor,
    area: Mutex<Rect>,
}

impl TerminalScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self { cursor: SharedCursor::new(), area: Mutex::new(Rect::new(0, 0, width, height)) }
    }

    /// Only the size is kept; widgets always draw from the origin of their own buffer.
    pub fn set_area(&self, area: Rect) {
        *self.area.lock().unwrap_or_else(PoisonError::into_inner) = Rect::new(0, 0, area.width, area.height);
    }
}

impl Screen for TerminalScreen {
    fn cursor(&self) -> &SharedCursor {
        &self.cursor
    }

    fn area(&self) -> Rect {
        *self.area.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
