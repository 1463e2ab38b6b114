use std::ops::Range;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Selection and scroll offset over a list of `max + 1` rows.
///
/// `top <= position <= max` holds after every operation; the last windowing pass additionally
/// guarantees `position < top + height`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    top: usize,
    max: Option<usize>,
    height: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the cursor to `len` rows, clamping position and offset when the list shrank.
    pub fn set_max(&mut self, len: usize) {
        self.max = len.checked_sub(1);
        self.clamp();
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn len(&self) -> usize {
        self.max.map_or(0, |m| m + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.max.is_none()
    }

    /// Selected row, `None` while the list is empty.
    pub fn position(&self) -> Option<usize> {
        self.max.map(|_| self.position)
    }

    pub fn offset(&self) -> usize {
        self.top
    }

    /// Viewport height seen by the last call to [`Cursor::window`].
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn top(&mut self) {
        self.position = 0;
        self.top = 0;
    }

    pub fn bottom(&mut self) {
        let Some(max) = self.max else {
            self.top();
            return;
        };
        self.position = max;
        self.top = (max + 1).saturating_sub(self.height).min(max);
    }

    pub fn scroll_down(&mut self) {
        self.move_by(1, true);
    }

    pub fn scroll_up(&mut self) {
        self.move_by(1, false);
    }

    pub fn page_down(&mut self) {
        self.move_by(self.height.max(1), true);
    }

    pub fn page_up(&mut self) {
        self.move_by(self.height.max(1), false);
    }

    /// Rows to draw for a viewport of `height` lines. Scrolls so the selection stays visible.
    pub fn window(&mut self, height: usize) -> Range<usize> {
        self.height = height;
        let len = self.len();
        if height == 0 || len == 0 {
            return 0..0;
        }
        if len <= height {
            self.top = 0;
            return 0..len;
        }

        if self.position < self.top {
            self.top = self.position;
        } else if self.position >= self.top + height {
            self.top = self.position + 1 - height;
        }
        self.top = self.top.min(len - height);
        self.top..self.top + height
    }

    fn move_by(&mut self, step: usize, down: bool) {
        let Some(max) = self.max else {
            return;
        };
        self.position =
            if down { self.position.saturating_add(step).min(max) } else { self.position.saturating_sub(step) };
        self.top = self.top.min(self.position);
    }

    fn clamp(&mut self) {
        match self.max {
            Some(max) => {
                self.position = self.position.min(max);
                self.top = self.top.min(self.position);
            }
            None => {
                self.position = 0;
                self.top = 0;
            }
        }
    }
}

/// Cursor handle owned by a screen and borrowed by every widget drawn on it.
#[derive(Debug, Clone, Default)]
pub struct SharedCursor(Arc<Mutex<Cursor>>);

impl SharedCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, Cursor> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
