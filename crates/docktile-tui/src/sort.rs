use docktile_core::SortKey;
use tracing::debug;

/// Cycles through a fixed list of sort keys.
///
/// The first [`SortState::advance`] activates the first key; each further call moves to the next
/// key, wrapping after the last. Advancing always restores ascending order.
#[derive(Debug, Clone)]
pub struct SortState<K: 'static> {
    keys: &'static [K],
    active: Option<usize>,
    ascending: bool,
}

impl<K: SortKey> SortState<K> {
    pub fn new(keys: &'static [K]) -> Self {
        Self { keys, active: None, ascending: true }
    }

    pub fn advance(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let next = match self.active {
            None => 0,
            Some(i) => (i + 1) % self.keys.len(),
        };
        self.active = Some(next);
        self.ascending = true;
        debug!(key = self.keys[next].label(), "sort key changed");
    }

    /// Flips direction of the active key. Does nothing until a key is active.
    pub fn toggle_direction(&mut self) {
        if self.active.is_some() {
            self.ascending = !self.ascending;
        }
    }

    pub fn active_key(&self) -> Option<K> {
        self.active.map(|i| self.keys[i])
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn keys(&self) -> &'static [K] {
        self.keys
    }
}
