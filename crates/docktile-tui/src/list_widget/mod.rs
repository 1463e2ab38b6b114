mod render;

use std::sync::Arc;

use docktile_core::{DataSource, FetchContext, FetchError, Resource, SortKey};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use tracing::{debug, warn};

use crate::filter::FilterState;
use crate::layout::body_height;
use crate::screen::Screen;
use crate::sort::SortState;
use crate::theme::Theme;

use render::RenderInput;

/// Generic list view over records of one resource type.
///
/// Every [`ListWidget::mount`] installs a fresh snapshot from the data source and redraws from scratch:
/// filter, stable sort, cursor bounds, windowing, formatting. [`ListWidget::render`] repeats the same
/// pass against the installed snapshot. The result lives in an internal [`Buffer`] the size of the
/// screen, so identical state always yields identical cells.
///
/// The cursor belongs to the [`Screen`] and is shared with every other widget on it. Mutating methods
/// take `&mut self`, so one widget never runs two passes at once.
pub struct ListWidget<R: Resource> {
    source: Arc<dyn DataSource<R>>,
    screen: Arc<dyn Screen>,
    theme: Theme,
    dataset: Vec<R>,
    visible: Vec<usize>,
    sort: SortState<R::SortKey>,
    filter: FilterState,
    buffer: Buffer,
    mounted: bool,
    last_error: Option<FetchError>,
}

impl<R: Resource> ListWidget<R> {
    pub fn new(source: Arc<dyn DataSource<R>>, screen: Arc<dyn Screen>) -> Self {
        Self {
            source,
            screen,
            theme: Theme::default(),
            dataset: Vec::new(),
            visible: Vec::new(),
            sort: SortState::new(R::sort_keys()),
            filter: FilterState::default(),
            buffer: Buffer::empty(Rect::default()),
            mounted: false,
            last_error: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Fetches a new snapshot and redraws.
    ///
    /// On failure the previous dataset, buffer, cursor, sort and filter are left exactly as they
    /// were; only the mounted flag and [`ListWidget::last_error`] change.
    pub async fn mount(&mut self, ctx: &FetchContext) -> Result<(), FetchError> {
        self.mounted = true;
        debug!(kind = %R::KIND, "fetching");

        match ctx.run(self.source.fetch()).await {
            Ok(records) => {
                debug!(kind = %R::KIND, count = records.len(), "fetched");
                self.dataset = records;
                self.last_error = None;
                self.redraw();
                Ok(())
            }
            Err(err) => {
                warn!(kind = %R::KIND, error = %err, "fetch failed, keeping previous snapshot");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Blanks the view. The dataset and sort/filter state are kept for the next mount.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.redraw();
    }

    /// Redraws from the installed snapshot without fetching.
    pub fn redraw(&mut self) {
        let area = self.screen.area();
        let area = Rect::new(0, 0, area.width, area.height);
        let mut buffer = Buffer::empty(area);

        if !self.mounted || area.is_empty() {
            self.buffer = buffer;
            return;
        }

        self.apply_filter();
        self.apply_sort();

        let (window, selected) = {
            let mut cursor = self.screen.cursor().lock();
            cursor.set_max(self.visible.len());
            let window = cursor.window(body_height(area.height));
            (window, cursor.position())
        };

        let rows: Vec<&R> = self.visible[window.clone()].iter().map(|&i| &self.dataset[i]).collect();
        render::draw(
            &mut buffer,
            &RenderInput {
                title: R::KIND.display_name(),
                total: self.dataset.len(),
                visible: self.visible.len(),
                filter: self.filter.pattern(),
                columns: R::columns(),
                sort_column: self.sort.active_key().and_then(|k| k.column()),
                ascending: self.sort.is_ascending(),
                rows: &rows,
                selected: selected.and_then(|p| p.checked_sub(window.start)),
                theme: &self.theme,
            },
        );
        self.buffer = buffer;
    }

    /// Advances to the next sort key (the first key on the first call).
    pub fn sort(&mut self) {
        self.sort.advance();
        self.redraw();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort.toggle_direction();
        self.redraw();
    }

    /// Replaces the filter pattern; an empty pattern shows everything.
    pub fn filter(&mut self, pattern: &str) {
        self.filter.set(pattern);
        debug!(kind = %R::KIND, pattern, "filter changed");
        self.redraw();
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Record under the cursor, as of the last render.
    pub fn selected(&self) -> Option<&R> {
        let position = self.screen.cursor().lock().position()?;
        self.visible.get(position).map(|&i| &self.dataset[i])
    }

    /// Visible records in display order, as of the last render.
    pub fn visible(&self) -> impl Iterator<Item = &R> {
        self.visible.iter().map(|&i| &self.dataset[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn total_len(&self) -> usize {
        self.dataset.len()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn filter_pattern(&self) -> Option<&str> {
        self.filter.pattern()
    }

    pub fn active_sort_key(&self) -> Option<R::SortKey> {
        self.sort.active_key()
    }

    pub fn is_sort_ascending(&self) -> bool {
        self.sort.is_ascending()
    }

    fn apply_filter(&mut self) {
        let filter = &self.filter;
        self.visible =
            self.dataset.iter().enumerate().filter(|(_, r)| filter.matches(&r.filter_text())).map(|(i, _)| i).collect();
    }

    // stable: equal keys keep fetch order in both directions
    fn apply_sort(&mut self) {
        let Some(key) = self.sort.active_key() else { return };
        let ascending = self.sort.is_ascending();
        let dataset = &self.dataset;
        self.visible.sort_by(|&a, &b| {
            let ord = dataset[a].compare(&dataset[b], key);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
}

impl<R: Resource> Widget for &ListWidget<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let src = &self.buffer;
        let width = area.width.min(src.area.width);
        let height = area.height.min(src.area.height);
        for y in 0..height {
            for x in 0..width {
                if let (Some(from), Some(to)) = (src.cell((x, y)), buf.cell_mut((area.x + x, area.y + y))) {
                    *to = from.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
