use std::sync::Arc;

use docktile_core::{
    ContainerRecord, DataSource, DockerClient, FetchContext, FetchError, ImageRecord, NetworkRecord, ResourceKind,
    VolumeRecord,
};
use docktile_tui::{ListWidget, Screen, TerminalScreen, Theme};
use ratatui::prelude::*;

pub struct Sources {
    pub containers: Arc<dyn DataSource<ContainerRecord>>,
    pub images: Arc<dyn DataSource<ImageRecord>>,
    pub networks: Arc<dyn DataSource<NetworkRecord>>,
    pub volumes: Arc<dyn DataSource<VolumeRecord>>,
}

impl Sources {
    pub fn docker(client: DockerClient) -> Self {
        let client = Arc::new(client);
        Self { containers: client.clone(), images: client.clone(), networks: client.clone(), volumes: client }
    }
}

/// One list widget per resource kind, all drawing on the same screen.
pub struct Views {
    screen: Arc<TerminalScreen>,
    containers: ListWidget<ContainerRecord>,
    images: ListWidget<ImageRecord>,
    networks: ListWidget<NetworkRecord>,
    volumes: ListWidget<VolumeRecord>,
}

macro_rules! on_view {
    ($views:expr, $kind:expr, |$w:ident| $body:expr) => {
        match $kind {
            ResourceKind::Containers => {
                let $w = &mut $views.containers;
                $body
            }
            ResourceKind::Images => {
                let $w = &mut $views.images;
                $body
            }
            ResourceKind::Networks => {
                let $w = &mut $views.networks;
                $body
            }
            ResourceKind::Volumes => {
                let $w = &mut $views.volumes;
                $body
            }
        }
    };
}

macro_rules! on_view_ref {
    ($views:expr, $kind:expr, |$w:ident| $body:expr) => {
        match $kind {
            ResourceKind::Containers => {
                let $w = &$views.containers;
                $body
            }
            ResourceKind::Images => {
                let $w = &$views.images;
                $body
            }
            ResourceKind::Networks => {
                let $w = &$views.networks;
                $body
            }
            ResourceKind::Volumes => {
                let $w = &$views.volumes;
                $body
            }
        }
    };
}

impl Views {
    pub fn new(sources: Sources, screen: Arc<TerminalScreen>, theme: &Theme) -> Self {
        let on_screen: Arc<dyn Screen> = screen.clone();
        Self {
            containers: ListWidget::new(sources.containers, on_screen.clone()).with_theme(theme.clone()),
            images: ListWidget::new(sources.images, on_screen.clone()).with_theme(theme.clone()),
            networks: ListWidget::new(sources.networks, on_screen.clone()).with_theme(theme.clone()),
            volumes: ListWidget::new(sources.volumes, on_screen).with_theme(theme.clone()),
            screen,
        }
    }

    pub fn screen(&self) -> &TerminalScreen {
        &self.screen
    }

    pub async fn mount(&mut self, kind: ResourceKind, ctx: &FetchContext) -> Result<(), FetchError> {
        on_view!(self, kind, |w| w.mount(ctx).await)
    }

    pub fn unmount(&mut self, kind: ResourceKind) {
        on_view!(self, kind, |w| w.unmount())
    }

    pub fn redraw(&mut self, kind: ResourceKind) {
        on_view!(self, kind, |w| w.redraw())
    }

    pub fn sort(&mut self, kind: ResourceKind) {
        on_view!(self, kind, |w| w.sort())
    }

    pub fn toggle_sort_direction(&mut self, kind: ResourceKind) {
        on_view!(self, kind, |w| w.toggle_sort_direction())
    }

    pub fn filter(&mut self, kind: ResourceKind, pattern: &str) {
        on_view!(self, kind, |w| w.filter(pattern))
    }

    pub fn filter_pattern(&self, kind: ResourceKind) -> Option<String> {
        on_view_ref!(self, kind, |w| w.filter_pattern().map(str::to_string))
    }

    pub fn last_error(&self, kind: ResourceKind) -> Option<FetchError> {
        on_view_ref!(self, kind, |w| w.last_error().cloned())
    }

    pub fn counts(&self, kind: ResourceKind) -> (usize, usize) {
        on_view_ref!(self, kind, |w| (w.visible_len(), w.total_len()))
    }

    /// Name of the record under the cursor.
    #[cfg(test)]
    pub fn selected_name(&self, kind: ResourceKind) -> Option<String> {
        on_view_ref!(self, kind, |w| w.selected().map(|r| docktile_core::Resource::name(r).to_string()))
    }

    pub fn draw(&self, kind: ResourceKind, frame: &mut Frame, area: Rect) {
        on_view_ref!(self, kind, |w| frame.render_widget(w, area))
    }
}
