use std::sync::Arc;
use std::time::{Duration, Instant};

use docktile_config::AppConfig;
use docktile_core::{FetchContext, ResourceKind};
use docktile_tui::widgets::StatusBarWidget;
use docktile_tui::{Screen, TerminalScreen, Theme};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::app_log;
use crate::command::{Command, InputMode};
use crate::event::{AppEvent, EventHandler};
use crate::keybindings::KeybindingDispatcher;
use crate::views::{Sources, Views};

pub struct App {
    running: bool,
    tick_rate: Duration,
    refresh_interval: Duration,
    fetch_timeout: Duration,
    last_refresh: Option<Instant>,
    current: ResourceKind,
    views: Views,
    dispatcher: KeybindingDispatcher,
    theme: Theme,
    /// Pattern being typed in filter mode, and the one to restore on cancel.
    filter_input: String,
    filter_before_edit: Option<String>,
    shutdown: CancellationToken,
}

impl App {
    pub fn new(config: &AppConfig, sources: Sources, initial: ResourceKind) -> Self {
        let theme = Theme::from_config(&config.theme);
        let screen = Arc::new(TerminalScreen::default());
        Self {
            running: true,
            tick_rate: Duration::from_millis(config.tick_rate_ms()),
            refresh_interval: config.refresh_interval(),
            fetch_timeout: config.fetch_timeout(),
            last_refresh: None,
            current: initial,
            views: Views::new(sources, screen, &theme),
            dispatcher: KeybindingDispatcher::from_config(&config.keybindings),
            theme,
            filter_input: String::new(),
            filter_before_edit: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.tick_rate, self.shutdown.clone());
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        self.refresh().await;

        while self.running {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next().await? {
                AppEvent::Key(key) => {
                    if let Some(cmd) = self.dispatcher.dispatch(key) {
                        self.handle_command(cmd).await;
                    }
                }
                AppEvent::Tick => {
                    if self.refresh_due() {
                        self.refresh().await;
                    }
                }
                AppEvent::Resize(w, h) => self.resize(w, h),
            }
        }

        self.shutdown.cancel();
        Ok(())
    }

    pub async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.running = false,
            Command::Refresh => self.refresh().await,
            Command::NextView => self.switch_view(self.current.next()).await,
            Command::PrevView => self.switch_view(self.current.prev()).await,
            Command::ShowView(kind) => self.switch_view(kind).await,
            Command::SelectNext => self.navigate(|c| c.scroll_down()),
            Command::SelectPrev => self.navigate(|c| c.scroll_up()),
            Command::PageDown => self.navigate(|c| c.page_down()),
            Command::PageUp => self.navigate(|c| c.page_up()),
            Command::SelectFirst => self.navigate(|c| c.top()),
            Command::SelectLast => self.navigate(|c| c.bottom()),
            Command::Sort => self.views.sort(self.current),
            Command::ToggleSortOrder => self.views.toggle_sort_direction(self.current),
            Command::EnterFilter => {
                let pattern = self.views.filter_pattern(self.current);
                self.filter_input = pattern.clone().unwrap_or_default();
                self.filter_before_edit = pattern;
                self.dispatcher.set_mode(InputMode::FilterInput);
            }
            Command::ClearFilter => self.apply_filter(""),
            Command::FilterInput(c) => {
                self.filter_input.push(c);
                self.apply_filter(&self.filter_input.clone());
            }
            Command::FilterBackspace => {
                self.filter_input.pop();
                self.apply_filter(&self.filter_input.clone());
            }
            Command::FilterConfirm => {
                self.dispatcher.set_mode(InputMode::Normal);
                let (visible, total) = self.views.counts(self.current);
                info!(view = %self.current, pattern = %self.filter_input, visible, total, "filter applied");
            }
            Command::FilterCancel => {
                let previous = self.filter_before_edit.take().unwrap_or_default();
                self.apply_filter(&previous);
                self.dispatcher.set_mode(InputMode::Normal);
            }
        }
    }

    /// Re-mounts the current view. A failed fetch leaves the previous rows on screen; the error is
    /// shown in the status bar until the next successful refresh.
    async fn refresh(&mut self) {
        let ctx = FetchContext::new(self.shutdown.child_token(), self.fetch_timeout);
        self.last_refresh = Some(Instant::now());
        if let Err(err) = self.views.mount(self.current, &ctx).await {
            debug!(view = %self.current, error = %err, "refresh failed");
        }
    }

    fn refresh_due(&self) -> bool {
        match self.last_refresh {
            Some(at) => at.elapsed() >= self.refresh_interval,
            None => true,
        }
    }

    async fn switch_view(&mut self, kind: ResourceKind) {
        if kind == self.current {
            return;
        }
        debug!(from = %self.current, to = %kind, "switching view");
        self.views.unmount(self.current);
        self.current = kind;
        self.views.screen().cursor().lock().top();
        self.refresh().await;
    }

    fn navigate(&mut self, step: impl FnOnce(&mut docktile_tui::Cursor)) {
        step(&mut self.views.screen().cursor().lock());
        self.views.redraw(self.current);
    }

    fn apply_filter(&mut self, pattern: &str) {
        self.views.screen().cursor().lock().top();
        self.views.filter(self.current, pattern);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.views.screen().set_area(Rect::new(0, 0, width, height));
        self.views.redraw(self.current);
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        self.views.draw(self.current, frame, area);

        if area.height == 0 {
            return;
        }
        let status_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        let hints = self.dispatcher.hints();
        let (message, is_error) = self.status_message();
        let mode = match self.dispatcher.mode() {
            InputMode::Normal => "Normal",
            InputMode::FilterInput => "Filter",
        };
        let widget = StatusBarWidget {
            mode,
            view: self.current.display_name(),
            hints: &hints,
            message: message.as_deref(),
            is_error,
            theme: &self.theme,
        };
        widget.render(frame, status_area);
    }

    fn status_message(&self) -> (Option<String>, bool) {
        if self.dispatcher.mode() == InputMode::FilterInput {
            return (Some(format!("/{}_", self.filter_input)), false);
        }
        if let Some(err) = self.views.last_error(self.current) {
            return (Some(err.to_string()), true);
        }
        (app_log::latest_line(), false)
    }
}

#[cfg(test)]
mod tests;
