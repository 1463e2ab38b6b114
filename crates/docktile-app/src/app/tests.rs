use docktile_core::{FetchError, StaticSource, VolumeRecord};
use docktile_tui::snapshot::to_text;
use ratatui::backend::TestBackend;

use super::*;

const WIDTH: u16 = 160;
const HEIGHT: u16 = 20;

async fn started(sources: Sources, initial: ResourceKind) -> App {
    let mut app = App::new(&AppConfig::default(), sources, initial);
    app.resize(WIDTH, HEIGHT);
    app.refresh().await;
    app
}

async fn demo_app() -> App {
    started(crate::demo::sources(), ResourceKind::Volumes).await
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    to_text(terminal.backend().buffer())
}

async fn type_filter(app: &mut App, pattern: &str) {
    app.handle_command(Command::EnterFilter).await;
    for c in pattern.chars() {
        app.handle_command(Command::FilterInput(c)).await;
    }
}

#[tokio::test]
async fn starts_on_initial_view() {
    let app = demo_app().await;
    let text = screen_text(&app);
    assert!(text.starts_with("Volumes: 4"));
    assert!(text.contains("app_pgdata"));
    assert!(text.contains("NORMAL"));
    assert!(!app.refresh_due());
}

#[tokio::test]
async fn switching_view_remounts_and_resets_cursor() {
    let mut app = demo_app().await;
    app.handle_command(Command::SelectLast).await;
    assert_eq!(app.views.selected_name(ResourceKind::Volumes).as_deref(), Some("shared-assets"));

    app.handle_command(Command::ShowView(ResourceKind::Containers)).await;
    assert_eq!(app.current, ResourceKind::Containers);
    assert_eq!(app.views.selected_name(ResourceKind::Containers).as_deref(), Some("web"));
    let text = screen_text(&app);
    assert!(text.starts_with("Containers: 5"));
    assert!(text.contains("nginx:1.27"));
}

#[tokio::test]
async fn next_view_wraps_around() {
    let mut app = demo_app().await;
    app.handle_command(Command::NextView).await;
    assert_eq!(app.current, ResourceKind::Containers);
    app.handle_command(Command::PrevView).await;
    assert_eq!(app.current, ResourceKind::Volumes);
}

#[tokio::test]
async fn navigation_moves_selection() {
    let mut app = demo_app().await;
    app.handle_command(Command::SelectNext).await;
    assert_eq!(app.views.selected_name(ResourceKind::Volumes).as_deref(), Some("app_redis"));
    app.handle_command(Command::SelectPrev).await;
    app.handle_command(Command::SelectPrev).await;
    assert_eq!(app.views.selected_name(ResourceKind::Volumes).as_deref(), Some("app_pgdata"));
}

#[tokio::test]
async fn live_filter_then_confirm() {
    let mut app = demo_app().await;
    type_filter(&mut app, "redis").await;

    assert_eq!(app.dispatcher.mode(), InputMode::FilterInput);
    assert_eq!(app.views.counts(ResourceKind::Volumes), (1, 4));
    assert!(screen_text(&app).contains("/redis_"));

    app.handle_command(Command::FilterConfirm).await;
    assert_eq!(app.dispatcher.mode(), InputMode::Normal);
    assert!(screen_text(&app).starts_with("Volumes: 1/4  Filter: redis"));
}

#[tokio::test]
async fn backspace_widens_filter() {
    let mut app = demo_app().await;
    type_filter(&mut app, "app_p").await;
    assert_eq!(app.views.counts(ResourceKind::Volumes), (1, 4));
    app.handle_command(Command::FilterBackspace).await;
    assert_eq!(app.views.counts(ResourceKind::Volumes), (2, 4));
}

#[tokio::test]
async fn cancel_restores_previous_filter() {
    let mut app = demo_app().await;
    type_filter(&mut app, "app").await;
    app.handle_command(Command::FilterConfirm).await;

    type_filter(&mut app, "zzz").await;
    assert_eq!(app.views.counts(ResourceKind::Volumes), (0, 4));
    app.handle_command(Command::FilterCancel).await;
    assert_eq!(app.views.filter_pattern(ResourceKind::Volumes).as_deref(), Some("app"));

    app.handle_command(Command::ClearFilter).await;
    assert_eq!(app.views.filter_pattern(ResourceKind::Volumes), None);
    assert_eq!(app.views.counts(ResourceKind::Volumes), (4, 4));
}

#[tokio::test]
async fn sort_marks_header() {
    let mut app = demo_app().await;
    app.handle_command(Command::Sort).await;
    assert!(screen_text(&app).contains("VOLUME NAME ▲"));
    app.handle_command(Command::ToggleSortOrder).await;
    assert!(screen_text(&app).contains("VOLUME NAME ▼"));
}

#[tokio::test]
async fn fetch_error_is_shown_and_rows_are_kept() {
    let volumes = StaticSource::shared(vec![VolumeRecord::new("keep-me", "local")]);
    let mut sources = crate::demo::sources();
    sources.volumes = volumes.clone();
    let mut app = started(sources, ResourceKind::Volumes).await;

    volumes.set_failure(Some(FetchError::Connection("daemon unreachable".into())));
    app.handle_command(Command::Refresh).await;

    let text = screen_text(&app);
    assert!(text.contains("keep-me"));
    assert!(text.contains("Connection failed: daemon unreachable"));

    volumes.set_failure(None);
    app.handle_command(Command::Refresh).await;
    assert!(!screen_text(&app).contains("daemon unreachable"));
}

#[tokio::test]
async fn resize_changes_visible_rows() {
    let mut app = demo_app().await;
    app.resize(WIDTH, 6);
    app.handle_command(Command::SelectLast).await;
    assert_eq!(app.views.selected_name(ResourceKind::Volumes).as_deref(), Some("shared-assets"));
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, 6)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    let text = to_text(terminal.backend().buffer());
    assert!(text.contains("shared-assets"));
    assert!(!text.contains("app_pgdata"));
}

#[tokio::test]
async fn quit_stops_the_loop() {
    let mut app = demo_app().await;
    app.handle_command(Command::Quit).await;
    assert!(!app.running);
}
