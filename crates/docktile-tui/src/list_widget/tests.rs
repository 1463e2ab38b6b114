use std::sync::Arc;
use std::time::Duration;

use docktile_core::{DataSource, FetchContext, FetchError, StaticSource, VolumeRecord, VolumeSortKey};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio_util::sync::CancellationToken;

use super::*;
use crate::screen::TerminalScreen;
use crate::snapshot::{assert_golden, to_text};

struct Harness {
    widget: ListWidget<VolumeRecord>,
    screen: Arc<TerminalScreen>,
    source: Arc<StaticSource<VolumeRecord>>,
}

fn harness(records: Vec<VolumeRecord>, width: u16, height: u16) -> Harness {
    let source = StaticSource::shared(records);
    let screen = Arc::new(TerminalScreen::new(width, height));
    let widget = ListWidget::new(source.clone() as Arc<dyn DataSource<VolumeRecord>>, screen.clone());
    Harness { widget, screen, source }
}

fn local_volumes(names: &[&str]) -> Vec<VolumeRecord> {
    names.iter().map(|n| VolumeRecord::new(*n, "local")).collect()
}

fn five_volumes() -> Vec<VolumeRecord> {
    local_volumes(&["volume1", "volume2", "volume3", "volume4", "volume5"])
}

fn text(widget: &ListWidget<VolumeRecord>) -> String {
    to_text(widget.buffer())
}

fn body_lines(snapshot: &str) -> Vec<&str> {
    snapshot.lines().skip(crate::layout::HEADER_ROWS as usize).filter(|l| !l.is_empty()).collect()
}

fn row_name(line: &str) -> &str {
    line.split_whitespace().last().unwrap_or("")
}

#[tokio::test]
async fn unmounted_widget_renders_blank() {
    let mut h = harness(Vec::new(), 30, 5);
    h.widget.redraw();
    assert!(!h.widget.is_mounted());
    assert_golden("unmounted", &text(&h.widget));
}

#[tokio::test]
async fn two_records_in_fetch_order() {
    let mut h = harness(local_volumes(&["volume1", "volume2"]), 30, 10);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert!(h.widget.is_mounted());
    assert_golden("two_records", &text(&h.widget));
}

#[tokio::test]
async fn mounted_without_records_shows_header() {
    let mut h = harness(Vec::new(), 30, 10);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert!(h.widget.is_mounted());
    assert_golden("mounted_empty", &text(&h.widget));
    assert_eq!(h.screen.cursor().lock().position(), None);
}

#[tokio::test]
async fn first_page_of_five() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_golden("first_page", &text(&h.widget));
}

#[tokio::test]
async fn bottom_shows_last_page() {
    let mut h = harness(five_volumes(), 30, 8);
    {
        let mut cursor = h.screen.cursor().lock();
        cursor.set_max(5);
        cursor.bottom();
    }
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_golden("last_page", &text(&h.widget));
    assert_eq!(h.widget.selected().map(|v| v.name.as_str()), Some("volume5"));
}

#[tokio::test]
async fn single_sort_orders_by_name() {
    let mut h = harness(local_volumes(&["volume5", "volume4", "volume3", "volume2", "volume1"]), 30, 8);
    h.widget.sort();
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_eq!(h.widget.active_sort_key(), Some(VolumeSortKey::Name));
    assert_golden("sorted_by_name", &text(&h.widget));
}

fn mixed_drivers() -> Vec<VolumeRecord> {
    vec![
        VolumeRecord::new("volume5", "local1"),
        VolumeRecord::new("volume4", "local1"),
        VolumeRecord::new("volume3", "local2"),
        VolumeRecord::new("volume2", "local2"),
        VolumeRecord::new("volume1", "local2"),
    ]
}

#[tokio::test]
async fn double_sort_orders_by_driver() {
    let mut h = harness(mixed_drivers(), 30, 8);
    h.widget.sort();
    h.widget.sort();
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_eq!(h.widget.active_sort_key(), Some(VolumeSortKey::Driver));
    assert_golden("sorted_by_driver", &text(&h.widget));
}

#[tokio::test]
async fn double_sort_differs_from_single_sort() {
    let mut once = harness(mixed_drivers(), 30, 20);
    once.widget.sort();
    once.widget.mount(&FetchContext::default()).await.unwrap();

    let mut twice = harness(mixed_drivers(), 30, 20);
    twice.widget.sort();
    twice.widget.sort();
    twice.widget.mount(&FetchContext::default()).await.unwrap();

    let names = |w: &ListWidget<VolumeRecord>| w.visible().map(|v| v.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&once.widget), ["volume1", "volume2", "volume3", "volume4", "volume5"]);
    assert_eq!(names(&twice.widget), ["volume5", "volume4", "volume3", "volume2", "volume1"]);
}

#[tokio::test]
async fn filter_shows_single_match() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.filter("volume3");
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_eq!(h.widget.visible_len(), 1);
    assert_eq!(h.widget.total_len(), 5);
    assert_golden("filtered", &text(&h.widget));
}

#[tokio::test]
async fn mount_is_idempotent() {
    let mut h = harness(mixed_drivers(), 30, 8);
    h.widget.sort();
    h.widget.filter("volume");
    h.widget.mount(&FetchContext::default()).await.unwrap();
    let first = h.widget.buffer().clone();
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_eq!(&first, h.widget.buffer());
}

#[tokio::test]
async fn failed_mount_keeps_previous_state() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.sort();
    h.widget.mount(&FetchContext::default()).await.unwrap();
    h.screen.cursor().lock().scroll_down();
    h.widget.redraw();
    let before = h.widget.buffer().clone();

    h.source.set_records(local_volumes(&["other"]));
    h.source.set_failure(Some(FetchError::Connection("connection refused".into())));
    let err = h.widget.mount(&FetchContext::default()).await.unwrap_err();

    assert_eq!(err, FetchError::Connection("connection refused".into()));
    assert_eq!(h.widget.last_error(), Some(&err));
    assert_eq!(&before, h.widget.buffer());
    assert_eq!(h.widget.total_len(), 5);
    assert_eq!(h.widget.active_sort_key(), Some(VolumeSortKey::Name));
    assert_eq!(h.screen.cursor().lock().position(), Some(1));

    h.source.set_failure(None);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_eq!(h.widget.last_error(), None);
    assert_eq!(h.widget.total_len(), 1);
}

#[tokio::test]
async fn failed_first_mount_marks_mounted_with_blank_buffer() {
    let mut h = harness(five_volumes(), 30, 8);
    h.source.set_failure(Some(FetchError::Api("boom".into())));
    assert!(h.widget.mount(&FetchContext::default()).await.is_err());
    assert!(h.widget.is_mounted());
    assert_eq!(h.widget.total_len(), 0);
    assert!(text(&h.widget).trim().is_empty());
}

#[tokio::test]
async fn cancelled_fetch_installs_nothing() {
    let mut h = harness(five_volumes(), 30, 8);
    let ctx = FetchContext::new(CancellationToken::new(), Duration::from_secs(5));
    ctx.cancel.cancel();
    assert_eq!(h.widget.mount(&ctx).await.unwrap_err(), FetchError::Cancelled);
    assert_eq!(h.widget.total_len(), 0);
}

#[tokio::test]
async fn slow_fetch_times_out() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    let before = text(&h.widget);

    h.source.set_delay(Some(Duration::from_secs(10)));
    let err = h.widget.mount(&FetchContext::with_timeout(Duration::from_millis(20))).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout(_)));
    assert_eq!(before, text(&h.widget));
}

#[tokio::test]
async fn shrinking_dataset_reclamps_cursor() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    h.screen.cursor().lock().bottom();
    h.widget.redraw();
    assert_eq!(h.widget.selected().map(|v| v.name.as_str()), Some("volume5"));

    h.source.set_records(local_volumes(&["volume1", "volume2"]));
    h.widget.mount(&FetchContext::default()).await.unwrap();
    assert_eq!(h.screen.cursor().lock().position(), Some(1));
    assert_eq!(h.widget.selected().map(|v| v.name.as_str()), Some("volume2"));
}

#[tokio::test]
async fn empty_result_renders_header_only() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.filter("nothing-matches");
    h.widget.mount(&FetchContext::default()).await.unwrap();
    let snapshot = text(&h.widget);
    assert!(snapshot.starts_with("Volumes: 0/5  Filter: nothing-"));
    assert!(snapshot.contains("DRIVER"));
    assert!(body_lines(&snapshot).is_empty());
    assert_eq!(h.screen.cursor().lock().position(), None);
    assert!(h.widget.selected().is_none());
}

#[tokio::test]
async fn degenerate_viewports_do_not_panic() {
    for (w, hgt) in [(0, 0), (0, 8), (30, 0), (1, 1), (3, 2), (30, 3), (30, 4)] {
        let mut h = harness(five_volumes(), w, hgt);
        h.widget.mount(&FetchContext::default()).await.unwrap();
        assert!(body_lines(&text(&h.widget)).is_empty(), "{w}x{hgt}");
    }
}

#[tokio::test]
async fn render_reflects_filter_without_fetch() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    h.source.set_failure(Some(FetchError::Api("unreachable".into())));

    h.widget.filter("volume4");
    assert_eq!(body_lines(&text(&h.widget)).len(), 1);
    h.widget.filter("");
    assert_eq!(h.widget.filter_pattern(), None);
    assert_eq!(body_lines(&text(&h.widget)).len(), 4);
}

#[tokio::test]
async fn toggle_direction_reverses_and_keeps_ties_stable() {
    let mut h = harness(mixed_drivers(), 30, 20);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    h.widget.sort();
    h.widget.sort();
    h.widget.toggle_sort_direction();

    assert!(!h.widget.is_sort_ascending());
    let names: Vec<_> = h.widget.visible().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["volume3", "volume2", "volume1", "volume5", "volume4"]);
    assert!(text(&h.widget).contains("DRIVER ▼"));
}

#[tokio::test]
async fn unmount_blanks_but_keeps_state() {
    let mut h = harness(five_volumes(), 30, 8);
    h.widget.filter("volume2");
    h.widget.mount(&FetchContext::default()).await.unwrap();
    h.widget.unmount();
    assert!(!h.widget.is_mounted());
    assert!(text(&h.widget).trim().is_empty());
    assert_eq!(h.widget.filter_pattern(), Some("volume2"));
}

#[tokio::test]
async fn widgets_share_the_screen_cursor() {
    let source = StaticSource::shared(five_volumes());
    let screen = Arc::new(TerminalScreen::new(30, 8));
    let mut a = ListWidget::new(source.clone() as Arc<dyn DataSource<VolumeRecord>>, screen.clone());
    let mut b = ListWidget::new(source as Arc<dyn DataSource<VolumeRecord>>, screen.clone());

    a.mount(&FetchContext::default()).await.unwrap();
    screen.cursor().lock().scroll_down();
    b.mount(&FetchContext::default()).await.unwrap();
    assert_eq!(b.selected().map(|v| v.name.as_str()), Some("volume2"));
}

#[tokio::test]
async fn draws_into_frame_at_offset() {
    let mut h = harness(local_volumes(&["volume1"]), 30, 6);
    h.widget.mount(&FetchContext::default()).await.unwrap();

    let mut terminal = Terminal::new(TestBackend::new(32, 8)).unwrap();
    terminal
        .draw(|frame| {
            frame.render_widget(&h.widget, Rect::new(2, 1, 30, 6));
        })
        .unwrap();
    let screen = to_text(terminal.backend().buffer());
    let lines: Vec<&str> = screen.lines().collect();
    assert_eq!(lines[1], "  Volumes: 1");
    assert_eq!(lines[4], "  ▶ local      volume1");
}

#[tokio::test]
async fn redraw_follows_cursor_with_widget_trait_in_scope() {
    use ratatui::prelude::*;

    let mut h = harness(five_volumes(), 30, 8);
    h.widget.mount(&FetchContext::default()).await.unwrap();
    h.screen.cursor().lock().bottom();
    h.widget.redraw();
    assert_golden("last_page", &text(&h.widget));

    let area = Rect::new(0, 0, 30, 8);
    let mut buf = Buffer::empty(area);
    (&h.widget).render(area, &mut buf);
    assert_eq!(to_text(&buf), text(&h.widget));
}

// Properties over a spread of datasets, viewports and patterns.

fn dataset(n: usize) -> Vec<VolumeRecord> {
    (0..n)
        .map(|i| {
            // scrambled names and a handful of repeated drivers
            let id = (i * 7 + 3) % n.max(1);
            VolumeRecord::new(format!("vol-{id:02}-{}", ["a", "b", "c"][i % 3]), format!("drv{}", i % 2))
        })
        .collect()
}

#[tokio::test]
async fn rendered_rows_never_exceed_visible_or_viewport() {
    for n in [0, 1, 3, 7, 12] {
        for height in 0..12u16 {
            let mut h = harness(dataset(n), 40, height);
            h.widget.mount(&FetchContext::default()).await.unwrap();
            let rows = body_lines(&text(&h.widget)).len();
            assert!(rows <= n.min(crate::layout::body_height(height)), "n={n} height={height} rows={rows}");
        }
    }
}

#[tokio::test]
async fn bottom_renders_last_element_of_sorted_sequence() {
    for n in [1, 4, 9, 15] {
        for sorts in 0..3 {
            let mut h = harness(dataset(n), 40, 7);
            for _ in 0..sorts {
                h.widget.sort();
            }
            h.widget.mount(&FetchContext::default()).await.unwrap();
            h.screen.cursor().lock().bottom();
            h.widget.mount(&FetchContext::default()).await.unwrap();

            let last = h.widget.visible().last().map(|v| v.name.clone()).unwrap();
            let snapshot = text(&h.widget);
            let rows = body_lines(&snapshot);
            assert_eq!(row_name(rows[rows.len() - 1]), last, "n={n} sorts={sorts}");
        }
    }
}

#[tokio::test]
async fn sort_is_stable_for_equal_keys() {
    let records = dataset(12);
    let mut h = harness(records.clone(), 40, 20);
    h.widget.sort();
    h.widget.sort();
    h.widget.mount(&FetchContext::default()).await.unwrap();

    for driver in ["drv0", "drv1"] {
        let fetched: Vec<_> = records.iter().filter(|v| v.driver == driver).map(|v| v.name.as_str()).collect();
        let shown: Vec<_> = h.widget.visible().filter(|v| v.driver == driver).map(|v| v.name.as_str()).collect();
        assert_eq!(fetched, shown);
    }
}

#[tokio::test]
async fn filter_is_sound_and_complete() {
    let records = dataset(12);
    for pattern in ["", "vol", "-0", "a", "b", "07", "zzz", "VOL"] {
        let mut h = harness(records.clone(), 40, 30);
        h.widget.filter(pattern);
        h.widget.mount(&FetchContext::default()).await.unwrap();

        let snapshot = text(&h.widget);
        for line in body_lines(&snapshot) {
            assert!(row_name(line).contains(pattern), "pattern={pattern:?} line={line:?}");
        }
        let expected = records.iter().filter(|v| v.name.contains(pattern)).count();
        assert_eq!(h.widget.visible_len(), expected, "pattern={pattern:?}");
        assert_eq!(body_lines(&snapshot).len(), expected, "pattern={pattern:?}");
    }
}
