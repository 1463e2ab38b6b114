//! In-memory sink for `tracing` output. The terminal is in raw mode on the alternate screen, so log lines
//! are kept here and surfaced in the status bar instead of being written to stderr.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

const MAX_LOG_LINES: usize = 500;

static LOG_BUFFER: OnceLock<Mutex<VecDeque<String>>> = OnceLock::new();

fn buffer() -> &'static Mutex<VecDeque<String>> {
    LOG_BUFFER.get_or_init(|| Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES)))
}

fn commit_line(line: &str) {
    let line = line.trim_end();
    if line.is_empty() {
        return;
    }
    let mut guard = buffer().lock().unwrap_or_else(PoisonError::into_inner);
    push_bounded(&mut guard, line, MAX_LOG_LINES);
}

fn push_bounded(lines: &mut VecDeque<String>, line: &str, max: usize) {
    lines.push_back(line.to_string());
    while lines.len() > max {
        lines.pop_front();
    }
}

pub fn latest_line() -> Option<String> {
    buffer().lock().unwrap_or_else(PoisonError::into_inner).back().cloned()
}

#[derive(Clone, Copy, Default)]
pub struct AppLogMakeWriter;

impl<'a> MakeWriter<'a> for AppLogMakeWriter {
    type Writer = AppLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        AppLogWriter { pending: String::new() }
    }
}

/// Collects partial writes and commits one entry per complete line.
pub struct AppLogWriter {
    pending: String,
}

impl Write for AppLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=pos).collect();
            commit_line(&line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            commit_line(&std::mem::take(&mut self.pending));
        }
        Ok(())
    }
}

impl Drop for AppLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
