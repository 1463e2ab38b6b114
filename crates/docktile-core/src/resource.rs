use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use jiff::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Containers,
    Images,
    Networks,
    Volumes,
}

impl ResourceKind {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Containers => "ps",
            Self::Images => "img",
            Self::Networks => "net",
            Self::Volumes => "vol",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Containers => "Containers",
            Self::Images => "Images",
            Self::Networks => "Networks",
            Self::Volumes => "Volumes",
        }
    }

    pub fn all() -> &'static [ResourceKind] {
        &[Self::Containers, Self::Images, Self::Networks, Self::Volumes]
    }

    /// Accepts the config spelling (`"containers"`), the display name or the short name.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .find(|k| k.display_name().eq_ignore_ascii_case(s) || k.short_name().eq_ignore_ascii_case(s))
            .copied()
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|k| k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|k| k == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Exact width, shrunk only when the screen is too narrow.
    Fixed(u16),
    /// Share of whatever the fixed columns leave, by weight.
    Fill(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: ColumnWidth,
}

impl Column {
    pub const fn fixed(title: &'static str, width: u16) -> Self {
        Self { title, width: ColumnWidth::Fixed(width) }
    }

    pub const fn fill(title: &'static str, weight: u16) -> Self {
        Self { title, width: ColumnWidth::Fill(weight) }
    }
}

/// Coarse health of a record, used only for row coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Running,
    Pending,
    Failed,
}

pub trait SortKey: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    fn label(&self) -> &'static str;
    /// Column whose header carries the sort marker, if any.
    fn column(&self) -> Option<usize>;
}

/// Per-resource capabilities consumed by the generic list widget:
/// identity, column layout, sortable fields and row formatting.
pub trait Resource: Send + Sync + 'static {
    type SortKey: SortKey;

    const KIND: ResourceKind;

    fn name(&self) -> &str;
    fn columns() -> &'static [Column];
    /// Cycle order for repeated sort requests.
    fn sort_keys() -> &'static [Self::SortKey];
    fn compare(&self, other: &Self, key: Self::SortKey) -> Ordering;
    /// One cell per entry of [`Resource::columns`].
    fn row(&self) -> Vec<String>;

    /// Text the filter pattern is matched against.
    fn filter_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name())
    }

    fn tone(&self) -> Tone {
        Tone::Normal
    }
}

pub fn age_since_unix(created: i64) -> Duration {
    Timestamp::from_second(created).map(age_since).unwrap_or_default()
}

fn age_since(ts: Timestamp) -> Duration {
    Timestamp::now()
        .since(ts)
        .ok()
        .map(|diff| Duration::from_secs(diff.get_seconds().unsigned_abs()))
        .unwrap_or_default()
}

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Decimal units, the way the docker CLI prints image sizes.
pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

    let bytes = bytes.max(0);
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}B")
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}

pub fn short_id(id: &str) -> &str {
    let id = id.strip_prefix("sha256:").unwrap_or(id);
    match id.char_indices().nth(12) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
