use docktile_config::ThemeConfig;
use docktile_core::Tone;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub accent: Color,
    pub fg: Color,
    pub title: Style,
    pub header: Style,
    pub status_bar: Style,
    pub selection: Style,
    pub text_dim: Style,
    pub status_running: Style,
    pub status_pending: Style,
    pub status_failed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let color = |s: &str| parse_color(s).unwrap_or(Color::Reset);
        let accent = color(&config.accent);
        let (header_fg, header_bg) = (color(&config.header.fg), color(&config.header.bg));

        Self {
            accent,
            fg: color(&config.fg),
            title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            header: Style::default().fg(header_fg).bg(header_bg).add_modifier(Modifier::BOLD),
            status_bar: Style::default().fg(header_fg).bg(header_bg),
            selection: Style::default().fg(color(&config.selection.fg)).bg(color(&config.selection.bg)),
            text_dim: Style::default().fg(color(&config.text_dim)),
            status_running: Style::default().fg(color(&config.status.running)),
            status_pending: Style::default().fg(color(&config.status.pending)),
            status_failed: Style::default().fg(color(&config.status.failed)),
        }
    }

    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Normal => Style::default().fg(self.fg),
            Tone::Running => self.status_running,
            Tone::Pending => self.status_pending,
            Tone::Failed => self.status_failed,
        }
    }
}

/// Parses `#rrggbb`, `rgb(r,g,b)`, a named ANSI color, or `default`.
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("invalid hex color \"{s}\": expected 6 hex digits after '#'");
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\""))
        };
        return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts = inner
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": components must be 0-255"))?;
        let [r, g, b] = parts[..] else {
            anyhow::bail!("invalid rgb color \"{s}\": expected rgb(r,g,b)");
        };
        return Ok(Color::Rgb(r, g, b));
    }

    let name = s.to_ascii_lowercase().replace(['_', '-', ' '], "");
    NAMED_COLORS.iter().find(|(names, _)| names.contains(&name.as_str())).map(|(_, color)| *color).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown color \"{s}\": expected hex (#rrggbb), rgb(r,g,b), a named color (red, blue, ...), or \"default\""
        )
    })
}

const NAMED_COLORS: &[(&[&str], Color)] = &[
    (&["black"], Color::Black),
    (&["red"], Color::Red),
    (&["green"], Color::Green),
    (&["yellow"], Color::Yellow),
    (&["blue"], Color::Blue),
    (&["magenta"], Color::Magenta),
    (&["cyan"], Color::Cyan),
    (&["gray", "grey"], Color::Gray),
    (&["darkgray", "darkgrey"], Color::DarkGray),
    (&["lightred"], Color::LightRed),
    (&["lightgreen"], Color::LightGreen),
    (&["lightyellow"], Color::LightYellow),
    (&["lightblue"], Color::LightBlue),
    (&["lightmagenta"], Color::LightMagenta),
    (&["lightcyan"], Color::LightCyan),
    (&["white"], Color::White),
];
