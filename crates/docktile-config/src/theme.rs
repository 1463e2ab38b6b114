use serde::{Deserialize, Serialize};

/// Colors as written in the config file: `#rrggbb`, `rgb(r,g,b)`, a named ANSI color or `default`.
/// Parsing happens in the UI crate; a bad value renders with the terminal's default color.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub fg: String,
    #[serde(alias = "text-dim")]
    pub text_dim: String,
    pub header: ColorPair,
    pub selection: ColorPair,
    pub status: StatusColors,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorPair {
    pub fg: String,
    pub bg: String,
}

impl ColorPair {
    fn new(fg: &str, bg: &str) -> Self {
        Self { fg: fg.into(), bg: bg.into() }
    }
}

/// Row colors keyed by resource state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusColors {
    pub running: String,
    pub pending: String,
    pub failed: String,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self { running: "#a6e3a1".into(), pending: "#f9e2af".into(), failed: "#f38ba8".into() }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#89b4fa".into(),
            fg: "#cdd6f4".into(),
            text_dim: "#6c7086".into(),
            header: ColorPair::new("#cdd6f4", "#1e1e2e"),
            selection: ColorPair::new("#cdd6f4", "#45475a"),
            status: StatusColors::default(),
        }
    }
}
