//! Rendering of command results.

use console::Style;
use m6_theme::{ResolvedFrom, ThemePreference};
use serde::Serialize;

/// What a command reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub key: String,
    pub is_dark_mode: bool,
    pub theme: ThemePreference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cleared: bool,
}

impl Report {
    pub fn new(key: &str, theme: ThemePreference) -> Self {
        Self {
            key: key.to_string(),
            is_dark_mode: theme.is_dark(),
            theme,
            source: None,
            cleared: false,
        }
    }

    pub fn with_source(mut self, source: ResolvedFrom) -> Self {
        self.source = Some(source_label(source));
        self
    }

    pub fn cleared(mut self) -> Self {
        self.cleared = true;
        self
    }
}

pub fn source_label(source: ResolvedFrom) -> &'static str {
    match source {
        ResolvedFrom::DisplayMarker => "display-marker",
        ResolvedFrom::Storage => "storage",
        ResolvedFrom::Ambient => "system",
    }
}

/// The toggle button label: a sun for light, a moon for dark.
pub fn theme_badge(theme: ThemePreference) -> String {
    match theme {
        ThemePreference::Light => Style::new().yellow().bold().apply_to("☀ light").to_string(),
        ThemePreference::Dark => Style::new().blue().bold().apply_to("☾ dark").to_string(),
    }
}

pub fn render_text(report: &Report) -> String {
    let key = Style::new().dim().apply_to(&report.key);
    let mut line = format!("{}: {}", key, theme_badge(report.theme));
    if let Some(source) = report.source {
        line.push_str(&format!(" (from {})", source));
    }
    if report.cleared {
        line.push_str(" [stored preference cleared]");
    }
    line
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
