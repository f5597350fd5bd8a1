pub mod browse;
pub mod draw;
pub mod find;
pub mod read;
pub mod show;
pub mod validate;

use arcana_core::Locale;

/// Display word for a card orientation.
fn orientation(reversed: bool, locale: Locale) -> &'static str {
    match (locale, reversed) {
        (Locale::En, false) => "upright",
        (Locale::En, true) => "reversed",
        (Locale::Zh, false) => "正位",
        (Locale::Zh, true) => "逆位",
    }
}

/// Shorten text for table cells, respecting character boundaries.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.is_empty() {
        return "—".to_string();
    }
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Serialize to pretty JSON for `--json` output.
fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("cannot serialize output: {e}"))
}
