/// Date formatting for list columns
use chrono::{DateTime, Utc};

/// `DD.MM.YYYY HH:MM`, empty when the server sent no timestamp
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_timestamp(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_default()
}

/// Weight cell: trailing zeros dropped, empty when missing
pub fn format_weight(value: Option<f64>) -> String {
    match value {
        Some(w) if w.fract() == 0.0 => format!("{}", w as i64),
        Some(w) => format!("{}", w),
        None => String::new(),
    }
}
