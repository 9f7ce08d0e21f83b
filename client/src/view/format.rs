use chrono::TimeDelta;

pub const FAIL: &str = "91";

/// Envuelve `text` en el codigo ANSI dado, solo si los colores están activos.
pub fn colorize(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Milisegundos a `H:MM:SS.mmm`. Duraciones negativas se muestran como "-".
pub fn format_duration_ms(ms: i64) -> String {
    match TimeDelta::try_milliseconds(ms) {
        Some(d) if ms >= 0 => format!(
            "{}:{:02}:{:02}.{:03}",
            d.num_hours(),
            d.num_minutes() % 60,
            d.num_seconds() % 60,
            d.num_milliseconds() % 1000
        ),
        _ => "-".to_string(),
    }
}
