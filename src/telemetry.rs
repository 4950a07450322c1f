use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

pub const LOG_LEVEL_KEY: &str = "portfolio-log-level";
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info.rank());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
        }
    }

    fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

pub fn parse_log_level(raw: Option<&str>, default: LogLevel) -> LogLevel {
    match raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("debug") => LogLevel::Debug,
        Some("info") => LogLevel::Info,
        Some("warn") | Some("warning") => LogLevel::Warn,
        Some("error") => LogLevel::Error,
        _ => default,
    }
}

pub fn set_min_level(level: LogLevel) {
    MIN_LEVEL.store(level.rank(), AtomicOrdering::Relaxed);
}

pub fn min_level() -> LogLevel {
    LogLevel::from_rank(MIN_LEVEL.load(AtomicOrdering::Relaxed))
}

pub fn enabled(level: LogLevel) -> bool {
    level >= min_level()
}

/// Flattens `fields` (when it is an object) into a `{ts, level, event, ...}` line.
pub fn event_payload(ts_millis: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts_millis)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.entry(key).or_insert(value);
        }
    }

    Value::Object(payload)
}

pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if !enabled(level) {
        return;
    }

    let line = event_payload(now_unix_millis(), level, event, fields).to_string();
    emit(level, &line);
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_from_debug_to_error() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn unknown_or_blank_level_falls_back_to_default() {
        assert_eq!(parse_log_level(Some(" DEBUG "), DEFAULT_LOG_LEVEL), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("warning"), DEFAULT_LOG_LEVEL), LogLevel::Warn);
        assert_eq!(parse_log_level(Some("trace"), DEFAULT_LOG_LEVEL), LogLevel::Info);
        assert_eq!(parse_log_level(Some("   "), LogLevel::Error), LogLevel::Error);
        assert_eq!(parse_log_level(None, DEFAULT_LOG_LEVEL), LogLevel::Info);
    }

    #[test]
    fn payload_flattens_fields_without_clobbering_envelope() {
        let payload = event_payload(
            1_700_000_000_000,
            LogLevel::Warn,
            "section_missing",
            json!({ "section": "leadership", "event": "overwritten?" }),
        );

        assert_eq!(
            payload,
            json!({
                "ts": 1_700_000_000_000u64,
                "level": "warn",
                "event": "section_missing",
                "section": "leadership",
            })
        );
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(1, LogLevel::Info, "app_mounted", json!(null));

        assert_eq!(payload, json!({ "ts": 1, "level": "info", "event": "app_mounted" }));
    }
}
