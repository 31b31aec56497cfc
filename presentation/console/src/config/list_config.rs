use std::env;

use business::domain::product::list_state::{DEFAULT_EVENT_CAPACITY, ListConfig};

/// Load list coordinator tunables from environment variables
///
/// Environment variables:
/// - LIST_STEP_BACK_ON_EMPTY_PAGE: Go to the previous page when a delete empties
///   the current one (default: true)
/// - LIST_EVENT_CAPACITY: Event channel buffer size (default: 64)
pub fn list_config_from_env() -> ListConfig {
    list_config_from_lookup(|key| env::var(key).ok())
}

pub fn list_config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ListConfig {
    let defaults = ListConfig::default();

    let step_back_on_empty_page = match lookup("LIST_STEP_BACK_ON_EMPTY_PAGE") {
        None => defaults.step_back_on_empty_page,
        Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
            tracing::warn!(
                "Invalid LIST_STEP_BACK_ON_EMPTY_PAGE '{}', using {}",
                raw,
                defaults.step_back_on_empty_page
            );
            defaults.step_back_on_empty_page
        }),
    };

    let event_capacity = match lookup("LIST_EVENT_CAPACITY") {
        None => defaults.event_capacity,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(capacity) if capacity > 0 => capacity,
            _ => {
                tracing::warn!(
                    "Invalid LIST_EVENT_CAPACITY '{}', using {}",
                    raw,
                    DEFAULT_EVENT_CAPACITY
                );
                DEFAULT_EVENT_CAPACITY
            }
        },
    };

    ListConfig {
        step_back_on_empty_page,
        event_capacity,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
