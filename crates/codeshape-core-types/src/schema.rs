//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Snapshot identifiers
pub const FIELD_SNAPSHOT_PATH: &str = "snapshot_path";
pub const FIELD_SNAPSHOT_DIGEST: &str = "snapshot_digest";

// Collection sizes
pub const FIELD_PROJECT_COUNT: &str = "project_count";
pub const FIELD_CLASS_COUNT: &str = "class_count";
pub const FIELD_PROPERTY_COUNT: &str = "property_count";
pub const FIELD_METHOD_COUNT: &str = "method_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_field_keys_match_macro_field_names() {
        // The logging macros emit `err_kind` / `err_code` as bare identifiers.
        assert_eq!(FIELD_ERR_KIND, "err_kind");
        assert_eq!(FIELD_ERR_CODE, "err_code");
    }
}
