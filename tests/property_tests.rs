//! Property-based tests for ctxlog using proptest

use ctxlog::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

fn any_field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        ".{0,16}".prop_map(FieldValue::from),
        any::<i64>().prop_map(FieldValue::from),
        (-1.0e9f64..1.0e9).prop_map(FieldValue::from),
        any::<bool>().prop_map(FieldValue::from),
        Just(FieldValue::Null),
    ]
}

fn any_context() -> impl Strategy<Value = LogContext> {
    prop::collection::btree_map("[a-z]{1,6}", any_field_value(), 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        let parsed: LogLevel = level.label().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering matches rank
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level2.is_enabled(level1), val2 >= val1);
    }

    /// Test that LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }
}

// ============================================================================
// LogContext Tests
// ============================================================================

proptest! {
    /// Merging with an empty context on either side changes nothing
    #[test]
    fn test_merge_identity(ctx in any_context()) {
        prop_assert_eq!(&ctx.merge(&LogContext::new()), &ctx);
        prop_assert_eq!(&LogContext::new().merge(&ctx), &ctx);
    }

    /// Every key of the child appears with the child's value
    #[test]
    fn test_merge_child_wins(parent in any_context(), child in any_context()) {
        let merged = parent.merge(&child);

        for (key, value) in &child {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in &parent {
            if !child.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        prop_assert!(merged.len() <= parent.len() + child.len());
    }

    /// Merging never changes its inputs
    #[test]
    fn test_merge_leaves_inputs_alone(parent in any_context(), child in any_context()) {
        let parent_before = parent.clone();
        let child_before = child.clone();
        let _ = parent.merge(&child);
        prop_assert_eq!(parent, parent_before);
        prop_assert_eq!(child, child_before);
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Any message and context render as one parseable JSON line
    #[test]
    fn test_json_event_is_single_parseable_line(
        level in any_level(),
        message in ".{0,64}",
        ctx in any_context(),
    ) {
        let bytes = JsonFormatter::new().format(level, &ctx, &message, None).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(text.matches('\n').count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        prop_assert_eq!(parsed["level"].as_str(), Some(level.to_str()));
        prop_assert_eq!(parsed["message"].as_str(), Some(message.as_str()));
    }

    /// Text output never spans more than one line, whatever the message
    #[test]
    fn test_text_event_is_single_line(message in ".{0,64}", ctx in any_context()) {
        let bytes = TextFormatter::new().format(LogLevel::Info, &ctx, &message, None).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(text.matches('\n').count(), 1);
    }

    /// An event is written exactly when its level passes the filter
    #[test]
    fn test_filter_matches_level_order(min in any_level(), level in any_level()) {
        prop_assume!(!level.is_terminal());

        let sink = Arc::new(ConcurrentWriter::new(Vec::new()));
        let logger = Logger::new(Arc::clone(&sink), TextFormatter::new(), LogContext::new());
        logger.set_level(min);
        logger.log(level, "event").unwrap();

        let written = sink.with_inner(|buf| !buf.is_empty());
        prop_assert_eq!(written, level >= min);
    }
}
