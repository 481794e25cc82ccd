use ot_oracle::validate_json;

const STALE: &str =
    "Repl.it uses operational transformations to keep everyone in a multiplayer repl in sync.";
const TRIMMED: &str = "Repl.it uses operational transformations.";
const REWORDED: &str =
    "We use operational transformations to keep everyone in a multiplayer repl in sync.";

#[test]
fn validate_log_reference_fixture_matrix() {
    // (stale, latest, log, expected ok) — the upstream producer's example
    // logs, replayed verbatim.
    let fixtures: &[(&str, &str, &str, bool)] = &[
        (
            STALE,
            TRIMMED,
            r#"[{"op": "skip", "count": 40}, {"op": "delete", "count": 47}]"#,
            true,
        ),
        (
            STALE,
            TRIMMED,
            r#"[{"op": "skip", "count": 45}, {"op": "delete", "count": 47}]"#,
            false,
        ),
        (
            STALE,
            TRIMMED,
            r#"[{"op": "skip", "count": 40}, {"op": "delete", "count": 47}, {"op": "skip", "count": 2}]"#,
            false,
        ),
        (
            STALE,
            REWORDED,
            r#"[{"op": "delete", "count": 7}, {"op": "insert", "chars": "We"}, {"op": "skip", "count": 4}, {"op": "delete", "count": 1}]"#,
            true,
        ),
        (
            STALE,
            "We can use operational transformations to keep everyone in a multiplayer repl in sync.",
            r#"[{"op": "delete", "count": 7}, {"op": "insert", "chars": "We"}, {"op": "skip", "count": 4}, {"op": "delete", "count": 1}]"#,
            false,
        ),
        (STALE, STALE, r#"[]"#, true),
        (
            STALE,
            TRIMMED,
            r#"[{"op": "skip", "chars": 40}]"#,
            false,
        ),
    ];

    for (stale, latest, log, expected) in fixtures {
        let result = validate_json(stale, latest, log, 0);
        assert_eq!(
            result.ok, *expected,
            "log {log} expected ok={expected}, got reason: {}",
            result.reason
        );
        assert_eq!(result.reason.is_empty(), *expected);
    }
}

#[test]
fn validate_log_skip_past_deletion_span_reports_out_of_bounds() {
    // skip 45 leaves only 43 chars after the cursor; delete 47 overshoots.
    let result = validate_json(
        STALE,
        TRIMMED,
        r#"[{"op": "skip", "count": 45}, {"op": "delete", "count": 47}]"#,
        0,
    );
    assert!(!result.ok);
    assert!(result.reason.contains("out of bounds"), "{}", result.reason);
    assert!(result.reason.contains("delete"), "{}", result.reason);
}

#[test]
fn validate_log_wrong_insert_text_reports_text_mismatch() {
    let result = validate_json(
        STALE,
        REWORDED,
        r#"[{"op": "delete", "count": 7}, {"op": "insert", "chars": "We can"}, {"op": "skip", "count": 4}, {"op": "delete", "count": 1}]"#,
        0,
    );
    assert!(!result.ok);
    assert!(
        result.reason.contains("does not match the latest text"),
        "{}",
        result.reason
    );
}

#[test]
fn validate_log_nonzero_initial_cursor() {
    // Start mid-document and trim the tail from there.
    let result = validate_json(
        STALE,
        TRIMMED,
        r#"[{"op": "delete", "count": 47}]"#,
        40,
    );
    assert!(result.ok, "{}", result.reason);
}

#[test]
fn validate_log_initial_cursor_at_text_length_is_invalid() {
    let result = validate_json(STALE, STALE, r#"[]"#, STALE.chars().count());
    assert!(!result.ok);
    assert!(
        result.reason.contains("initial cursor"),
        "{}",
        result.reason
    );
}

#[test]
fn validate_log_huge_counts_are_rejected_not_panicked() {
    // Wire-legal i64 extremes must come back as rejections.
    for log in [
        r#"[{"op": "skip", "count": 1}, {"op": "skip", "count": 9223372036854775807}]"#,
        r#"[{"op": "skip", "count": 1}, {"op": "delete", "count": 9223372036854775807}]"#,
        r#"[{"op": "skip", "count": 1}, {"op": "skip", "count": -9223372036854775808}]"#,
    ] {
        let result = validate_json(STALE, STALE, log, 0);
        assert!(!result.ok);
        assert!(result.reason.contains("out of bounds"), "{}", result.reason);
    }
}

#[test]
fn validate_log_unicode_offsets_count_chars() {
    // "ünïcödé" is 7 chars but 11 bytes; counts address chars.
    let result = validate_json(
        "ünïcödé!",
        "ü!",
        r#"[{"op": "skip", "count": 1}, {"op": "delete", "count": 6}]"#,
        0,
    );
    assert!(result.ok, "{}", result.reason);
}
