use params_slug::{
    is_valid_slug, require_slug, slugify, slugify_with, unique_slug, validate_slug, ErrorCode,
    Slug, SlugPolicy,
};

#[test]
fn validation_agrees_with_grammar() {
    assert!(is_valid_slug("abc-123"));
    assert!(!is_valid_slug("Abc-123"));
    assert!(!is_valid_slug("-abc"));
    assert!(!is_valid_slug("abc--def"));
    assert!(!is_valid_slug(""));
}

#[test]
fn normalization_examples() {
    let cases = [
        ("Hello World", "hello-world"),
        ("  Multi   Space  ", "multi-space"),
        ("Already-valid-slug", "already-valid-slug"),
        ("!!!", ""),
        ("CamelCase_With.Dots", "camelcase-with-dots"),
        ("-leading-and-trailing-", "leading-and-trailing"),
    ];

    for (input, expected) in cases {
        assert_eq!(slugify(input), expected, "slugify({:?})", input);
    }
}

#[test]
fn empty_result_is_the_only_invalid_output() {
    for input in ["", "   ", "!!!", "---", "\t\n", "ñ", "日本語"] {
        let slug = slugify(input);
        assert_eq!(slug, "", "slugify({:?})", input);
        assert!(!is_valid_slug(&slug));
    }
}

#[test]
fn very_long_input_is_normalized() {
    let input = "Word ".repeat(10_000);
    let slug = slugify(&input);
    assert!(is_valid_slug(&slug));
    assert_eq!(slug.len(), "word-".len() * 10_000 - 1);
}

#[test]
fn routing_layer_flow() {
    let policy = SlugPolicy {
        max_length: Some(19),
        reserved: vec!["api".to_string(), "New".to_string()],
    };

    let slug = require_slug("Quarterly Planning Session 2025", "slug", &policy).unwrap();
    assert_eq!(slug, "quarterly-planning");
    assert!(validate_slug(&slug, "slug", &policy).is_ok());

    let err = require_slug("API", "slug", &policy).unwrap_err();
    assert_eq!(err.code, ErrorCode::SlugReserved);

    let err = require_slug("???", "slug", &policy).unwrap_err();
    assert_eq!(err.code, ErrorCode::SlugEmpty);
}

#[test]
fn database_layer_flow() {
    let mut existing: Vec<String> = Vec::new();
    let policy = SlugPolicy::default();

    for name in ["Team Sync", "team sync", "TEAM-SYNC"] {
        let slug = unique_slug(name, "slug", &policy, |s| existing.iter().any(|e| e == s)).unwrap();
        existing.push(slug);
    }

    assert_eq!(existing, vec!["team-sync", "team-sync-2", "team-sync-3"]);
    assert!(existing.iter().all(|s| is_valid_slug(s)));
}

#[test]
fn slug_newtype_round_trips_through_json() {
    let slug = Slug::from_text("Launch Checklist").unwrap();
    let json = serde_json::to_string(&slug).unwrap();
    assert_eq!(json, "\"launch-checklist\"");

    let back: Slug = serde_json::from_str(&json).unwrap();
    assert_eq!(back, slug);
}

#[test]
fn policy_truncation_never_leaves_trailing_hyphen() {
    let policy = SlugPolicy {
        max_length: Some(5),
        reserved: Vec::new(),
    };
    assert_eq!(slugify_with("abcd efgh", &policy), "abcd");
    assert_eq!(slugify_with("ab cd ef", &policy), "ab-cd");
}
