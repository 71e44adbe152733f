use adwarden::models::MatchSource;
use adwarden::{AuthorisationEngine, DecisionReport, Registry, load_registry_file};

/// Helper to build an engine whose brand stage cannot fire, so decisions
/// exercise the registry stage.
fn registry_only_engine() -> AuthorisationEngine {
    AuthorisationEngine::with_catalog(["zzzz"])
}

#[test]
fn test_known_brand_is_authorised_without_registry() {
    let engine = AuthorisationEngine::new();
    let result = engine.decide("I love PEPSI!!", &[]);

    assert!(result.authorised, "Brand containment should authorise");
    assert_eq!(result.matched_label.as_deref(), Some("Pepsi"));
    assert_eq!(result.score, 1.0);
    assert_eq!(result.source, Some(MatchSource::Brand));
}

#[test]
fn test_registered_billboard_is_authorised() {
    let engine = registry_only_engine();
    let mut registry = Registry::new();
    registry
        .create("Valley View Storage", Some("NH-48 km 21"))
        .expect("Registration should succeed");
    registry
        .create("Joshi Tutorials", None)
        .expect("Registration should succeed");

    let result = engine.decide("VALLEY VIEW STORAGE", &registry.snapshot());
    assert!(result.authorised, "Exact registered text should authorise");
    assert_eq!(result.matched_label.as_deref(), Some("Valley View Storage"));
    assert_eq!(result.source, Some(MatchSource::Registry));

    // OCR dropped two letters; sequence similarity carries the match.
    let result = engine.decide("Vally View Storag", &registry.snapshot());
    assert!(result.authorised, "Near-exact OCR reading should authorise");
    assert_eq!(result.matched_label.as_deref(), Some("Valley View Storage"));
    assert!(result.score < 1.0);
}

#[test]
fn test_unregistered_billboard_is_unauthorised() {
    let engine = registry_only_engine();
    let mut registry = Registry::new();
    registry
        .create("Valley View Storage", None)
        .expect("Registration should succeed");
    registry
        .create("Joshi Tutorials", None)
        .expect("Registration should succeed");

    let result = engine.decide("quick brown fox", &registry.snapshot());
    assert!(!result.authorised, "Unrelated text should not authorise");
}

#[test]
fn test_reordered_registered_text_authorises_via_token_overlap() {
    let engine = registry_only_engine();
    let mut registry = Registry::new();
    registry
        .create("Sunrise Dental Clinic", None)
        .expect("Registration should succeed");

    let result = engine.decide("CLINIC dental sunrise", &registry.snapshot());
    assert!(result.authorised, "Reordered tokens should authorise");
    assert_eq!(result.score, 1.0);
    assert_eq!(result.source, Some(MatchSource::Registry));
}

/// The brand stage's threshold is deliberately permissive: longer texts
/// often clear it against some catalog brand purely on scattered character
/// overlap. Decisions that must exercise the registry therefore pin a
/// non-overlapping catalog.
#[test]
fn test_builtin_catalog_is_permissive_for_long_texts() {
    let engine = AuthorisationEngine::new();
    let result = engine.decide("valley view storage call 1800 123", &[]);

    assert!(result.authorised, "Long text should clear the brand stage");
    assert_eq!(result.source, Some(MatchSource::Brand));
    assert!(result.score >= adwarden::authorisation::BRAND_SIMILARITY_THRESHOLD);
}

#[test]
fn test_verdict_messages_for_noisy_inputs() {
    let engine = AuthorisationEngine::new();
    let cases = [
        ("I love PEPSI!!", true),
        ("McDonald's!!", true),
        ("Drink Coca-Cola daily", true),
        ("", false),
        ("@#$%", false),
    ];

    for (input, expected) in cases {
        let result = engine.decide(input, &[]);
        assert_eq!(
            result.authorised, expected,
            "Verdict mismatch for input: {:?}",
            input
        );
        let report = DecisionReport::new(input, &result);
        let expected_message = if expected {
            "Billboard is authorised."
        } else {
            "Billboard is UNAUTHORISED!"
        };
        assert_eq!(report.message, expected_message, "Message for {:?}", input);
    }
}

#[test]
fn test_registry_lifecycle_changes_decisions() {
    let engine = registry_only_engine();
    let mut registry = Registry::new();

    let result = engine.decide("valley view storage", &registry.snapshot());
    assert!(!result.authorised, "Empty registry should not authorise");

    let id = registry
        .create("Valley View Storage", None)
        .expect("Registration should succeed")
        .id;
    let result = engine.decide("valley view storage", &registry.snapshot());
    assert!(result.authorised, "Registered text should authorise");

    registry.delete(id).expect("Deletion should succeed");
    let result = engine.decide("valley view storage", &registry.snapshot());
    assert!(!result.authorised, "Deleted entry should stop authorising");
}

#[test]
fn test_snapshot_isolates_decisions_from_later_registrations() {
    let engine = registry_only_engine();
    let mut registry = Registry::new();
    let snapshot = registry.snapshot();

    registry
        .create("Valley View Storage", None)
        .expect("Registration should succeed");

    let result = engine.decide("valley view storage", &snapshot);
    assert!(
        !result.authorised,
        "A snapshot taken before registration should not see the entry"
    );
}

#[test]
fn test_registry_file_drives_decisions() {
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("registry.json");
    fs::write(
        &path,
        r#"[
            "Valley View Storage",
            {"text": "Joshi Tutorials", "location": "MG Road"},
            "!!!",
            "valley view storage"
        ]"#,
    )
    .expect("Failed to write registry file");

    let registry = load_registry_file(&path).expect("Load should succeed");
    assert_eq!(
        registry.len(),
        2,
        "Unusable and duplicate entries should be skipped"
    );

    let engine = registry_only_engine();
    let result = engine.decide("joshi tutorials", &registry.snapshot());
    assert!(result.authorised, "File-loaded entry should authorise");
    assert_eq!(result.matched_label.as_deref(), Some("Joshi Tutorials"));
}

#[test]
fn test_decision_report_json_structure() {
    let engine = AuthorisationEngine::new();
    let result = engine.decide("I love PEPSI!!", &[]);
    let report = DecisionReport::new("I love PEPSI!!", &result);

    let json = serde_json::to_value(&report).expect("Report should serialize");
    assert_eq!(json["extracted_text"], "I love PEPSI!!");
    assert_eq!(json["authorised"], true);
    assert_eq!(json["matched_label"], "Pepsi");
    assert_eq!(json["score"], 1.0);
    assert_eq!(json["confidence"], 100.0);
    assert_eq!(json["matcher"], "1-contain");
    assert_eq!(json["source"], "brand");
    assert_eq!(json["message"], "Billboard is authorised.");
    assert_eq!(
        json["reason"],
        "Matched known brand: 'Pepsi' (similarity 100.0%)"
    );
}

#[test]
fn test_near_miss_report_names_registry_candidate() {
    let engine = AuthorisationEngine::with_catalog(["abq"]);
    let mut registry = Registry::new();
    registry
        .create("za", None)
        .expect("Registration should succeed");

    let result = engine.decide("abcdefghijklmnoprs", &registry.snapshot());
    assert!(!result.authorised);

    let report = DecisionReport::new("abcdefghijklmnoprs", &result);
    assert_eq!(report.message, "Billboard is UNAUTHORISED!");
    assert_eq!(
        report.reason,
        "No authorised match; closest candidate 'za' (similarity 10.0%)"
    );
}
