//! Behavioural tests for remark classification
//!
//! Exercises the classifier through the public API the dashboard uses.

use leadboard_core::{
    disposition_style_key, temperature_style_key, Classification, Lead, RemarkClassifier,
    Temperature,
};
use leadboard_disposition::{DispositionEngine, TemperatureCounts};

/// End-to-end: a batch of remarks maps to the expected temperature sequence
#[test]
fn test_remark_batch_temperatures() {
    let engine = DispositionEngine::builtin();
    let remarks = [
        "DNC please",
        "payment this week confirmed",
        "",
        "customer busy right now",
        "not interested in certification course",
    ];

    let temps: Vec<Temperature> = remarks
        .iter()
        .map(|r| engine.classify(r).temperature)
        .collect();

    assert_eq!(
        temps,
        vec![
            Temperature::Dead,
            Temperature::Hot,
            Temperature::Cold,
            Temperature::Warm,
            Temperature::Cold,
        ]
    );
}

/// Identical input always yields identical output
#[test]
fn test_classification_is_deterministic() {
    let engine = DispositionEngine::builtin();
    let remarks = [
        "Payment next month after budget cycle, highly interested",
        "Fee is high, looking for more affordable options",
        "   ",
        "zzz",
        "RPC not available, contact person unavailable this week",
    ];

    for remark in remarks {
        assert_eq!(engine.classify(remark), engine.classify(remark));
    }

    let other = DispositionEngine::builtin();
    for remark in remarks {
        assert_eq!(engine.classify(remark), other.classify(remark));
    }
}

#[test]
fn test_fallback_totality() {
    let engine = DispositionEngine::builtin();
    let expected = Classification::new("Remark Not Clear", "Remark Not Clear", Temperature::Cold);

    assert_eq!(engine.classify(""), expected);
    assert_eq!(engine.classify("   "), expected);
    assert_eq!(engine.classify_remark(None), expected);
    assert_eq!(engine.classify("asdkjasdkj random text xyz"), expected);
}

/// Negative phrases outrank the generic "interested" rule
#[test]
fn test_negative_phrases_have_priority() {
    let engine = DispositionEngine::builtin();

    let c = engine.classify("not interested, just exploring options");
    assert_eq!(c.disposition, "Not interested");
    assert_ne!(c.temperature, Temperature::Hot);

    let c = engine.classify("Not interested at all");
    assert_eq!(c.sub_disposition, "General");
    assert_eq!(c.temperature, Temperature::Cold);

    let c = engine.classify("Interested, details shared on whatsapp");
    assert_eq!(c.disposition, "Follow up");
    assert_eq!(c.temperature, Temperature::Hot);
}

#[test]
fn test_dashboard_sample_remarks() {
    let engine = DispositionEngine::builtin();
    let cases = [
        ("Converted - payment done for Microsoft 365 Copilot training", "Converted", Temperature::Hot),
        ("Shared PO for data analytics training program", "Prospect", Temperature::Hot),
        ("Waiting for company approval from IT department", "Follow up", Temperature::Warm),
        ("Not answering calls, moved to callback bucket", "Call Back", Temperature::Warm),
        ("Next batch same course - wants to join April batch", "Next Batch", Temperature::Warm),
        ("Enrolled in other company for similar training", "Fallout", Temperature::Cold),
        ("New lead, did not have a conversation yet", "New Lead", Temperature::Cold),
        ("Looking for job opportunities, not training", "Not interested", Temperature::Cold),
        ("Wrong number - invalid contact number", "Wrong Number", Temperature::Dead),
        ("Did not enquire - accidental lead from ad click", "Not Enquired", Temperature::Dead),
        ("Language barrier - not comfortable in english", "Not Eligible", Temperature::Dead),
    ];

    for (remark, disposition, temperature) in cases {
        let c = engine.classify(remark);
        assert_eq!(c.disposition, disposition, "remark: {}", remark);
        assert_eq!(c.temperature, temperature, "remark: {}", remark);
    }
}

#[test]
fn test_badge_keys_for_classified_remarks() {
    let engine = DispositionEngine::builtin();

    let c = engine.classify("Other counselor will take this");
    assert_eq!(c.disposition, "Other Agent Callback");
    assert_eq!(disposition_style_key(&c.disposition), "callback");
    assert_eq!(temperature_style_key(c.temperature.as_str()), "warm");

    let c = engine.classify("");
    assert_eq!(disposition_style_key(&c.disposition), "unclear");
    assert_eq!(temperature_style_key(c.temperature.as_str()), "cold");
}

/// Every disposition in the table has a dedicated style
#[test]
fn test_every_disposition_is_styled() {
    let engine = DispositionEngine::builtin();
    for disposition in engine.table().dispositions() {
        assert_ne!(
            disposition_style_key(disposition),
            "unclear",
            "no style for {}",
            disposition
        );
    }
}

#[test]
fn test_classifier_as_trait_object() {
    let classifier: std::sync::Arc<dyn RemarkClassifier> =
        std::sync::Arc::new(DispositionEngine::builtin());

    let leads = vec![
        Lead::new("One").with_remark("paid in full"),
        Lead {
            last_remark: Some("switched off".to_string()),
            ..Lead::new("Two")
        },
        Lead::new("Three"),
    ];

    let counts = TemperatureCounts::tally(classifier.as_ref(), &leads);
    assert_eq!(counts.hot, 1);
    assert_eq!(counts.warm, 1);
    assert_eq!(counts.cold, 1);
}
