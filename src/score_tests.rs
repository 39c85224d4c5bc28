use super::*;
use crate::checker::Finding;

#[test]
fn zero_total_has_zero_percentage() {
    let score = Score::from_counts(0, 0);
    assert_eq!(score.total, 0);
    assert!(score.percentage.abs() < f64::EPSILON);
}

#[test]
fn counts_are_consistent() {
    for (passed, failed) in [(0, 5), (3, 1), (7, 0), (1, 2)] {
        let score = Score::from_counts(passed, failed);
        assert_eq!(score.score + score.failed(), score.total);
        assert!((0.0..=100.0).contains(&score.percentage));
    }
}

#[test]
fn percentage_is_not_rounded() {
    let score = Score::from_counts(2, 1);
    assert!((score.percentage - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn from_findings() {
    let findings: Findings = [Finding::pass("a"), Finding::pass("b"), Finding::fail("c"), Finding::pass("d")]
        .into_iter()
        .collect();
    let score = Score::from(&findings);
    assert_eq!((score.score, score.total), (3, 4));
    assert!((score.percentage - 75.0).abs() < f64::EPSILON);
}

#[test]
fn quality_tier_boundaries() {
    assert_eq!(QualityTier::from_percentage(100.0), QualityTier::Excellent);
    assert_eq!(QualityTier::from_percentage(90.0), QualityTier::Excellent);
    assert_eq!(QualityTier::from_percentage(89.9), QualityTier::Good);
    assert_eq!(QualityTier::from_percentage(75.0), QualityTier::Good);
    assert_eq!(QualityTier::from_percentage(74.9), QualityTier::Acceptable);
    assert_eq!(QualityTier::from_percentage(60.0), QualityTier::Acceptable);
    assert_eq!(QualityTier::from_percentage(40.0), QualityTier::NeedsImprovement);
    assert_eq!(QualityTier::from_percentage(39.9), QualityTier::Poor);
    assert_eq!(QualityTier::from_percentage(0.0), QualityTier::Poor);
}

#[test]
fn compliance_tier_boundaries() {
    assert_eq!(ComplianceTier::from_percentage(95.0), ComplianceTier::Fully);
    assert_eq!(ComplianceTier::from_percentage(94.9), ComplianceTier::Mostly);
    assert_eq!(ComplianceTier::from_percentage(80.0), ComplianceTier::Mostly);
    assert_eq!(ComplianceTier::from_percentage(60.0), ComplianceTier::Partially);
    assert_eq!(ComplianceTier::from_percentage(59.9), ComplianceTier::NonCompliant);
}

#[test]
fn tiers_serialize_as_labels() {
    assert_eq!(
        serde_json::to_value(QualityTier::NeedsImprovement).unwrap(),
        "Needs Improvement"
    );
    assert_eq!(
        serde_json::to_value(ComplianceTier::Fully).unwrap(),
        "Fully UV-Compliant"
    );
    assert_eq!(ComplianceTier::NonCompliant.to_string(), "Non-UV-Compliant");
}
