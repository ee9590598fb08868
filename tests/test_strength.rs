use wowgen::strength::*;

#[test]
fn test_moderate_when_variety_low() {
    let report = evaluate_strength("aB3!aB3!aB3!");
    assert_eq!(report.length_score, 12);
    assert_eq!(report.variety_score, 4);
    assert_eq!(report.label, StrengthLabel::Moderate);
}

#[test]
fn test_strong() {
    let report = evaluate_strength("abcdefghijkl");
    assert_eq!(report, StrengthReport {
        length_score: 12,
        variety_score: 12,
        label: StrengthLabel::Strong,
    });
}

#[test]
fn test_weak_when_short() {
    let report = evaluate_strength("ab");
    assert_eq!(report.length_score, 2);
    assert_eq!(report.variety_score, 2);
    assert_eq!(report.label, StrengthLabel::Weak);
}

#[test]
fn test_thresholds() {
    // 长度够但种类不足
    assert_eq!(evaluate_strength("aaaaaaaaaaaaaaaa").label, StrengthLabel::Weak);
    assert_eq!(evaluate_strength("abcdef").label, StrengthLabel::Moderate);
    assert_eq!(evaluate_strength("abcde").label, StrengthLabel::Weak);
    assert_eq!(evaluate_strength("abcabc").label, StrengthLabel::Weak);
    assert_eq!(evaluate_strength("abcdefgabcde").label, StrengthLabel::Moderate);
    assert_eq!(evaluate_strength("abcdefghabcd").label, StrengthLabel::Strong);
    assert_eq!(evaluate_strength("").label, StrengthLabel::Weak);
}

#[test]
fn test_counts_code_points() {
    let report = evaluate_strength("héllo wörld");
    assert_eq!(report.length_score, 11);
    assert_eq!(report.variety_score, 9);
}

#[test]
fn test_deterministic() {
    let password = "Tr0ub4dor&3";
    assert_eq!(evaluate_strength(password), evaluate_strength(password));
}

#[test]
fn test_report_display() {
    let report = evaluate_strength("aB3!aB3!aB3!");
    assert_eq!(report.to_string(), "Moderate (length: 12, variety: 4)");
}

#[test]
fn test_assess_password_strength_range() {
    let (_, weak_score, _) = assess_password_strength("password");
    let (_, strong_score, _) = assess_password_strength("correct-horse-battery-staple-9!Qz");
    assert!(weak_score <= 1);
    assert!(strong_score <= 4);
    assert!(strong_score > weak_score);
}
