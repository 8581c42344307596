// Unit tests for the account-age and username checks.
//
// Pure functions only — no network, no clock. The age check takes `now`
// explicitly so boundary conditions are exact.

use chrono::{Duration, TimeZone, Utc};

use muster::checks::age::{check_account_age, parse_creation_timestamp, AgeFinding};
use muster::checks::username::check_username;
use muster::config::Config;

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

// ============================================================
// Account age — strict less-than boundary
// ============================================================

#[test]
fn age_exactly_at_minimum_is_not_dismissed() {
    let now = fixed_now();
    let created = (now - Duration::days(60)).to_rfc3339();
    let finding = check_account_age(Some(&created), now, 60);
    assert!(
        matches!(finding, AgeFinding::Clear(_)),
        "exactly 60 days old must pass, got {finding:?}"
    );
}

#[test]
fn age_one_day_under_minimum_is_dismissed() {
    let now = fixed_now();
    let created = (now - Duration::days(59)).to_rfc3339();
    let finding = check_account_age(Some(&created), now, 60);
    match finding {
        AgeFinding::Dismissal(msg) => {
            assert!(msg.contains("59 days old"), "message was: {msg}");
            assert!(msg.contains("under 60"), "message was: {msg}");
        }
        other => panic!("expected dismissal, got {other:?}"),
    }
}

#[test]
fn age_brand_new_account_is_dismissed() {
    let now = fixed_now();
    let created = now.to_rfc3339();
    let finding = check_account_age(Some(&created), now, 60);
    assert!(matches!(finding, AgeFinding::Dismissal(_)));
}

#[test]
fn missing_created_date_is_a_red_flag_not_dismissal() {
    let finding = check_account_age(None, fixed_now(), 60);
    match finding {
        AgeFinding::RedFlag(msg) => assert!(msg.contains("not available"), "message was: {msg}"),
        other => panic!("expected red flag, got {other:?}"),
    }
}

#[test]
fn unparseable_created_date_is_a_red_flag() {
    let finding = check_account_age(Some("yesterday-ish"), fixed_now(), 60);
    match finding {
        AgeFinding::RedFlag(msg) => {
            assert!(msg.contains("yesterday-ish"), "message was: {msg}")
        }
        other => panic!("expected red flag, got {other:?}"),
    }
}

// ============================================================
// Timestamp parsing — Z, offset, and naive forms
// ============================================================

#[test]
fn parses_z_suffixed_timestamp() {
    let parsed = parse_creation_timestamp("2020-03-01T10:30:00Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 3, 1, 10, 30, 0).unwrap());
}

#[test]
fn parses_offset_timestamp_normalized_to_utc() {
    let parsed = parse_creation_timestamp("2020-03-01T10:30:00+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 3, 1, 8, 30, 0).unwrap());
}

#[test]
fn naive_timestamp_assumed_utc() {
    let parsed = parse_creation_timestamp("2020-03-01T10:30:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 3, 1, 10, 30, 0).unwrap());
}

#[test]
fn fractional_seconds_accepted() {
    assert!(parse_creation_timestamp("2020-03-01T10:30:00.123Z").is_some());
    assert!(parse_creation_timestamp("2020-03-01T10:30:00.123").is_some());
}

#[test]
fn garbage_timestamp_rejected() {
    assert!(parse_creation_timestamp("03/01/2020").is_none());
}

// ============================================================
// Username check
// ============================================================

fn config_with_digit_threshold(threshold: usize) -> Config {
    Config {
        username_digit_threshold: threshold,
        ..Config::default()
    }
}

#[test]
fn alt_substring_flags_but_three_digits_do_not() {
    let config = config_with_digit_threshold(4);
    let findings = check_username("baAlt123", &config);
    assert!(findings.dismissal.is_none());
    assert_eq!(findings.red_flags.len(), 1, "flags: {:?}", findings.red_flags);
    assert!(findings.red_flags[0].contains("'alt'"));
}

#[test]
fn digit_count_at_threshold_flags() {
    let config = config_with_digit_threshold(4);
    let findings = check_username("user1234", &config);
    assert_eq!(findings.red_flags.len(), 1);
    assert!(findings.red_flags[0].contains("4 digits"));
}

#[test]
fn impersonation_match_is_case_insensitive_dismissal() {
    let mut config = config_with_digit_threshold(4);
    config.impersonation_names.insert("cpl_smith".to_string());
    let findings = check_username("CPL_Smith", &config);
    assert!(findings
        .dismissal
        .as_deref()
        .is_some_and(|d| d.contains("impersonates")));
}

#[test]
fn nsfw_word_dismisses_and_names_first_match() {
    let mut config = config_with_digit_threshold(4);
    config.nsfw_words.insert("bbb".to_string());
    config.nsfw_words.insert("aaa".to_string());
    let findings = check_username("xx_aaabbb_xx", &config);
    // BTreeSet iterates sorted, so "aaa" wins the message.
    assert_eq!(
        findings.dismissal.as_deref(),
        Some("Username contains offensive term: 'aaa'.")
    );
}

#[test]
fn impersonation_takes_precedence_over_nsfw_message() {
    let mut config = config_with_digit_threshold(4);
    config.impersonation_names.insert("badname".to_string());
    config.nsfw_words.insert("bad".to_string());
    let findings = check_username("BadName", &config);
    assert!(findings
        .dismissal
        .as_deref()
        .is_some_and(|d| d.contains("impersonates")));
}

#[test]
fn clean_username_produces_nothing() {
    let config = config_with_digit_threshold(4);
    let findings = check_username("cooluser", &config);
    assert!(findings.dismissal.is_none());
    assert!(findings.red_flags.is_empty());
}
