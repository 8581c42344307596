// Unit tests for the blacklist rules and the live blacklist loader's
// pure parts (URL allowlist, CSV cell extraction) — no network access.

use std::collections::HashSet;

use muster::blacklist::{is_allowed_source, parse_csv_ids};
use muster::checks::blacklist::check_blacklists;
use muster::config::Config;
use muster::roblox::groups::GroupMembership;

fn group(id: u64, name: &str, owner_id: Option<u64>) -> GroupMembership {
    GroupMembership {
        group_id: id,
        group_name: name.to_string(),
        owner_id,
        role_name: Some("Member".to_string()),
    }
}

// ============================================================
// Look-alike group guard
// ============================================================

#[test]
fn unrecognized_british_army_group_dismisses_with_group_name() {
    let config = Config::default();
    let groups = vec![group(999, "British Army Reserves", Some(42))];
    let dismissals = check_blacklists(1, &groups, &HashSet::new(), &config);
    assert_eq!(dismissals.len(), 1);
    assert!(
        dismissals[0].contains("British Army Reserves"),
        "reason was: {}",
        dismissals[0]
    );
}

#[test]
fn friendly_owner_exempts_lookalike_group() {
    let mut config = Config::default();
    config.friendly_owner_ids.insert(42);
    let groups = vec![group(999, "British Army Reserves", Some(42))];
    let dismissals = check_blacklists(1, &groups, &HashSet::new(), &config);
    assert!(dismissals.is_empty(), "got: {dismissals:?}");
}

#[test]
fn recognized_group_id_exempts_lookalike_group() {
    let mut config = Config::default();
    config.ba_group_ids.insert(999);
    let groups = vec![group(999, "British Army UK", Some(7))];
    let dismissals = check_blacklists(1, &groups, &HashSet::new(), &config);
    assert!(dismissals.is_empty(), "got: {dismissals:?}");
}

#[test]
fn marker_match_is_case_insensitive() {
    let config = Config::default();
    let groups = vec![group(555, "THE BRITISH ARMY ELITE", None)];
    let dismissals = check_blacklists(1, &groups, &HashSet::new(), &config);
    assert_eq!(dismissals.len(), 1);
}

#[test]
fn ownerless_lookalike_group_still_dismisses() {
    // A missing owner record cannot count as a friendly owner.
    let config = Config::default();
    let groups = vec![group(555, "British Army Cadets", None)];
    let dismissals = check_blacklists(1, &groups, &HashSet::new(), &config);
    assert_eq!(dismissals.len(), 1);
}

// ============================================================
// User and group blacklists
// ============================================================

#[test]
fn merged_ifd_blacklist_hit_dismisses() {
    let config = Config::default();
    let merged: HashSet<u64> = HashSet::from([77]);
    let dismissals = check_blacklists(77, &[], &merged, &config);
    assert_eq!(dismissals.len(), 1);
    assert!(dismissals[0].contains("IFD"));
}

#[test]
fn ba_blacklist_hit_dismisses() {
    let mut config = Config::default();
    config.ba_blacklist_ids.insert(88);
    let dismissals = check_blacklists(88, &[], &HashSet::new(), &config);
    assert_eq!(dismissals.len(), 1);
    assert!(dismissals[0].contains("BA Blacklist"));
}

#[test]
fn blacklisted_group_membership_dismisses_per_group() {
    let mut config = Config::default();
    config.blacklisted_group_ids.insert(10);
    config.blacklisted_group_ids.insert(20);
    let groups = vec![
        group(10, "Raiders", Some(1)),
        group(20, "More Raiders", Some(2)),
        group(30, "Harmless Hobby Club", Some(3)),
    ];
    let dismissals = check_blacklists(1, &groups, &HashSet::new(), &config);
    assert_eq!(dismissals.len(), 2);
    assert!(dismissals[0].contains("Raiders"));
    assert!(dismissals[1].contains("More Raiders"));
}

#[test]
fn all_applicable_reasons_reported_together() {
    let mut config = Config::default();
    config.ba_blacklist_ids.insert(5);
    let merged: HashSet<u64> = HashSet::from([5]);
    let groups = vec![group(999, "British Army Reserves", None)];
    let dismissals = check_blacklists(5, &groups, &merged, &config);
    assert_eq!(dismissals.len(), 3, "got: {dismissals:?}");
}

// ============================================================
// Live blacklist loader — host allowlist
// ============================================================

#[test]
fn https_docs_google_com_allowed() {
    assert!(is_allowed_source(
        "https://docs.google.com/spreadsheets/d/abc/export?format=csv"
    ));
}

#[test]
fn wrong_host_rejected() {
    assert!(!is_allowed_source("https://evil.example.com/export.csv"));
}

#[test]
fn plain_http_rejected_even_on_allowed_host() {
    assert!(!is_allowed_source("http://docs.google.com/export.csv"));
}

#[test]
fn lookalike_subdomain_rejected() {
    assert!(!is_allowed_source(
        "https://docs.google.com.evil.example.com/export.csv"
    ));
}

#[test]
fn unparseable_url_rejected() {
    assert!(!is_allowed_source("not a url at all"));
}

// ============================================================
// Live blacklist loader — CSV cell extraction
// ============================================================

#[test]
fn numeric_cells_collected_across_rows() {
    let csv = "123,abc,456\n789,,\nnotes,1011";
    assert_eq!(parse_csv_ids(csv), HashSet::from([123, 456, 789, 1011]));
}

#[test]
fn quoted_and_padded_cells_accepted() {
    let csv = "\"123\" , 456 ,\"  789 \"";
    assert_eq!(parse_csv_ids(csv), HashSet::from([123, 456, 789]));
}

#[test]
fn non_numeric_and_mixed_cells_skipped() {
    let csv = "12a,-5,3.14,1e6,";
    assert!(parse_csv_ids(csv).is_empty());
}

#[test]
fn empty_document_yields_empty_set() {
    assert!(parse_csv_ids("").is_empty());
}
