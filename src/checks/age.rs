// Account-age check.
//
// Dismissal requires positive proof of youth: the age in whole days must
// parse and be strictly under the minimum. A missing or unparseable
// creation date degrades to a red flag — absence of proof is not proof of
// violation, but it does warrant a human look.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Outcome of the account-age check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeFinding {
    /// Account is verifiably younger than the minimum.
    Dismissal(String),
    /// Age could not be verified; flag for manual review.
    RedFlag(String),
    /// Age requirement met.
    Clear(String),
}

/// Parse a creation timestamp as the API returns it.
///
/// Accepts `Z`-suffixed and offset-qualified ISO 8601 forms; a naive
/// timestamp (no zone at all) is assumed UTC.
pub fn parse_creation_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Evaluate account age against the minimum, relative to `now`.
pub fn check_account_age(created: Option<&str>, now: DateTime<Utc>, min_days: i64) -> AgeFinding {
    let Some(created) = created else {
        return AgeFinding::RedFlag("Created date not available. Manual review required.".to_string());
    };
    let Some(created_at) = parse_creation_timestamp(created) else {
        return AgeFinding::RedFlag(format!("Could not parse creation date: {created}"));
    };

    let days_old = (now - created_at).num_days();
    if days_old < min_days {
        AgeFinding::Dismissal(format!("Account is {days_old} days old (under {min_days})."))
    } else {
        AgeFinding::Clear(format!("Account is {days_old} days old."))
    }
}
