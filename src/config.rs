// Central configuration with per-field defensive coercion.
//
// The config file is a loosely-typed JSON object maintained by community
// moderators, so every field is coerced individually: bad elements are
// dropped, bad thresholds fall back to their hardcoded defaults, and a
// missing or malformed file degrades to `Config::default()`. Loading can
// never fail — a verifier that refuses to start over a typo in config.json
// would be worse than one running on defaults.

use std::collections::{BTreeSet, HashSet};
use std::env;
use std::fs;

use serde_json::Value;
use tracing::{debug, warn};

/// Default config file path, overridable via the MUSTER_CONFIG env var.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

pub const DEFAULT_MIN_ACCOUNT_AGE_DAYS: i64 = 60;
pub const DEFAULT_MIN_FRIEND_COUNT: u64 = 30;
pub const DEFAULT_MIN_NON_BA_GROUP_COUNT: usize = 13;
pub const DEFAULT_MIN_BADGE_COUNT: u64 = 300;
pub const DEFAULT_OLDEST_BADGES_TO_CHECK: usize = 90;
pub const DEFAULT_USERNAME_DIGIT_THRESHOLD: usize = 4;
pub const DEFAULT_MAX_BADGE_PAGES: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 6;

/// Resolved verifier configuration.
///
/// ID sets use `HashSet` (membership tests only). Word sets use `BTreeSet`
/// so iteration order is deterministic — the first matching NSFW word is
/// the one reported, and that should not vary between runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Account IDs trusted to own BA-themed groups outside the official list.
    pub friendly_owner_ids: HashSet<u64>,
    /// Officially recognized BA UK group IDs.
    pub ba_group_ids: HashSet<u64>,
    /// Group IDs whose membership is an instant dismissal.
    pub blacklisted_group_ids: HashSet<u64>,
    /// Badge IDs that mark prior BA involvement.
    pub ba_badge_ids: HashSet<u64>,
    /// User IDs on the IFD blacklist (merged with the live list at runtime).
    pub ifd_blacklist_ids: HashSet<u64>,
    /// User IDs on the BA blacklist.
    pub ba_blacklist_ids: HashSet<u64>,
    /// Disallowed username substrings (lower-cased at load).
    pub nsfw_words: BTreeSet<String>,
    /// Usernames that impersonate BA members (lower-cased at load).
    pub impersonation_names: BTreeSet<String>,

    pub min_account_age_days: i64,
    pub min_friend_count: u64,
    pub min_non_ba_group_count: usize,
    pub min_badge_count: u64,
    pub oldest_badges_to_check: usize,
    pub username_digit_threshold: usize,
    pub max_badge_pages: u32,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    /// Hardcoded defaults with empty sets.
    fn default() -> Self {
        Self {
            friendly_owner_ids: HashSet::new(),
            ba_group_ids: HashSet::new(),
            blacklisted_group_ids: HashSet::new(),
            ba_badge_ids: HashSet::new(),
            ifd_blacklist_ids: HashSet::new(),
            ba_blacklist_ids: HashSet::new(),
            nsfw_words: BTreeSet::new(),
            impersonation_names: BTreeSet::new(),
            min_account_age_days: DEFAULT_MIN_ACCOUNT_AGE_DAYS,
            min_friend_count: DEFAULT_MIN_FRIEND_COUNT,
            min_non_ba_group_count: DEFAULT_MIN_NON_BA_GROUP_COUNT,
            min_badge_count: DEFAULT_MIN_BADGE_COUNT,
            oldest_badges_to_check: DEFAULT_OLDEST_BADGES_TO_CHECK,
            username_digit_threshold: DEFAULT_USERNAME_DIGIT_THRESHOLD,
            max_badge_pages: DEFAULT_MAX_BADGE_PAGES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the config file.
    ///
    /// The path comes from MUSTER_CONFIG or falls back to `config.json`.
    /// A missing, unreadable, or malformed file yields the defaults.
    pub fn load() -> Self {
        let path = env::var("MUSTER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, degrading to defaults.
    pub fn load_from(path: &str) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = path, error = %e, "Config file not readable, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) if value.is_object() => {
                debug!(path = path, "Loaded config file");
                Self::from_value(&value)
            }
            Ok(_) => {
                warn!(path = path, "Config root is not a JSON object, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = path, error = %e, "Config file is not valid JSON, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve a configuration from a raw JSON object.
    ///
    /// Every field is coerced independently; nothing here can fail.
    pub fn from_value(value: &Value) -> Self {
        Self {
            friendly_owner_ids: int_set(value.get("FRIENDLY_OWNER_IDS")),
            ba_group_ids: int_set(value.get("BA_UK_GROUP_IDS")),
            blacklisted_group_ids: int_set(value.get("BLACKLISTED_GROUP_IDS")),
            ba_badge_ids: int_set(value.get("BA_BADGE_IDS")),
            ifd_blacklist_ids: int_set(value.get("IFD_BLACKLIST_IDS")),
            ba_blacklist_ids: int_set(value.get("BA_BLACKLIST_IDS")),
            nsfw_words: str_set(value.get("NSFW_WORDS")),
            impersonation_names: str_set(value.get("BA_MEMBER_IMPERSONATION_LIST")),
            min_account_age_days: int_or(
                value.get("MIN_ACCOUNT_AGE_DAYS"),
                DEFAULT_MIN_ACCOUNT_AGE_DAYS,
            ),
            min_friend_count: uint_or(value.get("MIN_FRIEND_COUNT"), DEFAULT_MIN_FRIEND_COUNT),
            min_non_ba_group_count: uint_or(
                value.get("MIN_NON_BA_GROUP_COUNT"),
                DEFAULT_MIN_NON_BA_GROUP_COUNT as u64,
            ) as usize,
            min_badge_count: uint_or(value.get("MIN_BADGE_COUNT"), DEFAULT_MIN_BADGE_COUNT),
            oldest_badges_to_check: uint_or(
                value.get("OLDEST_BADGES_TO_CHECK"),
                DEFAULT_OLDEST_BADGES_TO_CHECK as u64,
            ) as usize,
            username_digit_threshold: uint_or(
                value.get("USERNAME_DIGIT_THRESHOLD"),
                DEFAULT_USERNAME_DIGIT_THRESHOLD as u64,
            ) as usize,
            max_badge_pages: uint_or(
                value.get("MAX_BADGE_PAGES"),
                DEFAULT_MAX_BADGE_PAGES as u64,
            ) as u32,
            request_timeout_secs: uint_or(
                value.get("REQUEST_TIMEOUT_SECONDS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
        }
    }
}

/// Coerce a single JSON value into an integer ID, if possible.
///
/// Accepts JSON numbers and strings containing an integer. Negative values
/// are rejected — Roblox IDs are non-negative.
fn coerce_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Coerce a config field into a set of integer IDs.
///
/// Accepts a scalar or an array; elements that can't be coerced are
/// silently dropped rather than failing the whole field.
fn int_set(value: Option<&Value>) -> HashSet<u64> {
    let mut out = HashSet::new();
    match value {
        Some(Value::Array(items)) => {
            for item in items {
                if let Some(id) = coerce_id(item) {
                    out.insert(id);
                }
            }
        }
        Some(v) => {
            if let Some(id) = coerce_id(v) {
                out.insert(id);
            }
        }
        None => {}
    }
    out
}

/// Coerce a config field into a lower-cased string set.
///
/// Scalars become a one-element set. Numbers are stringified so a bare
/// numeric entry in a word list still participates in substring checks.
fn str_set(value: Option<&Value>) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    let mut push = |v: &Value| match v {
        Value::String(s) => {
            out.insert(s.to_lowercase());
        }
        Value::Number(n) => {
            out.insert(n.to_string());
        }
        _ => {}
    };
    match value {
        Some(Value::Array(items)) => {
            for item in items {
                push(item);
            }
        }
        Some(v) => push(v),
        None => {}
    }
    out
}

/// Coerce a scalar threshold, falling back to the default on failure.
fn int_or(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Unsigned variant of `int_or` for count-style thresholds.
fn uint_or(value: Option<&Value>, default: u64) -> u64 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = Config::from_value(&json!({}));
        assert_eq!(cfg.min_account_age_days, DEFAULT_MIN_ACCOUNT_AGE_DAYS);
        assert_eq!(cfg.max_badge_pages, DEFAULT_MAX_BADGE_PAGES);
        assert!(cfg.ba_group_ids.is_empty());
        assert!(cfg.nsfw_words.is_empty());
    }

    #[test]
    fn scalar_accepted_in_int_set_field() {
        let cfg = Config::from_value(&json!({ "BA_UK_GROUP_IDS": 12345 }));
        assert!(cfg.ba_group_ids.contains(&12345));
    }

    #[test]
    fn non_coercible_elements_dropped() {
        let cfg = Config::from_value(&json!({
            "IFD_BLACKLIST_IDS": [1, "2", "not-a-number", null, 3.5, -4, 7]
        }));
        assert_eq!(
            cfg.ifd_blacklist_ids,
            HashSet::from([1, 2, 7]),
            "only cleanly-integral non-negative entries survive"
        );
    }

    #[test]
    fn string_sets_lowercased() {
        let cfg = Config::from_value(&json!({ "NSFW_WORDS": ["BadWord", "WORSE"] }));
        assert!(cfg.nsfw_words.contains("badword"));
        assert!(cfg.nsfw_words.contains("worse"));
    }

    #[test]
    fn bad_threshold_falls_back() {
        let cfg = Config::from_value(&json!({ "MIN_FRIEND_COUNT": "plenty" }));
        assert_eq!(cfg.min_friend_count, DEFAULT_MIN_FRIEND_COUNT);
    }

    #[test]
    fn numeric_string_threshold_accepted() {
        let cfg = Config::from_value(&json!({ "MIN_ACCOUNT_AGE_DAYS": "90" }));
        assert_eq!(cfg.min_account_age_days, 90);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = Config::load_from("/definitely/not/a/real/path.json");
        assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }
}
