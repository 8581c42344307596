// Live blacklist loader.
//
// Moderators maintain an extra blacklist as a published Google Sheet; the
// verifier pulls its CSV export at the start of a run and unions the IDs
// with the configured IFD list for that run only. The URL is restricted to
// exactly https://docs.google.com before any network I/O happens — this
// tool must not be coaxable into fetching arbitrary content. Every failure
// mode yields an empty set: the caller proceeds with the static list.

use std::collections::HashSet;

use tracing::{info, warn};
use url::Url;

use crate::roblox::RobloxClient;

/// The only host live blacklist documents may be fetched from.
pub const ALLOWED_BLACKLIST_HOST: &str = "docs.google.com";

/// Check whether a blacklist URL is acceptable: secure transport and the
/// exact allowed host, nothing else.
pub fn is_allowed_source(raw_url: &str) -> bool {
    let Ok(parsed) = Url::parse(raw_url) else {
        return false;
    };
    parsed.scheme() == "https" && parsed.host_str() == Some(ALLOWED_BLACKLIST_HOST)
}

/// Extract user IDs from CSV text: every cell that is purely numeric
/// (after trimming whitespace and surrounding quotes) joins the set.
/// Non-numeric cells are skipped, not errors.
pub fn parse_csv_ids(text: &str) -> HashSet<u64> {
    let mut ids = HashSet::new();
    for line in text.lines() {
        for cell in line.split(',') {
            let cell = cell.trim().trim_matches('"').trim();
            if !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(id) = cell.parse::<u64>() {
                    ids.insert(id);
                }
            }
        }
    }
    ids
}

/// Fetch and parse a live blacklist document.
///
/// A rejected URL, network failure, or unparseable document all produce an
/// empty set — "no additional blacklist data available".
pub async fn fetch_live_blacklist(client: &RobloxClient, raw_url: &str) -> HashSet<u64> {
    if raw_url.is_empty() {
        return HashSet::new();
    }
    if !is_allowed_source(raw_url) {
        warn!(
            url = raw_url,
            "Live blacklist URL rejected (https://{ALLOWED_BLACKLIST_HOST} only)"
        );
        return HashSet::new();
    }

    let text = match client.get_text(raw_url).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Live blacklist fetch failed, using stored list only");
            return HashSet::new();
        }
    };

    let ids = parse_csv_ids(&text);
    info!(count = ids.len(), "Loaded live blacklist IDs");
    ids
}
