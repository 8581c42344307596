// Badge history fetching — cursor-based pagination with hard bounds.
//
// Both badge operations (listing the oldest badges, counting the total)
// walk the same paginated endpoint, so the page loop is written once
// against the `BadgePages` trait. The bounds are deliberate: a maximum
// page count, a seen-cursor set as a cycle guard, and early exit once the
// caller has what it needs. Partial accumulation is returned on any
// mid-loop failure — a short badge list is reduced information, not an
// error.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::client::RobloxClient;

/// Fixed page size requested from the badges endpoint (the API maximum).
pub const PAGE_LIMIT: u32 = 100;

/// Sort order for badge pagination. Oldest-badge scans go ascending;
/// total counting goes descending (matching how the endpoint is indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Asc",
            SortOrder::Desc => "Desc",
        }
    }
}

/// A single badge award record.
#[derive(Debug, Clone, Deserialize)]
pub struct Badge {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Award timestamp; the API has shipped this under two names.
    #[serde(default, alias = "awardedAt")]
    pub awarded: Option<String>,
}

/// One page of badge results, mirroring the wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct BadgePage {
    #[serde(default)]
    pub data: Vec<Badge>,
    #[serde(default, rename = "nextPageCursor")]
    pub next_page_cursor: Option<String>,
}

/// Source of badge pages. The live implementation hits the Roblox API;
/// tests substitute scripted pages to exercise the loop bounds.
#[async_trait]
pub trait BadgePages {
    async fn fetch_page(&self, sort: SortOrder, cursor: Option<&str>) -> Result<BadgePage>;
}

/// Badge endpoint bound to one user.
pub struct UserBadges<'a> {
    client: &'a RobloxClient,
    user_id: u64,
}

impl<'a> UserBadges<'a> {
    pub fn new(client: &'a RobloxClient, user_id: u64) -> Self {
        Self { client, user_id }
    }
}

#[async_trait]
impl BadgePages for UserBadges<'_> {
    async fn fetch_page(&self, sort: SortOrder, cursor: Option<&str>) -> Result<BadgePage> {
        let url = format!("https://badges.roblox.com/v1/users/{}/badges", self.user_id);
        let mut query = vec![
            ("limit", PAGE_LIMIT.to_string()),
            ("sortOrder", sort.as_str().to_string()),
        ];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.client.get_json(&url, &query).await
    }
}

/// Collect up to `limit` of the user's oldest badges (ascending award order).
///
/// Stops on: an empty page, enough badges accumulated, an empty or repeated
/// next-cursor, the page cap, or any fetch failure (returning what was
/// gathered so far).
pub async fn collect_oldest<P: BadgePages + Sync>(
    pages: &P,
    limit: usize,
    max_pages: u32,
) -> Vec<Badge> {
    let mut badges: Vec<Badge> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut seen_cursors: HashSet<String> = HashSet::new();
    let mut page_count = 0u32;

    while badges.len() < limit && page_count < max_pages {
        page_count += 1;

        let page = match pages.fetch_page(SortOrder::Asc, cursor.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, collected = badges.len(), "Badge page fetch failed, keeping partial results");
                break;
            }
        };

        if page.data.is_empty() {
            break;
        }
        badges.extend(page.data);

        let Some(next) = page.next_page_cursor.filter(|c| !c.is_empty()) else {
            break;
        };
        // Cycle guard: a cursor we've already followed means the server is
        // looping — bail out rather than spin.
        if !seen_cursors.insert(next.clone()) {
            warn!(cursor = %next, "Repeated pagination cursor, stopping");
            break;
        }
        cursor = Some(next);
    }

    debug!(
        collected = badges.len(),
        pages = page_count,
        "Oldest-badge scan complete"
    );

    badges.truncate(limit);
    badges
}

/// Count the user's badges, short-circuiting once `pass_threshold` is
/// reached — pages beyond the threshold can't change the verdict.
pub async fn count_total<P: BadgePages + Sync>(
    pages: &P,
    pass_threshold: u64,
    max_pages: u32,
) -> u64 {
    let mut total = 0u64;
    let mut cursor: Option<String> = None;
    let mut seen_cursors: HashSet<String> = HashSet::new();
    let mut page_count = 0u32;

    while page_count < max_pages {
        page_count += 1;

        let page = match pages.fetch_page(SortOrder::Desc, cursor.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                warn!(error = %e, counted = total, "Badge page fetch failed, keeping partial count");
                break;
            }
        };

        if page.data.is_empty() {
            break;
        }
        total += page.data.len() as u64;
        if total >= pass_threshold {
            return total;
        }

        let Some(next) = page.next_page_cursor.filter(|c| !c.is_empty()) else {
            break;
        };
        if !seen_cursors.insert(next.clone()) {
            warn!(cursor = %next, "Repeated pagination cursor, stopping");
            break;
        }
        cursor = Some(next);
    }

    debug!(total = total, pages = page_count, "Badge count complete");
    total
}
