// Social-activity check — red flags only, runs after the dismissal gate.
//
// Friend count and group memberships arrive pre-fetched (the pipeline
// fetches each once and reuses them); badge data is pulled here because
// both badge operations short-circuit and the bounds belong with the scan.

use crate::config::Config;
use crate::roblox::badges::{self, Badge, BadgePages, PAGE_LIMIT};
use crate::roblox::groups::GroupMembership;

/// Red flags plus the badge data gathered along the way, kept for display.
#[derive(Debug, Default)]
pub struct SocialFindings {
    pub red_flags: Vec<String>,
    pub badge_count: u64,
    pub oldest_badges: Vec<Badge>,
}

/// Evaluate friend count, group breadth, and badge history.
///
/// An unknown friend count is its own flag — it is not treated as zero.
pub async fn check_social_activity<P: BadgePages + Sync>(
    friend_count: Option<u64>,
    groups: &[GroupMembership],
    badge_source: &P,
    config: &Config,
) -> SocialFindings {
    let mut findings = SocialFindings::default();

    match friend_count {
        None => findings
            .red_flags
            .push("Could not verify friend count.".to_string()),
        Some(count) if count < config.min_friend_count => findings.red_flags.push(format!(
            "Fewer than {} friends ({count}).",
            config.min_friend_count
        )),
        Some(_) => {}
    }

    let non_ba_count = groups
        .iter()
        .filter(|g| !config.ba_group_ids.contains(&g.group_id))
        .count();
    if non_ba_count < config.min_non_ba_group_count {
        findings.red_flags.push(format!(
            "Fewer than {} non-BA groups ({non_ba_count}).",
            config.min_non_ba_group_count
        ));
    }

    findings.badge_count =
        badges::count_total(badge_source, config.min_badge_count, config.max_badge_pages).await;
    if findings.badge_count < config.min_badge_count {
        findings.red_flags.push(format!(
            "Fewer than {} badges ({} total).",
            config.min_badge_count, findings.badge_count
        ));
    }

    // Scan the oldest badges for prior BA involvement; first hit is enough.
    let scan_limit = config.oldest_badges_to_check.min(PAGE_LIMIT as usize);
    findings.oldest_badges =
        badges::collect_oldest(badge_source, scan_limit, config.max_badge_pages).await;
    for badge in &findings.oldest_badges {
        if config.ba_badge_ids.contains(&badge.id) {
            findings.red_flags.push(format!(
                "BA-related badge found among oldest badges (ID: {}).",
                badge.id
            ));
            break;
        }
    }

    findings
}
