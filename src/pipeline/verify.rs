// One verification run, end to end.
//
// Data flows strictly one way: fetchers -> evaluators -> aggregation.
// Every fetch happens at most once per run; the group snapshot is shared
// by the blacklist and social checks. Fetches execute in sequence on the
// calling task — there is no concurrency to reason about here.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::blacklist;
use crate::checks::age::{self, AgeFinding};
use crate::checks::blacklist as blacklist_rules;
use crate::checks::social;
use crate::checks::username;
use crate::checks::verdict::Verdict;
use crate::config::Config;
use crate::roblox::badges::{Badge, UserBadges};
use crate::roblox::groups::GroupMembership;
use crate::roblox::{friends, groups, thumbnails, users, RobloxClient};

/// Everything one run produced, for rendering and for the JSON report.
#[derive(Debug)]
pub struct Verification {
    pub user_id: u64,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub groups: Vec<GroupMembership>,
    /// `None` when the count was unverifiable or the run ended at the
    /// dismissal gate before fetching it.
    pub friend_count: Option<u64>,
    pub instant_dismissals: Vec<String>,
    pub red_flags: Vec<String>,
    /// Badge count as counted (short-circuited at the pass threshold);
    /// `None` when social checks never ran.
    pub badge_count: Option<u64>,
    pub oldest_badges: Vec<Badge>,
    pub verdict: Verdict,
    pub generated_at: DateTime<Utc>,
}

/// Verify one account.
///
/// Errors only when there is nothing to evaluate: unknown username, or the
/// profile/group fetches both needed for any rule came back empty. Every
/// other failure degrades inside the checks.
pub async fn verify_user(
    client: &RobloxClient,
    config: &Config,
    username: &str,
    blacklist_url: Option<&str>,
) -> Result<Verification> {
    let username = username.trim();
    if username.is_empty() {
        bail!("Provide a non-empty username.");
    }

    let Some(user_id) = users::lookup_user_id(client, username).await else {
        bail!("User '{username}' not found.");
    };
    info!(user_id = user_id, username = username, "Resolved user");

    let user_info = users::fetch_user_info(client, user_id)
        .await
        .context("Could not fetch user info from the Roblox API")?;
    let group_memberships = groups::fetch_group_roles(client, user_id)
        .await
        .context("Could not fetch groups from the Roblox API")?;

    // Live blacklist, merged with the stored IFD list for this run only.
    let mut merged_ifd = config.ifd_blacklist_ids.clone();
    if let Some(url) = blacklist_url {
        merged_ifd.extend(blacklist::fetch_live_blacklist(client, url).await);
    }

    let mut instant_dismissals: Vec<String> = Vec::new();
    let mut red_flags: Vec<String> = Vec::new();

    match age::check_account_age(
        user_info.created.as_deref(),
        Utc::now(),
        config.min_account_age_days,
    ) {
        AgeFinding::Dismissal(msg) => instant_dismissals.push(msg),
        AgeFinding::RedFlag(msg) => red_flags.push(msg),
        AgeFinding::Clear(msg) => debug!(age = %msg, "Account age check passed"),
    }

    let name_findings = username::check_username(&user_info.name, config);
    if let Some(msg) = name_findings.dismissal {
        instant_dismissals.push(msg);
    }
    red_flags.extend(name_findings.red_flags);

    instant_dismissals.extend(blacklist_rules::check_blacklists(
        user_id,
        &group_memberships,
        &merged_ifd,
        config,
    ));

    let avatar_url = thumbnails::fetch_avatar_url(client, user_id).await;
    let generated_at = Utc::now();

    // Dismissal gate: every dismissal check above already ran, so the
    // reasons are reported together — but no social fetches happen past
    // this point.
    if !instant_dismissals.is_empty() {
        info!(
            user_id = user_id,
            reasons = instant_dismissals.len(),
            "Instant dismissal"
        );
        return Ok(Verification {
            user_id,
            username: user_info.name,
            display_name: user_info.display_name,
            avatar_url,
            groups: group_memberships,
            friend_count: None,
            instant_dismissals,
            red_flags,
            badge_count: None,
            oldest_badges: Vec::new(),
            verdict: Verdict::Dismissed,
            generated_at,
        });
    }

    // Fetched once, reused by the check and the report.
    let friend_count = friends::fetch_friend_count(client, user_id).await;

    let badge_source = UserBadges::new(client, user_id);
    let social_findings =
        social::check_social_activity(friend_count, &group_memberships, &badge_source, config)
            .await;
    red_flags.extend(social_findings.red_flags);

    let verdict = Verdict::from_findings(&instant_dismissals, &red_flags);
    info!(
        user_id = user_id,
        red_flags = red_flags.len(),
        verdict = verdict.as_str(),
        "Verification complete"
    );

    Ok(Verification {
        user_id,
        username: user_info.name,
        display_name: user_info.display_name,
        avatar_url,
        groups: group_memberships,
        friend_count,
        instant_dismissals,
        red_flags,
        badge_count: Some(social_findings.badge_count),
        oldest_badges: social_findings.oldest_badges,
        verdict,
        generated_at,
    })
}
