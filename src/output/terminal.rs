// Colored terminal output for verification results.
//
// All terminal-specific formatting lives here; main.rs delegates.

use colored::Colorize;

use crate::checks::verdict::{Verdict, RED_FLAG_LIMIT};
use crate::config::Config;
use crate::pipeline::Verification;

use super::truncate_chars;

/// How many group rows to print before cutting off.
const MAX_GROUPS_SHOWN: usize = 200;

/// How many of the oldest badges to sample in the output.
const MAX_BADGES_SHOWN: usize = 30;

/// Render a full verification result.
pub fn display_verification(v: &Verification) {
    println!("\n{}", "=== Summary ===".bold());
    if let Some(display_name) = &v.display_name {
        println!("  Display name: {display_name}");
    }
    println!("  Username:     @{}", v.username);
    println!("  User ID:      {}", v.user_id);
    println!(
        "  Profile:      https://www.roblox.com/users/{}/profile",
        v.user_id
    );
    if let Some(avatar) = &v.avatar_url {
        println!("  Avatar:       {avatar}");
    }

    if !v.instant_dismissals.is_empty() {
        println!("\n{}", "=== INSTANT DISMISSAL ===".red().bold());
        for (i, reason) in v.instant_dismissals.iter().enumerate() {
            println!("  {}. {}", i + 1, reason.red());
        }
        return;
    }

    println!("\n{}", "=== Final Report ===".bold());
    println!("  Total red flags: {}", v.red_flags.len());
    if let Some(friend_count) = v.friend_count {
        println!("  Friends:         {friend_count}");
    }
    if let Some(badge_count) = v.badge_count {
        println!("  Badges counted:  {badge_count}");
    }
    println!("  Groups:          {}", v.groups.len());

    match v.verdict {
        Verdict::Dismissed => println!(
            "\n  {}",
            format!("DISMISSED ({RED_FLAG_LIMIT}+ red flags)").red().bold()
        ),
        Verdict::Verified => println!(
            "\n  {}",
            format!("VERIFIED (fewer than {RED_FLAG_LIMIT} red flags)")
                .green()
                .bold()
        ),
    }

    if v.red_flags.is_empty() {
        println!("\n  No red flags found.");
    } else {
        println!("\n  Red flags found:");
        for (i, flag) in v.red_flags.iter().enumerate() {
            println!("    {}. {}", i + 1, flag.yellow());
        }
    }

    println!("\n{}", "Manual checks required:".bold());
    println!("  - Review the friends list for suspicious / 'bacon' alts.");
    println!("  - Manually inspect the groups listed below.");

    display_groups(v);
    display_oldest_badges(v);
}

fn display_groups(v: &Verification) {
    if v.groups.is_empty() {
        println!("\nNo groups found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Groups (first {MAX_GROUPS_SHOWN} shown) ===").bold()
    );
    println!(
        "  {:>10}  {:<40} {:<20} {:>10}",
        "ID".dimmed(),
        "Name".dimmed(),
        "Role".dimmed(),
        "Owner".dimmed(),
    );
    for membership in v.groups.iter().take(MAX_GROUPS_SHOWN) {
        let owner = membership
            .owner_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>10}  {:<40} {:<20} {:>10}",
            membership.group_id,
            truncate_chars(&membership.group_name, 37),
            truncate_chars(membership.role_name.as_deref().unwrap_or("-"), 17),
            owner,
        );
    }
}

fn display_oldest_badges(v: &Verification) {
    if v.oldest_badges.is_empty() {
        return;
    }

    println!("\n{}", "=== Oldest badges (sample) ===".bold());
    for badge in v.oldest_badges.iter().take(MAX_BADGES_SHOWN) {
        let awarded = badge.awarded.as_deref().unwrap_or("unknown");
        println!(
            "  {:>12}  {:<40} {}",
            badge.id,
            truncate_chars(&badge.name, 37),
            awarded.dimmed(),
        );
    }
}

/// Render the resolved configuration summary (set sizes and thresholds).
pub fn display_config_summary(config: &Config) {
    println!("\n{}", "=== Configuration summary ===".bold());
    println!("  Friendly owner IDs:    {}", config.friendly_owner_ids.len());
    println!("  BA UK groups:          {}", config.ba_group_ids.len());
    println!(
        "  Blacklisted groups:    {}",
        config.blacklisted_group_ids.len()
    );
    println!("  BA badge IDs:          {}", config.ba_badge_ids.len());
    println!("  IFD blacklist users:   {}", config.ifd_blacklist_ids.len());
    println!("  BA blacklist users:    {}", config.ba_blacklist_ids.len());
    println!("  NSFW words:            {}", config.nsfw_words.len());
    println!(
        "  Impersonation names:   {}",
        config.impersonation_names.len()
    );
    println!();
    println!(
        "  Min account age:       {} days",
        config.min_account_age_days
    );
    println!("  Min friends:           {}", config.min_friend_count);
    println!(
        "  Min non-BA groups:     {}",
        config.min_non_ba_group_count
    );
    println!("  Min badges:            {}", config.min_badge_count);
    println!(
        "  Oldest badges to scan: {}",
        config.oldest_badges_to_check
    );
    println!(
        "  Username digit limit:  {}",
        config.username_digit_threshold
    );
    println!("  Max badge pages:       {}", config.max_badge_pages);
    println!(
        "  Request timeout:       {}s",
        config.request_timeout_secs
    );
}
