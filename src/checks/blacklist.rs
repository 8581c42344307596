// Blacklist checks — user lists and group-level rules.
//
// The look-alike guard dismisses membership in any group whose name
// carries the organizational marker unless the group is officially
// recognized or its owner is pre-approved. Impersonation groups are a
// recurring problem; sanctioned spin-offs run by trusted owners are not.

use std::collections::HashSet;

use crate::config::Config;
use crate::roblox::groups::GroupMembership;

/// Lower-cased marker identifying BA-themed group names.
pub const GROUP_NAME_MARKER: &str = "british army";

/// Run every blacklist rule, returning all dismissal reasons found.
///
/// `merged_ifd` is the configured IFD list unioned with the live blacklist
/// for this run.
pub fn check_blacklists(
    user_id: u64,
    groups: &[GroupMembership],
    merged_ifd: &HashSet<u64>,
    config: &Config,
) -> Vec<String> {
    let mut dismissals = Vec::new();

    if merged_ifd.contains(&user_id) {
        dismissals.push("User is on the IFD Blacklist.".to_string());
    }
    if config.ba_blacklist_ids.contains(&user_id) {
        dismissals.push("User is on the BA Blacklist.".to_string());
    }

    for membership in groups {
        if config.blacklisted_group_ids.contains(&membership.group_id) {
            dismissals.push(format!(
                "User is in a blacklisted group: {}.",
                membership.group_name
            ));
        }

        let friendly_owner = membership
            .owner_id
            .is_some_and(|id| config.friendly_owner_ids.contains(&id));
        if membership.group_name.to_lowercase().contains(GROUP_NAME_MARKER)
            && !config.ba_group_ids.contains(&membership.group_id)
            && !friendly_owner
        {
            dismissals.push(format!(
                "User is in another British Army group: {}.",
                membership.group_name
            ));
        }
    }

    dismissals
}
