// Group membership fetch.
//
// Fetched once per verification run and reused by both the blacklist check
// and the social-activity check — the two must see the same snapshot.

use serde::Deserialize;
use tracing::{debug, warn};

use super::client::RobloxClient;

/// One group the account belongs to, flattened from the wire format.
#[derive(Debug, Clone)]
pub struct GroupMembership {
    pub group_id: u64,
    pub group_name: String,
    pub owner_id: Option<u64>,
    pub role_name: Option<String>,
}

// -- Serde types for groups.roblox.com/v1/users/{id}/groups/roles --

#[derive(Deserialize)]
struct GroupRolesResponse {
    #[serde(default)]
    data: Vec<GroupRoleEntry>,
}

#[derive(Deserialize)]
struct GroupRoleEntry {
    group: Option<GroupRecord>,
    role: Option<RoleRecord>,
}

#[derive(Deserialize)]
struct GroupRecord {
    id: u64,
    #[serde(default)]
    name: String,
    owner: Option<OwnerRecord>,
}

#[derive(Deserialize)]
struct OwnerRecord {
    #[serde(rename = "userId")]
    user_id: Option<u64>,
}

#[derive(Deserialize)]
struct RoleRecord {
    name: Option<String>,
}

/// Fetch every group membership for a user.
///
/// Entries missing their group record are skipped; `None` means the call
/// itself failed and nothing can be said about the user's groups.
pub async fn fetch_group_roles(
    client: &RobloxClient,
    user_id: u64,
) -> Option<Vec<GroupMembership>> {
    let url = format!("https://groups.roblox.com/v1/users/{user_id}/groups/roles");
    let resp = match client.get_json::<GroupRolesResponse>(&url, &[]).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Group roles fetch failed");
            return None;
        }
    };

    let memberships: Vec<GroupMembership> = resp
        .data
        .into_iter()
        .filter_map(|entry| {
            let group = entry.group?;
            Some(GroupMembership {
                group_id: group.id,
                group_name: group.name,
                owner_id: group.owner.and_then(|o| o.user_id),
                role_name: entry.role.and_then(|r| r.name),
            })
        })
        .collect();

    debug!(
        user_id = user_id,
        count = memberships.len(),
        "Fetched group memberships"
    );

    Some(memberships)
}
