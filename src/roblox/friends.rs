// Friend count fetch.

use serde::Deserialize;
use tracing::warn;

use super::client::RobloxClient;

#[derive(Deserialize)]
struct FriendCountResponse {
    count: Option<u64>,
}

/// Fetch the friend count for a user.
///
/// `None` means "could not verify" — the social-activity check reports
/// that as its own red flag rather than treating it as zero friends.
pub async fn fetch_friend_count(client: &RobloxClient, user_id: u64) -> Option<u64> {
    let url = format!("https://friends.roblox.com/v1/users/{user_id}/friends/count");
    match client.get_json::<FriendCountResponse>(&url, &[]).await {
        Ok(resp) => resp.count,
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Friend count fetch failed");
            None
        }
    }
}
