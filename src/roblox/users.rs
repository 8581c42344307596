// Identity resolution — username lookup and profile fetch.

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::client::RobloxClient;

/// Profile fields the verifier cares about.
///
/// `created` stays a raw string here; timestamp parsing (and its failure
/// modes) belong to the account-age check.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    /// Username (the `@` name).
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// Account creation timestamp, ISO 8601 as returned by the API.
    pub created: Option<String>,
}

#[derive(Deserialize)]
struct UsernameLookupResponse {
    #[serde(default)]
    data: Vec<UsernameLookupEntry>,
}

#[derive(Deserialize)]
struct UsernameLookupEntry {
    id: u64,
}

/// Resolve a username to its numeric user ID (batch-of-one lookup).
///
/// Returns `None` both for "no such user" and for any request failure —
/// the caller cannot proceed either way.
pub async fn lookup_user_id(client: &RobloxClient, username: &str) -> Option<u64> {
    let body = json!({
        "usernames": [username],
        "excludeBannedUsers": false,
    });

    match client
        .post_json::<UsernameLookupResponse>("https://users.roblox.com/v1/usernames/users", &body)
        .await
    {
        Ok(resp) => resp.data.first().map(|entry| entry.id),
        Err(e) => {
            warn!(username = username, error = %e, "Username lookup failed");
            None
        }
    }
}

/// Fetch the profile for a user ID.
pub async fn fetch_user_info(client: &RobloxClient, user_id: u64) -> Option<UserInfo> {
    let url = format!("https://users.roblox.com/v1/users/{user_id}");
    match client.get_json::<UserInfo>(&url, &[]).await {
        Ok(info) => Some(info),
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Profile fetch failed");
            None
        }
    }
}
