// Avatar headshot lookup — display only, no rule reads this.

use serde::Deserialize;
use tracing::warn;

use super::client::RobloxClient;

#[derive(Deserialize)]
struct ThumbnailResponse {
    #[serde(default)]
    data: Vec<ThumbnailEntry>,
}

#[derive(Deserialize)]
struct ThumbnailEntry {
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
}

/// Fetch the 150x150 avatar headshot URL for a user.
pub async fn fetch_avatar_url(client: &RobloxClient, user_id: u64) -> Option<String> {
    let query = [
        ("userIds", user_id.to_string()),
        ("size", "150x150".to_string()),
        ("format", "Png".to_string()),
        ("isCircular", "false".to_string()),
    ];

    match client
        .get_json::<ThumbnailResponse>("https://thumbnails.roblox.com/v1/users/avatar-headshot", &query)
        .await
    {
        Ok(resp) => resp.data.into_iter().next().and_then(|e| e.image_url),
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Avatar fetch failed");
            None
        }
    }
}
