//! Discord CDN URL construction for avatars and activity art.

use super::snapshot::DiscordUser;

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Number of built-in default avatars.
pub const DEFAULT_AVATAR_COUNT: u64 = 5;

/// Size requested for custom avatars.
pub const AVATAR_SIZE: u32 = 512;

/// Size requested for activity large images.
pub const ASSET_SIZE: u32 = 128;

/// Resolve the avatar URL for a user.
///
/// Custom avatars use `.gif` when the hash is animated (`a_` prefix) and
/// `.png` otherwise. Without a custom avatar one of the five default
/// avatars is chosen from the discriminator.
pub fn avatar_url(user: &DiscordUser) -> String {
    let id = user.id.as_deref().unwrap_or_default();
    match user.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(hash) => {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!(
                "{}/avatars/{}/{}.{}?size={}",
                CDN_BASE, id, hash, ext, AVATAR_SIZE
            )
        }
        None => format!(
            "{}/embed/avatars/{}.png",
            CDN_BASE,
            default_avatar_index(user.discriminator.as_deref())
        ),
    }
}

/// `discriminator mod 5`, or 0 when the discriminator is missing or not numeric.
pub fn default_avatar_index(discriminator: Option<&str>) -> u64 {
    discriminator
        .and_then(|d| d.trim().parse::<u64>().ok())
        .map(|d| d % DEFAULT_AVATAR_COUNT)
        .unwrap_or(0)
}

/// Activity art scoped to its owning application; `None` without an asset reference.
pub fn asset_url(application_id: Option<&str>, asset: Option<&str>, size: u32) -> Option<String> {
    let asset = asset.filter(|a| !a.is_empty())?;
    Some(format!(
        "{}/app-assets/{}/{}.png?size={}",
        CDN_BASE,
        application_id.unwrap_or_default(),
        asset,
        size
    ))
}
