//! Presence payload schema.
//!
//! Mirrors the provider's JSON envelope with every field optional. The
//! provider omits, nulls, or retypes fields freely, so numeric ids and
//! timestamps go through lenient deserializers instead of failing the
//! whole snapshot.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::PresenceError;

/// Provider-defined activity type code for a user's custom status line.
pub const CUSTOM_STATUS_ACTIVITY_TYPE: i64 = 4;

/// Top-level response: `{ "data": PresenceSnapshot | null }`; other keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<PresenceSnapshot>,
}

/// One point-in-time presence payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceSnapshot {
    #[serde(default)]
    pub discord_user: Option<DiscordUser>,
    /// Raw status string (`online`, `idle`, `dnd`, `offline`, `invisible`)
    #[serde(default)]
    pub discord_status: Option<String>,
    /// When the current status began (ms since epoch)
    #[serde(default, deserialize_with = "lenient_millis")]
    pub active_on_discord: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub spotify: Option<MusicSession>,
    #[serde(default)]
    pub listening_to_spotify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub discriminator: Option<String>,
    /// Avatar hash; an `a_` prefix marks an animated avatar
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub kind: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub timestamps: Option<Timestamps>,
    #[serde(default)]
    pub assets: Option<ActivityAssets>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub application_id: Option<String>,
}

impl Activity {
    pub fn is_custom_status(&self) -> bool {
        self.kind == Some(CUSTOM_STATUS_ACTIVITY_TYPE)
    }

    pub fn start(&self) -> Option<i64> {
        self.timestamps.as_ref().and_then(|t| t.start)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityAssets {
    #[serde(default)]
    pub large_image: Option<String>,
    #[serde(default)]
    pub large_text: Option<String>,
}

/// Start/end bounds in ms since epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default, deserialize_with = "lenient_millis")]
    pub start: Option<i64>,
    #[serde(default, deserialize_with = "lenient_millis")]
    pub end: Option<i64>,
}

/// Currently playing Spotify track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicSession {
    #[serde(default)]
    pub song: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub album_art_url: Option<String>,
    #[serde(default)]
    pub timestamps: Option<Timestamps>,
}

/// Decode a provider response body.
///
/// Invalid JSON is `ParseFailed`; a missing or null `data` is `Malformed`.
pub fn parse_envelope(body: &str) -> Result<PresenceSnapshot, PresenceError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| PresenceError::ParseFailed(e.to_string()))?;
    envelope.data.ok_or(PresenceError::Malformed)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts strings and numbers; anything else reads as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts integer, float or numeric-string milliseconds; anything else reads as absent.
///
/// Floats must be finite and inside the `i64` range; a saturating cast would
/// turn `-1e300` into `i64::MIN`.
fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|v| i64::try_from(v).ok()))
            .or_else(|| n.as_f64().and_then(float_millis)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

fn float_millis(value: f64) -> Option<i64> {
    // 2^63
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (value.is_finite() && value >= -LIMIT && value < LIMIT).then(|| value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_envelope() {
        let body = r#"{
            "success": true,
            "data": {
                "discord_user": {"id": "1372459254136705064", "username": "moon", "discriminator": "0", "avatar": "a_abc"},
                "discord_status": "dnd",
                "active_on_discord": 1700000000000,
                "activities": [
                    {"type": 4, "name": "Custom Status", "state": "busy"},
                    {"type": 0, "name": "Game", "application_id": 383226320970055681,
                     "timestamps": {"start": 1700000001000},
                     "assets": {"large_image": "123456"}}
                ],
                "spotify": {"song": "Song", "artist": "Artist", "album": "Album",
                            "album_art_url": "https://i.scdn.co/image/x",
                            "timestamps": {"start": 1000, "end": 5000}},
                "listening_to_spotify": true
            }
        }"#;

        let snapshot = parse_envelope(body).unwrap();
        let user = snapshot.discord_user.as_ref().unwrap();
        assert_eq!(user.username.as_deref(), Some("moon"));
        assert_eq!(snapshot.discord_status.as_deref(), Some("dnd"));
        assert_eq!(snapshot.active_on_discord, Some(1_700_000_000_000));
        assert_eq!(snapshot.activities.len(), 2);
        assert!(snapshot.activities[0].is_custom_status());
        assert_eq!(
            snapshot.activities[1].application_id.as_deref(),
            Some("383226320970055681")
        );
        assert_eq!(snapshot.activities[1].start(), Some(1_700_000_001_000));
        assert!(snapshot.listening_to_spotify);
        let spotify = snapshot.spotify.unwrap();
        assert_eq!(spotify.timestamps.unwrap().end, Some(5000));
    }

    #[test]
    fn test_missing_data_is_malformed() {
        assert_eq!(
            parse_envelope(r#"{"success": false}"#),
            Err(PresenceError::Malformed)
        );
        assert_eq!(
            parse_envelope(r#"{"success": true, "data": null}"#),
            Err(PresenceError::Malformed)
        );
    }

    #[test]
    fn test_invalid_json_is_parse_failed() {
        assert!(matches!(
            parse_envelope("<html>502</html>"),
            Err(PresenceError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_empty_data_object_is_accepted() {
        let snapshot = parse_envelope(r#"{"data": {}}"#).unwrap();
        assert_eq!(snapshot, PresenceSnapshot::default());
    }

    #[test]
    fn test_lenient_fields() {
        let body = r#"{"data": {
            "active_on_discord": true,
            "activities": null,
            "discord_user": {"id": 42, "discriminator": 1234},
            "spotify": {"timestamps": {"start": "1000", "end": 5000.0}}
        }}"#;
        let snapshot = parse_envelope(body).unwrap();
        assert_eq!(snapshot.active_on_discord, None);
        assert!(snapshot.activities.is_empty());
        let user = snapshot.discord_user.unwrap();
        assert_eq!(user.id.as_deref(), Some("42"));
        assert_eq!(user.discriminator.as_deref(), Some("1234"));
        let ts = snapshot.spotify.unwrap().timestamps.unwrap();
        assert_eq!(ts.start, Some(1000));
        assert_eq!(ts.end, Some(5000));
    }

    #[test]
    fn test_out_of_range_float_millis_read_as_absent() {
        let body = r#"{"data": {
            "active_on_discord": -1e300,
            "spotify": {"timestamps": {"start": -9e18, "end": 1e19}}
        }}"#;
        let snapshot = parse_envelope(body).unwrap();
        assert_eq!(snapshot.active_on_discord, None);
        let ts = snapshot.spotify.unwrap().timestamps.unwrap();
        assert_eq!(ts.start, Some(-9_000_000_000_000_000_000));
        assert_eq!(ts.end, None);
    }
}
