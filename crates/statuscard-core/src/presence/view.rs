//! Presence snapshot → render-ready view model.
//!
//! `build_view` is pure: the same snapshot and `now_ms` always produce the
//! same model, and nothing from an earlier snapshot leaks into it.
//!
//! ```text
//! listening_to_spotify && spotify? ──yes──▶ Music
//!            │ no
//!            ▼
//! activities non-empty? ──yes──▶ Activity (first non-custom, else first)
//!            │ no
//!            ▼
//!          Empty
//! ```

use serde::Serialize;

use super::cdn::{asset_url, avatar_url, ASSET_SIZE};
use super::snapshot::{Activity, MusicSession, PresenceSnapshot};
use super::status::{status_color, status_label, FALLBACK_COLOR};
use crate::format::{format_absolute, format_elapsed};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_SONG: &str = "Unknown Song";
pub const UNKNOWN_ARTIST: &str = "Unknown";
pub const DEFAULT_ACTIVITY_NAME: &str = "Activity";
pub const NO_ACTIVITY_TEXT: &str = "No active activity";

/// Everything the card shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// Empty when the snapshot carries no user
    pub avatar_url: String,
    pub display_name: String,
    pub tagline: String,
    pub status: StatusView,
    pub activity: ActivityView,
}

/// Status dot, label and since-text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub label: String,
    pub color: String,
    /// `"(3h 5min)"`, or empty when the status start is unknown
    pub since: String,
    /// Exact start time for a hover tooltip
    pub since_absolute: Option<String>,
}

impl StatusView {
    /// Shown when a poll fails: offline label, gray dot, no since-text.
    pub fn degraded() -> Self {
        Self {
            label: "OFFLINE".to_string(),
            color: FALLBACK_COLOR.to_string(),
            since: String::new(),
            since_absolute: None,
        }
    }
}

/// The mutually exclusive content of the activity region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum ActivityView {
    Music(MusicView),
    Activity(ActivityCard),
    Empty,
}

impl ActivityView {
    pub fn variant_name(&self) -> &'static str {
        match self {
            ActivityView::Music(_) => "music",
            ActivityView::Activity(_) => "activity",
            ActivityView::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicView {
    pub title: String,
    /// `"<artist> — <album>"`
    pub byline: String,
    /// May be empty; the renderer shows a blank cover
    pub cover_url: String,
    /// Playback position in `[0, 100]`
    pub progress_percent: f64,
    /// `"Playing for …"`, only when a start bound exists
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCard {
    pub name: String,
    pub details: Option<String>,
    pub state: Option<String>,
    pub large_image_url: Option<String>,
    pub caption: Option<String>,
}

/// Build the view model for `snapshot` as seen at `now_ms`.
pub fn build_view(snapshot: &PresenceSnapshot, now_ms: i64) -> ViewModel {
    let user = snapshot.discord_user.as_ref();

    let display_name = user
        .and_then(|u| u.username.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string();

    let id = user
        .and_then(|u| u.id.as_deref())
        .filter(|id| !id.is_empty())
        .unwrap_or("unknown");
    let tagline = match user
        .and_then(|u| u.discriminator.as_deref())
        .filter(|d| !d.is_empty())
    {
        Some(discriminator) => format!("#{} • {}", discriminator, id),
        None => format!("ID: {}", id),
    };

    let raw_status = snapshot.discord_status.as_deref();
    let status = StatusView {
        label: status_label(raw_status),
        color: status_color(raw_status).to_string(),
        since: snapshot
            .active_on_discord
            .map(|ts| format!("({})", format_elapsed(now_ms.saturating_sub(ts))))
            .unwrap_or_default(),
        since_absolute: snapshot.active_on_discord.map(format_absolute),
    };

    ViewModel {
        avatar_url: user.map(avatar_url).unwrap_or_default(),
        display_name,
        tagline,
        status,
        activity: select_activity_view(snapshot, now_ms),
    }
}

fn select_activity_view(snapshot: &PresenceSnapshot, now_ms: i64) -> ActivityView {
    if snapshot.listening_to_spotify {
        if let Some(music) = &snapshot.spotify {
            return ActivityView::Music(music_view(music, now_ms));
        }
    }

    match select_activity(&snapshot.activities) {
        Some(activity) => ActivityView::Activity(activity_card(activity, now_ms)),
        None => ActivityView::Empty,
    }
}

/// First activity that is not a custom status, else the first activity.
pub fn select_activity(activities: &[Activity]) -> Option<&Activity> {
    activities
        .iter()
        .find(|a| !a.is_custom_status())
        .or_else(|| activities.first())
}

fn music_view(music: &MusicSession, now_ms: i64) -> MusicView {
    let start = music.timestamps.and_then(|t| t.start);
    let end = music.timestamps.and_then(|t| t.end);

    MusicView {
        title: non_empty(music.song.as_deref())
            .unwrap_or(UNKNOWN_SONG)
            .to_string(),
        byline: format!(
            "{} — {}",
            non_empty(music.artist.as_deref()).unwrap_or(UNKNOWN_ARTIST),
            music.album.as_deref().unwrap_or_default()
        ),
        cover_url: music.album_art_url.clone().unwrap_or_default(),
        progress_percent: progress_percent(start, end, now_ms),
        caption: start.map(|s| playing_for(now_ms.saturating_sub(s))),
    }
}

fn activity_card(activity: &Activity, now_ms: i64) -> ActivityCard {
    ActivityCard {
        name: non_empty(activity.name.as_deref())
            .unwrap_or(DEFAULT_ACTIVITY_NAME)
            .to_string(),
        details: non_empty(activity.details.as_deref()).map(str::to_string),
        state: non_empty(activity.state.as_deref()).map(str::to_string),
        large_image_url: asset_url(
            activity.application_id.as_deref(),
            activity
                .assets
                .as_ref()
                .and_then(|a| a.large_image.as_deref()),
            ASSET_SIZE,
        ),
        caption: activity.start().map(|s| playing_for(now_ms.saturating_sub(s))),
    }
}

/// `(now - start) / (end - start) * 100`, clamped to `[0, 100]`.
///
/// Zero unless both bounds exist and describe a non-empty interval.
/// Differences are taken in `i128` so provider timestamps can't overflow.
pub fn progress_percent(start: Option<i64>, end: Option<i64>, now_ms: i64) -> f64 {
    match (start, end) {
        (Some(start), Some(end)) if end > start => {
            let elapsed = (i128::from(now_ms) - i128::from(start)) as f64;
            let total = (i128::from(end) - i128::from(start)) as f64;
            (elapsed / total * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

fn playing_for(elapsed_ms: i64) -> String {
    format!("Playing for {}", format_elapsed(elapsed_ms))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
