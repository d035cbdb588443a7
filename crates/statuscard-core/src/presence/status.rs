//! Discrete presence status and its color table.

use std::fmt;
use std::str::FromStr;

/// Gray used for offline, invisible, unknown and failed states.
pub const FALLBACK_COLOR: &str = "#7b8894";

/// Status values the provider is known to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceStatus {
    Online,
    Idle,
    Dnd,
    Offline,
    Invisible,
}

impl PresenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Idle => "idle",
            PresenceStatus::Dnd => "dnd",
            PresenceStatus::Offline => "offline",
            PresenceStatus::Invisible => "invisible",
        }
    }

    /// Color token for the status dot
    pub fn color(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "#43d675",
            PresenceStatus::Idle => "#f6c244",
            PresenceStatus::Dnd => "#ef4444",
            PresenceStatus::Offline | PresenceStatus::Invisible => FALLBACK_COLOR,
        }
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresenceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(PresenceStatus::Online),
            "idle" => Ok(PresenceStatus::Idle),
            "dnd" => Ok(PresenceStatus::Dnd),
            "offline" => Ok(PresenceStatus::Offline),
            "invisible" => Ok(PresenceStatus::Invisible),
            _ => Err(()),
        }
    }
}

/// Uppercased raw status, `"OFFLINE"` when missing or empty.
///
/// Unrecognized values are shown as sent so a new provider status is still
/// visible, just with the fallback color.
pub fn status_label(raw: Option<&str>) -> String {
    match raw.filter(|s| !s.is_empty()) {
        Some(s) => s.to_uppercase(),
        None => "OFFLINE".to_string(),
    }
}

pub fn status_color(raw: Option<&str>) -> &'static str {
    raw.and_then(|s| s.parse::<PresenceStatus>().ok())
        .map(|s| s.color())
        .unwrap_or(FALLBACK_COLOR)
}
