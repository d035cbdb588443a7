//! Presence payload, CDN helpers and the view-model builder.

pub mod cdn;
pub mod snapshot;
pub mod status;
pub mod view;

pub use cdn::{asset_url, avatar_url, default_avatar_index};
pub use snapshot::{
    parse_envelope, Activity, ActivityAssets, DiscordUser, Envelope, MusicSession,
    PresenceSnapshot, Timestamps, CUSTOM_STATUS_ACTIVITY_TYPE,
};
pub use status::{status_color, status_label, PresenceStatus, FALLBACK_COLOR};
pub use view::{
    build_view, progress_percent, select_activity, ActivityCard, ActivityView, MusicView,
    StatusView, ViewModel,
};
