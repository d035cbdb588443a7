//! Edge case and boundary condition tests
//!
//! Payload shapes the presence API is known to produce, and how they
//! surface on the card.

use std::cell::RefCell;
use std::rc::Rc;

use statuscard_core::presence::{
    build_view, parse_envelope, select_activity, ActivityView, FALLBACK_COLOR,
};
use statuscard_core::render::{CardState, Renderer};
use statuscard_core::PresenceError;

const NOW: i64 = 1_700_000_000_000;

fn view_of(body: &str) -> statuscard_core::ViewModel {
    build_view(&parse_envelope(body).unwrap(), NOW)
}

// ============================================================================
// Envelope Shape Tests
// ============================================================================

#[test]
fn test_null_data_is_malformed() {
    assert_eq!(
        parse_envelope(r#"{"success": false, "data": null}"#),
        Err(PresenceError::Malformed)
    );
    assert_eq!(
        parse_envelope(r#"{"success": true}"#),
        Err(PresenceError::Malformed)
    );
}

#[test]
fn test_invalid_json_is_parse_failure() {
    assert!(matches!(
        parse_envelope("<html>502 Bad Gateway</html>"),
        Err(PresenceError::ParseFailed(_))
    ));
}

#[test]
fn test_empty_data_object_renders_defaults() {
    let view = view_of(r#"{"success": true, "data": {}}"#);

    assert_eq!(view.display_name, "Unknown");
    assert_eq!(view.tagline, "ID: unknown");
    assert_eq!(view.avatar_url, "");
    assert_eq!(view.status.label, "OFFLINE");
    assert_eq!(view.status.color, FALLBACK_COLOR);
    assert_eq!(view.status.since, "");
    assert_eq!(view.activity, ActivityView::Empty);
}

#[test]
fn test_null_activities_and_numeric_ids() {
    let view = view_of(
        r#"{"data": {
            "discord_user": {"id": 1372459254136705064, "username": "moon", "discriminator": 7, "avatar": null},
            "discord_status": "dnd",
            "active_on_discord": null,
            "activities": null
        }}"#,
    );

    assert_eq!(view.tagline, "#7 • 1372459254136705064");
    assert_eq!(view.avatar_url, "https://cdn.discordapp.com/embed/avatars/2.png");
    assert_eq!(view.status.label, "DND");
    assert_eq!(view.status.color, "#ef4444");
    assert_eq!(view.status.since_absolute, None);
    assert_eq!(view.activity, ActivityView::Empty);
}

#[test]
fn test_unknown_status_keeps_label_with_gray_dot() {
    let view = view_of(r#"{"data": {"discord_status": "streaming"}}"#);
    assert_eq!(view.status.label, "STREAMING");
    assert_eq!(view.status.color, FALLBACK_COLOR);
}

#[test]
fn test_status_since_uses_active_timestamp() {
    let body = format!(
        r#"{{"data": {{"discord_status": "idle", "active_on_discord": {}}}}}"#,
        NOW - (2 * 3_600_000 + 15 * 60_000)
    );
    let view = view_of(&body);

    assert_eq!(view.status.since, "(2h 15min)");
    assert!(view.status.since_absolute.is_some());
}

#[test]
fn test_future_status_start_reads_just_now() {
    let body = format!(r#"{{"data": {{"active_on_discord": {}}}}}"#, NOW + 5_000);
    assert_eq!(view_of(&body).status.since, "(just now)");
}

// ============================================================================
// Activity Selection Tests
// ============================================================================

#[test]
fn test_spotify_flag_without_payload_falls_through() {
    let view = view_of(
        r#"{"data": {
            "listening_to_spotify": true,
            "spotify": null,
            "activities": [{"type": 0, "name": "Factorio"}]
        }}"#,
    );

    match view.activity {
        ActivityView::Activity(card) => assert_eq!(card.name, "Factorio"),
        other => panic!("expected activity, got {:?}", other),
    }
}

#[test]
fn test_spotify_payload_without_flag_is_ignored() {
    let view = view_of(
        r#"{"data": {
            "listening_to_spotify": false,
            "spotify": {"song": "Song"},
            "activities": []
        }}"#,
    );
    assert_eq!(view.activity, ActivityView::Empty);
}

#[test]
fn test_music_with_missing_fields() {
    let view = view_of(
        r#"{"data": {
            "listening_to_spotify": true,
            "spotify": {"song": "", "artist": null, "album": "Dust", "timestamps": {"start": null, "end": 10}}
        }}"#,
    );

    match view.activity {
        ActivityView::Music(music) => {
            assert_eq!(music.title, "Unknown Song");
            assert_eq!(music.byline, "Unknown — Dust");
            assert_eq!(music.cover_url, "");
            assert_eq!(music.progress_percent, 0.0);
            assert_eq!(music.caption, None);
        }
        other => panic!("expected music, got {:?}", other),
    }
}

#[test]
fn test_music_progress_clamped_past_end() {
    let body = format!(
        r#"{{"data": {{
            "listening_to_spotify": true,
            "spotify": {{"song": "Late", "timestamps": {{"start": {}, "end": {}}}}}
        }}}}"#,
        NOW - 300_000,
        NOW - 60_000
    );

    match view_of(&body).activity {
        ActivityView::Music(music) => {
            assert_eq!(music.progress_percent, 100.0);
            assert_eq!(music.caption.as_deref(), Some("Playing for 5min"));
        }
        other => panic!("expected music, got {:?}", other),
    }
}

#[test]
fn test_only_custom_status_is_still_shown() {
    let view = view_of(
        r#"{"data": {"activities": [{"type": 4, "name": "Custom Status", "state": "brb"}]}}"#,
    );

    match view.activity {
        ActivityView::Activity(card) => {
            assert_eq!(card.name, "Custom Status");
            assert_eq!(card.state.as_deref(), Some("brb"));
            assert_eq!(card.caption, None);
        }
        other => panic!("expected activity, got {:?}", other),
    }
}

#[test]
fn test_select_activity_skips_leading_custom_status() {
    let snapshot = parse_envelope(
        r#"{"data": {"activities": [
            {"type": 4, "name": "Custom Status"},
            {"type": 0, "name": "First Game"},
            {"type": 0, "name": "Second Game"}
        ]}}"#,
    )
    .unwrap();

    let selected = select_activity(&snapshot.activities).unwrap();
    assert_eq!(selected.name.as_deref(), Some("First Game"));
}

#[test]
fn test_activity_art_requires_asset() {
    let view = view_of(
        r#"{"data": {"activities": [
            {"type": 0, "name": "Game", "application_id": "99", "assets": {"large_text": "no image"}}
        ]}}"#,
    );

    match view.activity {
        ActivityView::Activity(card) => assert_eq!(card.large_image_url, None),
        other => panic!("expected activity, got {:?}", other),
    }
}

#[test]
fn test_activity_art_url() {
    let view = view_of(
        r#"{"data": {"activities": [
            {"type": 0, "name": "Game", "application_id": "99", "assets": {"large_image": "cover"}}
        ]}}"#,
    );

    match view.activity {
        ActivityView::Activity(card) => assert_eq!(
            card.large_image_url.as_deref(),
            Some("https://cdn.discordapp.com/app-assets/99/cover.png?size=128")
        ),
        other => panic!("expected activity, got {:?}", other),
    }
}

// ============================================================================
// Extreme Timestamp Tests
// ============================================================================

#[test]
fn test_status_since_at_i64_min() {
    let view = view_of(r#"{"data": {"active_on_discord": -9223372036854775808}}"#);

    assert_eq!(view.status.since, "(106751991167d 7h)");
    assert!(view.status.since_absolute.is_some());
}

#[test]
fn test_out_of_range_float_start_has_no_caption() {
    let view = view_of(
        r#"{"data": {"activities": [{"type": 0, "name": "Game", "timestamps": {"start": -1e300}}]}}"#,
    );

    match view.activity {
        ActivityView::Activity(card) => assert_eq!(card.caption, None),
        other => panic!("expected activity, got {:?}", other),
    }
}

#[test]
fn test_activity_start_at_integer_extremes() {
    let view = view_of(
        r#"{"data": {"activities": [{"type": 0, "name": "Old", "timestamps": {"start": -9223372036854775808}}]}}"#,
    );
    match view.activity {
        ActivityView::Activity(card) => {
            assert_eq!(card.caption.as_deref(), Some("Playing for 106751991167d 7h"))
        }
        other => panic!("expected activity, got {:?}", other),
    }

    let view = view_of(
        r#"{"data": {"activities": [{"type": 0, "name": "New", "timestamps": {"start": 9223372036854775807}}]}}"#,
    );
    match view.activity {
        ActivityView::Activity(card) => {
            assert_eq!(card.caption.as_deref(), Some("Playing for just now"))
        }
        other => panic!("expected activity, got {:?}", other),
    }
}

#[test]
fn test_spotify_interval_spanning_i64_range() {
    let snapshot = parse_envelope(
        r#"{"data": {
            "listening_to_spotify": true,
            "spotify": {"song": "Long", "timestamps": {"start": -9e18, "end": 9e18}}
        }}"#,
    )
    .unwrap();

    match build_view(&snapshot, 0).activity {
        ActivityView::Music(music) => {
            assert_eq!(music.progress_percent, 50.0);
            assert!(music.caption.is_some());
        }
        other => panic!("expected music, got {:?}", other),
    }

    let widest = parse_envelope(
        r#"{"data": {
            "listening_to_spotify": true,
            "spotify": {"timestamps": {"start": -9223372036854775808, "end": 9223372036854775807}}
        }}"#,
    )
    .unwrap();

    match build_view(&widest, i64::MAX).activity {
        ActivityView::Music(music) => assert_eq!(music.progress_percent, 100.0),
        other => panic!("expected music, got {:?}", other),
    }
}

// ============================================================================
// Avatar Tests
// ============================================================================

#[test]
fn test_animated_avatar_uses_gif() {
    let view = view_of(r#"{"data": {"discord_user": {"id": "1", "avatar": "a_deadbeef"}}}"#);
    assert_eq!(
        view.avatar_url,
        "https://cdn.discordapp.com/avatars/1/a_deadbeef.gif?size=512"
    );
}

#[test]
fn test_non_numeric_discriminator_uses_first_default() {
    let view = view_of(r#"{"data": {"discord_user": {"id": "1", "discriminator": "abc"}}}"#);
    assert_eq!(view.avatar_url, "https://cdn.discordapp.com/embed/avatars/0.png");
}

// ============================================================================
// Degraded Rendering Tests
// ============================================================================

#[test]
fn test_failure_after_success_keeps_identity() {
    let state = Rc::new(RefCell::new(CardState::default()));
    let mut renderer = Renderer::new(state.clone());

    let good = view_of(
        r#"{"data": {
            "discord_user": {"id": "1", "username": "moon"},
            "discord_status": "online",
            "active_on_discord": 0,
            "activities": [{"type": 0, "name": "Game"}]
        }}"#,
    );
    renderer.render_at(&good, NOW);
    renderer.render_degraded();

    let state = state.borrow();
    assert_eq!(state.display_name, "moon");
    assert_eq!(state.activity.variant_name(), "activity");
    assert_eq!(state.status.label, "OFFLINE");
    assert_eq!(state.status.color, FALLBACK_COLOR);
    assert_eq!(state.status.since, "");
    assert!(state.last_updated.starts_with("Last updated: "));
}

#[test]
fn test_failure_before_any_success_keeps_loading_name() {
    let mut renderer = Renderer::new(CardState::default());
    renderer.render_degraded();

    let state = renderer.into_inner();
    assert_eq!(state.display_name, "Loading…");
    assert_eq!(state.last_updated, "");
    assert_eq!(state.status.label, "OFFLINE");
}
