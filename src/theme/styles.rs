//! Global CSS styles for the status card.
//!
//! Dark card on a near-black page. Status colors are not defined here;
//! they arrive inline from the view model.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --page-bg: #0b0d10;
  --card-bg: #14171c;
  --card-border: #232830;

  /* Text */
  --text-primary: #eef1f5;
  --text-secondary: rgba(238, 241, 245, 0.72);
  --text-muted: rgba(238, 241, 245, 0.45);

  /* Accents */
  --accent: #8ab4ff;
  --spotify: #1db954;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-serif: 'Cormorant Garamond', Georgia, serif;

  /* Motion */
  --fade-duration: 300ms;
}

/* === Base === */
* {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  padding: 0;
  background: var(--page-bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  cursor: none;
}

.page {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 24px;
  outline: none;
}

.card {
  width: 100%;
  max-width: 420px;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: 16px;
  padding: 24px;
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.muted {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Profile === */
.profile {
  display: flex;
  gap: 16px;
  align-items: center;
}

.pfp, .pfp img {
  width: 88px;
  height: 88px;
  border-radius: 50%;
  flex-shrink: 0;
}

.art-blank {
  background: var(--card-border);
}

.display-name {
  margin: 0;
  font-family: var(--font-serif);
  font-size: 1.8rem;
  font-weight: 600;
}

.tagline {
  color: var(--text-secondary);
  font-size: 0.85rem;
}

.status-line {
  display: flex;
  align-items: center;
  gap: 8px;
  margin-top: 6px;
  font-size: 0.8rem;
  letter-spacing: 0.06em;
}

.status-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  transition: background 200ms ease;
}

.status-since {
  color: var(--text-muted);
}

.last-updated {
  margin-top: 4px;
  font-size: 0.7rem;
}

/* === Activity === */
.activity-block {
  min-height: 84px;
  padding: 12px;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.03);
}

.activity, .spotify-container {
  display: flex;
  gap: 12px;
  align-items: center;
}

.act-art, .act-art img, .spotify-album, .spotify-album img {
  width: 64px;
  height: 64px;
  border-radius: 8px;
  flex-shrink: 0;
}

.act-name, .spotify-title {
  font-weight: 600;
}

.act-details, .spotify-artist {
  color: var(--text-secondary);
  font-size: 0.85rem;
}

.act-timestamp {
  color: var(--text-muted);
  font-size: 0.75rem;
  margin-top: 4px;
}

.spotify-info {
  flex: 1;
  min-width: 0;
}

.spotify-progress {
  height: 4px;
  margin-top: 8px;
  border-radius: 2px;
  background: var(--card-border);
  overflow: hidden;
}

.spotify-progress-bar {
  height: 100%;
  background: var(--spotify);
  transition: width 1s linear;
}

/* === Quote === */
.quote-box {
  padding: 16px;
  border-left: 3px solid var(--accent);
  opacity: 1;
  transition: opacity var(--fade-duration) ease, transform var(--fade-duration) ease;
}

.quote-text {
  margin: 0;
  font-family: var(--font-serif);
  font-size: 1.2rem;
  font-style: italic;
  line-height: 1.5;
}

.quote-footer {
  display: flex;
  justify-content: space-between;
  margin-top: 8px;
}

/* === Transitions === */
.fade-exit-active {
  opacity: 0;
  transform: translateY(-4px);
}

.fade-enter-active {
  opacity: 1;
  transform: translateY(0);
  animation: fade-in var(--fade-duration) ease;
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(4px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Cursor === */
.cursor {
  position: fixed;
  width: 14px;
  height: 14px;
  margin: -7px 0 0 -7px;
  border-radius: 50%;
  background: var(--accent);
  pointer-events: none;
  mix-blend-mode: difference;
  transition: opacity 150ms ease;
  z-index: 1000;
}

.clickable {
  cursor: none;
}
"#;
