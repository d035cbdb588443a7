//! Cursor Follow Effect
//!
//! A decorative dot tracks the pointer and dims while it is over anything
//! interactive. Hidden until the pointer first moves.

use dioxus::prelude::*;

use crate::context::{use_cursor, CursorState};

/// Inline style placing the dot at the pointer.
pub fn cursor_style(state: &CursorState) -> String {
    let opacity = match (state.visible, state.dimmed) {
        (false, _) => "0",
        (true, true) => "0.7",
        (true, false) => "1",
    };
    format!(
        "left: {:.0}px; top: {:.0}px; opacity: {};",
        state.x, state.y, opacity
    )
}

#[component]
pub fn CursorDot() -> Element {
    let cursor = use_cursor();
    let style = cursor_style(&cursor.read());

    rsx! {
        div { class: "cursor", style: "{style}" }
    }
}

/// Wrapper marking its children as interactive for the cursor dot.
#[component]
pub fn Hoverable(children: Element) -> Element {
    let mut cursor = use_cursor();

    rsx! {
        div {
            class: "hoverable",
            onmouseenter: move |_| cursor.write().dimmed = true,
            onmouseleave: move |_| cursor.write().dimmed = false,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_moved() {
        let state = CursorState::default();
        assert!(cursor_style(&state).ends_with("opacity: 0;"));
    }

    #[test]
    fn dims_over_interactive() {
        let state = CursorState {
            x: 10.4,
            y: 20.6,
            dimmed: true,
            visible: true,
        };
        assert_eq!(cursor_style(&state), "left: 10px; top: 21px; opacity: 0.7;");
    }
}
