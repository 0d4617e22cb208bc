//! Toggle Button Component
//!
//! The single user action in the app: show or hide the profile card.
//! Blue while the card is hidden, red while it is shown.

use dioxus::prelude::*;

/// Button label for the current visibility state.
fn toggle_label(visible: bool) -> &'static str {
    if visible {
        "Hide Profile"
    } else {
        "Show Profile"
    }
}

/// CSS class variant for the current visibility state.
fn toggle_class(visible: bool) -> &'static str {
    if visible {
        "btn-toggle btn-toggle--hide"
    } else {
        "btn-toggle btn-toggle--show"
    }
}

/// Show/hide toggle button.
///
/// # Example
///
/// ```rust
/// rsx! {
///     ToggleButton {
///         visible: false,
///         ontoggle: move |_| { /* flip the flag */ },
///     }
/// }
/// ```
#[component]
pub fn ToggleButton(
    /// Current visibility of the profile card
    visible: bool,
    /// Click handler
    ontoggle: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: toggle_class(visible),
            onclick: move |_| ontoggle.call(()),
            {toggle_label(visible)}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_tracks_visibility() {
        assert_eq!(toggle_label(false), "Show Profile");
        assert_eq!(toggle_label(true), "Hide Profile");
    }

    #[test]
    fn test_class_variant_tracks_visibility() {
        assert!(toggle_class(false).contains("--show"));
        assert!(toggle_class(true).contains("--hide"));
    }
}
