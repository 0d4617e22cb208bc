//! Timer Panel Component
//!
//! Small card under the page title showing how long the view has been
//! mounted, formatted as compact `1h 2m 3s` text.

use dioxus::prelude::*;
use profilecard_core::format_elapsed;

/// Mounted-duration readout.
#[component]
pub fn TimerPanel(
    /// Whole seconds since the view mounted
    elapsed: u64,
) -> Element {
    rsx! {
        div { class: "timer-panel",
            p { class: "timer-panel__label", "Component mounted for:" }
            p { class: "timer-panel__value", "{format_elapsed(elapsed)}" }
        }
    }
}
