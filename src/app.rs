use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use profilecard_core::{MountTimer, Profile, ViewState};

use crate::components::{ProfileCard, TimerPanel, ToggleButton};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the view state (visibility flag + elapsed-seconds counter) and the
/// mount timer feeding the counter. The timer handle lives exactly as long
/// as this component: created in `use_hook`, cancelled in `use_drop`.
#[component]
pub fn App() -> Element {
    let profile = use_hook(Profile::placeholder);
    let mut state = use_signal(ViewState::new);

    // One timer per mounted App.
    let timer = use_hook(|| Rc::new(RefCell::new(MountTimer::start())));
    let ticks = use_hook(|| timer.borrow().subscribe());

    // Forward tick updates into the state signal. The loop ends on its own
    // once the timer is cancelled and the watch channel closes.
    use_effect(move || {
        let mut ticks = ticks.clone();
        spawn(async move {
            while ticks.changed().await.is_ok() {
                state.write().elapsed_seconds = *ticks.borrow();
            }
        });
    });

    // Cancel the tick task when the component unmounts.
    use_drop({
        let timer = timer.clone();
        move || timer.borrow_mut().cancel()
    });

    let toggle = move |_| {
        state.write().toggle();
        tracing::debug!("profile visibility toggled to {}", state.read().visible);
    };

    let snapshot = state();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Person Profile App" }
                TimerPanel { elapsed: snapshot.elapsed_seconds }
            }

            div { class: "toggle-row",
                ToggleButton { visible: snapshot.visible, ontoggle: toggle }
            }

            ProfileCard { profile: profile.clone(), visible: snapshot.visible }

            footer { class: "page-footer",
                p { "Click the button above to toggle the profile visibility" }
            }
        }
    }
}
