//! Profile Card Component
//!
//! White card displaying the four profile fields with the avatar on the
//! left and text on the right, plus a decorative footer row. The whole
//! subtree stays in the tree while hidden so the reveal transition can
//! run; the hidden variant is transparent and non-interactive.

use dioxus::prelude::*;
use profilecard_core::Profile;
use rand::Rng;

/// CSS class pair controlling the reveal transition.
fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "profile-reveal profile-reveal--shown"
    } else {
        "profile-reveal profile-reveal--hidden"
    }
}

/// Display noise for the footer, regenerated on every render on purpose.
fn fresh_view_count() -> u32 {
    rand::rng().random_range(100..1100)
}

/// Person profile card.
#[component]
pub fn ProfileCard(
    /// The profile to display
    profile: Profile,
    /// Whether the card is revealed
    visible: bool,
) -> Element {
    let view_count = fresh_view_count();

    rsx! {
        section { class: reveal_class(visible),
            div { class: "profile-card",
                div { class: "profile-card__layout",
                    img {
                        class: "profile-card__avatar",
                        src: "{profile.img_src}",
                        alt: "{profile.full_name}",
                    }

                    div { class: "profile-card__info",
                        h2 { class: "profile-card__name", "{profile.full_name}" }
                        p { class: "profile-card__profession", "{profile.profession}" }
                        p { class: "profile-card__bio", "{profile.bio}" }
                    }
                }

                div { class: "profile-card__footer",
                    div { class: "profile-card__stat",
                        span { class: "stat-dot stat-dot--available" }
                        "Currently available"
                    }
                    div { class: "profile-card__stat",
                        span { class: "stat-dot stat-dot--views" }
                        "Profile views: {view_count}"
                    }
                }
            }
        }
    }
}
