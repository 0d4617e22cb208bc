//! UI components for the profile card viewer.

mod profile_card;
mod timer_panel;
mod toggle_button;

pub use profile_card::ProfileCard;
pub use timer_panel::TimerPanel;
pub use toggle_button::ToggleButton;
