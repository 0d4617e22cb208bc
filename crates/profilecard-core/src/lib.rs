//! Profile Card Core Library
//!
//! Domain logic for the profile card viewer: the profile record shown in
//! the card, the per-view state (visibility flag plus elapsed-seconds
//! counter), the compact duration formatter, and the cancellable mount
//! timer that drives the counter.
//!
//! The UI crate consumes snapshots of [`ViewState`] and subscribes to the
//! [`MountTimer`] watch channel; nothing in here knows about rendering.
//!
//! ## Quick Start
//!
//! ```ignore
//! use profilecard_core::{format_elapsed, MountTimer, ViewState};
//!
//! let timer = MountTimer::start();
//! let mut ticks = timer.subscribe();
//! let mut state = ViewState::new();
//!
//! while ticks.changed().await.is_ok() {
//!     state.elapsed_seconds = *ticks.borrow();
//!     println!("mounted for {}", format_elapsed(state.elapsed_seconds));
//! }
//! ```

pub mod format;
pub mod profile;
pub mod timer;
pub mod view_state;

// Re-exports
pub use format::format_elapsed;
pub use profile::Profile;
pub use timer::{MountTimer, TICK_PERIOD};
pub use view_state::ViewState;
