//! Visual theme for the profile card viewer.

mod styles;

pub use styles::GLOBAL_STYLES;
