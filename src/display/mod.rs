//! Terminal display module
//!
//! Renders countdown views with an explicit colour theme.

mod countdown;
mod theme;

pub use countdown::CountdownRenderer;
pub use theme::Theme;
