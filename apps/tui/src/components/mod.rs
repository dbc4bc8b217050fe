//! Reusable UI components.

pub mod spinner;
pub mod status_footer;
pub mod textarea;
pub mod title_bar;

pub use spinner::{Spinner, SpinnerFrames};
pub use status_footer::render_status_footer;
pub use textarea::TextArea;
pub use title_bar::render_title_bar;
