//! Terminal presentation: unit formatting, layouts and frame output.

pub mod format;
pub mod layout;
pub mod style;
pub mod terminal;

pub use format::{battery_bar, battery_color, format_power};
pub use layout::{render_compact, render_full, render_snapshot};
pub use style::{Control, Style};
pub use terminal::{FramePhase, Screen};
