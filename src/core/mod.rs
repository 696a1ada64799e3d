pub mod attrs;
pub mod dock;

pub use crate::domain::model::{ColorVariant, DockLayout, HubPack, LedState, Palette};
pub use crate::utils::error::Result;
pub use dock::{generate_svg, render_dock};
