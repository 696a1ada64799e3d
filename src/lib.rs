pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::{build_app, build_router};
pub use crate::config::{cors::CorsConfig, toml_config::ServerConfig, CliConfig};
pub use crate::core::{generate_svg, render_dock, ColorVariant, DockLayout};
pub use crate::utils::error::{AppError, Result};
