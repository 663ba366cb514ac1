//! Public API exports for the CLI module

pub use crate::app::cli::args::Args;
pub use crate::app::cli::config::{default_config_path, CONFIG_DIR, CONFIG_FILE};
pub use crate::app::cli::validation::ValidationError;
pub use crate::app::cli::display::{display_task_table, task_table};
