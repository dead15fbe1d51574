//! User interface module - status output and link rendering.
//!
//! - `formatter` - coloured status, success, warning and error lines
//! - `link` - clickable terminal hyperlinks

pub mod formatter;
pub mod link;

pub use formatter::{
    display_boundary_warning, display_dry_run_plan, display_error, display_pull_request_link,
    display_status, display_success, display_version_change,
};
pub use link::clickable_link;
