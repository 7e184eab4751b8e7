//! Installed application summaries.

mod installed;

pub use installed::{AppState, AppSummary, InstalledApps};
