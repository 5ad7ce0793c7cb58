pub mod analytics;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod overlay;
pub mod record_form;
pub mod requests;
pub mod table;

pub use analytics::*;
pub use auth::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use models::*;
pub use overlay::*;
pub use record_form::*;
pub use requests::*;
// table and format helpers are used through their module paths.
