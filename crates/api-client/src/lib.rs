//! Client side of the school records API: HTTP calls, the session token
//! and the timers the views use for overlays and delayed redirects.

pub mod client;
pub mod session;
pub mod timing;

pub use client::{ApiClient, OverviewSlot};
#[cfg(target_arch = "wasm32")]
pub use session::BrowserTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub use session::FileTokenStore;
pub use session::{MemoryTokenStore, Session, TokenStore};
