pub mod action_overlay;
pub mod fetch_error;
pub mod public_nav;

pub use action_overlay::ActionOverlay;
pub use fetch_error::FetchErrorCard;
pub use public_nav::PublicNav;
