// Standalone components
pub mod bar_chart;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_input;
pub mod form_select;
pub mod navbar;
pub mod overlay;
pub mod page_header;
pub mod skeleton;

// Primitive wrappers
pub mod dialog;
pub mod modal;

pub use bar_chart::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use form_input::*;
pub use form_select::*;
pub use modal::*;
pub use navbar::*;
pub use overlay::*;
pub use page_header::*;
pub use skeleton::*;
