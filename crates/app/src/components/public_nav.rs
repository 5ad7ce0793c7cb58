use dioxus::prelude::*;
use shared_ui::Navbar;

use crate::routes::Route;

/// Top bar shown on the login and signup pages.
#[component]
pub fn PublicNav() -> Element {
    rsx! {
        Navbar { brand: "School Management App",
            Link { to: Route::Home {}, "Login" }
            Link { to: Route::Signup {}, "Signup" }
        }
    }
}
