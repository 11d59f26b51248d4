use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let user_id = ctx.session_context().user_id().to_string();

    rsx! {
        div { class: "page",
            h2 { "Home" }
            if user_id.is_empty() {
                p { "No user id configured. The roadmap request will still be attempted." }
            } else {
                p { "Current user: {user_id}" }
            }
            p {
                Link { to: Route::Roadmap {}, "Open your learning roadmap" }
            }
        }
    }
}
