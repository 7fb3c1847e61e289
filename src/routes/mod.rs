use dioxus::prelude::*;

pub mod dashboard;
pub mod login;

use dashboard::Dashboard;
use login::Login;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/admin")]
    Dashboard {},

    #[route("/admin/login")]
    Login {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4",
            h1 { class: "text-2xl font-bold", "404" }
            p { class: "text-muted-foreground", "/{path}" }
            Link {
                to: Route::Dashboard {},
                class: "text-blue-500 hover:underline",
                "/admin"
            }
        }
    }
}
