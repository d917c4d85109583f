use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    Admin, Dashboard, ForgotPassword, Login, MyDocs, NotFound, NoteDetail, Notes, Register,
    ResetPassword, SidebarLayout, Upload,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/", Login)]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset/:token")]
    ResetPassword { token: String },
    #[layout(SidebarLayout)]
        #[route("/notes")]
        Notes {},
        #[route("/notes/:id")]
        NoteDetail { id: String },
        #[route("/upload")]
        Upload {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/admin")]
        Admin {},
        #[route("/my-docs")]
        MyDocs {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting NotesShare web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
