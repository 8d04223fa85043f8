use dioxus::prelude::*;
use profile_ui::features::profile::ProfileValue;
use profile_ui::ProfileSettings;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            ProfileSettings {
                initial_profile: ProfileValue::new("alice").with_display_name("Alice"),
            }
        }
    }
}
