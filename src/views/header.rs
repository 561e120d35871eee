use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::{ shade, use_theme };

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Header() -> Element {
    let mut manager = use_theme();
    let palette = manager.palette();
    let is_dark = manager.current().is_dark();

    let track_color = if is_dark {
        palette.primary.to_string()
    } else {
        shade(0.15, palette.secondary)
    };

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: HEADER_CSS }

            header {
                class: "app-header",
                style: "background-color: {palette.secondary};",
                img {
                    class: "app-logo",
                    src: LOGO,
                    alt: "Theme Switcher",
                }
                button {
                    class: if is_dark { "theme-switch on" } else { "theme-switch" },
                    style: "background-color: {track_color};",
                    aria_label: "Toggle theme",
                    onclick: move |_| manager.toggle(),
                    span { class: "theme-switch-handle" }
                }
            }
            Outlet::<Route> {}
        }
    }
}
