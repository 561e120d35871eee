use dioxus::prelude::*;
use crate::utils::use_theme;

#[component]
pub fn Home() -> Element {
    let manager = use_theme();
    let palette = manager.palette();

    rsx! {
        main {
            class: "container mx-auto p-4",
            style: "color: {palette.text};",
            h1 {
                class: "text-2xl font-bold mb-4",
                style: "color: {palette.primary};",
                "Welcome"
            }
            p {
                "Pick a theme with the switch in the header. The choice is saved and"
                " comes back the next time you open the app."
            }
        }
    }
}
