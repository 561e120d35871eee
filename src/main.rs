use dioxus::prelude::*;
use theme_switcher::use_theme_provider;
use theme_switcher::Route;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let manager = use_theme_provider();
    let palette = manager.palette();

    rsx! {
        div {
            class: if manager.current().is_dark() { "app dark" } else { "app" },
            style: "background-color: {palette.background}; color: {palette.text};",
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
