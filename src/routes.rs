use dioxus::prelude::*;
use crate::views::{ Header, Home };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Header)]
    #[route("/")]
    Home,
}
