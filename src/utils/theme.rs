use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };

use crate::storage::default_store;
use crate::utils::persisted::PersistedState;

/// Storage slot holding the active theme as a JSON string ("light"/"dark").
pub const THEME_STORAGE_KEY: &str = "THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other theme of the two-way cycle.
    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            Theme::Light => &LIGHT_PALETTE,
            Theme::Dark => &DARK_PALETTE,
        }
    }
}

/// Color roles every theme must fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    primary: "#5a4ad1",
    secondary: "#c5ccd6",
    background: "#f0f0f5",
    text: "#3a3a3a",
};

pub const DARK_PALETTE: ThemePalette = ThemePalette {
    primary: "#5a4ad1",
    secondary: "#3b3b47",
    background: "#1f1f29",
    text: "#e1e1e6",
};

/// Shared handle on the active theme: read the current value or palette,
/// toggle it from any consumer. Copies of the handle all point at the same
/// cell, so a toggle from one consumer re-renders every other.
#[derive(Clone, Copy)]
pub struct ThemeManager {
    cell: Signal<PersistedState<Theme>>,
}

impl ThemeManager {
    pub fn new(cell: Signal<PersistedState<Theme>>) -> Self {
        Self { cell }
    }

    pub fn current(&self) -> Theme {
        *self.cell.read().value()
    }

    pub fn palette(&self) -> &'static ThemePalette {
        self.current().palette()
    }

    /// Flips the theme and rewrites the storage slot. A failed write keeps
    /// the new in-memory value so every consumer still sees the flip.
    pub fn toggle(&mut self) {
        let next = self.cell.read().value().flipped();
        if let Err(e) = self.cell.write().set(next) {
            log::error!("Failed to persist theme {:?}: {}", next, e);
        }
    }
}

/// Creates the theme cell and provides the manager to all child components.
/// Call once, at the root of the app.
pub fn use_theme_provider() -> ThemeManager {
    let cell = use_signal(|| {
        PersistedState::materialize(default_store(), THEME_STORAGE_KEY, Theme::default())
    });
    let manager = use_context_provider(|| ThemeManager::new(cell));
    use_effect(move || apply_document_theme(manager.current()));
    manager
}

/// Grabs the theme handle provided by an ancestor component. Panics when no
/// provider is mounted above the caller, since rendering with a made-up
/// default would hide the wiring mistake.
pub fn use_theme() -> ThemeManager {
    try_consume_context::<ThemeManager>()
        .expect("use_theme must be called under a component that ran use_theme_provider")
}

/// Mirrors the active theme onto `<html data-theme="...">` so stylesheets
/// can target it.
#[cfg(target_arch = "wasm32")]
fn apply_document_theme(theme: Theme) {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(element) = element {
        let html = element.unchecked_into::<web_sys::HtmlElement>();
        let name = if theme.is_dark() { "dark" } else { "light" };
        if let Err(e) = html.dataset().set("theme", name) {
            log::warn!("Failed to set document theme attribute: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_document_theme(_theme: Theme) {}
