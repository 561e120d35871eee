mod color;
mod persisted;
mod theme;

pub use color::shade;
pub use persisted::PersistedState;
pub use theme::{
    use_theme, use_theme_provider, Theme, ThemeManager, ThemePalette, DARK_PALETTE,
    LIGHT_PALETTE, THEME_STORAGE_KEY,
};
