pub mod modes;
pub mod switcher;

pub mod prelude {
    pub use super::modes::Mode;
    pub use super::switcher::{apply_theme, ThemeSwitcher};
}
