use super::modes::Mode;
use crate::conf::ThemeConf;
use crate::console;
use crate::dom::{Marker, Page};
use crate::storage::PreferenceStore;

/// Marks every element dark, or clears the mark, independently of the others.
pub fn apply_theme<M, I>(elements: I, mode: Mode, dark_class: &str)
where
    M: Marker,
    I: IntoIterator<Item = M>,
{
    for element in elements {
        match mode {
            Mode::Dark => element.add_marker(dark_class),
            Mode::Light => element.remove_marker(dark_class),
        }
    }
}

/// Owns the light/dark preference for one page view.
///
/// The stored value is the source of truth: another tab may have changed it
/// since this page loaded, and the next toggle flips what is stored, not what
/// this page last applied. When storage is unreadable the applied mode is used.
#[derive(Debug)]
pub struct ThemeSwitcher<S> {
    conf: ThemeConf,
    store: S,
    mode: Mode,
}

impl<S: PreferenceStore> ThemeSwitcher<S> {
    pub fn new(conf: ThemeConf, store: S) -> Self {
        Self {
            conf,
            store,
            mode: Mode::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn controls(&self) -> &[String] {
        &self.conf.controls
    }

    /// Runs once per page load.
    ///
    /// A missing or unrecognised preference is reset to light. A dark
    /// preference is applied straight away and reflected on the toggle controls.
    pub fn load<P: Page>(&mut self, page: &P) -> Mode {
        let mode = match self.remembered() {
            Some(mode) => mode,
            None => {
                let mode = Mode::default();
                self.remember(mode);
                mode
            }
        };

        self.mode = mode;
        if mode.is_dark() {
            self.sweep(page);
            self.sync_controls(page);
        }
        mode
    }

    /// Flips the stored preference and repaints every themed element.
    pub fn dark_mode<P: Page>(&mut self, page: &P) -> Mode {
        let current = self.remembered().unwrap_or(self.mode);

        self.mode = current.toggled();
        self.sweep(page);
        self.remember(self.mode);
        self.sync_controls(page);
        self.mode
    }

    /// Repeats the sweep and the control sync for the current mode, e.g. after
    /// new markup was spliced in.
    pub fn reapply<P: Page>(&self, page: &P) {
        self.sweep(page);
        self.sync_controls(page);
    }

    fn sweep<P: Page>(&self, page: &P) {
        for target in &self.conf.targets {
            apply_theme(page.select_all(target), self.mode, &self.conf.dark_class);
        }
    }

    fn sync_controls<P: Page>(&self, page: &P) {
        for control in &self.conf.controls {
            page.set_checked(control, self.mode.is_dark());
        }
    }

    fn remembered(&self) -> Option<Mode> {
        let raw = self.store.get(&self.conf.storage_key)?;
        match Mode::try_from(raw.as_str()) {
            Ok(mode) => Some(mode),
            Err(()) => {
                console::warning!("ignoring stored theme `{raw}`");
                None
            }
        }
    }

    fn remember(&self, mode: Mode) {
        if let Err(err) = self.store.set(&self.conf.storage_key, mode.as_str()) {
            console::warning!("failed to store theme: {err}");
        }
    }
}
