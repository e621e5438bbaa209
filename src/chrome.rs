use derivative::Derivative;

use crate::conf::SiteConf;
use crate::console;
use crate::dom::Page;
use crate::menu::{Menu, MenuState};
use crate::storage::PreferenceStore;
use crate::theme::prelude::{Mode, ThemeSwitcher};

/// Document events the chrome reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    Click,
    Change,
}

/// Everything the page chrome keeps between events, built once per page view.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Chrome<P, S> {
    #[derivative(Debug = "ignore")]
    page: P,
    menu: Menu,
    theme: ThemeSwitcher<S>,
    verbose: bool,
}

impl<P: Page, S: PreferenceStore> Chrome<P, S> {
    pub fn new(conf: &SiteConf, page: P, store: S) -> Self {
        Self {
            page,
            menu: Menu::new(conf.menu.clone()),
            theme: ThemeSwitcher::new(conf.theme.clone(), store),
            verbose: conf.log.verbose,
        }
    }

    /// Applies the remembered theme. The menu starts closed.
    pub fn load(&mut self) -> Mode {
        let mode = self.theme.load(&self.page);
        if self.verbose {
            console::log!("loaded with {mode} theme");
        }
        mode
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        let state = self.menu.toggle(&self.page);
        if self.verbose {
            console::log!("menu open: {}", state.open);
        }
        state
    }

    pub fn dark_mode(&mut self) -> Mode {
        let mode = self.theme.dark_mode(&self.page);
        if self.verbose {
            console::log!("switched to {mode} theme");
        }
        mode
    }

    /// Brings markup added after load in line with the menu state and the
    /// current theme.
    pub fn refresh(&self) {
        self.menu.reapply(&self.page);
        self.theme.reapply(&self.page);
    }

    pub fn mode(&self) -> Mode {
        self.theme.mode()
    }

    /// Dispatches a document event. `hit` tells whether the event target sits
    /// inside an element matching the given selector.
    ///
    /// Returns whether the event was handled.
    pub fn handle<F>(&mut self, trigger: Trigger, hit: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        match trigger {
            Trigger::Click if hit(self.menu.button_selector()) => {
                self.toggle_menu();
                true
            }
            Trigger::Change
                if self
                    .theme
                    .controls()
                    .iter()
                    .any(|control| hit(control.as_str())) =>
            {
                self.dark_mode();
                true
            }
            _ => false,
        }
    }
}
