use crate::conf::MenuConf;
use crate::dom::{Marker, Page};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

/// Mobile navigation menu; closed until the burger button is clicked.
#[derive(Debug)]
pub struct Menu {
    conf: MenuConf,
    state: MenuState,
}

impl Menu {
    pub fn new(conf: MenuConf) -> Self {
        Self {
            conf,
            state: MenuState::default(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn button_selector(&self) -> &str {
        &self.conf.button
    }

    /// Flips the menu and moves the open marker on the burger and the nav
    /// container accordingly. Missing elements are skipped.
    pub fn toggle<P: Page>(&mut self, page: &P) -> MenuState {
        self.state.open = !self.state.open;
        self.reapply(page);
        self.state
    }

    /// Marks the burger and the nav container from the current state, e.g.
    /// after the navigation fragment replaced them.
    pub fn reapply<P: Page>(&self, page: &P) {
        let marker = &self.conf.open_class;
        for selector in [&self.conf.burger, &self.conf.nav] {
            if let Some(element) = page.select(selector) {
                if self.state.open {
                    element.add_marker(marker);
                } else {
                    element.remove_marker(marker);
                }
            }
        }
    }
}
