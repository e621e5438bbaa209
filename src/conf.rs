// Configuration definitions, functions and tests
//
// Every field has a default matching the markup the site ships with, so a page
// only embeds a `site-chrome-conf` script when it deviates from it.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Id of the `<script type="application/json">` element holding overrides.
pub static CONF_ELEMENT_ID: &str = "site-chrome-conf";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConf {
    pub menu: MenuConf,
    pub theme: ThemeConf,
    pub fragments: Vec<FragmentConf>,
    pub fetch: FetchConf,
    pub log: Log,
}

impl SiteConf {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(Error::Conf)
    }

    /// Defaults, overridden by the page's embedded configuration if it has one.
    pub fn derive(document: &web_sys::Document) -> Result<Self> {
        match document
            .get_element_by_id(CONF_ELEMENT_ID)
            .and_then(|element| element.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for SiteConf {
    fn default() -> Self {
        Self {
            menu: MenuConf::default(),
            theme: ThemeConf::default(),
            fragments: vec![
                FragmentConf::new("#navigation", "navigation.html"),
                FragmentConf::new("#footer", "footer.html"),
            ],
            fetch: FetchConf::default(),
            log: Log::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MenuConf {
    pub button: String,
    pub burger: String,
    pub nav: String,
    pub open_class: String,
}

impl Default for MenuConf {
    fn default() -> Self {
        Self {
            button: ".menu-btn".into(),
            burger: ".menu-btn__burger".into(),
            nav: ".header".into(),
            open_class: "open".into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConf {
    pub storage_key: String,
    pub dark_class: String,
    /// Element categories swept when the theme changes.
    pub targets: Vec<String>,
    /// Checkbox-like inputs reflecting the dark state.
    pub controls: Vec<String>,
}

impl Default for ThemeConf {
    fn default() -> Self {
        let targets = [
            "body", "header", "h1", "h2", "h3", "h4", "h5", "h6", "p", "i", "a", ".header",
        ];

        Self {
            storage_key: "mode".into(),
            dark_class: "dark-mode".into(),
            targets: targets.into_iter().map(String::from).collect(),
            controls: vec!["#switchModes".into()],
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Substitution {
    /// The fragment takes the placeholder's place.
    Replace,
    /// The fragment becomes the placeholder's content.
    Inner,
}

impl Default for Substitution {
    fn default() -> Self {
        Self::Replace
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FragmentConf {
    pub placeholder: String,
    pub source: String,
    #[serde(default)]
    pub substitution: Substitution,
}

impl FragmentConf {
    pub fn new(placeholder: &str, source: &str) -> Self {
        Self {
            placeholder: placeholder.into(),
            source: source.into(),
            substitution: Substitution::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct FetchConf {
    /// Attempts made after the first one fails.
    pub retries: u8,
    pub retry_delay_ms: u32,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Log {
    pub verbose: bool,
}
