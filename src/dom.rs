//! The slice of the document the chrome touches.
//!
//! Components never talk to `web_sys` directly; they go through [`Page`] so the
//! same logic runs against the live document and against an in-memory page.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::conf::Substitution;
use crate::console;
use crate::error::{Error, Result};

/// An element whose presentation is switched through class markers.
pub trait Marker {
    fn add_marker(&self, marker: &str);
    fn remove_marker(&self, marker: &str);
    fn has_marker(&self, marker: &str) -> bool;
}

pub trait Page {
    type Node: Marker;

    /// Every element matching `selector`, in document order.
    ///
    /// An unknown or malformed selector matches nothing.
    fn select_all(&self, selector: &str) -> Vec<Self::Node>;

    fn select(&self, selector: &str) -> Option<Self::Node> {
        self.select_all(selector).into_iter().next()
    }

    /// Sets the checked state of every checkbox matching `selector`.
    fn set_checked(&self, selector: &str, checked: bool);

    /// Splices `markup` into the first element matching `placeholder`.
    fn substitute(&self, placeholder: &str, markup: &str, how: Substitution) -> Result<()>;
}

impl Marker for Element {
    fn add_marker(&self, marker: &str) {
        if self.class_list().add_1(marker).is_err() {
            console::warning!("cannot add class `{marker}`");
        }
    }

    fn remove_marker(&self, marker: &str) {
        if self.class_list().remove_1(marker).is_err() {
            console::warning!("cannot remove class `{marker}`");
        }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.class_list().contains(marker)
    }
}

/// The live document.
#[derive(Clone, Debug)]
pub struct DocumentPage {
    document: Document,
}

impl DocumentPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn query(&self, selector: &str) -> Result<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|_| Error::Selector(selector.to_owned()))
    }
}

impl Page for DocumentPage {
    type Node = Element;

    fn select_all(&self, selector: &str) -> Vec<Element> {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(_) => {
                console::warning!("{}", Error::Selector(selector.to_owned()));
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_checked(&self, selector: &str, checked: bool) {
        self.select_all(selector)
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
            .for_each(|input| input.set_checked(checked));
    }

    fn substitute(&self, placeholder: &str, markup: &str, how: Substitution) -> Result<()> {
        let element = self
            .query(placeholder)?
            .ok_or_else(|| Error::MissingPlaceholder(placeholder.to_owned()))?;

        match how {
            Substitution::Replace => element.set_outer_html(markup),
            Substitution::Inner => element.set_inner_html(markup),
        }
        Ok(())
    }
}

/// Whether `target` is, or sits inside, an element matching `selector`.
pub fn within(target: &Element, selector: &str) -> bool {
    matches!(target.closest(selector), Ok(Some(_)))
}
