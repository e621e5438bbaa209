//! Page chrome for a static personal site: the mobile menu toggle, the
//! persisted light/dark theme and the shared navigation bar and footer.
//!
//! Every page loads the same wasm bundle, which calls [`start`] once it is
//! instantiated.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use gloo_events::EventListener;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

mod console;

pub mod chrome;
pub mod conf;
pub mod dom;
pub mod error;
pub mod fragments;
pub mod menu;
pub mod storage;
pub mod theme;

#[cfg(test)]
mod testing;

use chrome::{Chrome, Trigger};
use conf::SiteConf;
use dom::{within, DocumentPage};
use fragments::{include_all, HttpFragments};
use storage::LocalStore;

type SharedChrome = Rc<RefCell<Chrome<DocumentPage, LocalStore>>>;

#[wasm_bindgen(start)]
pub fn run() {
    if let Err(err) = start() {
        console::error!("{err:#}");
    }
}

pub fn start() -> anyhow::Result<()> {
    let document = gloo_utils::document();
    let conf = SiteConf::derive(&document).context("failed to read site configuration")?;
    let page = DocumentPage::new(document.clone());

    let mut chrome = Chrome::new(&conf, page.clone(), LocalStore);
    chrome.load();
    let chrome = Rc::new(RefCell::new(chrome));

    bind(&document, chrome.clone());
    spawn_local(include_fragments(conf, page, chrome));

    Ok(())
}

// Listeners sit on the document so controls arriving with a fragment work too.
fn bind(document: &Document, chrome: SharedChrome) {
    let listeners = [(Trigger::Click, "click"), (Trigger::Change, "change")].map(
        |(trigger, event_type)| {
            let chrome = chrome.clone();
            EventListener::new(document, event_type, move |event| {
                if let Some(target) = target(event) {
                    chrome
                        .borrow_mut()
                        .handle(trigger, |selector| within(&target, selector));
                }
            })
        },
    );

    // live as long as the page
    for listener in listeners {
        listener.forget();
    }
}

fn target(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

async fn include_fragments(conf: SiteConf, page: DocumentPage, chrome: SharedChrome) {
    for (fragment, result) in include_all(&page, &HttpFragments, &conf.fragments, conf.fetch).await
    {
        match result {
            Ok(()) if conf.log.verbose => {
                console::log!("included `{}` into `{}`", fragment.source, fragment.placeholder)
            }
            Ok(()) => {}
            Err(err) => console::error!("failed to include `{}`: {}", fragment.source, err.chain()),
        }
    }

    chrome.borrow().refresh();
}
