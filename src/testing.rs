// In-memory stand-ins for the document, local storage and the network.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::conf::Substitution;
use crate::dom::{Marker, Page};
use crate::error::{Error, Result};
use crate::fragments::FetchFragment;
use crate::storage::PreferenceStore;

#[derive(Debug)]
struct NodeInner {
    tag: String,
    id: Option<String>,
    classes: RefCell<BTreeSet<String>>,
    checked: Cell<bool>,
    inner: RefCell<Option<String>>,
}

/// A handle to a fake element; clones share state like DOM references do.
#[derive(Clone, Debug)]
pub struct FakeNode(Rc<NodeInner>);

impl FakeNode {
    /// Builds a node from `tag`, `tag#id`, `tag.class` or `tag#id.class.class`.
    pub fn parse(spec: &str) -> Self {
        let (head, classes): (&str, BTreeSet<String>) = match spec.split_once('.') {
            Some((head, classes)) => (head, classes.split('.').map(String::from).collect()),
            None => (spec, BTreeSet::new()),
        };
        let (tag, id) = match head.split_once('#') {
            Some((tag, id)) => (tag, Some(id.to_owned())),
            None => (head, None),
        };

        Self(Rc::new(NodeInner {
            tag: tag.to_owned(),
            id,
            classes: RefCell::new(classes),
            checked: Cell::new(false),
            inner: RefCell::new(None),
        }))
    }

    pub fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.0.classes.borrow().contains(class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.0.id.as_deref() == Some(id)
        } else {
            self.0.tag == selector
        }
    }

    pub fn checked(&self) -> bool {
        self.0.checked.get()
    }

    pub fn inner(&self) -> Option<String> {
        self.0.inner.borrow().clone()
    }
}

impl Marker for FakeNode {
    fn add_marker(&self, marker: &str) {
        self.0.classes.borrow_mut().insert(marker.to_owned());
    }

    fn remove_marker(&self, marker: &str) {
        self.0.classes.borrow_mut().remove(marker);
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.0.classes.borrow().contains(marker)
    }
}

#[derive(Default, Debug)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
}

impl FakePage {
    /// Whitespace separated node specs, see [`FakeNode::parse`].
    pub fn new(markup: &str) -> Self {
        Self {
            nodes: RefCell::new(markup.split_whitespace().map(FakeNode::parse).collect()),
        }
    }

    pub fn nodes(&self) -> Vec<FakeNode> {
        self.nodes.borrow().clone()
    }

    pub fn count_marked(&self, marker: &str) -> usize {
        self.nodes
            .borrow()
            .iter()
            .filter(|node| node.has_marker(marker))
            .count()
    }
}

impl Page for FakePage {
    type Node = FakeNode;

    fn select_all(&self, selector: &str) -> Vec<FakeNode> {
        self.nodes
            .borrow()
            .iter()
            .filter(|node| node.matches(selector))
            .cloned()
            .collect()
    }

    fn set_checked(&self, selector: &str, checked: bool) {
        for node in self.select_all(selector) {
            node.0.checked.set(checked);
        }
    }

    fn substitute(&self, placeholder: &str, markup: &str, how: Substitution) -> Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        let position = nodes
            .iter()
            .position(|node| node.matches(placeholder))
            .ok_or_else(|| Error::MissingPlaceholder(placeholder.to_owned()))?;

        match how {
            Substitution::Inner => {
                *nodes[position].0.inner.borrow_mut() = Some(markup.to_owned());
            }
            Substitution::Replace => {
                let spliced = markup.split_whitespace().map(FakeNode::parse);
                nodes.splice(position..=position, spliced);
            }
        }
        Ok(())
    }
}

/// Shared map; clones see each other's writes, like tabs of one profile.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(Error::StorageUnavailable);
        }
        self.values.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

/// Serves canned markup; paths not listed answer 404.
///
/// A path listed with `failures` answers 503 that many times before serving.
#[derive(Default, Debug)]
pub struct FakeFetcher {
    documents: HashMap<String, String>,
    failures: RefCell<HashMap<String, u32>>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn serving(mut self, path: &str, markup: &str) -> Self {
        self.documents.insert(path.into(), markup.into());
        self
    }

    pub fn failing(self, path: &str, failures: u32) -> Self {
        self.failures.borrow_mut().insert(path.into(), failures);
        self
    }
}

impl FetchFragment for FakeFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.requests.borrow_mut().push(path.to_owned());

        if let Some(left) = self.failures.borrow_mut().get_mut(path) {
            if *left > 0 {
                *left -= 1;
                return Err(Error::Status {
                    path: path.to_owned(),
                    status: 503,
                });
            }
        }

        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| Error::Status {
                path: path.to_owned(),
                status: 404,
            })
    }
}
