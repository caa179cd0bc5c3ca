//! Retained element tree that owns everything mounted on screen.
//!
//! Widgets build an [`Element`] subtree, append it to the document and keep
//! the ids of the elements they care about. The document is the single owner
//! of the tree; ids are the handles.

use crate::element::{descendants_matching, find_element, find_element_mut, path_to, Element};

/// Id of the document's root element.
pub const BODY_ID: &str = "body";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DomError {
    /// The parent an element was appended to is not in the document.
    #[error("Parent element '{id}' not found in document")]
    ParentNotFound { id: String },

    /// The element is not (or no longer) in the document.
    #[error("Element '{id}' not found in document")]
    NotFound { id: String },
}

impl DomError {
    pub fn parent_not_found(id: impl Into<String>) -> Self {
        Self::ParentNotFound { id: id.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::col().id(BODY_ID),
        }
    }

    /// The root element. Render and hit-test against this.
    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append `element` as the last child of `parent` (or of the body).
    /// Returns the id of the appended element.
    pub fn append_child(
        &mut self,
        parent: Option<&str>,
        element: Element,
    ) -> Result<String, DomError> {
        let parent_id = parent.unwrap_or(BODY_ID);
        let parent = self
            .get_mut(parent_id)
            .ok_or_else(|| DomError::parent_not_found(parent_id))?;

        let id = element.id.clone();
        parent.push_child(element);
        log::trace!("mounted '{id}' under '{parent_id}'");
        Ok(id)
    }

    /// Detach the element with `id` from the document and hand it back.
    /// The body itself cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let parent_id = {
            let path = path_to(&self.body, id);
            if path.len() < 2 {
                return None;
            }
            path[path.len() - 2].id.clone()
        };

        let removed = self.get_mut(&parent_id)?.remove_child(id);
        if removed.is_some() {
            log::trace!("detached '{id}' from '{parent_id}'");
        }
        removed
    }

    /// The element with `id` followed by its ancestors up to the body.
    pub fn ancestors(&self, id: &str) -> Vec<&Element> {
        let mut path = path_to(&self.body, id);
        path.reverse();
        path
    }

    /// Nearest element, starting at `id` itself and walking up, that
    /// satisfies `predicate`.
    pub fn closest<F>(&self, id: &str, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.ancestors(id).into_iter().find(|el| predicate(*el))
    }

    /// All descendants of `root` matching `predicate`, in document order.
    pub fn query_all<F>(&self, root: &str, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.get(root)
            .map(|el| descendants_matching(el, &predicate))
            .unwrap_or_default()
    }

    /// Ids of all descendants of `root` matching `predicate`.
    pub fn query_all_ids<F>(&self, root: &str, predicate: F) -> Vec<String>
    where
        F: Fn(&Element) -> bool,
    {
        self.query_all(root, predicate)
            .into_iter()
            .map(|el| el.id.clone())
            .collect()
    }
}
