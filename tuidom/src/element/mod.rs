mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}

/// Path of elements from `root` down to the element with `id`, inclusive.
/// Empty if the element is not part of the tree.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    for child in element.child_elements() {
        if collect_path(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Collect every descendant of `root` (excluding `root` itself) matching
/// `predicate`, in document order.
pub fn descendants_matching<'a, F>(root: &'a Element, predicate: &F) -> Vec<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    let mut found = Vec::new();
    for child in root.child_elements() {
        collect_matching(child, predicate, &mut found);
    }
    found
}

fn collect_matching<'a, F>(element: &'a Element, predicate: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if predicate(element) {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_matching(child, predicate, found);
    }
}
