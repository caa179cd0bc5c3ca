//! Event listeners and bubbling dispatch.
//!
//! A listener is attached to one element id. Dispatch walks from the event
//! target up through its ancestors and offers the event to every listener
//! attached along the way, stopping at the first one that consumes it.

use crate::document::Document;
use crate::event::Event;

/// Outcome of offering an event to a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The listener handled the event; stop bubbling.
    Consumed,
    /// Not handled; keep bubbling.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

pub trait Listener {
    /// Id of the element this listener is attached to, or `None` once the
    /// listener has been torn down.
    fn current_target(&self) -> Option<&str>;

    fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult;
}

/// Deliver `event` to `listeners`, bubbling from the event target to the
/// document body. Events without a target are ignored.
pub fn dispatch(
    doc: &mut Document,
    event: &Event,
    listeners: &mut [&mut dyn Listener],
) -> EventResult {
    let Some(target) = event.target() else {
        return EventResult::Ignored;
    };

    let path: Vec<String> = doc.ancestors(target).iter().map(|el| el.id.clone()).collect();
    if path.is_empty() {
        log::debug!("dispatch: target '{target}' is not in the document");
        return EventResult::Ignored;
    }

    for id in &path {
        for listener in listeners.iter_mut() {
            if listener.current_target() != Some(id.as_str()) {
                continue;
            }
            if listener.handle_event(doc, event).is_consumed() {
                log::trace!("dispatch: '{target}' consumed at '{id}'");
                return EventResult::Consumed;
            }
        }
    }

    EventResult::Ignored
}
