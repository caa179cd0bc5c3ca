pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use document::{Document, DomError, BODY_ID};
pub use element::Element;
pub use event::{Event, Key, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use listener::{dispatch, EventResult, Listener};
pub use terminal::Terminal;
pub use types::*;
