use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let children = element.child_elements();
    if children.is_empty() {
        return;
    }

    let inner = rect.shrink(
        element.padding.top,
        element.padding.right,
        element.padding.bottom,
        element.padding.left,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed and content sizes, count fill items
    let gap_total = element.gap.saturating_mul(children.len().saturating_sub(1) as u16);
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;

    for child in children {
        match main_axis(child, is_row) {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => fixed_total = fixed_total.saturating_add(estimate_size(child, is_row)),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 { remaining / fill_count } else { 0 };

    // Second pass: assign rects in order
    let mut offset = 0u16;
    for child in children {
        let main = match main_axis(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
        };
        let cross = match cross_axis(child, is_row) {
            Size::Fixed(n) => n,
            Size::Fill => cross_size,
            Size::Auto => estimate_size(child, !is_row),
        };

        let main = main.min(main_size.saturating_sub(offset));
        let cross = cross.min(cross_size);

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y, main, cross)
        } else {
            Rect::new(inner.x, inner.y + offset, cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }
}

fn main_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

/// Content size of an element along one axis, including padding.
pub(crate) fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let explicit = if is_width { element.width } else { element.height };
    if let Size::Fixed(n) = explicit {
        return n;
    }

    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along main axis
                let gap_total = element.gap * (children.len().saturating_sub(1)) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .fold(gap_total, u16::saturating_add)
            } else {
                // Max along cross axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size.saturating_add(padding)
}
