use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width};
use crate::types::{Rgb, Style, TextStyle};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut count = 0usize;
    render_element(element, layout, buf, Style::default(), &mut count);
    log::trace!("rendered {count} elements into {}x{}", buf.width(), buf.height());
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited: Style,
    count: &mut usize,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    *count += 1;

    let style = merge(inherited, element.style);

    if let Some(bg) = element.style.background {
        fill_rect(buf, rect, bg);
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, rect, style, buf),
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf, style, count);
            }
        }
    }
}

/// Children inherit colors and text attributes unless they set their own.
fn merge(parent: Style, own: Style) -> Style {
    Style {
        background: own.background.or(parent.background),
        foreground: own.foreground.or(parent.foreground),
        text_style: TextStyle {
            bold: parent.text_style.bold || own.text_style.bold,
            italic: parent.text_style.italic || own.text_style.italic,
            underline: parent.text_style.underline || own.text_style.underline,
            dim: parent.text_style.dim || own.text_style.dim,
        },
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(text: &str, element: &Element, rect: Rect, style: Style, buf: &mut Buffer) {
    let inner = rect.shrink(
        element.padding.top,
        element.padding.right,
        element.padding.bottom,
        element.padding.left,
    );
    if inner.is_empty() {
        return;
    }

    let fg = style.foreground.unwrap_or(Rgb::WHITE);

    for (line_idx, line) in text.lines().take(inner.height as usize).enumerate() {
        let line = truncate_to_width(line, inner.width as usize);
        let offset = align_offset(display_width(&line), inner.width as usize, element.text_align);
        let y = inner.y + line_idx as u16;
        let mut x = inner.x + offset as u16;

        for ch in line.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if x + width > inner.right() {
                break;
            }
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ch;
                cell.fg = fg;
                cell.style = style.text_style;
                if let Some(bg) = style.background {
                    cell.bg = bg;
                }
            }
            for extra in 1..width {
                if let Some(cell) = buf.get_mut(x + extra, y) {
                    cell.wide_continuation = true;
                }
            }
            x += width;
        }
    }
}
