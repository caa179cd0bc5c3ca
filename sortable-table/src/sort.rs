//! Sort state and row comparison.

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::column::{Column, SortKind};
use crate::value::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Attribute value stored in a header cell's `order` data entry.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Header indicator glyph.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }

    /// Turn an ascending comparison into one for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active sort column and its direction.
///
/// This is the authoritative sort state; header attributes and indicators
/// are derived from it on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// State after a header click on `field`: the active column flips its
    /// direction, any other column starts ascending.
    pub fn next_for(&self, field: &str) -> Self {
        if self.field == field {
            Self::new(field, self.order.toggled())
        } else {
            Self::new(field, SortOrder::Asc)
        }
    }

    /// Order shown on the header cell of `field`, if it is the active one.
    pub fn order_of(&self, field: &str) -> Option<SortOrder> {
        (self.field == field).then_some(self.order)
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new("title", SortOrder::Asc)
    }
}

/// Ascending comparison of two records by `column`.
pub fn compare(column: &Column, a: &Record, b: &Record) -> Ordering {
    match &column.sort_kind {
        SortKind::Number => compare_numbers(a.get_f64(&column.id), b.get_f64(&column.id)),
        SortKind::String => {
            let a = a.get(&column.id).map(ToString::to_string).unwrap_or_default();
            let b = b.get(&column.id).map(ToString::to_string).unwrap_or_default();
            collate(&a, &b)
        }
        SortKind::Custom(cmp) => cmp(a, b),
    }
}

/// Values without a numeric reading compare as NaN, which orders after every
/// number ascending. Signed zeros compare equal.
fn compare_numbers(a: Option<f64>, b: Option<f64>) -> Ordering {
    numeric_key(a).total_cmp(&numeric_key(b))
}

fn numeric_key(value: Option<f64>) -> f64 {
    match value {
        None => f64::NAN,
        Some(n) if n == 0.0 => 0.0,
        Some(n) => n,
    }
}

/// A reordered copy of `rows`. The sort is stable, so rows that compare
/// equal keep their relative order.
pub fn sort_rows(rows: &[Record], column: &Column, order: SortOrder) -> Vec<Record> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| order.apply(compare(column, a, b)));
    sorted
}

/// Locale-aware text comparison.
///
/// Levels, in order:
/// 1. base letters, case-insensitive, diacritics removed (`é` sorts with
///    `e`, `ё` with `е`; `й` stays a letter of its own as in Russian)
/// 2. diacritics, unaccented first
/// 3. case, lowercase first
/// 4. code points, so the result is total
///
/// ```
/// use std::cmp::Ordering;
/// use sortable_table::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("ёж", "ель"), Ordering::Less);
/// assert_eq!(collate("éclair", "zebra"), Ordering::Less);
/// assert_eq!(collate("a", "A"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn primary_key(s: &str) -> Vec<char> {
    let mut key = Vec::with_capacity(s.len());
    for c in lowercase(s) {
        if c == 'й' {
            key.push(c);
            continue;
        }
        decompose_canonical(c, |d| {
            if !is_combining_mark(d) {
                key.push(d);
            }
        });
    }
    key
}

/// Combining marks carried by each letter, aligned with the letters.
fn accent_key(s: &str) -> Vec<Vec<char>> {
    lowercase(s)
        .map(|c| {
            let mut marks = Vec::new();
            if c != 'й' {
                decompose_canonical(c, |d| {
                    if is_combining_mark(d) {
                        marks.push(d);
                    }
                });
            }
            marks
        })
        .collect()
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}
