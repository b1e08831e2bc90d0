//! Column sorting for the film table.
//!
//! Every column maps to one comparison kind:
//! - `year` compares the integer year, a missing year below every real one,
//! - `budget` / `box_office` compare the number left after stripping a
//!   currency-formatted cell down to digits, `.` and `-`,
//! - everything else compares case-insensitively as text.
//!
//! Direction is remembered per column in [`SortState`]; the first activation of a
//! column sorts ascending and each further activation flips it. Sorting is stable.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use super::format::{format_currency, parse_currency};
use super::record::FilmRecord;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    Year,
    Title,
    Director,
    Distributor,
    Country,
    Budget,
    BoxOffice,
    /// A header label that matches no known column.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Numeric,
    Currency,
    Text,
}

impl Column {
    /// Table columns in display order.
    pub const ALL: [Column; 7] = [
        Column::Year,
        Column::Title,
        Column::Director,
        Column::Distributor,
        Column::Country,
        Column::Budget,
        Column::BoxOffice,
    ];

    pub fn from_label(label: &str) -> Self {
        Self::from_key(&normalize_label(label))
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "year" => Column::Year,
            "title" => Column::Title,
            "director" => Column::Director,
            "distributor" => Column::Distributor,
            "country" => Column::Country,
            "budget" => Column::Budget,
            "box_office" => Column::BoxOffice,
            other => Column::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Column::Year => "year",
            Column::Title => "title",
            Column::Director => "director",
            Column::Distributor => "distributor",
            Column::Country => "country",
            Column::Budget => "budget",
            Column::BoxOffice => "box_office",
            Column::Other(key) => key,
        }
    }

    /// Canonical header label. Header activations dispatch this text, so it must
    /// normalise back to [`Column::key`].
    pub fn label(&self) -> &str {
        match self {
            Column::Year => "Year",
            Column::Title => "Title",
            Column::Director => "Director",
            Column::Distributor => "Distributor",
            Column::Country => "Country",
            Column::Budget => "Budget",
            Column::BoxOffice => "Box Office",
            Column::Other(key) => key,
        }
    }

    /// Numeric cell value; NaN for text columns.
    fn number(&self, record: &FilmRecord) -> f64 {
        match self {
            Column::Year => record.year.map_or(f64::NAN, f64::from),
            Column::Budget => record.budget,
            Column::BoxOffice => record.box_office,
            _ => f64::NAN,
        }
    }

    /// Text cell value; empty for numeric and unknown columns.
    fn text<'r>(&self, record: &'r FilmRecord) -> &'r str {
        match self {
            Column::Title => &record.title,
            Column::Director => &record.director,
            Column::Distributor => &record.distributor,
            Column::Country => &record.country,
            _ => "",
        }
    }

    pub fn comparison(&self) -> Comparison {
        match self {
            Column::Year => Comparison::Numeric,
            Column::Budget | Column::BoxOffice => Comparison::Currency,
            _ => Comparison::Text,
        }
    }
}

/// Lowercases a header label and turns each whitespace run into `_`.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Remembered direction per column for one table view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    ascending: HashMap<Column, bool>,
    active: Option<Column>,
}

impl SortState {
    /// Flips the remembered direction of `column` and returns the one to apply now.
    /// Other columns keep theirs.
    pub fn activate(&mut self, column: &Column) -> SortDirection {
        let ascending = !self.ascending.get(column).copied().unwrap_or(false);
        self.ascending.insert(column.clone(), ascending);
        self.active = Some(column.clone());

        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Direction last applied to `column`, if it was ever activated.
    pub fn direction(&self, column: &Column) -> Option<SortDirection> {
        self.ascending.get(column).map(|&ascending| {
            if ascending {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            }
        })
    }

    /// The most recently activated column.
    pub fn active(&self) -> Option<&Column> {
        self.active.as_ref()
    }
}

/// Orders amounts ascending with NaN below every real value.
pub fn compare_amounts(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn extract(record: &FilmRecord, column: &Column) -> Self {
        match column.comparison() {
            Comparison::Numeric => SortKey::Number(column.number(record)),
            // Compare what the cell shows, read back as a number.
            Comparison::Currency => {
                SortKey::Number(parse_currency(&format_currency(column.number(record))))
            }
            Comparison::Text => SortKey::Text(column.text(record).to_lowercase()),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => compare_amounts(*a, *b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Stable copy of `records` ordered by `column` in `direction`.
pub fn sorted_by_column(
    records: &[FilmRecord],
    column: &Column,
    direction: SortDirection,
) -> Vec<FilmRecord> {
    let mut keyed: Vec<(SortKey, &FilmRecord)> = records
        .iter()
        .map(|record| (SortKey::extract(record, column), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Handles a header activation: resolves the label to a column, flips its
/// remembered direction and returns the re-ordered records.
pub fn sort(records: &[FilmRecord], label: &str, state: &mut SortState) -> Vec<FilmRecord> {
    let column = Column::from_label(label);
    let direction = state.activate(&column);
    debug!(column = column.key(), ?direction, "table sort");
    sorted_by_column(records, &column, direction)
}
