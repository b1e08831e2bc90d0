use dioxus::prelude::*;

use crate::core::format::format_currency;
use crate::core::record::FilmRecord;
use crate::core::sort::{self, Column, SortState};
use crate::t;

fn column_heading(column: &Column) -> String {
    match column {
        Column::Year => t!("column-year"),
        Column::Title => t!("column-title"),
        Column::Director => t!("column-director"),
        Column::Distributor => t!("column-distributor"),
        Column::Country => t!("column-country"),
        Column::Budget => t!("column-budget"),
        Column::BoxOffice => t!("column-box-office"),
        Column::Other(label) => label.clone(),
    }
}

/// The full film list. Clicking a header re-orders the rows by that column,
/// alternating ascending and descending.
#[component]
pub fn FilmTable(records: Vec<FilmRecord>) -> Element {
    let mut rows = use_signal(|| records.clone());
    let mut sort_state = use_signal(SortState::default);

    let headers: Vec<(Column, String, String, &'static str)> = {
        let state = sort_state.read();
        Column::ALL
            .iter()
            .map(|column| {
                // Only the column currently ordering the rows shows its arrow.
                let indicator = match state.direction(column) {
                    Some(direction) if state.active() == Some(column) => direction.indicator(),
                    _ => "",
                };
                (column.clone(), column.key().to_string(), column_heading(column), indicator)
            })
            .collect()
    };

    rsx! {
        section { class: "film-table",
            h2 { class: "film-table__title", {t!("table-title")} }
            if rows.read().is_empty() {
                p { class: "film-table__empty", {t!("table-empty")} }
            } else {
                table {
                    thead {
                        tr {
                            for (column, key, heading, indicator) in headers {
                                th {
                                    key: "{key}",
                                    class: "film-table__header",
                                    onclick: move |_| {
                                        let sorted = sort::sort(&rows.read(), column.label(), &mut sort_state.write());
                                        rows.set(sorted);
                                    },
                                    "{heading}"
                                    if !indicator.is_empty() {
                                        span { class: "film-table__indicator", " {indicator}" }
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        for (idx, film) in rows.read().iter().enumerate() {
                            tr { key: "{idx}",
                                td { {film.year_text()} }
                                td {
                                    a { href: "{film.url}", target: "_blank", "{film.title}" }
                                }
                                td { "{film.director}" }
                                td { "{film.distributor}" }
                                td { "{film.country}" }
                                td { class: "film-table__amount", {format_currency(film.budget)} }
                                td { class: "film-table__amount", {format_currency(film.box_office)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
