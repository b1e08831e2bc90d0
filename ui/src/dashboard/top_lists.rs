use dioxus::prelude::*;

use crate::core::aggregate::RankedGroup;
use crate::dashboard::model::RankedFilm;
use crate::t;

/// `title (year) - $amount` per film.
#[component]
pub fn TopFilms(id: String, title: String, films: Vec<RankedFilm>) -> Element {
    rsx! {
        section { id: "{id}", class: "top-list",
            h3 { class: "top-list__title", "{title}" }
            if films.is_empty() {
                p { class: "top-list__empty", {t!("lists-empty")} }
            } else {
                ul {
                    for (idx, film) in films.into_iter().enumerate() {
                        li { key: "{idx}",
                            strong { "{film.title}" }
                            " ({film.year_text}) - {film.amount_text}"
                        }
                    }
                }
            }
        }
    }
}

/// `distributor - count films` per group.
#[component]
pub fn TopDistributors(id: String, title: String, groups: Vec<RankedGroup>) -> Element {
    let unit = t!("top-films-unit");

    rsx! {
        section { id: "{id}", class: "top-list",
            h3 { class: "top-list__title", "{title}" }
            if groups.is_empty() {
                p { class: "top-list__empty", {t!("lists-empty")} }
            } else {
                ul {
                    for group in groups {
                        li { key: "{group.key}",
                            strong { "{group.key}" }
                            " - {group.count} {unit}"
                        }
                    }
                }
            }
        }
    }
}
