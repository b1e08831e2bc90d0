//! Dashboard components and the orchestrator that loads the dataset and lays
//! them out.

pub mod axis;
pub mod bar_chart;
pub mod film_table;
pub mod model;
pub mod top_lists;
pub mod tooltip;
pub mod trend_chart;

use dioxus::prelude::*;
use tracing::error;

use crate::core::config::CONFIG;
use crate::core::dataset::load_records;
use crate::core::platform;
use crate::core::record::RankField;
use crate::t;

pub use bar_chart::DistributorChart;
pub use film_table::FilmTable;
pub use model::{DashboardModel, RankedFilm};
pub use top_lists::{TopDistributors, TopFilms};
pub use trend_chart::TrendChart;

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Ready(DashboardModel),
    /// The dataset could not be obtained; nothing is rendered.
    Unavailable,
}

#[component]
pub fn Dashboard() -> Element {
    let mut load_state = use_signal(|| LoadState::Loading);

    use_hook(move || {
        platform::spawn_future(async move {
            let config = &*CONFIG;
            match load_records(&config.data_source).await {
                Ok(records) => load_state.set(LoadState::Ready(DashboardModel::build(records, config))),
                Err(err) => {
                    error!(%err, "error loading data");
                    load_state.set(LoadState::Unavailable);
                }
            }
        });
    });

    let state = load_state.read().clone();
    let model = match state {
        LoadState::Loading => {
            return rsx! {
                p { class: "dashboard__loading", {t!("dashboard-loading")} }
            };
        }
        LoadState::Unavailable => return rsx! {},
        LoadState::Ready(model) => model,
    };

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard__charts",
                TrendChart {
                    id: "chart1",
                    records: model.records.clone(),
                    field: RankField::Budget,
                    title: t!("chart-budget-title"),
                    x_label: t!("axis-year"),
                    y_label: t!("axis-budget"),
                }
                TrendChart {
                    id: "chart2",
                    records: model.records.clone(),
                    field: RankField::BoxOffice,
                    title: t!("chart-box-office-title"),
                    x_label: t!("axis-year"),
                    y_label: t!("axis-box-office"),
                }
                DistributorChart {
                    id: "chart3",
                    groups: model.distributors.clone(),
                    title: t!("chart-distributors-title"),
                    y_label: t!("axis-films"),
                }
            }
            div { class: "dashboard__lists",
                TopFilms {
                    id: "info1",
                    title: t!("top-expensive-title"),
                    films: model.most_expensive.clone(),
                }
                TopFilms {
                    id: "info2",
                    title: t!("top-grossing-title"),
                    films: model.top_grossing.clone(),
                }
                TopDistributors {
                    id: "info3",
                    title: t!("top-distributors-title"),
                    groups: model.distributors.clone(),
                }
            }
            FilmTable { records: model.records }
        }
    }
}
