//! Everything the dashboard shows, derived once per dataset load.

use crate::core::aggregate::{group_by_count, top_n_by_field, RankedGroup};
use crate::core::config::DashboardConfig;
use crate::core::format::format_currency;
use crate::core::record::{FilmRecord, GroupField, RankField};

/// One line of a top-films list: `title (year) - $amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFilm {
    pub title: String,
    pub year: Option<i32>,
    pub year_text: String,
    pub amount_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub records: Vec<FilmRecord>,
    pub distributors: Vec<RankedGroup>,
    pub most_expensive: Vec<RankedFilm>,
    pub top_grossing: Vec<RankedFilm>,
}

impl DashboardModel {
    pub fn build(records: Vec<FilmRecord>, config: &DashboardConfig) -> Self {
        let distributors = group_by_count(&records, GroupField::Distributor);
        let most_expensive = ranked_films(&records, RankField::Budget, config.top_n);
        let top_grossing = ranked_films(&records, RankField::BoxOffice, config.top_n);

        Self {
            records,
            distributors,
            most_expensive,
            top_grossing,
        }
    }
}

fn ranked_films(records: &[FilmRecord], field: RankField, n: usize) -> Vec<RankedFilm> {
    top_n_by_field(records, field, n)
        .into_iter()
        .map(|entry| RankedFilm {
            title: entry.record.title.clone(),
            year: entry.record.year,
            year_text: entry.record.year_text(),
            amount_text: format_currency(entry.value),
        })
        .collect()
}
