//! Grouped counts and value rankings over the loaded film records.

use std::collections::HashMap;

use super::record::{FilmRecord, GroupField, RankField};
use super::sort::compare_amounts;

/// Size of every ranking shown on the dashboard.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGroup {
    pub key: String,
    pub count: usize,
}

/// A record selected into a ranking, together with the value it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopNEntry<'a> {
    pub record: &'a FilmRecord,
    pub field: RankField,
    pub value: f64,
}

/// Counts records per distinct `field` value and keeps the [`TOP_N`] largest groups.
///
/// Keys compare by exact string. Groups with equal counts keep the order in which
/// their key was first seen.
pub fn group_by_count(records: &[FilmRecord], field: GroupField) -> Vec<RankedGroup> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<RankedGroup> = Vec::new();

    for record in records {
        let key = record.group_key(field);
        match slots.get(key) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slots.insert(key, groups.len());
                groups.push(RankedGroup {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(TOP_N);
    groups
}

/// The `n` records with the largest `field` value, largest first.
///
/// NaN values rank below every real amount; ties keep input order.
pub fn top_n_by_field(records: &[FilmRecord], field: RankField, n: usize) -> Vec<TopNEntry<'_>> {
    let mut entries: Vec<TopNEntry<'_>> = records
        .iter()
        .map(|record| TopNEntry {
            record,
            field,
            value: record.amount(field),
        })
        .collect();

    entries.sort_by(|a, b| compare_amounts(b.value, a.value));
    entries.truncate(n);
    entries
}
