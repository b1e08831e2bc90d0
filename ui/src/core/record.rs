//! Film record model. Numeric fields decode leniently: anything that is not a
//! number (or a numeric / currency string) becomes NaN and ranks as the minimum.

use serde::{Deserialize, Deserializer, Serialize};

use super::format::{parse_currency, UNAVAILABLE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    /// `None` when the year is absent or not a number.
    #[serde(default, deserialize_with = "de_year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub distributor: String,
    #[serde(default)]
    pub country: String,
    #[serde(default = "missing_amount", deserialize_with = "de_amount")]
    pub budget: f64,
    #[serde(default = "missing_amount", deserialize_with = "de_amount")]
    pub box_office: f64,
}

impl FilmRecord {
    /// The year as shown in tables and lists.
    pub fn year_text(&self) -> String {
        self.year.map(|year| year.to_string()).unwrap_or_else(|| UNAVAILABLE.to_string())
    }

    pub fn amount(&self, field: RankField) -> f64 {
        match field {
            RankField::Budget => self.budget,
            RankField::BoxOffice => self.box_office,
        }
    }

    pub fn group_key(&self, field: GroupField) -> &str {
        match field {
            GroupField::Distributor => &self.distributor,
            GroupField::Director => &self.director,
            GroupField::Country => &self.country,
        }
    }
}

/// Numeric fields a ranking or a trend chart can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankField {
    Budget,
    BoxOffice,
}

/// Text fields records can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Distributor,
    Director,
    Country,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

fn missing_amount() -> f64 {
    f64::NAN
}

fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Number(value) => value,
        RawScalar::Text(text) => parse_currency(&text),
        RawScalar::Other(_) => f64::NAN,
    })
}

fn de_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawScalar::deserialize(deserializer)? {
        RawScalar::Number(value) => value,
        RawScalar::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        RawScalar::Other(_) => f64::NAN,
    };
    Ok(value.is_finite().then(|| value.trunc() as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_and_currency_decode() {
        let record: FilmRecord = serde_json::from_value(json!({
            "year": "2001",
            "title": "Spirited Away",
            "budget": "$19,000,000",
            "box_office": 395_800_000,
        }))
        .unwrap();

        assert_eq!(record.year, Some(2001));
        assert_eq!(record.budget, 19_000_000.0);
        assert_eq!(record.box_office, 395_800_000.0);
        assert!(record.director.is_empty());
    }

    #[test]
    fn years_truncate_or_go_missing() {
        let years: Vec<Option<i32>> = [
            json!({ "year": "2001.0" }),
            json!({ "year": null }),
            json!({ "year": 1999.7 }),
            json!({ "year": "soon" }),
            json!({}),
        ]
        .into_iter()
        .map(|value| serde_json::from_value::<FilmRecord>(value).unwrap().year)
        .collect();
        assert_eq!(years, vec![Some(2001), None, Some(1999), None, None]);

        let missing: FilmRecord = serde_json::from_value(json!({ "year": null })).unwrap();
        assert_eq!(missing.year_text(), "—");
    }

    #[test]
    fn malformed_amounts_become_nan() {
        let record: FilmRecord = serde_json::from_value(json!({
            "year": 1999,
            "budget": "unknown",
            "box_office": null,
        }))
        .unwrap();

        assert!(record.budget.is_nan());
        assert!(record.box_office.is_nan());

        let missing: FilmRecord = serde_json::from_value(json!({ "year": 1999 })).unwrap();
        assert!(missing.budget.is_nan());
    }

    #[test]
    fn accessors_follow_field_enums() {
        let record: FilmRecord = serde_json::from_value(json!({
            "year": 2010,
            "distributor": "Warner Bros.",
            "country": "US",
            "budget": 160,
            "box_office": 836,
        }))
        .unwrap();

        assert_eq!(record.amount(RankField::Budget), 160.0);
        assert_eq!(record.amount(RankField::BoxOffice), 836.0);
        assert_eq!(record.group_key(GroupField::Distributor), "Warner Bros.");
        assert_eq!(record.group_key(GroupField::Country), "US");
    }
}
