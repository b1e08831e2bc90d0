//! Dataset loading. The dataset is a JSON array of film records, fetched over
//! HTTP on web and read from disk on native targets.

use tracing::info;

use super::error::DashboardError;
use super::record::FilmRecord;

pub fn parse_records(json: &str) -> Result<Vec<FilmRecord>, DashboardError> {
    Ok(serde_json::from_str(json)?)
}

pub async fn load_records(location: &str) -> Result<Vec<FilmRecord>, DashboardError> {
    let body = fetch_text(location).await?;
    let records = parse_records(&body)?;
    info!(count = records.len(), location, "dataset loaded");
    Ok(records)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(location: &str) -> Result<String, DashboardError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let window =
        web_sys::window().ok_or_else(|| DashboardError::unavailable(location, "no window"))?;
    let value = JsFuture::from(window.fetch_with_str(location))
        .await
        .map_err(|_| DashboardError::unavailable(location, "request failed"))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| DashboardError::unavailable(location, "unexpected fetch result"))?;

    if !response.ok() {
        return Err(DashboardError::unavailable(
            location,
            format!("HTTP {}", response.status()),
        ));
    }

    let body = response
        .text()
        .map_err(|_| DashboardError::unavailable(location, "unreadable body"))?;
    JsFuture::from(body)
        .await
        .map_err(|_| DashboardError::unavailable(location, "unreadable body"))?
        .as_string()
        .ok_or_else(|| DashboardError::unavailable(location, "body is not text"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(location: &str) -> Result<String, DashboardError> {
    std::fs::read_to_string(location)
        .map_err(|err| DashboardError::unavailable(location, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_records() {
        let records = parse_records(
            r#"[
                {"year": 1997, "title": "Titanic", "distributor": "Paramount", "budget": 200000000, "box_office": "1,843,000,000"},
                {"year": "1999", "title": "The Matrix", "distributor": "Warner Bros.", "budget": "63000000", "box_office": 463517383}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].box_office, 1_843_000_000.0);
        assert_eq!(records[1].year, Some(1999));
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        let err = parse_records(r#"{"films": []}"#).unwrap_err();
        assert!(matches!(err, DashboardError::Decode(_)));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let outcome = futures::executor::block_on(load_records("does/not/exist.json"));
        match outcome {
            Err(DashboardError::DataUnavailable { location, .. }) => {
                assert_eq!(location, "does/not/exist.json")
            }
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }
}
