//! Read-only client for the division directory.
//!
//! The backend serves listings either as a bare JSON array or wrapped in a
//! `{data: [...]}` envelope depending on the endpoint generation;
//! [`normalize_listing`] folds both into a plain vector so callers never
//! branch on the envelope shape.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ApiError;
use crate::model::{Division, DivisionGroup};

/// Normalizes a listing payload into a vector. Total: a bare array or a
/// `data` array yields its rows, every other shape yields an empty vector.
pub fn normalize_listing<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(mut fields) => match fields.remove("data") {
            Some(Value::Array(rows)) => rows,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    serde_json::from_value(Value::Array(rows)).unwrap_or_default()
}

/// Directory listings, mockable at the seam.
#[async_trait(?Send)]
pub trait DirectoryApi {
    async fn list_divisions(&self) -> Result<Vec<Division>, ApiError>;

    /// Groups, optionally server-side filtered to one division.
    async fn list_division_groups(
        &self,
        division_id: Option<&str>,
    ) -> Result<Vec<DivisionGroup>, ApiError>;
}

#[cfg(feature = "yew")]
pub use self::http_client::HttpDirectoryClient;

#[cfg(feature = "yew")]
mod http_client {
    use super::*;
    use crate::client::http;

    /// gloo-net backed [`DirectoryApi`] against the REST backend.
    pub struct HttpDirectoryClient {
        base: String,
    }

    impl HttpDirectoryClient {
        pub fn new(base: impl Into<String>) -> Self {
            HttpDirectoryClient { base: base.into() }
        }
    }

    #[async_trait(?Send)]
    impl DirectoryApi for HttpDirectoryClient {
        async fn list_divisions(&self) -> Result<Vec<Division>, ApiError> {
            let response = http::get(&format!("{}/divisions/", self.base)).await?;
            let payload: Value = response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))?;
            Ok(normalize_listing(payload))
        }

        async fn list_division_groups(
            &self,
            division_id: Option<&str>,
        ) -> Result<Vec<DivisionGroup>, ApiError> {
            let url = format!("{}/division-groups/", self.base);
            let response = match division_id {
                Some(id) => http::get_with_query(&url, &[("division_id", id)]).await?,
                None => http::get(&url).await?,
            };
            let payload: Value = response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))?;
            Ok(normalize_listing(payload))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_passes_through() {
        let divisions: Vec<Division> = normalize_listing(json!([
            {"id": "d1", "name": "Alpha"},
            {"id": "d2", "name": "Beta", "description": "second"},
        ]));

        assert_eq!(divisions.len(), 2);
        assert_eq!(divisions[0].id, "d1");
        assert_eq!(divisions[1].description.as_deref(), Some("second"));
    }

    #[test]
    fn enveloped_array_is_unwrapped() {
        let groups: Vec<DivisionGroup> = normalize_listing(json!({
            "data": [{"id": "g1", "name": "G1", "division_id": "d1"}],
        }));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].division_id, "d1");
    }

    #[test]
    fn unrecognized_shapes_normalize_to_empty() {
        let cases = vec![
            json!(null),
            json!("divisions"),
            json!(7),
            json!({"items": []}),
            json!({"data": "not-an-array"}),
            json!({"data": {"id": "d1"}}),
        ];
        for payload in cases {
            let divisions: Vec<Division> = normalize_listing(payload.clone());
            assert!(divisions.is_empty(), "expected empty for {payload}");
        }
    }

    #[test]
    fn rows_that_do_not_deserialize_normalize_to_empty() {
        let divisions: Vec<Division> = normalize_listing(json!([{"name": 3}]));
        assert!(divisions.is_empty());
    }
}
