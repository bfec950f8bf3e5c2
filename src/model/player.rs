use serde::{Deserialize, Serialize};

use crate::model::PlayerDraft;

/// A player record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub division_id: String,
    #[serde(default)]
    pub group_id: Option<String>,
}

/// The `{data, count}` envelope of the players listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayersPage {
    #[serde(default)]
    pub data: Vec<Player>,
    #[serde(default)]
    pub count: u64,
}

/// Creation payload. Unset optionals are absent from the body, not empty
/// strings and not nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCreate {
    pub full_name: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub division_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl PlayerCreate {
    pub fn from_draft(draft: &PlayerDraft) -> Self {
        PlayerCreate {
            full_name: draft.full_name.clone(),
            rating: draft.rating,
            photo_url: draft.photo_url.clone(),
            division_id: draft.division_id.clone(),
            group_id: draft.group_id.clone(),
        }
    }
}

/// Update payload. Unset optionals serialize as explicit `null` so the
/// backend clears them, distinguishing "clear" from "don't change".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerUpdate {
    pub full_name: String,
    pub rating: f64,
    pub photo_url: Option<String>,
    pub division_id: String,
    pub group_id: Option<String>,
}

impl PlayerUpdate {
    pub fn from_draft(draft: &PlayerDraft) -> Self {
        PlayerUpdate {
            full_name: draft.full_name.clone(),
            rating: draft.rating,
            photo_url: draft.photo_url.clone(),
            division_id: draft.division_id.clone(),
            group_id: draft.group_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(photo_url: Option<&str>, group_id: Option<&str>) -> PlayerDraft {
        PlayerDraft {
            full_name: "Ann".to_string(),
            photo_url: photo_url.map(str::to_string),
            rating: 1600.0,
            division_id: "d1".to_string(),
            group_id: group_id.map(str::to_string),
        }
    }

    #[test]
    fn create_payload_omits_unset_optionals() {
        let payload = PlayerCreate::from_draft(&draft(None, None));
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            body,
            json!({
                "full_name": "Ann",
                "rating": 1600.0,
                "division_id": "d1",
            })
        );
    }

    #[test]
    fn create_payload_carries_set_optionals() {
        let payload =
            PlayerCreate::from_draft(&draft(Some("https://example.com/a.jpg"), Some("g1")));
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(body["photo_url"], json!("https://example.com/a.jpg"));
        assert_eq!(body["group_id"], json!("g1"));
    }

    #[test]
    fn update_payload_clears_unset_optionals_explicitly() {
        let payload = PlayerUpdate::from_draft(&draft(None, None));
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            body,
            json!({
                "full_name": "Ann",
                "rating": 1600.0,
                "photo_url": null,
                "division_id": "d1",
                "group_id": null,
            })
        );
    }

    #[test]
    fn players_page_tolerates_missing_fields() {
        let page: PlayersPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.count, 0);

        let page: PlayersPage = serde_json::from_value(json!({
            "data": [{
                "id": "p1",
                "full_name": "Ann",
                "division_id": "d1",
            }],
            "count": 1,
        }))
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].rating, 0.0);
        assert_eq!(page.data[0].group_id, None);
    }
}
