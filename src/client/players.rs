//! Player persistence client and the mutation coordinator the editing
//! dialogs drive.

use async_trait::async_trait;

use crate::client::ApiError;
use crate::model::{Player, PlayerCreate, PlayerDraft, PlayersPage, PlayerUpdate};

/// Backend operations on the players collection, mockable at the seam.
#[async_trait(?Send)]
pub trait PlayerApi {
    async fn list_players(&self) -> Result<PlayersPage, ApiError>;
    async fn create_player(&self, payload: &PlayerCreate) -> Result<Player, ApiError>;
    async fn update_player(&self, id: &str, payload: &PlayerUpdate) -> Result<Player, ApiError>;
    async fn delete_player(&self, id: &str) -> Result<(), ApiError>;
}

/// Shapes validated drafts into wire payloads and issues them.
///
/// Create strips unset optionals to absent fields; update sends them as
/// explicit nulls so the backend clears the stored value. What happens to
/// the dialog afterwards is decided by the lifecycle flows, not here.
pub struct PlayerMutations<A: PlayerApi> {
    api: A,
}

impl<A: PlayerApi> PlayerMutations<A> {
    pub fn new(api: A) -> Self {
        PlayerMutations { api }
    }

    pub async fn create(&self, draft: &PlayerDraft) -> Result<Player, ApiError> {
        let payload = PlayerCreate::from_draft(draft);
        match self.api.create_player(&payload).await {
            Ok(player) => {
                log::info!("created player {}", player.id);
                Ok(player)
            }
            Err(err) => {
                log::error!("failed to create player: {err}");
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: &str, draft: &PlayerDraft) -> Result<Player, ApiError> {
        let payload = PlayerUpdate::from_draft(draft);
        match self.api.update_player(id, &payload).await {
            Ok(player) => {
                log::info!("updated player {}", player.id);
                Ok(player)
            }
            Err(err) => {
                log::error!("failed to update player {id}: {err}");
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        match self.api.delete_player(id).await {
            Ok(()) => {
                log::info!("deleted player {id}");
                Ok(())
            }
            Err(err) => {
                log::error!("failed to delete player {id}: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(feature = "yew")]
pub use self::http_client::HttpPlayersClient;

#[cfg(feature = "yew")]
mod http_client {
    use super::*;
    use crate::client::http;

    /// gloo-net backed [`PlayerApi`] against the REST backend.
    pub struct HttpPlayersClient {
        base: String,
    }

    impl HttpPlayersClient {
        pub fn new(base: impl Into<String>) -> Self {
            HttpPlayersClient { base: base.into() }
        }
    }

    #[async_trait(?Send)]
    impl PlayerApi for HttpPlayersClient {
        async fn list_players(&self) -> Result<PlayersPage, ApiError> {
            let response = http::get(&format!("{}/players/", self.base)).await?;
            response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        }

        async fn create_player(&self, payload: &PlayerCreate) -> Result<Player, ApiError> {
            let response = http::post_json(&format!("{}/players/", self.base), payload).await?;
            response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        }

        async fn update_player(&self, id: &str, payload: &PlayerUpdate) -> Result<Player, ApiError> {
            let response =
                http::put_json(&format!("{}/players/{id}", self.base), payload).await?;
            response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        }

        async fn delete_player(&self, id: &str) -> Result<(), ApiError> {
            http::delete(&format!("{}/players/{id}", self.base)).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::executor::block_on;

    use crate::model::{
        DeleteFlow, Division, DivisionGroup, PlayerFormState, PlayerFormValues, SaveAction,
        SaveFlow,
    };
    use crate::query::{QueryBus, QueryKey};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Create(PlayerCreate),
        Update(String, PlayerUpdate),
        Delete(String),
    }

    /// Records every backend call; optionally fails mutations.
    #[derive(Clone, Default)]
    struct RecordingApi {
        calls: Rc<RefCell<Vec<Call>>>,
        fail: Rc<Cell<bool>>,
    }

    impl RecordingApi {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn failure(&self) -> ApiError {
            ApiError::Status {
                code: 500,
                message: "boom".to_string(),
            }
        }
    }

    #[async_trait(?Send)]
    impl PlayerApi for RecordingApi {
        async fn list_players(&self) -> Result<PlayersPage, ApiError> {
            self.calls.borrow_mut().push(Call::List);
            Ok(PlayersPage::default())
        }

        async fn create_player(&self, payload: &PlayerCreate) -> Result<Player, ApiError> {
            self.calls.borrow_mut().push(Call::Create(payload.clone()));
            if self.fail.get() {
                return Err(self.failure());
            }
            Ok(Player {
                id: "p-new".to_string(),
                full_name: payload.full_name.clone(),
                rating: payload.rating,
                photo_url: payload.photo_url.clone(),
                division_id: payload.division_id.clone(),
                group_id: payload.group_id.clone(),
            })
        }

        async fn update_player(&self, id: &str, payload: &PlayerUpdate) -> Result<Player, ApiError> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.to_string(), payload.clone()));
            if self.fail.get() {
                return Err(self.failure());
            }
            Ok(Player {
                id: id.to_string(),
                full_name: payload.full_name.clone(),
                rating: payload.rating,
                photo_url: payload.photo_url.clone(),
                division_id: payload.division_id.clone(),
                group_id: payload.group_id.clone(),
            })
        }

        async fn delete_player(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id.to_string()));
            if self.fail.get() {
                return Err(self.failure());
            }
            Ok(())
        }
    }

    fn directory() -> (Vec<Division>, Vec<DivisionGroup>) {
        (
            vec![Division {
                id: "d1".to_string(),
                name: "Alpha".to_string(),
                description: None,
            }],
            vec![DivisionGroup {
                id: "g1".to_string(),
                name: "G1".to_string(),
                division_id: "d1".to_string(),
            }],
        )
    }

    fn filled_form(groups: &[DivisionGroup]) -> PlayerFormState {
        let mut form = PlayerFormState::new(PlayerFormValues::for_new_player());
        form.set_full_name("Ann".to_string());
        form.set_rating("1600".to_string());
        form.set_division_id("d1".to_string(), groups);
        form.set_group_id("g1".to_string());
        form
    }

    fn players_subscriber(bus: &QueryBus) -> (Rc<Cell<u32>>, crate::query::Subscription) {
        let refetches = Rc::new(Cell::new(0));
        let subscription = {
            let refetches = refetches.clone();
            bus.subscribe(
                QueryKey::Players,
                Rc::new(move || refetches.set(refetches.get() + 1)),
            )
        };
        (refetches, subscription)
    }

    #[test]
    fn creating_a_player_persists_the_fields_and_refreshes_the_list() {
        let (divisions, groups) = directory();
        let api = RecordingApi::default();
        let mutations = PlayerMutations::new(api.clone());
        let bus = QueryBus::new();
        let (refetches, _subscription) = players_subscriber(&bus);

        let form = filled_form(&groups);
        let draft = form.draft(&divisions, &groups).expect("form is valid");

        let mut flow = SaveFlow::new(SaveAction::Create);
        assert!(flow.begin());
        let result = block_on(mutations.create(&draft)).map(|_| ());
        let outcome = flow.settle(result);
        if let Some(key) = outcome.invalidate {
            bus.invalidate(key);
        }

        assert_eq!(
            api.calls(),
            vec![Call::Create(PlayerCreate {
                full_name: "Ann".to_string(),
                rating: 1600.0,
                photo_url: None,
                division_id: "d1".to_string(),
                group_id: Some("g1".to_string()),
            })]
        );
        assert!(outcome.close_editor);
        assert_eq!(refetches.get(), 1);
    }

    #[test]
    fn failed_create_reports_and_keeps_the_editor_open() {
        let (divisions, groups) = directory();
        let api = RecordingApi::default();
        api.fail.set(true);
        let mutations = PlayerMutations::new(api.clone());

        let form = filled_form(&groups);
        let draft = form.draft(&divisions, &groups).expect("form is valid");

        let mut flow = SaveFlow::new(SaveAction::Create);
        flow.begin();
        let result = block_on(mutations.create(&draft)).map(|_| ());
        let outcome = flow.settle(result);

        assert_eq!(api.calls().len(), 1);
        assert!(!outcome.close_editor);
        assert_eq!(outcome.notice.message, "boom");
        // The form state is untouched by the failure; the user can retry.
        assert!(form.can_submit(&divisions, &groups, false, false));
    }

    #[test]
    fn update_sends_explicit_clears_for_unset_optionals() {
        let api = RecordingApi::default();
        let mutations = PlayerMutations::new(api.clone());

        let draft = crate::model::PlayerDraft {
            full_name: "Ann".to_string(),
            photo_url: None,
            rating: 1500.0,
            division_id: "d1".to_string(),
            group_id: None,
        };
        block_on(mutations.update("p1", &draft)).expect("update succeeds");

        let calls = api.calls();
        let Call::Update(id, payload) = &calls[0] else {
            panic!("expected an update call");
        };
        assert_eq!(id, "p1");
        let body = serde_json::to_value(payload).unwrap();
        assert_eq!(body["photo_url"], serde_json::Value::Null);
        assert_eq!(body["group_id"], serde_json::Value::Null);
    }

    #[test]
    fn cancelling_without_submitting_touches_nothing() {
        let (_, groups) = directory();
        let api = RecordingApi::default();
        let _mutations = PlayerMutations::new(api.clone());

        let mut form = filled_form(&groups);
        form.reset();

        assert_eq!(form.values(), &PlayerFormValues::for_new_player());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn delete_issues_no_call_before_confirmation_and_one_after() {
        let api = RecordingApi::default();
        let mutations = PlayerMutations::new(api.clone());
        let bus = QueryBus::new();
        let (refetches, _subscription) = players_subscriber(&bus);

        let mut flow = DeleteFlow::new();
        // Dialog opened, nothing confirmed: no backend traffic.
        assert!(api.calls().is_empty());

        assert!(flow.confirm());
        let result = block_on(mutations.delete("p1"));
        let outcome = flow.settle(result);
        if let Some(key) = outcome.invalidate {
            bus.invalidate(key);
        }

        assert_eq!(api.calls(), vec![Call::Delete("p1".to_string())]);
        assert!(outcome.close_dialog);
        assert_eq!(refetches.get(), 1);
    }

    #[test]
    fn failed_delete_reports_and_leaves_the_confirmation_open() {
        let api = RecordingApi::default();
        api.fail.set(true);
        let mutations = PlayerMutations::new(api.clone());

        let mut flow = DeleteFlow::new();
        assert!(flow.confirm());
        let result = block_on(mutations.delete("p1"));
        let outcome = flow.settle(result);

        assert_eq!(api.calls().len(), 1);
        assert!(!outcome.close_dialog);
        assert!(!flow.is_closed());

        // Retry goes through once the backend recovers.
        api.fail.set(false);
        assert!(flow.confirm());
        let result = block_on(mutations.delete("p1"));
        let outcome = flow.settle(result);
        assert!(outcome.close_dialog);
        assert_eq!(api.calls().len(), 2);
    }
}
