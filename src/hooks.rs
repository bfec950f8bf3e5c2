//! Data hooks: each wraps one backend collection, refetching whenever the
//! query bus invalidates its key.

use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::client::{
    DirectoryApi, HttpDirectoryClient, HttpPlayersClient, HttpUsersClient, PlayerApi, UserApi,
};
use crate::components::use_roster;
use crate::model::{CurrentUser, Division, DivisionGroup, PlayersPage};
use crate::query::{QueryBus, QueryKey};

/// State of one remote collection as seen by a view.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub data: Option<T>,
    /// The first fetch has not resolved yet.
    pub loading: bool,
    /// A later refetch (after invalidation) is running; stale data stays
    /// visible meanwhile.
    pub refreshing: bool,
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        QueryResult {
            data: None,
            loading: true,
            refreshing: false,
        }
    }
}

#[hook]
fn use_invalidation_version(bus: QueryBus, key: QueryKey) -> i32 {
    let version = use_counter(0);
    {
        let version = version.clone();
        use_effect_with((), move |_| {
            let subscription = bus.subscribe(
                key,
                Rc::new(move || {
                    version.increase();
                }),
            );
            move || drop(subscription)
        });
    }
    *version
}

#[hook]
pub fn use_players() -> QueryResult<PlayersPage> {
    let ctx = use_roster();
    let version = use_invalidation_version(ctx.bus.clone(), QueryKey::Players);
    let state = use_state(QueryResult::<PlayersPage>::default);
    {
        let state = state.clone();
        let base = ctx.api_base_url.clone();
        use_effect_with(version, move |_| {
            let previous = (*state).clone();
            state.set(QueryResult {
                loading: previous.data.is_none(),
                refreshing: previous.data.is_some(),
                data: previous.data.clone(),
            });
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpPlayersClient::new(base.to_string());
                match api.list_players().await {
                    Ok(page) => state.set(QueryResult {
                        data: Some(page),
                        loading: false,
                        refreshing: false,
                    }),
                    Err(err) => {
                        log::error!("failed to load players: {err}");
                        state.set(QueryResult {
                            data: previous.data,
                            loading: false,
                            refreshing: false,
                        });
                    }
                }
            });
            || ()
        });
    }
    (*state).clone()
}

#[hook]
pub fn use_divisions() -> QueryResult<Vec<Division>> {
    let ctx = use_roster();
    let version = use_invalidation_version(ctx.bus.clone(), QueryKey::Divisions);
    let state = use_state(QueryResult::<Vec<Division>>::default);
    {
        let state = state.clone();
        let base = ctx.api_base_url.clone();
        use_effect_with(version, move |_| {
            let previous = (*state).clone();
            state.set(QueryResult {
                loading: previous.data.is_none(),
                refreshing: previous.data.is_some(),
                data: previous.data.clone(),
            });
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpDirectoryClient::new(base.to_string());
                match api.list_divisions().await {
                    Ok(divisions) => state.set(QueryResult {
                        data: Some(divisions),
                        loading: false,
                        refreshing: false,
                    }),
                    Err(err) => {
                        log::error!("failed to load divisions: {err}");
                        state.set(QueryResult {
                            data: previous.data,
                            loading: false,
                            refreshing: false,
                        });
                    }
                }
            });
            || ()
        });
    }
    (*state).clone()
}

#[hook]
pub fn use_division_groups(division_id: Option<AttrValue>) -> QueryResult<Vec<DivisionGroup>> {
    let ctx = use_roster();
    let version = use_invalidation_version(ctx.bus.clone(), QueryKey::DivisionGroups);
    let state = use_state(QueryResult::<Vec<DivisionGroup>>::default);
    {
        let state = state.clone();
        let base = ctx.api_base_url.clone();
        use_effect_with((version, division_id), move |(_, division_id)| {
            let division_id = division_id.clone();
            let previous = (*state).clone();
            state.set(QueryResult {
                loading: previous.data.is_none(),
                refreshing: previous.data.is_some(),
                data: previous.data.clone(),
            });
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpDirectoryClient::new(base.to_string());
                let filter = division_id.as_deref();
                match api.list_division_groups(filter).await {
                    Ok(groups) => state.set(QueryResult {
                        data: Some(groups),
                        loading: false,
                        refreshing: false,
                    }),
                    Err(err) => {
                        log::error!("failed to load division groups: {err}");
                        state.set(QueryResult {
                            data: previous.data,
                            loading: false,
                            refreshing: false,
                        });
                    }
                }
            });
            || ()
        });
    }
    (*state).clone()
}

#[hook]
pub fn use_current_user() -> QueryResult<CurrentUser> {
    let ctx = use_roster();
    let version = use_invalidation_version(ctx.bus.clone(), QueryKey::CurrentUser);
    let state = use_state(QueryResult::<CurrentUser>::default);
    {
        let state = state.clone();
        let base = ctx.api_base_url.clone();
        use_effect_with(version, move |_| {
            let previous = (*state).clone();
            state.set(QueryResult {
                loading: previous.data.is_none(),
                refreshing: previous.data.is_some(),
                data: previous.data.clone(),
            });
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpUsersClient::new(base.to_string());
                match api.current_user().await {
                    Ok(user) => state.set(QueryResult {
                        data: Some(user),
                        loading: false,
                        refreshing: false,
                    }),
                    Err(err) => {
                        log::error!("failed to load current user: {err}");
                        state.set(QueryResult {
                            data: previous.data,
                            loading: false,
                            refreshing: false,
                        });
                    }
                }
            });
            || ()
        });
    }
    (*state).clone()
}
