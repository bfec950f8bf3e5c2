use yew::prelude::*;

use crate::config::Config;
use crate::query::QueryBus;

/// Shared handles the roster screens need: the invalidation bus and the API
/// base URL the HTTP clients are built from.
#[derive(Clone, PartialEq)]
pub struct RosterContext {
    pub bus: QueryBus,
    pub api_base_url: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct RosterProviderProps {
    /// Overrides the configured API base URL, mainly for embedding.
    #[prop_or_default]
    pub api_base_url: Option<AttrValue>,
    pub children: Children,
}

#[function_component(RosterProvider)]
pub fn roster_provider(props: &RosterProviderProps) -> Html {
    let bus = use_state(QueryBus::new);

    let api_base_url = props
        .api_base_url
        .clone()
        .unwrap_or_else(|| AttrValue::from(Config::new().api_base_url));

    let context = RosterContext {
        bus: (*bus).clone(),
        api_base_url,
    };

    html! {
        <ContextProvider<RosterContext> {context}>
            {props.children.clone()}
        </ContextProvider<RosterContext>>
    }
}

#[hook]
pub fn use_roster() -> RosterContext {
    use_context::<RosterContext>().expect("use_roster must be used within a RosterProvider")
}
