use yew::prelude::*;

use crate::client::{HttpPlayersClient, PlayerMutations};
use crate::components::{use_roster, use_toaster, Dialog, PlayerFormComp};
use crate::model::{Division, DivisionGroup, PlayerDraft, PlayerFormValues, SaveAction, SaveFlow};

#[derive(Properties, PartialEq)]
pub struct AddPlayerProps {
    /// Renders nothing without the manage capability.
    pub can_manage: bool,
    pub divisions: Vec<Division>,
    pub division_groups: Vec<DivisionGroup>,
    /// Parent data still loading or refetching; submission stays held.
    #[prop_or_default]
    pub loading: bool,
}

#[function_component(AddPlayer)]
pub fn add_player(props: &AddPlayerProps) -> Html {
    let ctx = use_roster();
    let toaster = use_toaster();
    let open = use_state(|| false);
    let flow = use_state(|| SaveFlow::new(SaveAction::Create));

    if !props.can_manage {
        return html! {};
    }

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };

    let on_cancel = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    let on_submit = {
        let ctx = ctx.clone();
        let toaster = toaster.clone();
        let open = open.clone();
        let flow = flow.clone();
        Callback::from(move |draft: PlayerDraft| {
            let mut current = *flow;
            if !current.begin() {
                return;
            }
            flow.set(current);

            let bus = ctx.bus.clone();
            let base = ctx.api_base_url.clone();
            let toaster = toaster.clone();
            let open = open.clone();
            let flow = flow.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mutations = PlayerMutations::new(HttpPlayersClient::new(base.to_string()));
                let result = mutations.create(&draft).await.map(|_| ());

                let mut settled = current;
                let outcome = settled.settle(result);
                flow.set(settled);

                toaster.notify(outcome.notice);
                if outcome.close_editor {
                    open.set(false);
                }
                if let Some(key) = outcome.invalidate {
                    bus.invalidate(key);
                }
            });
        })
    };

    html! {
        <>
            <button
                class="roster-admin-add-player__trigger"
                type="button"
                onclick={on_open}
                disabled={props.loading}
            >
                {"Add Player"}
            </button>
            <Dialog title="Add Player" open={*open} on_close={on_cancel.clone()}>
                <PlayerFormComp
                    initial_values={PlayerFormValues::for_new_player()}
                    divisions={props.divisions.clone()}
                    division_groups={props.division_groups.clone()}
                    on_submit={on_submit}
                    on_cancel={on_cancel}
                    submit_label="Save"
                    description="Fill in the details to add a new player."
                    busy={flow.in_flight()}
                    disable_submit={props.loading}
                />
            </Dialog>
        </>
    }
}
