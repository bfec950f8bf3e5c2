use yew::prelude::*;

use crate::client::{HttpPlayersClient, PlayerMutations};
use crate::components::{use_roster, use_toaster, Dialog};
use crate::model::DeleteFlow;

#[derive(Properties, PartialEq)]
pub struct DeletePlayerProps {
    pub player_id: AttrValue,
    pub player_name: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

/// Delete with an explicit confirmation step. No backend call happens
/// before the user confirms; a failed delete keeps the confirmation open
/// for retry.
#[function_component(DeletePlayer)]
pub fn delete_player(props: &DeletePlayerProps) -> Html {
    let ctx = use_roster();
    let toaster = use_toaster();
    let open = use_state(|| false);
    let flow = use_state(DeleteFlow::new);

    let on_open = {
        let open = open.clone();
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            flow.set(DeleteFlow::new());
            open.set(true);
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    let on_cancel = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_confirm = {
        let ctx = ctx.clone();
        let toaster = toaster.clone();
        let open = open.clone();
        let flow = flow.clone();
        let player_id = props.player_id.clone();
        Callback::from(move |_: MouseEvent| {
            let mut current = *flow;
            if !current.confirm() {
                return;
            }
            flow.set(current);

            let bus = ctx.bus.clone();
            let base = ctx.api_base_url.clone();
            let toaster = toaster.clone();
            let open = open.clone();
            let flow = flow.clone();
            let player_id = player_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mutations = PlayerMutations::new(HttpPlayersClient::new(base.to_string()));
                let result = mutations.delete(&player_id).await;

                let mut settled = current;
                let outcome = settled.settle(result);
                flow.set(settled);

                toaster.notify(outcome.notice);
                if outcome.close_dialog {
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
                class="roster-admin-delete-player__trigger"
                type="button"
                onclick={on_open}
                disabled={props.disabled}
            >
                {"Delete Player"}
            </button>
            <Dialog title="Delete Player" open={*open} on_close={on_close}>
                <p class="roster-admin-delete-player__message">
                    {format!(
                        "This will permanently remove {}. Are you sure you want to continue?",
                        props.player_name
                    )}
                </p>
                <div class="roster-admin-delete-player__actions">
                    <button
                        class="roster-admin-delete-player__confirm"
                        type="button"
                        onclick={on_confirm}
                        disabled={flow.in_flight()}
                    >
                        {"Delete"}
                    </button>
                    <button
                        class="roster-admin-delete-player__cancel"
                        type="button"
                        onclick={on_cancel}
                        disabled={flow.in_flight()}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </Dialog>
        </>
    }
}
