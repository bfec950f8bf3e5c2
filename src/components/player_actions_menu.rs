use yew::prelude::*;

use crate::components::{DeletePlayer, EditPlayer};
use crate::model::{Division, DivisionGroup, Player};

#[derive(Properties, PartialEq)]
pub struct PlayerActionsMenuProps {
    pub player: Player,
    pub divisions: Vec<Division>,
    pub division_groups: Vec<DivisionGroup>,
    #[prop_or_default]
    pub disabled: bool,
}

/// The per-card management menu. Only rendered for managers; the card
/// applies that gate.
#[function_component(PlayerActionsMenu)]
pub fn player_actions_menu(props: &PlayerActionsMenuProps) -> Html {
    let open = use_state(|| false);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="roster-admin-player-actions">
            <button
                class="roster-admin-player-actions__toggle"
                type="button"
                aria-label="Open player actions"
                onclick={on_toggle}
                disabled={props.disabled}
            >
                {"⋮"}
            </button>
            if *open {
                <div class="roster-admin-player-actions__menu">
                    <EditPlayer
                        player={props.player.clone()}
                        divisions={props.divisions.clone()}
                        division_groups={props.division_groups.clone()}
                        disabled={props.disabled}
                    />
                    <DeletePlayer
                        player_id={props.player.id.clone()}
                        player_name={props.player.full_name.clone()}
                        disabled={props.disabled}
                    />
                </div>
            }
        </div>
    }
}
