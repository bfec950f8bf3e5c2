use yew::prelude::*;

use crate::components::PlayerActionsMenu;
use crate::model::{Division, DivisionGroup, Player};

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub player: Player,
    /// Display name of the player's division, already resolved by the page
    /// (falls back to the raw id on a directory miss).
    pub division_label: AttrValue,
    /// Display name of the player's group, `"No group"` when absent.
    pub group_label: AttrValue,
    pub can_manage: bool,
    pub divisions: Vec<Division>,
    pub division_groups: Vec<DivisionGroup>,
    #[prop_or_default]
    pub refreshing: bool,
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let player = &props.player;

    let avatar = match &player.photo_url {
        Some(url) => html! {
            <img
                class="roster-admin-player-card__avatar"
                src={url.clone()}
                alt={player.full_name.clone()}
            />
        },
        None => html! {
            <div class="roster-admin-player-card__avatar roster-admin-player-card__avatar--fallback">
                {initials(&player.full_name)}
            </div>
        },
    };

    html! {
        <div class="roster-admin-player-card">
            if props.can_manage {
                <PlayerActionsMenu
                    player={player.clone()}
                    divisions={props.divisions.clone()}
                    division_groups={props.division_groups.clone()}
                    disabled={props.refreshing}
                />
            }
            {avatar}
            <h3 class="roster-admin-player-card__name">{&player.full_name}</h3>
            <span class="roster-admin-player-card__rating">
                {format!("Rating: {}", player.rating)}
            </span>
            <div class="roster-admin-player-card__detail">
                <span class="roster-admin-player-card__detail-label">{"Division"}</span>
                <span class="roster-admin-player-card__detail-value">{props.division_label.clone()}</span>
            </div>
            <div class="roster-admin-player-card__detail">
                <span class="roster-admin-player-card__detail-label">{"Group"}</span>
                <span class="roster-admin-player-card__detail-value">{props.group_label.clone()}</span>
            </div>
        </div>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Ann Archer"), "AA");
        assert_eq!(initials("ann"), "A");
        assert_eq!(initials("a b c"), "AB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn read_only_card_props_carry_full_player_data() {
        let player = Player {
            id: "p1".to_string(),
            full_name: "Ann".to_string(),
            rating: 1600.0,
            photo_url: None,
            division_id: "d1".to_string(),
            group_id: None,
        };

        let props = yew::props!(PlayerCardProps {
            player: player.clone(),
            division_label: "Alpha",
            group_label: "No group",
            can_manage: false,
            divisions: Vec::new(),
            division_groups: Vec::new(),
        });

        // A non-manager still sees the record; only the menu is gated.
        assert!(!props.can_manage);
        assert_eq!(props.player, player);
    }
}
