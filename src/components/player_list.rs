use yew::prelude::*;

use crate::components::{AddPlayer, PlayerCard};
use crate::hooks::{use_division_groups, use_divisions, use_players};
use crate::model::RosterLookups;

#[derive(Properties, PartialEq)]
pub struct PlayersViewProps {
    /// Explicit permission input; mutation affordances render only when
    /// true. Player data itself is always visible.
    pub can_manage: bool,
}

/// The players page: joins players with the division directory, shows a
/// skeleton grid while the first load runs and an empty state when the
/// roster has no players.
#[function_component(PlayersView)]
pub fn players_view(props: &PlayersViewProps) -> Html {
    let players = use_players();
    let divisions = use_divisions();
    let groups = use_division_groups(None);

    let loading = players.loading || divisions.loading || groups.loading;
    let refreshing = players.refreshing || divisions.refreshing || groups.refreshing;

    let division_list = divisions.data.clone().unwrap_or_default();
    let group_list = groups.data.clone().unwrap_or_default();

    let lookups = use_memo(
        (division_list.clone(), group_list.clone()),
        |(divisions, groups)| RosterLookups::new(divisions, groups),
    );

    let page = players.data.clone().unwrap_or_default();

    let header = html! {
        <div class="roster-admin-players__header">
            <h1 class="roster-admin-players__title">{"Players"}</h1>
            <AddPlayer
                can_manage={props.can_manage}
                divisions={division_list.clone()}
                division_groups={group_list.clone()}
                loading={loading || refreshing}
            />
        </div>
    };

    if loading && page.data.is_empty() {
        return html! {
            <div class="roster-admin-players">
                {header}
                <PendingPlayers />
            </div>
        };
    }

    if !loading && page.count == 0 {
        return html! {
            <div class="roster-admin-players">
                {header}
                <div class="roster-admin-players__empty">
                    <h2 class="roster-admin-players__empty-title">{"No players yet"}</h2>
                    <p class="roster-admin-players__empty-description">
                        {if props.can_manage {
                            "Add a new player to get started"
                        } else {
                            "Players will appear here once they are added."
                        }}
                    </p>
                </div>
            </div>
        };
    }

    html! {
        <div class="roster-admin-players">
            {header}
            <div class="roster-admin-players__grid">
                {for page.data.iter().map(|player| {
                    html! {
                        <PlayerCard
                            key={player.id.clone()}
                            player={player.clone()}
                            division_label={lookups.division_label(player)}
                            group_label={lookups.group_label(player)}
                            can_manage={props.can_manage}
                            divisions={division_list.clone()}
                            division_groups={group_list.clone()}
                            refreshing={refreshing}
                        />
                    }
                })}
            </div>
        </div>
    }
}

/// Skeleton placeholder grid for the first players fetch.
#[function_component(PendingPlayers)]
pub fn pending_players() -> Html {
    html! {
        <div class="roster-admin-players__grid">
            {for (0..6).map(|index| html! {
                <div
                    key={index}
                    class="roster-admin-player-card roster-admin-player-card--skeleton"
                >
                    <div class="roster-admin-skeleton roster-admin-skeleton--avatar"></div>
                    <div class="roster-admin-skeleton roster-admin-skeleton--line"></div>
                    <div class="roster-admin-skeleton roster-admin-skeleton--line"></div>
                    <div class="roster-admin-skeleton roster-admin-skeleton--line"></div>
                </div>
            })}
        </div>
    }
}
