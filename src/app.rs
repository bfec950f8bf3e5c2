use roster_admin::prelude::*;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <RosterProvider>
            <ToastProvider>
                <RosterScreen />
            </ToastProvider>
        </RosterProvider>
    }
}

#[function_component(RosterScreen)]
fn roster_screen() -> Html {
    let current_user = use_current_user();

    // Permission flows down as an explicit flag; components never read the
    // user record themselves.
    let can_manage = current_user
        .data
        .as_ref()
        .map(CurrentUser::can_manage_players)
        .unwrap_or(false);

    html! {
        <PlayersView {can_manage} />
    }
}
