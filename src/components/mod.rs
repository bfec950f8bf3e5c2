mod add_player;
mod delete_player;
mod dialog;
mod edit_player;
mod player_actions_menu;
mod player_card;
mod player_form;
mod player_list;
mod roster_provider;
mod toast;

pub use add_player::AddPlayer;
pub use delete_player::DeletePlayer;
pub use dialog::Dialog;
pub use edit_player::EditPlayer;
pub use player_actions_menu::PlayerActionsMenu;
pub use player_card::PlayerCard;
pub use player_form::{PlayerFormComp, PlayerFormProps};
pub use player_list::{PendingPlayers, PlayersView};
pub use roster_provider::{use_roster, RosterContext, RosterProvider};
pub use toast::{use_toaster, ToastProvider, Toaster};
