mod division;
mod form;
mod lifecycle;
mod player;
mod user;

pub use division::{groups_for_division, Division, DivisionGroup, RosterLookups};
pub use form::{
    validate_full_name, validate_photo_url, validate_rating, FieldErrors, PlayerDraft,
    PlayerFormState, PlayerFormValues,
};
pub use lifecycle::{
    DeleteFlow, DeleteOutcome, Notice, NoticeLevel, SaveAction, SaveFlow, SaveOutcome,
};
pub use player::{Player, PlayerCreate, PlayersPage, PlayerUpdate};
pub use user::CurrentUser;
