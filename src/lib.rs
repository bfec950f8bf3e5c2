pub mod client;
#[cfg(feature = "yew")]
pub mod components;
pub mod config;
#[cfg(feature = "yew")]
pub mod hooks;
pub mod model;
pub mod query;

pub mod prelude {
    pub use crate::client::ApiError;
    pub use crate::client::DirectoryApi;
    pub use crate::client::PlayerApi;
    pub use crate::client::PlayerMutations;
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::Config;
    #[cfg(feature = "yew")]
    pub use crate::hooks::*;
    pub use crate::model::CurrentUser;
    pub use crate::model::DeleteFlow;
    pub use crate::model::Division;
    pub use crate::model::DivisionGroup;
    pub use crate::model::FieldErrors;
    pub use crate::model::Notice;
    pub use crate::model::Player;
    pub use crate::model::PlayerDraft;
    pub use crate::model::PlayerFormState;
    pub use crate::model::PlayerFormValues;
    pub use crate::model::PlayersPage;
    pub use crate::model::RosterLookups;
    pub use crate::model::SaveAction;
    pub use crate::model::SaveFlow;
    pub use crate::query::{QueryBus, QueryKey};
}
