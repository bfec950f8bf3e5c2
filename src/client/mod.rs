mod directory;
mod error;
#[cfg(feature = "yew")]
mod http;
mod players;
mod users;

pub use directory::{normalize_listing, DirectoryApi};
#[cfg(feature = "yew")]
pub use directory::HttpDirectoryClient;
pub use error::ApiError;
pub use players::{PlayerApi, PlayerMutations};
#[cfg(feature = "yew")]
pub use players::HttpPlayersClient;
pub use users::UserApi;
#[cfg(feature = "yew")]
pub use users::HttpUsersClient;
