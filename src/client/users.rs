use async_trait::async_trait;

use crate::client::ApiError;
use crate::model::CurrentUser;

/// The permission boundary: who is looking at the admin screens.
#[async_trait(?Send)]
pub trait UserApi {
    async fn current_user(&self) -> Result<CurrentUser, ApiError>;
}

#[cfg(feature = "yew")]
pub use self::http_client::HttpUsersClient;

#[cfg(feature = "yew")]
mod http_client {
    use super::*;
    use crate::client::http;

    pub struct HttpUsersClient {
        base: String,
    }

    impl HttpUsersClient {
        pub fn new(base: impl Into<String>) -> Self {
            HttpUsersClient { base: base.into() }
        }
    }

    #[async_trait(?Send)]
    impl UserApi for HttpUsersClient {
        async fn current_user(&self) -> Result<CurrentUser, ApiError> {
            let response = http::get(&format!("{}/users/me", self.base)).await?;
            response
                .json()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        }
    }
}
