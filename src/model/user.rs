use serde::{Deserialize, Serialize};

/// The current user record exposed by the auth layer. Only read here, to
/// derive the manage-players capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

impl CurrentUser {
    pub fn can_manage_players(&self) -> bool {
        self.is_superuser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_superusers_manage_players() {
        let user = CurrentUser {
            id: "u1".to_string(),
            email: "admin@example.com".to_string(),
            full_name: None,
            is_superuser: true,
        };
        assert!(user.can_manage_players());

        let user = CurrentUser {
            is_superuser: false,
            ..user
        };
        assert!(!user.can_manage_players());
    }
}
