use serde::{Deserialize, Serialize};

/// GET /users/me response. `usage_count` is the number of query calls
/// the server will still accept for this user.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    pub username: String,
    pub usage_count: u32,
}

impl UserProfile {
    pub fn has_quota(&self) -> bool {
        self.usage_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_users_me_payload() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"username":"alice","usage_count":3}"#).unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.usage_count, 3);
        assert!(profile.has_quota());
    }

    #[test]
    fn zero_usage_means_no_quota() {
        let profile = UserProfile {
            username: "bob".into(),
            usage_count: 0,
        };
        assert!(!profile.has_quota());
    }
}
