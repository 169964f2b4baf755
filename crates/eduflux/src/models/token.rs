use super::User;

/// Claims carried by a session token
///
/// The snapshot is advisory: on session restore only `user.id` is
/// trusted and the authoritative record is re-fetched from the store.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenClaims {
    /// User snapshot at issue time
    pub user: User,

    /// Expiry as Unix seconds
    pub exp: i64,
}
