use crate::models::Secret;

/// Session token config
#[derive(Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    /// Key used to sign session tokens
    ///
    /// The token is advisory, it only routes the UI. Privileged reads
    /// always re-fetch the user record by id from the store.
    pub secret: Secret,

    /// How long issued tokens should last for (in seconds)
    pub expire_session: i64,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            secret: Secret::new_dev(),
            expire_session: 60 * 60,
        }
    }
}
