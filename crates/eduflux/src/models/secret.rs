/// Secret model
#[derive(Serialize, Deserialize, Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: String) -> Secret {
        Secret(value)
    }

    /// Placeholder key for development and tests, never deploy with it
    pub fn new_dev() -> Secret {
        Secret("insecure_dev_secret".to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret: String = std::iter::repeat('X').take(self.0.len()).collect();

        f.debug_tuple("Secret").field(&secret).finish()
    }
}
