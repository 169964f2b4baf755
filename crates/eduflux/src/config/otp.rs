/// One-time passcode expiry config
#[derive(Serialize, Deserialize, Clone)]
pub struct OtpExpiryConfig {
    /// How long registration passcodes should last for (in seconds)
    pub expire_registration: i64,
    /// How long login passcodes should last for (in seconds)
    pub expire_login: i64,
}

impl Default for OtpExpiryConfig {
    fn default() -> OtpExpiryConfig {
        OtpExpiryConfig {
            expire_registration: 10 * 60,
            expire_login: 5 * 60,
        }
    }
}
