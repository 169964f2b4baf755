mod otp;
mod session;

pub use otp::*;
pub use session::*;

/// Eduflux configuration
#[derive(Default, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Session token settings
    pub session: SessionConfig,

    /// One-time passcode expiry settings
    pub otp: OtpExpiryConfig,
}
