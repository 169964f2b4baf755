use iso8601_timestamp::Timestamp;

/// Which passcode registry an entry belongs to
///
/// Registration and login passcodes are issued and consumed
/// independently of each other.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OtpRegistry {
    Registration,
    Login,
}

/// Live one-time passcode, keyed by normalised email
///
/// At most one entry exists per email per registry; issuing a new
/// passcode overwrites the previous one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    /// 6-digit numeric code
    pub code: String,

    /// Absolute expiry instant
    pub expires: Timestamp,
}

impl OtpEntry {
    /// Whether this entry is past its expiry
    pub fn is_expired(&self) -> bool {
        Timestamp::now_utc() >= self.expires
    }
}
