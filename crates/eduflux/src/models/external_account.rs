use iso8601_timestamp::Timestamp;

/// Supported competitive-programming platforms
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    LeetCode,
    HackerRank,
    CodeChef,
    GeeksforGeeks,
}

/// Solve and rank statistics reported by a platform
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    /// Total solved problems
    pub solved_count: u32,

    /// Global ranking on the platform
    pub ranking: u32,
}

/// Linked third-party profile
///
/// A user holds at most one account per platform; re-linking a
/// platform replaces the existing entry wholesale.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExternalAccount {
    /// Platform this account belongs to
    pub platform: Platform,

    /// Username on the platform
    pub username: String,

    /// Public profile URL
    pub profile_url: String,

    /// Optional API key for authenticated stat fetches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Last synced statistics
    pub stats: PlatformStats,

    /// Time the stats were last refreshed
    pub last_synced: Timestamp,
}
