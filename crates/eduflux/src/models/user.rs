use super::ExternalAccount;

/// Account role
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// User model
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    /// Unique Id
    pub id: String,

    /// Display name
    pub name: String,

    /// User's email
    pub email: String,

    /// Normalised email, unique across the store
    pub email_normalised: String,

    /// Argon2 hashed password
    pub password: String,

    /// Account role
    pub role: Role,

    /// Whether the email has been verified by passcode
    #[serde(default)]
    pub verified: bool,

    /// Ids of enrolled courses, order irrelevant, no duplicates
    pub enrolled_courses: Vec<String>,

    /// Linked competitive-programming profiles, one per platform
    pub external_accounts: Vec<ExternalAccount>,
}

/// Leaderboard row derived from external account stats
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// User Id
    pub id: String,

    /// Display name
    pub name: String,

    /// Solved problems summed over all linked platforms
    pub total_solved: u32,

    /// 1-based position, descending by total solved
    pub rank: usize,
}
