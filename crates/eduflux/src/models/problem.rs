use super::Platform;

/// Problem difficulty
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Practice problem hosted on an external platform
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Problem {
    /// Unique Id
    pub id: String,

    /// Problem title
    pub title: String,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// Problem URL
    pub url: String,

    /// Hosting platform
    pub platform: Platform,
}

/// Category of practice problems
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProblemSet {
    /// Category label, e.g. `Arrays`
    pub category: String,

    /// Problems in this category
    pub problems: Vec<Problem>,
}
