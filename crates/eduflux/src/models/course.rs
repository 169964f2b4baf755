/// Whether a course is free or paid
///
/// A price of zero implies `Free`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Free,
    Paid,
}

/// Completion status of a course module
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Single unit of course content
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CourseModule {
    /// Module title
    pub title: String,

    /// Completion status
    pub status: ModuleStatus,
}

/// Downloadable course asset
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Download {
    /// Asset title
    pub title: String,

    /// Asset kind, e.g. `pdf` or `zip`
    #[serde(rename = "type")]
    pub kind: String,

    /// Download URL
    pub url: String,
}

/// Course model
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Course {
    /// Unique Id
    pub id: String,

    /// Course title
    pub title: String,

    /// Short description
    pub description: String,

    /// Instructor display name
    pub instructor: String,

    /// Price in the platform currency, zero for free courses
    pub price: f64,

    /// Category tags
    pub tags: Vec<String>,

    /// Cover image URL
    pub image_url: String,

    /// Monetisation type
    #[serde(rename = "type")]
    pub price_type: PriceType,

    /// Ordered module list
    pub modules: Vec<CourseModule>,

    /// Ordered downloadable assets
    pub downloads: Vec<Download>,
}

/// Price predicate for catalog searches
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceFilter {
    #[default]
    All,
    Free,
    Paid,
}

/// Catalog search filter
///
/// Present options compose with logical AND; an empty filter returns
/// the catalog in store order.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CourseFilter {
    /// Case-insensitive substring over title, description and instructor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,

    /// Exact tag membership
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Monetisation type
    #[serde(default)]
    pub price: PriceFilter,
}
