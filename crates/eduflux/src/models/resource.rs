/// Kind of learning resource
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Youtube,
    Book,
    Article,
    Pdf,
    Link,
}

/// Curated learning resource
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Resource {
    /// Unique Id
    pub id: String,

    /// Resource kind
    #[serde(rename = "type")]
    pub kind: ResourceKind,

    /// Resource title
    pub title: String,

    /// Short description
    pub description: String,

    /// Resource URL
    pub url: String,

    /// Category label
    pub category: String,
}
