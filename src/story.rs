use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct Story {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO-8601 timestamp; compared as text when ordering.
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    /// Accepts `true`/`false` or the `1`/`0` a database export produces.
    #[serde(default, deserialize_with = "flag")]
    pub is_approved: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}
