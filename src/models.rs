use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned record identifier, used as the render key
pub type ItemId = i64;

/// A collection the UpSkill API serves under `GET <ENDPOINT>`
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Request path, relative to the API base URL
    const ENDPOINT: &'static str;
    /// Response body field holding the array
    const FIELD: &'static str;
    /// Plural, human-readable name
    const LABEL: &'static str;

    fn id(&self) -> ItemId;

    /// Fixed message shown when fetching the collection fails
    fn fetch_error_message() -> String {
        format!("Error fetching {}", Self::LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: ItemId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: ItemId,
    pub name: String,
    pub proficiency: Proficiency,
    #[serde(default)]
    pub user_id: Option<ItemId>,
}

/// Skill rating, sent either as a number or as a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Proficiency {
    Level(i64),
    Score(f64),
    Label(String),
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proficiency::Level(level) => write!(f, "{}", level),
            Proficiency::Score(score) => write!(f, "{}", score),
            Proficiency::Label(label) => f.write_str(label),
        }
    }
}

impl Course {
    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl Resource for User {
    const ENDPOINT: &'static str = "/api/users";
    const FIELD: &'static str = "users";
    const LABEL: &'static str = "users";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Resource for Course {
    const ENDPOINT: &'static str = "/api/courses";
    const FIELD: &'static str = "courses";
    const LABEL: &'static str = "courses";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Resource for Skill {
    const ENDPOINT: &'static str = "/api/skills";
    const FIELD: &'static str = "skills";
    const LABEL: &'static str = "skills";

    fn id(&self) -> ItemId {
        self.id
    }
}
