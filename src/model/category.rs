use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined label that transactions may reference by id.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Category {
    id: Uuid,
    name: String,
}

impl Category {
    /// Creates a category with a freshly generated id. Duplicate names are
    /// allowed; uniqueness is enforced only on ids.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
