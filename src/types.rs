use serde::{Deserialize, Serialize};

/// A single animal record, one row of the `animals` table.
///
/// Text fields missing from an incoming body deserialize as empty strings;
/// `id` is always required since it is supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    #[serde(alias = "animalId")]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub description: String,
}

/// Body of an update request.
///
/// Only the mutable fields are read; any other keys (`id`, `species`,
/// `habitat`) are ignored. A missing or `null` field keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AnimalPatch {
    /// Overlays the present fields onto `animal`, leaving identity fields alone.
    pub fn apply_to(self, animal: &mut Animal) {
        if let Some(name) = self.name {
            animal.name = name;
        }
        if let Some(scientific_name) = self.scientific_name {
            animal.scientific_name = scientific_name;
        }
        if let Some(description) = self.description {
            animal.description = description;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesQuery {
    #[serde(default)]
    pub species: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}
