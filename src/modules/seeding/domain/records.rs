use serde::Deserialize;

/// Row of `breeds.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct BreedRecord {
    #[serde(rename = "Breed")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// Row of `dogs.csv`. `age` stays textual so one bad row does not abort the file.
#[derive(Debug, Clone, Deserialize)]
pub struct DogRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age", default)]
    pub age: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// Blank cells are absent values
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Result of seeding one collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub added: usize,
    pub failed: usize,
    /// The collection already had documents, nothing was read
    pub skipped: bool,
}

impl SeedOutcome {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub breeds: SeedOutcome,
    pub dogs: SeedOutcome,
}
