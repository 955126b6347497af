use bson::{doc, Bson, Document};

/// Query predicates the repositories need from the store
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Field equals value, compared with the store's type-aware equality
    Eq { field: String, value: Bson },
    /// Whole-string match ignoring case; the value is matched literally
    EqIgnoreCase { field: String, value: String },
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn eq_ignore_case(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::EqIgnoreCase {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Render as a MongoDB query document
    pub fn to_document(&self) -> Document {
        let mut query = Document::new();
        match self {
            Filter::Eq { field, value } => {
                query.insert(field.clone(), value.clone());
            }
            Filter::EqIgnoreCase { field, value } => {
                query.insert(
                    field.clone(),
                    doc! {
                        "$regex": format!("^{}$", regex::escape(value)),
                        "$options": "i",
                    },
                );
            }
        }
        query
    }

    /// Evaluate against a single document (missing fields compare as null)
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::Eq { field, value } => document.get(field).unwrap_or(&Bson::Null) == value,
            Filter::EqIgnoreCase { field, value } => match document.get(field) {
                Some(Bson::String(s)) => s.to_lowercase() == value.to_lowercase(),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn test_eq_renders_plain_match() {
        let id = ObjectId::new();
        let filter = Filter::eq("breed_id", id);
        assert_eq!(filter.to_document(), doc! { "breed_id": id });
    }

    #[test]
    fn test_case_insensitive_match_escapes_metacharacters() {
        let filter = Filter::eq_ignore_case("name", "Retriever (Golden)");
        assert_eq!(
            filter.to_document(),
            doc! { "name": { "$regex": r"^Retriever \(Golden\)$", "$options": "i" } }
        );
    }

    #[test]
    fn test_matches() {
        let document = doc! { "name": "Beagle", "age": 3 };
        assert!(Filter::eq_ignore_case("name", "bEAGLE").matches(&document));
        assert!(!Filter::eq_ignore_case("name", "Beagl").matches(&document));
        assert!(Filter::eq("age", 3).matches(&document));
        assert!(Filter::eq("breed_id", Bson::Null).matches(&document));
        assert!(!Filter::eq("age", 4).matches(&document));
    }
}
