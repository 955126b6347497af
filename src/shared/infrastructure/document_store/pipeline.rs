use bson::{doc, Bson, Document};

use super::filter::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_i32(&self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// A field kept by a `$project` stage
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectedField {
    /// Copy the field as-is
    Keep(String),
    /// Expose the value at a dotted `path` under `name`; omitted when the path is missing
    Alias { name: String, path: String },
}

/// Aggregation stages supported by every gateway implementation
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineStage {
    Match(Filter),
    /// Left outer join; `first_match_only` caps the joined array at one document
    Lookup {
        from: String,
        local_field: String,
        foreign_field: String,
        as_field: String,
        first_match_only: bool,
    },
    Unwind {
        path: String,
        preserve_null_and_empty_arrays: bool,
    },
    Project(Vec<ProjectedField>),
    Sort { key: String, order: SortOrder },
}

impl PipelineStage {
    /// Render as a MongoDB aggregation stage
    pub fn to_document(&self) -> Document {
        match self {
            PipelineStage::Match(filter) => doc! { "$match": filter.to_document() },
            PipelineStage::Lookup {
                from,
                local_field,
                foreign_field,
                as_field,
                first_match_only,
            } => {
                let mut lookup = doc! {
                    "from": from.as_str(),
                    "localField": local_field.as_str(),
                    "foreignField": foreign_field.as_str(),
                    "as": as_field.as_str(),
                };
                if *first_match_only {
                    lookup.insert("pipeline", vec![Bson::Document(doc! { "$limit": 1 })]);
                }
                doc! { "$lookup": lookup }
            }
            PipelineStage::Unwind {
                path,
                preserve_null_and_empty_arrays,
            } => doc! {
                "$unwind": {
                    "path": format!("${}", path),
                    "preserveNullAndEmptyArrays": *preserve_null_and_empty_arrays,
                }
            },
            PipelineStage::Project(fields) => {
                let mut projection = Document::new();
                for field in fields {
                    match field {
                        ProjectedField::Keep(name) => {
                            projection.insert(name.clone(), 1);
                        }
                        ProjectedField::Alias { name, path } => {
                            projection.insert(name.clone(), format!("${}", path));
                        }
                    }
                }
                doc! { "$project": projection }
            }
            PipelineStage::Sort { key, order } => {
                let mut sort = Document::new();
                sort.insert(key.clone(), order.as_i32());
                doc! { "$sort": sort }
            }
        }
    }
}

pub fn to_documents(stages: &[PipelineStage]) -> Vec<Document> {
    stages.iter().map(PipelineStage::to_document).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_renders_limit_subpipeline() {
        let stage = PipelineStage::Lookup {
            from: "breeds".to_string(),
            local_field: "breed_id".to_string(),
            foreign_field: "_id".to_string(),
            as_field: "breed_info".to_string(),
            first_match_only: true,
        };
        assert_eq!(
            stage.to_document(),
            doc! {
                "$lookup": {
                    "from": "breeds",
                    "localField": "breed_id",
                    "foreignField": "_id",
                    "as": "breed_info",
                    "pipeline": [ { "$limit": 1 } ],
                }
            }
        );
    }

    #[test]
    fn test_unwind_and_project_prefix_paths() {
        let unwind = PipelineStage::Unwind {
            path: "breed_info".to_string(),
            preserve_null_and_empty_arrays: true,
        };
        assert_eq!(
            unwind.to_document(),
            doc! { "$unwind": { "path": "$breed_info", "preserveNullAndEmptyArrays": true } }
        );

        let project = PipelineStage::Project(vec![
            ProjectedField::Keep("name".to_string()),
            ProjectedField::Alias {
                name: "breed".to_string(),
                path: "breed_info.name".to_string(),
            },
        ]);
        assert_eq!(
            project.to_document(),
            doc! { "$project": { "name": 1, "breed": "$breed_info.name" } }
        );
    }

    #[test]
    fn test_sort_direction() {
        let stage = PipelineStage::Sort {
            key: "name".to_string(),
            order: SortOrder::Descending,
        };
        assert_eq!(stage.to_document(), doc! { "$sort": { "name": -1 } });
    }
}
