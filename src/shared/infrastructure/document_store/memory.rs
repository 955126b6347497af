//! In-memory [`DocumentStore`] backed by [`DashMap`].
//!
//! Mirrors the MongoDB behaviours the repositories rely on: store-assigned
//! ids, unique indexes, "matched but not modified" updates, binary string
//! ordering and the typed aggregation stages.

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use dashmap::DashMap;

use super::filter::Filter;
use super::gateway::{DocumentStore, IndexSpec};
use super::ordering::compare_values;
use super::pipeline::{PipelineStage, ProjectedField, SortOrder};
use crate::shared::errors::{AppError, AppResult};

const ID_FIELD: &str = "_id";

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: DashMap<String, Vec<Document>>,
    unique_fields: DashMap<String, Vec<String>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self, collection: &str) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    fn unique_fields_for(&self, collection: &str) -> Vec<String> {
        self.unique_fields
            .get(collection)
            .map(|fields| fields.clone())
            .unwrap_or_default()
    }
}

fn document_id(document: &Document) -> Option<ObjectId> {
    document.get_object_id(ID_FIELD).ok()
}

fn check_unique(
    collection: &str,
    unique_fields: &[String],
    existing: &[Document],
    candidate: &Document,
    skip_id: Option<ObjectId>,
) -> AppResult<()> {
    for field in unique_fields {
        let value = candidate.get(field).unwrap_or(&Bson::Null);
        let clash = existing.iter().any(|doc| {
            (skip_id.is_none() || document_id(doc) != skip_id)
                && doc.get(field).unwrap_or(&Bson::Null) == value
        });
        if clash {
            return Err(AppError::DuplicateKey(format!(
                "{}.{} already contains {}",
                collection, field, value
            )));
        }
    }
    Ok(())
}

fn sort_documents(documents: &mut [Document], key: &str, order: SortOrder) {
    documents.sort_by(|a, b| {
        let ordering = compare_values(a.get(key), b.get(key));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// Resolve a dotted path such as `breed_info.name`
fn get_path<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut parts = path.split('.');
    let mut current = document.get(parts.next()?)?;
    for part in parts {
        current = current.as_document()?.get(part)?;
    }
    Some(current)
}

impl InMemoryDocumentStore {
    fn apply_stage(&self, documents: Vec<Document>, stage: &PipelineStage) -> Vec<Document> {
        match stage {
            PipelineStage::Match(filter) => documents
                .into_iter()
                .filter(|doc| filter.matches(doc))
                .collect(),
            PipelineStage::Lookup {
                from,
                local_field,
                foreign_field,
                as_field,
                first_match_only,
            } => {
                let foreign = self.snapshot(from);
                documents
                    .into_iter()
                    .map(|mut doc| {
                        let local = doc.get(local_field).cloned().unwrap_or(Bson::Null);
                        let mut matches: Vec<Bson> = foreign
                            .iter()
                            .filter(|candidate| {
                                candidate.get(foreign_field).unwrap_or(&Bson::Null) == &local
                            })
                            .cloned()
                            .map(Bson::Document)
                            .collect();
                        if *first_match_only {
                            matches.truncate(1);
                        }
                        doc.insert(as_field.clone(), Bson::Array(matches));
                        doc
                    })
                    .collect()
            }
            PipelineStage::Unwind {
                path,
                preserve_null_and_empty_arrays,
            } => {
                let mut unwound = Vec::with_capacity(documents.len());
                for mut doc in documents {
                    match doc.get(path).cloned() {
                        Some(Bson::Array(items)) if !items.is_empty() => {
                            for item in items {
                                let mut copy = doc.clone();
                                copy.insert(path.clone(), item);
                                unwound.push(copy);
                            }
                        }
                        Some(Bson::Array(_)) => {
                            if *preserve_null_and_empty_arrays {
                                doc.remove(path);
                                unwound.push(doc);
                            }
                        }
                        None | Some(Bson::Null) => {
                            if *preserve_null_and_empty_arrays {
                                unwound.push(doc);
                            }
                        }
                        Some(_) => unwound.push(doc),
                    }
                }
                unwound
            }
            PipelineStage::Project(fields) => documents
                .into_iter()
                .map(|doc| {
                    let mut projected = Document::new();
                    if let Some(id) = doc.get(ID_FIELD) {
                        projected.insert(ID_FIELD, id.clone());
                    }
                    for field in fields {
                        match field {
                            ProjectedField::Keep(name) => {
                                if let Some(value) = doc.get(name) {
                                    projected.insert(name.clone(), value.clone());
                                }
                            }
                            ProjectedField::Alias { name, path } => {
                                if let Some(value) = get_path(&doc, path) {
                                    projected.insert(name.clone(), value.clone());
                                }
                            }
                        }
                    }
                    projected
                })
                .collect(),
            PipelineStage::Sort { key, order } => {
                let mut sorted = documents;
                sort_documents(&mut sorted, key, *order);
                sorted
            }
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert_one(&self, collection: &str, document: Document) -> AppResult<ObjectId> {
        let id = document_id(&document).unwrap_or_else(ObjectId::new);
        let mut stored = Document::new();
        stored.insert(ID_FIELD, id);
        for (key, value) in document {
            if key != ID_FIELD {
                stored.insert(key, value);
            }
        }

        let unique_fields = self.unique_fields_for(collection);
        let mut docs = self.collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|doc| document_id(doc) == Some(id)) {
            return Err(AppError::DuplicateKey(format!(
                "{}._id already contains {}",
                collection, id
            )));
        }
        check_unique(collection, &unique_fields, &docs, &stored, None)?;
        docs.push(stored);
        Ok(id)
    }

    async fn update_one_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> AppResult<bool> {
        let unique_fields = self.unique_fields_for(collection);
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(index) = docs.iter().position(|doc| document_id(doc) == Some(id)) else {
            return Ok(false);
        };

        let mut updated = docs[index].clone();
        let mut changed = false;
        for (key, value) in fields {
            if key == ID_FIELD {
                continue;
            }
            if updated.get(&key) != Some(&value) {
                changed = true;
                updated.insert(key, value);
            }
        }
        if !changed {
            return Ok(false);
        }

        check_unique(collection, &unique_fields, &docs, &updated, Some(id))?;
        docs[index] = updated;
        Ok(true)
    }

    async fn delete_one_by_id(&self, collection: &str, id: ObjectId) -> AppResult<bool> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|doc| document_id(doc) == Some(id)) {
            Some(index) => {
                docs.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_one_by_id(&self, collection: &str, id: ObjectId) -> AppResult<Option<Document>> {
        Ok(self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| document_id(doc) == Some(id))
                .cloned()
        }))
    }

    async fn find_one(&self, collection: &str, filter: Filter) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)).cloned()))
    }

    async fn find_all(&self, collection: &str, sort_key: &str) -> AppResult<Vec<Document>> {
        let mut documents = self.snapshot(collection);
        sort_documents(&mut documents, sort_key, SortOrder::Ascending);
        Ok(documents)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Filter,
        sort_key: &str,
    ) -> AppResult<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .snapshot(collection)
            .into_iter()
            .filter(|doc| filter.matches(doc))
            .collect();
        sort_documents(&mut documents, sort_key, SortOrder::Ascending);
        Ok(documents)
    }

    async fn count_all(&self, collection: &str) -> AppResult<u64> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.len() as u64)
            .unwrap_or(0))
    }

    async fn run_pipeline(
        &self,
        collection: &str,
        stages: Vec<PipelineStage>,
    ) -> AppResult<Vec<Document>> {
        let mut documents = self.snapshot(collection);
        for stage in &stages {
            documents = self.apply_stage(documents, stage);
        }
        Ok(documents)
    }

    async fn ensure_indexes(&self, collection: &str, indexes: Vec<IndexSpec>) -> AppResult<()> {
        let existing = self.snapshot(collection);
        let mut unique = self
            .unique_fields
            .entry(collection.to_string())
            .or_default();

        for index in indexes.into_iter().filter(|index| index.unique) {
            if unique.contains(&index.field) {
                continue;
            }
            let mut seen: Vec<&Bson> = Vec::new();
            for doc in &existing {
                let value = doc.get(&index.field).unwrap_or(&Bson::Null);
                if seen.contains(&value) {
                    return Err(AppError::DuplicateKey(format!(
                        "cannot build unique index on {}.{}: duplicate {}",
                        collection, index.field, value
                    )));
                }
                seen.push(value);
            }
            unique.push(index.field);
        }
        Ok(())
    }
}
