use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::dog::domain::entities::enriched_dog::EnrichedDog;
use crate::modules::dog::domain::repositories::dog_query_repository::DogQueryRepository;
use crate::shared::config::{BREEDS_COLLECTION, DOGS_COLLECTION};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::document_store::{
    parse_object_id, DocumentStore, Filter, PipelineStage, ProjectedField, SortOrder,
};
use crate::shared::utils::logger::TimedOperation;

const BREED_INFO: &str = "breed_info";

/// Fields every enriched row carries besides `_id`
const KEPT_FIELDS: [&str; 7] = [
    "name",
    "age",
    "gender",
    "description",
    "status",
    "intake_date",
    "adoption_date",
];

/// Left join `dogs.breed_id -> breeds._id` and project the enriched shape.
///
/// Shared by the bulk and single-record queries so both return identical rows.
pub fn breed_join_stages() -> Vec<PipelineStage> {
    let mut projected: Vec<ProjectedField> = KEPT_FIELDS
        .iter()
        .map(|field| ProjectedField::Keep(field.to_string()))
        .collect();
    projected.insert(
        1,
        ProjectedField::Alias {
            name: "breed".to_string(),
            path: format!("{}.name", BREED_INFO),
        },
    );

    vec![
        PipelineStage::Lookup {
            from: BREEDS_COLLECTION.to_string(),
            local_field: "breed_id".to_string(),
            foreign_field: "_id".to_string(),
            as_field: BREED_INFO.to_string(),
            first_match_only: true,
        },
        PipelineStage::Unwind {
            path: BREED_INFO.to_string(),
            preserve_null_and_empty_arrays: true,
        },
        PipelineStage::Project(projected),
    ]
}

pub struct DogQueryRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

impl DogQueryRepositoryImpl {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DogQueryRepository for DogQueryRepositoryImpl {
    async fn find_all_with_breed(&self) -> AppResult<Vec<EnrichedDog>> {
        let timer = TimedOperation::new("find_all_with_breed");

        let mut stages = breed_join_stages();
        stages.push(PipelineStage::Sort {
            key: "name".to_string(),
            order: SortOrder::Ascending,
        });

        let rows = self.store.run_pipeline(DOGS_COLLECTION, stages).await?;
        let dogs = rows
            .into_iter()
            .map(EnrichedDog::from_row)
            .collect::<AppResult<Vec<_>>>()?;

        timer.finish_with_info(&format!("{} dogs", dogs.len()));
        Ok(dogs)
    }

    async fn find_by_id_with_breed(&self, dog_id: &str) -> AppResult<Option<EnrichedDog>> {
        let Some(object_id) = parse_object_id(dog_id) else {
            return Ok(None);
        };
        let timer = TimedOperation::new("find_by_id_with_breed");

        let mut stages = vec![PipelineStage::Match(Filter::eq("_id", object_id))];
        stages.extend(breed_join_stages());

        let row = self
            .store
            .run_pipeline(DOGS_COLLECTION, stages)
            .await?
            .into_iter()
            .next();

        timer.finish();
        if row.is_none() {
            log_debug!("No dog with id {}", object_id);
        }
        row.map(EnrichedDog::from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infrastructure::document_store::MockDocumentStore;
    use bson::{doc, oid::ObjectId, Bson};

    #[test]
    fn test_join_stages_shape() {
        let stages = breed_join_stages();
        assert_eq!(stages.len(), 3);
        assert!(matches!(
            &stages[0],
            PipelineStage::Lookup { from, first_match_only: true, .. } if from == "breeds"
        ));
        assert!(matches!(
            &stages[1],
            PipelineStage::Unwind { preserve_null_and_empty_arrays: true, .. }
        ));

        let PipelineStage::Project(fields) = &stages[2] else {
            panic!("expected projection, got {:?}", stages[2]);
        };
        assert_eq!(fields.len(), 8);
        assert!(fields.contains(&ProjectedField::Alias {
            name: "breed".into(),
            path: "breed_info.name".into(),
        }));
    }

    #[tokio::test]
    async fn test_bulk_query_sorts_by_name() {
        let mut store = MockDocumentStore::new();
        store
            .expect_run_pipeline()
            .withf(|collection, stages| {
                collection == "dogs"
                    && matches!(
                        stages.last(),
                        Some(PipelineStage::Sort { key, order: SortOrder::Ascending }) if key == "name"
                    )
            })
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    doc! { "_id": ObjectId::new(), "name": "Buddy", "breed": "Labrador", "status": "Available" },
                    doc! { "_id": ObjectId::new(), "name": "Rex", "status": "Pending" },
                ])
            });

        let repository = DogQueryRepositoryImpl::new(Arc::new(store));
        let dogs = repository.find_all_with_breed().await.unwrap();
        assert_eq!(dogs.len(), 2);
        assert_eq!(dogs[0].breed.as_deref(), Some("Labrador"));
        assert!(dogs[1].breed.is_none());
    }

    #[tokio::test]
    async fn test_single_query_matches_id_first() {
        let id = ObjectId::new();
        let mut store = MockDocumentStore::new();
        store
            .expect_run_pipeline()
            .withf(move |_, stages| {
                stages.first() == Some(&PipelineStage::Match(Filter::eq("_id", Bson::ObjectId(id))))
                    && stages.len() == 4
            })
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let repository = DogQueryRepositoryImpl::new(Arc::new(store));
        assert!(repository
            .find_by_id_with_breed(&id.to_hex())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_single_query_with_malformed_id_skips_store() {
        let store = MockDocumentStore::new();
        let repository = DogQueryRepositoryImpl::new(Arc::new(store));

        assert!(repository
            .find_by_id_with_breed("definitely-not-an-id")
            .await
            .unwrap()
            .is_none());
    }
}
