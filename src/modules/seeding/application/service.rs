use chrono::{Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::breed::{Breed, BreedRepository};
use crate::modules::dog::{AdoptionStatus, Dog, DogRepository, NewDog};
use crate::modules::seeding::domain::records::{
    non_blank, BreedRecord, DogRecord, SeedOutcome, SeedReport,
};
use crate::shared::config::{BREEDS_COLLECTION, DOGS_COLLECTION};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::{log_error, log_info};

/// Dogs handed to each breed before the rest are spread randomly
const MIN_DOGS_PER_BREED: usize = 3;
const MAX_INTAKE_DAYS_AGO: i64 = 365;

/// Populates empty collections from CSV content through the repositories.
///
/// Rows are saved one at a time; a failing row is logged and skipped, earlier
/// rows stay persisted.
pub struct SeedService<R: Rng> {
    breeds: Arc<dyn BreedRepository>,
    dogs: Arc<dyn DogRepository>,
    rng: R,
}

impl<R: Rng + Send> SeedService<R> {
    pub fn new(breeds: Arc<dyn BreedRepository>, dogs: Arc<dyn DogRepository>, rng: R) -> Self {
        Self { breeds, dogs, rng }
    }

    /// Columns `Breed,Description`. Skipped when any breed exists.
    pub async fn seed_breeds(&mut self, csv_content: &str) -> AppResult<SeedOutcome> {
        let existing = self.breeds.count().await?;
        if existing > 0 {
            log_info!(
                "Database already contains {} breeds. Skipping seed.",
                existing
            );
            return Ok(SeedOutcome::skipped());
        }

        let records = parse_records::<BreedRecord>(csv_content)?;
        let mut outcome = SeedOutcome::default();

        for record in records {
            match self.create_breed(&record).await {
                Ok(()) => outcome.added += 1,
                Err(e) => {
                    log_error!("Error adding breed {}: {}", record.name, e);
                    outcome.failed += 1;
                }
            }
        }

        LogContext::seed_progress(BREEDS_COLLECTION, outcome.added, outcome.failed);
        Ok(outcome)
    }

    async fn create_breed(&self, record: &BreedRecord) -> AppResult<()> {
        let mut breed = Breed::new(record.name.as_str(), non_blank(&record.description))?;
        self.breeds.save(&mut breed).await
    }

    /// Columns `Name,Age,Gender,Description`. Skipped when any dog exists;
    /// needs breeds to assign dogs to.
    pub async fn seed_dogs(&mut self, csv_content: &str) -> AppResult<SeedOutcome> {
        let existing = self.dogs.count().await?;
        if existing > 0 {
            log_info!("Database already contains {} dogs. Skipping seed.", existing);
            return Ok(SeedOutcome::skipped());
        }

        let breeds = self.breeds.find_all().await?;
        if breeds.is_empty() {
            log_error!("No breeds found in database. Please seed breeds first.");
            return Ok(SeedOutcome::default());
        }

        let mut pending = parse_records::<DogRecord>(csv_content)?;
        let mut outcome = SeedOutcome::default();
        let mut per_breed: HashMap<usize, usize> = HashMap::new();

        // every breed first gets a few dogs picked at random
        for (breed_index, breed) in breeds.iter().enumerate() {
            for _ in 0..MIN_DOGS_PER_BREED {
                if pending.is_empty() {
                    break;
                }
                let pick = self.rng.gen_range(0..pending.len());
                let record = pending.remove(pick);
                self.record_dog(&record, breed, breed_index, &mut outcome, &mut per_breed)
                    .await;
            }
        }

        for record in pending {
            let breed_index = self.rng.gen_range(0..breeds.len());
            self.record_dog(
                &record,
                &breeds[breed_index],
                breed_index,
                &mut outcome,
                &mut per_breed,
            )
            .await;
        }

        LogContext::seed_progress(DOGS_COLLECTION, outcome.added, outcome.failed);
        for (breed_index, breed) in breeds.iter().enumerate() {
            log_info!(
                "Breed '{}': {} dogs",
                breed.name,
                per_breed.get(&breed_index).copied().unwrap_or(0)
            );
        }
        Ok(outcome)
    }

    async fn record_dog(
        &mut self,
        record: &DogRecord,
        breed: &Breed,
        breed_index: usize,
        outcome: &mut SeedOutcome,
        per_breed: &mut HashMap<usize, usize>,
    ) {
        match self.create_dog(record, breed).await {
            Ok(()) => {
                outcome.added += 1;
                *per_breed.entry(breed_index).or_insert(0) += 1;
            }
            Err(e) => {
                log_error!("Error creating dog {}: {}", record.name, e);
                outcome.failed += 1;
            }
        }
    }

    async fn create_dog(&mut self, record: &DogRecord, breed: &Breed) -> AppResult<()> {
        let age = record.age.trim().parse::<i32>()?;
        let status = AdoptionStatus::ALL[self.rng.gen_range(0..AdoptionStatus::ALL.len())];
        let days_ago = self.rng.gen_range(1..=MAX_INTAKE_DAYS_AGO);

        let mut dog = Dog::new(NewDog {
            name: record.name.clone(),
            breed_id: breed.id,
            age: Some(age),
            gender: non_blank(&record.gender),
            description: non_blank(&record.description),
            status: Some(status),
            intake_date: Some(Utc::now() - Duration::days(days_ago)),
            adoption_date: None,
        })?;
        self.dogs.save(&mut dog).await
    }

    /// Breeds first, then dogs
    pub async fn seed_database(
        &mut self,
        breeds_csv: &str,
        dogs_csv: &str,
    ) -> AppResult<SeedReport> {
        log_info!("Starting database seeding...");
        let breeds = self.seed_breeds(breeds_csv).await?;
        let dogs = self.seed_dogs(dogs_csv).await?;
        log_info!("Database seeding completed successfully!");
        Ok(SeedReport { breeds, dogs })
    }
}

fn parse_records<T: serde::de::DeserializeOwned>(csv_content: &str) -> AppResult<Vec<T>> {
    let mut reader = csv::Reader::from_reader(csv_content.as_bytes());
    let records = reader.deserialize().collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(records)
}
