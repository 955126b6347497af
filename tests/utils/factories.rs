/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use shelter_lib::modules::breed::Breed;
use shelter_lib::modules::dog::{AdoptionStatus, Dog, NewDog};

pub struct BreedFactory {
    name: String,
    description: Option<String>,
}

impl Default for BreedFactory {
    fn default() -> Self {
        Self {
            name: "Labrador".to_string(),
            description: Some("Friendly, outgoing and active companion".to_string()),
        }
    }
}

impl BreedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn build(self) -> Breed {
        Breed::new(self.name, self.description).expect("factory breed should be valid")
    }
}

pub struct DogFactory {
    fields: NewDog,
}

impl Default for DogFactory {
    fn default() -> Self {
        Self {
            fields: NewDog {
                age: Some(3),
                gender: Some("Male".to_string()),
                description: Some("Playful and good with kids".to_string()),
                ..NewDog::named("Buddy")
            },
        }
    }
}

impl DogFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.fields.name = name.to_string();
        self
    }

    pub fn breed(mut self, breed: &Breed) -> Self {
        self.fields.breed_id = breed.id;
        self
    }

    pub fn breed_id(mut self, breed_id: Option<ObjectId>) -> Self {
        self.fields.breed_id = breed_id;
        self
    }

    pub fn age(mut self, age: Option<i32>) -> Self {
        self.fields.age = age;
        self
    }

    pub fn gender(mut self, gender: Option<&str>) -> Self {
        self.fields.gender = gender.map(str::to_string);
        self
    }

    pub fn status(mut self, status: AdoptionStatus) -> Self {
        self.fields.status = Some(status);
        self
    }

    pub fn intake_date(mut self, intake_date: DateTime<Utc>) -> Self {
        self.fields.intake_date = Some(intake_date);
        self
    }

    pub fn build(self) -> Dog {
        Dog::new(self.fields).expect("factory dog should be valid")
    }
}

pub const BREEDS_CSV: &str = "\
Breed,Description
Labrador Retriever,Friendly and outgoing family dog
Beagle,Curious scent hound with a merry nature
Poodle,Proud and exceptionally smart companion
";

pub const DOGS_CSV: &str = "\
Name,Age,Gender,Description
Buddy,3,Male,Loves fetch and long walks
Luna,2,Female,Gentle and calm with other dogs
Max,5,Male,Protective but very affectionate
Daisy,1,Female,Energetic puppy who loves to play
Rocky,7,Male,Senior gentleman who enjoys naps
Bella,4,Female,Smart and quick to learn tricks
Charlie,6,Unknown,Shy at first then very loyal
Molly,2,Female,Enjoys swimming and the outdoors
Cooper,3,Male,Always ready for an adventure
Sadie,8,Female,Sweet senior looking for a sofa
Tucker,1,Male,Bouncy youngster still learning manners
";
