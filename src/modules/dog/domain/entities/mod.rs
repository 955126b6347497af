pub mod dog;
pub mod enriched_dog;

pub use dog::{Dog, NewDog, GENDERS};
pub use enriched_dog::EnrichedDog;
