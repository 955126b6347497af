pub mod adoption_status;

pub use adoption_status::AdoptionStatus;
