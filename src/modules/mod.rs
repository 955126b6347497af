// Bounded contexts
pub mod api; // HTTP transport over the repositories
pub mod breed;
pub mod dog;
pub mod seeding; // CSV-driven initial data
