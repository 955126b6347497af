pub mod service;

pub use service::SeedService;
