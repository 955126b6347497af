pub mod entity;
pub mod projection;

pub use entity::Entity;
pub use projection::Projection;
