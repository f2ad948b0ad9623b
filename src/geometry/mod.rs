pub mod radius;

pub use radius::RadiusAssignment;
