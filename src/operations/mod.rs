pub mod fillet;
pub mod query;
