pub mod errors;
pub mod models;

pub use errors::ImportError;
pub use models::{ Attribute, FieldAssignment, FieldSet, Mapping };
