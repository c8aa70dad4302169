pub mod models;
pub mod ids;
pub mod catalog;
pub mod errors;

pub use models::*;
pub use ids::*;
pub use catalog::*;
pub use errors::*;
