pub mod element;
pub mod schema;
pub mod registry;
pub mod loader;

pub use element::*;
pub use schema::*;
pub use registry::*;
pub use loader::*;
