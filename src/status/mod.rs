// Progress aggregation and view selection

pub mod model;
pub mod selection;
pub mod summary;

pub use model::*;
pub use selection::*;
pub use summary::*;
