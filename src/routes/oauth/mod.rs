mod handler;
mod model;

pub use handler::{callback, install};
pub use model::DEFAULT_IDENTITY;
