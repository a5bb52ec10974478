mod handler;
mod model;

pub use handler::update_contact;
