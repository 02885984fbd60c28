#[macro_use]
extern crate diesel;

pub mod models;
pub mod schema;
pub mod store;
pub mod views;

pub use crate::models::{Event, EventSignup, EventWithSignups, NewEvent, NewSignup};
pub use crate::store::Error;
