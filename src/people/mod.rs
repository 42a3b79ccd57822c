//! The roster of people who pay for and share expenses.

mod create;
mod delete;
mod domain;
mod store;

pub use create::create_person_endpoint;
pub use delete::remove_person_endpoint;
pub use domain::{AddOutcome, PersonName};
pub use store::PeopleStore;
