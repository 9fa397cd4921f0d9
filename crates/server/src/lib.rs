pub mod errors;
pub mod openapi;
pub mod representation;
pub mod routes;
pub mod startup;

pub use startup::run;
