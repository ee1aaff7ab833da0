pub mod errors;
pub mod routes;
pub mod startup;
pub mod templates;

pub use startup::run;
