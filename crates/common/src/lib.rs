pub mod env;
pub mod types;
pub mod upstream;
pub mod utils;
