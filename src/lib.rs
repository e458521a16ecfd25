pub mod browse;
pub mod errors;
pub mod load;
pub mod output;
pub mod schema;
pub mod stats;
pub mod vocab;
