pub mod models;

pub use models::{ColorTag, DisplayEntry, PlayerRecord};
