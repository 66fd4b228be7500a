pub mod dispatcher;
pub mod request;
pub mod tokenizer;

pub use dispatcher::Dispatcher;
pub use request::{LeagueCommand, SlashCommandForm};
pub use tokenizer::extract_username;
