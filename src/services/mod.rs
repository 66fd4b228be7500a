pub mod board;
pub mod server;

pub use board::BoardService;
pub use server::{build_state, ServerService};
