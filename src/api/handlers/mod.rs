use crate::command::Dispatcher;

pub mod hello;
pub mod players;

pub struct AppState {
    pub dispatcher: Dispatcher,
}
