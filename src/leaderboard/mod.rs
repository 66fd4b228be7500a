pub mod formatter;
pub mod palette;

pub use formatter::{LeaderboardFormatter, color_for};
pub use palette::Palette;
