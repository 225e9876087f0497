mod history;
mod player;

pub use history::HistoryEntry;
pub use player::Player;
