//! Game-independent machinery: sides, winning lines, the history of board
//! snapshots, and the session that ties a set of [`Rules`] to that history.

mod history;
mod line;
mod player;
mod rules;
mod session;

pub use history::{move_label, History, HistoryEntry};
pub use line::WinningLine;
pub use player::Side;
pub use rules::Rules;
pub use session::{GameSession, Status};
