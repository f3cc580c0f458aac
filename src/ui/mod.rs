//! Terminal UI: one screen hosting a tic-tac-toe and a connect four session,
//! with a history panel for jumping back to earlier moves.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
pub use game_view::status_text;
