//! Terminal UI: a single game view driven by the keyboard.

mod app;
mod game_view;

pub use app::App;
pub use game_view::player_color;
