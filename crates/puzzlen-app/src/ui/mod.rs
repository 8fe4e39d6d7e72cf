pub mod board;
pub mod board_theme;
pub mod input;
