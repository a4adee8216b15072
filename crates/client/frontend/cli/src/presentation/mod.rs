pub mod terminal;
pub mod ui;
pub mod widgets;
