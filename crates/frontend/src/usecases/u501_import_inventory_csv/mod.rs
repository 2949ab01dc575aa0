pub mod reader;
pub mod session;
pub mod ui;
