pub mod cmd;
pub mod config;
pub mod session;
pub mod util;
