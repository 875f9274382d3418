pub mod action;
pub mod clipboard;
pub mod controller;
pub mod notify;
pub mod panel;
pub mod preference;
pub mod storage;
pub mod style;
pub mod view;

#[cfg(test)]
mod test_util;

pub use crate::controller::{Seams, TokenController};
pub use crate::preference::Preference;
