#![no_std]

extern crate alloc;

pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use layout::*;
pub use types::*;
pub use view::*;

mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod input;
mod layout;
mod types;
mod view;
