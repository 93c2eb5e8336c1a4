#![no_std]

mod events;
pub mod sft;
mod storage;
mod types;

pub use sft::{Sft, SftClient};
pub use types::*;
