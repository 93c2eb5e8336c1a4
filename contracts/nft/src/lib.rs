#![no_std]

mod events;
pub mod nft;
mod storage;
mod types;

pub use nft::{Nft, NftClient};
pub use types::*;
