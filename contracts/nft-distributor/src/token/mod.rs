mod enumeration;
mod metadata;
mod mint;
mod ownership;
mod transfer;
pub mod types;

pub use types::{Token, TokenMetadata};
