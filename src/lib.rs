#![doc = include_str!("../README.md")]
#![allow(clippy::doc_markdown)]

pub mod core;
pub mod prelude;
pub mod quantity;
