// src/demos/mod.rs
//! Stand-alone textbook exercises. Nothing here touches the color pipeline.
mod binary;
mod fibonacci;
mod search;

pub use binary::{ BinaryDraw, random_binary };
pub use fibonacci::fibonacci_sum;
pub use search::{ SearchDemo, parse_target, recursive_search };

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("cannot build a demo list of length zero")]
    EmptyList,
    #[error("sum of the first {0} Fibonacci numbers overflows u128")]
    Overflow(u32),
    #[error("binary draws support 1..=32 digits, got {0}")]
    Digits(u32),
    #[error("expected a whole number, got {input:?}")]
    Prompt { input: String },
}
