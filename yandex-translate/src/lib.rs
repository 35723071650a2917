#![doc = include_str!("../README.md")]

#[cfg(feature = "translate")]
pub mod translate;
