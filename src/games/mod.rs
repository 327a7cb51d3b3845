//! Playable games built on the core types and rules.

pub mod puzzle;
