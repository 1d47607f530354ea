//! Data shapes shared between the Showcase backend and its HTTP APIs.

pub mod item;
pub mod user;
