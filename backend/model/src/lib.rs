//! Database models for Showcase backend.

pub mod db;
pub mod user;
