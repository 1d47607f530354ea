//! JSON replies of the Showcase demo APIs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod counter;
pub mod info;
pub mod item;
pub mod user;

/// Outcome tag carried by most replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
	Success,
	Error,
}

/// Reachability of a backing store, as reported by `/api/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
	Connected,
	Error,
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorReply {
	pub status: ReplyStatus,
	pub message: String,
}

impl ApiErrorReply {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			status: ReplyStatus::Error,
			message: message.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReply {
	pub status: String,
}

/// Route name to path (or method and path) listing.
pub type Endpoints = BTreeMap<String, String>;

pub fn endpoints<const N: usize>(entries: [(&str, &str); N]) -> Endpoints {
	entries
		.into_iter()
		.map(|(name, path)| (name.to_string(), path.to_string()))
		.collect()
}
