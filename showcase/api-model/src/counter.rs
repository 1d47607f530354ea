use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ConnectionStatus, Endpoints, ReplyStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterReply {
	pub status: ReplyStatus,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedisInfo {
	pub host: String,
	pub port: u16,
	pub connection_status: ConnectionStatus,
	/// Parsed `INFO` report, present when connected.
	pub info: Option<Map<String, Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// `/api/` reply of the counter demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterApiInfo {
	pub status: ReplyStatus,
	pub redis: RedisInfo,
	pub endpoints: Endpoints,
}
