use serde::{Deserialize, Serialize};

use crate::{Endpoints, ReplyStatus};

/// `/api/` reply of the demos without a live backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkInfo {
	pub status: ReplyStatus,
	pub framework: String,
	pub database: String,
	pub database_host: String,
	/// Value of the `DEBUG` setting; only the info demo reports it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub debug: Option<String>,
	pub message: String,
	pub endpoints: Endpoints,
}
