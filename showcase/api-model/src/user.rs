use serde::{Deserialize, Serialize};
use showcase_common_model::user::UserInfo;

use crate::{ConnectionStatus, Endpoints, ReplyStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListReply {
	pub status: ReplyStatus,
	pub count: usize,
	pub users: Vec<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreatedReply {
	pub status: ReplyStatus,
	pub message: String,
	pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresInfo {
	pub host: String,
	pub database: String,
	pub user: String,
	pub connection_status: ConnectionStatus,
	pub version: Option<String>,
	pub user_count: i64,
}

/// `/api/` reply of the users demo.
///
/// `status` is always success; database failures land in `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersApiInfo {
	pub status: ReplyStatus,
	pub postgresql: PostgresInfo,
	pub endpoints: Endpoints,
	pub error: Option<String>,
}
