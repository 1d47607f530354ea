use serde::{Deserialize, Serialize};

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserInfo {
	pub id: i32,
	pub name: String,
	pub email: String,
	/// Creation time as `YYYY-MM-DD HH:MM:SS`, if the row carries one.
	pub created_at: Option<String>,
}
