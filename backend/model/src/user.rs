use diesel::Queryable;
use showcase_common_model::user::UserInfo;
use time::{PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::db::schema::users;

/// Columns selected for a [`SqlUser`], in field order.
pub type UserColumns = (users::id, users::name, users::email, users::created_at);

pub const USER_COLUMNS: UserColumns = (users::id, users::name, users::email, users::created_at);

const CREATED_AT_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A row of the `users` table, loaded with [`USER_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct SqlUser {
	pub id: i32,
	pub name: String,
	pub email: String,
	pub created_at: Option<PrimitiveDateTime>,
}

impl SqlUser {
	pub fn into_common(self) -> UserInfo {
		UserInfo {
			id: self.id,
			name: self.name,
			email: self.email,
			created_at: self
				.created_at
				.and_then(|time| time.format(CREATED_AT_FORMAT).ok()),
		}
	}
}
