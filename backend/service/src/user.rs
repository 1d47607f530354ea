use std::sync::Arc;

use diesel::{
	ExpressionMethods, QueryDsl,
	result::{DatabaseErrorKind, Error as DieselError},
	insert_into,
};
use showcase_backend_model::{
	db::schema::users::dsl,
	user::{SqlUser, USER_COLUMNS},
};
use showcase_common_model::user::UserInfo;
use thiserror::Error;
use tracing::info;

use crate::{BackendError, Result, database::DatabaseService};

#[derive(Debug)]
pub struct UserService {
	db: Arc<DatabaseService>,
}

impl UserService {
	pub fn new(db: Arc<DatabaseService>) -> Self {
		Self { db }
	}

	/// Lists all users ordered by ID.
	pub async fn list(&self) -> Result<Vec<UserInfo>> {
		let mut conn = self.db.get().await?;
		let users: Vec<SqlUser> = conn
			.load(dsl::users.select(USER_COLUMNS).order(dsl::id.asc()))
			.await?;
		Ok(users.into_iter().map(SqlUser::into_common).collect())
	}

	pub async fn count(&self) -> Result<i64> {
		let mut conn = self.db.get().await?;
		Ok(conn.get_result(dsl::users.count()).await?)
	}

	/// Version string of the database server.
	pub async fn server_version(&self) -> Result<String> {
		let mut conn = self.db.get().await?;
		Ok(conn.server_version().await?)
	}

	/// Inserts a user. Both fields must be non-empty.
	pub async fn create(&self, name: &str, email: &str) -> Result<UserInfo> {
		if name.is_empty() || email.is_empty() {
			return Err(UserError::MissingField.into());
		}

		let mut conn = self.db.get().await?;
		let user: SqlUser = conn
			.get_result(
				insert_into(dsl::users)
					.values((dsl::name.eq(name), dsl::email.eq(email)))
					.returning(USER_COLUMNS),
			)
			.await
			.map_err(|error| match error {
				DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
					BackendError::from(UserError::EmailTaken(email.to_owned()))
				}
				error => BackendError::from(error),
			})?;
		info!(id = user.id, name, "created user");

		Ok(user.into_common())
	}
}

#[derive(Debug, Error)]
pub enum UserError {
	#[error("Name and email are required")]
	MissingField,
	#[error("email {0} is already registered")]
	EmailTaken(String),
}
