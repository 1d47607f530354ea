use diesel::{
	QueryResult, RunQueryDsl, SqliteConnection,
	connection::{AnsiTransactionManager, SimpleConnection, TransactionManager},
	dsl::sql,
	migration::MigrationVersion,
	query_builder::AsQuery,
	query_dsl::methods::LoadQuery,
	sql_types::Text,
};
use diesel_async::{
	AsyncPgConnection, RunQueryDsl as AsyncRunQueryDsl, SimpleAsyncConnection,
	async_connection_wrapper::AsyncConnectionWrapper,
	methods::LoadQuery as AsyncLoadQuery,
	pooled_connection::PoolableConnection,
};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use futures::future::{BoxFuture, FutureExt, ready};

pub mod schema;

/// A SQL connection to one of the supported backends.
///
/// PostgreSQL is the production backend. SQLite is kept for running
/// tests without a database server.
pub enum BoxedSqlConn {
	Pg(AsyncPgConnection),
	Sqlite(SqliteConnection),
}

impl BoxedSqlConn {
	/// Executes `SELECT 1` to test if the connection is ready for use.
	pub fn ping(&mut self) -> BoxFuture<Result<(), diesel::result::Error>> {
		match self {
			BoxedSqlConn::Pg(conn) => conn.batch_execute("SELECT 1").boxed(),
			BoxedSqlConn::Sqlite(conn) => ready(conn.batch_execute("SELECT 1")).boxed(),
		}
	}

	pub fn is_broken(&mut self) -> bool {
		match self {
			BoxedSqlConn::Pg(conn) => conn.is_broken(),
			BoxedSqlConn::Sqlite(conn) => {
				AnsiTransactionManager::is_broken_transaction_manager(conn)
			}
		}
	}

	/// Returns the human readable version string of the database server.
	pub fn server_version(&mut self) -> BoxFuture<'_, QueryResult<String>> {
		match self {
			BoxedSqlConn::Pg(conn) => {
				AsyncRunQueryDsl::get_result(diesel::select(sql::<Text>("version()")), conn)
					.boxed()
			}
			BoxedSqlConn::Sqlite(conn) => ready(RunQueryDsl::get_result(
				diesel::select(sql::<Text>("'SQLite ' || sqlite_version()")),
				conn,
			))
			.boxed(),
		}
	}
}

impl<'query> BoxedSqlConn {
	/// Executes the given query, returning a [`Vec`] with the returned rows.
	///
	/// Dispatches [RunQueryDsl::load].
	pub fn load<'conn, Q, U>(&'conn mut self, query: Q) -> BoxFuture<'query, QueryResult<Vec<U>>>
	where
		Q: Send,
		Q: AsyncLoadQuery<'query, AsyncPgConnection, U> + 'query,
		Q: LoadQuery<'query, SqliteConnection, U>,
		U: Send + 'query,
		'conn: 'query,
	{
		match self {
			BoxedSqlConn::Pg(conn) => AsyncRunQueryDsl::load(query, conn).boxed(),
			BoxedSqlConn::Sqlite(conn) => ready(RunQueryDsl::load(query, conn)).boxed(),
		}
	}

	/// Runs the command, and returns the affected row.
	///
	/// `Err(NotFound)` will be returned if the query affected 0 rows. You can
	/// call `.optional()` on the result of this if the command was optional to
	/// get back a `Result<Option<U>>`
	///
	/// Dispatches [RunQueryDsl::get_result].
	pub fn get_result<Q, U>(&'query mut self, query: Q) -> BoxFuture<'query, QueryResult<U>>
	where
		Q: AsQuery + Send,
		Q: AsyncLoadQuery<'query, AsyncPgConnection, U> + 'query,
		Q: LoadQuery<'query, SqliteConnection, U>,
		U: Send + 'query,
	{
		match self {
			BoxedSqlConn::Pg(conn) => AsyncRunQueryDsl::get_result(query, conn).boxed(),
			BoxedSqlConn::Sqlite(conn) => ready(RunQueryDsl::get_result(query, conn)).boxed(),
		}
	}
}

const POSTGRESQL_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/postgresql");
const SQLITE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/sqlite");

/// Run all pending migrations.
///
/// This is not async, so a spawn-blocking wrapper is required.
///
/// Dispatches [MigrationHarness::run_pending_migrations].
pub fn run_migrations(
	conn: BoxedSqlConn,
) -> diesel::migration::Result<Vec<MigrationVersion<'static>>> {
	match conn {
		BoxedSqlConn::Pg(conn) => {
			let mut async_wrapper: AsyncConnectionWrapper<AsyncPgConnection> =
				AsyncConnectionWrapper::from(conn);
			async_wrapper
				.run_pending_migrations(POSTGRESQL_MIGRATIONS)
				.map(|versions| {
					versions
						.into_iter()
						.map(|version| version.as_owned())
						.collect()
				})
		}
		BoxedSqlConn::Sqlite(mut conn) => run_migrations_sqlite(&mut conn),
	}
}

/// Run migrations for SQLite.
///
/// Borrows the connection, so an in-memory database keeps its schema
/// as long as the pooled connection lives.
pub fn run_migrations_sqlite(
	conn: &mut SqliteConnection,
) -> diesel::migration::Result<Vec<MigrationVersion<'static>>> {
	conn.run_pending_migrations(SQLITE_MIGRATIONS)
		.map(|versions| {
			versions
				.into_iter()
				.map(|version| version.as_owned())
				.collect()
		})
}
