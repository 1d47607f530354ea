// Redis connection manager.

use std::fmt::Debug;

use deadpool::managed::{Manager, Object, Pool, PoolError, RecycleError, RecycleResult};
use rand::Rng;
use redis::{Client, Pipeline, aio::MultiplexedConnection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for [`RedisService`].
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RedisConfig {
	/// Host name of the Redis server.
	pub host: String,
	#[serde(default = "default_port")]
	pub port: u16,
	/// The maximum number of connections managed by the pool.
	#[serde(default = "default_max_conns")]
	pub max_connections: usize,
}

fn default_port() -> u16 {
	6379
}

fn default_max_conns() -> usize {
	3
}

impl RedisConfig {
	/// URL to the Redis server, always selecting database 0.
	pub fn url(&self) -> String {
		format!("redis://{}:{}/0", self.host, self.port)
	}

	pub fn make_client(&self) -> Result<Client, redis::RedisError> {
		Client::open(self.url())
	}
}

/// Pooled Redis connections.
///
/// Like [`DatabaseService`](crate::database::DatabaseService), nothing is
/// connected until the first [`RedisService::get`].
pub struct RedisService {
	pool: Pool<RedisManager>,
}

impl RedisService {
	pub async fn new(config: &RedisConfig) -> RedisResult<Self> {
		let manager = RedisManager(config.to_owned());
		let pool = Pool::builder(manager)
			.max_size(config.max_connections)
			.build()?;

		Ok(Self { pool })
	}

	pub async fn get(&self) -> RedisResult<RedisConnRef> {
		Ok(self.pool.get().await?)
	}
}

impl Debug for RedisService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RedisService")
			.field("config", &self.pool.manager().0)
			.finish()
	}
}

#[derive(Debug, Error)]
pub enum RedisError {
	#[error(transparent)]
	RedisError(#[from] redis::RedisError),
	#[error("connection pool error: {0}")]
	PoolError(#[from] PoolError<redis::RedisError>),
	#[error("connection pool build error: {0}")]
	PoolBuildError(#[from] deadpool::managed::BuildError),
}

pub type RedisResult<T> = Result<T, RedisError>;

pub struct RedisManager(RedisConfig);

pub type RedisConnRef = Object<RedisManager>;

impl Manager for RedisManager {
	type Type = MultiplexedConnection;
	type Error = redis::RedisError;

	async fn create(&self) -> Result<Self::Type, Self::Error> {
		self.0
			.make_client()?
			.get_multiplexed_tokio_connection()
			.await
	}

	async fn recycle(
		&self,
		obj: &mut Self::Type,
		_metrics: &deadpool::managed::Metrics,
	) -> RecycleResult<Self::Error> {
		let ping = rand::rng().random::<u64>().to_string();
		let (n,) = Pipeline::with_capacity(2)
			.cmd("UNWATCH")
			.ignore()
			.cmd("PING")
			.arg(&ping)
			.query_async::<(String,)>(obj)
			.await?;
		if n == ping {
			Ok(())
		} else {
			Err(RecycleError::message("Invalid PING response"))
		}
	}
}
