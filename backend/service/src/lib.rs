//! Showcase backend services.

use std::sync::Arc;

use config::BackendConfig;
use counter::CounterService;
use database::{DatabaseError, DatabaseService};
use item::{ItemError, ItemStore};
use thiserror::Error;
use user::{UserError, UserService};

use crate::redis::{RedisError, RedisService};

pub mod config;
pub mod counter;
pub mod database;
pub mod item;
pub mod redis;
pub mod user;

/// Service container for Showcase demos.
///
/// All services are wrapped with [`Arc`]. Constructing the container
/// never connects to PostgreSQL or Redis; each demo only touches the
/// services it serves.
#[derive(Debug, Clone)]
pub struct BackendServices {
	pub config: Arc<BackendConfig>,
	pub redis: Arc<RedisService>,
	pub database: Arc<DatabaseService>,
	pub users: Arc<UserService>,
	pub counter: Arc<CounterService>,
	pub items: Arc<ItemStore>,
}

impl BackendServices {
	#[tracing::instrument(skip(config))]
	pub async fn new(config: BackendConfig) -> Result<Self> {
		let config = Arc::new(config);
		let redis = Arc::new(RedisService::new(&config.redis).await?);
		let database = Arc::new(DatabaseService::new(&config.database)?);
		let users = Arc::new(UserService::new(database.clone()));
		let counter = Arc::new(CounterService::new(redis.clone()));
		let items = Arc::new(ItemStore::new());

		Ok(Self {
			config,
			redis,
			database,
			users,
			counter,
			items,
		})
	}
}

/// Backend errors.
#[derive(Debug, Error)]
pub enum BackendError {
	#[error(transparent)]
	DatabaseError(#[from] DatabaseError),
	#[error(transparent)]
	RedisError(#[from] RedisError),
	#[error(transparent)]
	UserError(#[from] UserError),
	#[error(transparent)]
	ItemError(#[from] ItemError),
}

/// A specialized [`Result`] for backend errors.
pub type Result<T, E = BackendError> = std::result::Result<T, E>;

impl From<diesel::result::Error> for BackendError {
	fn from(value: diesel::result::Error) -> Self {
		Self::DatabaseError(DatabaseError::QueryError(value))
	}
}
