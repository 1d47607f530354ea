use serde::{Deserialize, Serialize};
use showcase_backend_service::{
	config::BackendConfig, database::DatabaseConfig, redis::RedisConfig,
};

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
pub struct ShowcaseConfig {
	pub web: WebConfig,
	pub database: DatabaseConfig,
	pub redis: RedisConfig,
}

impl TryFrom<ShowcaseConfig> for BackendConfig {
	type Error = anyhow::Error;

	fn try_from(config: ShowcaseConfig) -> Result<Self, Self::Error> {
		Ok(BackendConfig {
			database: config.database,
			redis: config.redis,
		})
	}
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebConfig {
	/// Address for the web server to listen on.
	///
	/// Examples:
	/// - `unix://showcase.socket`
	/// - `tcp://0.0.0.0:8000`
	pub listen: String,
	/// Debug flag reported by the info demo.
	#[serde(default = "default_debug")]
	pub debug: String,
}

fn default_debug() -> String {
	"1".to_string()
}

/// Settings read from the environment when no configuration file is given.
#[derive(Debug, clap::Args)]
pub struct EnvArgs {
	#[arg(long, env = "LISTEN", default_value = "tcp://0.0.0.0:8000")]
	listen: String,
	#[arg(long, env = "DEBUG", default_value = "1")]
	debug: String,

	#[arg(long, env = "POSTGRES_HOST", default_value = "db")]
	postgres_host: String,
	#[arg(long, env = "POSTGRES_PORT", default_value_t = 5432)]
	postgres_port: u16,
	#[arg(long, env = "POSTGRES_DB", default_value = "mydb")]
	postgres_db: String,
	#[arg(long, env = "POSTGRES_USER", default_value = "postgres")]
	postgres_user: String,
	#[arg(
		long,
		env = "POSTGRES_PASSWORD",
		default_value = "postgres",
		hide_env_values = true
	)]
	postgres_password: String,
	/// Connection URL overriding the `POSTGRES_*` settings, e.g. `sqlite://data.db`.
	#[arg(long, env = "DATABASE_URL", hide_env_values = true)]
	database_url: Option<String>,
	#[arg(long, env = "POSTGRES_MAX_CONNECTIONS", default_value_t = 3)]
	postgres_max_connections: usize,

	#[arg(long, env = "REDIS_HOST", default_value = "redis")]
	redis_host: String,
	#[arg(long, env = "REDIS_PORT", default_value_t = 6379)]
	redis_port: u16,
	#[arg(long, env = "REDIS_MAX_CONNECTIONS", default_value_t = 3)]
	redis_max_connections: usize,
}

impl From<EnvArgs> for ShowcaseConfig {
	fn from(args: EnvArgs) -> Self {
		ShowcaseConfig {
			web: WebConfig {
				listen: args.listen,
				debug: args.debug,
			},
			database: DatabaseConfig {
				host: args.postgres_host,
				port: args.postgres_port,
				name: args.postgres_db,
				user: args.postgres_user,
				password: args.postgres_password,
				url: args.database_url,
				max_connections: args.postgres_max_connections,
			},
			redis: RedisConfig {
				host: args.redis_host,
				port: args.redis_port,
				max_connections: args.redis_max_connections,
			},
		}
	}
}
