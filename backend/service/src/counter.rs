use std::sync::Arc;

use redis::AsyncCommands;
use serde_json::{Map, Number, Value};
use tracing::info;

use crate::redis::{RedisError, RedisResult, RedisService};

/// Key of the demo counter.
pub const COUNTER_KEY: &str = "counter";

/// An integer counter stored in Redis.
///
/// Every operation is a single Redis command, without any concurrency
/// control beyond the atomicity Redis gives each command.
#[derive(Debug)]
pub struct CounterService {
	redis: Arc<RedisService>,
}

impl CounterService {
	pub fn new(redis: Arc<RedisService>) -> Self {
		Self { redis }
	}

	/// Increments the counter and returns the new value.
	pub async fn increment(&self) -> RedisResult<i64> {
		let value: i64 = self
			.redis
			.get()
			.await?
			.incr(COUNTER_KEY, 1)
			.await
			.map_err(RedisError::RedisError)?;
		info!(value, "counter incremented");
		Ok(value)
	}

	/// Reads the counter. A missing key reads as 0.
	pub async fn get(&self) -> RedisResult<i64> {
		let value: Option<i64> = self
			.redis
			.get()
			.await?
			.get(COUNTER_KEY)
			.await
			.map_err(RedisError::RedisError)?;
		Ok(value.unwrap_or(0))
	}

	pub async fn set(&self, value: i64) -> RedisResult<()> {
		let _: () = self
			.redis
			.get()
			.await?
			.set(COUNTER_KEY, value)
			.await
			.map_err(RedisError::RedisError)?;
		info!(value, "counter set");
		Ok(())
	}

	pub async fn reset(&self) -> RedisResult<()> {
		self.set(0).await
	}

	pub async fn ping(&self) -> RedisResult<()> {
		let mut conn = self.redis.get().await?;
		let _: String = redis::cmd("PING").query_async(&mut *conn).await?;
		Ok(())
	}

	/// Fetches the `INFO` report of the server.
	pub async fn server_info(&self) -> RedisResult<Map<String, Value>> {
		let mut conn = self.redis.get().await?;
		let info: String = redis::cmd("INFO").query_async(&mut *conn).await?;
		Ok(parse_info(&info))
	}
}

/// Parses an `INFO` reply into a JSON object.
///
/// Integers and floats become numbers. Values containing `key=value` pairs
/// (e.g. the keyspace section) become nested objects, where a bare key
/// reads as `true`. Other comma separated values become arrays.
pub fn parse_info(info: &str) -> Map<String, Value> {
	let mut output = Map::new();
	for line in info.lines() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		let Some((key, value)) = line.split_once(':') else {
			continue;
		};
		output.insert(key.to_string(), parse_info_value(value));
	}
	output
}

fn parse_info_value(value: &str) -> Value {
	if value.contains('=') {
		let mut nested = Map::new();
		for pair in value.split(',').filter(|pair| !pair.is_empty()) {
			match pair.rsplit_once('=') {
				Some((key, value)) => nested.insert(key.to_string(), parse_info_scalar(value)),
				None => nested.insert(pair.to_string(), Value::Bool(true)),
			};
		}
		Value::Object(nested)
	} else if value.contains(',') {
		value
			.split(',')
			.filter(|item| !item.is_empty())
			.map(parse_info_scalar)
			.collect()
	} else {
		parse_info_scalar(value)
	}
}

fn parse_info_scalar(value: &str) -> Value {
	if let Ok(number) = value.parse::<i64>() {
		return Value::from(number);
	}
	if let Some(number) = value.parse::<f64>().ok().and_then(Number::from_f64) {
		return Value::Number(number);
	}
	Value::String(value.to_string())
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::test::{live_redis, test_env};

	#[test]
	fn test_parse_info() {
		let info = "# Server\r\nredis_version:7.2.4\r\nuptime_in_seconds:42\r\n\
			mem_fragmentation_ratio:1.25\r\nmodules:search,json,\r\n\r\n# Errorstats\r\n\
			errorstat_ERR:count=1\r\n\r\n# Keyspace\r\ndb0:keys=1,expires=0,avg_ttl=0,subexpiry\r\n";
		assert_eq!(
			Value::Object(parse_info(info)),
			json!({
				"redis_version": "7.2.4",
				"uptime_in_seconds": 42,
				"mem_fragmentation_ratio": 1.25,
				"modules": ["search", "json"],
				"errorstat_ERR": { "count": 1 },
				"db0": { "keys": 1, "expires": 0, "avg_ttl": 0, "subexpiry": true },
			})
		);
	}

	#[tokio::test]
	async fn test_unreachable_server() {
		let env = test_env().await;
		let error = env.counter.get().await.unwrap_err();
		assert!(!error.to_string().is_empty());
	}

	#[tokio::test]
	async fn test_counter_commands() {
		let Some(config) = live_redis() else {
			return;
		};
		let redis = RedisService::new(&config).await.unwrap();
		let counter = CounterService::new(Arc::new(redis));

		counter.reset().await.unwrap();
		assert_eq!(counter.increment().await.unwrap(), 1);
		assert_eq!(counter.increment().await.unwrap(), 2);
		assert_eq!(counter.get().await.unwrap(), 2);
		counter.set(40).await.unwrap();
		assert_eq!(counter.get().await.unwrap(), 40);
		counter.ping().await.unwrap();
		assert!(counter.server_info().await.unwrap().contains_key("redis_version"));
	}
}
