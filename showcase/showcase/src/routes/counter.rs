//! A counter stored in Redis.

use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::Html,
	routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use showcase_api_model::{
	ConnectionStatus, ReplyStatus,
	counter::{CounterApiInfo, CounterReply, RedisInfo},
	endpoints,
};
use showcase_backend_service::{counter::CounterService, redis::RedisResult};
use tracing::warn;

use super::{
	error::{ApiError, ApiResult},
	page::{COUNTER_THEME, Page},
};
use crate::ShowcaseServices;

pub fn router() -> Router<ShowcaseServices> {
	Router::new()
		.route("/", get(home))
		.route("/api", get(api_info))
		.route("/api/", get(api_info))
		.route("/api/increment", get(increment))
		.route("/api/counter", get(get_counter))
		.route("/api/reset", get(reset))
		.route("/api/set", post(set_value))
}

async fn home(State(services): State<ShowcaseServices>) -> Html<String> {
	let (status, value) = match services.backend.counter.get().await {
		Ok(value) => ("Connected".to_string(), value),
		Err(error) => {
			warn!(%error, "failed to read counter");
			(format!("Error: {error}"), 0)
		}
	};
	let redis = &services.config.redis;
	Page {
		title: "Showcase Counter Demo",
		message: "Welcome to Redis running in Docker!",
		theme: Some(COUNTER_THEME),
		facts: vec![
			("Host", redis.host.clone()),
			("Port", redis.port.to_string()),
			("Status", status),
		],
		highlight: Some(value.to_string()),
		links: &[
			("Increment Counter", "/api/increment"),
			("View Counter", "/api/counter"),
			("Reset Counter", "/api/reset"),
			("View API Info", "/api/"),
		],
		..Default::default()
	}
	.render()
}

/// Pings the server, then fetches its `INFO` report.
async fn probe(counter: &CounterService) -> RedisResult<Map<String, Value>> {
	counter.ping().await?;
	counter.server_info().await
}

async fn api_info(State(services): State<ShowcaseServices>) -> Json<CounterApiInfo> {
	let (connection_status, info, error) = match probe(&services.backend.counter).await {
		Ok(info) => (ConnectionStatus::Connected, Some(info), None),
		Err(error) => {
			warn!(%error, "failed to probe redis");
			(ConnectionStatus::Error, None, Some(error.to_string()))
		}
	};
	let redis = &services.config.redis;
	Json(CounterApiInfo {
		status: ReplyStatus::Success,
		redis: RedisInfo {
			host: redis.host.clone(),
			port: redis.port,
			connection_status,
			info,
			error,
		},
		endpoints: endpoints([
			("home", "/"),
			("api_info", "/api/"),
			("increment", "/api/increment"),
			("get_counter", "/api/counter"),
			("reset", "/api/reset"),
			("set_value", "POST /api/set?value=<number>"),
			("health", "/health"),
		]),
	})
}

fn reply(message: Option<&str>, value: i64) -> Json<CounterReply> {
	Json(CounterReply {
		status: ReplyStatus::Success,
		message: message.map(str::to_string),
		value,
	})
}

async fn increment(State(services): State<ShowcaseServices>) -> ApiResult<Json<CounterReply>> {
	let value = services.backend.counter.increment().await?;
	Ok(reply(Some("Counter incremented"), value))
}

async fn get_counter(State(services): State<ShowcaseServices>) -> ApiResult<Json<CounterReply>> {
	let value = services.backend.counter.get().await?;
	Ok(reply(None, value))
}

async fn reset(State(services): State<ShowcaseServices>) -> ApiResult<Json<CounterReply>> {
	services.backend.counter.reset().await?;
	Ok(reply(Some("Counter reset"), 0))
}

#[derive(Debug, Deserialize)]
struct SetParams {
	value: Option<String>,
}

async fn set_value(
	State(services): State<ShowcaseServices>,
	Query(params): Query<SetParams>,
) -> ApiResult<Json<CounterReply>> {
	let value = match params.value.as_deref() {
		None => 0,
		Some(value) => value.trim().parse::<i64>().map_err(|_| {
			ApiError::CustomString(
				StatusCode::BAD_REQUEST,
				format!("invalid counter value: {value}"),
			)
		})?,
	};
	services.backend.counter.set(value).await?;
	Ok(reply(Some("Counter set"), value))
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;
	use serde_json::Value;

	use crate::routes::{
		Demo,
		test::{live_redis_router, send, send_json, test_router},
	};

	#[tokio::test]
	async fn test_counter_commands() {
		let Some(router) = live_redis_router(Demo::Counter).await else {
			return;
		};

		let (status, body) = send_json(&router, "GET", "/api/reset", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["message"], "Counter reset");
		assert_eq!(body["value"], 0);

		for expected in [1, 2] {
			let (status, body) = send_json(&router, "GET", "/api/increment", None).await;
			assert_eq!(status, StatusCode::OK);
			assert_eq!(body["status"], "success");
			assert_eq!(body["message"], "Counter incremented");
			assert_eq!(body["value"], expected);
		}

		let (status, body) = send_json(&router, "GET", "/api/counter", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["value"], 2);
		assert_eq!(body.get("message"), None);

		let (status, body) = send_json(&router, "POST", "/api/set?value=7", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["message"], "Counter set");
		assert_eq!(body["value"], 7);
		let (_, body) = send_json(&router, "GET", "/api/counter", None).await;
		assert_eq!(body["value"], 7);

		let (status, body) = send_json(&router, "POST", "/api/set", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["value"], 0);
		let (_, body) = send_json(&router, "GET", "/api/counter", None).await;
		assert_eq!(body["value"], 0);

		let (status, body) = send_json(&router, "GET", "/api/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["redis"]["connection_status"], "connected");
		assert!(body["redis"]["info"]["redis_version"].is_string());

		let (status, body) = send(&router, "GET", "/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("<strong>Status:</strong> Connected<br>"));
	}

	#[tokio::test]
	async fn test_unreachable_redis() {
		let router = test_router(Demo::Counter).await;
		for uri in ["/api/increment", "/api/counter", "/api/reset"] {
			let (status, body) = send_json(&router, "GET", uri, None).await;
			assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
			assert_eq!(body["status"], "error");
			assert!(body["message"].is_string());
		}

		let (status, body) = send_json(&router, "POST", "/api/set?value=5", None).await;
		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body["status"], "error");
	}

	#[tokio::test]
	async fn test_api_info_unreachable() {
		let router = test_router(Demo::Counter).await;
		let (status, body) = send_json(&router, "GET", "/api/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["status"], "success");
		assert_eq!(body["redis"]["host"], "127.0.0.1");
		assert_eq!(body["redis"]["port"], 1);
		assert_eq!(body["redis"]["connection_status"], "error");
		assert_eq!(body["redis"]["info"], Value::Null);
		assert!(body["redis"]["error"].is_string());
		assert_eq!(body["endpoints"]["increment"], "/api/increment");
	}

	#[tokio::test]
	async fn test_set_rejects_non_integer() {
		let router = test_router(Demo::Counter).await;
		let (status, body) = send_json(&router, "POST", "/api/set?value=abc", None).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["message"], "invalid counter value: abc");

		let (status, _) = send(&router, "GET", "/api/set?value=1", None).await;
		assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
	}

	#[tokio::test]
	async fn test_home_unreachable() {
		let router = test_router(Demo::Counter).await;
		let (status, body) = send(&router, "GET", "/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("<strong>Status:</strong> Error: "));
		assert!(body.contains(r#"<div class="highlight">0</div>"#));
	}
}
