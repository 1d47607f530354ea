//! Landing page demo without a backing store.

use axum::{Json, Router, extract::State, response::Html, routing::get};
use showcase_api_model::{ReplyStatus, endpoints, info::FrameworkInfo};

use super::page::{INFO_THEME, Page, now};
use crate::ShowcaseServices;

pub fn router() -> Router<ShowcaseServices> {
	Router::new()
		.route("/", get(home))
		.route("/api", get(api_info))
		.route("/api/", get(api_info))
}

async fn home(State(services): State<ShowcaseServices>) -> Html<String> {
	let database = &services.config.database;
	Page {
		title: "Showcase Info Demo",
		message: "Welcome to Rust running in Docker!",
		theme: Some(INFO_THEME),
		facts: vec![
			("Framework", "axum".to_string()),
			("Database", database.name.clone()),
			("Host", database.host.clone()),
			("Current Time", now()),
		],
		links: &[("View API Info", "/api/")],
		..Default::default()
	}
	.render()
}

async fn api_info(State(services): State<ShowcaseServices>) -> Json<FrameworkInfo> {
	let config = &services.config;
	Json(FrameworkInfo {
		status: ReplyStatus::Success,
		framework: "axum".to_string(),
		database: config.database.name.clone(),
		database_host: config.database.host.clone(),
		debug: Some(config.web.debug.clone()),
		message: "Showcase API is working!".to_string(),
		endpoints: endpoints([("home", "/"), ("api_info", "/api/"), ("health", "/health")]),
	})
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;

	use crate::routes::{
		Demo,
		test::{send, send_json, test_router},
	};

	#[tokio::test]
	async fn test_home() {
		let router = test_router(Demo::Info).await;
		let (status, body) = send(&router, "GET", "/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Showcase Info Demo"));
		assert!(body.contains("<strong>Database:</strong> mydb<br>"));
		assert!(body.contains("<strong>Host:</strong> db<br>"));
	}

	#[tokio::test]
	async fn test_api_info() {
		let router = test_router(Demo::Info).await;
		for uri in ["/api/", "/api"] {
			let (status, body) = send_json(&router, "GET", uri, None).await;
			assert_eq!(status, StatusCode::OK);
			assert_eq!(body["status"], "success");
			assert_eq!(body["framework"], "axum");
			assert_eq!(body["database"], "mydb");
			assert_eq!(body["database_host"], "db");
			assert_eq!(body["debug"], "1");
			assert_eq!(body["endpoints"]["api_info"], "/api/");
		}
	}
}
