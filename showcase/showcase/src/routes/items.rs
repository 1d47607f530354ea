//! REST API over the in-memory item list.

use axum::{
	Json, Router,
	extract::{
		Path, State,
		rejection::{JsonRejection, PathRejection},
	},
	http::StatusCode,
	response::Html,
	routing::get,
};
use showcase_api_model::{ReplyStatus, endpoints, info::FrameworkInfo, item::ItemDeletedReply};
use showcase_common_model::item::{ItemInfo, NewItem};

use super::{
	error::{ApiResult, OptionExt, rejection},
	page::{ITEMS_THEME, Page, now},
};
use crate::ShowcaseServices;

pub fn router() -> Router<ShowcaseServices> {
	Router::new()
		.route("/", get(home))
		.route("/api", get(api_info))
		.route("/api/", get(api_info))
		.route("/items", get(list_items).post(create_item))
		.route("/items/", get(list_items).post(create_item))
		.route("/items/{id}", get(get_item).delete(delete_item))
}

async fn home(State(services): State<ShowcaseServices>) -> Html<String> {
	let database = &services.config.database;
	Page {
		title: "Showcase Items Demo",
		message: "Welcome to the item list API running in Docker!",
		theme: Some(ITEMS_THEME),
		facts: vec![
			("Framework", "axum".to_string()),
			("Database", database.name.clone()),
			("Host", database.host.clone()),
			("Current Time", now()),
		],
		endpoints: &[
			"GET /api/ - API Information",
			"GET /items/ - List all items",
			"POST /items/ - Create new item",
			"GET /items/{id} - Get item by ID",
			"DELETE /items/{id} - Delete item by ID",
		],
		links: &[("API Info", "/api/"), ("View Items", "/items/")],
		..Default::default()
	}
	.render()
}

async fn api_info(State(services): State<ShowcaseServices>) -> Json<FrameworkInfo> {
	let database = &services.config.database;
	Json(FrameworkInfo {
		status: ReplyStatus::Success,
		framework: "axum".to_string(),
		database: database.name.clone(),
		database_host: database.host.clone(),
		debug: None,
		message: "Showcase item API is working perfectly!".to_string(),
		endpoints: endpoints([
			("home", "/"),
			("api_info", "/api/"),
			("items", "/items/"),
			("health", "/health"),
		]),
	})
}

async fn list_items(State(services): State<ShowcaseServices>) -> Json<Vec<ItemInfo>> {
	Json(services.backend.items.list().await)
}

async fn create_item(
	State(services): State<ShowcaseServices>,
	item: Result<Json<NewItem>, JsonRejection>,
) -> ApiResult<Json<ItemInfo>> {
	let Json(item) = item.map_err(|error| rejection(error.status(), error.body_text()))?;
	let item = services.backend.items.create(item).await?;
	Ok(Json(item))
}

async fn get_item(
	State(services): State<ShowcaseServices>,
	id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ItemInfo>> {
	let Path(id) = id.map_err(|error| rejection(error.status(), error.body_text()))?;
	let item = services
		.backend
		.items
		.get(id)
		.await
		.or_api_error(StatusCode::NOT_FOUND, "Item not found")?;
	Ok(Json(item))
}

async fn delete_item(
	State(services): State<ShowcaseServices>,
	id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<ItemDeletedReply>> {
	let Path(id) = id.map_err(|error| rejection(error.status(), error.body_text()))?;
	let item = services
		.backend
		.items
		.delete(id)
		.await
		.or_api_error(StatusCode::NOT_FOUND, "Item not found")?;
	Ok(Json(ItemDeletedReply {
		status: ReplyStatus::Success,
		message: "Item deleted".to_string(),
		item,
	}))
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;
	use serde_json::Value;

	use crate::routes::{
		Demo,
		test::{send, send_json, test_router},
	};

	#[tokio::test]
	async fn test_create_then_get() {
		let router = test_router(Demo::Items).await;
		let (status, created) = send_json(&router, "POST", "/items/", Some(r#"{"name":"a"}"#)).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(created["id"], 1);

		let (status, item) = send_json(&router, "GET", "/items/1", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(item["id"], 1);
		assert_eq!(item["name"], "a");
		assert_eq!(item["description"], Value::Null);
		assert_eq!(item["created_at"], created["created_at"]);
	}

	#[tokio::test]
	async fn test_list_and_renumber() {
		let router = test_router(Demo::Items).await;
		for body in [
			r#"{"name":"a","description":"first"}"#,
			r#"{"name":"b"}"#,
			r#"{"name":"c"}"#,
		] {
			let (status, _) = send(&router, "POST", "/items/", Some(body)).await;
			assert_eq!(status, StatusCode::OK);
		}

		let (status, deleted) = send_json(&router, "DELETE", "/items/1", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(deleted["message"], "Item deleted");
		assert_eq!(deleted["item"]["name"], "a");
		assert_eq!(deleted["item"]["description"], "first");

		let (status, items) = send_json(&router, "GET", "/items/", None).await;
		assert_eq!(status, StatusCode::OK);
		let items = items.as_array().unwrap();
		assert_eq!(items.len(), 2);
		assert_eq!((&items[0]["id"], &items[0]["name"]), (&Value::from(1), &Value::from("b")));
		assert_eq!((&items[1]["id"], &items[1]["name"]), (&Value::from(2), &Value::from("c")));
	}

	#[tokio::test]
	async fn test_missing_item() {
		let router = test_router(Demo::Items).await;
		let (status, body) = send_json(&router, "DELETE", "/items/1", None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["status"], "error");
		assert_eq!(body["message"], "Item not found");

		let (status, _) = send_json(&router, "GET", "/items/0", None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_out_of_range_ids() {
		let router = test_router(Demo::Items).await;
		let (status, _) = send(&router, "POST", "/items/", Some(r#"{"name":"a"}"#)).await;
		assert_eq!(status, StatusCode::OK);

		for uri in ["/items/-1", "/items/2", "/items/4294967297"] {
			for method in ["GET", "DELETE"] {
				let (status, body) = send_json(&router, method, uri, None).await;
				assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
				assert_eq!(body["message"], "Item not found");
			}
		}
		let (status, items) = send_json(&router, "GET", "/items/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(items.as_array().map(Vec::len), Some(1));
	}

	#[tokio::test]
	async fn test_bad_requests() {
		let router = test_router(Demo::Items).await;
		let (status, body) = send_json(&router, "GET", "/items/abc", None).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["status"], "error");

		let (status, body) =
			send_json(&router, "POST", "/items/", Some(r#"{"description":"no name"}"#)).await;
		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
		assert_eq!(body["status"], "error");

		let (status, _) = send_json(&router, "POST", "/items/", Some("not json")).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn test_home_and_api_info() {
		let router = test_router(Demo::Items).await;
		let (status, body) = send(&router, "GET", "/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("POST /items/ - Create new item"));

		let (status, body) = send_json(&router, "GET", "/api/", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["endpoints"]["items"], "/items/");
		assert!(body.get("debug").is_none());
	}
}
