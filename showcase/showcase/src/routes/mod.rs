use anyhow::Result;
use axum::{Json, Router, http::StatusCode, routing::get};
use showcase_api_model::HealthReply;

use crate::ShowcaseServices;

mod counter;
pub mod error;
mod info;
mod items;
mod page;
mod users;

/// The demo application to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::Subcommand)]
pub enum Demo {
	/// Landing page and API information, without a backing store.
	Info,
	/// REST API over an in-memory item list.
	Items,
	/// Users stored in PostgreSQL.
	Users,
	/// A counter stored in Redis.
	Counter,
}

pub fn make_router(demo: Demo, services: ShowcaseServices) -> Result<Router> {
	let router = match demo {
		Demo::Info => info::router(),
		Demo::Items => items::router(),
		Demo::Users => users::router(),
		Demo::Counter => counter::router(),
	}
	.route("/health", get(health))
	.fallback(not_found)
	.with_state(services);

	Ok(router)
}

async fn health() -> Json<HealthReply> {
	Json(HealthReply {
		status: "healthy".to_string(),
	})
}

async fn not_found() -> error::ApiError {
	error::ApiError::CustomRef(StatusCode::NOT_FOUND, "not found")
}
