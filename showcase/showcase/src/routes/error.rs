use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use showcase_api_model::ApiErrorReply;
use showcase_backend_service::{BackendError, user::UserError};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	BackendError(BackendError),

	#[error("{1}")]
	CustomRef(StatusCode, &'static str),
	#[error("{1}")]
	CustomString(StatusCode, String),
}

impl ApiError {
	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::CustomRef(status, _) | ApiError::CustomString(status, _) => *status,
			ApiError::BackendError(BackendError::UserError(UserError::MissingField)) => {
				StatusCode::BAD_REQUEST
			}
			ApiError::BackendError(BackendError::UserError(UserError::EmailTaken(_))) => {
				StatusCode::CONFLICT
			}
			ApiError::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			error!(error = %self, "request failed");
		}
		(status, Json(ApiErrorReply::new(self.to_string()))).into_response()
	}
}

impl<T: Into<BackendError>> From<T> for ApiError {
	fn from(value: T) -> Self {
		Self::BackendError(value.into())
	}
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) trait IntoCustomApiError {
	fn into_custom_api_error(self, status: StatusCode) -> ApiError;
}

impl IntoCustomApiError for &'static str {
	fn into_custom_api_error(self, status: StatusCode) -> ApiError {
		ApiError::CustomRef(status, self)
	}
}
impl IntoCustomApiError for String {
	fn into_custom_api_error(self, status: StatusCode) -> ApiError {
		ApiError::CustomString(status, self)
	}
}

pub(crate) trait OptionExt<T> {
	fn or_api_error<M: IntoCustomApiError>(
		self,
		status: StatusCode,
		message: M,
	) -> Result<T, ApiError>;
}

impl<T> OptionExt<T> for Option<T> {
	fn or_api_error<M: IntoCustomApiError>(
		self,
		status: StatusCode,
		message: M,
	) -> Result<T, ApiError> {
		match self {
			Some(val) => Ok(val),
			None => Err(message.into_custom_api_error(status)),
		}
	}
}

/// Turns an extractor rejection into a JSON error with the same status.
pub(crate) fn rejection(status: StatusCode, message: String) -> ApiError {
	message.into_custom_api_error(status)
}
