use axum::http::{header::ALLOW, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Return `404 Not Found`
    #[error("request path not found")]
    NotFound,

    /// Return `405 Method Not Allowed`
    ///
    /// Every route in this service only answers `GET` (and `HEAD`, which axum derives from it).
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn title(&self) -> String {
        match self {
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
        }
        .to_string()
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub title: String,
    pub status: u16,
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let header: HeaderMap = match status {
            StatusCode::METHOD_NOT_ALLOWED => [(ALLOW, HeaderValue::from_static("GET,HEAD"))]
                .into_iter()
                .collect(),
            _ => HeaderMap::new(),
        };

        (status, header, Json(ErrorBody::from(self))).into_response()
    }
}

impl From<Error> for ErrorBody {
    fn from(error: Error) -> Self {
        Self {
            title: error.title(),
            message: error.to_string(),
            status: error.status_code().as_u16(),
        }
    }
}
