use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Render a [`Template`] into an HTML [`Response`]. A rendering failure is
/// logged and answered with a plain 500.
pub fn into_response<T: ?Sized + Template>(tmpl: &T) -> Response {
    match tmpl.render() {
        Ok(body) => (
            [(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static(T::MIME_TYPE),
            )],
            body,
        )
            .into_response(),
        Err(err) => {
            error!("Template rendering failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
