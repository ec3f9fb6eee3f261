//! Serves the frontend bundle compiled into the binary.
//!
//! Known files are returned with a guessed content type. Any other path falls
//! back to `index.html` so the single-page app can load; only a missing bundle
//! produces a 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

const INDEX_FILE: &str = "index.html";

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

fn respond(bundle: &Dir<'_>, request_path: &str) -> HttpResponse {
    let file_path = asset_path(request_path);

    match bundle.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match bundle.get_file(INDEX_FILE) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// Maps a request path to a path inside the bundle.
fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() { INDEX_FILE } else { path }
}
