//! Blocking HTTP front end for the dashboard.
//!
//! Every request carries its selection in the query string and is answered
//! from a fresh aggregation over the shared, read-only dataset.

use std::path::{Path, PathBuf};

use tiny_http::{Header, Request, Response, Server};

use crate::assets::{find_image, load_image, resolve_images};
use crate::dataset::Dataset;
use crate::error::AppError;
use crate::model::selection::Selection;
use crate::pipeline::SelectionAggregator;
use crate::pipeline::stage4_dashboard::build_dashboard;
use crate::report::html::{RenderTarget, render_html};
use crate::report::json::render_summary_json;

pub const ASSET_PREFIX: &str = "/assets/";

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub bind: String,
    pub port: u16,
    pub assets_dir: PathBuf,
}

pub fn start_server(dataset: &Dataset, config: &ServeConfig) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.bind, config.port);
    let server = Server::http(&addr).map_err(|e| AppError::Bind {
        addr: addr.clone(),
        reason: e.to_string(),
    })?;

    crate::info!("dashboard running at http://{addr}");
    crate::info!("press Ctrl+C to stop");

    let aggregator = SelectionAggregator::new(dataset);
    for request in server.incoming_requests() {
        let url = request.url().to_string();
        let reply = route(&aggregator, &config.assets_dir, &url);
        crate::debug!(url = %url, status = reply.status, "request");
        respond(request, reply);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Reply {
            status: 200,
            content_type,
            body: body.into(),
        }
    }

    fn not_found() -> Self {
        Reply {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            body: b"Not found".to_vec(),
        }
    }

    fn server_error(message: String) -> Self {
        Reply {
            status: 500,
            content_type: "text/plain; charset=utf-8",
            body: message.into_bytes(),
        }
    }
}

/// Maps a request URL to a reply. Pure apart from reading image files.
pub fn route(aggregator: &SelectionAggregator<'_>, assets_dir: &Path, url: &str) -> Reply {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    };

    match path {
        "/" | "/index.html" => {
            let selection = selection_from_query(aggregator.dataset(), query);
            let images = resolve_images(assets_dir, ASSET_PREFIX);
            let dashboard = build_dashboard(aggregator, &selection, images);
            Reply::ok(
                "text/html; charset=utf-8",
                render_html(&dashboard, RenderTarget::Served),
            )
        }
        "/summary.json" => {
            let selection = selection_from_query(aggregator.dataset(), query);
            let images = resolve_images(assets_dir, ASSET_PREFIX);
            let dashboard = build_dashboard(aggregator, &selection, images);
            match render_summary_json(&dashboard) {
                Ok(json) => Reply::ok("application/json", json),
                Err(e) => {
                    crate::error!("failed to serialize summary: {e}");
                    Reply::server_error(format!("failed to serialize summary: {e}"))
                }
            }
        }
        path if path.starts_with(ASSET_PREFIX) => {
            let name = &path[ASSET_PREFIX.len()..];
            let Some(spec) = find_image(name) else {
                return Reply::not_found();
            };
            match load_image(assets_dir, spec.file_name) {
                Ok(asset) => Reply::ok(asset.mime_type, asset.bytes),
                Err(e) => {
                    crate::warn!("{e}");
                    Reply::not_found()
                }
            }
        }
        _ => Reply::not_found(),
    }
}

fn respond(request: Request, reply: Reply) {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes("Content-Type", reply.content_type) {
        response = response.with_header(header);
    }
    if let Err(e) = request.respond(response) {
        crate::warn!("failed to send response: {e}");
    }
}

/// Selection encoded in a form query string.
///
/// Repeated `species` keys list the chosen labels. A query with neither
/// `species` nor `submitted` means the page was opened fresh, so every
/// species is selected; a submitted form with no boxes ticked selects none.
pub fn selection_from_query(dataset: &Dataset, query: &str) -> Selection {
    let mut species = Vec::new();
    let mut submitted = false;
    for (key, value) in parse_query(query) {
        match key.as_str() {
            "species" => species.push(value),
            "submitted" => submitted = true,
            _ => {}
        }
    }
    if species.is_empty() && !submitted {
        return Selection::all(dataset);
    }
    Selection::from_labels(species)
}

pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space, `%XX` a
/// byte. Malformed escapes are kept literally; invalid UTF-8 is replaced.
pub fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/serve.rs"]
mod tests;
