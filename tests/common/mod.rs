#![allow(dead_code)]
use async_trait::async_trait;
use genius_lyrics::{ClientConfig, GeniusClientImpl};
use http_client::{Error, HttpClient, Request, Response};
use http_types::{StatusCode, Url};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TOKEN: &str = "test-token";
pub const API_BASE: &str = "https://api.genius.test/";
pub const WEB_BASE: &str = "https://genius.test/api/";

/// Load a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {path}: {e}"))
}

/// A request as the fixture client saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: Url,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

impl RecordedRequest {
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

#[derive(Debug, Clone)]
struct Route {
    path: String,
    query: Vec<(String, String)>,
    status: u16,
    body: String,
    content_type: &'static str,
    delay: Option<Duration>,
    fail: bool,
}

impl Route {
    fn matches(&self, url: &Url) -> bool {
        url.path() == self.path
            && self
                .query
                .iter()
                .all(|(key, value)| url.query_pairs().any(|(k, v)| k == *key && v == *value))
    }
}

/// In-process [`HttpClient`] that answers from canned routes and records
/// every request it receives. Unmatched requests get a 404.
#[derive(Debug, Clone, Default)]
pub struct FixtureClient {
    routes: Vec<Route>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, path: &str, query: &[(&str, &str)], status: u16, body: String) -> Self {
        let content_type = if path.ends_with("-lyrics") {
            "text/html; charset=utf-8"
        } else {
            "application/json; charset=utf-8"
        };
        self.routes.push(Route {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            status,
            body,
            content_type,
            delay: None,
            fail: false,
        });
        self
    }

    /// Answer GETs to `path` whose query contains every pair in `query`.
    pub fn route(self, path: &str, query: &[(&str, &str)], body: impl Into<String>) -> Self {
        self.push(path, query, 200, body.into())
    }

    pub fn route_status(
        self,
        path: &str,
        query: &[(&str, &str)],
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.push(path, query, status, body.into())
    }

    /// Answer `path` only after `delay`.
    pub fn route_delayed(self, path: &str, delay: Duration, body: impl Into<String>) -> Self {
        let mut client = self.push(path, &[], 200, body.into());
        if let Some(route) = client.routes.last_mut() {
            route.delay = Some(delay);
        }
        client
    }

    /// Fail requests to `path` at the transport level.
    pub fn route_unreachable(self, path: &str) -> Self {
        let mut client = self.push(path, &[], 0, String::new());
        if let Some(route) = client.routes.last_mut() {
            route.fail = true;
        }
        client
    }

    /// Shared handle to the request log; stays valid after the client is boxed.
    pub fn request_log(&self) -> Arc<Mutex<Vec<RecordedRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl HttpClient for FixtureClient {
    async fn send(&self, req: Request) -> Result<Response, Error> {
        let url = req.url().clone();
        let recorded = {
            let header = |name: &str| {
                req.header(name)
                    .map(|values| values.last().as_str().to_string())
            };
            RecordedRequest {
                url: url.clone(),
                authorization: header("Authorization"),
                accept: header("Accept"),
            }
        };
        drop(req);
        self.requests.lock().unwrap().push(recorded);

        let Some(route) = self.routes.iter().find(|route| route.matches(&url)) else {
            return Ok(Response::new(StatusCode::NotFound));
        };

        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        if route.fail {
            return Err(Error::from_str(
                StatusCode::BadGateway,
                "connection refused",
            ));
        }

        let mut response = Response::new(route.status);
        response.insert_header("Content-Type", route.content_type);
        response.set_body(route.body.clone());
        Ok(response)
    }
}

/// A client wired to `fixture` with the test token and base URLs.
pub fn client_for(fixture: FixtureClient) -> GeniusClientImpl {
    let config = ClientConfig::new(TOKEN).with_base_urls(API_BASE, WEB_BASE);
    GeniusClientImpl::with_config(Box::new(fixture), config)
}

pub fn recorded(log: &Arc<Mutex<Vec<RecordedRequest>>>) -> Vec<RecordedRequest> {
    log.lock().unwrap().clone()
}
