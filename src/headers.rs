use http_client::Request;

/// User agent sent with every request
const USER_AGENT: &str = concat!("genius-lyrics/", env!("CARGO_PKG_VERSION"));

/// Add headers shared by every request
pub fn add_common_headers(request: &mut Request) {
    let _ = request.insert_header("User-Agent", USER_AGENT);
    let _ = request.insert_header("Accept-Language", "en-US,en;q=0.9");
}

/// Add headers for JSON API requests, with the bearer token when one is given
pub fn add_json_headers(request: &mut Request, bearer_token: Option<&str>) {
    add_common_headers(request);
    let _ = request.insert_header("Accept", "application/json");

    if let Some(token) = bearer_token {
        let _ = request.insert_header("Authorization", format!("Bearer {token}"));
    }
}

/// Add headers for rendered page requests
pub fn add_page_headers(request: &mut Request) {
    add_common_headers(request);
    let _ = request.insert_header(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    );
}
