mod common;

use common::{client_for, FixtureClient, API_BASE, WEB_BASE};
use genius_lyrics::{ClientConfig, GeniusClientImpl, DEFAULT_API_URL, DEFAULT_WEB_URL};
use std::time::Duration;

#[test]
fn default_client_points_at_genius() {
    let client = GeniusClientImpl::new(Box::new(FixtureClient::new()), "abc");

    assert_eq!(client.api_url(), DEFAULT_API_URL);
    assert_eq!(client.web_url(), DEFAULT_WEB_URL);
    assert_eq!(client.timeout(), Duration::from_secs(3));
    assert_eq!(client.config().credential, "abc");
}

#[test]
fn custom_config_is_kept() {
    let client = client_for(FixtureClient::new());

    assert_eq!(client.api_url(), API_BASE);
    assert_eq!(client.web_url(), WEB_BASE);
}

#[test]
fn timeout_is_adjustable() {
    let config = ClientConfig::new("abc").with_timeout(Duration::from_secs(10));
    let mut client = GeniusClientImpl::with_config(Box::new(FixtureClient::new()), config);
    assert_eq!(client.timeout(), Duration::from_secs(10));

    client.set_timeout(Duration::from_millis(250));
    assert_eq!(client.timeout(), Duration::from_millis(250));
    assert_eq!(client.config().timeout, Duration::from_millis(250));
}
