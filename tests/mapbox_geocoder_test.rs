//! Integration tests for the Mapbox geocoder against a mock HTTP server.

use std::time::Duration;

use groupie::domain::models::GeocodingConfig;
use groupie::domain::ports::Geocoder;
use groupie::infrastructure::geocoding::{build_geocoder, MapboxGeocoder};
use groupie::GeocodeError;
use mockito::{Matcher, Server, ServerGuard};

fn geocoder_for(server: &ServerGuard) -> MapboxGeocoder {
    MapboxGeocoder::new(
        &format!("{}/geocoding", server.url()),
        "pk.test".to_string(),
        Duration::from_secs(5),
    )
    .expect("Failed to create geocoder")
}

#[tokio::test]
async fn test_geocode_returns_first_feature() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/geocoding/london-uk.json")
        .match_query(Matcher::UrlEncoded("access_token".into(), "pk.test".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "features": [
                    { "center": [-0.1276, 51.5072] },
                    { "center": [10.0, 20.0] }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let location = geocoder_for(&server)
        .geocode("london-uk")
        .await
        .expect("request succeeds")
        .expect("one feature found");

    mock.assert_async().await;
    assert_eq!(location.address, "london-uk");
    assert!((location.lon - -0.1276).abs() < f64::EPSILON);
    assert!((location.lat - 51.5072).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_geocode_without_features_is_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/geocoding/atlantis.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"features": []}"#)
        .create_async()
        .await;

    let result = geocoder_for(&server).geocode("atlantis").await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_geocode_error_status_hides_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/geocoding/paris-france.json")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let error = geocoder_for(&server)
        .geocode("paris-france")
        .await
        .expect_err("401 must fail");

    let GeocodeError::Request(message) = error else {
        panic!("Expected request error");
    };
    assert!(!message.contains("pk.test"), "token leaked: {message}");
}

#[tokio::test]
async fn test_geocode_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/geocoding/oslo-norway.json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let error = geocoder_for(&server).geocode("oslo-norway").await.unwrap_err();
    assert!(matches!(error, GeocodeError::Decode(_)));
}

#[tokio::test]
async fn test_build_geocoder_without_token_geocodes_nothing() {
    let geocoder = build_geocoder(&GeocodingConfig::default()).unwrap();
    assert!(matches!(geocoder.geocode("london-uk").await, Ok(None)));

    let blank = GeocodingConfig {
        access_token: Some(String::new()),
        ..GeocodingConfig::default()
    };
    let geocoder = build_geocoder(&blank).unwrap();
    assert!(matches!(geocoder.geocode("london-uk").await, Ok(None)));
}
