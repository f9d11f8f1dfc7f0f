//! Network locator resolution against a local HTTP server

use anysource_resolver::{EmbeddedResources, Location, ResolveError, Resolver, Strategy};
use axum::{http::StatusCode, routing::get, Router};
use std::io::Read;
use tokio::net::TcpListener;

const NETWORK_DATA: &str = "netXYZ";

/// Start a test HTTP server, returning its base URL
async fn start_test_server() -> String {
    let app = Router::new()
        .route("/test_data.txt", get(|| async { NETWORK_DATA }))
        .route(
            "/broken.txt",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn resolver() -> Resolver {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .try_init();

    Resolver::new(EmbeddedResources::new().with("test_data.txt", "resourceXYZ"))
}

#[tokio::test]
async fn test_http_locator() {
    let base_url = start_test_server().await;
    let path = format!("{base_url}/test_data.txt");

    let resolution = resolver().classify(&path).await.unwrap();
    assert_eq!(resolution.strategy, Strategy::NetworkLocator);

    let mut contents = String::new();
    resolver()
        .open(&path)
        .await
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, NETWORK_DATA);
}

#[tokio::test]
async fn test_http_locator_without_slashes_uses_catch_all() {
    let base_url = start_test_server().await;
    let path = format!("{}/test_data.txt", base_url.replacen("://", ":", 1));

    let resolution = resolver().classify(&path).await.unwrap();
    assert_eq!(resolution.strategy, Strategy::CatchAll);

    let contents = resolver().reader(&path).await.unwrap().read_all().unwrap();
    assert_eq!(contents, NETWORK_DATA);
}

#[tokio::test]
async fn test_catch_all_missing_resource_names_original_path() {
    let base_url = start_test_server().await;
    let path = format!("{}/missing.txt", base_url.replacen("://", ":", 1));

    match resolver().open(&path).await.err().unwrap() {
        ResolveError::NotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_catch_all_server_error_names_original_path() {
    let base_url = start_test_server().await;
    let path = format!("{}/broken.txt", base_url.replacen("://", ":", 1));

    let err = resolver().open(&path).await.err().unwrap();
    match &err {
        ResolveError::Unreadable { source, .. } => {
            assert!(matches!(**source, ResolveError::HttpStatus { .. }))
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.path(), Some(path.as_str()));
}

#[tokio::test]
async fn test_http_reader_is_idempotent() {
    let base_url = start_test_server().await;
    let path = format!("{base_url}/test_data.txt");

    let first = resolver().reader(&path).await.unwrap().read_all().unwrap();
    let second = resolver().reader(&path).await.unwrap().read_all().unwrap();
    assert_eq!(first, NETWORK_DATA);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_http_missing_resource() {
    let base_url = start_test_server().await;
    let path = format!("{base_url}/missing.txt");

    let err = resolver().open(&path).await.err().unwrap();
    match err {
        ResolveError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_server_error() {
    let base_url = start_test_server().await;
    let err = resolver()
        .open(&format!("{base_url}/broken.txt"))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, ResolveError::HttpStatus { .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_locate_does_not_connect() {
    let base_url = start_test_server().await;
    let path = format!("{base_url}/missing.txt");

    // Missing on the server, but locating never asks
    let location = resolver().locate(&path).await.unwrap();
    match location {
        Location::Url(url) => assert_eq!(url.as_str(), path),
        other => panic!("unexpected location: {other:?}"),
    }
}

#[tokio::test]
async fn test_file_url() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test_data.txt");
    std::fs::write(&file_path, "fileXYZ").unwrap();

    let path = url::Url::from_file_path(&file_path).unwrap().to_string();
    let contents = resolver().reader(&path).await.unwrap().read_all().unwrap();
    assert_eq!(contents, "fileXYZ");
}

#[tokio::test]
async fn test_missing_file_url() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test_data.txtBAD");

    let path = url::Url::from_file_path(&file_path).unwrap().to_string();
    let err = resolver().reader(&path).await.err().unwrap();
    assert!(matches!(err, ResolveError::Io { .. }));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unsupported_scheme() {
    let err = resolver()
        .open("ftp://example.com/test_data.txt")
        .await
        .err()
        .unwrap();
    match err {
        ResolveError::InvalidLocator { locator, .. } => {
            assert_eq!(locator, "ftp://example.com/test_data.txt")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
