//! In-process tests of parse → install → serve, without a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tower::ServiceExt;

use redirect_plugin::config::AppConfig;
use redirect_plugin::redirect::RawRedirections;
use redirect_plugin::{
    run, ConflictError, HostApp, HttpServer, InstallError, PluginError, ValidationError,
};

fn raw(entries: &[(&str, &str)]) -> RawRedirections {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), toml::Value::String(v.to_string())))
        .collect()
}

async fn send(router: Router, method: Method, uri: &str) -> axum::response::Response {
    router
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_fresh_host_serves_redirect() {
    let host = run(HostApp::new(), &raw(&[("/page/test", "/page/test2")])).unwrap();
    let router = HttpServer::new(host, &AppConfig::default()).router();

    let res = send(router.clone(), Method::GET, "/page/test").await;
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[header::LOCATION], "/page/test2");
    assert!(to_bytes(res.into_body(), 1024).await.unwrap().is_empty());

    let res = send(router, Method::HEAD, "/page/test").await;
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[header::LOCATION], "/page/test2");
}

#[tokio::test]
async fn test_conflict_reported_for_existing_route() {
    let mut host = HostApp::new();
    host.route("/static/{*filename}", "static", get(|| async { "file" }))
        .unwrap();

    let err = run(
        host,
        &raw(&[("/elsewhere", "/x"), ("/static/{*filename}", "/moved")]),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PluginError::Install(InstallError::Conflict(ConflictError {
            paths: vec!["/static/{*filename}".into()]
        }))
    );
}

#[tokio::test]
async fn test_existing_route_keeps_serving_after_install() {
    let mut host = HostApp::new();
    host.route("/static/{*filename}", "static", get(|| async { "file" }))
        .unwrap();
    let host = run(host, &raw(&[("/old", "/static/new.css")])).unwrap();
    let router = host.into_router();

    let res = send(router.clone(), Method::GET, "/static/app.css").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(&to_bytes(res.into_body(), 1024).await.unwrap()[..], b"file");

    let res = send(router, Method::GET, "/old").await;
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[header::LOCATION], "/static/new.css");
}

#[tokio::test]
async fn test_non_string_value_rejected() {
    let mut config = raw(&[("/a", "/b")]);
    config.insert("/count".into(), toml::Value::Integer(123));

    let err = run(HostApp::new(), &config).unwrap_err();
    assert_eq!(
        err,
        PluginError::Validation(ValidationError::NonString {
            entries: vec!["/count = 123".into()]
        })
    );
}

#[tokio::test]
async fn test_empty_config_is_noop() {
    let host = run(HostApp::new(), &RawRedirections::new()).unwrap();
    assert!(host.routes().is_empty());
}

#[tokio::test]
async fn test_capture_name_variants_fail_cleanly() {
    let err = run(HostApp::new(), &raw(&[("/a/{x}", "/b"), ("/a/{y}", "/c")])).unwrap_err();
    assert_eq!(
        err,
        PluginError::Install(InstallError::Conflict(ConflictError {
            paths: vec!["/a/{y}".into()]
        }))
    );

    let err = run(HostApp::new(), &raw(&[("/a/{", "/b")])).unwrap_err();
    assert_eq!(
        err,
        PluginError::Install(InstallError::Unsupported {
            entries: vec!["/a/{".into()]
        })
    );
}
