//! Integration-Tests fuer den SignatureClient gegen einen Mock-Auth-Dienst

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use siegelpost_pkg::{PkgConfig, PkgError, SignatureClient, SignierAnfrage};

async fn mock_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Port konnte nicht gebunden werden");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn test_config(auth_basis: String) -> PkgConfig {
    PkgConfig {
        pkg_basis_url: "https://pkg.example".into(),
        auth_basis_url: auth_basis,
        session_max_alter_sekunden: 2,
        poll_intervall_ms: 20,
        anfrage_timeout_sekunden: 5,
    }
}

#[derive(serde::Deserialize)]
struct SessionQuery {
    session: String,
}

#[tokio::test]
async fn signieren_liefert_opakes_token() {
    let app = Router::new()
        .route(
            "/api/sign",
            post(|Json(anfrage): Json<SignierAnfrage>| async move {
                // Die Signier-Session ist an das E-Mail-Attribut gebunden
                assert_eq!(anfrage.hash, "0123abcd");
                assert_eq!(anfrage.attributes, vec!["pbdf.sidn-pbdf.email.email"]);
                Json(json!({ "sessionPtr": { "u": "sig-sitzung" }, "token": "sig-tok" }))
            }),
        )
        .route(
            "/api/sign_result",
            get(|Query(query): Query<SessionQuery>| async move {
                assert_eq!(query.session, "sig-tok");
                "opake.signatur"
            }),
        );

    let basis = mock_server(app).await;
    let client = SignatureClient::neu(test_config(basis)).unwrap();

    let signatur = client.signieren("0123abcd").await.unwrap();
    assert_eq!(signatur, "opake.signatur");
}

#[tokio::test]
async fn signier_ergebnis_kommt_verzoegert() {
    let zaehler = Arc::new(AtomicUsize::new(0));
    let zaehler_handler = Arc::clone(&zaehler);

    let app = Router::new()
        .route(
            "/api/sign",
            post(|| async { Json(json!({ "sessionPtr": { "u": "s" }, "token": "t" })) }),
        )
        .route(
            "/api/sign_result",
            get(move || {
                let zaehler = Arc::clone(&zaehler_handler);
                async move {
                    if zaehler.fetch_add(1, Ordering::SeqCst) < 2 {
                        // Session noch offen
                        (StatusCode::OK, String::new())
                    } else {
                        (StatusCode::OK, "opake.signatur".to_string())
                    }
                }
            }),
        );

    let basis = mock_server(app).await;
    let client = SignatureClient::neu(test_config(basis)).unwrap();

    let signatur = client.signieren("hash").await.unwrap();
    assert_eq!(signatur, "opake.signatur");
    assert!(zaehler.load(Ordering::SeqCst) >= 3);
}

#[tokio::test]
async fn signieren_laeuft_in_die_frist() {
    let app = Router::new()
        .route(
            "/api/sign",
            post(|| async { Json(json!({ "sessionPtr": { "u": "s" }, "token": "t" })) }),
        )
        .route(
            "/api/sign_result",
            get(|| async { (StatusCode::NOT_FOUND, String::new()) }),
        );

    let basis = mock_server(app).await;
    let mut config = test_config(basis);
    config.session_max_alter_sekunden = 1;
    let client = SignatureClient::neu(config).unwrap();

    let result = client.signieren("hash").await;
    assert!(matches!(result, Err(PkgError::SessionAbgelaufen)));
}

#[tokio::test]
async fn signier_start_fehler_wird_durchgereicht() {
    let app = Router::new().route(
        "/api/sign",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );

    let basis = mock_server(app).await;
    let client = SignatureClient::neu(test_config(basis)).unwrap();

    let result = client.signieren("hash").await;
    assert!(matches!(result, Err(PkgError::Signierung(_))));
}

#[tokio::test]
async fn signatur_pruefen_gibt_attribute_zurueck() {
    let app = Router::new().route(
        "/api/verify",
        post(|koerper: String| async move {
            assert_eq!(koerper, "opake.signatur");
            Json(json!({ "pbdf.sidn-pbdf.email.email": "alice@example.org" }))
        }),
    );

    let basis = mock_server(app).await;
    let client = SignatureClient::neu(test_config(basis)).unwrap();

    let attribute = client.signatur_pruefen("opake.signatur").await.unwrap();
    assert_eq!(
        attribute.get("pbdf.sidn-pbdf.email.email").map(String::as_str),
        Some("alice@example.org")
    );
}

#[tokio::test]
async fn signatur_pruefen_fehler() {
    let app = Router::new().route(
        "/api/verify",
        post(|| async { StatusCode::BAD_REQUEST }),
    );

    let basis = mock_server(app).await;
    let client = SignatureClient::neu(test_config(basis)).unwrap();

    let result = client.signatur_pruefen("kaputt").await;
    assert!(matches!(result, Err(PkgError::Signierung(_))));
}
