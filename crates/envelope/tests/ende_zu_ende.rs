//! Ende-zu-Ende-Tests der Umschlag-Fassade gegen einen Mock-PKG

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use siegelpost_envelope::{Identitaet, Nonce96, PkgConfig, Umschlag, UmschlagError};
use siegelpost_pkg::PkgError;

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

fn test_config(pkg_basis: String) -> PkgConfig {
    PkgConfig {
        pkg_basis_url: pkg_basis,
        auth_basis_url: "https://auth.example/irma/1".into(),
        session_max_alter_sekunden: 2,
        poll_intervall_ms: 20,
        anfrage_timeout_sekunden: 5,
    }
}

fn mock_pkg(proof_status: &'static str) -> Router {
    Router::new()
        .route(
            "/v2/request/start",
            post(|| async {
                Json(json!({ "sessionPtr": { "u": "abc123" }, "token": "tok" }))
            }),
        )
        .route("/v2/request/jwt/:token", get(|| async { "assertion.jwt" }))
        .route(
            "/v2/request/key/:zeitstempel",
            get(move || async move {
                Json(json!({
                    "status": "DONE",
                    "proofStatus": proof_status,
                    "key": "deadbeef"
                }))
            }),
        )
}

#[tokio::test]
async fn schluessel_abrufen_und_nachricht_versiegeln() {
    let basis = mock_server(mock_pkg("VALID")).await;
    let umschlag = Umschlag::neu(test_config(basis)).unwrap();

    let identitaet = Identitaet::email("alice@example.org", 1_700_000_000);
    let material = umschlag.schluessel_abrufen(&identitaet).await.unwrap();

    // Das Material sind die woertlichen Bytes des key-Felds
    assert_eq!(material.as_bytes(), b"deadbeef");

    // Mit dem Material laesst sich eine Nachricht rund versiegeln
    let nonce = Nonce96::zufaellig();
    let ct = umschlag
        .versiegeln(b"Liebe Alice, ...", &material, &nonce)
        .unwrap();
    let klartext = umschlag.entsiegeln(&ct, &material, &nonce).unwrap();
    assert_eq!(klartext, b"Liebe Alice, ...");
}

#[tokio::test]
async fn ungueltiger_nachweis_schlaegt_durch() {
    let basis = mock_server(mock_pkg("INVALID")).await;
    let umschlag = Umschlag::neu(test_config(basis)).unwrap();

    let identitaet = Identitaet::email("alice@example.org", 1_700_000_000);
    let result = umschlag.schluessel_abrufen(&identitaet).await;

    // Der urspruengliche Fehler kommt unveraendert oben an
    assert!(matches!(
        result,
        Err(UmschlagError::Pkg(PkgError::ProofUngueltig { .. }))
    ));
}

#[tokio::test]
async fn abgebrochene_session_liefert_keinen_schluessel() {
    let app = Router::new()
        .route(
            "/v2/request/start",
            post(|| async {
                Json(json!({ "sessionPtr": { "u": "abc123" }, "token": "tok" }))
            }),
        )
        .route(
            "/v2/request/jwt/:token",
            get(|| async { (StatusCode::NOT_FOUND, String::new()) }),
        );

    let basis = mock_server(app).await;
    let mut config = test_config(basis);
    config.session_max_alter_sekunden = 1;
    let umschlag = Umschlag::neu(config).unwrap();

    let identitaet = Identitaet::email("alice@example.org", 1_700_000_000);
    let result = umschlag.schluessel_abrufen(&identitaet).await;

    assert!(matches!(
        result,
        Err(UmschlagError::Pkg(PkgError::SessionAbgelaufen))
    ));
}
