//! Request submission: wire body, confirmation text, list refresh,
//! server-side rejection.

use predicates::str::contains;
use serde_json::json;

mod common;
use common::{StubServer, pcheck, setup_config_dir, write_session};

#[test]
fn request_success_confirms_and_refreshes() {
    let dir = setup_config_dir("req_ok");
    write_session(&dir, "tok123", "user");
    let server = StubServer::serve(vec![
        (
            200,
            r#"{"status":"ok","message":"Color request saved","id":42}"#.to_string(),
        ),
        (
            200,
            r#"[{"id":42,"pantone":"186C","hex_color":null,"alternative_hex":null,
                "status":"pending","points":["Testliner weiß Coated"]}]"#
                .to_string(),
        ),
    ]);

    pcheck()
        .args([
            "--config-dir",
            &dir,
            "--server",
            &server.url,
            "request",
            "--pantone",
            "186 C",
            "--point",
            "Testliner weiß Coated",
        ])
        .assert()
        .success()
        .stdout(contains("Farbe angefragt! ID: 42"))
        .stdout(contains("1 color check"));

    let recorded = server.finish();
    assert_eq!(recorded.len(), 2, "submit then refresh");

    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].path, "/colorchecks/request");
    assert_eq!(recorded[0].header("x-api-token"), Some("tok123"));
    assert_eq!(
        recorded[0].body_json(),
        json!({"pantone": "186 C", "points": ["Testliner weiß Coated"]})
    );

    assert_eq!(recorded[1].method, "GET");
    assert_eq!(recorded[1].path, "/colorchecks");
}

#[test]
fn request_failure_shows_server_error() {
    let dir = setup_config_dir("req_fail");
    write_session(&dir, "tok123", "user");
    let server = StubServer::serve(vec![(400, r#"{"error":"invalid pantone"}"#.to_string())]);

    pcheck()
        .args([
            "--config-dir",
            &dir,
            "--server",
            &server.url,
            "request",
            "--pantone",
            "no-such-color",
        ])
        .assert()
        .failure()
        .stdout(contains("Fehler: invalid pantone"));

    // no refresh after a rejected submit
    assert_eq!(server.finish().len(), 1);
}

#[test]
fn request_failure_without_error_field_defaults_to_empty() {
    let dir = setup_config_dir("req_fail_empty");
    write_session(&dir, "tok123", "user");
    let server = StubServer::serve(vec![(500, "{}".to_string())]);

    pcheck()
        .args([
            "--config-dir",
            &dir,
            "--server",
            &server.url,
            "request",
            "--pantone",
            "186 C",
        ])
        .assert()
        .failure()
        .stdout(contains("Fehler: "));

    server.finish();
}

#[test]
fn empty_submission_is_forwarded_verbatim() {
    let dir = setup_config_dir("req_empty");
    write_session(&dir, "tok123", "user");
    let server = StubServer::serve(vec![(400, r#"{"error":"Pantone required"}"#.to_string())]);

    pcheck()
        .args([
            "--config-dir",
            &dir,
            "--server",
            &server.url,
            "request",
            "--pantone",
            "",
        ])
        .assert()
        .failure()
        .stdout(contains("Fehler: Pantone required"));

    let recorded = server.finish();
    assert_eq!(
        recorded[0].body_json(),
        json!({"pantone": "", "points": []})
    );
}

#[test]
fn alt_hex_is_normalized_into_the_body() {
    let dir = setup_config_dir("req_alt");
    write_session(&dir, "tok123", "user");
    let server = StubServer::serve(vec![
        (200, r#"{"status":"ok","id":7}"#.to_string()),
        (200, "[]".to_string()),
    ]);

    pcheck()
        .args([
            "--config-dir",
            &dir,
            "--server",
            &server.url,
            "request",
            "--pantone",
            "186 C",
            "--alt-hex",
            "CC0000",
        ])
        .assert()
        .success();

    let recorded = server.finish();
    assert_eq!(
        recorded[0].body_json(),
        json!({"pantone": "186 C", "points": [], "alternative_hex": "#cc0000"})
    );
}

#[test]
fn invalid_alt_hex_is_rejected_before_any_network_call() {
    let dir = setup_config_dir("req_bad_hex");
    write_session(&dir, "tok123", "user");
    let server = StubServer::serve(vec![]);

    pcheck()
        .args([
            "--config-dir",
            &dir,
            "--server",
            &server.url,
            "request",
            "--pantone",
            "186 C",
            "--alt-hex",
            "rot",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hex color"));

    assert!(server.finish().is_empty());
}
