//! CLI tests against a mock API.
//!
//! Each test runs the built binary with an isolated HOME so the stored
//! session never touches the real one.

mod common;

use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli_failure, run_cli_success, run_cli_with_home, session_file};

async fn mock_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(json!({"login": "alice", "password": "pw"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "session-token": "cli-token",
                "user": {"email": "alice@example.com", "username": "alice"}
            }
        })))
        .mount(server)
        .await;
}

fn login(server: &MockServer, home: &Path) -> String {
    run_cli_success(
        &[
            "login",
            "--login",
            "alice",
            "--password",
            "pw",
            "--base-url",
            &server.uri(),
            "--api-version",
            "20250715",
        ],
        home,
    )
}

fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_login_persists_session() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    let home = TempDir::new().unwrap();

    let stdout = login(&server, home.path());
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains("alice"));

    let whoami = run_cli_success(&["whoami"], home.path());
    assert!(whoami.contains("alice@example.com"));
    assert!(whoami.contains(&server.uri()));
    assert!(whoami.contains("20250715"));

    #[cfg(target_os = "linux")]
    {
        let file = session_file(home.path());
        let stored: Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(stored["session_token"], "cli-token");

        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_saves_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": "invalid_credentials", "message": "Invalid login"}
        })))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(
        &["login", "--login", "alice", "--password", "bad", "--base-url", &server.uri()],
        home.path(),
    );
    assert!(stderr.contains("Failed to login"));

    let stderr = run_cli_failure(&["whoami"], home.path());
    assert!(stderr.contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_clears_session() {
    let server = MockServer::start().await;
    mock_login(&server).await;
    let home = TempDir::new().unwrap();
    login(&server, home.path());

    let stdout = run_cli_success(&["logout"], home.path());
    assert!(stdout.contains("Logged out"));

    let stderr = run_cli_failure(&["balances", "--account", "5WT00001"], home.path());
    assert!(stderr.contains("No active session"));

    // A second logout is harmless
    run_cli_success(&["logout"], home.path());
}

#[test]
fn test_version_is_stamped() {
    let home = TempDir::new().unwrap();
    let stdout = run_cli_success(&["--version"], home.path());
    let version = stdout.trim().strip_prefix("tasty ").unwrap();
    assert!(!version.is_empty());
    assert!(!version.starts_with('v'));
}

#[test]
fn test_commands_require_session() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(&["accounts"], home.path());
    assert!(stderr.contains("tasty login"));
}

#[test]
fn test_invalid_account_number() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(&["positions", "--account", "5WT-0001"], home.path());
    assert!(stderr.contains("Invalid account number"));
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_balances_uses_stored_token() {
    let server = MockServer::start().await;
    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/accounts/5WT00001/balances"))
        .and(header("authorization", "cli-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"account-number": "5WT00001", "cash-balance": "1000.50"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    login(&server, home.path());

    // Account numbers are normalized before use
    let stdout = run_cli_success(&["balances", "--account", " 5wt00001 "], home.path());
    let balances: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(balances["account-number"], "5WT00001");
    assert_eq!(balances["cash-balance"], "1000.50");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_positions_filter_by_instrument_type() {
    let server = MockServer::start().await;
    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/accounts/5WT00001/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {"symbol": "AAPL", "instrument-type": "Equity", "quantity": "10"},
                {"symbol": "./ESZ4 EW4X4 241129P5900", "instrument-type": "Future Option", "quantity": 1}
            ]}
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    login(&server, home.path());

    let stdout = run_cli_success(
        &["positions", "--account", "5WT00001", "--instrument-type", "equity"],
        home.path(),
    );
    let rows = json_lines(&stdout);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["symbol"], "AAPL");
}

// ============================================================================
// Market Data Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_quotes_joins_symbols() {
    let server = MockServer::start().await;
    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/market-data/by-type"))
        .and(query_param("equity", "AAPL,MSFT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {"symbol": "AAPL", "instrument-type": "Equity", "mark": "190.5"},
                {"symbol": "MSFT", "instrument-type": "Equity", "mark": "410.0"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    login(&server, home.path());

    let stdout = run_cli_success(&["quotes", "--equity", "AAPL,MSFT"], home.path());
    let rows = json_lines(&stdout);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["symbol"], "MSFT");
}

#[test]
fn test_quotes_without_symbols() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(&["quotes"], home.path());
    assert!(stderr.contains("No symbols given"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_futures_greeks_survives_quote_failure() {
    let server = MockServer::start().await;
    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/accounts/5WT00001/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {
                    "symbol": "./ESZ4 EW4X4 241129P5900",
                    "instrument-type": "Future Option",
                    "underlying-symbol": "/ESZ4",
                    "quantity": "2",
                    "quantity-direction": "Short",
                    "multiplier": 50
                }
            ]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/market-data/by-type"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    login(&server, home.path());

    let output = run_cli_with_home(&["futures-greeks", "--account", "5WT00001"], home.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to fetch quotes"));
    assert!(stdout.contains("./ESZ4 EW4X4 241129P5900"));
    assert!(stdout.contains("N/A"));
    assert!(stdout.contains("Net Delta: 0.0000"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_futures_greeks_nets_positions() {
    let server = MockServer::start().await;
    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/accounts/5WT00001/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {
                    "symbol": "FOP1",
                    "instrument-type": "Future Option",
                    "quantity": "2",
                    "quantity-direction": "Short",
                    "multiplier": "50"
                },
                {"symbol": "AAPL", "instrument-type": "Equity", "quantity": "100"}
            ]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/market-data/by-type"))
        .and(query_param("future-option", "FOP1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [{"symbol": "FOP1", "delta": "-0.25", "theta": "-1.5"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    login(&server, home.path());

    let stdout = run_cli_success(&["futures-greeks", "--account", "5WT00001"], home.path());
    assert!(stdout.contains("Futures Option Positions (1)"));
    assert!(stdout.contains("Net Delta: 25.0000"));
    assert!(stdout.contains("Net Theta: 150.0000"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_option_chain_batches_and_sorts() {
    let server = MockServer::start().await;
    mock_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/option-chains/SPY"))
        .and(header("accept-version", "20250715"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [
                {"symbol": "SPY-FEB-500-C", "expiration-date": "2025-02-21", "strike-price": "500.0", "option-type": "C"},
                {"symbol": "SPY-JAN-510-C", "expiration-date": "2025-01-17", "strike-price": "510.0", "option-type": "C"},
                {"symbol": "SPY-JAN-490-P", "expiration-date": "2025-01-17", "strike-price": "490.0", "option-type": "P"},
                {"symbol": "SPY-MAR-500-C", "expiration-date": "2025-03-21", "strike-price": "500.0", "option-type": "C"}
            ]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/market-data/by-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"items": [{"symbol": "SPY-JAN-510-C", "mark": "3.10"}]}
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    login(&server, home.path());

    let stdout = run_cli_success(
        &[
            "option-chain",
            "--symbol",
            "spy",
            "--end-date",
            "2025-02-28",
            "--batch-size",
            "2",
            "--delay-ms",
            "0",
        ],
        home.path(),
    );

    let rows = json_lines(&stdout);
    let symbols: Vec<_> = rows.iter().map(|r| r["symbol"].as_str().unwrap()).collect();
    assert_eq!(symbols, ["SPY-JAN-490-P", "SPY-JAN-510-C", "SPY-FEB-500-C"]);
    assert_eq!(rows[1]["quote"]["mark"], "3.10");
    assert!(rows[0]["quote"].is_null());

    // Three contracts in batches of two
    let quote_requests = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == "/market-data/by-type")
        .count();
    assert_eq!(quote_requests, 2);
}

#[test]
fn test_option_chain_rejects_inverted_dates() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(
        &[
            "option-chain",
            "--symbol",
            "SPY",
            "--start-date",
            "2025-03-01",
            "--end-date",
            "2025-02-01",
        ],
        home.path(),
    );
    assert!(stderr.contains("--start-date must not be after --end-date"));
}
