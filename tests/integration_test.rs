use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::Server;

const RELEASES_PATH: &str = "/api/v2.0/chart/release";

fn release_json(id: &str, version: &str, status: &str) -> String {
    format!(
        r#"{{
            "id": "{}",
            "human_version": "{}",
            "chart_metadata": {{ "icon": "https://example.com/{}.png" }},
            "catalog": "TRUENAS",
            "catalog_train": "charts",
            "status": "{}",
            "update_available": false,
            "portals": null
        }}"#,
        id, version, id, status
    )
}

#[test]
fn test_list_prints_apps_sorted_by_name() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", RELEASES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            "[{}, {}]",
            release_json("zeta", "2.0.0", "ACTIVE"),
            release_json("alpha", "1.0.0", "STOPPED")
        ))
        .create();

    let mut cmd = Command::new(cargo::cargo_bin!("tnapps"));
    cmd.arg("list").arg("--url").arg(&url);

    cmd.assert()
        .success()
        .stdout(predicates::str::is_match("(?s)alpha.*zeta").unwrap())
        .stdout(predicates::str::contains("alpha 1.0.0 (TRUENAS/charts) stopped"))
        .stdout(predicates::str::contains("zeta 2.0.0 (TRUENAS/charts) active"));
}

#[test]
fn test_list_shows_update_marker_and_portal() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", RELEASES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": "plex",
                "human_version": "1.32.5",
                "chart_metadata": { "icon": null },
                "catalog": "TRUENAS",
                "catalog_train": "charts",
                "status": "ACTIVE",
                "update_available": true,
                "portals": {
                    "open": ["http://a"],
                    "web_portal": ["http://b"]
                }
            }]"#,
        )
        .create();

    let mut cmd = Command::new(cargo::cargo_bin!("tnapps"));
    cmd.arg("list").arg("--url").arg(&url);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("[update available]"))
        .stdout(predicates::str::contains("http://a"));
}

#[test]
fn test_list_empty_system() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", RELEASES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let mut cmd = Command::new(cargo::cargo_bin!("tnapps"));
    cmd.arg("list").arg("--url").arg(&url);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("No applications installed."));
}

#[test]
fn test_list_sends_api_key() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", RELEASES_PATH)
        .match_header("Authorization", "Bearer test_key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let mut cmd = Command::new(cargo::cargo_bin!("tnapps"));
    cmd.arg("list")
        .arg("--url")
        .arg(&url)
        .arg("--api-key")
        .arg("test_key");

    cmd.assert().success();
}

#[test]
fn test_list_fails_on_server_error() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server.mock("GET", RELEASES_PATH).with_status(500).create();

    let mut cmd = Command::new(cargo::cargo_bin!("tnapps"));
    cmd.arg("list").arg("--url").arg(&url);

    cmd.assert().failure();
}

#[test]
fn test_list_fails_on_unrecognized_status() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", RELEASES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", release_json("plex", "1.0.0", "CRASHED")))
        .create();

    let mut cmd = Command::new(cargo::cargo_bin!("tnapps"));
    cmd.arg("list").arg("--url").arg(&url);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Unrecognized release status"));
}

#[test]
fn test_list_without_url_fails() {
    let mut cmd = Command::new(cargo::cargo_bin!("tnapps"));
    cmd.arg("list").env_remove("TNAPPS_URL");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("TNAPPS_URL"));
}
