mod common;

use common::TestContext;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

const LISTING: &str = r#"[
    {"id": 42, "name": "report.pdf", "owner": "alice", "group": "staff", "size": 2048, "is_directory": false, "permissions": 754},
    {"id": 7, "name": "notes", "owner": "alice", "group": "", "size": 0, "is_directory": true, "permissions": 750}
]"#;

fn mock_listing(server: &mut mockito::Server, path: &str) -> mockito::Mock {
    server
        .mock("GET", "/store/retrieve")
        .match_query(Matcher::UrlEncoded("path".into(), path.into()))
        .with_status(200)
        .with_body(LISTING)
        .create()
}

#[test]
fn ls_renders_symbolic_rows() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let listing = mock_listing(&mut server, "/docs");

    ctx.cli_for(&server.url())
        .args(["ls", "docs"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"-rwxr-xr-- alice\s+staff\s+2.0K\s+42  report.pdf")
                .unwrap()
                .and(predicate::str::is_match(r"drwxr-x--- alice\s+-\s+0B\s+7  notes").unwrap()),
        );

    listing.assert();
}

#[test]
fn upload_posts_multipart_form() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/store/add")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"filename="report.txt""#.into()),
            Matcher::Regex(r#"name="file-group"\r\n\r\nstaff"#.into()),
            Matcher::Regex(r#"name="permissions"\r\n\r\n750"#.into()),
            Matcher::Regex(r#"name="path"\r\n\r\n/docs"#.into()),
        ]))
        .with_status(201)
        .with_body(r#"{"message": "File uploaded successfully", "filename": "report.txt"}"#)
        .create();
    let file = ctx.write_file("report.txt", b"quarterly");

    ctx.cli_for(&server.url())
        .arg("upload")
        .arg(&file)
        .args(["--group", "staff", "--user", "rwx", "--group-perms", "r-x", "--path", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Uploaded report.txt (750)"));

    mock.assert();
}

#[test]
fn upload_defaults_to_owner_all_group_read() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/store/add")
        .match_body(Matcher::Regex(r#"name="permissions"\r\n\r\n740"#.into()))
        .with_status(201)
        .with_body(r#"{"filename": "a.bin"}"#)
        .create();
    let file = ctx.write_file("a.bin", &[0, 1, 2]);

    ctx.cli_for(&server.url()).arg("upload").arg(&file).assert().success();

    mock.assert();
}

#[test]
fn upload_refuses_file_over_max_size() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/store/add").expect(0).create();
    let file = ctx.write_file("big.bin", &vec![0u8; 4096]);

    ctx.cli_for(&server.url())
        .arg("upload")
        .arg(&file)
        .args(["--max-size", "2K"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: File is 4.0K, over the 2.0K limit"));

    mock.assert();
}

#[test]
fn upload_rejects_unknown_size_suffix() {
    let ctx = TestContext::new();
    let file = ctx.write_file("a.txt", b"a");

    ctx.cli()
        .arg("upload")
        .arg(&file)
        .args(["--max-size", "10Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid size format: 10Q"));
}

#[test]
fn chmod_sends_symbolic_mode_as_octal() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "/");
    let mock = server
        .mock("POST", "/store/permissions/42")
        .match_body(Matcher::PartialJson(json!({"permissions": "640", "group": "admins"})))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create();

    ctx.cli_for(&server.url())
        .args(["chmod", "report.pdf", "-rw-r-----", "--group", "admins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Set permissions of report.pdf to 640 (-rw-r-----)"));

    mock.assert();
}

#[test]
fn chmod_group_only_keeps_listed_permissions() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "/");
    let mock = server
        .mock("POST", "/store/permissions/7")
        .match_body(Matcher::Json(json!({"permissions": "750", "group": "admins"})))
        .with_status(200)
        .create();

    ctx.cli_for(&server.url())
        .args(["chmod", "notes", "--group", "admins"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to 750 (drwxr-x---)"));

    mock.assert();
}

#[test]
fn chmod_unknown_entry_fails() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "/");
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    ctx.cli_for(&server.url())
        .args(["chmod", "ghost.txt", "700"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: No entry 'ghost.txt' in /"));

    mock.assert();
}

#[test]
fn login_redirect_is_reported_as_failure() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "/");
    let _rename = server
        .mock("POST", "/store/rename/42")
        .with_status(302)
        .with_header("location", "/login?next=%2Fstore%2Frename%2F42")
        .create();
    let login = server
        .mock("GET", Matcher::Regex("^/login".into()))
        .with_status(200)
        .with_body("<html>login</html>")
        .expect(0)
        .create();

    ctx.cli_for(&server.url())
        .args(["rename", "42", "final.pdf"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✅").not())
        .stderr(predicate::str::contains("Error: Server rejected request (302): authentication required"));

    login.assert();
}

#[test]
fn chmod_reports_server_refusal() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "/");
    let _m = server
        .mock("POST", "/store/permissions/42")
        .with_status(403)
        .with_body(r#"{"error": "Insufficient permissions"}"#)
        .create();

    ctx.cli_for(&server.url())
        .args(["chmod", "42", "700"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Server rejected request (403): Insufficient permissions"));
}

#[test]
fn chmod_rejects_bad_octal_without_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    ctx.cli_for(&server.url())
        .args(["chmod", "42", "79"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    mock.assert();
}

#[test]
fn rename_posts_new_name() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _listing = mock_listing(&mut server, "/docs");
    let mock = server
        .mock("POST", "/store/rename/42")
        .match_body(Matcher::Json(json!({"new_name": "final.pdf"})))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create();

    ctx.cli_for(&server.url())
        .args(["rename", "report.pdf", "final.pdf", "--path", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Renamed report.pdf to final.pdf"));

    mock.assert();
}

#[test]
fn rm_with_yes_skips_prompt() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/store/delete-multiple")
        .match_body(Matcher::Json(json!({"files": ["a.txt", "b.txt"], "path": "/docs"})))
        .with_status(200)
        .with_body(r#"{"message": "Deleted"}"#)
        .create();

    ctx.cli_for(&server.url())
        .args(["rm", "a.txt", "b.txt", "--path", "/docs", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Deleted 2 item(s) from /docs"));

    mock.assert();
}

#[test]
fn mkdir_validates_permissions() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/store/create-folder")
        .match_body(Matcher::Json(
            json!({"folder_name": "reports", "folder_perms": "750", "path": "/"}),
        ))
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create();

    ctx.cli_for(&server.url())
        .args(["mkdir", "reports", "--perms", "750"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created folder /reports (750)"));
    ctx.cli_for(&server.url())
        .args(["mkdir", "reports", "--perms", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid permission code '9'"));

    mock.assert();
}

#[test]
fn group_add_and_remove() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let add = server
        .mock("POST", "/auth/group/add")
        .match_body(Matcher::Json(json!({"group": "staff"})))
        .with_status(200)
        .create();
    let remove = server
        .mock("POST", "/auth/group/remove")
        .match_body(Matcher::Json(json!({"group": "staff"})))
        .with_status(200)
        .create();

    ctx.cli_for(&server.url())
        .args(["group", "add", "staff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Added group staff"));
    ctx.cli_for(&server.url())
        .args(["group", "remove", "staff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Removed group staff"));

    add.assert();
    remove.assert();
}

#[test]
fn group_failure_exits_with_error() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/auth/group/add")
        .with_status(200)
        .with_body(r#"{"success": false, "message": "Group exists"}"#)
        .create();

    ctx.cli_for(&server.url())
        .args(["group", "add", "staff"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Group exists"));
}

const ARCHIVES: &str = r#"[
    {"id": "a1", "archive": "2024-01-01", "time": "2024-01-01T00:00:00"},
    {"id": "a2", "archive": "2024-01-02", "time": "2024-01-02T00:00:00"}
]"#;

#[test]
fn archive_list_marks_newest() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/store/archive-list").with_status(200).with_body(ARCHIVES).create();

    ctx.cli_for(&server.url())
        .args(["archive", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  a1  2024-01-01").and(predicate::str::contains("* a2  2024-01-02")));
}

#[test]
fn archive_diff_reports_identical_tree() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _list = server.mock("GET", "/store/archive-list").with_status(200).with_body(ARCHIVES).create();
    let diff = server.mock("GET", "/store/diff/a1").with_status(200).with_body(r#"{"diff": ""}"#).create();

    ctx.cli_for(&server.url())
        .args(["archive", "diff", "--back", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01 is identical to current tree"));

    diff.assert();
}

#[test]
fn archive_restore_prints_server_message() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/store/restore/a2")
        .with_status(200)
        .with_body(r#"{"success": true, "message": "Archive restored successfully"}"#)
        .create();

    ctx.cli_for(&server.url())
        .args(["archive", "restore", "a2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Archive restored successfully"));
}

#[test]
fn download_writes_output_file() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/store/download/9").with_status(200).with_body("payload").create();
    let output = ctx.work_dir().join("out.txt");

    ctx.cli_for(&server.url())
        .args(["download", "9", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(output).unwrap(), "payload");
}

#[test]
fn stats_snapshot_prints_dashboard() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/system_stats")
        .with_status(200)
        .with_body(
            json!({"data": {
                "cpu": 7, "total": "10 GB", "used": "4 GB", "free": "6 GB", "percent": 40,
                "logs": {"auth": ["x::INFO::login"], "store": []}
            }})
            .to_string(),
        )
        .create();

    ctx.cli_for(&server.url())
        .args(["stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CPU: 7%")
                .and(predicate::str::contains("Percentage Used: 40 %"))
                .and(predicate::str::contains("  x::INFO::login")),
        );
}

#[test]
fn config_file_supplies_base_url() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/store/archive-list").with_status(200).with_body("[]").create();
    ctx.write_user_config(&format!("[server]\nbase_url = \"{}\"\n", server.url()));

    ctx.cli().args(["archive", "list"]).assert().success().stdout(predicate::str::contains("No archives"));

    mock.assert();
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "nope.toml", "archive", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn stats_rejects_zero_count() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/system_stats").expect(0).create();

    ctx.cli_for(&server.url()).args(["stats", "-n", "0"]).assert().code(2);

    mock.assert();
}

#[test]
fn max_size_error_lists_quota_presets() {
    let ctx = TestContext::new();
    let file = ctx.write_file("a.txt", b"a");

    ctx.cli()
        .arg("upload")
        .arg(&file)
        .args(["--max-size", "1e5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quota presets: 100M, 512M, 1G, 5G"));
}
