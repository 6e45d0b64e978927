use assert_cmd::Command;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf-cli").unwrap();
    cmd.env("BOOKSHELF_CONFIG_DIR", "does-not-exist")
        .env_remove("BOOKSHELF_ENV");
    cmd
}

#[test]
fn routes_lists_book_endpoints() {
    let output = cli().arg("routes").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for line in [
        "POST    /books",
        "GET     /books",
        "GET     /books/{bookId}",
        "PUT     /books/{bookId}",
        "DELETE  /books/{bookId}",
        "GET     /healthz",
    ] {
        assert!(stdout.contains(line), "missing `{line}` in:\n{stdout}");
    }
}

#[test]
fn config_prints_defaults_as_json() {
    let output = cli()
        .env("BOOKSHELF_SERVER__PORT", "9100")
        .arg("config")
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["environment"], "local");
    assert_eq!(settings["server"]["host"], "localhost");
    assert_eq!(settings["server"]["port"], 9100);
}

#[test]
fn unknown_environment_fails() {
    cli().env("BOOKSHELF_ENV", "qa").arg("config").assert().failure();
}
