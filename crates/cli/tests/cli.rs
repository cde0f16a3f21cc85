use assert_cmd::Command;

fn bookshelf() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env("BOOKSHELF_CONFIG_DIR", std::env::temp_dir().join("bookshelf-cli-no-config"))
        .env("BOOKSHELF_DATABASE__URL", "sqlite::memory:")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let output = bookshelf().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for command in ["serve", "migrate", "routes"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn routes_prints_book_endpoints() {
    let output = bookshelf().arg("routes").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("/books/{id}"));
    assert!(stdout.contains("DELETE"));
    assert!(stdout.contains("/healthz"));
}

#[test]
fn migrate_reports_applied_count() {
    let output = bookshelf().arg("migrate").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("applied 1 migration(s)"));
}

#[test]
fn unknown_environment_fails() {
    bookshelf().env("BOOKSHELF_ENV", "qa").arg("routes").assert().failure();
}
