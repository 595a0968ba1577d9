use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const PASSPHRASE: &str = "correct horse battery staple";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_enczil"))
}

/// Build a command isolated from the user's config and terminal.
fn enczil(dir: &Path, passphrase: Option<&str>) -> Command {
    let mut cmd = Command::new(bin());
    cmd.current_dir(dir)
        .env("ENCZIL_CONFIG", dir.join("config").join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ENCZIL_PASSPHRASE")
        .stdin(Stdio::null());
    if let Some(passphrase) = passphrase {
        cmd.env("ENCZIL_PASSPHRASE", passphrase);
    }
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("run enczil")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_plain(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write plaintext");
    path
}

fn encrypt(dir: &TempDir, name: &str) -> Output {
    run(enczil(dir.path(), Some(PASSPHRASE)).args(["encrypt", name]))
}

#[test]
fn test_encrypt_then_decrypt_round_trip() {
    let dir = TempDir::new().unwrap();
    let original = b"The quick brown fox jumps over the lazy dog.\n".repeat(20);
    write_plain(&dir, "notes.txt", &original);

    let output = encrypt(&dir, "notes.txt");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let encrypted = std::fs::read(dir.path().join("notes.txt.enc")).unwrap();
    assert_eq!(encrypted.len(), 48 + (original.len() / 16 + 1) * 16);

    std::fs::remove_file(dir.path().join("notes.txt")).unwrap();
    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args(["decrypt", "notes.txt.enc"]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("status=ok"));

    let decrypted = std::fs::read(dir.path().join("notes.txt")).unwrap();
    assert_eq!(decrypted, original);
}

#[test]
fn test_decrypt_with_explicit_output() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "data.bin", &[0u8, 1, 2, 3, 255]);
    assert!(encrypt(&dir, "data.bin").status.success());

    std::fs::rename(dir.path().join("data.bin.enc"), dir.path().join("blob")).unwrap();
    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args([
        "decrypt",
        "blob",
        "-o",
        "restored.bin",
    ]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        std::fs::read(dir.path().join("restored.bin")).unwrap(),
        vec![0u8, 1, 2, 3, 255]
    );
}

#[test]
fn test_wrong_passphrase_exits_with_auth_code() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "secret.txt", b"top secret");
    assert!(encrypt(&dir, "secret.txt").status.success());
    std::fs::remove_file(dir.path().join("secret.txt")).unwrap();

    let output = run(enczil(dir.path(), Some("not the passphrase")).args(["decrypt", "secret.txt.enc"]));
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Decryption failed"));
    assert!(!dir.path().join("secret.txt").exists());
}

#[test]
fn test_missing_source_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args(["encrypt", "nope.txt"]));
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("File not found"));
}

#[test]
fn test_missing_passphrase_without_tty_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "a.txt", b"abc");
    let output = run(enczil(dir.path(), None).args(["encrypt", "a.txt", "--no-input"]));
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("ENCZIL_PASSPHRASE"));
    assert!(!dir.path().join("a.txt.enc").exists());
}

#[test]
fn test_existing_output_requires_force() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "a.txt", b"first");
    write_plain(&dir, "a.txt.enc", b"occupied");

    let output = encrypt(&dir, "a.txt");
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--force"));
    assert_eq!(std::fs::read(dir.path().join("a.txt.enc")).unwrap(), b"occupied");

    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args(["encrypt", "a.txt", "--force"]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(std::fs::read(dir.path().join("a.txt.enc")).unwrap().len(), 64);
}

#[test]
fn test_decrypt_without_suffix_requires_output() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "blob", &[0u8; 64]);
    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args(["decrypt", "blob"]));
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--output"));
}

#[test]
fn test_truncated_file_exits_with_integrity_code() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "short.enc", &[7u8; 20]);
    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args(["decrypt", "short.enc"]));
    assert_eq!(output.status.code(), Some(6));
    assert!(!dir.path().join("short").exists());
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "j.txt", b"0123456789abcdef");

    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args(["--json", "encrypt", "j.txt"]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["operation"], "encrypt");
    assert_eq!(value["bytes_in"], 16);
    assert_eq!(value["bytes_out"], 80);

    let output = run(enczil(dir.path(), Some("wrong")).args([
        "--json",
        "decrypt",
        "j.txt.enc",
        "-o",
        "out.txt",
    ]));
    assert_eq!(output.status.code(), Some(5));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["kind"], "auth_failed");
}

#[test]
fn test_quiet_prints_destination_only() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "q.txt", b"quiet");
    let output = run(enczil(dir.path(), Some(PASSPHRASE)).args(["--quiet", "encrypt", "q.txt"]));
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "q.txt.enc");
}

#[test]
fn test_inspect_reports_header() {
    let dir = TempDir::new().unwrap();
    write_plain(&dir, "i.txt", &[1u8; 20]);
    assert!(encrypt(&dir, "i.txt").status.success());

    let output = run(enczil(dir.path(), None).args(["--json", "inspect", "i.txt.enc"]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["file_size"], 80);
    assert_eq!(value["ciphertext_len"], 32);
    assert_eq!(value["plaintext_len"]["min"], 16);
    assert_eq!(value["plaintext_len"]["max"], 31);
    assert_eq!(value["salt"].as_str().unwrap().len(), 32);
    assert_eq!(value["iterations"], 390_000);

    let output = run(enczil(dir.path(), None).args(["inspect", "i.txt"]));
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_config_init_and_suffix() {
    let dir = TempDir::new().unwrap();

    let output = run(enczil(dir.path(), None).args(["config", "path"]));
    assert!(output.status.success());
    assert!(stdout(&output).trim().ends_with("config.toml"));

    let output = run(enczil(dir.path(), None).args(["config", "init"]));
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let config_path = dir.path().join("config").join("config.toml");
    assert!(config_path.exists());

    let output = run(enczil(dir.path(), None).args(["config", "init"]));
    assert_eq!(output.status.code(), Some(4));

    let contents = std::fs::read_to_string(&config_path)
        .unwrap()
        .replace("suffix = \".enc\"", "suffix = \".locked\"");
    std::fs::write(&config_path, contents).unwrap();

    write_plain(&dir, "c.txt", b"config driven");
    let output = encrypt(&dir, "c.txt");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.path().join("c.txt.locked").exists());
}

#[test]
fn test_completions_generate() {
    let dir = TempDir::new().unwrap();
    let output = run(enczil(dir.path(), None).args(["completions", "bash"]));
    assert!(output.status.success());
    assert!(stdout(&output).contains("enczil"));
}
