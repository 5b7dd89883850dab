//! E2E tests for the `segregator` binary
//!
//! `--once` covers the sweep deterministically; the watch-mode test starts the
//! real loop and kills it once the expected event shows up.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use segregator::{FileSystemClock, WatchedFile};
use tempfile::tempdir;

fn segregator_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_segregator"));
    cmd.current_dir(root)
        .env_remove("SEGREGATOR_ROOT")
        .env_remove("SEGREGATOR_HOME")
        .env_remove("SEGREGATOR_DEV")
        .env_remove("SEGREGATOR_TEST")
        .env("RUST_LOG", "info");
    cmd
}

fn wait_for_line(rx: &Receiver<String>, needle: &str) -> bool {
    let deadline = Instant::now() + Duration::from_secs(10);
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(left) {
            Ok(line) if line.contains(needle) => return true,
            Ok(_) => continue,
            Err(_) => return false,
        }
    }
    false
}

#[test]
fn once_creates_directories_and_routes_xml() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("HOME")).unwrap();
    fs::write(root.join("HOME/report.xml"), "<report/>").unwrap();
    fs::write(root.join("HOME/notes.txt"), "notes").unwrap();

    let output = segregator_cmd(root)
        .args(["--once", "--json"])
        .output()
        .expect("Failed to run segregator");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(root.join("DEV/report.xml").exists());
    assert!(root.join("TEST").is_dir());
    assert!(root.join("HOME/notes.txt").exists());
    assert!(!root.join("HOME/report.xml").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(r#""event":"sweep_complete","moved":1,"unmatched":1,"failed":0"#),
        "Got: {stdout}"
    );
}

#[test]
fn once_routes_jar_by_creation_hour() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("HOME")).unwrap();
    let jar = root.join("HOME/build.jar");
    fs::write(&jar, "jar").unwrap();

    let hour = WatchedFile::inspect(&jar, &FileSystemClock)
        .unwrap()
        .creation_hour();
    let expected = if hour % 2 == 0 { "DEV" } else { "TEST" };

    let status = segregator_cmd(root)
        .arg("--once")
        .status()
        .expect("Failed to run segregator");

    assert!(status.success());
    assert!(root.join(expected).join("build.jar").exists());
    assert!(!jar.exists());
}

#[test]
fn env_overrides_select_directories() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let incoming = root.join("incoming");
    fs::create_dir(&incoming).unwrap();
    fs::write(incoming.join("a.xml"), "x").unwrap();

    let status = segregator_cmd(root)
        .arg("--once")
        .env("SEGREGATOR_HOME", &incoming)
        .env("SEGREGATOR_DEV", root.join("dev-out"))
        .status()
        .expect("Failed to run segregator");

    assert!(status.success());
    assert!(root.join("dev-out/a.xml").exists());
    assert!(root.join("TEST").is_dir(), "unset dirs default under the root");
}

#[test]
fn config_file_with_unknown_key_still_runs() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(
        root.join("segregator.toml"),
        "home = \"inbox\"\ndve = \"typo\"\n",
    )
    .unwrap();

    let output = segregator_cmd(root)
        .arg("--once")
        .output()
        .expect("Failed to run segregator");

    assert!(output.status.success());
    assert!(root.join("inbox").is_dir());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown config key 'dve'"), "Got: {stderr}");
    assert!(stderr.contains("did you mean 'dev'"), "Got: {stderr}");
}

#[test]
fn fails_when_directory_cannot_be_created() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    fs::write(root.join("HOME"), "not a directory").unwrap();

    let output = segregator_cmd(root)
        .arg("--once")
        .output()
        .expect("Failed to run segregator");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to create directory"), "Got: {stderr}");
}

#[test]
fn watch_moves_new_xml_file() {
    let temp = tempdir().unwrap();
    let root = temp.path();

    let mut child = segregator_cmd(root)
        .arg("--json")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start segregator");

    let stdout = child.stdout.take().unwrap();
    let (tx, rx) = channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let watching = wait_for_line(&rx, r#""event":"watching""#);
    if watching {
        fs::write(root.join("HOME/report.xml"), "<report/>").unwrap();
    }
    let moved = watching && wait_for_line(&rx, r#""event":"file_moved""#);

    let _ = child.kill();
    let _ = child.wait();

    assert!(watching, "watcher never reported it was watching");
    assert!(moved, "expected a file_moved event");
    assert!(root.join("DEV/report.xml").exists());
    assert!(!root.join("HOME/report.xml").exists());
}
