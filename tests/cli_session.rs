use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn imagedb(config_dir: &Path) -> Command {
    imagedb_with_latency(config_dir, 0)
}

fn imagedb_with_latency(config_dir: &Path, save_ms: u64) -> Command {
    let mut cmd = Command::cargo_bin("imagedb").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir)
        .arg("--save-latency-ms")
        .arg(save_ms.to_string())
        .arg("--delete-latency-ms")
        .arg("0");
    cmd
}

fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("photo.jpg"), b"\xff\xd8\xff\xe0jpeg").unwrap();
    std::fs::write(dir.path().join("Cat.png"), b"\x89PNG").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();
    dir
}

#[test]
fn empty_list_shows_empty_state() {
    let dir = fixture_dir();
    imagedb(dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Images (0)"))
        .stdout(predicate::str::contains("No images saved yet"));
}

#[test]
fn upload_then_list_and_search() {
    let dir = fixture_dir();
    let script = format!(
        "upload {photo}\nupload {cat} --tags 'pets, , cute ,pets'\nwait\nlist\nlist cat\n",
        photo = dir.path().join("photo.jpg").display(),
        cat = dir.path().join("Cat.png").display(),
    );

    let output = imagedb(dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image saved"))
        .stdout(predicate::str::contains("Saved Images (2)"))
        .stdout(predicate::str::contains("Cat [pets, cute, pets]"))
        .get_output()
        .stdout
        .clone();

    // The filtered listing only shows the cat
    let stdout = String::from_utf8(output).unwrap();
    let filtered = stdout.rsplit("Saved Images (2)").next().unwrap();
    assert!(filtered.contains("Cat"));
    assert!(!filtered.contains("photo"));
}

#[test]
fn staged_upload_with_name_override() {
    let dir = fixture_dir();
    let script = format!(
        "select {photo}\nname Sunset\ntags nature, landscape\nsave\nwait\nlist\nsave\n",
        photo = dir.path().join("photo.jpg").display(),
    );

    imagedb(dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: photo"))
        .stdout(predicate::str::contains("Sunset [nature, landscape]"))
        // The form was cleared by the first save
        .stdout(predicate::str::contains("No file selected"));
}

#[test]
fn pending_saves_finish_at_end_of_input() {
    let dir = fixture_dir();
    let script = format!("upload {}\n", dir.path().join("photo.jpg").display());

    imagedb_with_latency(dir.path(), 50)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image saved"));
}

#[test]
fn bad_files_are_reported_and_session_continues() {
    let dir = fixture_dir();
    let script = format!(
        "upload {missing}\nselect {text}\nlist\n",
        missing = dir.path().join("missing.png").display(),
        text = dir.path().join("notes.txt").display(),
    );

    imagedb(dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read"))
        .stdout(predicate::str::contains("Not an image file"))
        .stdout(predicate::str::contains("Saved Images (0)"));
}

#[test]
fn unknown_ids() {
    let dir = fixture_dir();
    imagedb(dir.path())
        .write_stdin("view 42\ndelete 42\nwait\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Image not found: 42"))
        .stdout(predicate::str::contains("Image 42 was not in the collection"))
        .stdout(predicate::str::contains("Idle"))
        .stdout(predicate::str::contains("No preview open"));
}

#[test]
fn quit_stops_reading() {
    let dir = fixture_dir();
    imagedb(dir.path())
        .write_stdin("quit\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Images").not());
}

#[test]
fn malformed_config_fails_to_start() {
    let dir = fixture_dir();
    std::fs::write(dir.path().join("config.json"), "{oops").unwrap();

    imagedb(dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
