use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `lyricsmith` invocation isolated from any real configuration or key
fn lyricsmith(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lyricsmith").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn style_joins_sections_in_order() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args([
            "style",
            "--producer",
            "The Lo-Fi Alchemist",
            "--vocalist",
            "The Street Poet",
            "--custom",
            "  Vinyl, 808s ",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Lo-Fi, Vinyl Crackle, Mellow Keys, Chill, Late Night, Gritty male baritone, raspy texture",
        ))
        .stdout(predicate::str::contains("conversational, Vinyl, 808s"));
}

#[test]
fn style_without_selections_shows_placeholder() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .arg("style")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Prompt will appear here as you select personas...",
        ));
}

#[test]
fn generate_requires_topic_and_vocalist() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["generate", "--vocalist", "The Street Poet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please define a topic and select a vocalist persona.",
        ));
}

#[test]
fn generate_without_key_fails_before_sending() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["generate", "--topic", "Rain", "--vocalist", "The Street Poet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key found"));
}

#[test]
fn unknown_vocalist_is_rejected() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["style", "--vocalist", "Nobody In Particular"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nobody In Particular"));
}

#[test]
fn prompt_uses_fallbacks_for_missing_choices() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["prompt", "--topic", "Rain", "--vocalist", "The Street Poet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Topic: Rain"))
        .stdout(predicate::str::contains("- Producer/Production Style: N/A"))
        .stdout(predicate::str::contains("- Additional Style: None"))
        .stdout(predicate::str::contains(
            "Follow the requested rhyme scheme strictly: Standard.",
        ));
}

#[test]
fn prompt_json_includes_request() {
    let home = TempDir::new().unwrap();
    let output = lyricsmith(&home)
        .args([
            "prompt",
            "--pick-topic",
            "Love",
            "--vocalist",
            "The Street Poet",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["request"]["topic"], "Love");
    assert_eq!(value["request"]["vocalist"], "The Street Poet");
    assert!(value["prompt"].as_str().unwrap().contains("Love"));
}

#[test]
fn file_topic_uses_file_name() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args([
            "prompt",
            "--file",
            "/somewhere/notes/meditations.pdf",
            "--vocalist",
            "The Street Poet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analysis of: meditations.pdf"));
}

#[test]
fn list_producers() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["list", "producers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Boom Bap Purist"))
        .stdout(predicate::str::contains("The Lo-Fi Alchemist"));
}

#[test]
fn list_vocalists_is_grouped() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["list", "vocalists"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RAPPERS"))
        .stdout(predicate::str::contains("SINGERS"));
}

#[test]
fn rules_show_syntax() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Chorus: Energy]"))
        .stdout(predicate::str::contains("( . . . )"));
}

#[test]
fn config_defaults_apply_to_style() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("lyricsmith.yaml"),
        "defaults:\n  producer: The Lo-Fi Alchemist\n  custom_style: Tape hiss\n",
    )
    .unwrap();

    lyricsmith(&home)
        .arg("style")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lo-Fi, Vinyl Crackle"))
        .stdout(predicate::str::contains("Tape hiss"));
}

#[test]
fn config_path_reports_missing_file() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration file found"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .args(["--config", "nowhere.yaml", "style"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn failed_generation_prints_one_notice() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("lyricsmith.yaml"),
        "provider:\n  base_url: http://127.0.0.1:9\n  timeout_secs: 5\n",
    )
    .unwrap();

    let output = lyricsmith(&home)
        .env("GEMINI_API_KEY", "test-key")
        .args(["generate", "--topic", "Rain", "--vocalist", "The Street Poet"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let notices: Vec<&str> = stderr
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    assert_eq!(
        notices,
        ["Error: Failed to connect to AI service. Please try again."]
    );
}

#[test]
fn no_color_reaches_log_output() {
    let home = TempDir::new().unwrap();
    lyricsmith(&home)
        .env("RUST_LOG", "debug")
        .arg("style")
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration resolved"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
