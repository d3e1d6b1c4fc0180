//! Integration tests for show, dashboard, classify, emotion and analyze

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

#[test]
fn test_show_entry() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#3 Great Day"))
        .stdout(predicate::str::contains("9/10  Very Happy  primary #9b87f5"))
        .stdout(predicate::str::contains("Joyful [primary]"))
        .stdout(predicate::str::contains("We went hiking"));
}

#[test]
fn test_show_missing_entry() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["show", "99"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No journal entry with id 99"));
}

#[test]
fn test_dashboard() {
    let temp = TempDir::new().unwrap();

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .arg("dashboard")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Entries: 5"));
    assert!(stdout.contains("Average mood: 6.0/10  Happy"));
    assert!(stdout.contains("Mood trend:"));

    let recent = stdout.split("Recent entries:").nth(1).unwrap();
    assert!(recent.contains("Daily Reflection"));
    assert!(recent.contains("Great Day"));
    assert!(recent.contains("Mixed Feelings"));
    assert!(!recent.contains("Monday Blues"));
}

#[test]
fn test_dashboard_recent_limit() {
    let temp = TempDir::new().unwrap();

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .args(["dashboard", "--recent", "1"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let recent = stdout
        .split("Recent entries:")
        .nth(1)
        .unwrap()
        .split("Emotions:")
        .next()
        .unwrap();

    assert_eq!(recent.trim().lines().count(), 1);
    assert!(recent.contains("#1"));
}

#[test]
fn test_classify() {
    let temp = TempDir::new().unwrap();

    for (mood, expected) in [
        ("10", "Very Happy  primary"),
        ("6", "Happy  secondary"),
        ("5", "Neutral  warning"),
        ("2", "Sad  muted"),
        ("0", "Very Sad  danger"),
    ] {
        moodlog_cmd()
            .current_dir(temp.path())
            .args(["classify", mood])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_classify_out_of_range() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["classify", "11"])
        .assert()
        .failure();
}

#[test]
fn test_emotion_color() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["emotion", "Anger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anger  danger #FF6B6B"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["emotion", "Wistful"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wistful  primary #9b87f5"));
}

#[test]
fn test_analyze() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["analyze", "Productive morning, tense meeting, looking forward to the weekend."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected mood: 7/10  Happy"))
        .stdout(predicate::str::contains("Productive"))
        .stdout(predicate::str::contains("mild anxiety"));
}

#[test]
fn test_analyze_blank_text() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["analyze", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please write something"));
}
