use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn novel2md() -> Command {
    Command::cargo_bin("novel2md").expect("binary builds")
}

#[test]
fn splits_english_novel_into_chapter_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    fs::write(&input, "Chapter 1\nAAA\nChapter 2\nBBB").unwrap();

    novel2md()
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Split 2 chapters"))
        .stderr(predicate::str::contains("Encoding: UTF-8"));

    let chapters = dir.path().join("chapters");
    assert_eq!(
        fs::read_to_string(chapters.join("Chapter0001.md")).unwrap(),
        "Chapter 1\nAAA"
    );
    assert_eq!(
        fs::read_to_string(chapters.join("Chapter0002.md")).unwrap(),
        "Chapter 2\nBBB"
    );
    assert!(chapters.join("README.md").exists());
}

#[test]
fn splits_gbk_novel_and_reencodes_to_utf8() {
    // "第1章\n你好\n第2章\n再见" encoded as GBK; invalid as UTF-8.
    let gbk: &[u8] = &[
        0xB5, 0xDA, 0x31, 0xD5, 0xC2, 0x0A, 0xC4, 0xE3, 0xBA, 0xC3, 0x0A, 0xB5, 0xDA, 0x32,
        0xD5, 0xC2, 0x0A, 0xD4, 0xD9, 0xBC, 0xFB,
    ];
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    fs::write(&input, gbk).unwrap();

    novel2md()
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Encoding: GBK"));

    let first = fs::read_to_string(dir.path().join("chapters/Chapter0001.md")).unwrap();
    assert_eq!(first, "第1章\n你好");
}

#[test]
fn respects_output_dir_and_verbose_listing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    let out = dir.path().join("out");
    fs::write(&input, "Chapter 1\nAAA\nChapter 2\nBBB").unwrap();

    novel2md()
        .arg(&input)
        .args(["--output"])
        .arg(&out)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Chapter0002.md"));

    assert!(out.join("chapters/Chapter0001.md").exists());
}

#[test]
fn custom_pattern_overrides_detection() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    fs::write(&input, "* Intro\nAAA\n* Finale\nBBB").unwrap();

    novel2md()
        .arg(&input)
        .args(["--pattern", r"^\* "])
        .assert()
        .success()
        .stderr(predicate::str::contains("Split 2 chapters"));

    assert!(dir.path().join("chapters/Chapter0001.md").exists());
}

#[test]
fn fails_on_missing_input() {
    novel2md()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));
}

#[test]
fn fails_when_no_pattern_matches() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    fs::write(&input, "prose with no recognizable headings").unwrap();

    novel2md()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pattern"));

    assert!(!dir.path().join("chapters").exists());
}

#[test]
fn fails_on_invalid_custom_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    fs::write(&input, "Chapter 1\nAAA").unwrap();

    novel2md()
        .arg(&input)
        .args(["--pattern", "([unclosed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chapter pattern"));
}

#[test]
fn strict_mode_rejects_mixed_garbage_for_explicit_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("novel.txt");
    let mut bytes = b"Chapter 1\n".to_vec();
    bytes.push(0xFF);
    fs::write(&input, &bytes).unwrap();

    novel2md()
        .arg(&input)
        .args(["--encoding", "utf-8", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid for"));
}
