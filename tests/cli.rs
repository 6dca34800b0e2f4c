//! 命令行端到端测试：退出码与文件系统副作用

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"img").unwrap();
}

fn wmark(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wmark").unwrap();
    cmd.current_dir(cwd).env_remove("WMARK_COMPOSITOR");
    cmd
}

fn file_count(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn traversal_in_root_exits_with_1_and_creates_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("site/a.png"));
    touch(&tmp.path().join("wm.png"));
    let before = file_count(tmp.path());

    wmark(&tmp.path().join("site"))
        .args(["--root", "../site", "--watermark", "../wm.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parent-directory"));

    assert_eq!(file_count(tmp.path()), before);
    assert!(!tmp.path().join("site/a-watermark.png").exists());
}

#[test]
fn traversal_in_watermark_exits_with_1() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("site/a.png"));
    touch(&tmp.path().join("wm.png"));

    wmark(tmp.path())
        .args(["--root", "site", "--watermark", "site/../wm.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn missing_root_exits_with_1() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("wm.png"));

    wmark(tmp.path())
        .args(["--root", "nowhere", "--watermark", "wm.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn missing_watermark_exits_with_1() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("site/a.png"));

    wmark(tmp.path())
        .args(["--root", "site", "--watermark", "wm.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn missing_root_flag_is_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    wmark(tmp.path())
        .args(["--watermark", "wm.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--root"));
}

#[test]
fn compositor_failures_are_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("site/a.png"));
    touch(&tmp.path().join("site/b.png"));
    touch(&tmp.path().join("site/a-watermark.png"));
    touch(&tmp.path().join("wm.png"));

    wmark(tmp.path())
        .args([
            "--root",
            "site",
            "--watermark",
            "wm.png",
            "--compositor",
            "wmark-no-such-compositor",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 3"))
        .stdout(predicate::str::contains("Files Watermarked: 0"))
        .stderr(predicate::str::contains("b.png"));

    assert!(tmp.path().join("site/a-watermark.png").exists());
    assert!(!tmp.path().join("site/b-watermark.png").exists());
}

#[test]
fn excluded_directories_are_not_counted() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("site/a-watermark.png"));
    touch(&tmp.path().join("site/a.png"));
    touch(&tmp.path().join("site/cache/x.png"));
    touch(&tmp.path().join("site/cache/deep/y.png"));
    touch(&tmp.path().join("wm.png"));

    wmark(tmp.path())
        .args([
            "--root",
            "site",
            "--watermark",
            "wm.png",
            "--exclude",
            "cache",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files Processed: 2"))
        .stdout(predicate::str::contains("Files Watermarked: 0"));
}

#[cfg(unix)]
#[test]
fn fake_compositor_produces_outputs_once() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("site/a.png"));
    touch(&tmp.path().join("site/b.png"));
    touch(&tmp.path().join("site/a-watermark.png"));
    touch(&tmp.path().join("wm.png"));

    // 最后一个参数为输出路径
    let script = tmp.path().join("fake-composite");
    fs::write(
        &script,
        "#!/bin/sh\nfor last; do :; done\necho composited > \"$last\"\n",
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let run = || {
        wmark(tmp.path())
            .args(["--root", "site", "--watermark", "wm.png", "--compositor"])
            .arg(&script)
            .assert()
            .success()
    };

    run()
        .stdout(predicate::str::contains("Files Processed: 3"))
        .stdout(predicate::str::contains("Files Watermarked: 1"));
    assert!(tmp.path().join("site/b-watermark.png").exists());

    run()
        .stdout(predicate::str::contains("Files Processed: 4"))
        .stdout(predicate::str::contains("Files Watermarked: 0"));
}
