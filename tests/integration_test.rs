use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the rich-menu-gen binary with `args` inside `dir`
fn run_generator(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rich-menu-gen"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run rich-menu-gen command")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("rich-menu-gen command failed");
    }
}

/// Test that a bare invocation writes storage/rich_menu.png relative to the
/// working directory and reports it
#[test]
fn test_default_invocation_writes_png() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::create_dir(temp_dir.path().join("storage")).unwrap();

    let output = run_generator(temp_dir.path(), &[]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("✓ Saved rich menu: storage/rich_menu.png (2500x1686,"),
        "unexpected stdout: {}",
        stdout
    );

    let png_path = temp_dir.path().join("storage").join("rich_menu.png");
    assert!(png_path.exists(), "Output should exist at: {}", png_path.display());

    let img = image::open(&png_path).expect("Output should be a valid PNG");
    assert_eq!(img.width(), 2500);
    assert_eq!(img.height(), 1686);
}

/// Test that two runs produce images of the same size on disk
#[test]
fn test_reruns_are_stable() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    assert_success(&run_generator(temp_dir.path(), &["-o", "first.png"]));
    assert_success(&run_generator(temp_dir.path(), &["-o", "second.png"]));

    let first = temp_dir.path().join("first.png");
    let second = temp_dir.path().join("second.png");
    let first_len = std::fs::metadata(&first).unwrap().len();
    let second_len = std::fs::metadata(&second).unwrap().len();
    assert_eq!(first_len, second_len);

    let a = image::open(&first).unwrap();
    let b = image::open(&second).unwrap();
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
}

/// Test that an existing output file is overwritten
#[test]
fn test_existing_output_is_overwritten() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let png_path = temp_dir.path().join("menu.png");
    std::fs::write(&png_path, b"stale").unwrap();

    assert_success(&run_generator(temp_dir.path(), &["-o", "menu.png"]));

    let img = image::open(&png_path).expect("Stale file should be replaced by a PNG");
    assert_eq!(img.width(), 2500);
}

/// Test that writing into a missing directory is fatal
#[test]
fn test_missing_output_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_generator(temp_dir.path(), &["-o", "missing/rich_menu.png"]);
    assert!(!output.status.success(), "Expected a non-zero exit");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to create PNG file"),
        "unexpected stderr: {}",
        stderr
    );
    assert!(!temp_dir.path().join("missing").exists());
}

/// Test each style renders and passes the verification binary
#[test]
fn test_styles_pass_verification() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for style in ["badge", "glyph", "emoji"] {
        let file = format!("{}.png", style);
        let output = run_generator(temp_dir.path(), &["--style", style, "-o", &file]);
        assert_success(&output);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains(&format!("Style: {}, font: ", style)),
            "unexpected stdout: {}",
            stdout
        );

        let verify = Command::new(env!("CARGO_BIN_EXE_verify_rich_menu"))
            .arg(temp_dir.path().join(&file))
            .output()
            .expect("Failed to run verify_rich_menu");
        assert!(
            verify.status.success(),
            "{} style failed verification:\n{}",
            style,
            String::from_utf8_lossy(&verify.stdout)
        );
    }
}

/// Test that --menu-json writes the rich menu definition
#[test]
fn test_menu_json_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_generator(
        temp_dir.path(),
        &[
            "-o",
            "rich_menu.png",
            "--menu-json",
            "rich_menu.json",
            "--base-url",
            "https://menu.example.org/",
        ],
    );
    assert_success(&output);

    let json_path = temp_dir.path().join("rich_menu.json");
    let content = std::fs::read_to_string(&json_path).expect("Failed to read rich_menu.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("rich_menu.json should contain valid JSON");

    assert_eq!(parsed["size"]["width"], 2500);
    assert_eq!(parsed["size"]["height"], 1686);
    assert_eq!(parsed["chatBarText"], "選單");

    let areas = parsed["areas"].as_array().expect("areas should be an array");
    assert_eq!(areas.len(), 6);

    let expected = [
        ("用戶報修", "/repair"),
        ("維修進度", "/track"),
        ("聯絡我們", "/contact"),
        ("內部登入", "/login"),
        ("服務項目", "/services"),
        ("費用參考", "/pricing"),
    ];
    for (area, (label, path)) in areas.iter().zip(expected) {
        assert_eq!(area["action"]["type"], "uri");
        assert_eq!(area["action"]["label"], label);
        assert_eq!(
            area["action"]["uri"],
            format!("https://menu.example.org{}", path)
        );
    }
}

/// Test that an unknown style is rejected by argument parsing
#[test]
fn test_unknown_style_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_generator(temp_dir.path(), &["--style", "neon", "-o", "x.png"]);
    assert!(!output.status.success());
    assert!(!temp_dir.path().join("x.png").exists());
}
