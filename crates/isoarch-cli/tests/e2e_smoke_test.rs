use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use isoarch_cli::{Args, run};

/// Path of the demos directory at the workspace root
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects all .iso files from a directory
fn collect_iso_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("iso")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: Option<PathBuf>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.map(|path| path.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
        check: false,
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_iso_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args(demo_path, Some(output_path.clone()))) {
            failed_demos.push((demo_path.clone(), e.to_string()));
            continue;
        }

        let json = fs::read_to_string(&output_path).expect("Output file should exist");
        if !json.contains("\"components\"") {
            failed_demos.push((demo_path.clone(), "output is not a diagram model".to_string()));
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_iso_files(demos_dir().join("errors"));
    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&args(demo_path, Some(output_path.clone()))).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "No output is written on failure");
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) should have failed",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_check_mode_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("ok.iso");
    let output = temp_dir.path().join("ok.json");
    fs::write(&input, "component a { }\n").unwrap();

    let mut check_args = args(&input, Some(output.clone()));
    check_args.check = true;

    run(&check_args).expect("Valid input should pass the check");
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_is_an_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.iso");

    let err = run(&args(&input, None)).expect_err("Missing input should fail");
    assert!(matches!(err, isoarch::IsoarchError::Io(_)));
}

#[test]
fn e2e_explicit_config_controls_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("compact.iso");
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("compact.json");
    fs::write(&input, "component a { }\n").unwrap();
    fs::write(&config, "[output]\npretty = false\n").unwrap();

    let mut compact_args = args(&input, Some(output.clone()));
    compact_args.config = Some(config.to_string_lossy().to_string());
    run(&compact_args).expect("Failed to run");

    let json = fs::read_to_string(&output).unwrap();
    assert!(!json.contains('\n'));
}
