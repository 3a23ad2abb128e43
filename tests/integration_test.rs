// tests/integration_test.rs
use std::fs;
use std::process::Command;

use pkg_bump::boundary::ReleaseWarning;
use pkg_bump::cli::{run_version_workflow, VersionWorkflowArgs, WorkflowContext};
use pkg_bump::config::Config;
use pkg_bump::domain::{BumpKind, Version};
use pkg_bump::git::Git2Repository;
use pkg_bump::manifest::Manifest;
use pkg_bump::resolver::{resolve, ResolutionRequest};
use pkg_bump::ui::TerminalPrompter;
use tempfile::TempDir;

#[test]
fn test_pkg_bump_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "pkg-bump", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pkg-bump"));
    assert!(stdout.contains("version"));
    assert!(stdout.contains("publish"));
}

#[test]
fn test_pkg_bump_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("package.json");
    fs::write(&manifest, "{\n  \"version\": \"1.0.0\"\n}\n").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--bin", "pkg-bump", "--", "--manifest"])
        .arg(&manifest)
        .args(["version", "hotfix"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("hotfix"));
    assert_eq!(
        fs::read_to_string(&manifest).unwrap(),
        "{\n  \"version\": \"1.0.0\"\n}\n"
    );
}

#[test]
fn test_version_workflow_against_real_repository() {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Release Bot").unwrap();
        config.set_str("user.email", "release@example.com").unwrap();
    }

    let manifest = dir.path().join("package.json");
    fs::write(
        &manifest,
        "{\n  \"name\": \"e2e\",\n  \"version\": \"0.9.9\",\n  \"size\": 1.50\n}\n",
    )
    .unwrap();

    let config = Config::default();
    let source_control = Git2Repository::discover_from(dir.path());
    let ctx = WorkflowContext {
        manifest_path: manifest.clone(),
        config: &config,
        source_control: &source_control,
    };
    let args = VersionWorkflowArgs {
        kind: Some("major".to_string()),
        commit: true,
        tag: true,
        ..VersionWorkflowArgs::default()
    };
    let mut prompter = TerminalPrompter::new(std::io::empty(), std::io::sink());

    let outcome = run_version_workflow(&args, &ctx, &mut prompter).unwrap();

    assert_eq!(outcome.version.to_string(), "1.0.0");
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    assert_eq!(
        fs::read_to_string(&manifest).unwrap(),
        "{\n  \"name\": \"e2e\",\n  \"version\": \"1.0.0\",\n  \"size\": 1.50\n}\n"
    );

    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some("Bump version to 1.0.0"));
    let tagged = repo
        .find_reference("refs/tags/v1.0.0")
        .unwrap()
        .peel_to_commit()
        .unwrap();
    assert_eq!(tagged.id(), head.id());
}

#[test]
fn test_unchanged_version_commit_is_a_warning() {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Release Bot").unwrap();
        config.set_str("user.email", "release@example.com").unwrap();
    }

    let manifest = dir.path().join("package.json");
    fs::write(&manifest, "{\n  \"version\": \"1.0.0\"\n}\n").unwrap();

    let config = Config::default();
    let source_control = Git2Repository::discover_from(dir.path());
    let ctx = WorkflowContext {
        manifest_path: manifest.clone(),
        config: &config,
        source_control: &source_control,
    };
    let args = VersionWorkflowArgs {
        kind: Some("1.0.0".to_string()),
        commit: true,
        tag: true,
        ..VersionWorkflowArgs::default()
    };
    let mut prompter = TerminalPrompter::new(std::io::empty(), std::io::sink());

    // First run records the manifest, the second has nothing new to commit
    run_version_workflow(&args, &ctx, &mut prompter).unwrap();
    let outcome = run_version_workflow(&args, &ctx, &mut prompter).unwrap();

    assert!(matches!(
        outcome.warnings.as_slice(),
        [ReleaseWarning::CommitFailed { .. }]
    ));
    assert_eq!(outcome.tag, None);
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.parent_count(), 0);
}

#[test]
fn test_version_workflow_outside_repository_warns() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("package.json");
    fs::write(&manifest, "{\n  \"version\": \"2.0.0\"\n}\n").unwrap();

    let config = Config::default();
    let source_control = Git2Repository::discover_from(dir.path());
    let ctx = WorkflowContext {
        manifest_path: manifest.clone(),
        config: &config,
        source_control: &source_control,
    };
    let args = VersionWorkflowArgs {
        kind: Some("patch".to_string()),
        commit: true,
        ..VersionWorkflowArgs::default()
    };
    let mut prompter = TerminalPrompter::new(std::io::empty(), std::io::sink());

    let outcome = run_version_workflow(&args, &ctx, &mut prompter).unwrap();

    assert_eq!(outcome.warnings.len(), 1);
    assert!(fs::read_to_string(&manifest).unwrap().contains("2.0.1"));
}

#[test]
fn test_resolver_outputs_round_trip_and_order() {
    let starts = ["0.0.0", "0.9.9", "1.2.3", "1.2.3-rc.1", "2.0.0-beta.3+exp.sha"];
    let kinds = [
        BumpKind::Patch,
        BumpKind::Minor,
        BumpKind::Major,
        BumpKind::PrePatch,
        BumpKind::PreMinor,
        BumpKind::PreMajor,
    ];

    for start in starts {
        let current = Version::parse(start).unwrap();
        for kind in kinds {
            let next = resolve(&ResolutionRequest::new(current.clone(), kind)).unwrap();
            assert_eq!(
                Version::parse(&next.to_string()).unwrap(),
                next,
                "{} {} did not round-trip",
                start,
                kind
            );
            if !kind.is_pre() {
                assert!(next > current, "{} {} -> {} is not greater", start, kind, next);
            }
        }
    }
}

#[test]
fn test_persisting_same_version_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, r#"{"version":"1.0.0","z":1,"a":[1,2,{"b":null}]}"#).unwrap();

    let version = Version::parse("1.1.0").unwrap();
    Manifest::load(&path).unwrap().write_version(&version).unwrap();
    let first = fs::read(&path).unwrap();
    Manifest::load(&path).unwrap().write_version(&version).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    let rendered = String::from_utf8(first).unwrap();
    assert!(rendered.starts_with("{\n  \"version\": \"1.1.0\",\n  \"z\": 1,"));
}
