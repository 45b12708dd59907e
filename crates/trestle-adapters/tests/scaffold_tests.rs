//! End-to-end scaffold runs against the built-in manifest.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use trestle_adapters::{LocalFilesystem, MemoryFilesystem, builtin_manifest};
use trestle_core::{
    application::{Filesystem, NullReporter, ProgressReporter, ScaffoldService},
    domain::Manifest,
    error::TrestleError,
};
use walkdir::WalkDir;

#[derive(Default)]
struct Recorder {
    lines: RefCell<Vec<String>>,
}

impl ProgressReporter for Recorder {
    fn directory_created(&self, path: &Path) {
        self.lines
            .borrow_mut()
            .push(format!("Created directory: {}", path.display()));
    }

    fn file_created(&self, path: &Path) {
        self.lines
            .borrow_mut()
            .push(format!("Created file: {}", path.display()));
    }
}

fn manifest() -> Manifest {
    builtin_manifest::client_app().unwrap()
}

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()))
}

/// Every path under `root` with its type and (for files) content.
fn snapshot(root: &Path) -> Vec<(PathBuf, Option<String>)> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let content = e
                .file_type()
                .is_file()
                .then(|| fs::read_to_string(e.path()).unwrap());
            (rel, content)
        })
        .collect()
}

// ── fresh run ─────────────────────────────────────────────────────────────────

#[test]
fn fresh_run_creates_every_listed_path() {
    let tmp = TempDir::new().unwrap();
    let manifest = manifest();

    let summary = local_service()
        .scaffold(&manifest, tmp.path(), &NullReporter)
        .unwrap();

    assert_eq!(summary.directories, 29);
    assert_eq!(summary.files, 63);

    for dir in manifest.directories() {
        assert!(tmp.path().join(dir).is_dir(), "missing directory {dir}");
    }
    for file in manifest.files() {
        let path = tmp.path().join(file.path());
        assert!(path.is_file(), "missing file {}", file.path());
        assert_eq!(fs::read_to_string(&path).unwrap(), file.content());
    }
}

#[test]
fn stub_files_hold_exact_literal() {
    let tmp = TempDir::new().unwrap();
    local_service()
        .scaffold(&manifest(), tmp.path(), &NullReporter)
        .unwrap();

    let read = |p: &str| fs::read_to_string(tmp.path().join(p)).unwrap();
    assert_eq!(read("lib/data/api/api_client.dart"), "# Base API client");
    assert_eq!(read("lib/presentation/router/route_names.dart"), "# Route name constants");
    assert_eq!(read("lib/main.dart"), "");
    assert_eq!(read("lib/providers/pdf_provider.dart"), "");
}

#[test]
fn nothing_outside_the_manifest_is_created() {
    let tmp = TempDir::new().unwrap();
    local_service()
        .scaffold(&manifest(), tmp.path(), &NullReporter)
        .unwrap();

    // lib/core, lib/data, lib/data/api, lib/presentation, lib/presentation/screens
    // and lib/presentation/widgets only exist as ancestors.
    let entries = snapshot(tmp.path());
    let dirs = entries.iter().filter(|(_, c)| c.is_none()).count();
    let files = entries.iter().filter(|(_, c)| c.is_some()).count();
    assert_eq!(dirs, 1 + 29 + 6); // base itself + declared + implied ancestors
    assert_eq!(files, 63);
}

#[test]
fn reporter_lines_follow_group_order() {
    let tmp = TempDir::new().unwrap();
    let recorder = Recorder::default();
    local_service()
        .scaffold(&manifest(), tmp.path(), &recorder)
        .unwrap();

    let lines = recorder.lines.into_inner();
    assert_eq!(lines.len(), 92);
    assert_eq!(lines[0], "Created directory: lib");
    assert_eq!(lines[1], "Created file: lib/app.dart");
    assert_eq!(lines[2], "Created file: lib/main.dart");
    assert_eq!(lines[3], "Created directory: lib/core/constants");
    assert_eq!(lines.last().unwrap(), "Created file: lib/providers/user_provider.dart");
}

// ── reruns and pre-existing state ─────────────────────────────────────────────

#[test]
fn second_run_yields_identical_tree() {
    let tmp = TempDir::new().unwrap();
    let service = local_service();

    service.scaffold(&manifest(), tmp.path(), &NullReporter).unwrap();
    let first = snapshot(tmp.path());

    service.scaffold(&manifest(), tmp.path(), &NullReporter).unwrap();
    let second = snapshot(tmp.path());

    assert_eq!(first, second);
}

#[test]
fn existing_file_content_is_replaced() {
    let tmp = TempDir::new().unwrap();
    let client = tmp.path().join("lib/data/api/api_client.dart");
    let main = tmp.path().join("lib/main.dart");
    fs::create_dir_all(client.parent().unwrap()).unwrap();
    fs::write(&client, "class ApiClient { /* hand-written */ }").unwrap();
    fs::write(&main, "void main() => runApp(App());").unwrap();

    local_service()
        .scaffold(&manifest(), tmp.path(), &NullReporter)
        .unwrap();

    assert_eq!(fs::read_to_string(&client).unwrap(), "# Base API client");
    assert_eq!(fs::read_to_string(&main).unwrap(), "");
}

#[test]
fn unrelated_files_in_existing_directories_survive() {
    let tmp = TempDir::new().unwrap();
    let keep = tmp.path().join("lib/core/utils/keep_me.dart");
    fs::create_dir_all(keep.parent().unwrap()).unwrap();
    fs::write(&keep, "// mine").unwrap();
    let extra_dir = tmp.path().join("lib/l10n");
    fs::create_dir_all(&extra_dir).unwrap();

    local_service()
        .scaffold(&manifest(), tmp.path(), &NullReporter)
        .unwrap();

    assert_eq!(fs::read_to_string(&keep).unwrap(), "// mine");
    assert!(extra_dir.is_dir());
    assert!(tmp.path().join("lib/core/utils/file_utils.dart").is_file());
}

// ── failures ──────────────────────────────────────────────────────────────────

#[test]
fn denied_subtree_aborts_and_reports_only_completed_steps() {
    let fs = MemoryFilesystem::new();
    fs.deny("out/lib/presentation");
    let recorder = Recorder::default();

    let err = ScaffoldService::new(Box::new(fs.clone()))
        .scaffold(&manifest(), "out", &recorder)
        .unwrap_err();

    match &err {
        TrestleError::Application(app) => {
            assert_eq!(app.io_kind(), io::ErrorKind::PermissionDenied);
            assert!(err.to_string().contains("out/lib/presentation/router"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // root (3) + core (15) + data (20) completed; nothing after.
    let lines = recorder.lines.into_inner();
    assert_eq!(lines.len(), 38);
    assert_eq!(lines.last().unwrap(), "Created file: lib/data/services/storage_service.dart");
    assert!(!fs.exists(Path::new("out/lib/providers")));
}

#[test]
fn blocking_file_aborts_the_run() {
    let tmp = TempDir::new().unwrap();
    // A regular file where a directory must go.
    fs::create_dir_all(tmp.path().join("lib")).unwrap();
    fs::write(tmp.path().join("lib/core"), "in the way").unwrap();

    let err = local_service()
        .scaffold(&manifest(), tmp.path(), &NullReporter)
        .unwrap_err();

    assert!(matches!(err, TrestleError::Application(_)));
    assert!(err.to_string().contains("create directory"));
    assert!(!tmp.path().join("lib/data").exists());
}

#[cfg(unix)]
#[test]
fn read_only_parent_fails_with_permission_error() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let locked = tmp.path().join("lib/providers");
    fs::create_dir_all(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users bypass mode bits; nothing to assert then.
    let probe = locked.join(".probe");
    if fs::write(&probe, "").is_ok() {
        fs::remove_file(&probe).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = local_service().scaffold(&manifest(), tmp.path(), &NullReporter);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(TrestleError::Application(app)) => {
            assert_eq!(app.io_kind(), io::ErrorKind::PermissionDenied)
        }
        other => panic!("expected permission error, got {other:?}"),
    }
    assert!(!locked.join("auth_provider.dart").exists());
}
