//! The built-in client skeleton.
//!
//! [`client_app`] is the single entry-point for the manifest that ships with
//! Trestle: the `lib/` tree of a Flutter PDF-tools client. Every table below
//! is walked in declaration order; within a group all directories are
//! ensured before any file is written.
//!
//! Stub lines are written verbatim, with no trailing newline.

use tracing::{debug, instrument};

use trestle_core::domain::{DomainError, Manifest, ManifestGroup};

/// Name reported in logs and listings.
pub const MANIFEST_NAME: &str = "client-app";

/// Directory every generated path lives under.
pub const PROJECT_ROOT: &str = "lib";

// ── root ──────────────────────────────────────────────────────────────────────

const ROOT_DIRECTORIES: &[&str] = &["lib"];

const ROOT_FILES: &[(&str, &str)] = &[("lib/app.dart", ""), ("lib/main.dart", "")];

// ── core ──────────────────────────────────────────────────────────────────────

const CORE_DIRECTORIES: &[&str] = &[
    "lib/core/constants",
    "lib/core/error",
    "lib/core/utils",
    "lib/core/widgets",
];

const CORE_FILES: &[(&str, &str)] = &[
    ("lib/core/constants/api_constants.dart", ""),
    ("lib/core/constants/app_constants.dart", ""),
    ("lib/core/constants/theme_constants.dart", ""),
    ("lib/core/error/app_error.dart", ""),
    ("lib/core/error/error_handler.dart", ""),
    ("lib/core/utils/file_utils.dart", ""),
    ("lib/core/utils/format_utils.dart", ""),
    ("lib/core/utils/permissions_helper.dart", ""),
    ("lib/core/widgets/app_button.dart", ""),
    ("lib/core/widgets/app_loading.dart", ""),
    ("lib/core/widgets/error_dialog.dart", ""),
];

// ── data ──────────────────────────────────────────────────────────────────────

const DATA_DIRECTORIES: &[&str] = &[
    "lib/data/api/interceptors",
    "lib/data/models",
    "lib/data/repositories",
    "lib/data/services",
];

const DATA_FILES: &[(&str, &str)] = &[
    ("lib/data/api/api_client.dart", "# Base API client"),
    ("lib/data/api/api_service.dart", "# API service interfaces"),
    ("lib/data/api/interceptors/auth_interceptor.dart", ""),
    ("lib/data/models/api_response.dart", ""),
    ("lib/data/models/conversion_result.dart", ""),
    ("lib/data/models/merge_result.dart", ""),
    ("lib/data/models/pdf_file.dart", ""),
    ("lib/data/models/repair_result.dart", ""),
    ("lib/data/models/sign_result.dart", ""),
    ("lib/data/models/split_result.dart", ""),
    ("lib/data/models/user.dart", ""),
    ("lib/data/repositories/auth_repository.dart", ""),
    ("lib/data/repositories/pdf_repository.dart", ""),
    ("lib/data/repositories/user_repository.dart", ""),
    ("lib/data/services/file_service.dart", "# File handling service"),
    ("lib/data/services/storage_service.dart", "# Local storage service"),
];

// ── presentation ──────────────────────────────────────────────────────────────

const PRESENTATION_DIRECTORIES: &[&str] = &[
    "lib/presentation/router",
    "lib/presentation/screens/auth",
    "lib/presentation/screens/compress",
    "lib/presentation/screens/convert",
    "lib/presentation/screens/home",
    "lib/presentation/screens/merge",
    "lib/presentation/screens/protect",
    "lib/presentation/screens/repair",
    "lib/presentation/screens/result",
    "lib/presentation/screens/sign",
    "lib/presentation/screens/split",
    "lib/presentation/screens/user",
    "lib/presentation/widgets/common",
    "lib/presentation/widgets/compress",
    "lib/presentation/widgets/convert",
    "lib/presentation/widgets/merge",
    "lib/presentation/widgets/result",
    "lib/presentation/widgets/sign",
    "lib/presentation/widgets/split",
];

const PRESENTATION_FILES: &[(&str, &str)] = &[
    ("lib/presentation/router/app_router.dart", "# GoRouter configuration"),
    ("lib/presentation/router/route_names.dart", "# Route name constants"),
    ("lib/presentation/screens/auth/login_screen.dart", ""),
    ("lib/presentation/screens/auth/register_screen.dart", ""),
    ("lib/presentation/screens/compress/compress_screen.dart", ""),
    ("lib/presentation/screens/convert/convert_screen.dart", ""),
    ("lib/presentation/screens/home/home_screen.dart", ""),
    ("lib/presentation/screens/merge/merge_screen.dart", ""),
    ("lib/presentation/screens/protect/protect_screen.dart", ""),
    ("lib/presentation/screens/repair/repair_screen.dart", ""),
    ("lib/presentation/screens/result/result_screen.dart", ""),
    ("lib/presentation/screens/sign/sign_screen.dart", ""),
    ("lib/presentation/screens/split/split_screen.dart", ""),
    ("lib/presentation/screens/user/profile_screen.dart", ""),
    ("lib/presentation/screens/user/settings_screen.dart", ""),
    ("lib/presentation/widgets/common/file_picker_button.dart", ""),
    ("lib/presentation/widgets/common/page_selector.dart", ""),
    ("lib/presentation/widgets/compress/quality_selector.dart", ""),
    ("lib/presentation/widgets/convert/format_selector.dart", ""),
    ("lib/presentation/widgets/merge/file_order_list.dart", ""),
    ("lib/presentation/widgets/result/download_card.dart", ""),
    ("lib/presentation/widgets/sign/signature_pad.dart", ""),
    ("lib/presentation/widgets/sign/text_overlay.dart", ""),
    ("lib/presentation/widgets/split/page_range_selector.dart", ""),
];

// ── providers ─────────────────────────────────────────────────────────────────

const PROVIDER_DIRECTORIES: &[&str] = &["lib/providers"];

const PROVIDER_FILES: &[(&str, &str)] = &[
    ("lib/providers/auth_provider.dart", ""),
    ("lib/providers/compress_provider.dart", ""),
    ("lib/providers/convert_provider.dart", ""),
    ("lib/providers/merge_provider.dart", ""),
    ("lib/providers/pdf_provider.dart", ""),
    ("lib/providers/protect_provider.dart", ""),
    ("lib/providers/repair_provider.dart", ""),
    ("lib/providers/sign_provider.dart", ""),
    ("lib/providers/split_provider.dart", ""),
    ("lib/providers/user_provider.dart", ""),
];

type GroupTable = (
    &'static str,
    &'static [&'static str],
    &'static [(&'static str, &'static str)],
);

const GROUPS: &[GroupTable] = &[
    ("root", ROOT_DIRECTORIES, ROOT_FILES),
    ("core", CORE_DIRECTORIES, CORE_FILES),
    ("data", DATA_DIRECTORIES, DATA_FILES),
    ("presentation", PRESENTATION_DIRECTORIES, PRESENTATION_FILES),
    ("providers", PROVIDER_DIRECTORIES, PROVIDER_FILES),
];

// ── Public API ────────────────────────────────────────────────────────────────

/// Build and validate the built-in client manifest.
#[instrument]
pub fn client_app() -> Result<Manifest, DomainError> {
    let mut builder = Manifest::builder(MANIFEST_NAME);

    for (name, directories, files) in GROUPS {
        let group = directories
            .iter()
            .try_fold(ManifestGroup::new(*name), |g, dir| g.with_directory(dir))?;
        let group = files
            .iter()
            .try_fold(group, |g, (path, content)| g.with_file(path, content))?;

        debug!(
            group = *name,
            directories = directories.len(),
            files = files.len(),
            "group loaded"
        );
        builder = builder.group(group);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn builtin_manifest_is_valid() {
        assert!(client_app().is_ok());
    }

    #[test]
    fn group_order_matches_run_order() {
        let manifest = client_app().unwrap();
        let names: Vec<_> = manifest.groups().iter().map(|g| g.name()).collect();
        assert_eq!(names, ["root", "core", "data", "presentation", "providers"]);
    }

    #[test]
    fn per_group_counts() {
        let manifest = client_app().unwrap();
        let counts: Vec<_> = manifest
            .groups()
            .iter()
            .map(|g| (g.directories().len(), g.files().len()))
            .collect();
        assert_eq!(counts, [(1, 2), (4, 11), (4, 16), (19, 24), (1, 10)]);
        assert_eq!(manifest.directory_count(), 29);
        assert_eq!(manifest.file_count(), 63);
    }

    #[test]
    fn first_step_creates_project_root() {
        let manifest = client_app().unwrap();
        let first = manifest.directories().next().unwrap();
        assert_eq!(first.as_path(), Path::new(PROJECT_ROOT));
    }

    #[test]
    fn exactly_six_files_carry_stubs() {
        let manifest = client_app().unwrap();
        let stubs: Vec<_> = manifest
            .files()
            .filter(|f| f.has_stub())
            .map(|f| (f.path().to_string(), f.content().to_string()))
            .collect();

        assert_eq!(
            stubs,
            [
                ("lib/data/api/api_client.dart", "# Base API client"),
                ("lib/data/api/api_service.dart", "# API service interfaces"),
                ("lib/data/services/file_service.dart", "# File handling service"),
                ("lib/data/services/storage_service.dart", "# Local storage service"),
                ("lib/presentation/router/app_router.dart", "# GoRouter configuration"),
                ("lib/presentation/router/route_names.dart", "# Route name constants"),
            ]
            .map(|(p, c)| (p.to_string(), c.to_string()))
        );
    }

    #[test]
    fn every_path_is_under_lib() {
        let manifest = client_app().unwrap();
        assert!(manifest
            .directories()
            .all(|d| d.as_path().starts_with(PROJECT_ROOT)));
        assert!(manifest
            .files()
            .all(|f| f.path().as_path().starts_with(PROJECT_ROOT)));
    }
}
