use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay under the base directory.
///
/// Invariant: never empty, never absolute, never contains `..`. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyPath);
        }

        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }

        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(DomainError::PathEscapesBase {
                path: path.display().to_string(),
            });
        }

        Ok(Self(path))
    }

    /// Parent path, or `None` for a single-component path.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
    }

    /// Every proper ancestor, nearest first (`a/b/c` yields `a/b`, `a`).
    pub fn ancestors(&self) -> impl Iterator<Item = &Path> {
        self.0
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_path() {
        let p = RelativePath::try_new("lib/core/constants").unwrap();
        assert_eq!(p.as_path(), Path::new("lib/core/constants"));
    }

    #[test]
    fn rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_components() {
        assert!(matches!(
            RelativePath::try_new("lib/../../outside"),
            Err(DomainError::PathEscapesBase { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(RelativePath::try_new(""), Err(DomainError::EmptyPath));
    }

    #[test]
    fn parent_of_single_component_is_none() {
        let p = RelativePath::try_new("lib").unwrap();
        assert!(p.parent().is_none());

        let nested = RelativePath::try_new("lib/app.dart").unwrap();
        assert_eq!(nested.parent(), Some(RelativePath::try_new("lib").unwrap()));
    }

    #[test]
    fn ancestors_nearest_first() {
        let p = RelativePath::try_new("lib/data/api/interceptors").unwrap();
        let ancestors: Vec<_> = p.ancestors().collect();
        assert_eq!(
            ancestors,
            vec![
                Path::new("lib/data/api"),
                Path::new("lib/data"),
                Path::new("lib"),
            ]
        );
    }
}
