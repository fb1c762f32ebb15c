use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::RpgGuardError;

use super::mock_fs::MockFileSystem;

fn load(content: &str) -> crate::error::Result<crate::config::Config> {
    let fs = MockFileSystem::new().with_file("/project/custom.toml", content);
    FileConfigLoader::with_fs(fs).load_from_path(Path::new("/project/custom.toml"))
}

#[test]
fn missing_version_is_accepted() {
    assert!(load("[scanner]\nrecursive = false\n").is_ok());
}

#[test]
fn current_version_is_accepted() {
    let config = load("version = \"1\"\n").unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
}

#[test]
fn unsupported_version_is_rejected() {
    let err = load("version = \"2\"\n").unwrap_err();
    assert!(matches!(err, RpgGuardError::Config(_)));
    assert!(err.to_string().contains("'2'"));
}
