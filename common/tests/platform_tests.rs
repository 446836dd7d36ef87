//! Platform-specific tests for the common crate

use common::platform::{ensure_config_directory, get_default_config_dir, get_default_config_path};

#[test]
fn test_default_config_dir_names_app() {
    let path = get_default_config_dir();
    if let Some(path_str) = path.to_str() {
        assert!(path_str.contains("HowAreThings"));
    }
}

#[test]
fn test_default_config_path_is_settings_file() {
    let path = get_default_config_path();
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("settings.toml"));
    assert_eq!(path.parent(), Some(get_default_config_dir().as_path()));
}

#[test]
#[cfg(target_os = "linux")]
fn test_linux_path_format() {
    let path = get_default_config_dir();
    if let Some(path_str) = path.to_str() {
        // Should contain .config or an XDG path
        assert!(path_str.contains(".config") || path_str.contains("HowAreThings"));
    }
}

#[test]
fn test_ensure_config_directory() {
    use tempfile::TempDir;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("HowAreThings");

    assert!(!dir.exists());
    ensure_config_directory(&dir).unwrap();
    assert!(dir.is_dir());

    // Idempotent
    ensure_config_directory(&dir).unwrap();
}
