use crate::discovery::JdkEntry;
use crate::platform::with_executable_extension;
use crate::version::parse_major_version;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Oldest major version downstream tooling still runs on.
pub const MIN_JDK_VERSION: u32 = 11;

const NOT_JDK_HINT: &str = "not pointing to a JDK";
const TRAILING_BIN_HINT: &str = "try removing the trailing 'bin' segment from the path";

/// Decorate each enumerated entry with its verdict and hint.
///
/// Entries are checked independently, in order. Nothing in here fails
/// observably; every failure mode collapses into an invalid record.
pub fn validate_entries(entries: &mut [JdkEntry]) {
    for entry in entries.iter_mut() {
        validate_entry(entry);
    }
}

fn validate_entry(entry: &mut JdkEntry) {
    let Some(path) = entry.path.as_deref().filter(|p| !p.is_empty()) else {
        entry.is_valid = Some(false);
        entry.hint = Some(NOT_JDK_HINT.to_string());
        return;
    };

    let root = expand_home(path);

    let javac = root.join("bin").join(with_executable_extension("javac"));
    if !javac.exists() {
        debug!("{}: no compiler binary under {}", entry.name, root.display());
        let mut hint = NOT_JDK_HINT.to_string();
        // Common mistake: configuring <jdk>/bin instead of its parent
        if ends_with_bin(&root) {
            hint.push_str("; ");
            hint.push_str(TRAILING_BIN_HINT);
        }
        entry.is_valid = Some(false);
        entry.hint = Some(hint);
        return;
    }

    let major = read_major_version(&root);
    if major < MIN_JDK_VERSION {
        entry.is_valid = Some(false);
        entry.hint = Some(format!(
            "the required minimum JDK version is {MIN_JDK_VERSION}, but version {major} was detected"
        ));
    } else {
        debug!("{}: JDK {major} at {}", entry.name, root.display());
        entry.is_valid = Some(true);
        entry.hint = None;
    }
}

/// Expand a leading `~` to the invoking user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    PathBuf::from(path)
}

fn ends_with_bin(root: &Path) -> bool {
    root.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.eq_ignore_ascii_case("bin"))
}

/// Run `bin/java -version` under `root` and parse the banner from stderr.
/// Execution failure reads as version 0, never as an error.
fn read_major_version(root: &Path) -> u32 {
    let java = root.join("bin").join(with_executable_extension("java"));
    match Command::new(&java).arg("-version").output() {
        Ok(output) => parse_major_version(&String::from_utf8_lossy(&output.stderr)),
        Err(e) => {
            debug!("Failed to execute {}: {e}", java.display());
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::SourceKind;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn entry_with_path(path: Option<&str>) -> JdkEntry {
        JdkEntry {
            name: "JAVA_HOME".to_string(),
            path: path.map(str::to_string),
            source: SourceKind::EnvironmentVariable,
            action_hint: None,
            is_valid: None,
            hint: None,
        }
    }

    /// Lay out `<root>/bin/javac` plus a `java` stub that prints `banner` to
    /// stderr, the way a real JDK does.
    #[cfg(unix)]
    fn create_mock_jdk(root: &Path, banner: &str) {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = root.join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("javac"), "mock executable").unwrap();

        let java_path = bin_dir.join("java");
        fs::write(&java_path, format!("#!/bin/sh\necho '{banner}' >&2\n")).unwrap();
        let mut perms = fs::metadata(&java_path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&java_path, perms).unwrap();
    }

    #[test]
    fn test_empty_path_is_invalid() {
        for path in [None, Some("")] {
            let mut entry = entry_with_path(path);
            validate_entry(&mut entry);
            assert_eq!(entry.is_valid, Some(false));
            assert_eq!(entry.hint.as_deref(), Some(NOT_JDK_HINT));
        }
    }

    #[test]
    fn test_missing_compiler_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        // Runtime binary alone does not make a JDK
        let jre_dir = temp_dir.path().join("jre");
        let bin_dir = jre_dir.join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("java"), "mock executable").unwrap();

        let mut entry = entry_with_path(jre_dir.to_str());
        validate_entry(&mut entry);

        assert_eq!(entry.is_valid, Some(false));
        let hint = entry.hint.unwrap();
        assert!(hint.contains(NOT_JDK_HINT));
        assert!(!hint.contains("bin' segment"));
    }

    #[test]
    fn test_trailing_bin_path_gets_suggestion() {
        let temp_dir = TempDir::new().unwrap();
        let bin_dir = temp_dir.path().join("jdk-17").join("bin");
        fs::create_dir_all(&bin_dir).unwrap();

        let mut entry = entry_with_path(bin_dir.to_str());
        validate_entry(&mut entry);

        assert_eq!(entry.is_valid, Some(false));
        let hint = entry.hint.unwrap();
        assert!(hint.contains(NOT_JDK_HINT));
        assert!(hint.contains(TRAILING_BIN_HINT));
    }

    #[test]
    fn test_trailing_bin_check_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let bin_dir = temp_dir.path().join("jdk-17").join("BIN");
        fs::create_dir_all(&bin_dir).unwrap();

        let mut entry = entry_with_path(bin_dir.to_str());
        validate_entry(&mut entry);

        assert!(entry.hint.unwrap().contains(TRAILING_BIN_HINT));
    }

    #[cfg(unix)]
    #[test]
    fn test_modern_jdk_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        create_mock_jdk(temp_dir.path(), "openjdk version \"17.0.2\" 2022-01-18");

        let mut entry = entry_with_path(temp_dir.path().to_str());
        validate_entry(&mut entry);

        assert_eq!(entry.is_valid, Some(true));
        assert_eq!(entry.hint, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_legacy_jdk_is_rejected_with_versions_in_hint() {
        let temp_dir = TempDir::new().unwrap();
        create_mock_jdk(temp_dir.path(), "java version \"1.8.0_292\"");

        let mut entry = entry_with_path(temp_dir.path().to_str());
        validate_entry(&mut entry);

        assert_eq!(entry.is_valid, Some(false));
        let hint = entry.hint.unwrap();
        assert!(hint.contains("11"));
        assert!(hint.contains('8'));
    }

    #[cfg(unix)]
    #[test]
    fn test_unrunnable_runtime_reads_as_version_zero() {
        let temp_dir = TempDir::new().unwrap();
        let bin_dir = temp_dir.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("javac"), "mock executable").unwrap();
        // java exists but is not executable
        fs::write(bin_dir.join("java"), "mock executable").unwrap();

        let mut entry = entry_with_path(temp_dir.path().to_str());
        validate_entry(&mut entry);

        assert_eq!(entry.is_valid, Some(false));
        let hint = entry.hint.unwrap();
        assert!(hint.contains("11"));
        assert!(hint.contains('0'));
    }

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~/jdk-17"), home.join("jdk-17"));
        assert_eq!(expand_home("~"), home.join(""));
        assert_eq!(expand_home("/opt/jdk-17"), PathBuf::from("/opt/jdk-17"));
    }

    #[test]
    fn test_ends_with_bin() {
        assert!(ends_with_bin(Path::new("/opt/jdk/bin")));
        assert!(ends_with_bin(Path::new("/opt/jdk/Bin")));
        assert!(!ends_with_bin(Path::new("/opt/jdk")));
        assert!(!ends_with_bin(Path::new("/opt/jdk/bindings")));
    }
}
