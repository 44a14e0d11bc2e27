//! Platform auto-detection probe for JDK installations.
//!
//! Best effort only: the probe never fails, it either produces a root that
//! carries a compiler binary or nothing at all.

use crate::platform::with_executable_extension;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use which::which;

/// Probe the system for a JDK root outside of any explicit configuration.
pub fn detect_jdk_home() -> Option<PathBuf> {
    if let Some(root) = jdk_root_from_path() {
        debug!("Auto-detected JDK on PATH: {}", root.display());
        return Some(root);
    }

    let root = well_known_installations()
        .into_iter()
        .find(|root| has_compiler(root));
    if let Some(ref root) = root {
        debug!("Auto-detected JDK installation: {}", root.display());
    }
    root
}

/// Resolve `javac` on PATH back to its installation root.
fn jdk_root_from_path() -> Option<PathBuf> {
    let javac = which("javac").ok()?;
    // Resolve symlink farms (e.g. /usr/bin/javac) to the real binary
    let javac = javac.canonicalize().unwrap_or(javac);
    let root = javac.parent()?.parent()?.to_path_buf();
    has_compiler(&root).then_some(root)
}

/// Installation roots under the platform's well-known directories, scanned
/// one level deep.
fn well_known_installations() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    for base in candidate_base_dirs() {
        if !base.is_dir() {
            continue;
        }
        for dir_entry in WalkDir::new(&base)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if dir_entry.file_type().is_dir() {
                roots.push(installation_root(dir_entry.into_path()));
            }
        }
    }
    roots
}

#[cfg(target_os = "linux")]
fn candidate_base_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("/usr/lib/jvm"), PathBuf::from("/usr/java")]
}

#[cfg(target_os = "macos")]
fn candidate_base_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("/Library/Java/JavaVirtualMachines")]
}

#[cfg(target_os = "windows")]
fn candidate_base_dirs() -> Vec<PathBuf> {
    [
        "C:\\Program Files\\Java",
        "C:\\Program Files (x86)\\Java",
        "C:\\Program Files\\Eclipse Adoptium",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn candidate_base_dirs() -> Vec<PathBuf> {
    Vec::new()
}

/// Bundle layouts keep the JDK root below the installation directory.
fn installation_root(dir: PathBuf) -> PathBuf {
    #[cfg(target_os = "macos")]
    return dir.join("Contents").join("Home");
    #[cfg(not(target_os = "macos"))]
    return dir;
}

fn has_compiler(root: &Path) -> bool {
    root.join("bin")
        .join(with_executable_extension("javac"))
        .exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_has_compiler() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!has_compiler(temp_dir.path()));

        let bin_dir = temp_dir.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join(with_executable_extension("javac")), "mock").unwrap();
        assert!(has_compiler(temp_dir.path()));
    }

    #[test]
    fn test_detect_jdk_home_never_panics() {
        // Result depends on the host system; only the contract matters here
        let _ = detect_jdk_home();
    }
}
