//! Platform detection utilities for the entire application.
//!
//! Maps the running system to the canonical OS and architecture tokens the
//! release-metadata API expects, and provides the executable-suffix helpers
//! used when probing JDK installations.

/// Detect the current operating system.
///
/// Maps Rust's target OS to the release API's OS naming:
/// - `linux` → `"linux"`
/// - `windows` → `"windows"`
/// - `macos` → `"mac"`
/// - Others → `"unknown"`
pub fn get_current_os() -> String {
    #[cfg(target_os = "linux")]
    return "linux".to_string();

    #[cfg(target_os = "windows")]
    return "windows".to_string();

    #[cfg(target_os = "macos")]
    return "mac".to_string();

    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    return "unknown".to_string();
}

/// Detect the current system architecture.
///
/// Maps Rust's target architecture to the release API's naming. 32-bit x86
/// is reported as `"x32"`, distinct from 64-bit `"x64"`:
/// - `x86_64` → `"x64"`
/// - `x86` → `"x32"`
/// - `aarch64` → `"aarch64"`
/// - `arm` → `"arm"`
/// - `powerpc64` → `"ppc64le"` (little endian) or `"ppc64"` (big endian)
/// - `s390x` → `"s390x"`
/// - Others → `"unknown"`
pub fn get_current_architecture() -> String {
    #[cfg(target_arch = "x86_64")]
    return "x64".to_string();

    #[cfg(target_arch = "x86")]
    return "x32".to_string();

    #[cfg(target_arch = "aarch64")]
    return "aarch64".to_string();

    #[cfg(target_arch = "arm")]
    return "arm".to_string();

    #[cfg(target_arch = "powerpc64")]
    {
        #[cfg(target_endian = "little")]
        return "ppc64le".to_string();
        #[cfg(target_endian = "big")]
        return "ppc64".to_string();
    }

    #[cfg(target_arch = "s390x")]
    return "s390x".to_string();

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "x86",
        target_arch = "aarch64",
        target_arch = "arm",
        target_arch = "powerpc64",
        target_arch = "s390x"
    )))]
    return "unknown".to_string();
}

/// Get the executable file extension for the current platform
pub fn executable_extension() -> &'static str {
    #[cfg(windows)]
    return ".exe";
    #[cfg(not(windows))]
    return "";
}

/// Add the platform-specific executable extension to a file name
pub fn with_executable_extension(name: &str) -> String {
    format!("{name}{}", executable_extension())
}
