//! Parsing of `java -version` diagnostic banners.
//!
//! The banner format varies across vendors but always carries a quoted
//! version token on the line containing the word `version`, for example:
//!
//! ```text
//! openjdk version "17.0.2" 2022-01-18
//! java version "1.8.0_292"
//! ```

/// Extract the major version number from a `java -version` banner.
///
/// Returns 0 when the banner carries no recognizable version token. Legacy
/// `1.x` version strings map to their minor component (`1.8` → 8).
pub fn parse_major_version(banner: &str) -> u32 {
    let Some(token) = extract_quoted_token(banner) else {
        return 0;
    };

    // Legacy versioning scheme: "1.8.0_292" names major version 8
    let token = token.strip_prefix("1.").unwrap_or(token);

    first_digit_run(token).unwrap_or(0)
}

/// Find the quoted token following the literal word `version`.
fn extract_quoted_token(banner: &str) -> Option<&str> {
    let rest = &banner[banner.find("version")? + "version".len()..];
    let rest = &rest[rest.find('"')? + 1..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// First run of decimal digits in `token`, if any.
fn first_digit_run(token: &str) -> Option<u32> {
    let start = token.find(|c: char| c.is_ascii_digit())?;
    let rest = &token[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}
