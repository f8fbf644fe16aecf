//! Sanitizers for identifiers derived from user input

use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("identifier pattern is valid"));

/// Go reserved words; none of them can name a package
const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Turn a directory name into a usable Go package identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets an
/// underscore prefix, and a Go keyword gets an underscore suffix. Returns
/// `None` when nothing usable remains.
///
/// # Examples
/// ```
/// use maker::generation::sanitizers::sanitize_package_name;
///
/// assert_eq!(sanitize_package_name("mylib").as_deref(), Some("mylib"));
/// assert_eq!(sanitize_package_name("my-lib").as_deref(), Some("my_lib"));
/// assert_eq!(sanitize_package_name("type").as_deref(), Some("type_"));
/// ```
pub fn sanitize_package_name(dir_name: &str) -> Option<String> {
    let trimmed = dir_name.trim();
    if trimmed.is_empty() {
        return None;
    }

    let ident = NON_IDENT.replace_all(trimmed, "_");
    if ident.chars().all(|c| c == '_') {
        return None;
    }

    match ident.chars().next() {
        Some(c) if c.is_ascii_digit() => Some(format!("_{ident}")),
        _ if GO_KEYWORDS.iter().any(|k| *k == ident) => Some(format!("{ident}_")),
        _ => Some(ident.into_owned()),
    }
}
