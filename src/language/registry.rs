//! Language identifier normalization and alias resolution.
//!
//! Normalization is purely syntactic and always succeeds; an identifier that
//! normalizes to a code no strategy or model exists for is rejected later, at
//! catalog lookup. Aliases map a language onto a better-resourced close
//! relative and are resolved separately so that callers can still see which
//! language was originally requested.

/// ISO 639-1 codes mapped to the canonical language names used as resource
/// and catalog keys.
const ISO_CODES: &[(&str, &str)] = &[
    ("cs", "czech"),
    ("de", "german"),
    ("en", "english"),
    ("es", "spanish"),
    ("fr", "french"),
    ("he", "hebrew"),
    ("it", "italian"),
    ("iw", "hebrew"),
    ("ja", "japanese"),
    ("ko", "korean"),
    ("nl", "dutch"),
    ("pt", "portuguese"),
    ("sk", "slovak"),
    ("vi", "vietnamese"),
    ("zh", "chinese"),
];

/// Languages segmented with the strategies of a close, better-resourced
/// relative.
const ALIASES: &[(&str, &str)] = &[("slovak", "czech")];

/// Normalize a free-form language identifier to a canonical code.
///
/// Lowercases and trims the input, unifies `_`/`-` separators, strips a
/// regional variant (`en-US` → `en`, `pt_BR` → `pt`) and maps ISO 639-1 codes
/// to canonical language names. Identifiers with no ISO mapping pass through
/// unchanged, so `"english"` and `"EN"` normalize identically.
///
/// # Examples
///
/// ```
/// use lexis::language::normalize;
///
/// assert_eq!(normalize("EN-us"), "english");
/// assert_eq!(normalize(" German "), "german");
/// assert_eq!(normalize("zh_CN"), "chinese");
/// ```
pub fn normalize(identifier: &str) -> String {
    let lowered = identifier.trim().to_lowercase().replace('_', "-");
    let base = lowered.split('-').next().unwrap_or("").to_string();

    for (iso, canonical) in ISO_CODES {
        if base == *iso {
            return (*canonical).to_string();
        }
    }
    base
}

/// Resolve a canonical code through the alias table.
///
/// Returns the input unchanged when no alias is registered.
pub fn resolve_alias(code: &str) -> &str {
    for (alias, target) in ALIASES {
        if code == *alias {
            return target;
        }
    }
    code
}
