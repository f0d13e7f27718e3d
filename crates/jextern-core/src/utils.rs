/// Last segment of a qualified name.
///
/// Both `.` (package/type nesting) and `#` (member of a type) separate segments.
///
/// # Examples
/// ```
/// use jextern_core::utils::simple_name;
/// assert_eq!(simple_name("com.example.Outer.Inner"), "Inner");
/// assert_eq!(simple_name("com.example.Outer#value"), "value");
/// assert_eq!(simple_name("Plain"), "Plain");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit(['.', '#'])
        .next()
        .unwrap_or(qualified)
}

/// Convert a snake_case or kebab-case kind name to the upper-case tag used
/// in diagnostic sentinels.
///
/// # Examples
/// ```
/// use jextern_core::utils::to_sentinel_tag;
/// assert_eq!(to_sentinel_tag("unknown_block_tag"), "UNKNOWNBLOCKTAG");
/// assert_eq!(to_sentinel_tag("non-sealed"), "NONSEALED");
/// ```
pub fn to_sentinel_tag(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

