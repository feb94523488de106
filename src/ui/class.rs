//! Class-string combining for component styling.

/// Join class fragments into a single `class` attribute value.
///
/// Each fragment is split on whitespace, so leading/trailing and repeated
/// spaces disappear and empty fragments contribute nothing. Order is kept
/// as given; duplicates are not removed.
///
/// # Example
///
/// ```rust
/// use status_kit::ui::cn;
///
/// assert_eq!(cn(["h-4 w-4", "", "  text-primary "]), "h-4 w-4 text-primary");
/// ```
pub fn cn<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        for token in part.as_ref().split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
    out
}
