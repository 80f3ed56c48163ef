/// Escape a string for safe use in shell single quotes
/// Converts: foo'bar -> 'foo'\''bar'
///
/// # Examples
///
/// ```
/// use c9ai::utils::shell::escape;
///
/// assert_eq!(escape("hello"), "'hello'");
/// assert_eq!(escape("foo'bar"), "'foo'\\''bar'");
/// ```
pub fn escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Quote an argument only when the shell would otherwise split or expand it.
///
/// ```
/// use c9ai::utils::shell::quote_if_needed;
///
/// assert_eq!(quote_if_needed("report.pdf"), "report.pdf");
/// assert_eq!(quote_if_needed("my report.pdf"), "'my report.pdf'");
/// assert_eq!(quote_if_needed(""), "''");
/// ```
pub fn quote_if_needed(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '%' | '+' | ',' | '@'));
    if plain {
        s.to_string()
    } else {
        escape(s)
    }
}

/// Render a program and its arguments as a single readable command line.
pub fn display_command(program: &str, args: &[impl AsRef<str>]) -> String {
    std::iter::once(quote_if_needed(program))
        .chain(args.iter().map(|arg| quote_if_needed(arg.as_ref())))
        .collect::<Vec<_>>()
        .join(" ")
}
