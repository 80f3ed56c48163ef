use crate::error::Result;
use std::io::{self, Write};

/// Ask a yes/no question on the terminal. Empty input picks `default`.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = prompt_line(&format!("{} {}: ", question, hint))?;
    Ok(parse_yes_no(&answer, default))
}

/// Print `prompt` and read one trimmed line from stdin.
///
/// End of input reads as an empty answer.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn parse_yes_no(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

/// Section title followed by an underline of `=`.
pub fn heading(title: &str, width: usize) {
    println!("{}", title);
    println!("{}", "=".repeat(width));
}
