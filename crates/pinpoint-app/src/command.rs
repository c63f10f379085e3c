/// A parsed line from the upstream command boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Locate and click the given text.
    Click(String),
    /// Re-resolve the display scale after a reconfiguration.
    Rescale,
    Quit,
    Empty,
}

/// Commands arrive as plain text of the shape `click <text>`; a bare line
/// is taken as the click target itself.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let lower = line.to_lowercase();
    match lower.as_str() {
        "exit" | "quit" => return Command::Quit,
        "rescale" => return Command::Rescale,
        _ => {}
    }

    let target = if lower.starts_with("click ") {
        line[6..].trim()
    } else {
        line
    };
    Command::Click(target.to_string())
}
