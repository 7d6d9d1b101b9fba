use console::style;

/// Styled status messages on stderr
///
/// Stdout is reserved for command results so `$(branchslug name ...)` stays clean.
#[derive(Debug, Default)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        eprintln!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn detail(&self, label: &str, value: &str) {
        eprintln!("  {:<10} {}", style(label).dim(), value);
    }

    /// Print a command result to stdout, unstyled
    pub fn result(&self, value: &str) {
        println!("{}", value);
    }
}
