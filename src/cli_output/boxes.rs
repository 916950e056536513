//! Simple line-based CLI output utilities.

/// Line width for separators.
pub const LINE_WIDTH: usize = 60;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const LOCKED: &str = "🔒";
    pub const EXPANDED: &str = "▾";
    pub const COLLAPSED: &str = "▸";
    pub const PENDING: &str = "·";
}

/// Format the main header.
///
/// ```text
/// RUST FOR BEGINNERS
/// ════════════════════════════════════════════════════════════
/// ```
pub fn header(title: &str) -> String {
    format!("{}\n{}", title, "═".repeat(LINE_WIDTH))
}

/// Format a section title.
///
/// ```text
/// MODULE 1: BASICS
/// ────────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) -> String {
    format!("{}\n{}", title, "─".repeat(LINE_WIDTH))
}

/// Format an indented status line.
///
/// ```text
///   ✓ Enrolled in c1
/// ```
pub fn step_line(icon: &str, message: &str) -> String {
    format!("  {} {}", icon, message)
}

/// Format a `label: value` row with the value column aligned.
pub fn field(label: &str, value: &str) -> String {
    format!("  {:<12} {}", format!("{}:", label), value)
}

/// Format a ten-cell progress bar with its percentage.
///
/// ```text
/// [██████░░░░] 60%
/// ```
pub fn progress_bar(percentage: u8) -> String {
    let pct = percentage.min(100) as usize;
    let filled = (pct + 5) / 10;
    format!("[{}{}] {}%", "█".repeat(filled), "░".repeat(10 - filled), pct)
}

/// Print the main header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", header(title));
    println!();
}

/// Print a line within a section.
pub fn print_step_line(icon: &str, message: &str) {
    println!("{}", step_line(icon, message));
}

/// Print troubleshooting lines.
pub fn print_troubleshoot(lines: &[&str]) {
    println!();
    for line in lines {
        println!("    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_rule() {
        let text = header("COURSES");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "COURSES");
        assert_eq!(lines[1].chars().count(), LINE_WIDTH);
    }

    #[test]
    fn test_step_line() {
        assert_eq!(step_line(icons::SUCCESS, "done"), "  ✓ done");
    }

    #[test]
    fn test_field_alignment() {
        assert_eq!(field("Level", "Beginner"), "  Level:       Beginner");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "[░░░░░░░░░░] 0%");
        assert_eq!(progress_bar(33), "[███░░░░░░░] 33%");
        assert_eq!(progress_bar(100), "[██████████] 100%");
        assert_eq!(progress_bar(250), "[██████████] 100%");
    }
}
