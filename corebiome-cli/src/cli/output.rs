/// Colored status lines on stderr, keeping stdout for reports
use colored::*;

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow(), msg.yellow());
}

pub fn info(msg: &str) {
    eprintln!("{} {}", "ℹ".blue(), msg);
}

pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg.green());
}
