//! Shared helpers for the demonstration programs.

use colored::*;

/// Print a section banner introducing the next scenario.
#[allow(unused)]
pub fn banner(title: &str) {
    println!();
    let line = format!("===== {} =====", title);
    println!("{}", line.as_str().bold().blue());
}

/// Print an explanatory aside, dimmed.
#[allow(unused)]
pub fn aside(text: &str) {
    println!("{}", text.dimmed());
}
