//! Post-install messages

use console::style;

use crate::formula::Formula;

/// Print a `==> ` headed line
pub fn ohai(message: &str) {
    if message.is_empty() {
        println!("{}", style("==>").blue().bold());
    } else {
        println!("{} {}", style("==>").blue().bold(), style(message).bold());
    }
}

/// Lines shown after install; empty when the formula has no caveats
pub fn lines(formula: &Formula) -> Vec<&str> {
    formula
        .caveats
        .as_deref()
        .map(|text| text.lines().collect())
        .unwrap_or_default()
}

pub fn print(formula: &Formula) {
    for line in lines(formula) {
        ohai(line);
    }
}
