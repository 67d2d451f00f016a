//! One-line user messages with an icon and a colored lead.
//! Diagnostics belong to `tracing`; these are for the person at the terminal.

use ansi_term::{Colour, Style};
use std::fmt;

fn lead(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", lead(Colour::Blue, "ℹ️"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", lead(Colour::Green, "✅"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", lead(Colour::Yellow, "⚠️"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", lead(Colour::Red, "❌"), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let style = Style::new().bold().fg(Colour::Blue);
    println!("{}\n", style.paint(format!("====================== {msg}")));
}
