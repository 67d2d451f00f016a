//! ANSI color helper utilities for terminal output.
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Colors handed out to people, by position in the sorted people list.
pub const PERSON_PALETTE: [Colour; 8] = [
    Colour::RGB(59, 130, 246),  // blue
    Colour::RGB(16, 185, 129),  // emerald
    Colour::RGB(139, 92, 246),  // violet
    Colour::RGB(245, 158, 11),  // amber
    Colour::RGB(244, 63, 94),   // rose
    Colour::RGB(6, 182, 212),   // cyan
    Colour::RGB(217, 70, 239),  // fuchsia
    Colour::RGB(132, 204, 22),  // lime
];

/// Stable color for `person`: its index in `sorted_people` modulo the palette.
/// Unknown people fall back to the first color.
pub fn person_color(person: &str, sorted_people: &[String]) -> Colour {
    let idx = sorted_people
        .iter()
        .position(|p| p == person)
        .unwrap_or(0);
    PERSON_PALETTE[idx % PERSON_PALETTE.len()]
}

pub fn paint_person(person: &str, sorted_people: &[String]) -> String {
    person_color(person, sorted_people)
        .bold()
        .paint(person)
        .to_string()
}

/// Grey for placeholders ("--:--", "0m", empty), untouched otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "0m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
