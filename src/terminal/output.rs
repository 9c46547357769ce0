//! Terminal output utilities.
//!
//! Box drawing, number formatting and the strength report.

use crossterm::style::Stylize;

use passforge::pass::strength::{Strength, entropy_bits};
use passforge::pass::{GenerationConfig, Pool};
use passforge::rand::EntropySource;

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let mut out = Vec::with_capacity(lines.len().max(1));
    let first = lines.first().map(String::as_str).unwrap_or("");
    out.push(box_line(&format!("{:<flag_col$}{}", flag, first)));
    for line in lines.iter().skip(1) {
        out.push(box_line(&format!("{}{}", " ".repeat(flag_col), line)));
    }
    out
}

/// Display width ignoring ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Report
// ============================================================================

/// Boxed entropy summary for a config.
pub fn strength_report(config: &GenerationConfig, source: EntropySource) -> Vec<String> {
    let bits = entropy_bits(config);
    let strength = Strength::from_bits(bits);
    let pool = Pool::build(&config.classes);

    let rating = match strength {
        Strength::Weak => strength.to_string().red().to_string(),
        Strength::Fair => strength.to_string().yellow().to_string(),
        Strength::Strong | Strength::VeryStrong => strength.to_string().green().to_string(),
    };

    let classes = config
        .classes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        box_top("Entropy"),
        box_line(&format!("{:.1} bits ({})", bits, rating)),
        box_line(&format!(
            "Charset: {} chars • Classes: {}",
            format_number(pool.distinct_len()),
            classes
        )),
        box_line(&format!(
            "Length: {}{} • Source: {}",
            config.length,
            if config.unique { " (unique)" } else { "" },
            source.describe()
        )),
        box_bottom(),
    ]
}
