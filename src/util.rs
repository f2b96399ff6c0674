//! Small utility helpers used across modules.

use std::fmt::Write as _;

/// Append `## heading\nbody\n\n`.
pub fn push_section(out: &mut String, heading: &str, body: &str) {
  let _ = write!(out, "## {heading}\n{body}\n\n");
}

/// Append `## heading` followed by `1. item` lines, order preserved.
pub fn push_numbered(out: &mut String, heading: &str, items: &[String]) {
  let _ = writeln!(out, "## {heading}");
  for (i, item) in items.iter().enumerate() {
    let _ = writeln!(out, "{}. {}", i + 1, item);
  }
  out.push('\n');
}

/// Log-safe truncation for large strings (char based, never splits a code point).
pub fn trunc_for_log(s: &str, max: usize) -> String {
  let total = s.chars().count();
  if total <= max {
    s.to_string()
  } else {
    format!("{}… ({} chars total)", s.chars().take(max).collect::<String>(), total)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numbered_list_keeps_order() {
    let mut out = String::new();
    push_numbered(&mut out, "Steps", &["first".to_string(), "second".to_string()]);
    assert_eq!(out, "## Steps\n1. first\n2. second\n\n");
  }

  #[test]
  fn log_truncation_is_char_safe() {
    assert_eq!(trunc_for_log("abc", 5), "abc");
    assert_eq!(trunc_for_log("ääää", 2), "ää… (4 chars total)");
  }
}
