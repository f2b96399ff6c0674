//! Character budget for human-readable output. Never applied to structured output.

pub const DEFAULT_CHARACTER_LIMIT: usize = 4000;

/// Appended to truncated text. Counts against the budget.
pub const TRUNCATION_NOTICE: &str = "\n\n... [Content truncated. Response exceeded character limit.]";

/// Characters the notice occupies.
pub fn notice_len() -> usize {
  TRUNCATION_NOTICE.chars().count()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthGovernor {
  budget: usize,
}

impl Default for LengthGovernor {
  fn default() -> Self { Self::new(DEFAULT_CHARACTER_LIMIT) }
}

impl LengthGovernor {
  pub fn new(budget: usize) -> Self { Self { budget } }

  /// Length is counted in chars, so the cut never splits a code point.
  pub fn bound(&self, text: String) -> String {
    let len = text.chars().count();
    if len <= self.budget {
      return text;
    }
    let keep = self.budget.saturating_sub(notice_len());
    let out = if keep == 0 {
      // Budget no larger than the notice itself; config validation rejects this.
      TRUNCATION_NOTICE.chars().take(self.budget).collect()
    } else {
      let mut out: String = text.chars().take(keep).collect();
      out.push_str(TRUNCATION_NOTICE);
      out
    };
    tracing::debug!(target: "lateral", original_chars = len, budget = self.budget, "Human-readable output truncated");
    out
  }
}
