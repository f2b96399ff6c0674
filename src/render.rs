//! Dual-form rendering: pretty JSON (structured) and Markdown (human-readable).
//!
//! Both forms carry the same field values. Only the Markdown form goes through the
//! `LengthGovernor`; structured output is never cut, so it always parses.
//! Puzzle listings redact unconditionally.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::domain::{ChallengeTemplate, OutputForm, PromptTemplate, Puzzle, Technique};
use crate::governor::LengthGovernor;
use crate::redact::{redact, PuzzleView};
use crate::util::{push_numbered, push_section};

/// Final output of an operation. `structured` is set only for the structured form.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Rendered {
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub structured: Option<Value>,
}

#[derive(Serialize)]
struct PuzzleList<'a> {
  puzzles: Vec<PuzzleView<'a>>,
  count: usize,
}

#[derive(Serialize)]
struct TechniqueList<'a> {
  techniques: &'a [Technique],
  count: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
  governor: LengthGovernor,
}

impl Renderer {
  pub fn new(governor: LengthGovernor) -> Self { Self { governor } }

  pub fn puzzle(&self, view: &PuzzleView<'_>, form: OutputForm) -> Rendered {
    self.finish(form, view, || {
      let mut out = format!("# Lateral Thinking Puzzle: {}\n\n", view.id);
      let _ = write!(out, "**Category:** {}\n**Difficulty:** {}\n\n", view.category, view.difficulty);
      push_section(&mut out, "Question", view.question);
      push_numbered(&mut out, "Hints", view.hints);
      push_section(&mut out, "Thinking Approach", view.thinking_approach);
      push_section(&mut out, "Answer", view.answer);
      push_section(&mut out, "Explanation", view.explanation);
      out
    })
  }

  /// Listings never reveal spoilers, whatever the caller asked for.
  pub fn puzzle_list(&self, puzzles: &[&Puzzle], form: OutputForm) -> Rendered {
    let list = PuzzleList {
      puzzles: puzzles.iter().map(|p| redact(p, false)).collect(),
      count: puzzles.len(),
    };
    self.finish(form, &list, || {
      let mut out = format!("# Lateral Thinking Puzzles ({} found)\n\n", list.count);
      for (i, p) in list.puzzles.iter().enumerate() {
        let _ = writeln!(out, "## {}. {}", i + 1, p.id);
        let _ = write!(out, "**Category:** {} | **Difficulty:** {}\n\n", p.category, p.difficulty);
        let _ = write!(out, "**Question:** {}\n\n", p.question);
        out.push_str("**Hints:**\n");
        for (j, hint) in p.hints.iter().enumerate() {
          let _ = writeln!(out, "{}. {}", j + 1, hint);
        }
        let _ = write!(out, "\n**Thinking Approach:** {}\n\n---\n\n", p.thinking_approach);
      }
      out.push_str("_Answers and explanations are hidden in listings. Use get_puzzle to reveal them._\n");
      out
    })
  }

  pub fn technique(&self, t: &Technique, form: OutputForm) -> Rendered {
    self.finish(form, t, || {
      let mut out = format!("# Lateral Thinking Technique: {}\n\n", t.name);
      push_section(&mut out, "Description", &t.description);
      push_section(&mut out, "When to Use", &t.when_to_use);
      push_numbered(&mut out, "Steps", &t.steps);
      push_section(&mut out, "Example", &t.example);
      out
    })
  }

  pub fn technique_list(&self, techniques: &[Technique], form: OutputForm) -> Rendered {
    let list = TechniqueList { techniques, count: techniques.len() };
    self.finish(form, &list, || {
      let mut out = format!("# Lateral Thinking Techniques ({})\n\n", list.count);
      for (i, t) in techniques.iter().enumerate() {
        let _ = writeln!(out, "## {}. {}", i + 1, t.name);
        let _ = write!(out, "{}\n\n**When to use:** {}\n\n**Steps:**\n", t.description, t.when_to_use);
        for (j, step) in t.steps.iter().enumerate() {
          let _ = writeln!(out, "{}. {}", j + 1, step);
        }
        let _ = write!(out, "\n**Example:** {}\n\n---\n\n", t.example);
      }
      out
    })
  }

  pub fn prompt(&self, p: &PromptTemplate, form: OutputForm) -> Rendered {
    self.finish(form, p, || {
      let mut out = format!("# Creative Thinking Prompt: {}\n\n**ID:** {}\n\n", p.title, p.id);
      push_section(&mut out, "The Prompt", &p.prompt);
      push_section(&mut out, "Context", &p.context);
      push_numbered(&mut out, "Suggested Approaches", &p.suggested_approaches);
      if let Some(example) = &p.example_response {
        push_section(&mut out, "Example Response", example);
      }
      out
    })
  }

  pub fn challenge(&self, c: &ChallengeTemplate, form: OutputForm) -> Rendered {
    self.finish(form, c, || {
      let mut out = format!("# Brainstorming Challenge: {}\n\n", c.id);
      push_section(&mut out, "Challenge", &c.challenge);
      push_numbered(&mut out, "Constraints", &c.constraints);
      push_numbered(&mut out, "Success Criteria", &c.success_criteria);
      push_numbered(&mut out, "Sample Solutions", &c.sample_solutions);
      out
    })
  }

  fn finish<T: Serialize + ?Sized>(&self, form: OutputForm, value: &T, markdown: impl FnOnce() -> String) -> Rendered {
    match form {
      OutputForm::HumanReadable => Rendered {
        text: self.governor.bound(markdown().trim_end().to_string() + "\n"),
        structured: None,
      },
      OutputForm::Structured => match serde_json::to_value(value) {
        Ok(v) => {
          let text = serde_json::to_string_pretty(&v).unwrap_or_else(|_| v.to_string());
          Rendered { text, structured: Some(v) }
        }
        Err(e) => {
          error!(target: "lateral", error = %e, "Structured rendering failed");
          Rendered {
            text: json!({ "error": format!("Serialization error: {}", e) }).to_string(),
            structured: None,
          }
        }
      },
    }
  }
}
