//! Prompt and challenge generation: sample a template, then render it.
//!
//! No history is kept; repeated calls may return the same template.

use tracing::{info, instrument};

use crate::domain::OutputForm;
use crate::render::{Rendered, Renderer};
use crate::select::Selector;

pub struct Generator<'a> {
  selector: Selector<'a>,
  renderer: Renderer,
}

impl<'a> Generator<'a> {
  pub fn new(selector: Selector<'a>, renderer: Renderer) -> Self {
    Self { selector, renderer }
  }

  #[instrument(level = "debug", skip(self))]
  pub fn generate_prompt(&self, theme: Option<&str>, form: OutputForm) -> Rendered {
    let prompt = self.selector.pick_by_theme(theme);
    info!(target: "lateral", requested = theme.unwrap_or("<random>"), id = %prompt.id, "Prompt generated");
    self.renderer.prompt(prompt, form)
  }

  #[instrument(level = "debug", skip(self))]
  pub fn generate_challenge(&self, difficulty: &str, form: OutputForm) -> Rendered {
    let challenge = self.selector.pick_by_difficulty(difficulty);
    info!(target: "lateral", %difficulty, id = %challenge.id, "Challenge generated");
    self.renderer.challenge(challenge, form)
  }
}
