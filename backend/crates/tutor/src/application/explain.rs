//! Explain Use Case
//!
//! Wraps the question in a fixed instructional prompt and relays the
//! model's answer. The question is embedded verbatim (beyond trimming);
//! hardening the prompt against injection is a non-goal here.

use std::sync::Arc;

use crate::error::{TutorError, TutorResult};

/// Fixed instructional prompt; `{question}` is the trimmed user input
const PROMPT_PREFIX: &str = "Explain the following concept in a very simple way, like you're \
talking to a middle school student. Keep the explanation concise and easy to understand. \
The concept is: '";

/// Substituted when the model returns empty output
const EMPTY_OUTPUT_FALLBACK: &str =
    "Sorry, I couldn't generate an explanation for that. Please try another question.";

/// Generative model seam
#[trait_variant::make(ExplanationModel: Send)]
pub trait LocalExplanationModel {
    /// One prompt in, one completion out
    async fn generate(&self, prompt: &str) -> TutorResult<String>;
}

/// Build the full prompt for a question
pub fn build_prompt(question: &str) -> String {
    format!("{}{}'", PROMPT_PREFIX, question)
}

/// Explain use case
pub struct ExplainUseCase<M>
where
    M: ExplanationModel,
{
    model: Arc<M>,
}

impl<M> ExplainUseCase<M>
where
    M: ExplanationModel,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    pub async fn execute(&self, question: &str) -> TutorResult<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(TutorError::EmptyQuestion);
        }

        let prompt = build_prompt(question);
        let output = self.model.generate(&prompt).await?;

        if output.trim().is_empty() {
            return Ok(EMPTY_OUTPUT_FALLBACK.to_string());
        }

        Ok(output)
    }
}
