use crate::llm::{CompletionError, LLMResponse};
use crate::preprocessing::Locale;
use serde::{Deserialize, Serialize};

/// What the frontend renders: the model text, or a failure line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub ok: bool,
    pub text: String,
}

impl AnswerView {
    pub fn from_result(locale: Locale, result: &Result<String, CompletionError>) -> Self {
        Self {
            ok: result.is_ok(),
            text: render_answer_in(locale, result),
        }
    }
}

/// Only the first choice is read; its text is returned untouched.
pub fn first_choice_content(response: LLMResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyResponse)?;
    Ok(choice.message.content.unwrap_or_default())
}

pub fn render_answer(result: &Result<String, CompletionError>) -> String {
    render_answer_in(Locale::English, result)
}

pub fn render_answer_in(locale: Locale, result: &Result<String, CompletionError>) -> String {
    match result {
        Ok(text) => text.clone(),
        Err(e) => format!("{}{}", locale.error_prefix(), e),
    }
}
