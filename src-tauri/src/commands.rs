use crate::llm::{AnswerView, CompletionClient};
use crate::preprocessing::{
    build_category_prompt_in, build_specimen_prompt_in, CategoryChoice, Locale,
    SpecimenDescription,
};
use serde::Serialize;
use tauri::command;

/// Dropdown entry for the category path.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub index: u8,
    pub label: &'static str,
    pub summary: &'static str,
}

/* ---------- 1.  PIPELINE ---------- */

pub async fn answer_specimen(
    client: &CompletionClient,
    description: SpecimenDescription,
    locale: Locale,
) -> AnswerView {
    let description = description.localize_sentinel(locale);
    let prompt = build_specimen_prompt_in(locale, &description);
    let result = client.get_model_answer_in(locale, &prompt).await;
    AnswerView::from_result(locale, &result)
}

pub async fn answer_category(
    client: &CompletionClient,
    category: CategoryChoice,
    locale: Locale,
) -> AnswerView {
    let prompt = build_category_prompt_in(locale, category);
    let result = client.get_model_answer_in(locale, &prompt).await;
    AnswerView::from_result(locale, &result)
}

pub fn categories(locale: Locale) -> Vec<CategoryInfo> {
    CategoryChoice::ALL
        .iter()
        .map(|choice| CategoryInfo {
            index: choice.index(),
            label: choice.label(locale),
            summary: choice.summary(locale),
        })
        .collect()
}

/* ---------- 2.  TAURI COMMANDS ---------- */

#[command]
pub async fn identify_specimen(
    description: SpecimenDescription,
    locale: Option<Locale>,
    client: tauri::State<'_, CompletionClient>,
) -> Result<AnswerView, String> {
    Ok(answer_specimen(&client, description, locale.unwrap_or_default()).await)
}

#[command]
pub async fn explain_category(
    category: u8,
    locale: Option<Locale>,
    client: tauri::State<'_, CompletionClient>,
) -> Result<AnswerView, String> {
    let category = CategoryChoice::select_category(category)?;
    Ok(answer_category(&client, category, locale.unwrap_or_default()).await)
}

#[command]
pub fn list_categories(locale: Option<Locale>) -> Vec<CategoryInfo> {
    categories(locale.unwrap_or_default())
}
