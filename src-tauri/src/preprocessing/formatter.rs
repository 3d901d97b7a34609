use serde::{Deserialize, Deserializer, Serialize};

use super::router::{CategoryChoice, Locale, NO_IMAGE_LABEL};

/// What the user typed into the specimen form.
///
/// Every field is optional on the wire; a missing or `null` field becomes an
/// empty string (or the no-image sentinel for `image_label`) so the template
/// never sees a hole.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecimenDescription {
    #[serde(deserialize_with = "null_as_empty")]
    pub color: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub size: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub weight: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub details: String,
    #[serde(deserialize_with = "null_as_no_image")]
    pub image_label: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_no_image<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| NO_IMAGE_LABEL.to_string()))
}

impl Default for SpecimenDescription {
    fn default() -> Self {
        Self {
            color: String::new(),
            size: String::new(),
            weight: String::new(),
            details: String::new(),
            image_label: NO_IMAGE_LABEL.to_string(),
        }
    }
}

impl SpecimenDescription {
    /// Swaps the default no-image sentinel for the one matching `locale`.
    /// A real file name is left alone.
    pub fn localize_sentinel(mut self, locale: Locale) -> Self {
        if self.image_label == NO_IMAGE_LABEL {
            self.image_label = locale.no_image_label().to_string();
        }
        self
    }
}

pub fn build_specimen_prompt(description: &SpecimenDescription) -> String {
    build_specimen_prompt_in(Locale::English, description)
}

pub fn build_specimen_prompt_in(locale: Locale, description: &SpecimenDescription) -> String {
    let SpecimenDescription {
        color,
        size,
        weight,
        details,
        image_label,
    } = description;

    match locale {
        Locale::English => format!(
            "I have found a stone with the following properties:\n\
             Image: {image_label}\n\
             Color: {color}\n\
             Size: {size}\n\
             Weight: {weight}\n\
             Other details: {details}\n\
             Give an assessment of what type of stone this might be, \
             and suggest tests for further identification."
        ),
        Locale::Norwegian => format!(
            "Jeg har funnet en stein med følgende egenskaper:\n\
             Bilde: {image_label}\n\
             Farge: {color}\n\
             Størrelse: {size}\n\
             Vekt: {weight}\n\
             Andre detaljer: {details}\n\
             Gi en vurdering av hvilken type stein dette kan være, \
             og foreslå tester for videre identifisering."
        ),
    }
}

pub fn build_category_prompt(choice: CategoryChoice) -> String {
    build_category_prompt_in(Locale::English, choice)
}

pub fn build_category_prompt_in(locale: Locale, choice: CategoryChoice) -> String {
    let prompt = match (locale, choice) {
        (Locale::English, CategoryChoice::TerrestrialRocks) => {
            "Give an overview of terrestrial rocks. \
             Explain that they are divided into igneous, sedimentary and metamorphic rocks, \
             and give examples such as granite, basalt, sandstone and marble."
        }
        (Locale::English, CategoryChoice::Meteorites) => {
            "Give an overview of meteorites. \
             Explain that they are rocks from space with subcategories \
             such as stony, iron and stony-iron meteorites."
        }
        (Locale::English, CategoryChoice::Gemstones) => {
            "Give an overview of gemstones. \
             Explain that they are specially selected stones with high aesthetic and economic value."
        }
        (Locale::Norwegian, CategoryChoice::TerrestrialRocks) => {
            "Gi en oversikt over terrestriske bergarter. \
             Forklar at de deles inn i magmatiske, sedimentære og metamorfe bergarter, \
             og gi eksempler som granitt, basalt, sandstein og marmor."
        }
        (Locale::Norwegian, CategoryChoice::Meteorites) => {
            "Gi en oversikt over meteoritter. \
             Forklar at de er bergarter fra verdensrommet med underkategorier \
             som stein-, jern- og stein-jern meteoritter."
        }
        (Locale::Norwegian, CategoryChoice::Gemstones) => {
            "Gi en oversikt over edelstener. \
             Forklar at de er spesielt utvalgte steiner med høy estetisk og økonomisk verdi."
        }
    };
    prompt.to_string()
}
