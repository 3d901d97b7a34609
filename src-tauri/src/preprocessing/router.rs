use serde::{Deserialize, Serialize};

/// Sentinel forwarded in place of an image file name when nothing was uploaded.
pub const NO_IMAGE_LABEL: &str = "No image uploaded";
const NO_IMAGE_LABEL_NB: &str = "Ingen bilde opplastet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryChoice {
    TerrestrialRocks,
    Meteorites,
    Gemstones,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Norwegian,
}

impl CategoryChoice {
    /// Dropdown order; the index of each entry is what the frontend sends back.
    pub const ALL: [CategoryChoice; 3] = [
        CategoryChoice::TerrestrialRocks,
        CategoryChoice::Meteorites,
        CategoryChoice::Gemstones,
    ];

    pub fn select_category(category: u8) -> Result<Self, String> {
        match category {
            0 => Ok(CategoryChoice::TerrestrialRocks),
            1 => Ok(CategoryChoice::Meteorites),
            2 => Ok(CategoryChoice::Gemstones),
            _ => Err("Invalid category selected!".to_string()),
        }
    }

    pub fn index(self) -> u8 {
        match self {
            CategoryChoice::TerrestrialRocks => 0,
            CategoryChoice::Meteorites => 1,
            CategoryChoice::Gemstones => 2,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, CategoryChoice::TerrestrialRocks) => "Terrestrial rocks",
            (Locale::English, CategoryChoice::Meteorites) => "Meteorites",
            (Locale::English, CategoryChoice::Gemstones) => "Gemstones",
            (Locale::Norwegian, CategoryChoice::TerrestrialRocks) => "Terrestriske bergarter",
            (Locale::Norwegian, CategoryChoice::Meteorites) => "Meteoritter",
            (Locale::Norwegian, CategoryChoice::Gemstones) => "Edelstener",
        }
    }

    /// One-line background shown next to the dropdown.
    pub fn summary(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, CategoryChoice::TerrestrialRocks) => {
                "Rocks formed on Earth, e.g. granite, basalt, sandstone and marble."
            }
            (Locale::English, CategoryChoice::Meteorites) => {
                "Rocks from space, often extremely old."
            }
            (Locale::English, CategoryChoice::Gemstones) => {
                "Specially selected stones with high aesthetic and economic value."
            }
            (Locale::Norwegian, CategoryChoice::TerrestrialRocks) => {
                "F.eks. granitt, basalt, sandstein og marmor."
            }
            (Locale::Norwegian, CategoryChoice::Meteorites) => {
                "Bergarter fra verdensrommet, ofte ekstremt gamle."
            }
            (Locale::Norwegian, CategoryChoice::Gemstones) => {
                "Spesielt utvalgte steiner med høy estetisk og økonomisk verdi."
            }
        }
    }
}

impl Locale {
    /// System-role message sent ahead of every prompt.
    pub fn system_instruction(self) -> &'static str {
        match self {
            Locale::English => "You are an expert in rock/stone identification.",
            Locale::Norwegian => "Du er en ekspert på steinidentifikasjon.",
        }
    }

    /// Prefix put in front of a failure description before it is displayed.
    pub fn error_prefix(self) -> &'static str {
        match self {
            Locale::English => "Error retrieving model answer: ",
            Locale::Norwegian => "Feil ved henting av GPT-svar: ",
        }
    }

    pub fn no_image_label(self) -> &'static str {
        match self {
            Locale::English => NO_IMAGE_LABEL,
            Locale::Norwegian => NO_IMAGE_LABEL_NB,
        }
    }
}
