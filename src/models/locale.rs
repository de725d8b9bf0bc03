use serde::{Deserialize, Serialize};

/// Display locale for labels and badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Locale::En),
            "ar" | "arabic" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Pick the label for this locale from an (English, Arabic) pair
    pub fn pick<'a>(&self, labels: (&'a str, &'a str)) -> &'a str {
        match self {
            Locale::En => labels.0,
            Locale::Ar => labels.1,
        }
    }
}
