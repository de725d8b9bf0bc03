use serde::{Deserialize, Serialize};

/// Service category; selects the status pipeline a request follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Government,
    Business,
    Personal,
    Legal,
    Translation,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Government,
        ServiceCategory::Business,
        ServiceCategory::Personal,
        ServiceCategory::Legal,
        ServiceCategory::Translation,
    ];

    /// Category used when the input names no known category
    pub const DEFAULT: ServiceCategory = ServiceCategory::Government;

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Government => "government",
            ServiceCategory::Business => "business",
            ServiceCategory::Personal => "personal",
            ServiceCategory::Legal => "legal",
            ServiceCategory::Translation => "translation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.as_str() == lower)
    }

    /// Parse, falling back to the default category for anything unknown
    pub fn from_str_or_default(s: Option<&str>) -> Self {
        s.and_then(Self::from_str).unwrap_or(Self::DEFAULT)
    }

    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            ServiceCategory::Government => ("Government Services", "الخدمات الحكومية"),
            ServiceCategory::Business => ("Business Setup", "تأسيس الأعمال"),
            ServiceCategory::Personal => ("Personal Services", "الخدمات الشخصية"),
            ServiceCategory::Legal => ("Legal Services", "الخدمات القانونية"),
            ServiceCategory::Translation => ("Translation", "الترجمة"),
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(ServiceCategory::from_str("business"), Some(ServiceCategory::Business));
        assert_eq!(ServiceCategory::from_str("LEGAL"), Some(ServiceCategory::Legal));
        assert_eq!(ServiceCategory::from_str("visa"), None);
        assert_eq!(ServiceCategory::from_str(""), None);
    }

    #[test]
    fn test_unknown_category_defaults_to_government() {
        assert_eq!(ServiceCategory::from_str_or_default(Some("visa")), ServiceCategory::Government);
        assert_eq!(ServiceCategory::from_str_or_default(Some("")), ServiceCategory::Government);
        assert_eq!(ServiceCategory::from_str_or_default(None), ServiceCategory::Government);
        assert_eq!(ServiceCategory::from_str_or_default(Some("personal")), ServiceCategory::Personal);
    }
}
