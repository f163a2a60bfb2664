/// Languages the backend's translation and generation services accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
    Spanish,
    French,
    German,
    Japanese,
    Korean,
    Portuguese,
    Russian,
    Arabic,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Self::English,
            Self::Chinese,
            Self::Spanish,
            Self::French,
            Self::German,
            Self::Japanese,
            Self::Korean,
            Self::Portuguese,
            Self::Russian,
            Self::Arabic,
        ]
    }

    /// ISO 639-1 code sent over the wire.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Portuguese => "pt",
            Self::Russian => "ru",
            Self::Arabic => "ar",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "中文",
            Self::Spanish => "Español",
            Self::French => "Français",
            Self::German => "Deutsch",
            Self::Japanese => "日本語",
            Self::Korean => "한국어",
            Self::Portuguese => "Português",
            Self::Russian => "Русский",
            Self::Arabic => "العربية",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .find(|lang| lang.code() == s.to_lowercase())
            .copied()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Language::from_code("FR"), Some(Language::French));
        assert_eq!(Language::from_code("xx"), None);
    }
}
