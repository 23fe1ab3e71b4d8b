//! Subject decoration lookup.

/// Closed set of recognized subject categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectDecoration {
    Mathematics,
    IndonesianLanguage,
    EnglishLanguage,
    NaturalScience,
    SocialScience,
    Programming,
    Physics,
    Chemistry,
    Biology,
    /// Fallback for any subject not in the table.
    Generic,
}

impl SubjectDecoration {
    /// Classifies a subject label, ignoring case and surrounding whitespace.
    pub fn for_subject(subject: &str) -> Self {
        match subject.trim().to_lowercase().as_str() {
            "matematika" | "mathematics" | "math" | "maths" => Self::Mathematics,
            "bahasa indonesia" | "indonesian" => Self::IndonesianLanguage,
            "bahasa inggris" | "english" => Self::EnglishLanguage,
            "ipa" | "science" | "natural science" => Self::NaturalScience,
            "ips" | "social science" | "social studies" => Self::SocialScience,
            "pemrograman" | "programming" => Self::Programming,
            "fisika" | "physics" => Self::Physics,
            "kimia" | "chemistry" => Self::Chemistry,
            "biologi" | "biology" => Self::Biology,
            _ => Self::Generic,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Mathematics => "➗",
            Self::IndonesianLanguage => "📚",
            Self::EnglishLanguage => "🗣️",
            Self::NaturalScience => "🔬",
            Self::SocialScience => "🌍",
            Self::Programming => "💻",
            Self::Physics => "⚛️",
            Self::Chemistry => "⚗️",
            Self::Biology => "🧬",
            Self::Generic => "📝",
        }
    }
}

/// Returns the decorative symbol for a subject, or the generic default.
pub fn decoration_for(subject: &str) -> &'static str {
    SubjectDecoration::for_subject(subject).symbol()
}
