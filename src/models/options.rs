use serde::Serialize;

/// A selectable preferred language
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub value: &'static str,
    pub label: &'static str,
    pub native_name: &'static str,
}

/// A selectable region
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RegionOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Bounds of the budget selector, in rupees
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

pub const LANGUAGE_OPTIONS: &[LanguageOption] = &[
    LanguageOption { value: "hi-IN", label: "Hindi", native_name: "हिंदी" },
    LanguageOption { value: "en-US", label: "English", native_name: "English" },
    LanguageOption { value: "ta-IN", label: "Tamil", native_name: "தமிழ்" },
    LanguageOption { value: "bn-IN", label: "Bengali", native_name: "বাংলা" },
    LanguageOption { value: "te-IN", label: "Telugu", native_name: "తెలుగు" },
    LanguageOption { value: "mr-IN", label: "Marathi", native_name: "मराठी" },
    LanguageOption { value: "gu-IN", label: "Gujarati", native_name: "ગુજરાતી" },
    LanguageOption { value: "kn-IN", label: "Kannada", native_name: "ಕನ್ನಡ" },
    LanguageOption { value: "ml-IN", label: "Malayalam", native_name: "മലയാളം" },
    LanguageOption { value: "pa-IN", label: "Punjabi", native_name: "ਪੰਜਾਬੀ" },
];

pub const REGION_OPTIONS: &[RegionOption] = &[
    RegionOption { value: "Delhi", label: "Delhi" },
    RegionOption { value: "Mumbai", label: "Mumbai" },
    RegionOption { value: "Bangalore", label: "Bangalore" },
    RegionOption { value: "Chennai", label: "Chennai" },
    RegionOption { value: "Kolkata", label: "Kolkata" },
    RegionOption { value: "Hyderabad", label: "Hyderabad" },
    RegionOption { value: "Pune", label: "Pune" },
    RegionOption { value: "Ahmedabad", label: "Ahmedabad" },
    RegionOption { value: "Jaipur", label: "Jaipur" },
    RegionOption { value: "Lucknow", label: "Lucknow" },
];

pub const BUDGET_RANGE: BudgetRange = BudgetRange {
    min: 500,
    max: 5000,
    step: 100,
};

/// Human readable label for a language tag, or the tag itself if unknown
pub fn language_label(tag: &str) -> String {
    LANGUAGE_OPTIONS
        .iter()
        .find(|option| option.value == tag)
        .map(|option| format!("{} ({})", option.label, option.native_name))
        .unwrap_or_else(|| tag.to_string())
}
