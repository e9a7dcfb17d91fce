use serde::Serialize;

/// Fallback swatch for categories outside the fixed set.
pub const UNKNOWN_CATEGORY_COLOR: &str = "#FFFFFF";

/// Activity categories with a fixed display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Sleep,
    Morning,
    Afternoon,
    Evening,
    Medicine,
    Gym,
    Coding,
    Meal,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Sleep,
        Category::Morning,
        Category::Afternoon,
        Category::Evening,
        Category::Medicine,
        Category::Gym,
        Category::Coding,
        Category::Meal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Morning => "morning",
            Category::Afternoon => "afternoon",
            Category::Evening => "evening",
            Category::Medicine => "medicine",
            Category::Gym => "gym",
            Category::Coding => "coding",
            Category::Meal => "meal",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::Sleep => "#D0E8FF",
            Category::Morning => "#CFF5E7",
            Category::Afternoon => "#FFE5B4",
            Category::Evening => "#FFC1C1",
            Category::Medicine => "#F7B5B8",
            Category::Gym => "#E0D4FD",
            Category::Coding => "#C7E6FF",
            Category::Meal => "#FFF8B8",
        }
    }

    /// Case-insensitive parse of a category name.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Category::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Color for an arbitrary category string as stored in the schedule file.
pub fn color_for(category: &str) -> &'static str {
    Category::from_name(category)
        .map(|c| c.color())
        .unwrap_or(UNKNOWN_CATEGORY_COLOR)
}
