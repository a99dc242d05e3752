//! Category themes for the perk card.
//!
//! Maps the free-form category label to one of a closed set of visual
//! themes (Tailwind class tokens + Material Symbols icon). Unknown, empty
//! and missing categories fall back to [`PerkCategory::Other`].

/// Visual tokens for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerkTheme {
    pub gradient: &'static str,
    pub border: &'static str,
    pub badge: &'static str,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub accent_text: &'static str,
}

/// Categories with a dedicated theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PerkCategory {
    Food,
    Tech,
    Travel,
    Fitness,
    #[default]
    Other,
}

static FOOD: PerkTheme = PerkTheme {
    gradient: "from-orange-50 to-red-50",
    border: "border-orange-200",
    badge: "bg-orange-100 text-orange-800",
    icon: "restaurant",
    icon_color: "text-orange-500",
    accent_text: "text-orange-600",
};

static TECH: PerkTheme = PerkTheme {
    gradient: "from-blue-50 to-indigo-50",
    border: "border-blue-200",
    badge: "bg-blue-100 text-blue-800",
    icon: "computer",
    icon_color: "text-blue-500",
    accent_text: "text-blue-600",
};

static TRAVEL: PerkTheme = PerkTheme {
    gradient: "from-purple-50 to-pink-50",
    border: "border-purple-200",
    badge: "bg-purple-100 text-purple-800",
    icon: "flight",
    icon_color: "text-purple-500",
    accent_text: "text-purple-600",
};

static FITNESS: PerkTheme = PerkTheme {
    gradient: "from-green-50 to-emerald-50",
    border: "border-green-200",
    badge: "bg-green-100 text-green-800",
    icon: "fitness_center",
    icon_color: "text-green-500",
    accent_text: "text-green-600",
};

static OTHER: PerkTheme = PerkTheme {
    gradient: "from-gray-50 to-slate-50",
    border: "border-gray-200",
    badge: "bg-gray-100 text-gray-800",
    icon: "card_giftcard",
    icon_color: "text-gray-500",
    accent_text: "text-gray-600",
};

impl PerkCategory {
    /// Registry key as stored on the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            PerkCategory::Food => "food",
            PerkCategory::Tech => "tech",
            PerkCategory::Travel => "travel",
            PerkCategory::Fitness => "fitness",
            PerkCategory::Other => "other",
        }
    }

    /// Exact, case-sensitive lookup; anything unknown is `Other`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("food") => PerkCategory::Food,
            Some("tech") => PerkCategory::Tech,
            Some("travel") => PerkCategory::Travel,
            Some("fitness") => PerkCategory::Fitness,
            _ => PerkCategory::Other,
        }
    }

    pub fn theme(&self) -> &'static PerkTheme {
        match self {
            PerkCategory::Food => &FOOD,
            PerkCategory::Tech => &TECH,
            PerkCategory::Travel => &TRAVEL,
            PerkCategory::Fitness => &FITNESS,
            PerkCategory::Other => &OTHER,
        }
    }

    pub fn all() -> [PerkCategory; 5] {
        [
            PerkCategory::Food,
            PerkCategory::Tech,
            PerkCategory::Travel,
            PerkCategory::Fitness,
            PerkCategory::Other,
        ]
    }
}

/// Theme for a category label. Never fails.
pub fn resolve_theme(category: Option<&str>) -> &'static PerkTheme {
    PerkCategory::from_label(category).theme()
}

/// Theme used whenever the category is not in the registry.
pub fn default_theme() -> &'static PerkTheme {
    PerkCategory::default().theme()
}
