//! Style catalog: maps the user-facing portfolio style label to a theme and a
//! content guideline bundle.
//!
//! The label set is closed. Anything outside it (including no label at all)
//! resolves to the fallback pair: `modern-dark` with the Modern Tech guideline.

use crate::models::theme::ThemeId;

/// Writing direction handed to the model for one portfolio style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGuideline {
    /// Label the guideline belongs to, as shown in prompts.
    pub name: &'static str,
    pub tone: &'static str,
    pub focus: &'static str,
    pub metrics: &'static str,
    pub project_types: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleLabel {
    ModernTech,
    MinimalProfessional,
    CreativeDesigner,
    CorporateExecutive,
    StartupFounder,
    GradientArtistic,
    ProfessionalBlue,
    DarkModern,
}

impl StyleLabel {
    pub const ALL: [StyleLabel; 8] = [
        StyleLabel::ModernTech,
        StyleLabel::MinimalProfessional,
        StyleLabel::CreativeDesigner,
        StyleLabel::CorporateExecutive,
        StyleLabel::StartupFounder,
        StyleLabel::GradientArtistic,
        StyleLabel::ProfessionalBlue,
        StyleLabel::DarkModern,
    ];

    pub fn label(self) -> &'static str {
        self.guideline().name
    }

    /// Exact, case-sensitive match against the catalog labels.
    pub fn from_label(label: &str) -> Option<StyleLabel> {
        StyleLabel::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn theme(self) -> ThemeId {
        match self {
            StyleLabel::ModernTech => ThemeId::TechNeon,
            StyleLabel::MinimalProfessional => ThemeId::MinimalLight,
            StyleLabel::CreativeDesigner => ThemeId::DesignerPurple,
            StyleLabel::CorporateExecutive => ThemeId::CorporateGray,
            StyleLabel::StartupFounder => ThemeId::StartupGreen,
            StyleLabel::GradientArtistic => ThemeId::CreativeGradient,
            StyleLabel::ProfessionalBlue => ThemeId::ProfessionalBlue,
            StyleLabel::DarkModern => ThemeId::ModernDark,
        }
    }

    pub fn guideline(self) -> &'static StyleGuideline {
        match self {
            StyleLabel::ModernTech => &MODERN_TECH,
            StyleLabel::MinimalProfessional => &MINIMAL_PROFESSIONAL,
            StyleLabel::CreativeDesigner => &CREATIVE_DESIGNER,
            StyleLabel::CorporateExecutive => &CORPORATE_EXECUTIVE,
            StyleLabel::StartupFounder => &STARTUP_FOUNDER,
            StyleLabel::GradientArtistic => &GRADIENT_ARTISTIC,
            StyleLabel::ProfessionalBlue => &PROFESSIONAL_BLUE,
            StyleLabel::DarkModern => &DARK_MODERN,
        }
    }
}

/// Theme used when the label is absent or unrecognized.
pub const FALLBACK_THEME: ThemeId = ThemeId::ModernDark;
/// Guideline used when the label is absent or unrecognized.
pub const FALLBACK_GUIDELINE: &StyleGuideline = &MODERN_TECH;

/// Resolves a style label to its theme and guideline. Total: never fails.
pub fn resolve(style_label: Option<&str>) -> (ThemeId, &'static StyleGuideline) {
    match style_label.and_then(StyleLabel::from_label) {
        Some(style) => (style.theme(), style.guideline()),
        None => (FALLBACK_THEME, FALLBACK_GUIDELINE),
    }
}

const MODERN_TECH: StyleGuideline = StyleGuideline {
    name: "Modern Tech",
    tone: "Technical, innovative, cutting-edge",
    focus: "Scalable systems, AI/ML, cloud architecture, performance optimization",
    metrics: "System uptime, performance gains, user scaling, code quality",
    project_types: "AI platforms, cloud systems, dev tools, tech products",
};

const MINIMAL_PROFESSIONAL: StyleGuideline = StyleGuideline {
    name: "Minimal Professional",
    tone: "Clean, sophisticated, results-driven",
    focus: "Business impact, efficiency, strategic solutions",
    metrics: "ROI, efficiency gains, client satisfaction, process improvements",
    project_types: "Business solutions, consulting projects, process optimization",
};

const CREATIVE_DESIGNER: StyleGuideline = StyleGuideline {
    name: "Creative Designer",
    tone: "Artistic, passionate, visually-focused",
    focus: "User experience, visual design, brand identity, creative campaigns",
    metrics: "User engagement, brand lift, conversion rates, design awards",
    project_types: "Brand campaigns, UX redesigns, creative projects, art installations",
};

const CORPORATE_EXECUTIVE: StyleGuideline = StyleGuideline {
    name: "Corporate Executive",
    tone: "Strategic, authoritative, business-focused",
    focus: "Leadership, strategy, team management, business growth",
    metrics: "Revenue growth, team size, budget managed, market expansion",
    project_types: "Strategic initiatives, mergers & acquisitions, business transformation",
};

const STARTUP_FOUNDER: StyleGuideline = StyleGuideline {
    name: "Startup Founder",
    tone: "Dynamic, entrepreneurial, growth-oriented",
    focus: "Innovation, scaling, market disruption, venture building",
    metrics: "Funding raised, user growth, market share, valuation",
    project_types: "Startup launches, funding rounds, product pivots, market expansion",
};

const GRADIENT_ARTISTIC: StyleGuideline = StyleGuideline {
    name: "Gradient Artistic",
    tone: "Creative, expressive, boundary-pushing",
    focus: "Creative expression, artistic vision, innovative design",
    metrics: "Creative impact, artistic recognition, audience engagement",
    project_types: "Art projects, creative campaigns, innovative designs, exhibitions",
};

const PROFESSIONAL_BLUE: StyleGuideline = StyleGuideline {
    name: "Professional Blue",
    tone: "Trustworthy, reliable, professional",
    focus: "Quality delivery, client success, proven expertise",
    metrics: "Client retention, project success rate, quality scores",
    project_types: "Enterprise solutions, consulting projects, professional services",
};

const DARK_MODERN: StyleGuideline = StyleGuideline {
    name: "Dark Modern",
    tone: "Sophisticated, contemporary, tech-forward",
    focus: "Modern solutions, digital transformation, innovation",
    metrics: "Digital adoption, modernization success, tech implementation",
    project_types: "Digital transformation, modern web apps, tech solutions",
};
