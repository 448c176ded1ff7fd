//! Options offered by the selection steps
//!
//! Themes, inspiration templates, extra services and plans are fixed lists
//! shipped with the binary.

/// A color palette the client can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: &'static [&'static str],
}

impl ThemeOption {
    /// Label stored in the form record
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }

    /// Whether a stored theme label refers to this palette
    pub fn matches(&self, stored: &str) -> bool {
        !stored.is_empty() && stored.contains(self.name)
    }
}

/// A live site shown for design inspiration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOption {
    pub id: &'static str,
    pub name: &'static str,
    pub preview: &'static str,
}

/// An add-on service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

/// A website plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const THEMES: &[ThemeOption] = &[
    ThemeOption {
        id: "modern-blue",
        name: "Modern Blue",
        description: "Professional and trustworthy",
        colors: &["#3B82F6", "#1E40AF", "#F8FAFC", "#64748B"],
    },
    ThemeOption {
        id: "elegant-purple",
        name: "Elegant Purple",
        description: "Creative and sophisticated",
        colors: &["#8B5CF6", "#5B21B6", "#FAF5FF", "#6B7280"],
    },
    ThemeOption {
        id: "fresh-green",
        name: "Fresh Green",
        description: "Natural and growth-focused",
        colors: &["#10B981", "#047857", "#F0FDF4", "#6B7280"],
    },
    ThemeOption {
        id: "warm-orange",
        name: "Warm Orange",
        description: "Energetic and friendly",
        colors: &["#F59E0B", "#D97706", "#FFFBEB", "#6B7280"],
    },
];

pub const TEMPLATES: &[TemplateOption] = &[
    TemplateOption {
        id: "hestia",
        name: "Hestia",
        preview: "https://demo.themeisle.com/hestia/",
    },
    TemplateOption {
        id: "roblog",
        name: "Roblog",
        preview: "https://roblogdemo.wordpress.com/?demo",
    },
    TemplateOption {
        id: "pizza-template",
        name: "Pizzaria Template",
        preview: "https://we-enspyre.github.io/PizzaTemplate/",
    },
    TemplateOption {
        id: "astra",
        name: "Astra",
        preview: "https://wp-themes.com/astra/",
    },
    TemplateOption {
        id: "sham-united",
        name: "Sham United",
        preview: "https://www.sham-united.com/",
    },
    TemplateOption {
        id: "bt-template",
        name: "BT Template",
        preview: "https://we-enspyre.github.io/BT/",
    },
    TemplateOption {
        id: "education-formula",
        name: "Education Formula",
        preview: "https://wp-themes.com/education-formula/",
    },
    TemplateOption {
        id: "kiddiemart",
        name: "Kiddiemart",
        preview: "https://fse.catchthemes.com/kiddiemart/",
    },
    TemplateOption {
        id: "fotograf",
        name: "Fotograf",
        preview: "https://we-enspyre.github.io/fotograf/",
    },
    TemplateOption {
        id: "sydney",
        name: "Sydney",
        preview: "https://athemes.com/theme/sydney/",
    },
];

pub const BASE_EXTRAS: &[ExtraOption] = &[
    ExtraOption {
        id: "seo",
        name: "SEO Optimization",
        description: "Improve search engine visibility",
        price: "$99",
    },
    ExtraOption {
        id: "hosting",
        name: "Hosting",
        description: "Fast and reliable web hosting",
        price: "$15/month",
    },
    ExtraOption {
        id: "domain",
        name: "Domain Name",
        description: "Custom domain registration",
        price: "$15/year",
    },
    ExtraOption {
        id: "email",
        name: "Professional Email",
        description: "Professional email addresses",
        price: "$10/month",
    },
    ExtraOption {
        id: "contact-form",
        name: "Contact Form",
        description: "Advanced contact form with validation",
        price: "$49",
    },
    ExtraOption {
        id: "newsletter",
        name: "Newsletter Signup",
        description: "Email marketing integration",
        price: "$79",
    },
    ExtraOption {
        id: "analytics",
        name: "Analytics Integration",
        description: "Track visitors and performance",
        price: "$59",
    },
];

const BOOKING_EXTRAS: &[ExtraOption] = &[
    ExtraOption {
        id: "calendar-sync",
        name: "Calendar Sync",
        description: "Sync with Google/Outlook calendars",
        price: "$99",
    },
    ExtraOption {
        id: "payment-booking",
        name: "Payment Processing",
        description: "Accept payments for bookings",
        price: "$149",
    },
];

const ESHOP_EXTRAS: &[ExtraOption] = &[
    ExtraOption {
        id: "inventory-management",
        name: "Inventory Management",
        description: "Track stock and products",
        price: "$199",
    },
    ExtraOption {
        id: "payment-gateway",
        name: "Premium Payment Gateway",
        description: "Multiple payment options",
        price: "$249",
    },
];

pub const PLANS: &[PlanOption] = &[
    PlanOption {
        id: "landing",
        name: "Landing Page",
        description: "Perfect for startups and small businesses",
        features: &["Single powerful page", "Contact forms", "Mobile responsive"],
    },
    PlanOption {
        id: "portfolio",
        name: "Blogging / Portfolio",
        description: "Showcase your work and thoughts",
        features: &["Blog system", "Portfolio gallery", "SEO optimized"],
    },
    PlanOption {
        id: "booking",
        name: "Website with Booking System",
        description: "For service-based businesses",
        features: &["Online booking", "Calendar integration", "Payment processing"],
    },
    PlanOption {
        id: "eshop",
        name: "E-Shop",
        description: "Full e-commerce solution",
        features: &["Product catalog", "Shopping cart", "Payment gateway"],
    },
];

/// Largest page count the pages step offers
pub const MAX_PAGE_COUNT: usize = 10;

pub fn find_theme(id: &str) -> Option<&'static ThemeOption> {
    THEMES.iter().find(|t| t.id == id)
}

pub fn find_template(id: &str) -> Option<&'static TemplateOption> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn find_plan(id: &str) -> Option<&'static PlanOption> {
    PLANS.iter().find(|p| p.id == id)
}

/// Extras offered for a plan: the base list plus plan-specific additions
pub fn extras_for_plan(plan: Option<&str>) -> Vec<&'static ExtraOption> {
    let specific: &[ExtraOption] = match plan {
        Some("booking") => BOOKING_EXTRAS,
        Some("eshop") => ESHOP_EXTRAS,
        _ => &[],
    };
    BASE_EXTRAS.iter().chain(specific.iter()).collect()
}

/// Display name of an extra id, falling back to the id itself
pub fn extra_name(id: &str) -> &str {
    BASE_EXTRAS
        .iter()
        .chain(BOOKING_EXTRAS)
        .chain(ESHOP_EXTRAS)
        .find(|e| e.id == id)
        .map(|e| e.name)
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_label_and_match() {
        let theme = find_theme("fresh-green").unwrap();
        assert_eq!(theme.label(), "Fresh Green - Natural and growth-focused");
        assert!(theme.matches(&theme.label()));
        assert!(!theme.matches(""));
        assert!(!THEMES[0].matches(&theme.label()));
    }

    #[test]
    fn test_extras_for_plan() {
        assert_eq!(extras_for_plan(None).len(), BASE_EXTRAS.len());
        assert_eq!(extras_for_plan(Some("landing")).len(), BASE_EXTRAS.len());

        let booking = extras_for_plan(Some("booking"));
        assert_eq!(booking.len(), BASE_EXTRAS.len() + 2);
        assert!(booking.iter().any(|e| e.id == "calendar-sync"));

        let eshop = extras_for_plan(Some("eshop"));
        assert!(eshop.iter().any(|e| e.id == "payment-gateway"));
        assert!(!eshop.iter().any(|e| e.id == "calendar-sync"));
    }

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(find_template("sydney").unwrap().name, "Sydney");
        assert!(find_template("nope").is_none());
        assert_eq!(find_plan("eshop").unwrap().name, "E-Shop");
        assert_eq!(extra_name("inventory-management"), "Inventory Management");
        assert_eq!(extra_name("custom"), "custom");
    }
}
