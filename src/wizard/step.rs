//! Wizard steps and the sequences they form

use std::fmt;

use crate::config::WizardVariant;

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Plan,
    Pages,
    Theme,
    Content,
    Inspiration,
    Extras,
    Contact,
    Review,
}

/// Pages through Review
pub const STANDARD_STEPS: &[Step] = &[
    Step::Pages,
    Step::Theme,
    Step::Content,
    Step::Inspiration,
    Step::Extras,
    Step::Contact,
    Step::Review,
];

/// Plan selection followed by the standard sequence
pub const PLAN_STEPS: &[Step] = &[
    Step::Plan,
    Step::Pages,
    Step::Theme,
    Step::Content,
    Step::Inspiration,
    Step::Extras,
    Step::Contact,
    Step::Review,
];

impl Step {
    /// Title shown in the step header
    pub fn title(&self) -> &'static str {
        match self {
            Self::Plan => "Plan",
            Self::Pages => "Pages",
            Self::Theme => "Theme",
            Self::Content => "Content & Logo",
            Self::Inspiration => "Inspiration",
            Self::Extras => "Extras",
            Self::Contact => "Contact Info",
            Self::Review => "Review & Submit",
        }
    }

    /// Whether the step can be passed without entering anything
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Extras | Self::Review)
    }

    /// Ordered steps for a wizard variant
    pub fn sequence(variant: WizardVariant) -> &'static [Step] {
        match variant {
            WizardVariant::Standard => STANDARD_STEPS,
            WizardVariant::WithPlan => PLAN_STEPS,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences() {
        let standard = Step::sequence(WizardVariant::Standard);
        assert_eq!(standard.len(), 7);
        assert_eq!(standard[0], Step::Pages);
        assert_eq!(standard[6], Step::Review);

        let with_plan = Step::sequence(WizardVariant::WithPlan);
        assert_eq!(with_plan.len(), 8);
        assert_eq!(with_plan[0], Step::Plan);
        assert_eq!(&with_plan[1..], standard);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Step::Content.to_string(), "Content & Logo");
        assert_eq!(Step::Review.title(), "Review & Submit");
        assert!(Step::Extras.is_optional());
        assert!(!Step::Contact.is_optional());
    }
}
