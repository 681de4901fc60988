// ABOUTME: Core types for the onboarding wizard
// Steps, the service catalog, document slots, contact methods and typed field updates

use serde::{Deserialize, Serialize};

/// Steps in the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    BusinessBasics,
    Services,
    Availability,
    Photos,
    Documents,
    Preferences,
    Review,
    /// Terminal success screen, only reachable through a completed submission
    Complete,
}

impl Step {
    /// Get all steps in order
    pub fn all() -> &'static [Step] {
        &[
            Self::BusinessBasics,
            Self::Services,
            Self::Availability,
            Self::Photos,
            Self::Documents,
            Self::Preferences,
            Self::Review,
            Self::Complete,
        ]
    }

    /// Data-entry steps shown in the progress indicator
    pub fn data_entry() -> &'static [Step] {
        &Self::all()[..7]
    }

    /// Get the step number (1-indexed)
    pub fn number(&self) -> u8 {
        match self {
            Self::BusinessBasics => 1,
            Self::Services => 2,
            Self::Availability => 3,
            Self::Photos => 4,
            Self::Documents => 5,
            Self::Preferences => 6,
            Self::Review => 7,
            Self::Complete => 8,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.number() == number)
    }

    /// Number of data-entry steps
    pub fn total() -> u8 {
        7
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BusinessBasics => "Business Basics",
            Self::Services => "Services Offered",
            Self::Availability => "Availability",
            Self::Photos => "Business Photos",
            Self::Documents => "Verification Documents",
            Self::Preferences => "Job Preferences",
            Self::Review => "Review Application",
            Self::Complete => "Application Submitted",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BusinessBasics => "Configure your core business identification and service range.",
            Self::Services => "Select the categories your business provides.",
            Self::Availability => "Set working hours for each selected service.",
            Self::Photos => "Showcase your work and facilities. High-quality images increase trust.",
            Self::Documents => "Upload necessary legal documents for verification.",
            Self::Preferences => "Configure how you want to be notified of new job opportunities.",
            Self::Review => "Verify your information before submitting for verification.",
            Self::Complete => "Your business data has been sent to our verification team. We'll be in touch soon.",
        }
    }

    /// Label of the forward button shown on this step
    pub fn next_label(&self) -> &'static str {
        match self {
            Self::BusinessBasics => "Continue to Services",
            Self::Services => "Availability",
            Self::Availability => "Upload Photos",
            Self::Photos => "Documents",
            Self::Documents => "Preferences",
            Self::Preferences => "Review Application",
            Self::Review => "Submit Application",
            Self::Complete => "Finish",
        }
    }

    /// Next step for a plain advance. Review and Complete have none:
    /// leaving Review goes through submission.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::BusinessBasics => Some(Self::Services),
            Self::Services => Some(Self::Availability),
            Self::Availability => Some(Self::Photos),
            Self::Photos => Some(Self::Documents),
            Self::Documents => Some(Self::Preferences),
            Self::Preferences => Some(Self::Review),
            Self::Review | Self::Complete => None,
        }
    }

    /// Previous step. Complete is terminal and has none.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::BusinessBasics | Self::Complete => None,
            Self::Services => Some(Self::BusinessBasics),
            Self::Availability => Some(Self::Services),
            Self::Photos => Some(Self::Availability),
            Self::Documents => Some(Self::Photos),
            Self::Preferences => Some(Self::Documents),
            Self::Review => Some(Self::Preferences),
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::Complete
    }
}

/// Service categories a vendor can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Towing,
    Plumber,
    Hvac,
    Electrician,
    Lawn,
    Handyman,
    Roofing,
    Pest,
    Locksmith,
    Junk,
}

impl Service {
    /// The full catalog in display order
    pub fn all() -> &'static [Service] {
        &[
            Self::Towing,
            Self::Plumber,
            Self::Hvac,
            Self::Electrician,
            Self::Lawn,
            Self::Handyman,
            Self::Roofing,
            Self::Pest,
            Self::Locksmith,
            Self::Junk,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Towing => "towing",
            Self::Plumber => "plumber",
            Self::Hvac => "hvac",
            Self::Electrician => "electrician",
            Self::Lawn => "lawn",
            Self::Handyman => "handyman",
            Self::Roofing => "roofing",
            Self::Pest => "pest",
            Self::Locksmith => "locksmith",
            Self::Junk => "junk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Towing => "Towing & Roadside",
            Self::Plumber => "Plumber",
            Self::Hvac => "HVAC",
            Self::Electrician => "Electrician",
            Self::Lawn => "Lawn Care",
            Self::Handyman => "Handyman",
            Self::Roofing => "Roofing",
            Self::Pest => "Pest Control",
            Self::Locksmith => "Locksmith",
            Self::Junk => "Junk Removal",
        }
    }

    /// Single-glyph stand-in for the catalog icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Towing => "🚚",
            Self::Plumber => "🔧",
            Self::Hvac => "🌡",
            Self::Electrician => "⚡",
            Self::Lawn => "🌱",
            Self::Handyman => "🔨",
            Self::Roofing => "🏠",
            Self::Pest => "🐛",
            Self::Locksmith => "🔑",
            Self::Junk => "🗑",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.id() == id)
    }
}

/// The four fixed document upload slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSlot {
    Insurance,
    License,
    Tax,
    Other,
}

impl DocumentSlot {
    /// Slots in display order
    pub fn all() -> &'static [DocumentSlot; 4] {
        &[Self::Insurance, Self::License, Self::Tax, Self::Other]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Insurance => "Insurance Certificate",
            Self::License => "Business License",
            Self::Tax => "EIN / Tax ID",
            Self::Other => "Other Documents",
        }
    }

    /// Required slots gate the documents step
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Insurance | Self::Tax)
    }

    /// Short label used on the review step
    pub fn review_label(&self) -> &'static str {
        match self {
            Self::Insurance => "INSURANCE UPLOADED",
            Self::License => "LICENSE UPLOADED",
            Self::Tax => "EIN UPLOADED",
            Self::Other => "OTHER UPLOADED",
        }
    }
}

/// Preferred contact method for new job notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Text,
}

impl ContactMethod {
    pub fn all() -> &'static [ContactMethod; 3] {
        &[Self::Email, Self::Phone, Self::Text]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Text => "Text",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Email => Self::Phone,
            Self::Phone => Self::Text,
            Self::Text => Self::Email,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Email => Self::Text,
            Self::Phone => Self::Email,
            Self::Text => Self::Phone,
        }
    }
}

/// Free-text fields of the form, edited through a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    BusinessName,
    Website,
    Email,
    Phone,
    City,
    ZipCode,
    MaxJobs,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BusinessName => "BUSINESS NAME",
            Self::Website => "WEBSITE URL (OPTIONAL)",
            Self::Email => "BUSINESS EMAIL",
            Self::Phone => "BUSINESS PHONE",
            Self::City => "CITY",
            Self::ZipCode => "ZIP CODE",
            Self::MaxJobs => "MAX DAILY JOBS (OPTIONAL)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::BusinessName => "e.g. Gotham Locksmiths",
            Self::Website => "https://example.com",
            Self::Email => "contact@business.com",
            Self::Phone => "(555) 123-4567",
            Self::City => "New York",
            Self::ZipCode => "e.g. 10001",
            Self::MaxJobs => "5",
        }
    }

    /// Wrap a new value for this field into a typed update
    pub fn update(&self, value: String) -> FieldUpdate {
        match self {
            Self::BusinessName => FieldUpdate::BusinessName(value),
            Self::Website => FieldUpdate::Website(value),
            Self::Email => FieldUpdate::Email(value),
            Self::Phone => FieldUpdate::Phone(value),
            Self::City => FieldUpdate::City(value),
            Self::ZipCode => FieldUpdate::ZipCode(value),
            Self::MaxJobs => FieldUpdate::MaxJobs(value),
        }
    }
}

/// Option-list fields of the form, edited through a select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectField {
    State,
    Country,
}

impl SelectField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::State => "STATE",
            Self::Country => "COUNTRY",
        }
    }

    pub fn update(&self, value: String) -> FieldUpdate {
        match self {
            Self::State => FieldUpdate::State(value),
            Self::Country => FieldUpdate::Country(value),
        }
    }
}

/// A replacement value for one top-level scalar field of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    BusinessName(String),
    Website(String),
    Email(String),
    Phone(String),
    City(String),
    State(String),
    Country(String),
    ZipCode(String),
    Radius(u32),
    ContactMethod(ContactMethod),
    MaxJobs(String),
    AutoAccept(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::BusinessBasics.next(), Some(Step::Services));
        assert_eq!(Step::BusinessBasics.previous(), None);
        assert_eq!(Step::Preferences.next(), Some(Step::Review));
        assert_eq!(Step::Review.next(), None);
        assert_eq!(Step::Review.previous(), Some(Step::Preferences));
        assert_eq!(Step::Complete.next(), None);
        assert_eq!(Step::Complete.previous(), None);
    }

    #[test]
    fn test_step_numbers() {
        for (idx, step) in Step::all().iter().enumerate() {
            assert_eq!(usize::from(step.number()), idx + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(9), None);
        assert_eq!(Step::data_entry().len(), usize::from(Step::total()));
    }

    #[test]
    fn test_service_ids_round_trip() {
        assert_eq!(Service::all().len(), 10);
        for service in Service::all() {
            assert_eq!(Service::from_id(service.id()), Some(*service));
        }
        assert_eq!(Service::from_id("astronaut"), None);
    }

    #[test]
    fn test_required_documents() {
        let required: Vec<_> = DocumentSlot::all().iter().filter(|s| s.is_required()).collect();
        assert_eq!(required, vec![&DocumentSlot::Insurance, &DocumentSlot::Tax]);
    }

    #[test]
    fn test_contact_method_cycles() {
        let mut method = ContactMethod::default();
        for _ in 0..3 {
            method = method.next();
        }
        assert_eq!(method, ContactMethod::Email);
        assert_eq!(ContactMethod::Email.previous(), ContactMethod::Text);
    }
}
