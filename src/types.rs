//! Common types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Navigation targets. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    #[default]
    About,
    Dashboard,
    Policies,
    Signup,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::About,
        NavSection::Dashboard,
        NavSection::Policies,
        NavSection::Signup,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NavSection::About => "about",
            NavSection::Dashboard => "dashboard",
            NavSection::Policies => "policies",
            NavSection::Signup => "signup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::About => "About Us",
            NavSection::Dashboard => "Dashboard",
            NavSection::Policies => "Policies",
            NavSection::Signup => "Sign Up",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavSection::About => egui_phosphor::regular::INFO,
            NavSection::Dashboard => egui_phosphor::regular::CHART_LINE,
            NavSection::Policies => egui_phosphor::regular::UMBRELLA,
            NavSection::Signup => egui_phosphor::regular::SIGN_IN,
        }
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id: {}", self.0)
    }
}

impl FromStr for NavSection {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavSection::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Connected wallet as displayed in the header.
/// Address and balance are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletInfo {
    display: Option<(String, String)>,
}

impl WalletInfo {
    pub fn new(address: String, balance: String) -> Self {
        Self { display: Some((address, balance)) }
    }

    pub fn address(&self) -> Option<&str> {
        self.display.as_ref().map(|(a, _)| a.as_str())
    }

    pub fn balance(&self) -> Option<&str> {
        self.display.as_ref().map(|(_, b)| b.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_none()
    }
}

/// Sign-up form fields, edited in place by the form widgets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub farm_location: String,
    pub crop_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    FarmLocation,
    CropType,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::FarmLocation => "Farm Location",
            FormField::CropType => "Crop Type",
        }
    }
}

impl SignUpForm {
    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::FarmLocation => &self.farm_location,
            FormField::CropType => &self.crop_type,
        }
    }

    /// Whether `field` is rejected for being blank rather than malformed
    fn is_blank(&self, field: FormField) -> bool {
        self.value(field).trim().is_empty()
    }

    /// User-facing reason the `invalid` fields blocked submission
    pub fn rejection_message(&self, invalid: &[FormField]) -> String {
        let (blank, malformed): (Vec<FormField>, Vec<FormField>) =
            invalid.iter().partition(|f| self.is_blank(**f));
        let mut parts = Vec::new();
        if !blank.is_empty() {
            let names: Vec<&str> = blank.iter().map(|f| f.label()).collect();
            parts.push(format!("Please fill in {}", names.join(", ")));
        }
        if malformed.contains(&FormField::Email) {
            parts.push("Please enter a valid email address".to_string());
        }
        parts.join(". ")
    }

    /// Fields that would block submission: blanks, and an email without `@`.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(FormField::Name);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            invalid.push(FormField::Email);
        }
        if self.farm_location.trim().is_empty() {
            invalid.push(FormField::FarmLocation);
        }
        if self.crop_type.trim().is_empty() {
            invalid.push(FormField::CropType);
        }
        invalid
    }
}

/// Status of a policy row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyStatus {
    Active,
    Pending,
}

impl PolicyStatus {
    pub fn label(self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Pending => "Pending",
        }
    }
}

pub struct Policy {
    pub crop_type: &'static str,
    pub coverage: &'static str,
    pub premium: &'static str,
    pub status: PolicyStatus,
}

/// Direction of a weather reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Rising => "↑",
            Trend::Falling => "↓",
            Trend::Steady => "→",
        }
    }
}

pub struct WeatherReading {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub expertise: &'static str,
}

impl TeamMember {
    /// Avatar initial
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Titled card, used for process steps and technology blocks
pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub list: &'static [&'static str],
}
