//! Application constants and static page content

use crate::types::*;
use egui_phosphor::regular as icons;

pub const APP_NAME: &str = "Agrosurance";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default wallet JSON-RPC bridge (local desktop wallet)
pub const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:1248";
/// Overrides the configured provider endpoint for one session
pub const PROVIDER_URL_ENV: &str = "AGROSURANCE_PROVIDER_URL";

pub const PROVIDER_MISSING_ALERT: &str =
    "No wallet provider found. Please install or start an Ethereum wallet.";

pub const SUPPORT_EMAIL: &str = "support@agrosurance.io";
pub const CONTACT_LINE: &str = "Farmers DAO, Decentralized";
pub const TAGLINE: &str = "Revolutionizing Agricultural Insurance Through Blockchain Technology";
pub const FOOTER_BLURB: &str = "Decentralized crop protection powered by blockchain technology.";

pub const MISSION: &str = "At Agrosurance, we're committed to protecting farmers against nature's \
    unpredictability. Our platform provides automated insurance coverage for:";

pub const COVERED_RISKS: &[&str] = &[
    "Natural Disasters (Floods, Droughts, Cyclones, Storms)",
    "Crop Yield Reduction",
    "Extreme Weather Events",
    "Pest Outbreaks",
];

pub const PROTECTION_STEPS: &[InfoCard] = &[
    InfoCard {
        icon: icons::FILE_TEXT,
        title: "1. Policy Creation",
        description: "Customize coverage based on crop type, location, and risk factors",
        list: &[],
    },
    InfoCard {
        icon: icons::EYE,
        title: "2. Real-Time Monitoring",
        description: "24/7 tracking using satellite data and IoT sensors",
        list: &[],
    },
    InfoCard {
        icon: icons::LIGHTNING,
        title: "3. Automatic Claims",
        description: "Smart contracts trigger payouts when thresholds are breached",
        list: &[],
    },
    InfoCard {
        icon: icons::COINS,
        title: "4. Instant Payouts",
        description: "Receive funds directly in your crypto wallet within minutes",
        list: &[],
    },
];

pub const TECHNOLOGY: &[InfoCard] = &[
    InfoCard {
        icon: icons::CUBE,
        title: "Smart Contracts",
        description: "Self-executing insurance policies stored on the Ethereum blockchain. \
            Terms are transparent and unchangeable once deployed.",
        list: &[],
    },
    InfoCard {
        icon: icons::DATABASE,
        title: "Data Oracles",
        description: "Integrates real-time data from trusted sources",
        list: &[
            "India Meteorological Department",
            "NASA Earth Observatory",
            "Local IoT Sensors",
        ],
    },
    InfoCard {
        icon: icons::DEVICE_MOBILE,
        title: "Mobile Access",
        description: "Farmer-friendly mobile interface with SMS alerts and multilingual support \
            for rural accessibility.",
        list: &[],
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Abhishek Sharma",
        role: "Co-Founder & CTO",
        bio: "Blockchain architect with 10+ years in fintech solutions",
        expertise: "Smart Contracts, DeFi Systems",
    },
    TeamMember {
        name: "Utkarsh Saxena",
        role: "Head of Agriculture",
        bio: "Agricultural economist and former FAO consultant",
        expertise: "Crop Risk Modeling",
    },
    TeamMember {
        name: "Sharad",
        role: "Lead Developer",
        bio: "Full-stack developer specializing in Web3 applications",
        expertise: "DApp Development",
    },
];

pub const PARTNERS: &[&str] = &["ISRO", "IMD", "UN FAO", "ETH Foundation"];

pub const WEATHER: &[WeatherReading] = &[
    WeatherReading {
        icon: icons::THERMOMETER_HOT,
        title: "Temperature",
        value: "28°C",
        trend: Trend::Rising,
    },
    WeatherReading {
        icon: icons::CLOUD_RAIN,
        title: "Rainfall",
        value: "2.5mm",
        trend: Trend::Falling,
    },
    WeatherReading {
        icon: icons::DROP,
        title: "Soil Moisture",
        value: "65%",
        trend: Trend::Steady,
    },
];

pub const POLICIES: &[Policy] = &[
    Policy { crop_type: "Wheat", coverage: "5 ETH", premium: "0.5 ETH", status: PolicyStatus::Active },
    Policy { crop_type: "Rice", coverage: "3 ETH", premium: "0.3 ETH", status: PolicyStatus::Pending },
];

pub const POLICY_HEADERS: [&str; 4] = ["Crop Type", "Coverage", "Premium", "Status"];

/// Farm overview stat cards: (title, value)
pub const FARM_OVERVIEW: &[(&str, &str)] = &[("Active Policies", "2"), ("Total Coverage", "8 ETH")];

pub const POLICIES_INTRO: &str = "Protect your crops with our decentralized insurance policies. \
    Premiums are calculated based on your location, crop type, and historical weather patterns.";

pub const PLAN_STEPS: &[InfoCard] = &[
    InfoCard {
        icon: icons::PLANT,
        title: "Select Your Crop",
        description: "Choose from our range of supported crops and coverage options",
        list: &[],
    },
    InfoCard {
        icon: icons::SUN,
        title: "Set Parameters",
        description: "Define the weather conditions that trigger your policy",
        list: &[],
    },
    InfoCard {
        icon: icons::SHIELD_CHECK,
        title: "Secure Coverage",
        description: "Pay your premium and get protected instantly",
        list: &[],
    },
];

pub const CROP_OPTIONS: &[&str] = &["Wheat", "Rice", "Corn", "Soybean", "Cotton"];
