//! Learner profile vocabulary — the onboarding selections as plain enums.
//!
//! The onboarding flow asks who the learner is, why they study, how they
//! like to study, and over what horizon. Those answers are stored as `u8`
//! ids by the host and drive tutoring-session framing elsewhere; here they
//! are just typed data.

use serde::{Deserialize, Serialize};

/// Who the learner is in the practice scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Role {
    Business = 0,
    Student = 1,
    Traveler = 2,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Business, Role::Student, Role::Traveler];

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::Business),
            1 => Some(Self::Student),
            2 => Some(Self::Traveler),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "Business professional",
            Self::Student => "Student",
            Self::Traveler => "Traveler",
        }
    }
}

/// Why the learner is studying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum StudyPurpose {
    StudyAbroad = 0,
    Travel = 1,
    Business = 2,
    Exam = 3,
    Immigration = 4,
    AiLiteracy = 5,
}

impl StudyPurpose {
    pub const ALL: [StudyPurpose; 6] = [
        StudyPurpose::StudyAbroad,
        StudyPurpose::Travel,
        StudyPurpose::Business,
        StudyPurpose::Exam,
        StudyPurpose::Immigration,
        StudyPurpose::AiLiteracy,
    ];

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::StudyAbroad),
            1 => Some(Self::Travel),
            2 => Some(Self::Business),
            3 => Some(Self::Exam),
            4 => Some(Self::Immigration),
            5 => Some(Self::AiLiteracy),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StudyAbroad => "Study abroad / exchange",
            Self::Travel => "Travel conversation",
            Self::Business => "Business and work",
            Self::Exam => "Exam preparation",
            Self::Immigration => "Emigration and settling",
            Self::AiLiteracy => "Working with AI tools",
        }
    }
}

/// How the learner prefers to study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum StudyStyle {
    ShortFrequent = 0,
    LongFocused = 1,
    GrammarFocused = 2,
    ExpressionFocused = 3,
    AiToolsFocused = 4,
    ExamFocused = 5,
}

impl StudyStyle {
    pub const ALL: [StudyStyle; 6] = [
        StudyStyle::ShortFrequent,
        StudyStyle::LongFocused,
        StudyStyle::GrammarFocused,
        StudyStyle::ExpressionFocused,
        StudyStyle::AiToolsFocused,
        StudyStyle::ExamFocused,
    ];

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::ShortFrequent),
            1 => Some(Self::LongFocused),
            2 => Some(Self::GrammarFocused),
            3 => Some(Self::ExpressionFocused),
            4 => Some(Self::AiToolsFocused),
            5 => Some(Self::ExamFocused),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortFrequent => "Short and frequent",
            Self::LongFocused => "Long immersive sessions",
            Self::GrammarFocused => "Grammar first",
            Self::ExpressionFocused => "Conversation first",
            Self::AiToolsFocused => "AI-assisted study",
            Self::ExamFocused => "Exam-oriented",
        }
    }
}

/// Target study horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TargetPeriod {
    TwoWeeks = 0,
    OneMonth = 1,
    ThreeMonths = 2,
    SixMonths = 3,
    OneYear = 4,
}

impl TargetPeriod {
    pub const ALL: [TargetPeriod; 5] = [
        TargetPeriod::TwoWeeks,
        TargetPeriod::OneMonth,
        TargetPeriod::ThreeMonths,
        TargetPeriod::SixMonths,
        TargetPeriod::OneYear,
    ];

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::TwoWeeks),
            1 => Some(Self::OneMonth),
            2 => Some(Self::ThreeMonths),
            3 => Some(Self::SixMonths),
            4 => Some(Self::OneYear),
            _ => None,
        }
    }

    /// Horizon length in days.
    pub fn days(&self) -> u32 {
        match self {
            Self::TwoWeeks => 14,
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
            Self::OneYear => 365,
        }
    }
}

/// The full set of onboarding answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub role: Role,
    pub purpose: StudyPurpose,
    pub style: StudyStyle,
    pub target_period: TargetPeriod,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            role: Role::Student,
            purpose: StudyPurpose::Travel,
            style: StudyStyle::ShortFrequent,
            target_period: TargetPeriod::ThreeMonths,
        }
    }
}
