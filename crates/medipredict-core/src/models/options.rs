//! Closed option sets backing the select fields of the disease forms.
//!
//! Each enum serializes as its display label, so the label a user picks in
//! the form, the value stored in a patient record, and the text embedded in
//! the prompt are the same string.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A closed set of labelled choices for a select field.
pub trait SelectOption: Sized + Copy + 'static {
    /// Every choice, in display order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Option labels in display order.
    fn options() -> Vec<&'static str> {
        Self::ALL.iter().map(|o| o.as_str()).collect()
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl SelectOption for Sex {
    const ALL: &'static [Self] = &[Sex::Male, Sex::Female];

    fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ChestPainType {
    #[serde(rename = "Typical Angina")]
    TypicalAngina,
    #[serde(rename = "Atypical Angina")]
    AtypicalAngina,
    #[serde(rename = "Non-anginal Pain")]
    NonAnginalPain,
    #[serde(rename = "Asymptomatic")]
    Asymptomatic,
}

impl SelectOption for ChestPainType {
    const ALL: &'static [Self] = &[
        ChestPainType::TypicalAngina,
        ChestPainType::AtypicalAngina,
        ChestPainType::NonAnginalPain,
        ChestPainType::Asymptomatic,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ChestPainType::TypicalAngina => "Typical Angina",
            ChestPainType::AtypicalAngina => "Atypical Angina",
            ChestPainType::NonAnginalPain => "Non-anginal Pain",
            ChestPainType::Asymptomatic => "Asymptomatic",
        }
    }
}

/// A yes/no answer recorded with the labels "True" / "False".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TrueFalse {
    True,
    False,
}

impl SelectOption for TrueFalse {
    const ALL: &'static [Self] = &[TrueFalse::True, TrueFalse::False];

    fn as_str(&self) -> &'static str {
        match self {
            TrueFalse::True => "True",
            TrueFalse::False => "False",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

impl SelectOption for YesNo {
    const ALL: &'static [Self] = &[YesNo::Yes, YesNo::No];

    fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}
