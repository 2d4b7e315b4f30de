//! Content records stored as dictionary values.
//!
//! These mirror the host's data assets field-for-field; the instrumentation
//! only ever uses them as type parameters.

use serde::{Deserialize, Serialize};

/// A house renovation offered through the home renovation menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HomeRenovation {
    pub text_strings_key: String,
    pub animation_type: String,
    pub check_for_obstructions: bool,
    pub price: i32,
    pub requirements: Vec<RenovationValue>,
    pub rename_changes: Vec<RenovationValue>,
}

/// A single requirement or change attached to a [`HomeRenovation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RenovationValue {
    #[serde(rename = "Type")]
    pub kind: String,
    pub key: String,
    pub value: String,
}

/// A movie shown at the theater.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MovieData {
    pub id: String,
    pub season: Option<String>,
    pub year_modulus: Option<i32>,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub sheet_index: i32,
}

/// A special order posted on the town board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SpecialOrderData {
    pub name: String,
    pub requester: String,
    pub duration: String,
    pub repeatable: bool,
    pub required_tags: String,
    pub order_type: String,
    pub text: String,
    pub objectives: Vec<SpecialOrderObjective>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SpecialOrderObjective {
    #[serde(rename = "Type")]
    pub kind: String,
    pub text: String,
    pub required_count: String,
}
