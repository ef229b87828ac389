use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Maximum length of a goal name, in characters.
pub const NAME_MAX_LEN: usize = 20;
/// Number of calendar months, and the maximum number of month tags per goal.
pub const MAX_MONTHS: usize = 12;

/// Calendar-month tag. The wire codes are the Portuguese three-letter
/// abbreviations used by the original API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    Jan,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
    Jul,
    Ago,
    Set,
    Out,
    Nov,
    Dez,
}

impl Month {
    pub fn code(&self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Fev => "FEV",
            Month::Mar => "MAR",
            Month::Abr => "ABR",
            Month::Mai => "MAI",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Ago => "AGO",
            Month::Set => "SET",
            Month::Out => "OUT",
            Month::Nov => "NOV",
            Month::Dez => "DEZ",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Month {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "JAN" => Ok(Month::Jan),
            "FEV" => Ok(Month::Fev),
            "MAR" => Ok(Month::Mar),
            "ABR" => Ok(Month::Abr),
            "MAI" => Ok(Month::Mai),
            "JUN" => Ok(Month::Jun),
            "JUL" => Ok(Month::Jul),
            "AGO" => Ok(Month::Ago),
            "SET" => Ok(Month::Set),
            "OUT" => Ok(Month::Out),
            "NOV" => Ok(Month::Nov),
            "DEZ" => Ok(Month::Dez),
            _ => Err(()),
        }
    }
}

/// A persisted investment goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i32,
    pub name: String,
    pub months: Vec<Month>,
    pub value: f64,
    pub monthly_value: f64,
}

/// Raw payload for creating or fully replacing a goal. Field shapes mirror
/// the wire format; [`NewGoal::validate`] turns it into a [`GoalDraft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub months: Vec<String>,
    pub value: f64,
}

/// Raw payload for a partial update. All fields optional, but at least one
/// must be supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub name: Option<String>,
    pub months: Option<Vec<String>>,
    pub value: Option<f64>,
}

/// Validated fields ready for persistence, monthly value included.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub months: Vec<Month>,
    pub value: f64,
    pub monthly_value: f64,
}

/// Validated subset of fields from a [`GoalPatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct GoalChanges {
    pub name: Option<String>,
    pub months: Option<Vec<Month>>,
    pub value: Option<f64>,
}

/// Optional list filters, combined with logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalFilters {
    /// Case-insensitive substring match on the goal name.
    pub name: Option<String>,
    /// Exact month tag that must appear in the goal's months.
    pub month: Option<Month>,
}

/// Monthly value of a goal: total value spread evenly across the target
/// months, rounded half away from zero to 2 decimal places.
pub fn monthly_value(value: f64, month_count: usize) -> f64 {
    (value / month_count as f64 * 100.0).round() / 100.0
}

fn check_name(name: &str, problems: &mut Vec<String>) {
    let len = name.chars().count();
    if len == 0 || len > NAME_MAX_LEN {
        problems.push(format!(
            "name must be between 1 and {} characters",
            NAME_MAX_LEN
        ));
    }
}

fn check_value(value: f64, problems: &mut Vec<String>) {
    if !value.is_finite() || value <= 0.0 {
        problems.push("value must be a positive number".to_string());
    }
}

fn parse_months(raw: &[String], problems: &mut Vec<String>) -> Vec<Month> {
    if raw.is_empty() || raw.len() > MAX_MONTHS {
        problems.push(format!(
            "months must contain between 1 and {} entries",
            MAX_MONTHS
        ));
    }

    let mut months = Vec::with_capacity(raw.len());
    for code in raw {
        match code.parse::<Month>() {
            Ok(month) => months.push(month),
            Err(()) => problems.push(format!("unknown month code: {}", code)),
        }
    }

    // Set semantics on top of sequence input: length vs. distinct count.
    let distinct: HashSet<Month> = months.iter().copied().collect();
    if distinct.len() != months.len() {
        problems.push("months must not repeat".to_string());
    }

    months
}

fn reject(problems: Vec<String>) -> crate::errors::Error {
    ValidationError::InvalidInput(problems.join("; ")).into()
}

impl NewGoal {
    /// Validates the payload, reporting every violated constraint together.
    pub fn validate(&self) -> Result<GoalDraft> {
        let mut problems = Vec::new();
        check_name(&self.name, &mut problems);
        let months = parse_months(&self.months, &mut problems);
        check_value(self.value, &mut problems);

        if !problems.is_empty() {
            return Err(reject(problems));
        }

        Ok(GoalDraft {
            monthly_value: monthly_value(self.value, months.len()),
            name: self.name.clone(),
            months,
            value: self.value,
        })
    }
}

impl GoalPatch {
    /// Validates the payload. Every supplied field is checked with the same
    /// rules as a full payload; an empty payload is rejected outright.
    pub fn validate(&self) -> Result<GoalChanges> {
        if self.name.is_none() && self.months.is_none() && self.value.is_none() {
            return Err(
                ValidationError::MissingField("at least one of name, months, value".to_string())
                    .into(),
            );
        }

        let mut problems = Vec::new();
        if let Some(name) = &self.name {
            check_name(name, &mut problems);
        }
        let months = self
            .months
            .as_deref()
            .map(|raw| parse_months(raw, &mut problems));
        if let Some(value) = self.value {
            check_value(value, &mut problems);
        }

        if !problems.is_empty() {
            return Err(reject(problems));
        }

        Ok(GoalChanges {
            name: self.name.clone(),
            months,
            value: self.value,
        })
    }
}

impl GoalChanges {
    /// Merges the supplied fields over the current record; unsupplied fields
    /// keep their prior value. The monthly value is recomputed from the
    /// merged value/months, so it stays consistent even when only one of the
    /// two changed.
    pub fn apply(&self, current: &Goal) -> GoalDraft {
        let name = self.name.clone().unwrap_or_else(|| current.name.clone());
        let months = self
            .months
            .clone()
            .unwrap_or_else(|| current.months.clone());
        let value = self.value.unwrap_or(current.value);

        GoalDraft {
            monthly_value: monthly_value(value, months.len()),
            name,
            months,
            value,
        }
    }
}
