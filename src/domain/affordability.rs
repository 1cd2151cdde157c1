// src/domain/affordability.rs

use crate::data::models::Listing;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Share of monthly income that can go to rent.
pub const RENT_SHARE: f64 = 0.3;

/// NYC average yearly salary, offered as the input placeholder.
pub const SUGGESTED_SALARY: f64 = 45_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Affordability {
    #[serde(rename = "affordable")]
    Affordable,
    #[serde(rename = "not affordable")]
    NotAffordable,
}

impl Affordability {
    pub fn label(self) -> &'static str {
        match self {
            Affordability::Affordable => "affordable",
            Affordability::NotAffordable => "not affordable",
        }
    }

    pub fn is_affordable(self) -> bool {
        self == Affordability::Affordable
    }
}

impl fmt::Display for Affordability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Yearly salary entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Salary(f64);

impl Salary {
    pub fn new(yearly: f64) -> Self {
        Self(yearly)
    }

    /// Parse the salary field. A blank field and an explicit 0 both mean 0,
    /// which makes every listing unaffordable.
    pub fn from_input(raw: Option<&str>) -> Result<Self, String> {
        let cleaned: String = raw
            .unwrap_or("")
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();

        if cleaned.is_empty() {
            return Ok(Self(0.0));
        }

        let value: f64 = cleaned
            .parse()
            .map_err(|_| format!("salary must be a number, got '{cleaned}'"))?;

        if !value.is_finite() {
            return Err("salary must be a finite number".into());
        }

        Ok(Self::new(value))
    }

    pub fn yearly(self) -> f64 {
        self.0
    }

    /// Monthly rent per bed below which a listing counts as affordable.
    pub fn threshold(self) -> f64 {
        if self.0 == 0.0 {
            return 0.0;
        }
        (self.0 / 12.0) * RENT_SHARE
    }
}

/// Affordable iff the per-bed price is strictly below the threshold.
pub fn classify(price_per_bed: f64, salary: Salary) -> Affordability {
    if price_per_bed < salary.threshold() {
        Affordability::Affordable
    } else {
        Affordability::NotAffordable
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedListing<'a> {
    pub listing: &'a Listing,
    pub affordability: Affordability,
}

pub fn annotate(listings: &[Listing], salary: Salary) -> Vec<AnnotatedListing<'_>> {
    listings
        .iter()
        .map(|listing| AnnotatedListing {
            listing,
            affordability: classify(listing.price_per_bed, salary),
        })
        .collect()
}

/// Keep only affordable rows, order preserved.
pub fn filter_affordable(mut rows: Vec<AnnotatedListing<'_>>) -> Vec<AnnotatedListing<'_>> {
    rows.retain(|r| r.affordability.is_affordable());
    rows
}

/// The dashboard's whole input state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AffordabilityQuery {
    pub salary: Salary,
    pub affordable_only: bool,
}

impl AffordabilityQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, String> {
        let salary = Salary::from_input(params.get("salary").map(String::as_str))?;
        let affordable_only = params
            .get("affordable_only")
            .map(|v| matches!(v.trim(), "on" | "true" | "1" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            salary,
            affordable_only,
        })
    }

    /// Label every listing, then narrow if the checkbox is set.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> AffordabilityView<'a> {
        let annotated = annotate(listings, self.salary);
        let total = annotated.len();
        let affordable = annotated
            .iter()
            .filter(|r| r.affordability.is_affordable())
            .count();

        let rows = if self.affordable_only {
            filter_affordable(annotated)
        } else {
            annotated
        };

        AffordabilityView {
            rows,
            total,
            affordable,
        }
    }

    /// Query string that reproduces this state, for links to exports.
    pub fn to_query_string(&self) -> String {
        let mut qs = url::form_urlencoded::Serializer::new(String::new());
        qs.append_pair("salary", &self.salary.yearly().to_string());
        if self.affordable_only {
            qs.append_pair("affordable_only", "on");
        }
        qs.finish()
    }
}

#[derive(Debug, Clone)]
pub struct AffordabilityView<'a> {
    pub rows: Vec<AnnotatedListing<'a>>,
    /// Listings before the checkbox filter.
    pub total: usize,
    pub affordable: usize,
}
