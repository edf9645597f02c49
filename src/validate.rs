// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Domain-range checks applied before the calculators run. The calculators
//! themselves accept anything.

use crate::models::{
    BrrrrInputs, FieldSpec, INPUT_FIELDS, RENTAL_INPUT_FIELDS, RentalInputs,
};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid inputs: {}", join_issues(.0))]
    InvalidInputs(Vec<FieldIssue>),
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            ValidationError::InvalidInputs(v) => v,
        }
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Positive,
    NonNegative,
    Percent,
}

impl Rule {
    fn check(self, v: f64) -> Option<String> {
        if !v.is_finite() {
            return Some(format!("must be a finite number, got {}", v));
        }
        match self {
            Rule::Positive if v <= 0.0 => Some(format!("must be greater than 0, got {}", v)),
            Rule::NonNegative if v < 0.0 => Some(format!("must not be negative, got {}", v)),
            Rule::Percent if !(0.0..=100.0).contains(&v) => {
                Some(format!("must be between 0 and 100, got {}", v))
            }
            _ => None,
        }
    }
}

// Same order as INPUT_FIELDS.
const BRRRR_RULES: [Rule; 20] = [
    Rule::Positive,    // purchasePrice
    Rule::Percent,     // downPaymentPercent
    Rule::NonNegative, // closingCosts
    Rule::NonNegative, // acquisitionFees
    Rule::NonNegative, // holdingCosts
    Rule::NonNegative, // renovationBudget
    Rule::Percent,     // contingencyPercent
    Rule::NonNegative, // rehabDuration
    Rule::NonNegative, // rehabFinancingRate
    Rule::Positive,    // monthlyRent
    Rule::Percent,     // vacancyRate
    Rule::NonNegative, // propertyManagement
    Rule::NonNegative, // insurance
    Rule::NonNegative, // propertyTax
    Rule::NonNegative, // maintenance
    Rule::Positive,    // arv
    Rule::Percent,     // refinanceLTV
    Rule::NonNegative, // newLoanRate
    Rule::Positive,    // newLoanTerm
    Rule::NonNegative, // refinanceCosts
];

const RENTAL_RULES: [Rule; 12] = [
    Rule::Positive,    // purchasePrice
    Rule::Percent,     // downPaymentPercent
    Rule::NonNegative, // interestRate
    Rule::Positive,    // loanTerm
    Rule::NonNegative, // closingCosts
    Rule::Positive,    // monthlyRent
    Rule::Percent,     // vacancyRate
    Rule::NonNegative, // propertyTax
    Rule::NonNegative, // insurance
    Rule::NonNegative, // maintenance
    Rule::NonNegative, // propertyManagement
    Rule::NonNegative, // otherExpenses
];

fn check_all(fields: &[FieldSpec], rules: &[Rule], values: &[f64]) -> Result<(), ValidationError> {
    let issues: Vec<FieldIssue> = fields
        .iter()
        .zip(rules)
        .zip(values)
        .filter_map(|((spec, rule), v)| {
            rule.check(*v).map(|message| FieldIssue {
                field: spec.key,
                message,
            })
        })
        .collect();
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidInputs(issues))
    }
}

pub fn validate_brrrr(inputs: &BrrrrInputs) -> Result<(), ValidationError> {
    check_all(&INPUT_FIELDS, &BRRRR_RULES, &inputs.values())
}

pub fn validate_rental(inputs: &RentalInputs) -> Result<(), ValidationError> {
    check_all(&RENTAL_INPUT_FIELDS, &RENTAL_RULES, &inputs.values())
}
