// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Investment phase a field belongs to. Reports group fields by phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Buy,
    Rehab,
    Rent,
    Refinance,
    Summary,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Buy,
        Phase::Rehab,
        Phase::Rent,
        Phase::Refinance,
        Phase::Summary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Buy => "Buy",
            Phase::Rehab => "Rehab",
            Phase::Rent => "Rent",
            Phase::Refinance => "Refinance",
            Phase::Summary => "Summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Currency,
    Percent,
    Months,
    Years,
    Ratio,
}

/// Static description of one numeric field: its JSON key, display label,
/// phase and unit.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub phase: Phase,
    pub unit: Unit,
}

const fn field(key: &'static str, label: &'static str, phase: Phase, unit: Unit) -> FieldSpec {
    FieldSpec {
        key,
        label,
        phase,
        unit,
    }
}

/// Inputs of the BRRRR model, in the order of [`BrrrrInputs::values`].
pub const INPUT_FIELDS: [FieldSpec; 20] = [
    field("purchasePrice", "Purchase price", Phase::Buy, Unit::Currency),
    field("downPaymentPercent", "Down payment", Phase::Buy, Unit::Percent),
    field("closingCosts", "Closing costs", Phase::Buy, Unit::Currency),
    field("acquisitionFees", "Acquisition fees", Phase::Buy, Unit::Currency),
    field("holdingCosts", "Holding costs / month", Phase::Buy, Unit::Currency),
    field("renovationBudget", "Renovation budget", Phase::Rehab, Unit::Currency),
    field("contingencyPercent", "Contingency", Phase::Rehab, Unit::Percent),
    field("rehabDuration", "Rehab duration", Phase::Rehab, Unit::Months),
    field("rehabFinancingRate", "Rehab financing rate", Phase::Rehab, Unit::Percent),
    field("monthlyRent", "Monthly rent", Phase::Rent, Unit::Currency),
    field("vacancyRate", "Vacancy rate", Phase::Rent, Unit::Percent),
    field("propertyManagement", "Property management / month", Phase::Rent, Unit::Currency),
    field("insurance", "Insurance / month", Phase::Rent, Unit::Currency),
    field("propertyTax", "Property tax / month", Phase::Rent, Unit::Currency),
    field("maintenance", "Maintenance / month", Phase::Rent, Unit::Currency),
    field("arv", "After-repair value", Phase::Refinance, Unit::Currency),
    field("refinanceLTV", "Refinance LTV", Phase::Refinance, Unit::Percent),
    field("newLoanRate", "New loan rate", Phase::Refinance, Unit::Percent),
    field("newLoanTerm", "New loan term", Phase::Refinance, Unit::Years),
    field("refinanceCosts", "Refinance costs", Phase::Refinance, Unit::Currency),
];

/// Results of the BRRRR model, in the order of [`BrrrrResults::values`].
pub const RESULT_FIELDS: [FieldSpec; 20] = [
    field("totalAcquisitionCost", "Total acquisition cost", Phase::Buy, Unit::Currency),
    field("initialCashNeeded", "Initial cash needed", Phase::Buy, Unit::Currency),
    field("totalRehabCost", "Total rehab cost", Phase::Rehab, Unit::Currency),
    field("totalHoldingCost", "Total holding cost", Phase::Rehab, Unit::Currency),
    field("preStabilizationInvestment", "Pre-stabilization investment", Phase::Rehab, Unit::Currency),
    field("effectiveMonthlyRent", "Effective monthly rent", Phase::Rent, Unit::Currency),
    field("monthlyOperatingExpenses", "Monthly operating expenses", Phase::Rent, Unit::Currency),
    field("netOperatingIncome", "Net operating income / month", Phase::Rent, Unit::Currency),
    field("preRefinanceCashFlow", "Pre-refinance cash flow / month", Phase::Rent, Unit::Currency),
    field("preRefinanceROI", "Pre-refinance ROI", Phase::Rent, Unit::Percent),
    field("maxRefinanceLoan", "Max refinance loan", Phase::Refinance, Unit::Currency),
    field("cashOutAmount", "Cash out", Phase::Refinance, Unit::Currency),
    field("newMonthlyPayment", "New monthly payment", Phase::Refinance, Unit::Currency),
    field("postRefinanceCashFlow", "Post-refinance cash flow / month", Phase::Refinance, Unit::Currency),
    field("postRefinanceROI", "Post-refinance ROI", Phase::Refinance, Unit::Percent),
    field("remainingEquity", "Remaining equity", Phase::Refinance, Unit::Currency),
    field("totalInvestment", "Total investment", Phase::Summary, Unit::Currency),
    field("equityCreated", "Equity created", Phase::Summary, Unit::Currency),
    field("capitalRecycled", "Capital recycled", Phase::Summary, Unit::Percent),
    field("rentToValueRatio", "Rent-to-value ratio", Phase::Summary, Unit::Percent),
];

/// Deal inputs for the BRRRR model. Every field is required; callers treat
/// absent form values as 0 before building this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BrrrrInputs {
    // Buy
    pub purchase_price: f64,
    pub down_payment_percent: f64,
    pub closing_costs: f64,
    pub acquisition_fees: f64,
    pub holding_costs: f64,
    // Rehab
    pub renovation_budget: f64,
    pub contingency_percent: f64,
    pub rehab_duration: f64,
    /// Annual rate applied to the acquisition loan (purchase price less down
    /// payment), amortized over 360 months. It is not charged on the
    /// renovation budget.
    pub rehab_financing_rate: f64,
    // Rent
    pub monthly_rent: f64,
    pub vacancy_rate: f64,
    pub property_management: f64,
    pub insurance: f64,
    pub property_tax: f64,
    pub maintenance: f64,
    // Refinance
    pub arv: f64,
    #[serde(rename = "refinanceLTV")]
    pub refinance_ltv: f64,
    pub new_loan_rate: f64,
    pub new_loan_term: f64,
    pub refinance_costs: f64,
}

impl BrrrrInputs {
    pub fn values(&self) -> [f64; 20] {
        [
            self.purchase_price,
            self.down_payment_percent,
            self.closing_costs,
            self.acquisition_fees,
            self.holding_costs,
            self.renovation_budget,
            self.contingency_percent,
            self.rehab_duration,
            self.rehab_financing_rate,
            self.monthly_rent,
            self.vacancy_rate,
            self.property_management,
            self.insurance,
            self.property_tax,
            self.maintenance,
            self.arv,
            self.refinance_ltv,
            self.new_loan_rate,
            self.new_loan_term,
            self.refinance_costs,
        ]
    }

    pub fn from_values(v: [f64; 20]) -> Self {
        Self {
            purchase_price: v[0],
            down_payment_percent: v[1],
            closing_costs: v[2],
            acquisition_fees: v[3],
            holding_costs: v[4],
            renovation_budget: v[5],
            contingency_percent: v[6],
            rehab_duration: v[7],
            rehab_financing_rate: v[8],
            monthly_rent: v[9],
            vacancy_rate: v[10],
            property_management: v[11],
            insurance: v[12],
            property_tax: v[13],
            maintenance: v[14],
            arv: v[15],
            refinance_ltv: v[16],
            new_loan_rate: v[17],
            new_loan_term: v[18],
            refinance_costs: v[19],
        }
    }
}

// serde_json writes NaN and infinities as null.
fn lossy_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
}

/// Derived BRRRR figures. Currency in dollars, percentages as 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrrrrResults {
    // Buy
    #[serde(deserialize_with = "lossy_f64")]
    pub total_acquisition_cost: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub initial_cash_needed: f64,
    // Rehab
    #[serde(deserialize_with = "lossy_f64")]
    pub total_rehab_cost: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub total_holding_cost: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub pre_stabilization_investment: f64,
    // Rent
    #[serde(deserialize_with = "lossy_f64")]
    pub effective_monthly_rent: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub monthly_operating_expenses: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub net_operating_income: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub pre_refinance_cash_flow: f64,
    #[serde(rename = "preRefinanceROI", deserialize_with = "lossy_f64")]
    pub pre_refinance_roi: f64,
    // Refinance
    #[serde(deserialize_with = "lossy_f64")]
    pub max_refinance_loan: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub cash_out_amount: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub new_monthly_payment: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub post_refinance_cash_flow: f64,
    #[serde(rename = "postRefinanceROI", deserialize_with = "lossy_f64")]
    pub post_refinance_roi: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub remaining_equity: f64,
    // Summary
    #[serde(deserialize_with = "lossy_f64")]
    pub total_investment: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub equity_created: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub capital_recycled: f64,
    #[serde(deserialize_with = "lossy_f64")]
    pub rent_to_value_ratio: f64,
}

impl BrrrrResults {
    pub fn values(&self) -> [f64; 20] {
        [
            self.total_acquisition_cost,
            self.initial_cash_needed,
            self.total_rehab_cost,
            self.total_holding_cost,
            self.pre_stabilization_investment,
            self.effective_monthly_rent,
            self.monthly_operating_expenses,
            self.net_operating_income,
            self.pre_refinance_cash_flow,
            self.pre_refinance_roi,
            self.max_refinance_loan,
            self.cash_out_amount,
            self.new_monthly_payment,
            self.post_refinance_cash_flow,
            self.post_refinance_roi,
            self.remaining_equity,
            self.total_investment,
            self.equity_created,
            self.capital_recycled,
            self.rent_to_value_ratio,
        ]
    }

    /// Field-for-field bitwise equality, so NaN compares equal to NaN.
    pub fn same_bits(&self, other: &BrrrrResults) -> bool {
        self.values()
            .iter()
            .zip(other.values().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDeal {
    pub id: i64,
    pub deal_name: String,
    pub inputs: BrrrrInputs,
    pub results: BrrrrResults,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const RENTAL_INPUT_FIELDS: [FieldSpec; 12] = [
    field("purchasePrice", "Purchase price", Phase::Buy, Unit::Currency),
    field("downPaymentPercent", "Down payment", Phase::Buy, Unit::Percent),
    field("interestRate", "Interest rate", Phase::Buy, Unit::Percent),
    field("loanTerm", "Loan term", Phase::Buy, Unit::Years),
    field("closingCosts", "Closing costs", Phase::Buy, Unit::Currency),
    field("monthlyRent", "Monthly rent", Phase::Rent, Unit::Currency),
    field("vacancyRate", "Vacancy rate", Phase::Rent, Unit::Percent),
    field("propertyTax", "Property tax / month", Phase::Rent, Unit::Currency),
    field("insurance", "Insurance / month", Phase::Rent, Unit::Currency),
    field("maintenance", "Maintenance / month", Phase::Rent, Unit::Currency),
    field("propertyManagement", "Property management / month", Phase::Rent, Unit::Currency),
    field("otherExpenses", "Other expenses / month", Phase::Rent, Unit::Currency),
];

pub const RENTAL_RESULT_FIELDS: [FieldSpec; 13] = [
    field("loanAmount", "Loan amount", Phase::Buy, Unit::Currency),
    field("monthlyMortgage", "Monthly mortgage", Phase::Buy, Unit::Currency),
    field("totalCashInvested", "Total cash invested", Phase::Buy, Unit::Currency),
    field("effectiveMonthlyRent", "Effective monthly rent", Phase::Rent, Unit::Currency),
    field("monthlyOperatingExpenses", "Monthly operating expenses", Phase::Rent, Unit::Currency),
    field("monthlyNOI", "Net operating income / month", Phase::Rent, Unit::Currency),
    field("annualNOI", "Net operating income / year", Phase::Rent, Unit::Currency),
    field("monthlyCashFlow", "Cash flow / month", Phase::Rent, Unit::Currency),
    field("annualCashFlow", "Cash flow / year", Phase::Rent, Unit::Currency),
    field("capRate", "Cap rate", Phase::Summary, Unit::Percent),
    field("cashOnCashReturn", "Cash-on-cash return", Phase::Summary, Unit::Percent),
    field("grossRentMultiplier", "Gross rent multiplier", Phase::Summary, Unit::Ratio),
    field("debtServiceCoverage", "Debt service coverage", Phase::Summary, Unit::Ratio),
];

/// Inputs of a conventional buy-and-hold rental analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RentalInputs {
    pub purchase_price: f64,
    pub down_payment_percent: f64,
    pub interest_rate: f64,
    pub loan_term: f64,
    pub closing_costs: f64,
    pub monthly_rent: f64,
    pub vacancy_rate: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub property_management: f64,
    pub other_expenses: f64,
}

impl RentalInputs {
    pub fn values(&self) -> [f64; 12] {
        [
            self.purchase_price,
            self.down_payment_percent,
            self.interest_rate,
            self.loan_term,
            self.closing_costs,
            self.monthly_rent,
            self.vacancy_rate,
            self.property_tax,
            self.insurance,
            self.maintenance,
            self.property_management,
            self.other_expenses,
        ]
    }

    pub fn from_values(v: [f64; 12]) -> Self {
        Self {
            purchase_price: v[0],
            down_payment_percent: v[1],
            interest_rate: v[2],
            loan_term: v[3],
            closing_costs: v[4],
            monthly_rent: v[5],
            vacancy_rate: v[6],
            property_tax: v[7],
            insurance: v[8],
            maintenance: v[9],
            property_management: v[10],
            other_expenses: v[11],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResults {
    pub loan_amount: f64,
    pub monthly_mortgage: f64,
    pub total_cash_invested: f64,
    pub effective_monthly_rent: f64,
    pub monthly_operating_expenses: f64,
    #[serde(rename = "monthlyNOI")]
    pub monthly_noi: f64,
    #[serde(rename = "annualNOI")]
    pub annual_noi: f64,
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,
    pub cap_rate: f64,
    pub cash_on_cash_return: f64,
    pub gross_rent_multiplier: f64,
    pub debt_service_coverage: f64,
}

impl RentalResults {
    pub fn values(&self) -> [f64; 13] {
        [
            self.loan_amount,
            self.monthly_mortgage,
            self.total_cash_invested,
            self.effective_monthly_rent,
            self.monthly_operating_expenses,
            self.monthly_noi,
            self.annual_noi,
            self.monthly_cash_flow,
            self.annual_cash_flow,
            self.cap_rate,
            self.cash_on_cash_return,
            self.gross_rent_multiplier,
            self.debt_service_coverage,
        ]
    }
}
