// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! BRRRR (Buy, Rehab, Rent, Refinance, Repeat) deal model.
//!
//! [`compute`] is a pure function of its inputs: no I/O, no rounding, and no
//! error path. Degenerate inputs come back as negative, `NaN` or infinite
//! figures; range checks belong to [`crate::validate`] at the boundary. The
//! only guarded division is the post-refinance ROI, which is reported as 0
//! when no capital is left in the deal.

use crate::models::{BrrrrInputs, BrrrrResults};

/// Amortization term of the acquisition loan carried until refinance.
pub const ACQUISITION_LOAN_MONTHS: f64 = 360.0;

/// Fixed-rate, fully amortizing monthly payment.
///
/// `payment = P * r(1+r)^n / ((1+r)^n - 1)` with `r = annual_rate_pct / 100 / 12`.
/// A zero rate pays the principal down in equal installments.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, months: f64) -> f64 {
    let r = annual_rate_pct / 100.0 / 12.0;
    if r == 0.0 {
        return principal / months;
    }
    let growth = (1.0 + r).powf(months);
    principal * (r * growth) / (growth - 1.0)
}

// Math.max(0, x) semantics: NaN passes through.
fn floor_zero(x: f64) -> f64 {
    if x < 0.0 { 0.0 } else { x }
}

impl BrrrrInputs {
    pub fn down_payment_amount(&self) -> f64 {
        self.purchase_price * self.down_payment_percent / 100.0
    }

    /// Principal of the acquisition loan.
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price - self.down_payment_amount()
    }

    /// Payment on the acquisition loan, at `rehab_financing_rate` over 360 months.
    pub fn existing_monthly_payment(&self) -> f64 {
        monthly_payment(
            self.loan_amount(),
            self.rehab_financing_rate,
            ACQUISITION_LOAN_MONTHS,
        )
    }
}

pub fn compute(inputs: &BrrrrInputs) -> BrrrrResults {
    // Buy
    let down_payment = inputs.down_payment_amount();
    let total_acquisition_cost =
        inputs.purchase_price + inputs.closing_costs + inputs.acquisition_fees;
    let initial_cash_needed = down_payment + inputs.closing_costs + inputs.acquisition_fees;

    // Rehab
    let contingency = inputs.renovation_budget * inputs.contingency_percent / 100.0;
    let total_rehab_cost = inputs.renovation_budget + contingency;
    let total_holding_cost = inputs.holding_costs * inputs.rehab_duration;
    let pre_stabilization_investment = initial_cash_needed + total_rehab_cost + total_holding_cost;

    // Rent
    let effective_monthly_rent = inputs.monthly_rent * (1.0 - inputs.vacancy_rate / 100.0);
    let monthly_operating_expenses = inputs.property_management
        + inputs.insurance
        + inputs.property_tax
        + inputs.maintenance;
    let net_operating_income = effective_monthly_rent - monthly_operating_expenses;
    let loan_amount = inputs.loan_amount();
    let pre_refinance_cash_flow = net_operating_income - inputs.existing_monthly_payment();
    let pre_refinance_roi = (pre_refinance_cash_flow * 12.0) / pre_stabilization_investment * 100.0;

    // Refinance
    let max_refinance_loan = inputs.arv * inputs.refinance_ltv / 100.0;
    let cash_out_amount = floor_zero(max_refinance_loan - loan_amount - inputs.refinance_costs);
    let new_monthly_payment = monthly_payment(
        max_refinance_loan,
        inputs.new_loan_rate,
        inputs.new_loan_term * 12.0,
    );
    let post_refinance_cash_flow = net_operating_income - new_monthly_payment;
    let remaining_equity = inputs.arv - max_refinance_loan;
    let total_investment = floor_zero(pre_stabilization_investment - cash_out_amount);
    let post_refinance_roi = if total_investment > 0.0 {
        (post_refinance_cash_flow * 12.0) / total_investment * 100.0
    } else {
        0.0
    };

    // Summary
    let equity_created = inputs.arv - inputs.purchase_price;
    let capital_recycled = cash_out_amount / pre_stabilization_investment * 100.0;
    let rent_to_value_ratio = (inputs.monthly_rent * 12.0) / inputs.arv * 100.0;

    BrrrrResults {
        total_acquisition_cost,
        initial_cash_needed,
        total_rehab_cost,
        total_holding_cost,
        pre_stabilization_investment,
        effective_monthly_rent,
        monthly_operating_expenses,
        net_operating_income,
        pre_refinance_cash_flow,
        pre_refinance_roi,
        max_refinance_loan,
        cash_out_amount,
        new_monthly_payment,
        post_refinance_cash_flow,
        post_refinance_roi,
        remaining_equity,
        total_investment,
        equity_created,
        capital_recycled,
        rent_to_value_ratio,
    }
}
