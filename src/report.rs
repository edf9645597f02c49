// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Human-readable deal reports. Formatting only: every figure comes from an
//! already computed [`BrrrrResults`].

use crate::models::{BrrrrInputs, BrrrrResults, FieldSpec, INPUT_FIELDS, Phase, RESULT_FIELDS};
use crate::utils::{fmt_value, html_escape};
use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Html,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "html" => Ok(ReportFormat::Html),
            other => bail!("Unknown report format: {} (use text|html)", other),
        }
    }
}

pub struct ReportContext<'a> {
    pub deal_name: &'a str,
    pub notes: Option<&'a str>,
    pub inputs: &'a BrrrrInputs,
    pub results: &'a BrrrrResults,
    pub generated_at: DateTime<Utc>,
}

struct Section {
    phase: Phase,
    inputs: Vec<(&'static str, String)>,
    results: Vec<(&'static str, String)>,
}

fn rows_for(phase: Phase, fields: &[FieldSpec], values: &[f64]) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .zip(values)
        .filter(|(spec, _)| spec.phase == phase)
        .map(|(spec, v)| (spec.label, fmt_value(spec.unit, *v)))
        .collect()
}

fn sections(ctx: &ReportContext<'_>) -> Vec<Section> {
    let input_values = ctx.inputs.values();
    let result_values = ctx.results.values();
    Phase::ALL
        .iter()
        .map(|&phase| Section {
            phase,
            inputs: rows_for(phase, &INPUT_FIELDS, &input_values),
            results: rows_for(phase, &RESULT_FIELDS, &result_values),
        })
        .collect()
}

pub fn render(format: ReportFormat, ctx: &ReportContext<'_>) -> String {
    match format {
        ReportFormat::Text => render_text(ctx),
        ReportFormat::Html => render_html(ctx),
    }
}

fn render_text(ctx: &ReportContext<'_>) -> String {
    let sections = sections(ctx);
    let width = sections
        .iter()
        .flat_map(|s| s.inputs.iter().chain(s.results.iter()))
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let title = format!("BRRRR Analysis: {}", ctx.deal_name);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(
        out,
        "Generated {}",
        ctx.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    for s in &sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", s.phase.label());
        let _ = writeln!(out, "{}", "-".repeat(s.phase.label().len()));
        for (label, value) in s.inputs.iter().chain(s.results.iter()) {
            let _ = writeln!(out, "  {:<width$}  {:>14}", label, value, width = width);
        }
    }

    if let Some(notes) = ctx.notes.filter(|n| !n.trim().is_empty()) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Notes");
        let _ = writeln!(out, "-----");
        for line in notes.lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

fn html_rows(out: &mut String, rows: &[(&'static str, String)], class: &str) {
    for (label, value) in rows {
        let _ = writeln!(
            out,
            "      <tr class=\"{}\"><th>{}</th><td>{}</td></tr>",
            class,
            html_escape(label),
            html_escape(value)
        );
    }
}

fn render_html(ctx: &ReportContext<'_>) -> String {
    let name = html_escape(ctx.deal_name);
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "  <meta charset=\"utf-8\">");
    let _ = writeln!(out, "  <title>BRRRR Analysis: {}</title>", name);
    let _ = writeln!(
        out,
        "  <style>body{{font-family:sans-serif;margin:2em}}table{{border-collapse:collapse;margin-bottom:1.5em}}th{{text-align:left;padding:2px 16px 2px 0;font-weight:normal}}td{{text-align:right}}tr.result th{{font-weight:bold}}</style>"
    );
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "  <h1>BRRRR Analysis: {}</h1>", name);
    let _ = writeln!(
        out,
        "  <p class=\"generated\">Generated {}</p>",
        ctx.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    for s in sections(ctx) {
        let _ = writeln!(out, "  <h2>{}</h2>", s.phase.label());
        let _ = writeln!(out, "  <table>");
        html_rows(&mut out, &s.inputs, "input");
        html_rows(&mut out, &s.results, "result");
        let _ = writeln!(out, "  </table>");
    }
    if let Some(notes) = ctx.notes.filter(|n| !n.trim().is_empty()) {
        let _ = writeln!(out, "  <h2>Notes</h2>");
        let _ = writeln!(out, "  <p class=\"notes\">{}</p>", html_escape(notes));
    }
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}
