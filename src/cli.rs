// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FieldSpec, INPUT_FIELDS, RENTAL_INPUT_FIELDS};
use clap::{Arg, ArgAction, Command, crate_version};

/// CLI flags for [`INPUT_FIELDS`], same order.
pub const INPUT_FLAGS: [&str; 20] = [
    "purchase-price",
    "down-payment-percent",
    "closing-costs",
    "acquisition-fees",
    "holding-costs",
    "renovation-budget",
    "contingency-percent",
    "rehab-duration",
    "rehab-financing-rate",
    "monthly-rent",
    "vacancy-rate",
    "property-management",
    "insurance",
    "property-tax",
    "maintenance",
    "arv",
    "refinance-ltv",
    "new-loan-rate",
    "new-loan-term",
    "refinance-costs",
];

/// CLI flags for [`RENTAL_INPUT_FIELDS`], same order.
pub const RENTAL_FLAGS: [&str; 12] = [
    "purchase-price",
    "down-payment-percent",
    "interest-rate",
    "loan-term",
    "closing-costs",
    "monthly-rent",
    "vacancy-rate",
    "property-tax",
    "insurance",
    "maintenance",
    "property-management",
    "other-expenses",
];

fn field_args(flags: &[&'static str], fields: &[FieldSpec]) -> Vec<Arg> {
    flags
        .iter()
        .zip(fields)
        .map(|(flag, spec)| {
            Arg::new(*flag)
                .long(*flag)
                .value_name("N")
                .allow_negative_numbers(true)
                .help(spec.label)
        })
        .collect()
}

fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .long("inputs")
        .value_name("FILE")
        .help("JSON inputs document; field flags override its values")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn no_validate_arg() -> Arg {
    Arg::new("no-validate")
        .long("no-validate")
        .action(ArgAction::SetTrue)
        .help("Skip input range checks")
}

fn id_arg() -> Arg {
    Arg::new("id").long("id").required(true).help("Deal id")
}

fn notes_arg() -> Arg {
    Arg::new("notes").long("notes").help("Free-text notes")
}

pub fn build_cli() -> Command {
    Command::new("dealdesk")
        .version(crate_version!())
        .about("BRRRR and rental-property investment calculator with saved deals")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (overrides DEALDESK_LOG)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("calc")
                .about("Run a calculator without saving")
                .subcommand(
                    Command::new("brrrr")
                        .about("Buy, rehab, rent, refinance analysis")
                        .arg(inputs_arg())
                        .args(field_args(&INPUT_FLAGS, &INPUT_FIELDS))
                        .arg(no_validate_arg())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rental")
                        .about("Cap rate and cash-on-cash analysis")
                        .arg(inputs_arg())
                        .args(field_args(&RENTAL_FLAGS, &RENTAL_INPUT_FIELDS))
                        .arg(no_validate_arg())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("deal")
                .about("Saved BRRRR deals")
                .subcommand(
                    Command::new("save")
                        .about("Compute and save a new deal")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(inputs_arg())
                        .args(field_args(&INPUT_FLAGS, &INPUT_FIELDS))
                        .arg(notes_arg()),
                )
                .subcommand(
                    Command::new("update")
                        .about("Change a saved deal and recompute it")
                        .arg(id_arg())
                        .arg(Arg::new("name").long("name"))
                        .arg(inputs_arg())
                        .args(field_args(&INPUT_FLAGS, &INPUT_FIELDS))
                        .arg(notes_arg()),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show a saved deal")
                        .arg(id_arg())
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue)
                                .help("Print as pretty JSON"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List saved deals")
                        .arg(
                            Arg::new("filter")
                                .long("filter")
                                .value_name("REGEX")
                                .help("Only deals whose name matches"),
                        )
                        .args(json_args()),
                )
                .subcommand(Command::new("rm").about("Delete a saved deal").arg(id_arg()))
                .subcommand(
                    Command::new("report")
                        .about("Render a saved deal as a report")
                        .arg(id_arg())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("text")
                                .help("text|html"),
                        )
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .value_name("FILE")
                                .help("Write to a file instead of stdout"),
                        ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export saved deals")
                .subcommand(
                    Command::new("deals")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check saved deals for problems"))
}
