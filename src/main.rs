// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use dealdesk::{cli, commands, db};

fn init_logging(verbose: bool) {
    let env = env_logger::Env::new().filter_or("DEALDESK_LOG", "warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("init", _)) => {
            db::open_or_init()?;
            println!("Database initialized at {}", db::db_path()?.display());
        }
        // Calculators never touch the database.
        Some(("calc", sub)) => commands::calc::handle(sub)?,
        Some(("deal", sub)) => commands::deals::handle(&db::open_or_init()?, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&db::open_or_init()?, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&db::open_or_init()?)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
