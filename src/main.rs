// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use ledgerclip::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = Store::from_matches(&matches)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.init()?;
            println!("Journal initialized at {}", store.path().display());
        }
        Some(("accounts", _)) => commands::accounts::handle(&store)?,
        Some(("balance", sub)) => commands::reports::balance(&store, sub)?,
        Some(("register", sub)) => commands::reports::register(&store, sub)?,
        Some(("transactions", sub)) => commands::reports::transactions(&store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
