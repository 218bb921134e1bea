// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let account = Arg::new("account")
        .value_name("ACCOUNT")
        .help("Restrict output to accounts matching this filter");
    let posting = Arg::new("posting")
        .long("posting")
        .short('p')
        .value_name("ACCOUNT[=AMOUNT]")
        .action(ArgAction::Append)
        .help("Posting line; omit =AMOUNT for the balancing entry (repeatable)");

    Command::new("ledgerclip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plain-text accounting journal frontend for the ledger CLI")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .global(true)
                .value_name("FILE")
                .help("Journal file to use (default: ~/.ledger.dat)"),
        )
        .subcommand(Command::new("init").about("Create the journal file if it does not exist"))
        .subcommand(Command::new("accounts").about("List all accounts"))
        .subcommand(
            Command::new("balance")
                .about("Show account balances")
                .arg(account.clone()),
        )
        .subcommand(
            Command::new("register")
                .about("Show the transaction register as a table")
                .arg(account.clone()),
        )
        .subcommand(
            Command::new("transactions")
                .about("Show raw transaction register lines")
                .arg(account)
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .default_value("20")
                        .help("Limit number of lines shown"),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage journal transactions")
                .subcommand(
                    Command::new("list")
                        .about("List transactions parsed from the journal")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .action(ArgAction::SetTrue)
                                .help("Print as JSON"),
                        )
                        .arg(
                            Arg::new("jsonl")
                                .long("jsonl")
                                .action(ArgAction::SetTrue)
                                .help("Print as JSON lines"),
                        ),
                )
                .subcommand(
                    Command::new("add")
                        .about("Append a new transaction to the journal")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("DATE")
                                .help("Transaction date (default: today)"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .value_name("TEXT")
                                .required(true),
                        )
                        .arg(posting.clone()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Rewrite an existing transaction in place")
                        .arg(
                            Arg::new("index")
                                .long("index")
                                .short('i')
                                .value_name("N")
                                .value_parser(value_parser!(usize))
                                .required(true)
                                .help("Transaction number as shown by 'tx list'"),
                        )
                        .arg(Arg::new("date").long("date").value_name("DATE"))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .value_name("TEXT"),
                        )
                        .arg(posting),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a transaction from the journal")
                        .arg(
                            Arg::new("index")
                                .long("index")
                                .short('i')
                                .value_name("N")
                                .value_parser(value_parser!(usize))
                                .required(true)
                                .help("Transaction number as shown by 'tx list'"),
                        ),
                ),
        )
}
