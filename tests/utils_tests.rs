// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerclip::journal::Posting;
use ledgerclip::utils::{parse_date, parse_posting_spec, parse_posting_specs};

#[test]
fn parse_date_accepts_common_formats() {
    for input in ["2024-02-01", "2024/02/01", "02/01/2024", "01.02.2024"] {
        let d = parse_date(input).unwrap();
        assert_eq!(d.format("%Y-%m-%d").to_string(), "2024-02-01");
    }
}

#[test]
fn parse_date_rejects_garbage() {
    let err = parse_date("next tuesday").unwrap_err();
    assert!(err.to_string().contains("Invalid date"));
}

#[test]
fn posting_spec_with_amount() {
    let p = parse_posting_spec("Expenses:Food=$5.00").unwrap();
    assert_eq!(p, Posting::new("Expenses:Food", "$5.00"));
}

#[test]
fn posting_spec_without_amount_is_elided() {
    let p = parse_posting_spec("  Assets:Cash  ").unwrap();
    assert_eq!(p, Posting::new("Assets:Cash", ""));
}

#[test]
fn posting_spec_rejects_empty_account() {
    assert!(parse_posting_spec("=$5.00").is_err());
    assert!(parse_posting_specs(&["A=1", ""]).is_err());
}
