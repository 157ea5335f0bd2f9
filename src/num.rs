// Copyright (C) 2025, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! Numeric string conversion with uniform diagnostics. `name` labels
//! the value in the error message, e.g. "mode" or "uid".

use std::io::{Error, ErrorKind, Result};

/// Parse a signed integer in the given radix.
pub fn parse_num(s: &str, radix: u32, name: &str) -> Result<i64> {
    match i64::from_str_radix(s, radix) {
        Ok(n) => Ok(n),
        Err(e) => Err(Error::new(
            ErrorKind::InvalidInput,
            format!("invalid {name} '{s}': {e}"),
        )),
    }
}

/// Parse an unsigned integer in the given radix.
pub fn parse_unum(s: &str, radix: u32, name: &str) -> Result<u64> {
    match u64::from_str_radix(s, radix) {
        Ok(n) => Ok(n),
        Err(e) => Err(Error::new(
            ErrorKind::InvalidInput,
            format!("invalid {name} '{s}': {e}"),
        )),
    }
}
