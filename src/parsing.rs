// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::SEPARATORS, AddrRange, ParseError, Pool};
use ipnet::IpNet;
use lazy_static::lazy_static;
use regex::Regex;
use std::{net::IpAddr, str::FromStr};
use tracing::debug;

// Compiled once per program execution.
lazy_static! {
    static ref SEPARATOR_RE: Regex =
        Regex::new(SEPARATORS).expect("separator pattern must compile");
}

/**
Parse a pool of network addresses from free text.

Entries are separated by `,`, `;` or newline; each entry is one of:
- Single IP: 10.10.10.1
- CIDR: 10.10.10.0/28 (stored masked to the network boundary)
- Range: 10.10.10.1-10.10.10.10 (endpoints may differ only in the last byte)

Every space and tab inside an entry is ignored, and empty fields from
leading/trailing/consecutive separators are dropped. An empty or
all-whitespace input yields an empty [Pool].

Classification is first-match-wins in the order above, and parsing is
all-or-nothing: the first entry matching none of the three forms fails
the whole parse with [ParseError::Invalid] - no partial pool is returned.
*/
pub fn parse_pool(arg: impl AsRef<str>) -> Result<Pool, ParseError> {
    let mut pool = Pool::default();
    let text: &str = arg.as_ref().trim();
    if text.is_empty() {
        return Ok(pool);
    }

    for token in SEPARATOR_RE.split(text).filter(|t| !t.is_empty()) {
        let entry: String = token.replace([' ', '\t'], "");

        if let Ok(ip) = entry.parse::<IpAddr>() {
            pool.addresses.push(ip);
            continue;
        }
        if let Ok(net) = entry.parse::<IpNet>() {
            pool.prefixes.push(net.trunc());
            continue;
        }
        if let Ok(range) = entry.parse::<AddrRange>() {
            pool.ranges.push(range);
            continue;
        }

        debug!("unparseable pool entry: '{entry}'");
        return Err(ParseError::Invalid(entry));
    }

    Ok(pool)
}

impl FromStr for Pool {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pool(s)
    }
}

/* -------------------------------------------------------------------------- */
