// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Pools of network addresses given heterogeneously as single IPs, CIDR
blocks and explicit from-to ranges.

A [Pool] is built from free text (entries separated by `,`, `;` or
newline) and then queried: does it overlap another pool, does it hold at
least/at most N addresses, is it equal to another pool as a set of
entries. Everything is an in-memory value; there is no I/O anywhere.

```
use addrpool::Pool;

let mine: Pool = "10.0.0.0/28, 10.0.1.1".parse().unwrap();
let theirs: Pool = "10.0.0.5-10.0.0.9".parse().unwrap();
assert!(mine.overlaps(std::slice::from_ref(&theirs)));
assert!(mine.has_min_size(17));
```
*/

mod parsing;
mod querying;
mod strings;
mod structs;

use std::{error, fmt, net::IpAddr};
use strings::*;

pub use parsing::parse_pool;
pub use structs::{AddrRange, Pool};

pub(crate) const IPV4_BITS: u8 = 32;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// entry is not an IP, CIDR block or IP range
    Invalid(String),
    /// range format is invalid
    InvalidRangeFmt(String),
    /// range start must be strictly below range end
    RangeOrder(IpAddr, IpAddr),
    /// range endpoints may differ only in their final byte
    RangeSpan(IpAddr, IpAddr),
    /// from and to are not the same IP family (v4 vs v6)
    Mismatch(IpAddr, IpAddr),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Invalid(entry) => {
                write!(f, "{ERR_INVALID_ENTRY}: '{entry}'")
            }
            ParseError::InvalidRangeFmt(rng) => {
                write!(f, "{ERR_RNG_FMT}: '{rng}'")
            }
            ParseError::RangeOrder(from, to) => {
                write!(f, "{ERR_RNG_ORDER} ({from} >= {to})")
            }
            ParseError::RangeSpan(from, to) => {
                write!(f, "{ERR_RNG_SPAN}: {from} - {to}")
            }
            ParseError::Mismatch(a, b) => {
                write!(f, "{ERR_MISMATCH}: {a} - {b}")
            }
        }
    }
}

impl error::Error for ParseError {}
