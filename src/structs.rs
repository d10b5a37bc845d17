// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, ParseError};
use ipnet::IpNet;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, net::IpAddr, str::FromStr};

/**
Inclusive range of IP addresses whose endpoints differ only in their
final byte (e.g. `10.0.0.1-10.0.0.10`).

The final-byte restriction is deliberate: it keeps the size of a range
computable by subtracting the last bytes, with no carry across octets.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddrRange {
    pub from: IpAddr,
    /// inclusive
    pub to: IpAddr,
}

impl AddrRange {
    /**
    Create a new [AddrRange]. Ensures that the IP families match, that
    `from` and `to` agree on every byte except the final one, and that
    `from` is strictly below `to`.
    */
    pub fn new(from: IpAddr, to: IpAddr) -> Result<Self, ParseError> {
        match (from, to) {
            (IpAddr::V4(f), IpAddr::V4(t)) => {
                let f_oct: [u8; 4] = f.octets();
                let t_oct: [u8; 4] = t.octets();
                if f_oct[..3] != t_oct[..3] {
                    return Err(ParseError::RangeSpan(from, to));
                }
                if f_oct[3] >= t_oct[3] {
                    return Err(ParseError::RangeOrder(from, to));
                }
            }
            (IpAddr::V6(f), IpAddr::V6(t)) => {
                let f_oct: [u8; 16] = f.octets();
                let t_oct: [u8; 16] = t.octets();
                if f_oct[..15] != t_oct[..15] {
                    return Err(ParseError::RangeSpan(from, to));
                }
                if f_oct[15] >= t_oct[15] {
                    return Err(ParseError::RangeOrder(from, to));
                }
            }
            _ => return Err(ParseError::Mismatch(from, to)),
        }
        Ok(Self { from, to })
    }

    /// Whether `ip` falls within the range (endpoints included).
    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.from <= *ip && *ip <= self.to
    }

    /**
    Whether either endpoint of `other` falls within this range.

    NOTE: this is an endpoint test, not general interval intersection.
    A range strictly containing `self` while keeping both of its own
    endpoints outside is not reported from this side.
    */
    pub fn overlaps(&self, other: &AddrRange) -> bool {
        self.contains(&other.from) || self.contains(&other.to)
    }
}

impl fmt::Display for AddrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DASH}{}", self.from, self.to)
    }
}

impl FromStr for AddrRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(DASH).collect();
        if parts.len() != 2 {
            return Err(ParseError::InvalidRangeFmt(s.into()));
        }

        let from: IpAddr = parts[0]
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ParseError::InvalidRangeFmt(s.into()))?;
        let to: IpAddr = parts[1]
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ParseError::InvalidRangeFmt(s.into()))?;

        AddrRange::new(from, to)
    }
}

impl Serialize for AddrRange {
    /// Serializes as the canonical `from-to` string.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AddrRange {
    /// Deserializes from the `from-to` string form; invariants are re-checked.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */

/**
A pool of network addresses described heterogeneously: single IPs, CIDR
blocks and from-to ranges, kept in three separate bags.

Build one from free text via [crate::parse_pool] or [str::parse]; an
empty input yields an empty pool. All operations are read-only queries,
so sharing a [Pool] across threads needs no synchronization.

Bag order is the order entries appeared in the input. It only matters
for rendering ([Pool::as_slice] and [fmt::Display]); the set operations
([Pool::overlaps], [Pool::equal], the size predicates in `querying`)
are order-independent.
*/
#[derive(Clone, Debug, Default)]
pub struct Pool {
    pub addresses: Vec<IpAddr>,
    pub prefixes: Vec<IpNet>,
    pub ranges: Vec<AddrRange>,
}

impl Pool {
    /// True if all three bags are empty.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty() && self.prefixes.is_empty() && self.ranges.is_empty()
    }

    /**
    Canonical string form of every entry: all addresses first, then all
    prefixes, then all ranges, each bag in parse order.
    */
    pub fn as_slice(&self) -> Vec<String> {
        let total: usize = self.addresses.len() + self.prefixes.len() + self.ranges.len();
        let mut all: Vec<String> = Vec::with_capacity(total);
        all.extend(self.addresses.iter().map(ToString::to_string));
        all.extend(self.prefixes.iter().map(ToString::to_string));
        all.extend(self.ranges.iter().map(ToString::to_string));
        all
    }
}

impl fmt::Display for Pool {
    /// Comma-joined [Pool::as_slice]. Round-trips through [crate::parse_pool].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_slice().join(COMMA))
    }
}

impl Serialize for Pool {
    /// Serializes as the canonical comma-joined listing.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pool {
    /// Deserializes from pool text; goes through the full validating parser.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE_V4: &str = "1.1.1.1-1.1.1.10";
    const RANGE_V6: &str = "::1-::5";
    const BAD_ORDER: &str = "8.8.8.8-8.8.8.7";
    const BAD_SPAN: &str = "8.8.8.8-8.8.80.10";
    const BAD_MIX: &str = "1.1.1.1-::5";
    const BAD_FIELDS: &str = "1.1.1.1-1.1.1.2-1.1.1.3";

    fn a(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_range_parse_v4() {
        let range: AddrRange = RANGE_V4.parse().unwrap();
        assert_eq!(range.from, a("1.1.1.1"));
        assert_eq!(range.to, a("1.1.1.10"));
        assert_eq!(range.to_string(), RANGE_V4);
    }

    #[test]
    fn test_range_parse_v6() {
        let range: AddrRange = RANGE_V6.parse().unwrap();
        assert_eq!(range.from, a("::1"));
        assert_eq!(range.to, a("::5"));
        assert_eq!(range.to_string(), RANGE_V6);
    }

    #[test]
    fn test_range_misordered() {
        assert_eq!(
            BAD_ORDER.parse::<AddrRange>(),
            Err(ParseError::RangeOrder(a("8.8.8.8"), a("8.8.8.7")))
        );
        // equal endpoints are misordered too (from must be strictly below to)
        assert_eq!(
            "8.8.8.8-8.8.8.8".parse::<AddrRange>(),
            Err(ParseError::RangeOrder(a("8.8.8.8"), a("8.8.8.8")))
        );
    }

    #[test]
    fn test_range_span_violation() {
        assert_eq!(
            BAD_SPAN.parse::<AddrRange>(),
            Err(ParseError::RangeSpan(a("8.8.8.8"), a("8.8.80.10")))
        );
    }

    #[test]
    fn test_range_family_mismatch() {
        assert_eq!(
            BAD_MIX.parse::<AddrRange>(),
            Err(ParseError::Mismatch(a("1.1.1.1"), a("::5")))
        );
    }

    #[test]
    fn test_range_bad_format() {
        for bad in [BAD_FIELDS, "1.1.1.1", "1.1.1.1-", "-1.1.1.1", "1.1.1.1-8.8.8"] {
            assert!(
                matches!(bad.parse::<AddrRange>(), Err(ParseError::InvalidRangeFmt(_))),
                "accepted: '{bad}'"
            );
        }
    }

    #[test]
    fn test_range_contains() {
        let range: AddrRange = RANGE_V4.parse().unwrap();
        assert!(range.contains(&a("1.1.1.1")));
        assert!(range.contains(&a("1.1.1.5")));
        assert!(range.contains(&a("1.1.1.10")));
        assert!(!range.contains(&a("1.1.1.0")));
        assert!(!range.contains(&a("1.1.1.11")));
        assert!(!range.contains(&a("::1")));
    }

    #[test]
    fn test_pool_as_slice_ordering() {
        let pool: Pool = "1.1.1.1,1.1.1.5-1.1.1.10,1.1.1.2,2.2.2.0/24,1.1.1.20-1.1.1.25,2.2.3.0/24"
            .parse()
            .unwrap();
        let expected: Vec<&str> = vec![
            "1.1.1.1",
            "1.1.1.2",
            "2.2.2.0/24",
            "2.2.3.0/24",
            "1.1.1.5-1.1.1.10",
            "1.1.1.20-1.1.1.25",
        ];
        assert_eq!(pool.as_slice(), expected);
        assert_eq!(pool.to_string(), expected.join(","));
    }

    #[test]
    fn test_pool_as_slice_trailing_separator() {
        let pool: Pool = "2.2.2.0/24,1.1.1.5-1.1.1.10,1.1.1.1,1.1.1.20-1.1.1.25,2.2.3.0/24,1.1.1.2,"
            .parse()
            .unwrap();
        let expected: Vec<&str> = vec![
            "1.1.1.1",
            "1.1.1.2",
            "2.2.2.0/24",
            "2.2.3.0/24",
            "1.1.1.5-1.1.1.10",
            "1.1.1.20-1.1.1.25",
        ];
        assert_eq!(pool.as_slice(), expected);
    }

    #[test]
    fn test_pool_empty() {
        let pool: Pool = "".parse().unwrap();
        assert!(pool.is_empty());
        assert!(pool.as_slice().is_empty());
        assert_eq!(pool.to_string(), "");
    }

    #[test]
    fn test_serde_round_trip() {
        let pool: Pool = "1.1.1.1,2.2.2.0/24,3.3.3.1-3.3.3.5".parse().unwrap();
        let json: String = serde_json::to_string(&pool).unwrap();
        assert_eq!(json, "\"1.1.1.1,2.2.2.0/24,3.3.3.1-3.3.3.5\"");
        let back: Pool = serde_json::from_str(&json).unwrap();
        assert!(pool.equal(&back));

        let range: AddrRange = RANGE_V4.parse().unwrap();
        let json: String = serde_json::to_string(&range).unwrap();
        assert_eq!(serde_json::from_str::<AddrRange>(&json).unwrap(), range);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<AddrRange>("\"8.8.8.8-8.8.8.7\"").is_err());
        assert!(serde_json::from_str::<Pool>("\"8.8.8/32\"").is_err());
    }
}
