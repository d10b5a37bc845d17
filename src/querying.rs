// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{Pool, IPV4_BITS};
use std::{fmt, net::IpAddr};

impl Pool {
    /**
    Whether this pool intersects with *any* of `others` (logical OR).

    Every bag combination of the two pools is cross-checked pairwise:
    - prefix vs prefix: CIDR block overlap (one contains the other)
    - prefix vs IP: block containment, both directions
    - IP vs IP: exact equality
    - prefix vs range: block contains either range endpoint, both directions
    - range vs IP: `from <= ip <= to`, both directions
    - range vs range: either endpoint of the right range inside the left

    The first hit short-circuits the whole call.

    NOTE: the range tests are endpoint tests, not general interval
    intersection - see [crate::AddrRange::overlaps].
    */
    pub fn overlaps(&self, others: &[Pool]) -> bool {
        for o in others {
            for p1 in &self.prefixes {
                for p2 in &o.prefixes {
                    if p1.contains(p2) || p2.contains(p1) {
                        return true;
                    }
                }
            }
            for p1 in &self.prefixes {
                for ip2 in &o.addresses {
                    if p1.contains(ip2) {
                        return true;
                    }
                }
            }
            for p2 in &o.prefixes {
                for ip1 in &self.addresses {
                    if p2.contains(ip1) {
                        return true;
                    }
                }
            }

            for ip1 in &self.addresses {
                for ip2 in &o.addresses {
                    if ip1 == ip2 {
                        return true;
                    }
                }
            }

            for p1 in &self.prefixes {
                for r2 in &o.ranges {
                    if p1.contains(&r2.from) || p1.contains(&r2.to) {
                        return true;
                    }
                }
            }
            for p2 in &o.prefixes {
                for r1 in &self.ranges {
                    if p2.contains(&r1.from) || p2.contains(&r1.to) {
                        return true;
                    }
                }
            }
            for r1 in &self.ranges {
                for ip2 in &o.addresses {
                    if r1.contains(ip2) {
                        return true;
                    }
                }
            }
            for r2 in &o.ranges {
                for ip1 in &self.addresses {
                    if r2.contains(ip1) {
                        return true;
                    }
                }
            }
            for r1 in &self.ranges {
                for r2 in &o.ranges {
                    if r1.overlaps(r2) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /**
    Whether the pool holds at least `min_size` addresses.

    The count accumulates incrementally and returns true the moment the
    running total reaches `min_size`, so large pools are rarely summed in
    full. Zero or negative `min_size` is trivially true.

    Counting rules (see [Pool::has_max_size] as well):
    - each individual address counts as 1, duplicates included;
    - each prefix adds `2^(32 - prefix_len)` - the IPv4 width is used for
      every family, so IPv6 prefixes are under-counted (known limitation);
    - each IPv4 range adds `to - from + 1` over the final octet; ranges of
      other families add nothing (known limitation).

    The accumulator is an [f64], exact up to 2^53. Sizes beyond that are
    pathological inputs, not a supported use case.
    */
    pub fn has_min_size(&self, min_size: i64) -> bool {
        let min: f64 = min_size as f64;
        let mut actual: f64 = self.addresses.len() as f64;
        if actual >= min {
            return true;
        }
        for p in &self.prefixes {
            actual += 2f64.powi(i32::from(IPV4_BITS) - i32::from(p.prefix_len()));
            if actual >= min {
                return true;
            }
        }
        for r in &self.ranges {
            if let (IpAddr::V4(from), IpAddr::V4(to)) = (r.from, r.to) {
                actual += f64::from(to.octets()[3] - from.octets()[3]) + 1.0;
                if actual >= min {
                    return true;
                }
            }
        }
        false
    }

    /**
    Whether the pool holds at most `max_size` addresses, using the same
    counting rules as [Pool::has_min_size]. Returns false the moment the
    running total exceeds `max_size`.

    `max_size == 0` returns true unconditionally regardless of pool
    contents - a documented shortcut meaning "no maximum", not "empty".
    */
    pub fn has_max_size(&self, max_size: i64) -> bool {
        if max_size == 0 {
            return true;
        }
        let max: f64 = max_size as f64;
        let mut actual: f64 = self.addresses.len() as f64;
        if actual > max {
            return false;
        }
        for p in &self.prefixes {
            actual += 2f64.powi(i32::from(IPV4_BITS) - i32::from(p.prefix_len()));
            if actual > max {
                return false;
            }
        }
        for r in &self.ranges {
            if let (IpAddr::V4(from), IpAddr::V4(to)) = (r.from, r.to) {
                actual += f64::from(to.octets()[3] - from.octets()[3]) + 1.0;
                if actual > max {
                    return false;
                }
            }
        }
        actual <= max
    }

    /**
    Set equality over the three bags, insertion order ignored.

    Each bag is compared as a sorted sequence of canonical entry strings,
    so duplicate counts matter: `1.1.1.1,1.1.1.1` does not equal
    `1.1.1.1`. All three bags must match.
    */
    pub fn equal(&self, other: &Pool) -> bool {
        sorted_strings(&self.addresses) == sorted_strings(&other.addresses)
            && sorted_strings(&self.prefixes) == sorted_strings(&other.prefixes)
            && sorted_strings(&self.ranges) == sorted_strings(&other.ranges)
    }
}

/// Canonical entry strings of one bag, in sorted order.
fn sorted_strings<T: fmt::Display>(items: &[T]) -> Vec<String> {
    let mut all: Vec<String> = items.iter().map(ToString::to_string).collect();
    all.sort_unstable();
    all
}

/* -------------------------------------------------------------------------- */
