// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DASH: &str = "-";
pub(crate) static COMMA: &str = ",";
/// entry separators within pool text: comma, semicolon, newline
pub(crate) static SEPARATORS: &str = r"[,;\n]";

// lib.rs
pub(crate) static ERR_INVALID_ENTRY: &str = "not an IP, CIDR block or IP range";
pub(crate) static ERR_RNG_FMT: &str = "invalid range format";
pub(crate) static ERR_RNG_ORDER: &str = "range start must be below range end";
pub(crate) static ERR_RNG_SPAN: &str = "range endpoints may differ only in the final byte";
pub(crate) static ERR_MISMATCH: &str = "cannot mix IPv4 and IPv6 in range";
