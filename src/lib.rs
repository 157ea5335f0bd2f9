// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! Minimal POSIX utility toolkit: symbolic permission mode evaluation,
//! numeric conversion, logging, and thin wrappers around the C
//! library, plus the `uname` command built on top of them.

#[macro_use]
pub mod logger;

pub mod libc;
pub mod mode;
pub mod num;
pub mod perms;
pub mod uname;

pub use crate::mode::{parse_mode, ModeParseError};
