// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::fmt;
use std::io::{Error, ErrorKind};

use crate::perms::*;

/// Failure while parsing a mode expression. All variants are terminal;
/// no partial mode is produced.
#[derive(Debug, PartialEq, Eq)]
pub enum ModeParseError {
    /// A fully numeric mode does not fit the octal range 0..=0o7777.
    InvalidOctalRange(String),
    /// Unexpected character in the wholist of a clause.
    InvalidWhoSymbol(char),
    /// A clause ended before any `+`, `-` or `=` was seen.
    MissingOperator,
    /// Unexpected character in the permission list of a clause.
    InvalidPermissionSymbol(char),
}

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOctalRange(mode) => write!(f, "invalid mode '{mode}'"),
            Self::InvalidWhoSymbol(c) => write!(f, "invalid who symbol '{c}'"),
            Self::MissingOperator => write!(f, "missing operator"),
            Self::InvalidPermissionSymbol(c) => write!(f, "invalid permission symbol '{c}'"),
        }
    }
}

impl std::error::Error for ModeParseError {}

impl From<ModeParseError> for Error {
    fn from(e: ModeParseError) -> Self {
        Error::new(ErrorKind::InvalidInput, e.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Op {
    Add,
    Remove,
    Set,
}

/// Apply one operator to the running mode. Only bits selected by `who`
/// are touched; with `Op::Set` the bits outside `who` keep their
/// previous value.
fn apply_mode(op: Op, mode: u32, who: u32, perm: u32) -> u32 {
    match op {
        Op::Add => mode | (who & perm),
        Op::Remove => mode & !(who & perm),
        Op::Set => (who & perm) | (!who & mode),
    }
}

fn who_mask(c: char) -> Result<u32, ModeParseError> {
    match c {
        'a' => Ok(MODE_PERMISSION_MASK),
        'u' => Ok(MODE_RWX_OWNER | MODE_SETUID),
        'g' => Ok(MODE_RWX_GROUP | MODE_SETGID),
        'o' => Ok(MODE_RWX_OTHER | MODE_STICKY),
        _ => Err(ModeParseError::InvalidWhoSymbol(c)),
    }
}

// Replicate one rwx triplet (taken from the bit position given by
// `shift`) into every group selected by `who`.
fn copy_triplet(mode: u32, shift: u32, who: u32) -> u32 {
    let rwx = (mode >> shift) & MODE_RWX_OTHER;
    let mut perm = 0;
    if who & MODE_RWX_OWNER != 0 {
        perm |= rwx << 6;
    }
    if who & MODE_RWX_GROUP != 0 {
        perm |= rwx << 3;
    }
    if who & MODE_RWX_OTHER != 0 {
        perm |= rwx;
    }
    perm
}

/// Evaluate a chmod-style mode expression against an initial mode.
///
/// `expression` is either an octal number ("644", "4755") or a list of
/// comma-separated symbolic clauses ("u+rwx,go-w"). An octal mode
/// replaces `initial` entirely. Symbolic clauses are applied from left
/// to right and each clause sees the result of the previous one, so
/// "u=rw,g=u" is order-dependent.
///
/// A clause consists of an optional wholist (`a`, `u`, `g`, `o`),
/// followed by one or more actions. Each action is an operator (`+`,
/// `-`, `=`) and a permission list (`r`, `w`, `x`, `X`, `s`, `t`) or a
/// permission copy (`u`, `g`, `o`). An empty wholist selects all twelve
/// permission bits.
pub fn parse_mode(expression: &str, initial: u32) -> Result<u32, ModeParseError> {
    // The mode might already be a valid octal integer.
    if !expression.is_empty() && expression.bytes().all(|c| c.is_ascii_digit()) {
        return match u32::from_str_radix(expression, 8) {
            Ok(mode) if mode <= MODE_PERMISSION_MASK => Ok(mode),
            _ => Err(ModeParseError::InvalidOctalRange(expression.into())),
        };
    }

    // Setting all bits of the wholist to one selects the whos a clause
    // applies to. The permission symbols accumulate bits for all three
    // groups at once; ANDing both masks at fold time keeps only the
    // bits of the selected whos.
    let chars: Vec<char> = expression.chars().collect();
    let mut result = initial;
    let mut pos = 0;
    loop {
        // Each clause of a symbolic mode can have an optional wholist.
        let mut who = 0;
        let mut op = loop {
            match chars.get(pos) {
                None => return Err(ModeParseError::MissingOperator),
                Some('+') => break Op::Add,
                Some('-') => break Op::Remove,
                Some('=') => break Op::Set,
                Some(&c) => {
                    who |= who_mask(c)?;
                    pos += 1;
                }
            }
        };
        pos += 1;
        if who == 0 {
            who = MODE_PERMISSION_MASK;
        }

        // Consume actions until the end of the clause. Switching to a
        // new operator folds the pending permissions into the result
        // first, so "u+r-w" behaves like "u+r,u-w".
        let mut perm = 0;
        while let Some(&c) = chars.get(pos) {
            match c {
                ',' => break,
                '+' | '-' | '=' => {
                    result = apply_mode(op, result, who, perm);
                    perm = 0;
                    op = match c {
                        '+' => Op::Add,
                        '-' => Op::Remove,
                        _ => Op::Set,
                    };
                }
                'r' => perm |= MODE_READ_ALL,
                'w' => perm |= MODE_WRITE_ALL,
                'x' => perm |= MODE_EXEC_ALL,
                // 'X' grants execute only where the running result
                // already has an execute bit set somewhere.
                'X' => {
                    if result & MODE_EXEC_ALL != 0 {
                        perm |= MODE_EXEC_ALL;
                    }
                }
                's' => {
                    if who & MODE_SETUID != 0 {
                        perm |= MODE_SETUID;
                    }
                    if who & MODE_SETGID != 0 {
                        perm |= MODE_SETGID;
                    }
                }
                't' => perm |= MODE_STICKY,
                'u' => perm |= copy_triplet(result, 6, who),
                'g' => perm |= copy_triplet(result, 3, who),
                'o' => perm |= copy_triplet(result, 0, who),
                _ => return Err(ModeParseError::InvalidPermissionSymbol(c)),
            }
            pos += 1;
        }
        result = apply_mode(op, result, who, perm);

        // A trailing comma ends the expression instead of starting an
        // empty clause.
        if chars.get(pos).is_none() {
            break;
        }
        pos += 1;
        if pos == chars.len() {
            break;
        }
    }
    Ok(result)
}
