// Copyright (C) 2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::io::{Result, Write};

use crate::libc::UtsName;
use crate::logger::Logger;

/// Selection of the utsname fields to print.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Fields {
    pub machine: bool,
    pub nodename: bool,
    pub release: bool,
    pub sysname: bool,
    pub version: bool,
}

impl Fields {
    pub fn all() -> Self {
        Self {
            machine: true,
            nodename: true,
            release: true,
            sysname: true,
            version: true,
        }
    }

    pub fn any(&self) -> bool {
        self.machine || self.nodename || self.release || self.sysname || self.version
    }
}

// The print order is fixed and independent of the flag order.
fn format_uname(uts: &UtsName, fields: &Fields) -> String {
    let mut selected = Vec::new();
    if fields.sysname {
        selected.push(uts.sysname.as_str());
    }
    if fields.nodename {
        selected.push(uts.nodename.as_str());
    }
    if fields.release {
        selected.push(uts.release.as_str());
    }
    if fields.version {
        selected.push(uts.version.as_str());
    }
    if fields.machine {
        selected.push(uts.machine.as_str());
    }
    selected.join(" ")
}

/// Print the selected system identification fields.
///
/// **Warning**: This function was designed for the `uname` command-line
/// application. The API can change between releases and no stability
/// promises are given.
pub fn print_uname<W: Write, LW: Write>(
    uts: &UtsName,
    fields: &Fields,
    out: &mut W,
    logger: &mut Logger<LW>,
) -> Result<()> {
    debug!(logger, "{uts:?}")?;
    writeln!(out, "{}", format_uname(uts, fields))
}
