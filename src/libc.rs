// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

use std::io::{Error, Result};
use std::mem::MaybeUninit;

/// Owned copy of the fields returned by uname(2).
#[derive(Debug, PartialEq)]
pub struct UtsName {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

fn string_from_field(field: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Query the system identification via uname(2).
pub fn uname() -> Result<UtsName> {
    let mut uts = MaybeUninit::<libc::utsname>::uninit();
    let rc = unsafe { libc::uname(uts.as_mut_ptr()) };
    if rc != 0 {
        return Err(Error::last_os_error());
    }
    let uts = unsafe { uts.assume_init() };
    Ok(UtsName {
        sysname: string_from_field(&uts.sysname),
        nodename: string_from_field(&uts.nodename),
        release: string_from_field(&uts.release),
        version: string_from_field(&uts.version),
        machine: string_from_field(&uts.machine),
    })
}

/// Read the file mode creation mask of the process without changing it.
pub fn get_umask() -> u32 {
    let mask = unsafe { libc::umask(0) };
    unsafe { libc::umask(mask) };
    u32::from(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_fields_are_set() {
        let uts = uname().unwrap();
        assert!(!uts.sysname.is_empty());
        assert!(!uts.release.is_empty());
        assert!(!uts.machine.is_empty());
    }

    #[test]
    fn test_get_umask_does_not_change_mask() {
        let first = get_umask();
        let second = get_umask();
        assert_eq!(first, second);
        assert_eq!(first & !0o7777, 0);
    }

    #[test]
    fn test_string_from_field() {
        let field: Vec<libc::c_char> = b"Linux\0\0\0".iter().map(|&c| c as libc::c_char).collect();
        assert_eq!(string_from_field(&field), "Linux");
    }
}
