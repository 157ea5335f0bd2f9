// Copyright (C) 2025-2026, Benjamin Drung <bdrung@posteo.de>
// SPDX-License-Identifier: ISC

//! Permission bit layout used throughout the toolkit. The constants
//! mirror the classic 12-bit Unix permission set and are defined here
//! instead of being taken from a platform header.

pub const MODE_SETUID: u32 = 0o4000;
pub const MODE_SETGID: u32 = 0o2000;
pub const MODE_STICKY: u32 = 0o1000;
pub const MODE_READ_OWNER: u32 = 0o400;
pub const MODE_WRITE_OWNER: u32 = 0o200;
pub const MODE_EXEC_OWNER: u32 = 0o100;
pub const MODE_READ_GROUP: u32 = 0o040;
pub const MODE_WRITE_GROUP: u32 = 0o020;
pub const MODE_EXEC_GROUP: u32 = 0o010;
pub const MODE_READ_OTHER: u32 = 0o004;
pub const MODE_WRITE_OTHER: u32 = 0o002;
pub const MODE_EXEC_OTHER: u32 = 0o001;

pub const MODE_RWX_OWNER: u32 = 0o700;
pub const MODE_RWX_GROUP: u32 = 0o070;
pub const MODE_RWX_OTHER: u32 = 0o007;
pub const MODE_READ_ALL: u32 = 0o444;
pub const MODE_WRITE_ALL: u32 = 0o222;
pub const MODE_EXEC_ALL: u32 = 0o111;
pub const MODE_PERMISSION_MASK: u32 = 0o7777;

/// ls-style ASCII representation of the permission bits
pub fn mode_string(mode: u32) -> [u8; 9] {
    [
        if mode & MODE_READ_OWNER != 0 { b'r' } else { b'-' },
        if mode & MODE_WRITE_OWNER != 0 { b'w' } else { b'-' },
        match mode & 0o4100 {
            0o4100 => b's', // set-uid and executable by owner
            0o4000 => b'S', // set-uid but not executable by owner
            0o0100 => b'x',
            _ => b'-',
        },
        if mode & MODE_READ_GROUP != 0 { b'r' } else { b'-' },
        if mode & MODE_WRITE_GROUP != 0 { b'w' } else { b'-' },
        match mode & 0o2010 {
            0o2010 => b's', // set-gid and executable by group
            0o2000 => b'S', // set-gid but not executable by group
            0o0010 => b'x',
            _ => b'-',
        },
        if mode & MODE_READ_OTHER != 0 { b'r' } else { b'-' },
        if mode & MODE_WRITE_OTHER != 0 { b'w' } else { b'-' },
        match mode & 0o1001 {
            0o1001 => b't', // sticky and executable by others
            0o1000 => b'T', // sticky but not executable by others
            0o0001 => b'x',
            _ => b'-',
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_str(mode: u32) -> String {
        String::from_utf8(mode_string(mode).to_vec()).unwrap()
    }

    #[test]
    fn test_mode_string_regular() {
        assert_eq!(mode_str(0o644), "rw-r--r--");
        assert_eq!(mode_str(0o755), "rwxr-xr-x");
        assert_eq!(mode_str(0o000), "---------");
        assert_eq!(mode_str(0o777), "rwxrwxrwx");
    }

    #[test]
    fn test_mode_string_setuid() {
        assert_eq!(mode_str(0o4755), "rwsr-xr-x");
        assert_eq!(mode_str(0o4644), "rwSr--r--");
    }

    #[test]
    fn test_mode_string_setgid() {
        assert_eq!(mode_str(0o2755), "rwxr-sr-x");
        assert_eq!(mode_str(0o2644), "rw-r-Sr--");
    }

    #[test]
    fn test_mode_string_sticky() {
        assert_eq!(mode_str(0o1777), "rwxrwxrwt");
        assert_eq!(mode_str(0o1666), "rw-rw-rwT");
    }
}
