//! Exit codes (BSD sysexits.h compatible, except usage)

/// Command line usage error (no image source given)
pub const USAGE: i32 = 1;

/// Data format error (response could not be rendered)
pub const DATAERR: i32 = 65;

/// Cannot open input (unreadable image file)
pub const NOINPUT: i32 = 66;

/// Service unavailable (request failed or was rejected)
pub const UNAVAILABLE: i32 = 69;

/// Permission denied (no usable credentials)
pub const NOPERM: i32 = 77;

/// Configuration error
pub const CONFIG: i32 = 78;
