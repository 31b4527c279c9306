//! Shared constants

/// Number of core attributes (STR, INT, WIS, DEX, CON, CHR)
pub const STAT_MAX: usize = 6;

/// Longest character/account name accepted by the server
pub const MAX_NAME_LEN: usize = 15;
