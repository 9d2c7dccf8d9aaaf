//! Limits imposed by the resolv.conf format.
//!
//! These mirror the limits documented in `man 5 resolv.conf`: the libc
//! resolver silently ignores entries beyond them, so this crate refuses to
//! store more than the resolver would ever use.

/// Maximum number of `nameserver` entries.
pub const NAMESERVER_MAX_COUNT: usize = 3;

/// Maximum number of entries in the `search` list.
pub const SEARCH_DOMAIN_MAX_COUNT: usize = 6;

/// Maximum combined character count across all `search` list entries.
pub const SEARCH_DOMAIN_MAX_CHARS: usize = 256;

/// Maximum number of `sortlist` pairs.
pub const SORTLIST_MAX_COUNT: usize = 10;

/// Maximum value for `options ndots:n`; larger values are capped.
pub const OPTION_NDOTS_MAX: u32 = 15;

/// Maximum value for `options timeout:n`; larger values are capped.
pub const OPTION_TIMEOUT_MAX: u32 = 30;

/// Maximum value for `options attempts:n`; larger values are capped.
pub const OPTION_ATTEMPTS_MAX: u32 = 5;
