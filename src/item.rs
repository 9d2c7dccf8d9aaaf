//! Configuration item types.
//!
//! A resolv.conf file holds five kinds of entries, modeled as the closed
//! [`ConfItem`] enum. Each kind knows its canonical textual rendering (the
//! token that appears in the generated file) and its identity rule — the
//! predicate [`Conf::find`](crate::Conf::find) and duplicate detection use.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::ConfError;
use crate::limits::{OPTION_ATTEMPTS_MAX, OPTION_NDOTS_MAX, OPTION_TIMEOUT_MAX};

/// One entry of a resolv.conf file.
///
/// Items compare for *identity* with [`matches`](Self::matches), the rule
/// used for duplicate detection and lookup. Identity is narrower than
/// structural equality: a sortlist pair is identified by address alone and
/// an option by its kind alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfItem {
    /// A `nameserver` line.
    Nameserver(Nameserver),
    /// The `domain` line.
    Domain(Domain),
    /// One name from the `search` line.
    Search(SearchDomain),
    /// One pair from the `sortlist` line.
    Sort(SortItem),
    /// One token from an `options` line.
    Option(ConfOption),
}

impl ConfItem {
    /// Returns `true` if `other` is the same kind and has the same identity.
    ///
    /// Cross-kind comparison is always `false`. Per kind the identity is:
    /// nameserver by address, domain and search domain by name, sortlist
    /// pair by address (netmask excluded), option by kind (value excluded).
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nameserver(a), Self::Nameserver(b)) => a.ip == b.ip,
            (Self::Domain(a), Self::Domain(b)) => a.name == b.name,
            (Self::Search(a), Self::Search(b)) => a.name == b.name,
            (Self::Sort(a), Self::Sort(b)) => a.address == b.address,
            (Self::Option(a), Self::Option(b)) => a.kind == b.kind,
            _ => false,
        }
    }

    /// The lowercase kind name, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Nameserver(_) => "nameserver",
            Self::Domain(_) => "domain",
            Self::Search(_) => "search domain",
            Self::Sort(_) => "sortlist pair",
            Self::Option(_) => "option",
        }
    }
}

impl fmt::Display for ConfItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nameserver(ns) => ns.fmt(f),
            Self::Domain(d) => d.fmt(f),
            Self::Search(s) => s.fmt(f),
            Self::Sort(s) => s.fmt(f),
            Self::Option(o) => o.fmt(f),
        }
    }
}

impl From<Nameserver> for ConfItem {
    fn from(ns: Nameserver) -> Self {
        Self::Nameserver(ns)
    }
}

impl From<Domain> for ConfItem {
    fn from(d: Domain) -> Self {
        Self::Domain(d)
    }
}

impl From<SearchDomain> for ConfItem {
    fn from(s: SearchDomain) -> Self {
        Self::Search(s)
    }
}

impl From<SortItem> for ConfItem {
    fn from(s: SortItem) -> Self {
        Self::Sort(s)
    }
}

impl From<ConfOption> for ConfItem {
    fn from(o: ConfOption) -> Self {
        Self::Option(o)
    }
}

/// A `nameserver` entry: one resolver IP address, v4 or v6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nameserver {
    /// The resolver address.
    pub ip: IpAddr,
}

impl Nameserver {
    /// Creates a nameserver entry for `ip`.
    #[must_use]
    pub const fn new(ip: IpAddr) -> Self {
        Self { ip }
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ip.fmt(f)
    }
}

/// The `domain` entry: default suffix for unqualified hostnames.
///
/// At most one domain is active in a configuration; adding a second one
/// replaces the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    /// The domain name.
    pub name: String,
}

impl Domain {
    /// Creates a domain entry named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One element of the `search` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDomain {
    /// The search suffix.
    pub name: String,
}

impl SearchDomain {
    /// Creates a search list entry named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for SearchDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One `sortlist` pair: an address with an optional netmask.
///
/// Identity is the address alone; re-adding a pair with a different netmask
/// updates the stored netmask in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortItem {
    /// The preferred address or network.
    pub address: IpAddr,
    /// Optional netmask; rendered as `address/netmask` when present.
    pub netmask: Option<IpAddr>,
}

impl SortItem {
    /// Creates a sortlist pair without a netmask.
    #[must_use]
    pub const fn new(address: IpAddr) -> Self {
        Self {
            address,
            netmask: None,
        }
    }

    /// Sets the netmask.
    #[must_use]
    pub const fn with_netmask(mut self, netmask: IpAddr) -> Self {
        self.netmask = Some(netmask);
        self
    }

    /// Returns the netmask, if any.
    #[must_use]
    pub const fn netmask(&self) -> Option<IpAddr> {
        self.netmask
    }
}

impl fmt::Display for SortItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.netmask {
            Some(mask) => write!(f, "{}/{mask}", self.address),
            None => self.address.fmt(f),
        }
    }
}

/// The recognized resolver option names.
///
/// Twelve flag options carry no value; `ndots`, `timeout` and `attempts`
/// carry a non-negative integer capped at a per-kind maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Debug,
    Rotate,
    NoCheckNames,
    Inet6,
    Ip6Bytestring,
    Ip6Dotint,
    NoIp6Dotint,
    Edns0,
    SingleRequest,
    SingleRequestReopen,
    NoTldQuery,
    UseVc,
    Ndots,
    Timeout,
    Attempts,
}

impl OptionKind {
    /// The option name as it appears in a resolv.conf file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Rotate => "rotate",
            Self::NoCheckNames => "no-check-names",
            Self::Inet6 => "inet6",
            Self::Ip6Bytestring => "ip6-bytestring",
            Self::Ip6Dotint => "ip6-dotint",
            Self::NoIp6Dotint => "no-ip6-dotint",
            Self::Edns0 => "edns0",
            Self::SingleRequest => "single-request",
            Self::SingleRequestReopen => "single-request-reopen",
            Self::NoTldQuery => "no-tld-query",
            Self::UseVc => "use-vc",
            Self::Ndots => "ndots",
            Self::Timeout => "timeout",
            Self::Attempts => "attempts",
        }
    }

    /// Returns `true` for `ndots`, `timeout` and `attempts`.
    #[must_use]
    pub const fn is_valued(self) -> bool {
        matches!(self, Self::Ndots | Self::Timeout | Self::Attempts)
    }

    /// The maximum value for a valued kind, `None` for flags.
    #[must_use]
    pub const fn max_value(self) -> Option<u32> {
        match self {
            Self::Ndots => Some(OPTION_NDOTS_MAX),
            Self::Timeout => Some(OPTION_TIMEOUT_MAX),
            Self::Attempts => Some(OPTION_ATTEMPTS_MAX),
            _ => None,
        }
    }
}

impl FromStr for OptionKind {
    type Err = ConfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "rotate" => Ok(Self::Rotate),
            "no-check-names" => Ok(Self::NoCheckNames),
            "inet6" => Ok(Self::Inet6),
            "ip6-bytestring" => Ok(Self::Ip6Bytestring),
            "ip6-dotint" => Ok(Self::Ip6Dotint),
            "no-ip6-dotint" => Ok(Self::NoIp6Dotint),
            "edns0" => Ok(Self::Edns0),
            "single-request" => Ok(Self::SingleRequest),
            "single-request-reopen" => Ok(Self::SingleRequestReopen),
            "no-tld-query" => Ok(Self::NoTldQuery),
            "use-vc" => Ok(Self::UseVc),
            "ndots" => Ok(Self::Ndots),
            "timeout" => Ok(Self::Timeout),
            "attempts" => Ok(Self::Attempts),
            _ => Err(ConfError::UnknownOption(s.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolver option: a kind plus, for valued kinds, an integer value.
///
/// Construction is validated: a flag kind never carries a value and a
/// valued kind always does, so every `ConfOption` renders to a valid
/// option token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfOption {
    kind: OptionKind,
    value: Option<u32>,
}

impl ConfOption {
    /// Creates a flag option such as `debug` or `rotate`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::InvalidValue`] if `kind` requires a value.
    pub fn flag(kind: OptionKind) -> Result<Self, ConfError> {
        if kind.is_valued() {
            return Err(ConfError::InvalidValue {
                option: kind.as_str(),
                reason: "a value is required",
            });
        }
        Ok(Self { kind, value: None })
    }

    /// Creates a valued option such as `ndots:3`.
    ///
    /// The value is stored as given; capping to the per-kind maximum
    /// happens when the option is added to a [`Conf`](crate::Conf).
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::InvalidValue`] if `kind` does not take a value.
    pub fn valued(kind: OptionKind, value: u32) -> Result<Self, ConfError> {
        if !kind.is_valued() {
            return Err(ConfError::InvalidValue {
                option: kind.as_str(),
                reason: "this option takes no value",
            });
        }
        Ok(Self {
            kind,
            value: Some(value),
        })
    }

    /// The option kind.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        self.kind
    }

    /// The stored value; `None` for flag options.
    #[must_use]
    pub const fn value(&self) -> Option<u32> {
        self.value
    }

    /// Overwrites the value of a valued option. No-op for flags.
    pub const fn set(&mut self, value: u32) {
        if self.kind.is_valued() {
            self.value = Some(value);
        }
    }
}

impl fmt::Display for ConfOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}:{value}", self.kind),
            None => self.kind.fmt(f),
        }
    }
}
