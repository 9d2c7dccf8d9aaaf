//! # resolvconf
//!
//! Parse, manipulate and regenerate resolv.conf resolver configuration.
//!
//! The crate models a resolv.conf file as an ordered collection of typed
//! items — nameservers, the domain, search domains, sortlist pairs and
//! options — and enforces the format's rules on mutation: at most 3
//! nameservers, 6 search domains (256 characters combined), 10 sortlist
//! pairs, no duplicates, and per-option value caps. The model can be built
//! from text with [`read_conf`] and rendered back with [`Conf::write`];
//! generated output is always re-parseable.
//!
//! ## Quick start
//!
//! ```rust
//! use resolvconf::{read_conf, Domain, Nameserver};
//!
//! let text = "# our upstreams\nnameserver 8.8.8.8\nnameserver 8.8.4.4\n";
//! let (mut conf, errors) = read_conf(text.as_bytes()).unwrap();
//! assert!(errors.is_empty());
//!
//! conf.remove([Nameserver::new("8.8.4.4".parse().unwrap())]).unwrap();
//! conf.add([Domain::new("example.com")]).unwrap();
//!
//! assert_eq!(conf.to_string(), "domain example.com\nnameserver 8.8.8.8\n\n");
//! ```
//!
//! ## Error accumulation
//!
//! Batch operations never stop at the first fault: [`Conf::add`],
//! [`Conf::remove`] and [`read_conf`] process every item or line and
//! collect all rejections into an [`Errors`] value. Only a failing read
//! of the underlying stream aborts [`read_conf`] early.
//!
//! ## I/O
//!
//! The crate performs no file-system access of its own; [`read_conf`]
//! accepts any [`std::io::Read`] and [`Conf::write`] any
//! [`std::io::Write`], so file paths and their I/O stay with the caller.
//!
//! ## Diagnostics
//!
//! A [`DiagnosticSink`] can be attached with [`Conf::with_sink`] to
//! receive a trace line per add/remove and a warning when an option value
//! is capped. [`TracingSink`] forwards these to the `tracing` ecosystem;
//! the default [`NoopSink`] discards them.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod item;
pub mod limits;
pub mod parser;
pub mod sink;
mod writer;

pub use config::Conf;
pub use error::{ConfError, Errors, Result};
pub use item::{ConfItem, ConfOption, Domain, Nameserver, OptionKind, SearchDomain, SortItem};
pub use parser::{parse_line, read_conf};
pub use sink::{DiagnosticSink, NoopSink, TracingSink};
