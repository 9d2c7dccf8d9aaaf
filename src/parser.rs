//! Line parser and document reader.
//!
//! [`read_conf`] consumes a whole text stream; [`parse_line`] turns one
//! non-comment line into typed items. Parse errors and admission errors
//! are accumulated so a single bad line never aborts the read.

use std::io::Read;
use std::net::IpAddr;

use crate::config::Conf;
use crate::error::{ConfError, Errors, Result};
use crate::item::{ConfItem, ConfOption, Domain, Nameserver, OptionKind, SearchDomain, SortItem};

/// Reads a resolv.conf document from `reader`.
///
/// Blank lines and comment lines (first non-whitespace character `#` or
/// `;`) are skipped. Every other line is parsed and its items added to the
/// returned [`Conf`]; parse errors and admission rejections are collected
/// into the returned [`Errors`], which is empty for a clean document. The
/// configuration is returned even when some lines were faulty.
///
/// # Errors
///
/// Returns [`ConfError::Io`] if the underlying read fails; no partial
/// configuration is produced in that case.
///
/// # Example
///
/// ```
/// let (conf, errors) = resolvconf::read_conf("nameserver 8.8.8.8".as_bytes()).unwrap();
/// assert!(errors.is_empty());
/// assert_eq!(conf.nameservers().count(), 1);
/// ```
pub fn read_conf<R: Read>(mut reader: R) -> Result<(Conf, Errors)> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut conf = Conf::new();
    let mut errors = Errors::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        match parse_line(line) {
            Ok(items) => {
                if let Err(errs) = conf.add(items) {
                    errors.extend(errs);
                }
            }
            Err(e) => errors.push(e),
        }
    }
    Ok((conf, errors))
}

/// Parses one trimmed, non-empty, non-comment line into typed items.
///
/// The first whitespace-separated token selects the keyword; `search`,
/// `sortlist` and `options` lines may produce several items. A faulty
/// token fails the whole line and none of its items are returned.
///
/// # Errors
///
/// Returns the parse failure for the first faulty token, or
/// [`ConfError::UnknownKeyword`] for an unrecognized keyword.
pub fn parse_line(line: &str) -> Result<Vec<ConfItem>> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(Vec::new());
    };
    match keyword {
        "nameserver" => {
            let token = tokens.next().ok_or(ConfError::MissingArgument("nameserver"))?;
            let ip = parse_ip(token)?;
            Ok(vec![Nameserver::new(ip).into()])
        }
        "domain" => {
            // Tokens past the name are ignored.
            let name = tokens.next().ok_or(ConfError::MissingArgument("domain"))?;
            Ok(vec![Domain::new(name).into()])
        }
        "search" => Ok(tokens.map(|name| SearchDomain::new(name).into()).collect()),
        "sortlist" => tokens
            .map(|token| parse_sortlist_pair(token).map(ConfItem::from))
            .collect(),
        "options" => tokens
            .map(|token| parse_option(token).map(ConfItem::from))
            .collect(),
        _ => Err(ConfError::UnknownKeyword(keyword.to_string())),
    }
}

fn parse_ip(token: &str) -> Result<IpAddr> {
    token
        .parse()
        .map_err(|_| ConfError::MalformedAddress(token.to_string()))
}

/// Parses one `sortlist` token of the form `address` or `address/netmask`.
fn parse_sortlist_pair(token: &str) -> Result<SortItem> {
    match token.split_once('/') {
        Some((addr, mask)) => {
            let address = parse_ip(addr)?;
            let netmask: IpAddr = mask
                .parse()
                .map_err(|_| ConfError::MalformedNetmask(token.to_string()))?;
            Ok(SortItem::new(address).with_netmask(netmask))
        }
        None => Ok(SortItem::new(parse_ip(token)?)),
    }
}

/// Parses one `options` token, either a bare flag name or `name:value`.
pub(crate) fn parse_option(token: &str) -> Result<ConfOption> {
    let (name, value) = match token.split_once(':') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    };
    let kind: OptionKind = name.parse()?;
    if kind.is_valued() {
        let raw = value.ok_or_else(|| ConfError::MalformedOptionValue {
            option: name.to_string(),
            value: String::new(),
        })?;
        let parsed = raw.parse().map_err(|_| ConfError::MalformedOptionValue {
            option: name.to_string(),
            value: raw.to_string(),
        })?;
        ConfOption::valued(kind, parsed)
    } else {
        // A flag followed by a colon suffix ("debug:1") is not a valid token.
        if value.is_some() {
            return Err(ConfError::UnknownOption(token.to_string()));
        }
        ConfOption::flag(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(s: &str) -> (Conf, Errors) {
        read_conf(s.as_bytes()).unwrap()
    }

    #[test]
    fn reads_nameserver() {
        let (conf, errors) = read("nameserver 8.8.8.8");
        assert!(errors.is_empty());
        let servers: Vec<_> = conf.nameservers().collect();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].ip, "8.8.8.8".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn faulty_nameserver_is_reported_and_not_stored() {
        for text in ["nameserver 8.8.8", "nameserver 8.8.8.8.8", "nameserver www.example.org"] {
            let (conf, errors) = read(text);
            assert!(!errors.is_empty(), "{text}");
            assert_eq!(conf.nameservers().count(), 0, "{text}");
        }
    }

    #[test]
    fn unknown_keyword_is_reported() {
        let (conf, errors) = read("nameserv 8.8.8.9");
        assert!(matches!(
            errors.iter().next().unwrap(),
            ConfError::UnknownKeyword(_)
        ));
        assert_eq!(conf.nameservers().count(), 0);
    }

    #[test]
    fn fourth_nameserver_line_errors_but_three_are_kept() {
        let text = "nameserver 8.8.8.8\nnameserver 8.8.8.9\nnameserver 8.8.8.10\nnameserver 8.8.8.11\n";
        let (conf, errors) = read(text);
        assert_eq!(errors.len(), 1);
        assert_eq!(conf.nameservers().count(), 3);
    }

    #[test]
    fn duplicate_nameserver_line_errors() {
        let (conf, errors) = read("nameserver 8.8.8.8\nnameserver 8.8.8.8\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(conf.nameservers().count(), 1);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        for text in [
            "# This is a comment",
            "#This is another comment",
            "  #This one has leading whitespace",
            "; And a semicolon comment",
            "\n",
            "",
        ] {
            let (conf, errors) = read(text);
            assert!(errors.is_empty(), "{text:?}");
            assert!(conf.is_empty(), "{text:?}");
        }
    }

    #[test]
    fn reads_domain_with_extra_whitespace() {
        for text in ["domain foo.com", "domain     foo.com", "    domain   foo.com"] {
            let (conf, errors) = read(text);
            assert!(errors.is_empty());
            assert_eq!(conf.domain().unwrap().name, "foo.com");
        }
    }

    #[test]
    fn missing_argument_is_an_error() {
        for text in ["nameserver", "domain"] {
            let (conf, errors) = read(text);
            assert!(matches!(
                errors.iter().next().unwrap(),
                ConfError::MissingArgument(_)
            ));
            assert!(conf.is_empty());
        }
    }

    #[test]
    fn reads_multiple_search_domains_in_order() {
        let (conf, errors) = read("search foo.com bar.com     baz.com");
        assert!(errors.is_empty());
        let names: Vec<_> = conf.search_domains().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["foo.com", "bar.com", "baz.com"]);
    }

    #[test]
    fn reads_sortlist_with_and_without_netmask() {
        let (conf, errors) = read("sortlist 130.155.160.0/255.255.240.0 130.155.0.0");
        assert!(errors.is_empty());
        let pairs: Vec<_> = conf.sort_items().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].to_string(), "130.155.160.0/255.255.240.0");
        assert_eq!(pairs[1].to_string(), "130.155.0.0");
        assert_eq!(pairs[1].netmask(), None);
    }

    #[test]
    fn faulty_sortlist_tokens_fail_the_line() {
        let (conf, errors) = read("sortlist 130.155.160");
        assert!(matches!(
            errors.iter().next().unwrap(),
            ConfError::MalformedAddress(_)
        ));
        assert_eq!(conf.sort_items().count(), 0);

        let (conf, errors) = read("sortlist 130.155.160.0/255.255.240");
        assert!(matches!(
            errors.iter().next().unwrap(),
            ConfError::MalformedNetmask(_)
        ));
        assert_eq!(conf.sort_items().count(), 0);
    }

    #[test]
    fn eleven_sortlist_pairs_error_and_ten_are_kept() {
        let text = "sortlist 1.1.1.0 1.1.1.1 1.1.1.2 1.1.1.3 1.1.1.4 1.1.1.5 \
                    1.1.1.6 1.1.1.7 1.1.1.8 1.1.1.9 1.1.1.10";
        let (conf, errors) = read(text);
        assert_eq!(errors.len(), 1);
        assert_eq!(conf.sort_items().count(), 10);
    }

    #[test]
    fn reads_options() {
        let (conf, errors) = read("options debug rotate ndots:12");
        assert!(errors.is_empty());
        let opts: Vec<_> = conf.options().map(ToString::to_string).collect();
        assert_eq!(opts, ["debug", "rotate", "ndots:12"]);
    }

    #[test]
    fn all_fifteen_options_parse() {
        let text = "options debug   ndots:3 timeout:5 attempts:4 \
                    rotate no-check-names inet6 ip6-bytestring ip6-dotint \
                    no-ip6-dotint edns0 single-request single-request-reopen \
                    no-tld-query use-vc";
        let (conf, errors) = read(text);
        assert!(errors.is_empty());
        assert_eq!(conf.options().count(), 15);
    }

    #[test]
    fn unknown_option_fails_the_line() {
        let (conf, errors) = read("options foo");
        assert!(matches!(
            errors.iter().next().unwrap(),
            ConfError::UnknownOption(_)
        ));
        assert_eq!(conf.options().count(), 0);
    }

    #[test]
    fn malformed_option_values_fail_the_line() {
        for text in ["options ndots:", "options ndots:foos", "options ndots:-1", "options ndots"] {
            let (conf, errors) = read(text);
            assert!(matches!(
                errors.iter().next().unwrap(),
                ConfError::MalformedOptionValue { .. }
            ), "{text}");
            assert_eq!(conf.options().count(), 0, "{text}");
        }
    }

    #[test]
    fn flag_option_with_value_suffix_is_unknown() {
        let err = parse_option("debug:1").unwrap_err();
        assert!(matches!(err, ConfError::UnknownOption(_)));
    }

    #[test]
    fn io_failure_is_fatal() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let err = read_conf(FailingReader).unwrap_err();
        assert!(matches!(err, ConfError::Io(_)));
    }
}
