//! The in-memory configuration model.
//!
//! [`Conf`] holds the ordered collection of configuration items and
//! enforces the admission rules of the resolv.conf format: capacity
//! limits, duplicate detection and the per-kind update-in-place semantics.

use std::fmt;

use crate::error::{ConfError, Errors, Result};
use crate::item::{ConfItem, ConfOption, Domain, Nameserver, SearchDomain, SortItem};
use crate::limits::{
    NAMESERVER_MAX_COUNT, SEARCH_DOMAIN_MAX_CHARS, SEARCH_DOMAIN_MAX_COUNT, SORTLIST_MAX_COUNT,
};
use crate::sink::{DiagnosticSink, NoopSink};

/// An in-memory resolv.conf configuration.
///
/// Created empty, mutated through [`add`](Self::add) and
/// [`remove`](Self::remove), and rendered back to text with
/// [`write`](Self::write) or `to_string()`. Every successful mutation is
/// immediately visible; there is no staging phase.
///
/// `Conf` is not safe for concurrent mutation; callers sharing one
/// instance across threads must serialize access themselves.
///
/// # Example
///
/// ```
/// use resolvconf::{Conf, Nameserver};
///
/// let mut conf = Conf::new();
/// conf.add([Nameserver::new("8.8.8.8".parse().unwrap())]).unwrap();
/// assert_eq!(conf.to_string(), "nameserver 8.8.8.8\n\n");
/// ```
pub struct Conf {
    items: Vec<ConfItem>,
    sink: Box<dyn DiagnosticSink>,
}

impl Conf {
    /// Creates an empty configuration with a no-op diagnostic sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Box::new(NoopSink))
    }

    /// Creates an empty configuration reporting trace lines to `sink`.
    #[must_use]
    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            items: Vec::new(),
            sink,
        }
    }

    /// Adds items in order, applying the per-kind admission rules.
    ///
    /// One item's rejection does not stop later items from being
    /// processed; all rejections are collected into the returned
    /// [`Errors`].
    ///
    /// # Errors
    ///
    /// Returns the accumulated rejections, one [`ConfError`] per refused
    /// item.
    pub fn add<I>(&mut self, items: I) -> std::result::Result<(), Errors>
    where
        I: IntoIterator,
        I::Item: Into<ConfItem>,
    {
        let mut errors = Errors::new();
        for item in items {
            if let Err(e) = self.add_item(item) {
                errors.push(e);
            }
        }
        errors.into_result()
    }

    /// Adds a single item.
    ///
    /// # Errors
    ///
    /// Returns the admission failure for this item, if any.
    pub fn add_item(&mut self, item: impl Into<ConfItem>) -> Result<()> {
        match item.into() {
            ConfItem::Nameserver(ns) => self.add_nameserver(ns),
            ConfItem::Domain(d) => self.set_domain(d),
            ConfItem::Search(s) => self.add_search_domain(s),
            ConfItem::Sort(s) => self.add_sort_item(s),
            ConfItem::Option(o) => self.add_option(o),
        }
    }

    /// Removes items in order, matching by identity.
    ///
    /// A domain probe matches the stored domain regardless of its name;
    /// removing any [`Domain`] clears the current one.
    ///
    /// # Errors
    ///
    /// Returns the accumulated failures, one [`ConfError::NotFound`] per
    /// missing item.
    pub fn remove<I>(&mut self, items: I) -> std::result::Result<(), Errors>
    where
        I: IntoIterator,
        I::Item: Into<ConfItem>,
    {
        let mut errors = Errors::new();
        for item in items {
            if let Err(e) = self.remove_item(item) {
                errors.push(e);
            }
        }
        errors.into_result()
    }

    /// Removes a single item by identity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::NotFound`] if no stored item matches.
    pub fn remove_item(&mut self, item: impl Into<ConfItem>) -> Result<()> {
        let probe = item.into();
        let pos = match probe {
            // Any domain probe clears the current domain.
            ConfItem::Domain(_) => self.domain_position(),
            _ => self.position(&probe),
        };
        match pos {
            Some(i) => {
                let removed = self.items.remove(i);
                self.sink
                    .record(&format!("removed {} {removed}", removed.kind_name()));
                Ok(())
            }
            None => Err(ConfError::NotFound {
                kind: probe.kind_name(),
                item: probe.to_string(),
            }),
        }
    }

    /// Returns the stored item matching `probe`'s identity.
    #[must_use]
    pub fn find(&self, probe: &ConfItem) -> Option<&ConfItem> {
        self.position(probe).map(|i| &self.items[i])
    }

    /// Returns a mutable handle to the stored item matching `probe`.
    ///
    /// This is the explicit mutate-through-find operation: changes made
    /// through the returned reference are visible in subsequent getters
    /// and in generated output.
    #[must_use]
    pub fn find_mut(&mut self, probe: &ConfItem) -> Option<&mut ConfItem> {
        self.position(probe).map(|i| &mut self.items[i])
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ConfItem] {
        &self.items
    }

    /// Returns `true` if no items are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All nameservers in insertion order.
    pub fn nameservers(&self) -> impl Iterator<Item = &Nameserver> {
        self.items.iter().filter_map(|i| match i {
            ConfItem::Nameserver(ns) => Some(ns),
            _ => None,
        })
    }

    /// The current domain, if one is set.
    #[must_use]
    pub fn domain(&self) -> Option<&Domain> {
        self.items.iter().find_map(|i| match i {
            ConfItem::Domain(d) => Some(d),
            _ => None,
        })
    }

    /// All search domains in insertion order.
    pub fn search_domains(&self) -> impl Iterator<Item = &SearchDomain> {
        self.items.iter().filter_map(|i| match i {
            ConfItem::Search(s) => Some(s),
            _ => None,
        })
    }

    /// All sortlist pairs in insertion order.
    pub fn sort_items(&self) -> impl Iterator<Item = &SortItem> {
        self.items.iter().filter_map(|i| match i {
            ConfItem::Sort(s) => Some(s),
            _ => None,
        })
    }

    /// All options in insertion order.
    pub fn options(&self) -> impl Iterator<Item = &ConfOption> {
        self.items.iter().filter_map(|i| match i {
            ConfItem::Option(o) => Some(o),
            _ => None,
        })
    }

    fn position(&self, probe: &ConfItem) -> Option<usize> {
        self.items.iter().position(|item| probe.matches(item))
    }

    fn domain_position(&self) -> Option<usize> {
        self.items
            .iter()
            .position(|item| matches!(item, ConfItem::Domain(_)))
    }

    fn add_nameserver(&mut self, ns: Nameserver) -> Result<()> {
        if self.nameservers().count() >= NAMESERVER_MAX_COUNT {
            return Err(ConfError::CapacityExceeded {
                kind: "nameserver",
                limit: NAMESERVER_MAX_COUNT,
            });
        }
        let item = ConfItem::Nameserver(ns);
        if self.position(&item).is_some() {
            return Err(ConfError::DuplicateItem {
                kind: "nameserver",
                item: ns.to_string(),
            });
        }
        self.sink.record(&format!("added nameserver {ns}"));
        self.items.push(item);
        Ok(())
    }

    fn set_domain(&mut self, domain: Domain) -> Result<()> {
        if let Some(i) = self.domain_position() {
            self.sink.record(&format!("updated domain to {domain}"));
            self.items[i] = ConfItem::Domain(domain);
        } else {
            self.sink.record(&format!("added domain {domain}"));
            self.items.push(ConfItem::Domain(domain));
        }
        Ok(())
    }

    fn add_search_domain(&mut self, search: SearchDomain) -> Result<()> {
        if self.search_domains().any(|s| s.name == search.name) {
            return Err(ConfError::DuplicateItem {
                kind: "search domain",
                item: search.name.clone(),
            });
        }
        if self.search_domains().count() >= SEARCH_DOMAIN_MAX_COUNT {
            return Err(ConfError::CapacityExceeded {
                kind: "search domain",
                limit: SEARCH_DOMAIN_MAX_COUNT,
            });
        }
        let stored: usize = self.search_domains().map(|s| s.name.chars().count()).sum();
        if stored + search.name.chars().count() > SEARCH_DOMAIN_MAX_CHARS {
            return Err(ConfError::CapacityExceeded {
                kind: "search domain character",
                limit: SEARCH_DOMAIN_MAX_CHARS,
            });
        }
        self.sink.record(&format!("added search domain {search}"));
        self.items.push(ConfItem::Search(search));
        Ok(())
    }

    fn add_sort_item(&mut self, sort: SortItem) -> Result<()> {
        let existing = self.items.iter_mut().find_map(|item| match item {
            ConfItem::Sort(s) if s.address == sort.address => Some(s),
            _ => None,
        });
        if let Some(existing) = existing {
            if existing.netmask == sort.netmask {
                return Err(ConfError::DuplicateItem {
                    kind: "sortlist pair",
                    item: sort.to_string(),
                });
            }
            existing.netmask = sort.netmask;
            self.sink
                .record(&format!("updated netmask of sortlist pair {sort}"));
            return Ok(());
        }
        if self.sort_items().count() >= SORTLIST_MAX_COUNT {
            return Err(ConfError::CapacityExceeded {
                kind: "sortlist pair",
                limit: SORTLIST_MAX_COUNT,
            });
        }
        self.sink.record(&format!("added sortlist pair {sort}"));
        self.items.push(ConfItem::Sort(sort));
        Ok(())
    }

    fn add_option(&mut self, mut option: ConfOption) -> Result<()> {
        // Values above the per-kind maximum are capped, not rejected.
        if let (Some(value), Some(max)) = (option.value(), option.kind().max_value()) {
            if value > max {
                self.sink.warn(&format!(
                    "option {} capped to {max}, requested value was {value}",
                    option.kind()
                ));
                option.set(max);
            }
        }
        let existing = self.items.iter_mut().find_map(|item| match item {
            ConfItem::Option(o) if o.kind() == option.kind() => Some(o),
            _ => None,
        });
        if let Some(existing) = existing {
            // A valued option of the same kind is updated in place; a
            // repeated flag is an error.
            if let Some(value) = option.value() {
                existing.set(value);
                self.sink.record(&format!("updated option {option}"));
                return Ok(());
            }
            return Err(ConfError::AlreadyPresent(option.to_string()));
        }
        self.sink.record(&format!("added option {option}"));
        self.items.push(ConfItem::Option(option));
        Ok(())
    }
}

impl Default for Conf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Conf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conf").field("items", &self.items).finish()
    }
}
