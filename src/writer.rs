//! Document writer.
//!
//! Renders a [`Conf`] back to the resolv.conf text form. Output is always
//! re-parseable by [`read_conf`](crate::read_conf).

use std::fmt;
use std::io::Write;

use crate::config::Conf;
use crate::error::Result;

impl Conf {
    /// Writes the configuration to `writer` in the canonical layout.
    ///
    /// Sections appear in fixed order: domain, nameservers, sortlist,
    /// search, options. Empty sections are omitted entirely; an empty
    /// configuration produces no output.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::Io`](crate::ConfError::Io) if `writer` fails.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_string().as_bytes())?;
        Ok(())
    }
}

/// Renders the configuration in the canonical resolv.conf layout.
impl fmt::Display for Conf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(domain) = self.domain() {
            if !domain.name.is_empty() {
                writeln!(f, "domain {domain}")?;
            }
        }

        let mut any = false;
        for ns in self.nameservers() {
            writeln!(f, "nameserver {ns}")?;
            any = true;
        }
        if any {
            writeln!(f)?;
        }

        write_joined(f, "sortlist", self.sort_items())?;
        write_joined(f, "search", self.search_domains())?;
        write_joined(f, "options", self.options())?;
        Ok(())
    }
}

/// Writes `keyword item item ...` followed by a blank line, or nothing if
/// the iterator is empty.
fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    let mut any = false;
    for item in items {
        if any {
            write!(f, " {item}")?;
        } else {
            write!(f, "{keyword} {item}")?;
            any = true;
        }
    }
    if any {
        write!(f, "\n\n")?;
    }
    Ok(())
}
