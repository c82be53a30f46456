//! This Rust crate implements the processing steps of
//! [*Unicode IDNA Compatibility Processing*
//! (Unicode Technical Standard #46)](http://www.unicode.org/reports/tr46/):
//! mapping, normalization, label validation, and conversion to and from the
//! ASCII-compatible form used in DNS, with
//! [Punycode (RFC 3492)](https://tools.ietf.org/html/rfc3492).
//!
//! Quoting from [UTS #46’s introduction](http://www.unicode.org/reports/tr46/#Introduction):
//!
//! > Initially, domain names were restricted to ASCII characters.
//! > A system was introduced in 2003 for internationalized domain names (IDN).
//! > This system is called Internationalizing Domain Names for Applications,
//! > or IDNA2003 for short.
//! > This mechanism supports IDNs by means of a client software transformation
//! > into a format known as Punycode.
//! > A revision of IDNA was approved in 2010 (IDNA2008).
//! > This revision has a number of incompatibilities with IDNA2003.
//!
//! Every processing flag defaults to `true`, including transitional processing:
//!
//! ```
//! assert_eq!(uts46::domain_to_ascii("Faß.de").unwrap(), "fass.de");
//!
//! let config = uts46::Config::default().transitional_processing(false);
//! assert_eq!(config.to_ascii("faß.de").unwrap(), "xn--fa-hia.de");
//! ```
//!
//! The ContextJ rules (RFC 5892, Appendix A), the Bidi rules (RFC 5893) and
//! the leading combining mark rule are not enforced; the corresponding flags
//! are accepted and carried through unchanged.

#[cfg(test)]
#[macro_use(assert_matches)]
extern crate matches;

pub mod error;
pub mod mapping_table;
pub mod punycode;
pub mod range_list;
mod uts46;

pub use crate::error::Error;
pub use crate::mapping_table::{classify, Idna2008Status, Mapping, MappingTable, Status};
pub use crate::range_list::RangeList;
pub use crate::uts46::{Config, Errors};

/// The [ToASCII](http://www.unicode.org/reports/tr46/#ToASCII) operation
/// with the default [`Config`].
///
/// Return the ASCII representation a domain name,
/// normalizing characters (upper-case to lower-case and other kinds of equivalence)
/// and using Punycode as necessary.
///
/// This process may fail, in which case no part of the result is returned.
pub fn domain_to_ascii(domain: &str) -> Result<String, Errors> {
    Config::default().to_ascii(domain)
}

/// The [ToUnicode](http://www.unicode.org/reports/tr46/#ToUnicode) operation
/// with the default [`Config`].
///
/// Return the Unicode representation of a domain name,
/// normalizing characters (upper-case to lower-case and other kinds of equivalence)
/// and decoding Punycode as necessary.
///
/// This always returns a string for the mapped domain, along with any errors recorded.
pub fn domain_to_unicode(domain: &str) -> (String, Result<(), Errors>) {
    Config::default().to_unicode(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_functions_use_defaults() {
        assert_eq!(domain_to_ascii("www.Bücher.de").unwrap(), "www.xn--bcher-kva.de");
        let (unicode, result) = domain_to_unicode("www.xn--bcher-kva.de");
        assert_eq!(unicode, "www.bücher.de");
        assert!(result.is_ok());
    }
}
