//! [*Unicode IDNA Compatibility Processing*
//! (Unicode Technical Standard #46)](http://www.unicode.org/reports/tr46/)

use crate::mapping_table::{MappingTable, Status};
use crate::punycode;
use log::trace;
use std::{error::Error as StdError, fmt};
use unicode_normalization::{is_nfc, UnicodeNormalization};

pub(crate) const PUNYCODE_PREFIX: &str = "xn--";

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

fn map_char(
    table: &MappingTable,
    codepoint: char,
    config: Config,
    output: &mut String,
    errors: &mut Errors,
) {
    if let '.' | '-' | 'a'..='z' | '0'..='9' = codepoint {
        output.push(codepoint);
        return;
    }
    let mapping = table.find_char(codepoint);
    match mapping.status() {
        Status::Valid => output.push(codepoint),
        Status::Ignored => {}
        Status::Mapped => output.push_str(mapping.replacement()),
        Status::Deviation => {
            if config.transitional_processing {
                output.push_str(mapping.replacement())
            } else {
                output.push(codepoint)
            }
        }
        Status::Disallowed => {
            trace!("disallowed code point U+{:04X}", codepoint as u32);
            errors.disallowed_character = true;
            output.push(codepoint);
        }
        Status::DisallowedStd3Valid => {
            if config.use_std3_ascii_rules {
                trace!("code point U+{:04X} is disallowed by STD3 rules", codepoint as u32);
                errors.disallowed_by_std3_ascii_rules = true;
            }
            output.push(codepoint)
        }
        Status::DisallowedStd3Mapped => {
            if config.use_std3_ascii_rules {
                trace!("code point U+{:04X} maps outside STD3 rules", codepoint as u32);
                errors.disallowed_mapped_in_std3 = true;
                output.push(codepoint)
            } else {
                output.push_str(mapping.replacement())
            }
        }
    }
}

/// Criteria that only apply to labels produced by Punycode decoding.
#[derive(Clone, Copy)]
struct LabelChecks {
    check_normalization: bool,
    check_dot: bool,
}

impl LabelChecks {
    const MAPPED: LabelChecks = LabelChecks { check_normalization: false, check_dot: false };
    const DECODED: LabelChecks = LabelChecks { check_normalization: true, check_dot: true };
}

/// Check the validity criteria for the given label
///
/// http://www.unicode.org/reports/tr46/#Validity_Criteria
fn is_valid(label: &str, config: Config, checks: LabelChecks) -> bool {
    if checks.check_normalization && !is_nfc(label) {
        return false;
    }
    if config.check_hyphens {
        let mut chars = label.chars();
        if chars.nth(2) == Some('-') && chars.next() == Some('-') {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
    }
    if checks.check_dot && label.contains('.') {
        return false;
    }
    let table = MappingTable::global();
    let statuses_ok = label.chars().all(|c| {
        match table.find_char(c).status().resolve_std3(config.use_std3_ascii_rules) {
            Status::Valid => true,
            Status::Deviation => !config.transitional_processing,
            _ => false,
        }
    });
    if !statuses_ok {
        return false;
    }
    // Not enforced: the ContextJ rules of RFC 5892 Appendix A (check_joiners),
    // the Bidi rules of RFC 5893 (check_bidi) and the leading combining mark rule.
    true
}

/// Only `a-z`, `0-9` and `.`: every code point is valid and already normalized.
fn is_simple(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'.'))
}

/// http://www.unicode.org/reports/tr46/#Processing
fn processing(domain: &str, config: Config) -> (String, Errors) {
    if is_simple(domain) {
        return (domain.to_owned(), Errors::default());
    }
    let table = MappingTable::global();
    let mut errors = Errors::default();
    let mut mapped = String::with_capacity(domain.len());
    for c in domain.chars() {
        map_char(table, c, config, &mut mapped, &mut errors)
    }
    let normalized: String = mapped.nfc().collect();
    // Decoded labels are always held to the nontransitional criteria.
    let non_transitional = config.transitional_processing(false);
    let mut validated = String::with_capacity(normalized.len());
    for (index, label) in normalized.split('.').enumerate() {
        if index > 0 {
            validated.push('.');
        }
        match label.strip_prefix(PUNYCODE_PREFIX) {
            Some(encoded) => match punycode::decode_to_string(encoded) {
                Some(decoded) => {
                    if !is_valid(&decoded, non_transitional, LabelChecks::DECODED) {
                        trace!("decoded label {:?} fails the validity criteria", decoded);
                        errors.validity_criteria = true;
                    }
                    validated.push_str(&decoded);
                }
                None => {
                    trace!("label {:?} is not valid punycode", label);
                    errors.punycode = true;
                    validated.push_str(label);
                }
            },
            None => {
                if !is_valid(label, config, LabelChecks::MAPPED) {
                    trace!("label {:?} fails the validity criteria", label);
                    errors.validity_criteria = true;
                }
                validated.push_str(label);
            }
        }
    }
    (validated, errors)
}

fn check_dns_length(domain: &str, errors: &mut Errors) {
    // The root label and its dot are not counted.
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() || domain.split('.').any(str::is_empty) {
        trace!("{:?} has an empty label", domain);
        errors.too_short_for_dns = true;
    }
    if domain.len() > MAX_DOMAIN_LENGTH
        || domain.split('.').any(|label| label.len() > MAX_LABEL_LENGTH)
    {
        trace!("{:?} exceeds the DNS length limits", domain);
        errors.too_long_for_dns = true;
    }
}

/// Processing flags for [`Config::to_ascii`] and [`Config::to_unicode`].
///
/// `verify_dns_length` only affects `to_ascii`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    #[cfg_attr(feature = "serde", serde(rename = "useSTD3ASCIIRules"))]
    use_std3_ascii_rules: bool,
    #[cfg_attr(feature = "serde", serde(rename = "checkHyphens"))]
    check_hyphens: bool,
    #[cfg_attr(feature = "serde", serde(rename = "checkBidi"))]
    check_bidi: bool,
    #[cfg_attr(feature = "serde", serde(rename = "checkJoiners"))]
    check_joiners: bool,
    #[cfg_attr(feature = "serde", serde(rename = "transitionalProcessing"))]
    transitional_processing: bool,
    #[cfg_attr(feature = "serde", serde(rename = "verifyDnsLength"))]
    verify_dns_length: bool,
}

/// Every flag is on by default.
impl Default for Config {
    fn default() -> Self {
        Config {
            use_std3_ascii_rules: true,
            check_hyphens: true,
            check_bidi: true,
            check_joiners: true,
            transitional_processing: true,
            verify_dns_length: true,
        }
    }
}

impl Config {
    #[inline]
    pub fn use_std3_ascii_rules(mut self, value: bool) -> Self {
        self.use_std3_ascii_rules = value;
        self
    }

    #[inline]
    pub fn check_hyphens(mut self, value: bool) -> Self {
        self.check_hyphens = value;
        self
    }

    /// Accepted for compatibility; the Bidi rules are not checked.
    #[inline]
    pub fn check_bidi(mut self, value: bool) -> Self {
        self.check_bidi = value;
        self
    }

    /// Accepted for compatibility; the ContextJ rules are not checked.
    #[inline]
    pub fn check_joiners(mut self, value: bool) -> Self {
        self.check_joiners = value;
        self
    }

    #[inline]
    pub fn transitional_processing(mut self, value: bool) -> Self {
        self.transitional_processing = value;
        self
    }

    #[inline]
    pub fn verify_dns_length(mut self, value: bool) -> Self {
        self.verify_dns_length = value;
        self
    }

    #[inline]
    pub fn uses_std3_ascii_rules(&self) -> bool {
        self.use_std3_ascii_rules
    }

    #[inline]
    pub fn checks_hyphens(&self) -> bool {
        self.check_hyphens
    }

    #[inline]
    pub fn checks_bidi(&self) -> bool {
        self.check_bidi
    }

    #[inline]
    pub fn checks_joiners(&self) -> bool {
        self.check_joiners
    }

    #[inline]
    pub fn is_transitional(&self) -> bool {
        self.transitional_processing
    }

    #[inline]
    pub fn verifies_dns_length(&self) -> bool {
        self.verify_dns_length
    }

    /// Check one already mapped and normalized label against the validity criteria.
    pub fn validate_label(self, label: &str) -> bool {
        is_valid(label, self, LabelChecks::MAPPED)
    }

    /// http://www.unicode.org/reports/tr46/#ToASCII
    pub fn to_ascii(self, domain: &str) -> Result<String, Errors> {
        let mut result = String::new();
        let (domain, mut errors) = processing(domain, self);
        for (index, label) in domain.split('.').enumerate() {
            if index > 0 {
                result.push('.');
            }
            // U+007F is encoded like any non-printable label.
            if label.bytes().all(|b| b < 0x7F) {
                result.push_str(label);
            } else {
                match punycode::encode_str(label) {
                    Some(x) => {
                        result.push_str(PUNYCODE_PREFIX);
                        result.push_str(&x);
                    }
                    None => {
                        trace!("label {:?} cannot be encoded as punycode", label);
                        errors.punycode = true;
                    }
                }
            }
        }
        if self.verify_dns_length {
            check_dns_length(&result, &mut errors);
        }
        Result::from(errors).map(|()| result)
    }

    /// http://www.unicode.org/reports/tr46/#ToUnicode
    pub fn to_unicode(self, domain: &str) -> (String, Result<(), Errors>) {
        let (domain, errors) = processing(domain, self);
        (domain, errors.into())
    }
}

/// Errors recorded during UTS #46 processing.
///
/// This is opaque for now, indicating what types of errors have been encountered at least once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Errors {
    punycode: bool,
    validity_criteria: bool,
    disallowed_by_std3_ascii_rules: bool,
    disallowed_mapped_in_std3: bool,
    disallowed_character: bool,
    too_long_for_dns: bool,
    too_short_for_dns: bool,
}

impl Errors {
    fn kinds(&self) -> [(bool, &'static str); 7] {
        [
            (self.punycode, "invalid punycode"),
            (self.validity_criteria, "label fails the validity criteria"),
            (self.disallowed_by_std3_ascii_rules, "code point disallowed by STD3 rules"),
            (self.disallowed_mapped_in_std3, "code point mapped outside STD3 rules"),
            (self.disallowed_character, "disallowed code point"),
            (self.too_long_for_dns, "too long for DNS"),
            (self.too_short_for_dns, "too short for DNS"),
        ]
    }

    fn is_empty(&self) -> bool {
        self.kinds().iter().all(|&(set, _)| !set)
    }
}

impl From<Errors> for Result<(), Errors> {
    fn from(e: Errors) -> Result<(), Errors> {
        if e.is_empty() {
            Ok(())
        } else {
            Err(e)
        }
    }
}

impl StdError for Errors {}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for &(set, description) in self.kinds().iter() {
            if !set {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(description)?;
            first = false;
        }
        if first {
            f.write_str("no errors")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_transitional() -> Config {
        Config::default().transitional_processing(false)
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.uses_std3_ascii_rules());
        assert!(config.checks_hyphens());
        assert!(config.checks_bidi());
        assert!(config.checks_joiners());
        assert!(config.is_transitional());
        assert!(config.verifies_dns_length());
    }

    #[test]
    fn builder_sets_one_flag() {
        let config = Config::default().check_hyphens(false);
        assert!(!config.checks_hyphens());
        assert_eq!(config.check_hyphens(true), Config::default());
    }

    #[test]
    fn joiner_and_bidi_flags_do_not_reject() {
        let checked = non_transitional();
        let unchecked = checked.check_bidi(false).check_joiners(false);
        assert!(checked.checks_bidi() && checked.checks_joiners());
        // ZWJ outside a virama context, and a label mixing LTR and RTL.
        for label in &["a\u{200D}b", "a\u{5D0}"] {
            assert!(checked.validate_label(label), "{:?}", label);
            assert_eq!(checked.validate_label(label), unchecked.validate_label(label));
        }
        for domain in &["a\u{200D}b.com", "a\u{5D0}.com"] {
            assert_eq!(checked.to_ascii(domain), unchecked.to_ascii(domain));
            assert_eq!(checked.to_unicode(domain), unchecked.to_unicode(domain));
        }
        assert_eq!(checked.to_ascii("a\u{200D}b.com").unwrap(), "xn--ab-m1t.com");
    }

    #[test]
    fn simple_domains() {
        assert!(is_simple("example.com"));
        assert!(is_simple("a..b."));
        assert!(!is_simple(""));
        assert!(!is_simple("Example.com"));
        assert!(!is_simple("ex-ample.com"));
        assert!(!is_simple("bücher.de"));
    }

    #[test]
    fn map_statuses() {
        let table = MappingTable::global();
        let mut output = String::new();
        let mut errors = Errors::default();
        for c in "A\u{AD}ß\u{2488}".chars() {
            map_char(table, c, Config::default(), &mut output, &mut errors);
        }
        assert_eq!(output, "ass\u{2488}");
        assert!(errors.disallowed_character);

        let mut output = String::new();
        let mut errors = Errors::default();
        for c in "ß\u{200D}".chars() {
            map_char(table, c, non_transitional(), &mut output, &mut errors);
        }
        assert_eq!(output, "ß\u{200D}");
        assert!(errors.is_empty());
    }

    #[test]
    fn map_std3() {
        let table = MappingTable::global();
        let std3_off = Config::default().use_std3_ascii_rules(false);

        let mut output = String::new();
        let mut errors = Errors::default();
        map_char(table, '_', Config::default(), &mut output, &mut errors);
        map_char(table, '\u{A0}', Config::default(), &mut output, &mut errors);
        assert_eq!(output, "_\u{A0}");
        assert!(errors.disallowed_by_std3_ascii_rules);
        assert!(errors.disallowed_mapped_in_std3);

        let mut output = String::new();
        let mut errors = Errors::default();
        map_char(table, '_', std3_off, &mut output, &mut errors);
        map_char(table, '\u{A0}', std3_off, &mut output, &mut errors);
        assert_eq!(output, "_ ");
        assert!(errors.is_empty());
    }

    #[test]
    fn hyphen_criteria() {
        let config = Config::default();
        assert!(!is_valid("ab--cd", config, LabelChecks::MAPPED));
        assert!(!is_valid("-abc", config, LabelChecks::MAPPED));
        assert!(!is_valid("abc-", config, LabelChecks::MAPPED));
        assert!(!is_valid("-", config, LabelChecks::MAPPED));
        assert!(!is_valid("a-", config, LabelChecks::MAPPED));
        assert!(is_valid("a-b", config, LabelChecks::MAPPED));
        assert!(is_valid("ab-c-d", config, LabelChecks::MAPPED));
        assert!(is_valid("", config, LabelChecks::MAPPED));

        let relaxed = config.check_hyphens(false);
        assert!(is_valid("ab--cd", relaxed, LabelChecks::MAPPED));
        assert!(is_valid("-abc-", relaxed, LabelChecks::MAPPED));
    }

    #[test]
    fn decoded_label_criteria() {
        let config = non_transitional();
        assert!(is_valid("a.b", config, LabelChecks::MAPPED));
        assert!(!is_valid("a.b", config, LabelChecks::DECODED));
        assert!(is_valid("e\u{301}", config, LabelChecks::MAPPED));
        assert!(!is_valid("e\u{301}", config, LabelChecks::DECODED));
        assert!(is_valid("\u{E9}", config, LabelChecks::DECODED));
    }

    #[test]
    fn status_criteria() {
        assert!(!is_valid("faß", Config::default(), LabelChecks::MAPPED));
        assert!(is_valid("faß", non_transitional(), LabelChecks::MAPPED));
        assert!(!is_valid("Fass", non_transitional(), LabelChecks::MAPPED));
        assert!(!is_valid("a_b", Config::default(), LabelChecks::MAPPED));
        assert!(is_valid("a_b", Config::default().use_std3_ascii_rules(false), LabelChecks::MAPPED));
        assert!(!is_valid("a\u{AD}b", Config::default(), LabelChecks::MAPPED));
        assert!(Config::default().validate_label("bücher"));
    }

    #[test]
    fn processing_keeps_undecodable_label() {
        let (output, errors) = processing("xn--ü.de", Config::default());
        assert_eq!(output, "xn--ü.de");
        assert!(errors.punycode);
    }

    #[test]
    fn processing_validates_decoded_label() {
        let (output, errors) = processing("xn--ab--cd-.de", Config::default());
        assert_eq!(output, "ab--cd.de");
        assert!(errors.validity_criteria);

        let (output, errors) = processing("xn--fa-hia.de", Config::default());
        assert_eq!(output, "faß.de");
        assert!(errors.is_empty());
    }

    #[test]
    fn processing_continues_after_errors() {
        let (output, errors) = processing("\u{2488}.Bücher.ab--c", Config::default());
        assert_eq!(output, "\u{2488}.bücher.ab--c");
        assert!(errors.disallowed_character);
        assert!(errors.validity_criteria);
        assert!(!errors.punycode);
    }

    #[test]
    fn processing_splits_on_mapped_dots() {
        let (output, errors) = processing("例子\u{3002}测试", Config::default());
        assert_eq!(output, "例子.测试");
        assert!(errors.is_empty());
    }

    #[test]
    fn processing_empty_labels() {
        let (output, errors) = processing("..a.", Config::default());
        assert_eq!(output, "..a.");
        assert!(errors.is_empty());
        let (output, errors) = processing("", Config::default());
        assert_eq!(output, "");
        assert!(errors.is_empty());
    }

    #[test]
    fn dns_length() {
        let label = "a".repeat(MAX_LABEL_LENGTH);
        let mut errors = Errors::default();
        check_dns_length(&format!("{}.com.", label), &mut errors);
        assert!(errors.is_empty());

        let mut errors = Errors::default();
        check_dns_length(&format!("{}a.com", label), &mut errors);
        assert!(errors.too_long_for_dns);

        let mut errors = Errors::default();
        check_dns_length(&[label.as_str(); 4].join("."), &mut errors);
        assert!(errors.too_long_for_dns);

        let at_limit = format!("{0}.{0}.{0}.{1}", label, "a".repeat(61));
        assert_eq!(at_limit.len(), MAX_DOMAIN_LENGTH);
        let mut errors = Errors::default();
        check_dns_length(&at_limit, &mut errors);
        assert!(errors.is_empty());
        let mut errors = Errors::default();
        check_dns_length(&format!("{}.", at_limit), &mut errors);
        assert!(errors.is_empty());
        let mut errors = Errors::default();
        check_dns_length(&format!("{}a", at_limit), &mut errors);
        assert!(errors.too_long_for_dns);
        assert!(!errors.too_short_for_dns);

        for domain in &["", ".", "a..b", ".a"] {
            let mut errors = Errors::default();
            check_dns_length(domain, &mut errors);
            assert!(errors.too_short_for_dns, "{:?}", domain);
        }
    }

    #[test]
    fn to_ascii_collects_every_error() {
        let errors = Config::default().to_ascii("a_b.\u{2488}").unwrap_err();
        assert!(errors.disallowed_by_std3_ascii_rules);
        assert!(errors.disallowed_character);
        assert!(errors.validity_criteria);
    }

    #[test]
    fn errors_display() {
        assert_eq!(Errors::default().to_string(), "no errors");
        let errors = Errors { punycode: true, too_long_for_dns: true, ..Errors::default() };
        assert_eq!(errors.to_string(), "invalid punycode, too long for DNS");
    }

    #[test]
    fn to_unicode_is_idempotent() {
        extern crate arbitrary;
        extern crate bolero;
        bolero::check!().for_each(|data| {
            let mut unstructured = arbitrary::Unstructured::new(data);
            if let Ok(domain) = <String as arbitrary::Arbitrary>::arbitrary(&mut unstructured) {
                let (once, result) = non_transitional().to_unicode(&domain);
                if result.is_ok() {
                    let (twice, result) = non_transitional().to_unicode(&once);
                    assert!(result.is_ok(), "{:?}", once);
                    assert_eq!(once, twice);
                }
            }
        });
    }

    #[test]
    fn ascii_round_trip() {
        extern crate arbitrary;
        extern crate bolero;
        bolero::check!().for_each(|data| {
            let mut unstructured = arbitrary::Unstructured::new(data);
            if let Ok(domain) = <String as arbitrary::Arbitrary>::arbitrary(&mut unstructured) {
                for &config in &[Config::default(), non_transitional()] {
                    let ascii = match config.to_ascii(&domain) {
                        Ok(ascii) => ascii,
                        Err(_) => continue,
                    };
                    assert!(ascii.is_ascii());
                    let (direct, direct_result) = config.to_unicode(&domain);
                    let (via_ascii, via_ascii_result) = config.to_unicode(&ascii);
                    if direct_result.is_ok() && via_ascii_result.is_ok() {
                        assert_eq!(direct, via_ascii);
                    }
                }
            }
        });
    }
}
