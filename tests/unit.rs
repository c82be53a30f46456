use uts46::{classify, domain_to_ascii, domain_to_unicode, Config, Error, RangeList, Status};

fn non_transitional() -> Config {
    Config::default().transitional_processing(false)
}

#[test]
fn to_unicode_non_transitional() {
    for &(input, expected) in &[
        ("fass.de", "fass.de"),
        ("faß.de", "faß.de"),
        ("Faß.de", "faß.de"),
        ("xn--fa-hia.de", "faß.de"),
    ] {
        let (output, result) = non_transitional().to_unicode(input);
        assert_eq!(output, expected, "{}", input);
        assert!(result.is_ok(), "{}", input);
    }
}

#[test]
fn to_ascii_transitional() {
    assert_eq!(domain_to_ascii("fass.de").unwrap(), "fass.de");
    assert_eq!(domain_to_ascii("faß.de").unwrap(), "fass.de");
    assert_eq!(domain_to_ascii("Faß.de").unwrap(), "fass.de");
    assert_eq!(domain_to_ascii("xn--fa-hia.de").unwrap(), "xn--fa-hia.de");
}

#[test]
fn to_ascii_non_transitional() {
    let config = non_transitional();
    assert_eq!(config.to_ascii("fass.de").unwrap(), "fass.de");
    assert_eq!(config.to_ascii("faß.de").unwrap(), "xn--fa-hia.de");
    assert_eq!(config.to_ascii("Faß.de").unwrap(), "xn--fa-hia.de");
    assert_eq!(config.to_ascii("xn--fa-hia.de").unwrap(), "xn--fa-hia.de");
}

#[test]
fn to_ascii_dns_length() {
    let long_label = format!("{}.com", "a".repeat(64));
    assert!(domain_to_ascii(&long_label).is_err());
    assert_eq!(
        Config::default().verify_dns_length(false).to_ascii(&long_label).unwrap(),
        long_label
    );

    let label = "a".repeat(63);
    let long_domain = [label.as_str(); 4].join(".");
    assert_eq!(long_domain.len(), 255);
    assert!(domain_to_ascii(&long_domain).is_err());
    assert_eq!(
        Config::default().verify_dns_length(false).to_ascii(&long_domain).unwrap(),
        long_domain
    );

    let at_limit = format!("{0}.{0}.{0}.{1}", label, "a".repeat(61));
    assert_eq!(at_limit.len(), 253);
    assert_eq!(domain_to_ascii(&at_limit).unwrap(), at_limit);
    let rooted = format!("{}.", at_limit);
    assert_eq!(domain_to_ascii(&rooted).unwrap(), rooted);
    assert!(domain_to_ascii(&format!("{}a", at_limit)).is_err());

    let exact = format!("{}.{}", label, label);
    assert_eq!(domain_to_ascii(&exact).unwrap(), exact);
    assert_eq!(domain_to_ascii("example.com.").unwrap(), "example.com.");
    assert!(domain_to_ascii("").is_err());
    assert!(domain_to_ascii("example..com").is_err());
    assert_eq!(
        Config::default().verify_dns_length(false).to_ascii("").unwrap(),
        ""
    );
}

#[test]
fn hyphen_rules() {
    assert!(domain_to_ascii("ab--cd.com").is_err());
    assert!(domain_to_ascii("-abc.com").is_err());
    assert!(domain_to_ascii("abc-.com").is_err());
    assert_eq!(domain_to_ascii("a-b.com").unwrap(), "a-b.com");

    let relaxed = Config::default().check_hyphens(false);
    assert_eq!(relaxed.to_ascii("ab--cd.com").unwrap(), "ab--cd.com");
    assert_eq!(relaxed.to_ascii("-abc-.com").unwrap(), "-abc-.com");
}

#[test]
fn std3_rules() {
    assert!(domain_to_ascii("a_b.com").is_err());
    let relaxed = Config::default().use_std3_ascii_rules(false);
    assert_eq!(relaxed.to_ascii("a_b.com").unwrap(), "a_b.com");
    // U+00A0 maps to a space, which STD3 rules would reject.
    assert_eq!(relaxed.to_ascii("a\u{A0}b.com").unwrap(), "a b.com");
    assert!(domain_to_ascii("a\u{A0}b.com").is_err());
}

#[test]
fn delete_character_is_punycode_encoded() {
    let relaxed = Config::default().use_std3_ascii_rules(false);
    assert_eq!(relaxed.to_ascii("a\u{7F}b.com").unwrap(), "xn--a\u{7F}b-.com");
    let (output, result) = relaxed.to_unicode("xn--a\u{7F}b-.com");
    assert_eq!(output, "a\u{7F}b.com");
    assert!(result.is_ok());
    assert!(domain_to_ascii("a\u{7F}b.com").is_err());
}

#[test]
fn to_ascii_failure_withholds_output() {
    assert!(domain_to_ascii("\u{2488}.com").is_err());
    assert!(domain_to_ascii("xn--ü.com").is_err());
}

#[test]
fn to_unicode_reports_errors_with_output() {
    let (output, result) = domain_to_unicode("\u{2488}.Bücher.com");
    assert_eq!(output, "\u{2488}.bücher.com");
    let errors = result.unwrap_err();
    assert!(!errors.to_string().is_empty());

    let (output, result) = domain_to_unicode("xn--ü.com");
    assert_eq!(output, "xn--ü.com");
    assert!(result.is_err());
}

#[test]
fn ignored_and_mapped_code_points() {
    // SOFT HYPHEN is ignored, IDEOGRAPHIC FULL STOP maps to a dot.
    assert_eq!(domain_to_ascii("ex\u{AD}ample\u{3002}COM").unwrap(), "example.com");
    assert_eq!(domain_to_ascii("www.例子.com").unwrap(), "www.xn--fsqu00a.com");
    assert_eq!(domain_to_ascii("\u{1F4A9}.la").unwrap(), "xn--ls8h.la");
}

#[test]
fn surrogate_pair_code_points_are_single_code_points() {
    let (output, result) = domain_to_unicode("xn--ls8h.la");
    assert_eq!(output, "\u{1F4A9}.la");
    assert!(result.is_ok());
}

#[test]
fn decoded_labels_are_validated_non_transitionally() {
    let config = Config::default();
    assert!(config.is_transitional());
    let (output, result) = config.to_unicode("xn--fa-hia.de");
    assert_eq!(output, "faß.de");
    assert!(result.is_ok());
    // The caller's flag still applies to the labels that follow.
    let (output, result) = config.to_unicode("xn--fa-hia.faß");
    assert_eq!(output, "faß.fass");
    assert!(result.is_ok());
}

#[test]
fn to_unicode_is_idempotent_on_examples() {
    for input in &["faß.de", "Bücher.example", "例子.测试", "xn--ls8h.la", "a.b.c."] {
        let (once, result) = non_transitional().to_unicode(input);
        assert!(result.is_ok(), "{}", input);
        let (twice, result) = non_transitional().to_unicode(&once);
        assert!(result.is_ok(), "{}", once);
        assert_eq!(once, twice);
    }
}

#[test]
fn mapping_table_lookups() {
    assert_eq!(classify(0x0000).unwrap().status(), Status::DisallowedStd3Valid);
    assert_eq!(classify(0x0000).unwrap().replacement(), "");
    assert_eq!(classify(0x11_0000), Err(Error::CodePointOutOfRange(0x11_0000)));
    assert_eq!(
        Error::CodePointOutOfRange(0x11_0000).to_string(),
        "code point 0x110000 is outside the Unicode range 0..=0x10FFFF"
    );
}

#[test]
fn range_list_lookups() {
    let mut list = RangeList::new();
    list.add(0, 4, "A");
    list.add(5, 5, "B");
    list.add(6, 9, "C");
    assert_eq!(list.get(5), Some(&"B"));
    assert_eq!(list.get(10), None);
    assert_eq!(list.get(-1), None);

    let mut gaps = RangeList::new();
    gaps.add(0, 3, "A");
    gaps.add(7, 9, "C");
    for key in 4..=6 {
        assert_eq!(gaps.get(key), None);
    }
}

#[cfg(feature = "serde")]
#[test]
fn config_from_json() {
    let config: Config =
        serde_json::from_str(r#"{"transitionalProcessing": false, "useSTD3ASCIIRules": false}"#)
            .unwrap();
    assert_eq!(config, non_transitional().use_std3_ascii_rules(false));

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());

    let json = serde_json::to_value(Config::default().verify_dns_length(false)).unwrap();
    assert_eq!(json["verifyDnsLength"], serde_json::Value::Bool(false));
    assert_eq!(json["checkBidi"], serde_json::Value::Bool(true));
}
