use claims::{assert_err, assert_ok};
use squatgen::{
    ConfigError, DomainFuzzConfig, DomainFuzzer, DomainParseError, DomainParser, Error,
    FuzzConfig, ParsedDomain, Strategy,
};
use std::collections::HashSet;

fn light_config() -> FuzzConfig {
    // homoglyph is the expensive one; most tests do not need it
    let mut config = FuzzConfig::default();
    config.homoglyph = false;
    config
}

#[test]
fn default_config_reassembles_goog1e() {
    let mut fuzzer = assert_ok!(DomainFuzzer::new("http://google.com", DomainFuzzConfig::default()));
    let result = fuzzer.generate();

    assert!(result.contains("goog1e.com"));
    assert!(result.as_list().iter().all(|v| v.ends_with(".com")));
}

#[test]
fn misconfiguration_is_rejected_before_parsing() {
    let result = DomainFuzzConfig::builder()
        .append_word(false)
        .append_words(["home", "support"])
        .build();
    assert_eq!(result, Err(ConfigError::AppendWordsUnused));

    let result = DomainFuzzConfig::builder().append_word(true).build();
    assert_eq!(result, Err(ConfigError::AppendWordsRequired));
}

#[test]
fn generation_is_deterministic() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .base(light_config())
        .append_word(true)
        .append_words(["login", "secure"])
        .tld(true)
        .tld_swap_list(["net", "org"])
        .build());

    let first = assert_ok!(DomainFuzzer::new("mail.paypal.com", config.clone())).into_result();
    let second = assert_ok!(DomainFuzzer::new("mail.paypal.com", config)).into_result();
    assert_eq!(first, second);

    let distinct: HashSet<&String> = first.as_list().iter().collect();
    assert_eq!(distinct.len(), first.len());
}

#[test]
fn every_strategy_is_tagged() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .append_word(true)
        .append_words(["login"])
        .tld(true)
        .tld_swap_list(["net"])
        .build());
    let result = assert_ok!(DomainFuzzer::new("www.abcd.com", config)).into_result();

    let tags: HashSet<Strategy> = result.candidates().iter().map(|c| c.strategy).collect();
    for strategy in Strategy::BASE {
        assert!(tags.contains(&strategy), "missing {strategy}");
    }
    assert!(tags.contains(&Strategy::Subdomain));
    assert!(tags.contains(&Strategy::AppendWord));
    assert!(tags.contains(&Strategy::Tld));
}

#[test]
fn subdomains_are_kept_for_label_mutations() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .base(FuzzConfig::only(&[Strategy::Omission]))
        .subdomain(false)
        .build());
    let result = assert_ok!(DomainFuzzer::new("https://login.example.co.uk/", config)).into_result();

    assert!(result.contains("login.exmple.co.uk"));
    assert!(result.as_list().iter().all(|v| v.starts_with("login.") && v.ends_with(".co.uk")));
}

#[test]
fn subdomain_insertion_never_touches_separators() {
    let config = assert_ok!(DomainFuzzConfig::builder().base(FuzzConfig::none()).build());
    let result = assert_ok!(DomainFuzzer::new("my-bank.com", config)).into_result();

    assert!(!result.is_empty());
    for value in result.as_list() {
        assert!(!value.contains("-.") && !value.contains(".-"), "{value}");
    }
}

#[test]
fn tld_swaps_cover_pool_entries() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .base(FuzzConfig::only(&[Strategy::Omission]))
        .subdomain(false)
        .tld(true)
        .tld_swap_list(["com", "net"])
        .build());
    let result = assert_ok!(DomainFuzzer::new("www.google.com", config)).into_result();

    assert!(result.contains("www.google.net"));
    assert!(result.contains("google.net"));
    assert!(result.contains("gogle.net"));
    assert!(result.contains("www.gogle.net"));
    assert!(!result.by_strategy(Strategy::Tld).any(|v| v.ends_with(".com")));
}

#[test]
fn filter_keeps_only_valid_hostnames() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .base(light_config())
        .filter_invalid(true)
        .build());
    let result = assert_ok!(DomainFuzzer::new("google.com", config)).into_result();

    assert!(!result.is_empty());
    for value in result.as_list() {
        let ascii = squatgen::filter::to_ascii_hostname(value).unwrap();
        assert!(squatgen::filter::is_valid_hostname(&ascii), "{value}");
    }
}

#[test]
fn internationalised_labels_are_mutated_in_unicode() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .base(FuzzConfig::only(&[Strategy::Hyphenation, Strategy::VowelSwap]))
        .subdomain(false)
        .build());
    let mut fuzzer = assert_ok!(DomainFuzzer::new("münchen.de", config));
    assert_eq!(fuzzer.parsed().domain, "münchen");

    let result = fuzzer.generate();
    assert!(result.contains("m-ünchen.de"));
    assert!(result.contains("münchan.de"));
    assert!(!result.as_list().iter().any(|v| v.contains("xn--")));
}

#[test]
fn private_suffixes_shift_the_mutated_label() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .base(FuzzConfig::only(&[Strategy::Omission]))
        .subdomain(false)
        .build());
    let result = assert_ok!(DomainFuzzer::new("foo.github.io", config)).into_result();

    assert_eq!(result.as_list(), ["oo.github.io", "fo.github.io"]);
}

#[test]
fn parse_errors_are_surfaced() {
    let error = assert_err!(DomainFuzzer::new("localhost", DomainFuzzConfig::default()));
    assert!(matches!(error, Error::DomainParse(_)));

    let error = assert_err!(DomainFuzzer::new("example.invalidtld", DomainFuzzConfig::default()));
    assert!(matches!(
        error,
        Error::DomainParse(DomainParseError::UnknownSuffix(_))
    ));
}

struct FixedParser;

impl DomainParser for FixedParser {
    fn parse(&self, raw: &str, _fix_protocol: bool) -> Result<ParsedDomain, DomainParseError> {
        match raw {
            "intranet" => Ok(ParsedDomain {
                subdomain: String::new(),
                domain: "intranet".into(),
                tld: String::new(),
            }),
            other => Err(DomainParseError::Malformed(other.into())),
        }
    }
}

#[test]
fn custom_parsers_can_be_plugged_in() {
    let config = assert_ok!(DomainFuzzConfig::builder()
        .base(FuzzConfig::only(&[Strategy::Hyphenation]))
        .subdomain(false)
        .build());
    let result = assert_ok!(DomainFuzzer::with_parser("intranet", config, &FixedParser)).into_result();

    assert!(result.contains("i-ntranet"));
    assert_eq!(result.len(), "intranet".len() - 1);
}

#[test]
fn instances_run_independently_across_threads() {
    let inputs = ["google.com", "paypal.com", "amazon.co.uk", "rust-lang.github.io"];
    let config = assert_ok!(DomainFuzzConfig::builder().base(light_config()).build());

    let handles: Vec<_> = inputs
        .iter()
        .map(|input| {
            let config = config.clone();
            let input = input.to_string();
            std::thread::spawn(move || DomainFuzzer::new(&input, config).map(|f| f.into_result()))
        })
        .collect();

    for (handle, input) in handles.into_iter().zip(inputs) {
        let threaded = assert_ok!(handle.join().unwrap());
        let serial = assert_ok!(DomainFuzzer::new(input, config.clone())).into_result();
        assert_eq!(threaded, serial);
    }
}
