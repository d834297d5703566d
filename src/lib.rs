//! Look-alike candidate generation for words and domain names.
//!
//! [`Fuzzer`] mutates a plain word with the strategies in [`mutation`];
//! [`DomainFuzzer`] does the same for the registrable label of a hostname,
//! reassembles full hostnames and adds the structural strategies
//! (subdomain insertion, word appending, TLD swapping).

#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod filter;
pub mod glyphs;
pub mod keyboard;
pub mod mutation;
pub mod orchestrator;
pub mod pool;
pub mod result;
pub mod strategy;

pub use config::{
    DomainFuzzConfig, DomainFuzzConfigBuilder, FuzzConfig, PermutableConfig,
    DEFAULT_APPEND_WORDS, DEFAULT_TLD_SWAP_LIST,
};
pub use domain::{parse_domain, DomainParser, ParsedDomain, SuffixListParser};
pub use engine::Fuzzer;
pub use error::{ConfigError, DomainParseError, Error, Result};
pub use orchestrator::DomainFuzzer;
pub use result::{Candidate, FuzzResult};
pub use strategy::Strategy;
