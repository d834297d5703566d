//! Label-level mutation strategies.
//!
//! Every function here is total: it takes any string, including empty or
//! single-character ones, and returns the (possibly empty) list of variants.
//! Positions are counted in `char`s, never bytes, so confusables and other
//! non-ASCII input survive slicing.

use crate::glyphs::confusables;
use crate::keyboard::neighbours;
use std::collections::HashSet;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Keeps the first occurrence of every value.
pub(crate) fn dedup(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

fn splice(chars: &[char], start: usize, end: usize, middle: &str) -> String {
    let mut out = String::with_capacity(chars.len() + middle.len());
    out.extend(&chars[..start]);
    out.push_str(middle);
    out.extend(&chars[end..]);
    out
}

/// Appends every ASCII lowercase letter.
pub fn addition(word: &str) -> Vec<String> {
    ('a'..='z').map(|c| format!("{word}{c}")).collect()
}

/// Flips each of the eight low bits of every character, keeping flips that
/// land on `[0-9a-z-]`.
pub fn bitsquatting(word: &str) -> Vec<String> {
    // Following implementation takes inspiration from:
    //  - http://dinaburg.org/bitsquatting.html
    let chars: Vec<char> = word.chars().collect();
    let mut result = Vec::new();

    for (i, c) in chars.iter().enumerate() {
        for mask_index in 0..8 {
            let flipped = *c as u32 ^ (1 << mask_index);
            let Some(squatted) = char::from_u32(flipped) else {
                continue;
            };

            if squatted.is_ascii_digit() || squatted.is_ascii_lowercase() || squatted == '-' {
                result.push(splice(&chars, i, i + 1, squatted.encode_utf8(&mut [0; 4])));
            }
        }
    }

    result
}

/// Windowed substitution over one word: for every window shorter than the
/// word and every confusable character in it, all occurrences of that
/// character inside the window are swapped for the confusable.
fn homoglyph_pass(word: &str, seen: &mut HashSet<String>, out: &mut Vec<String>) {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();

    for ws in 1..len {
        for i in 0..=(len - ws) {
            let window = &chars[i..i + ws];

            for &c in window {
                for glyph in confusables(c) {
                    let mut replaced = String::new();
                    for &w in window {
                        if w == c {
                            replaced.push_str(glyph);
                        } else {
                            replaced.push(w);
                        }
                    }

                    let candidate = splice(&chars, i, i + ws, &replaced);
                    if seen.insert(candidate.clone()) {
                        out.push(candidate);
                    }
                }
            }
        }
    }
}

/// Two-pass confusable substitution.
///
/// Pass one runs the windowed substitution over `word`, pass two over every
/// pass-one result; the union is returned in generation order. Pass two is
/// bounded by `pass1 * windows * confusables_per_char`, which grows quickly
/// with label length.
pub fn homoglyph(word: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut first_pass = Vec::new();
    homoglyph_pass(word, &mut seen, &mut first_pass);

    let mut second_pass = Vec::new();
    for fuzzed in &first_pass {
        homoglyph_pass(fuzzed, &mut seen, &mut second_pass);
    }

    first_pass.extend(second_pass);
    first_pass
}

/// Inserts `-` between every pair of characters.
pub fn hyphenation(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    (1..chars.len())
        .map(|i| splice(&chars, i, i, "-"))
        .collect()
}

/// Inserts keyboard neighbours before and after every inner character.
pub fn insertion(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut result = Vec::new();

    // We do not want to insert in the beginning or in the end of the word
    for i in 1..chars.len().saturating_sub(1) {
        let c = chars[i];
        for adjacent in neighbours(c) {
            for k in adjacent.chars() {
                result.push(splice(&chars, i, i + 1, &format!("{k}{c}")));
                result.push(splice(&chars, i, i + 1, &format!("{c}{k}")));
            }
        }
    }

    dedup(result)
}

/// Drops one character at a time, plus the word with every run of repeated
/// characters collapsed to one.
pub fn omission(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut result: Vec<String> = (0..chars.len())
        .map(|i| splice(&chars, i, i + 1, ""))
        .collect();

    let mut collapsed = String::with_capacity(word.len());
    let mut previous = None;
    for &c in &chars {
        if previous != Some(c) {
            collapsed.push(c);
        }
        previous = Some(c);
    }

    if collapsed != word && !result.contains(&collapsed) {
        result.push(collapsed);
    }

    dedup(result)
}

/// Doubles every alphabetic character in place.
pub fn repetition(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    let result = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alphabetic())
        .map(|(i, c)| splice(&chars, i, i + 1, &format!("{c}{c}")))
        .collect();

    dedup(result)
}

/// Swaps every character for each of its keyboard neighbours.
pub fn replacement(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut result = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        for adjacent in neighbours(c) {
            for k in adjacent.chars() {
                result.push(splice(&chars, i, i + 1, k.encode_utf8(&mut [0; 4])));
            }
        }
    }

    dedup(result)
}

/// Swaps every pair of differing neighbours.
pub fn transposition(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    chars
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(i, pair)| splice(&chars, i, i + 2, &format!("{}{}", pair[1], pair[0])))
        .collect()
}

/// Replaces every vowel with each of the five vowels. The self-substitution
/// is kept, so a word with at least one vowel appears in its own output once.
pub fn vowel_swap(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut result = Vec::new();

    for (i, c) in chars.iter().enumerate() {
        if !VOWELS.contains(c) {
            continue;
        }
        for vowel in VOWELS {
            result.push(splice(&chars, i, i + 1, vowel.encode_utf8(&mut [0; 4])));
        }
    }

    dedup(result)
}
