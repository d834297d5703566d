//! Physical key adjacency for the three layouts typos are drawn from.

use std::collections::HashMap;

pub type Layout = HashMap<char, &'static str>;

fn layout(rows: &[(char, &'static str)]) -> Layout {
    rows.iter().copied().collect()
}

lazy_static! {
    pub static ref QWERTY: Layout = layout(&[
        ('1', "2q"), ('2', "3wq1"), ('3', "4ew2"), ('4', "5re3"), ('5', "6tr4"),
        ('6', "7yt5"), ('7', "8uy6"), ('8', "9iu7"), ('9', "0oi8"), ('0', "po9"),
        ('q', "12wa"), ('w', "3esaq2"), ('e', "4rdsw3"), ('r', "5tfde4"), ('t', "6ygfr5"),
        ('y', "7uhgt6"), ('u', "8ijhy7"), ('i', "9okju8"), ('o', "0plki9"), ('p', "lo0"),
        ('a', "qwsz"), ('s', "edxzaw"), ('d', "rfcxse"), ('f', "tgvcdr"), ('g', "yhbvft"),
        ('h', "ujnbgy"), ('j', "ikmnhu"), ('k', "olmji"), ('l', "kop"),
        ('z', "asx"), ('x', "zsdc"), ('c', "xdfv"), ('v', "cfgb"), ('b', "vghn"),
        ('n', "bhjm"), ('m', "njk"),
    ]);

    pub static ref QWERTZ: Layout = layout(&[
        ('1', "2q"), ('2', "3wq1"), ('3', "4ew2"), ('4', "5re3"), ('5', "6tr4"),
        ('6', "7zt5"), ('7', "8uz6"), ('8', "9iu7"), ('9', "0oi8"), ('0', "po9"),
        ('q', "12wa"), ('w', "3esaq2"), ('e', "4rdsw3"), ('r', "5tfde4"), ('t', "6zgfr5"),
        ('z', "7uhgt6"), ('u', "8ijhz7"), ('i', "9okju8"), ('o', "0plki9"), ('p', "lo0"),
        ('a', "qwsy"), ('s', "edxyaw"), ('d', "rfcxse"), ('f', "tgvcdr"), ('g', "zhbvft"),
        ('h', "ujnbgz"), ('j', "ikmnhu"), ('k', "olmji"), ('l', "kop"),
        ('y', "asx"), ('x', "ysdc"), ('c', "xdfv"), ('v', "cfgb"), ('b', "vghn"),
        ('n', "bhjm"), ('m', "njk"),
    ]);

    pub static ref AZERTY: Layout = layout(&[
        ('1', "2a"), ('2', "3za1"), ('3', "4ez2"), ('4', "5re3"), ('5', "6tr4"),
        ('6', "7yt5"), ('7', "8uy6"), ('8', "9iu7"), ('9', "0oi8"), ('0', "po9"),
        ('a', "2zq1"), ('z', "3esqa2"), ('e', "4rdsz3"), ('r', "5tfde4"), ('t', "6ygfr5"),
        ('y', "7uhgt6"), ('u', "8ijhy7"), ('i', "9okju8"), ('o', "0plki9"), ('p', "lo0m"),
        ('q', "zswa"), ('s', "edxwqz"), ('d', "rfcxse"), ('f', "tgvcdr"), ('g', "yhbvft"),
        ('h', "ujnbgy"), ('j', "iknhu"), ('k', "olji"), ('l', "kopm"), ('m', "lp"),
        ('w', "sxq"), ('x', "wsdc"), ('c', "xdfv"), ('v', "cfgb"), ('b', "vghn"),
        ('n', "bhj"),
    ]);

    /// Layouts in the order strategies walk them.
    pub static ref KEYBOARD_LAYOUTS: [&'static Layout; 3] = [&*QWERTY, &*QWERTZ, &*AZERTY];
}

/// Adjacent keys of `c`, one entry per layout that knows the key.
pub fn neighbours(c: char) -> impl Iterator<Item = &'static str> {
    KEYBOARD_LAYOUTS
        .iter()
        .filter_map(move |layout| layout.get(&c).copied())
}
