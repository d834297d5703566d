//! Visually confusable replacements per latin character.

use std::collections::HashMap;

lazy_static! {
    pub static ref GLYPHS: HashMap<char, &'static [&'static str]> = {
        let table: [(char, &'static [&'static str]); 25] = [
            ('a', &["à", "á", "â", "ã", "ä", "å", "ɑ", "ạ", "ǎ", "ă", "ȧ", "ą"]),
            ('b', &["d", "lb", "ʙ", "ɓ", "ḃ", "ḅ", "ḇ", "ƅ"]),
            ('c', &["e", "ƈ", "ċ", "ć", "ç", "č", "ĉ"]),
            ('d', &["b", "cl", "dl", "ɗ", "đ", "ď", "ɖ", "ḑ", "ḋ", "ḍ", "ḏ", "ḓ"]),
            ('e', &["c", "é", "è", "ê", "ë", "ē", "ĕ", "ě", "ė", "ẹ", "ę", "ȩ", "ɇ", "ḛ"]),
            ('f', &["ƒ", "ḟ"]),
            ('g', &["q", "ɢ", "ɡ", "ġ", "ğ", "ǵ", "ģ", "ĝ", "ǧ", "ǥ"]),
            ('h', &["lh", "ĥ", "ȟ", "ħ", "ɦ", "ḧ", "ḩ", "ⱨ", "ḣ", "ḥ", "ḫ", "ẖ"]),
            ('i', &["1", "l", "í", "ì", "ï", "ı", "ɩ", "ǐ", "ĭ", "ỉ", "ị", "ɨ", "ȋ", "ī"]),
            ('j', &["ʝ", "ɉ"]),
            ('k', &["lk", "ik", "lc", "ḳ", "ḵ", "ⱪ", "ķ"]),
            ('l', &["1", "i", "ɫ", "ł"]),
            ('m', &["n", "nn", "rn", "rr", "ṁ", "ṃ", "ᴍ", "ɱ", "ḿ"]),
            ('n', &["m", "r", "ń", "ṅ", "ṇ", "ṉ", "ñ", "ņ", "ǹ", "ň", "ꞑ"]),
            ('o', &["0", "ȯ", "ọ", "ỏ", "ơ", "ó", "ö"]),
            ('p', &["ƿ", "ƥ", "ṕ", "ṗ"]),
            ('q', &["g", "ʠ"]),
            ('r', &["ʀ", "ɼ", "ɽ", "ŕ", "ŗ", "ř", "ɍ", "ɾ", "ȓ", "ȑ", "ṙ", "ṛ", "ṟ"]),
            ('s', &["ʂ", "ś", "ṣ", "ṡ", "ș", "ŝ", "š"]),
            ('t', &["ţ", "ŧ", "ṫ", "ṭ", "ț", "ƫ"]),
            ('u', &["ᴜ", "ǔ", "ŭ", "ü", "ʉ", "ù", "ú", "û", "ũ", "ū", "ų", "ư", "ů", "ű", "ȕ", "ȗ", "ụ"]),
            ('v', &["ṿ", "ⱱ", "ᶌ", "ṽ", "ⱴ"]),
            ('w', &["vv", "ŵ", "ẁ", "ẃ", "ẅ", "ⱳ", "ẇ", "ẉ", "ẘ"]),
            ('y', &["ʏ", "ý", "ÿ", "ŷ", "ƴ", "ȳ", "ɏ", "ỿ", "ẏ", "ỵ"]),
            ('z', &["ʐ", "ż", "ź", "ᴢ", "ƶ", "ẓ", "ẕ", "ⱬ"]),
        ];
        table.into_iter().collect()
    };
}

/// Confusables for `c`, empty when the character has none (`x` for one).
pub fn confusables(c: char) -> &'static [&'static str] {
    GLYPHS.get(&c).copied().unwrap_or(&[])
}
