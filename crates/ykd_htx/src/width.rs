//! Conversion between the half-width text used in memory and the full-width text stored on disk.
//!
//! Only the characters listed in [`WIDTH_PAIRS`] are converted. Everything else, kana and kanji
//! included, passes through untouched.

/// Pairs of `(half-width, full-width)` characters swapped when reading and writing tables
pub const WIDTH_PAIRS: &[(char, char)] = &[
    ('A', 'Ａ'),
    ('B', 'Ｂ'),
    ('C', 'Ｃ'),
    ('D', 'Ｄ'),
    ('E', 'Ｅ'),
    ('F', 'Ｆ'),
    ('G', 'Ｇ'),
    ('H', 'Ｈ'),
    ('I', 'Ｉ'),
    ('J', 'Ｊ'),
    ('K', 'Ｋ'),
    ('L', 'Ｌ'),
    ('M', 'Ｍ'),
    ('N', 'Ｎ'),
    ('O', 'Ｏ'),
    ('P', 'Ｐ'),
    ('Q', 'Ｑ'),
    ('R', 'Ｒ'),
    ('S', 'Ｓ'),
    ('T', 'Ｔ'),
    ('U', 'Ｕ'),
    ('V', 'Ｖ'),
    ('W', 'Ｗ'),
    ('X', 'Ｘ'),
    ('Y', 'Ｙ'),
    ('Z', 'Ｚ'),
    ('a', 'ａ'),
    ('b', 'ｂ'),
    ('c', 'ｃ'),
    ('d', 'ｄ'),
    ('e', 'ｅ'),
    ('f', 'ｆ'),
    ('g', 'ｇ'),
    ('h', 'ｈ'),
    ('i', 'ｉ'),
    ('j', 'ｊ'),
    ('k', 'ｋ'),
    ('l', 'ｌ'),
    ('m', 'ｍ'),
    ('n', 'ｎ'),
    ('o', 'ｏ'),
    ('p', 'ｐ'),
    ('q', 'ｑ'),
    ('r', 'ｒ'),
    ('s', 'ｓ'),
    ('t', 'ｔ'),
    ('u', 'ｕ'),
    ('v', 'ｖ'),
    ('w', 'ｗ'),
    ('x', 'ｘ'),
    ('y', 'ｙ'),
    ('z', 'ｚ'),
    ('0', '０'),
    ('1', '１'),
    ('2', '２'),
    ('3', '３'),
    ('4', '４'),
    ('5', '５'),
    ('6', '６'),
    ('7', '７'),
    ('8', '８'),
    ('9', '９'),
    ('?', '？'),
    ('!', '！'),
    (',', '、'),
    ('-', '－'),
    ('/', '／'),
    ('~', '～'),
    (' ', '　'),
    ('#', '＃'),
    ('%', '％'),
    ('$', '＄'),
];

/// Glyphs some Shift_JIS decoders produce for the bytes code page 932 maps to `～` and `－`
const DECODE_ALIASES: &[(char, char)] = &[('〜', '~'), ('−', '-')];

fn half_of(c: char) -> Option<char> {
    WIDTH_PAIRS
        .iter()
        .find(|(_, full)| *full == c)
        .map(|(half, _)| *half)
        .or_else(|| {
            DECODE_ALIASES
                .iter()
                .find(|(alias, _)| *alias == c)
                .map(|(_, half)| *half)
        })
}

fn full_of(c: char) -> Option<char> {
    WIDTH_PAIRS
        .iter()
        .find(|(half, _)| *half == c)
        .map(|(_, full)| *full)
}

/// Replace every full-width character of [`WIDTH_PAIRS`] in `line` with its half-width form
pub fn to_half_width(line: &str) -> String {
    line.chars().map(|c| half_of(c).unwrap_or(c)).collect()
}

/// Replace every half-width character of [`WIDTH_PAIRS`] in `line` with its full-width form
pub fn to_full_width(line: &str) -> String {
    line.chars().map(|c| full_of(c).unwrap_or(c)).collect()
}
