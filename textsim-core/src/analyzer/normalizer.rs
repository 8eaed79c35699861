//! Text normalization for similarity comparison.
//!
//! Case and punctuation must never influence a similarity score, so every text
//! passes through here before it is split into tokens. The output alphabet is
//! deliberately tiny: ASCII lowercase letters, digits, and single spaces.

/// Separator marker in [`ASCII_FOLD`].
const SEP: u8 = 0;

/// Maps each ASCII byte to its lowercase alphanumeric form, or [`SEP`].
const ASCII_FOLD: [u8; 128] = build_ascii_fold();

const fn build_ascii_fold() -> [u8; 128] {
    let mut table = [SEP; 128];
    let mut b = 0usize;
    while b < 128 {
        let c = b as u8;
        table[b] = match c {
            b'a'..=b'z' | b'0'..=b'9' => c,
            b'A'..=b'Z' => c + (b'a' - b'A'),
            _ => SEP,
        };
        b += 1;
    }
    table
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// When enabled, Latin letters with diacritics keep their ASCII base
    /// letter ("café" becomes "cafe") instead of splitting the word
    /// ("café" becomes "caf").
    pub fold_diacritics: bool,
}

/// Text normalizer producing `[a-z0-9]` runs separated by single spaces.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Replaces every character outside `[a-z0-9]` with a separator
/// - Collapses separator runs into a single space
/// - Removes leading and trailing separators
///
/// Lowercasing happens before filtering, so characters whose lowercase form
/// is ASCII (the Kelvin sign, dotted capital I) still contribute letters.
///
/// # Examples
///
/// ```
/// use textsim_core::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  Hello, WORLD!  "), "hello world");
///
/// let folding = TextNormalizer::new(NormalizerConfig { fold_diacritics: true });
/// assert_eq!(folding.normalize("Café"), "cafe");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this normalizer was built with.
    #[inline]
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut gap = false;
        let fold = self.config.fold_diacritics;

        for ch in input.chars() {
            if ch.is_ascii() {
                push_folded(out, &mut gap, ASCII_FOLD[ch as usize]);
                continue;
            }

            for lowered in ch.to_lowercase() {
                if lowered.is_ascii() {
                    push_folded(out, &mut gap, ASCII_FOLD[lowered as usize]);
                    continue;
                }

                match fold.then(|| fold_latin(lowered)).flatten() {
                    Some(base) => {
                        for b in base.bytes() {
                            push_folded(out, &mut gap, b);
                        }
                    }
                    None => gap = true,
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Normalizes `text` with the default configuration.
#[inline]
pub fn normalize(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

/// Appends one folded byte. A pending gap becomes a single space, but only
/// between two alphanumerics, so the output never starts or ends with one.
#[inline(always)]
fn push_folded(out: &mut String, gap: &mut bool, b: u8) {
    if b == SEP {
        *gap = true;
        return;
    }

    if *gap && !out.is_empty() {
        out.push(' ');
    }
    *gap = false;
    out.push(b as char);
}

/// ASCII base of a lowercase Latin letter.
///
/// Combining diacritical marks fold to the empty string so that decomposed
/// input ("e" + U+0301) joins the word instead of splitting it.
#[inline]
fn fold_latin(c: char) -> Option<&'static str> {
    if ('\u{0300}'..='\u{036F}').contains(&c) {
        return Some("");
    }

    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => "c",
        'ð' | 'đ' | 'ď' => "d",
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' | 'ĝ' | 'ġ' | 'ģ' => "g",
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ñ' | 'ń' | 'ň' | 'ņ' => "n",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ŏ' | 'ő' | 'ø' => "o",
        'ř' | 'ŕ' => "r",
        'ś' | 'š' | 'ş' => "s",
        'ť' | 'ţ' => "t",
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ž' | 'ż' => "z",
        'ł' => "l",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        _ => return None,
    };
    Some(base)
}
