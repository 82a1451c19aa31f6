//! # Character sets
//!
//! A [`Charset`] is the ordered list of characters that are rendered for
//! every font. The order matters: it decides which characters survive the
//! sample count cap and which output name each one gets.
//!
//! The built-in sets live in a JSON resource (see [`CharsetTable`]), any
//! other selector is read as a file whose first line holds the characters.

use std::{
    convert::Infallible,
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::Deserialize;

use crate::{Error, Result};

/// Where the charset resource is looked up by default
pub const DEFAULT_CHARSET_FILE: &str = "./charset/en.json";

/// Selects a charset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetId {
    /// Latin letters
    En,
    /// Simplified Chinese
    Cn,
    /// Japanese kana and kanji
    Jp,
    /// Korean hangul
    Kr,
    /// Traditional Chinese
    CnT,
    /// A file with the characters on its first line
    Custom(PathBuf),
}

impl CharsetId {
    /// The key of this charset in the [`CharsetTable`]
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::En => Some("en"),
            Self::Cn => Some("gbk"),
            Self::Jp => Some("jp"),
            Self::Kr => Some("kr"),
            Self::CnT => Some("gb2312_t"),
            Self::Custom(_) => None,
        }
    }
}

impl FromStr for CharsetId {
    type Err = Infallible;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        Ok(match val {
            "EN" => Self::En,
            "CN" => Self::Cn,
            "JP" => Self::Jp,
            "KR" => Self::Kr,
            "CN_T" => Self::CnT,
            path => Self::Custom(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for CharsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => f.write_str("EN"),
            Self::Cn => f.write_str("CN"),
            Self::Jp => f.write_str("JP"),
            Self::Kr => f.write_str("KR"),
            Self::CnT => f.write_str("CN_T"),
            Self::Custom(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The bundled charset resource
///
/// Every key holds an array of single-character strings.
#[derive(Debug, Default, Deserialize)]
pub struct CharsetTable {
    #[serde(default)]
    en: Option<Vec<char>>,
    #[serde(default)]
    gbk: Option<Vec<char>>,
    #[serde(default)]
    jp: Option<Vec<char>>,
    #[serde(default)]
    kr: Option<Vec<char>>,
    #[serde(default)]
    gb2312_t: Option<Vec<char>>,
}

impl CharsetTable {
    /// Read the resource from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(Error::io(path))?;
        serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_owned(),
            source,
        })
    }

    /// Get the characters stored under `key`
    pub fn get(&self, key: &str) -> Option<&[char]> {
        let chars = match key {
            "en" => &self.en,
            "gbk" => &self.gbk,
            "jp" => &self.jp,
            "kr" => &self.kr,
            "gb2312_t" => &self.gb2312_t,
            _ => return None,
        };
        chars.as_deref()
    }
}

/// An ordered sequence of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Create a charset from a list of characters
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Load the charset selected by `id`
    ///
    /// Built-in charsets are read from the resource at `table`.
    pub fn load(id: &CharsetId, table: &Path) -> Result<Self> {
        match (id, id.key()) {
            (CharsetId::Custom(path), _) => Self::from_file(path),
            (_, Some(key)) => Self::from_table(&CharsetTable::load(table)?, key),
            (_, None) => unreachable!("only custom charsets have no key"),
        }
    }

    /// Pick the charset with the given key from a resource
    pub fn from_table(table: &CharsetTable, key: &'static str) -> Result<Self> {
        let chars = table.get(key).ok_or(Error::MissingKey(key))?;
        Ok(Self::new(chars.to_vec()))
    }

    /// Read the characters from the first line of a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(Error::io(path))?;
        Self::from_line(&text)
    }

    /// Use every character on the first line of `text`
    ///
    /// The line terminator (`\n` or `\r\n`) is not part of the charset.
    pub fn from_line(text: &str) -> Result<Self> {
        let line = text.lines().next().unwrap_or_default();
        if line.is_empty() {
            return Err(Error::EmptyCharset);
        }
        Ok(Self::new(line.chars().collect()))
    }

    /// Randomly permute the charset
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.chars.shuffle(rng);
        self
    }

    /// Randomly permute the charset, reproducibly if a seed is given
    pub fn shuffled_with_seed(self, seed: Option<u64>) -> Self {
        debug!("Shuffling charset (seed: {:?})", seed);
        match seed {
            Some(seed) => self.shuffled(&mut StdRng::seed_from_u64(seed)),
            None => self.shuffled(&mut rand::rng()),
        }
    }

    /// The characters in order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Iterate over the characters in order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// The number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether there are no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::PathBuf};

    use super::{Charset, CharsetId, CharsetTable};
    use crate::Error;

    fn resource() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../charset/en.json")
    }

    #[test]
    fn test_parse_id() {
        let parse = |s: &str| s.parse::<CharsetId>().unwrap();
        assert_eq!(parse("EN"), CharsetId::En);
        assert_eq!(parse("CN"), CharsetId::Cn);
        assert_eq!(parse("JP"), CharsetId::Jp);
        assert_eq!(parse("KR"), CharsetId::Kr);
        assert_eq!(parse("CN_T"), CharsetId::CnT);
        assert_eq!(
            parse("chars.txt"),
            CharsetId::Custom(PathBuf::from("chars.txt"))
        );
        // selectors are case sensitive
        assert_eq!(parse("en"), CharsetId::Custom(PathBuf::from("en")));
    }

    #[test]
    fn test_builtin_sets_match_resource() {
        let path = resource();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        for id in [
            CharsetId::En,
            CharsetId::Cn,
            CharsetId::Jp,
            CharsetId::Kr,
            CharsetId::CnT,
        ] {
            let key = id.key().unwrap();
            let charset = Charset::load(&id, &path).unwrap();
            assert!(!charset.is_empty(), "{} is empty", id);
            assert_eq!(charset.len(), json[key].as_array().unwrap().len());
            assert_eq!(charset.chars()[0].to_string(), json[key][0].as_str().unwrap());
        }
    }

    #[test]
    fn test_en_fits_letter_naming() {
        let charset = Charset::load(&CharsetId::En, &resource()).unwrap();
        assert_eq!(charset.len(), 52);
        assert_eq!(charset.chars()[0], 'A');
        assert_eq!(charset.chars()[26], 'a');
    }

    #[test]
    fn test_from_line() {
        let abc = Charset::from_line("ABC\n").unwrap();
        assert_eq!(abc.chars(), &['A', 'B', 'C']);

        let crlf = Charset::from_line("äö\r\nignored").unwrap();
        assert_eq!(crlf.chars(), &['ä', 'ö']);

        let no_newline = Charset::from_line("xy").unwrap();
        assert_eq!(no_newline.chars(), &['x', 'y']);

        assert!(matches!(Charset::from_line("\nABC"), Err(Error::EmptyCharset)));
        assert!(matches!(Charset::from_line(""), Err(Error::EmptyCharset)));
    }

    #[test]
    fn test_custom_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ABC").unwrap();
        writeln!(file, "DEF").unwrap();
        let id = CharsetId::Custom(file.path().to_owned());

        let charset = Charset::load(&id, &resource()).unwrap();
        assert_eq!(charset.chars(), &['A', 'B', 'C']);
    }

    #[test]
    fn test_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let custom = CharsetId::Custom(missing.clone());
        assert!(matches!(
            Charset::load(&custom, &resource()),
            Err(Error::Io { path, .. }) if path == missing
        ));
        assert!(matches!(
            Charset::load(&CharsetId::En, &missing),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_table() {
        let table: CharsetTable = serde_json::from_str(r#"{"en": ["A", "B"]}"#).unwrap();
        assert!(matches!(
            Charset::from_table(&table, "kr"),
            Err(Error::MissingKey("kr"))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"en": ["AB"]}}"#).unwrap();
        assert!(matches!(
            CharsetTable::load(file.path()),
            Err(Error::Json { .. })
        ));
    }

    #[test]
    fn test_seeded_shuffle() {
        let charset = Charset::from_line("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();

        let a = charset.clone().shuffled_with_seed(Some(42));
        let b = charset.clone().shuffled_with_seed(Some(42));
        assert_eq!(a, b);

        let mut sorted = a.chars().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, charset.chars());
    }
}
