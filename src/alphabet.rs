// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;
use std::collections::BTreeMap;

// blank tile, stands for any letter.
pub const WILDCARD: char = '*';

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LetterValue {
    pub freq: u8,
    pub score: i8,
}

// (letter, freq, score)
static FRENCH_TILES: &[(char, u8, i8)] = &[
    (WILDCARD, 2, 0),
    ('a', 9, 1),
    ('b', 2, 3),
    ('c', 2, 3),
    ('d', 3, 2),
    ('e', 15, 1),
    ('f', 2, 4),
    ('g', 2, 2),
    ('h', 2, 4),
    ('i', 8, 1),
    ('j', 1, 8),
    ('k', 1, 10),
    ('l', 5, 1),
    ('m', 3, 2),
    ('n', 6, 1),
    ('o', 6, 1),
    ('p', 2, 3),
    ('q', 1, 8),
    ('r', 6, 1),
    ('s', 6, 1),
    ('t', 6, 1),
    ('u', 6, 1),
    ('v', 2, 4),
    ('w', 1, 10),
    ('x', 1, 10),
    ('y', 1, 10),
    ('z', 1, 10),
];

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LetterTable {
    letters: BTreeMap<char, LetterValue>,
}

impl LetterTable {
    pub fn french() -> Self {
        Self {
            letters: FRENCH_TILES
                .iter()
                .map(|&(letter, freq, score)| (letter, LetterValue { freq, score }))
                .collect(),
        }
    }

    // one `<letter> <count> <value>` per line. blank lines are skipped.
    pub fn from_reader<R: std::io::BufRead>(reader: R) -> error::Returns<Self> {
        let mut letters = BTreeMap::new();
        for (line_num, line) in (1..).zip(reader.lines()) {
            let line = line?;
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.is_empty() {
                continue;
            }
            let mut letter_chars = fields[0].chars();
            let letter = match (fields.len(), letter_chars.next(), letter_chars.next()) {
                (3, Some(c), None) => c.to_lowercase().next().unwrap_or(c),
                _ => {
                    return Err(error::LoadError::BadLetterLine { line_num, line }.into());
                }
            };
            let freq = fields[1].parse::<u8>().map_err(|_| error::LoadError::BadNumber {
                line_num,
                field: "count",
                line: line.clone(),
            })?;
            let score = fields[2].parse::<i8>().map_err(|_| error::LoadError::BadNumber {
                line_num,
                field: "value",
                line: line.clone(),
            })?;
            if letters
                .insert(letter, LetterValue { freq, score })
                .is_some()
            {
                return Err(error::LoadError::DuplicateLetter { line_num, letter }.into());
            }
        }
        tracing::debug!("loaded {} letter values", letters.len());
        Ok(Self { letters })
    }

    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> error::Returns<Self> {
        let f = std::fs::File::open(path.as_ref())
            .map_err(|e| format!("cannot open {:?}: {}", path.as_ref(), e))?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    #[inline(always)]
    pub fn get(&self, letter: char) -> Option<LetterValue> {
        self.letters.get(&letter).copied()
    }

    // letters missing from the table are worth nothing.
    #[inline(always)]
    pub fn score(&self, letter: char) -> i32 {
        self.get(letter).map_or(0, |v| v.score as i32)
    }

    #[inline(always)]
    pub fn freq(&self, letter: char) -> u8 {
        self.get(letter).map_or(0, |v| v.freq)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterValue)> + '_ {
        self.letters.iter().map(|(&letter, &value)| (letter, value))
    }

    pub fn num_tiles(&self) -> usize {
        self.letters.values().map(|v| v.freq as usize).sum()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
