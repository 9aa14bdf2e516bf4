// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet::WILDCARD, error, rack::Rack};
use std::collections::BTreeMap;

// in-word offset -> letter already fixed there.
pub type Constraint = BTreeMap<usize, char>;

#[derive(Clone, Default)]
struct Node {
    // in insertion order.
    arcs: Vec<(char, u32)>,
    accepts: bool,
}

// Prefix tree over the word list. Node 0 is the root.
#[derive(Clone)]
pub struct Lexicon {
    nodes: Vec<Node>,
    num_words: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lexicon({} words, {} nodes)", self.num_words, self.nodes.len())
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            num_words: 0,
        }
    }

    #[inline(always)]
    fn seek(&self, p: u32, letter: char) -> Option<u32> {
        self.nodes[p as usize]
            .arcs
            .iter()
            .find(|&&(tile, _)| tile == letter)
            .map(|&(_, q)| q)
    }

    pub fn insert(&mut self, word: &str) {
        let mut p = 0u32;
        for letter in word.chars().flat_map(char::to_lowercase) {
            p = match self.seek(p, letter) {
                Some(q) => q,
                None => {
                    let q = self.nodes.len() as u32;
                    self.nodes.push(Node::default());
                    self.nodes[p as usize].arcs.push((letter, q));
                    q
                }
            };
        }
        // the root never accepts.
        if p != 0 && !self.nodes[p as usize].accepts {
            self.nodes[p as usize].accepts = true;
            self.num_words += 1;
        }
    }

    pub fn is_word(&self, word: &str) -> bool {
        let mut p = 0u32;
        for letter in word.chars().flat_map(char::to_lowercase) {
            match self.seek(p, letter) {
                Some(q) => p = q,
                None => return false,
            }
        }
        self.nodes[p as usize].accepts
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    // Every word spelled by consuming tiles from the rack, one per letter. A blank
    // stands for any letter. With a constraint, the letter at each constrained offset
    // must be exactly that letter (paid for from the rack, which the caller has
    // already merged with the board letters), and a word is only reported once it
    // reaches every constrained offset. Not deduplicated.
    pub fn search(&self, rack: &Rack, constraint: Option<&Constraint>) -> Vec<String> {
        struct Env<'a> {
            lexicon: &'a Lexicon,
            constraint: Option<&'a Constraint>,
            max_constrained: Option<usize>,
            keys: Box<[char]>,
            path: String,
            depth: usize,
            results: Vec<String>,
        }

        fn step(env: &mut Env, rack: &mut Rack, letter: char, q: u32) {
            env.path.push(letter);
            env.depth += 1;
            iter(env, rack, q);
            env.depth -= 1;
            env.path.pop();
        }

        fn iter(env: &mut Env, rack: &mut Rack, p: u32) {
            let lexicon = env.lexicon;
            let node = &lexicon.nodes[p as usize];
            if node.accepts && env.max_constrained.is_none_or(|m| m <= env.depth) {
                env.results.push(env.path.clone());
            }
            if let Some(&letter) = env.constraint.and_then(|c| c.get(&env.depth)) {
                // forced. no siblings.
                if let Some(q) = lexicon.seek(p, letter) {
                    if let Some(mut held) = rack.hold(letter) {
                        step(env, &mut held, letter, q);
                    }
                }
                return;
            }
            for i in 0..env.keys.len() {
                let letter = env.keys[i];
                if letter == WILDCARD {
                    if let Some(mut held) = rack.hold(WILDCARD) {
                        for &(child, q) in node.arcs.iter() {
                            step(env, &mut held, child, q);
                        }
                    }
                } else if let Some(q) = lexicon.seek(p, letter) {
                    if let Some(mut held) = rack.hold(letter) {
                        step(env, &mut held, letter, q);
                    }
                }
            }
        }

        let mut rack = rack.clone();
        let mut env = Env {
            lexicon: self,
            constraint,
            max_constrained: constraint.and_then(|c| c.keys().next_back().copied()),
            keys: rack.keys().collect(),
            path: String::new(),
            depth: 0,
            results: Vec::new(),
        };
        iter(&mut env, &mut rack, 0);
        env.results
    }

    // search(), longest words first. ties keep search order.
    pub fn search_longest_first(&self, rack: &Rack, constraint: Option<&Constraint>) -> Vec<String> {
        let mut results = self.search(rack, constraint);
        results.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
        results
    }

    // One word per line. Words longer than max_len (in letters) are skipped.
    pub fn from_reader<R: std::io::BufRead>(reader: R, max_len: Option<usize>) -> error::Returns<Self> {
        let mut lexicon = Self::new();
        let mut num_skipped = 0;
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if max_len.is_some_and(|m| word.chars().count() > m) {
                num_skipped += 1;
                continue;
            }
            lexicon.insert(word);
        }
        tracing::debug!(
            "lexicon: {} words, {} nodes, {} too long",
            lexicon.len(),
            lexicon.nodes.len(),
            num_skipped
        );
        Ok(lexicon)
    }

    pub fn from_path<P: AsRef<std::path::Path>>(path: P, max_len: Option<usize>) -> error::Returns<Self> {
        let f = std::fs::File::open(path.as_ref())
            .map_err(|e| format!("cannot open {:?}: {}", path.as_ref(), e))?;
        let lexicon = Self::from_reader(std::io::BufReader::new(f), max_len)?;
        tracing::info!("loaded {} words from {:?}", lexicon.len(), path.as_ref());
        Ok(lexicon)
    }
}

impl<'s> FromIterator<&'s str> for Lexicon {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        iter.into_iter().for_each(|word| lexicon.insert(word));
        lexicon
    }
}
