use std::collections::HashMap;

struct Node {
    children: HashMap<char, Node>,
    romaji: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            romaji: None,
        }
    }
}

/// Character trie keyed on kana, storing the romaji for each complete key.
pub struct KanaTrie {
    root: Node,
    len: usize,
}

impl KanaTrie {
    pub fn from_mappings<'a>(mappings: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut trie = KanaTrie {
            root: Node::new(),
            len: 0,
        };
        for (kana, romaji) in mappings {
            trie.insert(kana, romaji);
        }
        trie
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Find the longest key that is a prefix of `input`.
    ///
    /// Returns the key length in chars and its romaji.
    pub fn longest_match(&self, input: &[char]) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in input.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(romaji) = &node.romaji {
                best = Some((i + 1, romaji.as_str()));
            }
        }
        best
    }

    fn insert(&mut self, kana: &str, romaji: &str) {
        let mut node = &mut self.root;
        for c in kana.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        if node.romaji.is_none() {
            self.len += 1;
        }
        node.romaji = Some(romaji.to_string());
    }
}
