//! Translation dictionary for the dictionary filter.
//!
//! Two sources merge into one mapping: a hand-built dictionary file
//! (`#` comments, `word \t trans1,trans2,...`) and a binary artifact
//! extracted offline from aligned bitext (a serialized word → translation
//! map). Entries accumulate across sources; nothing is overwritten.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Error;

#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionary {
    /// Builds the dictionary from an optional hand-built file and an optional
    /// aligned-bitext artifact. The result is immutable; filters only read it.
    pub fn from_files(dict: Option<&Path>, aligned: Option<&Path>) -> Result<Self, Error> {
        let mut dictionary = Self::default();
        if let Some(path) = dict {
            dictionary.read_dict_file(path)?;
        }
        if let Some(path) = aligned {
            dictionary.merge_artifact(path)?;
        }
        info!("dictionary loaded: {} entries", dictionary.len());
        Ok(dictionary)
    }

    /// Candidate translations of a source word, in insertion order.
    pub fn translations(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn read_dict_file(&mut self, path: &Path) -> Result<(), Error> {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            if line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let word = match fields.next() {
                Some(word) => word,
                None => continue,
            };
            let translations = match fields.next() {
                Some(t) if !t.trim().is_empty() => t,
                // blank translation field skips the entry
                _ => continue,
            };
            let entry = self.entries.entry(word.to_string()).or_default();
            entry.extend(
                translations
                    .split(',')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
            );
        }
        Ok(())
    }

    fn merge_artifact(&mut self, path: &Path) -> Result<(), Error> {
        let reader = BufReader::new(File::open(path)?);
        let aligned: HashMap<String, String> = bincode::deserialize_from(reader)?;
        info!("aligned artifact loaded: {} entries", aligned.len());
        for (word, translation) in aligned {
            let entry = self.entries.entry(word).or_default();
            if !entry.contains(&translation) {
                entry.push(translation);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn dict_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_comma_separated_candidates() {
        let file = dict_file("# a comment\ncat\tkocka,kocour\n");
        let dict = Dictionary::from_files(Some(file.path()), None).unwrap();
        assert_eq!(
            dict.translations("cat").unwrap(),
            ["kocka".to_string(), "kocour".to_string()]
        );
    }

    #[test]
    fn blank_translation_field_skips_the_line() {
        let file = dict_file("cat\t \ndog\tpes\n");
        let dict = Dictionary::from_files(Some(file.path()), None).unwrap();
        assert!(dict.translations("cat").is_none());
        assert_eq!(dict.translations("dog").unwrap(), ["pes".to_string()]);
    }

    #[test]
    fn artifact_merge_accumulates() {
        let file = dict_file("cat\tkocka\n");
        let mut aligned = HashMap::new();
        aligned.insert("cat".to_string(), "kocour".to_string());
        aligned.insert("dog".to_string(), "pes".to_string());
        let mut artifact = tempfile::NamedTempFile::new().unwrap();
        artifact
            .write_all(&bincode::serialize(&aligned).unwrap())
            .unwrap();

        let dict = Dictionary::from_files(Some(file.path()), Some(artifact.path())).unwrap();
        assert_eq!(
            dict.translations("cat").unwrap(),
            ["kocka".to_string(), "kocour".to_string()]
        );
        assert_eq!(dict.translations("dog").unwrap(), ["pes".to_string()]);
    }

    #[test]
    fn artifact_merge_does_not_duplicate() {
        let file = dict_file("cat\tkocka\n");
        let mut aligned = HashMap::new();
        aligned.insert("cat".to_string(), "kocka".to_string());
        let mut artifact = tempfile::NamedTempFile::new().unwrap();
        artifact
            .write_all(&bincode::serialize(&aligned).unwrap())
            .unwrap();

        let dict = Dictionary::from_files(Some(file.path()), Some(artifact.path())).unwrap();
        assert_eq!(dict.translations("cat").unwrap(), ["kocka".to_string()]);
    }
}
