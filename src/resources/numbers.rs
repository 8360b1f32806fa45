//! Number verbalization map (`digits \t verb1,verb2,...`), e.g.
//! `2 -> two,second`. Used by the number filter to accept targets that spell
//! a number out instead of repeating the digits.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Error;

#[derive(Debug, Default)]
pub struct NumberMap {
    entries: HashMap<String, Vec<String>>,
}

impl NumberMap {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let mut entries = HashMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let (digits, verbalizations) = line.split_once('\t').ok_or_else(|| {
                Error::Format(format!(
                    "line {}: expected digits \\t verbalizations, got {:?}",
                    idx + 1,
                    line
                ))
            })?;
            entries.insert(
                digits.to_string(),
                verbalizations.split(',').map(str::to_string).collect(),
            );
        }
        info!("number map loaded: {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn verbalizations(&self, digits: &str) -> Option<&[String]> {
        self.entries.get(digits).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, vs)| {
                    (
                        k.to_string(),
                        vs.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
                    )
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_map_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"2\ttwo,second\n3\tthree,3rd\n").unwrap();
        let map = NumberMap::from_file(file.path()).unwrap();
        assert_eq!(
            map.verbalizations("3").unwrap(),
            ["three".to_string(), "3rd".to_string()]
        );
        assert!(map.verbalizations("4").is_none());
    }

    #[test]
    fn missing_tab_is_a_format_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"2 two\n").unwrap();
        assert!(matches!(
            NumberMap::from_file(file.path()),
            Err(Error::Format(_))
        ));
    }
}
