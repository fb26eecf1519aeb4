use std::collections::HashSet;

use crate::parser::consts::CONST_KEYWORD;
use crate::parser::line::parse_definition;

use super::error::BundleError;
use super::SystemApi;

/// Insertion-ordered name -> value table built from a definitions file.
///
/// Redefining a name keeps its original position and takes the new
/// value; defining any value twice is fatal, whatever the names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ConstTable {
    entries: Vec<(String, String)>,
    seen_values: HashSet<String>,
    repeated_names: Vec<String>,
}
impl ConstTable {
    /// Build a table from definitions-file text. Lines that don't match
    /// the definition shape are skipped.
    pub fn parse(input: &str) -> Result<Self, BundleError> {
        let mut table = Self::default();
        for line in input.lines() {
            if let Some(def) = parse_definition(line) {
                table.insert(def.name, def.value)?;
            }
        }
        Ok(table)
    }

    pub fn from_file<S: SystemApi>(sys: &mut S, path: &str) -> Result<Self, BundleError> {
        let content = sys
            .fs_read_to_string(path)
            .map_err(|e| BundleError::io(path, e))?;
        Self::parse(&content)
    }

    fn insert(&mut self, name: String, value: String) -> Result<(), BundleError> {
        if !self.seen_values.insert(value.clone()) {
            return Err(BundleError::duplicate_value(value));
        }
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                entry.1 = value;
                self.repeated_names.push(name);
            }
            None => self.entries.push((name, value)),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names that were defined more than once, in redefinition order.
    pub fn repeated_names(&self) -> &[String] {
        &self.repeated_names
    }

    /// Render the table into declaration statements, one per entry,
    /// in table order. These strings go to the includer verbatim.
    pub fn render(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, value)| format!("{} {} = '{}'", CONST_KEYWORD, name, value))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_in_file_order() {
        let table = ConstTable::parse("A = \"1\"\nconst B = \"2\"\nC = \"3\"\n").unwrap();
        assert_eq!(
            table.render(),
            vec!["const A = '1'", "const B = '2'", "const C = '3'"]
        );
        assert_eq!(table.get("B"), Some("2"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn skips_non_definition_lines() {
        let input = "// header\n\nA = \"1\"\nnot a definition\nB = \"2\"\n";
        let table = ConstTable::parse(input).unwrap();
        assert_eq!(table.render(), vec!["const A = '1'", "const B = '2'"]);
    }

    #[test]
    fn duplicate_value_is_fatal() {
        let err = ConstTable::parse("FOO = \"x\"\nBAR = \"x\"\n").unwrap_err();
        assert_eq!(format!("{}", err), "Duplicate Const Value: x");
    }

    #[test]
    fn repeated_name_overwrites_in_place() {
        let table = ConstTable::parse("A = \"1\"\nB = \"2\"\nA = \"3\"\n").unwrap();
        // last write wins, original position kept
        assert_eq!(table.render(), vec!["const A = '3'", "const B = '2'"]);
        assert_eq!(table.repeated_names(), &["A".to_string()]);
    }

    #[test]
    fn repeating_a_value_under_the_same_name_is_still_fatal() {
        let err = ConstTable::parse("A = \"1\"\nA = \"1\"\n").unwrap_err();
        assert_eq!(format!("{}", err), "Duplicate Const Value: 1");
    }

    #[test]
    fn empty_input_builds_empty_table() {
        let table = ConstTable::parse("").unwrap();
        assert!(table.is_empty());
        assert!(table.render().is_empty());
    }
}
