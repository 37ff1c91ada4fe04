//! Keyword table: ordered (matcher, command) rules
//!
//! Classification normalizes the input (trim, then lowercase) and walks the
//! rules in order. The first rule whose matcher accepts the normalized text
//! wins; later rules are never consulted. Rule order is therefore the
//! tie-break policy: "abrir y poner rojo" opens a document because the open
//! rule precedes the red rule.
//!
//! The default table is the built-in Spanish vocabulary. Alternative tables
//! can be loaded from files through [`KeywordTableFile`].

use crate::command::{Command, DispatchEvent};
use crate::errors::{NuiError, Result};
use serde::{Deserialize, Serialize};

/// Schema version accepted by [`KeywordTableFile`]
pub const KEYWORD_TABLE_SCHEMA_VERSION: u32 = 0;

/// How a rule tests normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches when any keyword occurs anywhere in the text
    Contains(Vec<String>),
    /// Matches when the text begins with any keyword
    StartsWith(Vec<String>),
}

impl Matcher {
    /// Test a normalized (trimmed, lowercased) text
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::Contains(keywords) => keywords.iter().any(|k| normalized.contains(k.as_str())),
            Matcher::StartsWith(keywords) => {
                keywords.iter().any(|k| normalized.starts_with(k.as_str()))
            }
        }
    }

    pub fn keywords(&self) -> &[String] {
        match self {
            Matcher::Contains(keywords) | Matcher::StartsWith(keywords) => keywords,
        }
    }
}

/// A single priority-ordered rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub command: Command,
    pub matcher: Matcher,
}

impl KeywordRule {
    pub fn contains(command: Command, keywords: &[&str]) -> Self {
        Self {
            command,
            matcher: Matcher::Contains(keywords.iter().map(|k| k.to_string()).collect()),
        }
    }

    pub fn starts_with(command: Command, keywords: &[&str]) -> Self {
        Self {
            command,
            matcher: Matcher::StartsWith(keywords.iter().map(|k| k.to_string()).collect()),
        }
    }
}

/// Validated, ordered rule list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            rules: vec![
                KeywordRule::contains(Command::NewDocument, &["nuevo", "borrar todo"]),
                KeywordRule::contains(Command::OpenDocument, &["abrir", "cargar"]),
                KeywordRule::contains(Command::SaveDocument, &["guardar", "salvar"]),
                KeywordRule::contains(Command::ApplyBold, &["negrita", "fuerte"]),
                KeywordRule::contains(Command::ApplyItalic, &["cursiva", "italica"]),
                KeywordRule::contains(Command::ColorRed, &["rojo"]),
                KeywordRule::contains(Command::ColorBlue, &["azul"]),
                KeywordRule::starts_with(Command::DictateText, &["dictar", "escribir"]),
            ],
        }
    }
}

impl KeywordTable {
    /// Build a table from caller-supplied rules
    ///
    /// Keywords are lowercased so they can match normalized text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeywordTable` when there are no rules, a rule has no
    /// keywords, or a keyword is blank.
    pub fn from_rules(rules: Vec<KeywordRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(NuiError::InvalidKeywordTable {
                reason: "table has no rules".to_string(),
            });
        }

        let mut normalized_rules = Vec::with_capacity(rules.len());
        for (index, rule) in rules.into_iter().enumerate() {
            let keywords = rule.matcher.keywords();
            if keywords.is_empty() {
                return Err(NuiError::InvalidKeywordTable {
                    reason: format!("rule {} ({}) has no keywords", index, rule.command),
                });
            }
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(NuiError::InvalidKeywordTable {
                    reason: format!("rule {} ({}) has a blank keyword", index, rule.command),
                });
            }

            let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
            let matcher = match rule.matcher {
                Matcher::Contains(_) => Matcher::Contains(lowered),
                Matcher::StartsWith(_) => Matcher::StartsWith(lowered),
            };
            normalized_rules.push(KeywordRule {
                command: rule.command,
                matcher,
            });
        }

        Ok(Self {
            rules: normalized_rules,
        })
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// First rule accepting the normalized text, if any
    pub fn first_match(&self, normalized: &str) -> Option<&KeywordRule> {
        self.rules.iter().find(|rule| rule.matcher.matches(normalized))
    }

    /// Classify free text into at most one dispatch event
    ///
    /// Returns `None` for absent, empty, or whitespace-only input and for
    /// text no rule accepts. Never fails.
    pub fn classify<'a>(&self, input: impl Into<Option<&'a str>>) -> Option<DispatchEvent> {
        let input = input.into()?;
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }

        let rule = self.first_match(&normalized)?;
        let event = if rule.command.carries_payload() {
            DispatchEvent::with_payload(rule.command, extract_payload(input))
        } else {
            DispatchEvent::new(rule.command)
        };
        Some(event)
    }
}

/// Trim then lowercase
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Text of the original input after its first space, or empty
///
/// The input is taken as given: no trimming, no case folding.
pub fn extract_payload(input: &str) -> &str {
    match input.find(' ') {
        Some(index) => &input[index + 1..],
        None => "",
    }
}

// ========== File form ==========

/// Serialized keyword table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTableFile {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Rules in priority order
    pub rules: Vec<KeywordRuleEntry>,
}

/// Serialized rule; exactly one of `contains` / `starts_with` is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRuleEntry {
    pub command: Command,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub starts_with: Vec<String>,
}

impl TryFrom<KeywordTableFile> for KeywordTable {
    type Error = NuiError;

    fn try_from(file: KeywordTableFile) -> Result<Self> {
        if file.schema_version != KEYWORD_TABLE_SCHEMA_VERSION {
            return Err(NuiError::UnsupportedSchemaVersion {
                found: file.schema_version,
                expected: KEYWORD_TABLE_SCHEMA_VERSION,
            });
        }

        let mut rules = Vec::with_capacity(file.rules.len());
        for (index, entry) in file.rules.into_iter().enumerate() {
            let matcher = match (entry.contains.is_empty(), entry.starts_with.is_empty()) {
                (false, true) => Matcher::Contains(entry.contains),
                (true, false) => Matcher::StartsWith(entry.starts_with),
                _ => {
                    return Err(NuiError::InvalidKeywordTable {
                        reason: format!(
                            "rule {} ({}) must set exactly one of contains / starts_with",
                            index, entry.command
                        ),
                    })
                }
            };
            rules.push(KeywordRule {
                command: entry.command,
                matcher,
            });
        }

        KeywordTable::from_rules(rules)
    }
}

impl From<&KeywordTable> for KeywordTableFile {
    fn from(table: &KeywordTable) -> Self {
        let rules = table
            .rules
            .iter()
            .map(|rule| {
                let (contains, starts_with) = match &rule.matcher {
                    Matcher::Contains(k) => (k.clone(), Vec::new()),
                    Matcher::StartsWith(k) => (Vec::new(), k.clone()),
                };
                KeywordRuleEntry {
                    command: rule.command,
                    contains,
                    starts_with,
                }
            })
            .collect();

        Self {
            schema_version: KEYWORD_TABLE_SCHEMA_VERSION,
            rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_of(input: &str) -> Option<Command> {
        KeywordTable::default().classify(input).map(|e| e.command)
    }

    #[test]
    fn test_default_table_order() {
        let order: Vec<_> = KeywordTable::default()
            .rules()
            .iter()
            .map(|r| r.command)
            .collect();
        assert_eq!(order, Command::ALL.to_vec());
    }

    #[test]
    fn test_each_keyword_classifies() {
        let cases = [
            ("nuevo documento", Command::NewDocument),
            ("borrar todo ya", Command::NewDocument),
            ("abrir archivo", Command::OpenDocument),
            ("cargar notas", Command::OpenDocument),
            ("guardar", Command::SaveDocument),
            ("salvar cambios", Command::SaveDocument),
            ("poner negrita", Command::ApplyBold),
            ("letra fuerte", Command::ApplyBold),
            ("en cursiva", Command::ApplyItalic),
            ("italica por favor", Command::ApplyItalic),
            ("color rojo", Command::ColorRed),
            ("color azul", Command::ColorBlue),
            ("dictar hola", Command::DictateText),
            ("escribir algo", Command::DictateText),
        ];
        for (input, expected) in cases {
            assert_eq!(command_of(input), Some(expected), "input {:?}", input);
        }
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        assert_eq!(command_of("Quiero un NUEVO texto"), Some(Command::NewDocument));
        assert_eq!(command_of("GuArDaR"), Some(Command::SaveDocument));
    }

    #[test]
    fn test_priority_tie_break() {
        assert_eq!(command_of("abrir y poner rojo"), Some(Command::OpenDocument));
        assert_eq!(command_of("rojo y azul"), Some(Command::ColorRed));
        assert_eq!(command_of("guardar en negrita"), Some(Command::SaveDocument));
        assert_eq!(command_of("nuevo y abrir"), Some(Command::NewDocument));
    }

    #[test]
    fn test_contains_rules_outrank_dictation() {
        // Dictation is the last rule, so dictated text mentioning a keyword
        // classifies as that keyword's command.
        assert_eq!(command_of("dictar el cielo azul"), Some(Command::ColorBlue));
    }

    #[test]
    fn test_starts_with_requires_prefix() {
        assert_eq!(command_of("quiero dictar algo"), None);
        assert_eq!(command_of("  Dictar con espacios"), Some(Command::DictateText));
    }

    #[test]
    fn test_degenerate_input_is_ignored() {
        let table = KeywordTable::default();
        assert_eq!(table.classify(None::<&str>), None);
        assert_eq!(table.classify(""), None);
        assert_eq!(table.classify("   \t\n"), None);
        assert_eq!(table.classify("?!..."), None);
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(command_of("reproducir musica"), None);
    }

    #[test]
    fn test_payload_preserves_original_case() {
        let event = KeywordTable::default()
            .classify("Dictar Hola Mundo")
            .unwrap();
        assert_eq!(event.command, Command::DictateText);
        assert_eq!(event.payload, "Hola Mundo");
    }

    #[test]
    fn test_payload_empty_without_space() {
        let event = KeywordTable::default().classify("dictar").unwrap();
        assert_eq!(event.command, Command::DictateText);
        assert_eq!(event.payload, "");
    }

    #[test]
    fn test_payload_is_taken_from_untrimmed_input() {
        let event = KeywordTable::default()
            .classify("escribir  dos espacios ")
            .unwrap();
        assert_eq!(event.payload, " dos espacios ");

        let event = KeywordTable::default().classify(" dictar hola").unwrap();
        assert_eq!(event.payload, "dictar hola");
    }

    #[test]
    fn test_non_dictate_commands_have_empty_payload() {
        let event = KeywordTable::default().classify("abrir mi archivo").unwrap();
        assert_eq!(event.payload, "");
    }

    #[test]
    fn test_from_rules_lowercases_keywords() {
        let table =
            KeywordTable::from_rules(vec![KeywordRule::contains(Command::ColorRed, &["RED"])])
                .unwrap();
        assert_eq!(
            table.classify("make it Red").map(|e| e.command),
            Some(Command::ColorRed)
        );
    }

    #[test]
    fn test_from_rules_rejects_invalid_tables() {
        assert!(matches!(
            KeywordTable::from_rules(vec![]),
            Err(NuiError::InvalidKeywordTable { .. })
        ));
        assert!(matches!(
            KeywordTable::from_rules(vec![KeywordRule::contains(Command::ColorRed, &[])]),
            Err(NuiError::InvalidKeywordTable { .. })
        ));
        assert!(matches!(
            KeywordTable::from_rules(vec![KeywordRule::contains(Command::ColorRed, &["  "])]),
            Err(NuiError::InvalidKeywordTable { .. })
        ));
    }

    #[test]
    fn test_file_form_preserves_table() {
        let table = KeywordTable::default();
        let file = KeywordTableFile::from(&table);
        assert_eq!(file.schema_version, KEYWORD_TABLE_SCHEMA_VERSION);
        assert_eq!(KeywordTable::try_from(file).unwrap(), table);
    }

    #[test]
    fn test_file_form_rejects_ambiguous_entry() {
        let file = KeywordTableFile {
            schema_version: 0,
            rules: vec![KeywordRuleEntry {
                command: Command::ColorRed,
                contains: vec!["rojo".to_string()],
                starts_with: vec!["rojo".to_string()],
            }],
        };
        assert!(matches!(
            KeywordTable::try_from(file),
            Err(NuiError::InvalidKeywordTable { .. })
        ));
    }

    #[test]
    fn test_file_form_rejects_unknown_schema_version() {
        let file = KeywordTableFile {
            schema_version: 3,
            rules: vec![],
        };
        assert_eq!(
            KeywordTable::try_from(file),
            Err(NuiError::UnsupportedSchemaVersion {
                found: 3,
                expected: 0
            })
        );
    }
}
