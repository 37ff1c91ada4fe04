use nui_core::keywords::extract_payload;
use nui_core::{Command, KeywordTable};
use proptest::prelude::*;

proptest! {
    #[test]
    fn whitespace_never_classifies(ws in "[ \t\r\n]{0,16}") {
        prop_assert_eq!(KeywordTable::default().classify(ws.as_str()), None);
    }

    #[test]
    fn payload_only_for_dictation(input in "\\PC{0,40}") {
        if let Some(event) = KeywordTable::default().classify(input.as_str()) {
            if event.command != Command::DictateText {
                prop_assert_eq!(event.payload, "");
            }
        }
    }

    #[test]
    fn classification_ignores_case_and_padding(
        input in "[a-zA-Z ]{0,30}",
        left in " {0,3}",
        right in " {0,3}",
    ) {
        let table = KeywordTable::default();
        let padded = format!("{}{}{}", left, input.to_uppercase(), right);
        prop_assert_eq!(
            table.classify(input.as_str()).map(|e| e.command),
            table.classify(padded.as_str()).map(|e| e.command)
        );
    }

    #[test]
    fn new_document_keyword_wins_anywhere(prefix in "[xyz ]{0,10}", suffix in "[xyz ]{0,10}") {
        let input = format!("{}NuEvO{}", prefix, suffix);
        let event = KeywordTable::default().classify(input.as_str()).unwrap();
        prop_assert_eq!(event.command, Command::NewDocument);
        prop_assert_eq!(event.payload, "");
    }

    #[test]
    fn dictation_payload_is_text_after_first_space(text in "[a-zA-Z0-9 ]{0,30}") {
        let input = format!("dictar {}", text);
        if let Some(event) = KeywordTable::default().classify(input.as_str()) {
            if event.command == Command::DictateText {
                prop_assert_eq!(event.payload, text.clone());
                prop_assert_eq!(extract_payload(&input), text.as_str());
            }
        }
    }

    #[test]
    fn classification_is_deterministic(input in "\\PC{0,40}") {
        let table = KeywordTable::default();
        prop_assert_eq!(table.classify(input.as_str()), table.classify(input.as_str()));
    }
}
