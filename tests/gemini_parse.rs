#[cfg(test)]
mod tests {
    use tudu::api::gemini::{extract_json_block, parse_lenient, AiReport, ProcrastinationReport};

    #[test]
    fn test_fenced_block_preferred() {
        let text = "Here is your report:\n```json\n{\"summary\": \"Solid week\"}\n```\nHope it helps!";
        assert_eq!(extract_json_block(text), Some("{\"summary\": \"Solid week\"}"));
    }

    #[test]
    fn test_fenced_block_without_language_tag() {
        let text = "```\n{\"summary\": \"ok\"}\n```";
        assert_eq!(extract_json_block(text), Some("{\"summary\": \"ok\"}"));
    }

    #[test]
    fn test_bare_braces_fallback() {
        let text = "No fences here, just {\"summary\": \"inline\", \"insights\": []} and some trailing prose.";
        assert_eq!(extract_json_block(text), Some("{\"summary\": \"inline\", \"insights\": []}"));
    }

    #[test]
    fn test_nested_braces_stay_balanced() {
        let text = "reply: {\"outer\": {\"inner\": 1}, \"more\": 2} done";
        assert_eq!(extract_json_block(text), Some("{\"outer\": {\"inner\": 1}, \"more\": 2}"));
    }

    #[test]
    fn test_no_json_yields_none() {
        assert_eq!(extract_json_block("I could not produce a report this time."), None);
        assert_eq!(extract_json_block("unbalanced { forever"), None);
    }

    #[test]
    fn test_parse_lenient_full_report() {
        let text = "```json\n{\"summary\": \"Good\", \"insights\": [\"a\", \"b\"], \"action_items\": [\"c\"]}\n```";
        let report: AiReport = parse_lenient(text);
        assert_eq!(report.summary, "Good");
        assert_eq!(report.insights, vec!["a", "b"]);
        assert_eq!(report.action_items, vec!["c"]);
    }

    #[test]
    fn test_parse_lenient_fills_missing_fields() {
        let report: AiReport = parse_lenient("{\"summary\": \"only a summary\"}");
        assert_eq!(report.summary, "only a summary");
        assert!(report.insights.is_empty());
        assert!(report.action_items.is_empty());
    }

    #[test]
    fn test_parse_lenient_degrades_to_empty_default() {
        let report: AiReport = parse_lenient("sorry, no structured answer today");
        assert!(report.summary.is_empty());
        assert!(report.insights.is_empty());

        let analysis: ProcrastinationReport = parse_lenient("{\"frequent_categories\": 42}");
        assert!(analysis.frequent_categories.is_empty());
        assert!(analysis.comment.is_empty());
    }
}
