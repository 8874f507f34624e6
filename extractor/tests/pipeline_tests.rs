use chrono::NaiveTime;
use text_extractor::mask::MASK_CHAR;
use text_extractor::patterns::card::is_valid_luhn;
use text_extractor::{extract, extract_parallel, DataType, ExtractOptions, Extractor};

const SAMPLE: &str = r#"Hi team, reach jane.doe@company.co.uk (not admin@localhost or test@@example.com).
Docs: https://example.com/launch?ref=mail and http://status.example.org.
Avoid javascript:alert('x') and data:text/html;base64,PHNjcmlwdD4=.
Call (415) 555-0199, 415-555-0100 or +1 415 555 0123.
Cards: 4111 1111 1111 1111, 5555-5555-5555-4444, 1234 5678 9012 3456.
Meet at 14:30, or 2:30 PM, or 02:30 pm; not 24:01 or 9:70 AM.
Tickets $19.99, $1,234.56, $12 but not $19.999.
#LaunchDay #ThisIsAHashtag #123start
<p>Hello</p><div onclick="steal()">x</div><a href="javascript:alert(1)">y</a><script>bad()</script>
"#;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_emails_are_validated_and_masked() {
    let result = extract(SAMPLE);
    let masked: Vec<&str> = result.emails.iter().map(|e| e.masked.as_str()).collect();
    assert_eq!(masked, vec!["j***@company.co.uk"]);
}

#[test]
fn test_only_http_urls() {
    let result = extract(SAMPLE);
    let urls: Vec<&str> = result.urls.iter().map(|u| u.value.as_str()).collect();
    assert_eq!(urls, vec!["https://example.com/launch?ref=mail", "http://status.example.org"]);
    assert!(urls.iter().all(|u| !u.contains("javascript:") && !u.starts_with("data:")));
}

#[test]
fn test_phones() {
    let result = extract(SAMPLE);
    let digits: Vec<&str> = result.phones.iter().map(|p| p.digits.as_str()).collect();
    assert_eq!(digits, vec!["4155550199", "4155550100", "14155550123"]);
}

#[test]
fn test_cards_pass_luhn_and_reveal_last_four() {
    let result = extract(SAMPLE);
    assert_eq!(result.credit_cards.len(), 2);
    for card in &result.credit_cards {
        let digits = card.digits.expose();
        assert!(is_valid_luhn(digits));
        assert_eq!(card.masked.len(), digits.len());
        assert_eq!(&card.masked[digits.len() - 4..], &digits[digits.len() - 4..]);
        assert!(card.masked[..digits.len() - 4].chars().all(|c| c == MASK_CHAR));
    }
}

#[test]
fn test_times_normalize_to_24_hour() {
    let result = extract(SAMPLE);
    let values: Vec<NaiveTime> = result.times.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![hm(14, 30), hm(14, 30), hm(14, 30)]);
}

#[test]
fn test_currency_in_cents() {
    let result = extract(SAMPLE);
    let cents: Vec<u64> = result.currency.iter().map(|c| c.cents).collect();
    assert_eq!(cents, vec![1_999, 123_456, 1_200]);
}

#[test]
fn test_hashtags() {
    let result = extract(SAMPLE);
    let tags: Vec<&str> = result.hashtags.iter().map(|h| h.tag.as_str()).collect();
    assert_eq!(tags, vec!["LaunchDay", "ThisIsAHashtag"]);
}

#[test]
fn test_html_classification() {
    let result = extract(SAMPLE);
    let tags: Vec<(&str, bool)> = result.html_tags.iter().map(|t| (t.tag.as_str(), t.safe)).collect();
    assert_eq!(
        tags,
        vec![
            ("<p>", true),
            ("</p>", true),
            ("<div onclick=\"steal()\">", false),
            ("</div>", true),
            ("<a href=\"javascript:alert(1)\">", false),
            ("</a>", true),
            ("<script>", false),
            ("</script>", false),
        ]
    );
}

#[test]
fn test_serialized_output_never_leaks_raw_values() {
    let json = extract(SAMPLE).to_json_pretty().unwrap();
    assert!(!json.contains("4111111111111111"));
    assert!(!json.contains("4111 1111 1111 1111"));
    assert!(!json.contains("5555555555554444"));
    assert!(!json.contains("jane.doe"));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for lane in DataType::ALL {
        assert!(value[lane.result_key()].is_array(), "missing lane {}", lane);
    }
}

#[test]
fn test_extraction_is_idempotent() {
    assert_eq!(extract(SAMPLE), extract(SAMPLE));
}

#[test]
fn test_parallel_matches_sequential() {
    assert_eq!(extract_parallel(SAMPLE), extract(SAMPLE));

    let options = ExtractOptions::from_filters(None, Some("html,url")).unwrap();
    let extractor = Extractor::with_options(options);
    assert_eq!(extractor.extract_parallel(SAMPLE), extractor.extract(SAMPLE));
}

#[test]
fn test_empty_input_yields_empty_lanes() {
    let result = extract("");
    assert!(result.is_empty());
    assert!(result.counts().values().all(|count| *count == 0));
}

#[test]
fn test_hostile_input_never_panics() {
    let inputs = [
        "@@@@@@@",
        "<<<<>>>>",
        "$$$,,,...",
        "####",
        "::::",
        "http://",
        "<a href=\"unterminated",
        "日本語のテキスト #タグ 12:30",
        "\u{0}\u{1}\u{7f}",
    ];
    for input in inputs {
        let _ = extract(input);
    }
}

#[test]
fn test_records_follow_appearance_order() {
    let result = extract("#b then #a then #c");
    let tags: Vec<&str> = result.hashtags.iter().map(|h| h.tag.as_str()).collect();
    assert_eq!(tags, vec!["b", "a", "c"]);
}

#[test]
fn test_extract_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "ping ops@example.net at 09:15").unwrap();

    let result = Extractor::new().extract_file(&path).unwrap();
    assert_eq!(result.emails.len(), 1);
    assert_eq!(result.times.len(), 1);

    assert!(Extractor::new().extract_file(dir.path().join("missing.txt")).is_err());
}

#[test]
fn test_card_followed_by_small_number() {
    let result = extract("cards 4111 1111 1111 1111 12 times");
    assert_eq!(result.credit_cards.len(), 1);
    assert_eq!(result.credit_cards[0].last4, "1111");
    assert_eq!(result.credit_cards[0].masked, "************1111");

    let result = extract_parallel("4111-1111-1111-1111 2 items");
    assert_eq!(result.credit_cards.len(), 1);
    assert_eq!(result.credit_cards[0].last4, "1111");
}
