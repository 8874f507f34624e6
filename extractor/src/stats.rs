use serde_json::{json, Value};

use crate::record::ExtractionResult;

/// Per-category summary of one extraction, sorted by count (highest first).
pub fn build_stats_json(result: &ExtractionResult, lines_processed: usize, source: &str) -> Value {
    let total = result.len();
    let mut categories: Vec<_> = result.counts().into_iter().filter(|(_, count)| *count > 0).collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    let category_stats: Vec<Value> = categories
        .into_iter()
        .map(|(lane, count)| {
            let percentage = if total > 0 {
                ((count as f64) / (total as f64) * 100.0).round()
            } else {
                0.0
            };
            json!({
                "category": lane.result_key(),
                "count": count,
                "percentage": percentage
            })
        })
        .collect();

    json!({
        "summary": {
            "total_lines_processed": lines_processed,
            "total_records": total,
            "source": source
        },
        "categories": category_stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extract;

    #[test]
    fn test_stats_sorted_by_count() {
        let result = extract("#one #two #three 14:30");
        let stats = build_stats_json(&result, 1, "text_input");

        assert_eq!(stats["summary"]["total_records"], 4);
        assert_eq!(stats["summary"]["source"], "text_input");
        let categories = stats["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0]["category"], "hashtags");
        assert_eq!(categories[0]["count"], 3);
        assert_eq!(categories[0]["percentage"], 75.0);
        assert_eq!(categories[1]["category"], "times");
    }

    #[test]
    fn test_stats_for_empty_result() {
        let stats = build_stats_json(&ExtractionResult::default(), 0, "empty");
        assert_eq!(stats["summary"]["total_records"], 0);
        assert!(stats["categories"].as_array().unwrap().is_empty());
    }
}
