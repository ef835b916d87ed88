use crate::model::ImageRecord;

/// Records whose name contains `query`, case-insensitively, in their original order.
/// An empty query matches everything.
pub fn filter<'a>(records: &'a [ImageRecord], query: &str) -> Vec<&'a ImageRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> ImageRecord {
        ImageRecord {
            id,
            name: name.to_string(),
            content: String::new(),
            size: 0,
            media_type: "image/png".to_string(),
            tags: Vec::new(),
            upload_timestamp: String::new(),
        }
    }

    fn names<'a>(records: &[&'a ImageRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let records = vec![record(2, "b"), record(1, "a"), record(3, "c")];
        let result = filter(&records, "");
        assert_eq!(names(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let records = vec![record(1, "Cat.png")];
        assert_eq!(filter(&records, "cat").len(), 1);
        assert_eq!(filter(&records, "CAT").len(), 1);
    }

    #[test]
    fn keeps_order_of_matches() {
        let records = vec![
            record(1, "Beach Sunset"),
            record(2, "Mountain"),
            record(3, "sunset over lake"),
        ];
        let result = filter(&records, "Sunset");
        assert_eq!(names(&result), vec!["Beach Sunset", "sunset over lake"]);
    }

    #[test]
    fn no_match_is_empty() {
        let records = vec![record(1, "dog")];
        assert!(filter(&records, "cat").is_empty());
    }

    #[test]
    fn whitespace_query_is_a_literal_substring() {
        let records = vec![record(1, "two words"), record(2, "oneword")];
        assert_eq!(names(&filter(&records, " ")), vec!["two words"]);
    }
}
