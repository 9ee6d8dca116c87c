use crate::types::EpisodeRecord;

/// Derives the ordered set of unique anime titles observed among matches.
///
/// First-seen order is preserved; a title that appears again later is
/// skipped. Pure function of its input.
#[must_use]
pub fn unique_titles(records: &[EpisodeRecord]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for record in records {
        if !titles.contains(&record.anime_name) {
            titles.push(record.anime_name.clone());
        }
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pack: &str, title: &str) -> EpisodeRecord {
        EpisodeRecord {
            pack_number: pack.into(),
            file_size: "1.2G".into(),
            uploader: "SubsPlease".into(),
            anime_name: title.into(),
            episode_number: "01".into(),
        }
    }

    #[test]
    fn empty_records_yield_empty_set() {
        assert!(unique_titles(&[]).is_empty());
    }

    #[test]
    fn duplicates_collapse_in_first_seen_order() {
        let records = [
            record("#1", "Tokyo Revengers"),
            record("#2", "Tokyo Revengers"),
            record("#3", "Golden Kamuy S3"),
            record("#4", "Tokyo Revengers"),
        ];
        let titles = unique_titles(&records);
        assert_eq!(titles, ["Tokyo Revengers", "Golden Kamuy S3"]);
        assert!(titles.len() <= records.len());
    }

    #[test]
    fn case_variants_are_distinct_titles() {
        // The set keys on the as-authored title substring.
        let records = [record("#1", "Tokyo Revengers"), record("#2", "TOKYO REVENGERS")];
        assert_eq!(unique_titles(&records).len(), 2);
    }
}
