use serde::{Deserialize, Serialize};

const WIKIPEDIA_CURID_URL: &str = "https://en.wikipedia.org/?curid=";

// ── Biographical record ──────────────────────────────────────────────────

/// One historical figure, as supplied by ingestion.
///
/// Years are signed: 428 BCE is `-428`. A record without a death year is
/// kept in the dataset but never takes part in pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiographicalRecord {
    pub article_id: u64,
    pub full_name: String,
    pub birth_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,
    #[serde(alias = "historical_popularity_index")]
    pub popularity_index: f64,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl BiographicalRecord {
    /// Link to the figure's Wikipedia article by page id.
    pub fn wikipedia_url(&self) -> String {
        format!("{WIKIPEDIA_CURID_URL}{}", self.article_id)
    }
}

// ── Thread ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreadStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A composed post sequence about one pairing, in persisted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: usize,
    pub status: ThreadStatus,
    /// Message-sized text segments, in posting order
    #[serde(rename = "tweets")]
    pub segments: Vec<String>,
    /// One per figure, older first; `None` when the figure has no thumbnail
    pub thumbnail_urls: Vec<Option<String>>,
    pub wikipedia_urls: Vec<String>,
    /// Assigned by the external poster
    #[serde(default)]
    pub message_id: Option<u64>,
}

impl Thread {
    /// Human-readable form: an id line, then each segment numbered `[i/n]`.
    pub fn render(&self) -> String {
        let mut out = format!("ID: {}", self.id);
        let n = self.segments.len();
        for (i, segment) in self.segments.iter().enumerate() {
            out.push_str(&format!("\n\n[{}/{}]\n{}", i + 1, n, segment));
        }
        out
    }

    /// True once an external reviewer has decided on the thread.
    pub fn is_reviewed(&self) -> bool {
        matches!(
            self.status,
            ThreadStatus::Accepted | ThreadStatus::Rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread() -> Thread {
        Thread {
            id: 7,
            status: ThreadStatus::Pending,
            segments: vec!["first".into(), "second".into()],
            thumbnail_urls: vec![Some("http://a/img.jpg".into()), None],
            wikipedia_urls: vec![
                "https://en.wikipedia.org/?curid=1".into(),
                "https://en.wikipedia.org/?curid=2".into(),
            ],
            message_id: None,
        }
    }

    #[test]
    fn test_render_numbers_segments() {
        assert_eq!(
            thread().render(),
            "ID: 7\n\n[1/2]\nfirst\n\n[2/2]\nsecond"
        );
    }

    #[test]
    fn test_thread_json_field_names() {
        let json = serde_json::to_value(thread()).unwrap();
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["tweets"][1], "second");
        assert!(json["thumbnail_urls"][1].is_null());
        assert!(json["message_id"].is_null());
    }

    #[test]
    fn test_record_accepts_source_column_names() {
        let json = r#"{
            "article_id": 42,
            "full_name": "Socrates",
            "birth_year": -470,
            "death_year": -399,
            "historical_popularity_index": 31.5,
            "abstract": "Socrates was a Greek philosopher."
        }"#;
        let record: BiographicalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.birth_year, -470);
        assert_eq!(record.popularity_index, 31.5);
        assert_eq!(record.thumbnail_url, None);
        assert_eq!(record.wikipedia_url(), "https://en.wikipedia.org/?curid=42");
    }

    #[test]
    fn test_reviewed_status() {
        let mut t = thread();
        assert!(!t.is_reviewed());
        t.status = ThreadStatus::Rejected;
        assert!(t.is_reviewed());
    }
}
