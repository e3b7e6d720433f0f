use serde::de::DeserializeOwned;
use serde::Deserialize;

/// List responses arrive in three shapes depending on the endpoint:
/// a DRF page envelope, a `{data, total}` wrapper, or a bare array.
/// Callers decode into this enum and flatten with [`ListEnvelope::into_parts`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged {
        count: u64,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Wrapped {
        data: Vec<T>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Rows plus the total count when the envelope carried one.
    pub fn into_parts(self) -> (Vec<T>, Option<u64>) {
        match self {
            ListEnvelope::Paged { count, results, .. } => (results, Some(count)),
            ListEnvelope::Wrapped { data, total } => {
                let total = total.or(Some(data.len() as u64));
                (data, total)
            }
            ListEnvelope::Bare(rows) => (rows, None),
        }
    }

    pub fn into_results(self) -> Vec<T> {
        self.into_parts().0
    }
}

/// Decode a list body of any of the three supported shapes.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<(Vec<T>, Option<u64>), String> {
    serde_json::from_str::<ListEnvelope<T>>(body)
        .map(ListEnvelope::into_parts)
        .map_err(|e| format!("Failed to parse list response: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn decodes_drf_page_envelope() {
        let body = r#"{"count": 42, "next": "...?page=2", "previous": null, "results": [{"id": 1}, {"id": 2}]}"#;
        let (rows, total) = decode_list::<Row>(body).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(total, Some(42));
    }

    #[test]
    fn decodes_data_total_wrapper() {
        let body = r#"{"data": [{"id": 7}], "total": 1}"#;
        let (rows, total) = decode_list::<Row>(body).unwrap();
        assert_eq!(rows, vec![Row { id: 7 }]);
        assert_eq!(total, Some(1));
    }

    #[test]
    fn decodes_bare_array() {
        let (rows, total) = decode_list::<Row>(r#"[{"id": 3}]"#).unwrap();
        assert_eq!(rows, vec![Row { id: 3 }]);
        assert_eq!(total, None);
    }

    #[test]
    fn rejects_non_list_bodies() {
        assert!(decode_list::<Row>(r#"{"detail": "nope"}"#).is_err());
    }
}
