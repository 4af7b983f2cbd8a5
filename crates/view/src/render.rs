use protocol::ResultItem;

/// Text projection of one result row, exactly as the list displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub title: String,
    pub description: String,
    /// Rounded percentage, e.g. "92%".
    pub confidence: String,
    pub annotation: Option<String>,
    /// Two-decimal distance, e.g. "3.20 km".
    pub distance: Option<String>,
}

impl RowText {
    pub fn from_item(item: &ResultItem) -> Self {
        let title = if item.title.is_empty() {
            "Untitled".to_string()
        } else {
            item.title.clone()
        };
        Self {
            title,
            description: item.description.clone(),
            confidence: format!("{}%", (item.score * 100.0).round() as i64),
            annotation: item.annotation.clone(),
            distance: item.distance_km.map(|km| format!("{km:.2} km")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RowText;
    use protocol::ResultItem;

    #[test]
    fn full_item_renders_every_field() {
        let item = ResultItem::new("Nearest River: Yamuna", "The Yamuna flows along Delhi", 0.92)
            .with_annotation("Near Delhi")
            .with_distance_km(3.2);

        let row = RowText::from_item(&item);
        assert_eq!(row.title, "Nearest River: Yamuna");
        assert_eq!(row.description, "The Yamuna flows along Delhi");
        assert_eq!(row.confidence, "92%");
        assert_eq!(row.annotation.as_deref(), Some("Near Delhi"));
        assert_eq!(row.distance.as_deref(), Some("3.20 km"));
    }

    #[test]
    fn missing_fields_render_defaults() {
        let row = RowText::from_item(&ResultItem::new("", "", 0.0));
        assert_eq!(row.title, "Untitled");
        assert_eq!(row.description, "");
        assert_eq!(row.confidence, "0%");
        assert_eq!(row.annotation, None);
        assert_eq!(row.distance, None);
    }

    #[test]
    fn confidence_rounds_to_nearest_percent() {
        let row = RowText::from_item(&ResultItem::new("t", "", 0.816));
        assert_eq!(row.confidence, "82%");
        let row = RowText::from_item(&ResultItem::new("t", "", 0.504));
        assert_eq!(row.confidence, "50%");
    }
}
