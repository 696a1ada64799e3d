//! Query strings of the image endpoints.
//!
//! The query string is extracted as raw key/value pairs and checked against
//! the enumerated literals afterwards, so a bad value produces a field-level
//! 422 instead of a generic extractor rejection. A repeated key keeps its last
//! value.

use crate::domain::model::{ColorVariant, HubPack};
use crate::utils::error::Result;

/// Raw query pairs in the order they appear in the URL.
pub type QueryPairs = Vec<(String, String)>;

fn last_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

#[derive(Debug, Default)]
pub struct HubQuery {
    pub pack: Option<String>,
    pub color: Option<String>,
}

impl From<QueryPairs> for HubQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            pack: last_value(&pairs, "pack"),
            color: last_value(&pairs, "color"),
        }
    }
}

impl HubQuery {
    pub fn pack(&self) -> Result<HubPack> {
        Ok(self
            .pack
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or_default())
    }

    pub fn color(&self) -> Result<ColorVariant> {
        parse_color(self.color.as_deref())
    }
}

#[derive(Debug, Default)]
pub struct MiniQuery {
    pub color: Option<String>,
}

impl From<QueryPairs> for MiniQuery {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            color: last_value(&pairs, "color"),
        }
    }
}

impl MiniQuery {
    pub fn color(&self) -> Result<ColorVariant> {
        parse_color(self.color.as_deref())
    }
}

fn parse_color(raw: Option<&str>) -> Result<ColorVariant> {
    Ok(raw.map(str::parse).transpose()?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    #[test]
    fn test_missing_values_take_defaults() {
        let query = HubQuery::default();
        assert_eq!(query.pack().unwrap(), HubPack::Three);
        assert_eq!(query.color().unwrap(), ColorVariant::Grey);
        assert_eq!(MiniQuery::default().color().unwrap(), ColorVariant::Grey);
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let pairs: QueryPairs = vec![
            ("pack".to_string(), "3".to_string()),
            ("color".to_string(), "grey".to_string()),
            ("pack".to_string(), "4".to_string()),
            ("extra".to_string(), "ignored".to_string()),
        ];
        let query = HubQuery::from(pairs);
        assert_eq!(query.pack().unwrap(), HubPack::Four);
        assert_eq!(query.color().unwrap(), ColorVariant::Grey);

        let mini = MiniQuery::from(vec![
            ("color".to_string(), "grey".to_string()),
            ("color".to_string(), "blue".to_string()),
        ]);
        assert_eq!(mini.color().unwrap(), ColorVariant::Blue);
    }

    #[test]
    fn test_out_of_domain_values_name_their_field() {
        let query = HubQuery {
            pack: Some("5".to_string()),
            color: Some("purple".to_string()),
        };

        match query.pack() {
            Err(AppError::InvalidQueryParameter { field, value, .. }) => {
                assert_eq!(field, "pack");
                assert_eq!(value, "5");
            }
            other => panic!("unexpected: {:?}", other),
        }
        match query.color() {
            Err(AppError::InvalidQueryParameter { field, .. }) => assert_eq!(field, "color"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
