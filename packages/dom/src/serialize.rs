//! JSON surface for the page document.
//!
//! The component shape maps directly to the JSON the hosting application
//! stores; nothing here touches a file or the network.

use crate::error::DomError;
use crate::model::Page;
use serde::{Deserialize, Serialize};

/// The full page/component forest of one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub pages: Vec<Page>,
}

impl PageDocument {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn to_json(&self) -> Result<String, DomError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document. A site always has at least one page, so an empty
    /// page list is rejected.
    pub fn from_json(source: &str) -> Result<Self, DomError> {
        let document: Self = serde_json::from_str(source)?;
        if document.pages.is_empty() {
            return Err(DomError::EmptyDocument);
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::IdGenerator;
    use crate::registry::default_component;

    fn sample_document() -> PageDocument {
        let mut ids = IdGenerator::new("sample");
        let mut section = default_component("Section", &mut ids);
        section
            .children
            .as_mut()
            .unwrap()
            .push(default_component("Heading", &mut ids));

        PageDocument::new(vec![Page {
            id: ids.new_id(),
            name: "Home".to_string(),
            slug: "home".to_string(),
            components: vec![section, default_component("Paragraph", &mut ids)],
        }])
    }

    #[test]
    fn test_round_trip() {
        let document = sample_document();
        let json = document.to_json().unwrap();
        let parsed = PageDocument::from_json(&json).unwrap();

        assert_eq!(document, parsed);
    }

    #[test]
    fn test_empty_document_rejected() {
        let result = PageDocument::from_json(r#"{ "pages": [] }"#);
        assert!(matches!(result, Err(DomError::EmptyDocument)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PageDocument::from_json("{").is_err());
    }

    #[test]
    fn test_component_type_field_name() {
        let json = sample_document().to_json().unwrap();

        // The wire shape uses "type", not "kind"
        assert!(json.contains("\"type\": \"section\""));
        assert!(!json.contains("\"kind\""));
    }
}
