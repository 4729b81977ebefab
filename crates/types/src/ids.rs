//! Newtype wrappers for semantic IDs and URIs
//!
//! These types keep template identifiers, element identifiers and asset URIs
//! from being mixed up, even though all of them travel as plain strings in
//! template files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(value: impl Into<Arc<str>>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_newtype!(
    /// Identifier of a template in a catalog.
    TemplateId
);

string_newtype!(
    /// Identifier of an element, unique within its template.
    ElementId
);

string_newtype!(
    /// Location of an image asset (URL or data URI).
    AssetUri
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_creation() {
        let id1 = ElementId::new("logo");
        let id2 = ElementId::from("logo");
        let id3 = ElementId::from(String::from("logo"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "logo");
    }

    #[test]
    fn test_ids_are_transparent_in_json() {
        let id = TemplateId::new("summer-sale");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"summer-sale\"");

        let uri: AssetUri = serde_json::from_str("\"https://cdn.example.com/a.png\"").unwrap();
        assert_eq!(uri.as_str(), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_hash_map_usage() {
        use std::collections::HashMap;

        let mut seen = HashMap::new();
        seen.insert(ElementId::new("headline"), 1);
        seen.insert(ElementId::new("cta"), 2);

        assert_eq!(seen.get(&ElementId::new("cta")), Some(&2));
    }
}
