//! Read-only catalog of static resources keyed by URI.

use std::collections::HashMap;

use tooldesk_types::{Resource, ResourceContents};

use crate::error::DispatchError;

/// Static resources, populated at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
    index: HashMap<String, usize>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidUri` unless the URI has the form
    /// `scheme://rest`, and `DispatchError::DuplicateResource` if it is
    /// already registered.
    pub fn register(&mut self, resource: Resource) -> Result<(), DispatchError> {
        let well_formed = resource
            .uri
            .split_once("://")
            .is_some_and(|(scheme, rest)| !scheme.is_empty() && !rest.is_empty());
        if !well_formed {
            return Err(DispatchError::InvalidUri { uri: resource.uri });
        }
        if self.index.contains_key(&resource.uri) {
            return Err(DispatchError::DuplicateResource { uri: resource.uri });
        }
        tracing::debug!(uri = %resource.uri, "registering resource");
        self.index.insert(resource.uri.clone(), self.resources.len());
        self.resources.push(resource);
        Ok(())
    }

    /// Reads a resource by URI.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownResource` if the URI is not registered.
    pub fn read(&self, uri: &str) -> Result<ResourceContents, DispatchError> {
        self.index
            .get(uri)
            .map(|&i| self.resources[i].contents())
            .ok_or_else(|| DispatchError::UnknownResource {
                uri: uri.to_string(),
            })
    }

    /// Registered resources in registration order.
    pub fn list(&self) -> &[Resource] {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(uri: &str) -> Resource {
        Resource {
            uri: uri.into(),
            name: "note".into(),
            description: None,
            mime_type: "text/plain".into(),
            text: "remember".into(),
        }
    }

    #[test]
    fn read_registered_resource() {
        let mut cat = ResourceCatalog::new();
        cat.register(note("memo://one")).expect("register");
        let c = cat.read("memo://one").expect("read");
        assert_eq!(c.text, "remember");
        assert_eq!(c.mime_type, "text/plain");
    }

    #[test]
    fn unknown_uri_is_lookup_error() {
        let cat = ResourceCatalog::new();
        assert!(matches!(
            cat.read("memo://none"),
            Err(DispatchError::UnknownResource { .. })
        ));
    }

    #[test]
    fn duplicate_uri_rejected() {
        let mut cat = ResourceCatalog::new();
        cat.register(note("memo://one")).expect("register");
        assert!(matches!(
            cat.register(note("memo://one")),
            Err(DispatchError::DuplicateResource { .. })
        ));
        assert_eq!(cat.list().len(), 1);
    }

    #[test]
    fn malformed_uri_rejected() {
        let mut cat = ResourceCatalog::new();
        for uri in ["", "no-scheme", "://empty-scheme", "memo://"] {
            assert!(
                matches!(cat.register(note(uri)), Err(DispatchError::InvalidUri { .. })),
                "{uri}"
            );
        }
    }
}
