#![forbid(unsafe_code)]

use crate::Error;
use crate::model::ServiceId;
use std::collections::HashMap;

/// Services every dashboard session is seeded with, in display order.
pub const SERVICES: [&str; 7] = [
    "auth-service",
    "payment-gateway",
    "user-profile-api",
    "inventory-manager",
    "notification-engine",
    "search-index-worker",
    "order-processor",
];

/// Ordered, non-empty set of service names whose ids do not collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen: HashMap<ServiceId, &str> = HashMap::with_capacity(names.len());
        for name in &names {
            let id = ServiceId::from_name(name);
            if let Some(first) = seen.get(&id) {
                return Err(Error::IdCollision {
                    first: (*first).to_owned(),
                    second: name.clone(),
                    id: id.to_string(),
                });
            }
            seen.insert(id, name);
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true for a catalog built through `new` or `default`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            names: SERVICES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::default();
        assert_eq!(Catalog::new(SERVICES).unwrap(), builtin);
        assert_eq!(builtin.len(), 7);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyCatalog));
    }

    #[test]
    fn colliding_slugs_are_rejected() {
        let err = Catalog::new(["Auth Service", "auth-service"]).unwrap_err();
        match err {
            Error::IdCollision { first, second, id } => {
                assert_eq!(first, "Auth Service");
                assert_eq!(second, "auth-service");
                assert_eq!(id, "auth-service");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
