//! Item Registry
//!
//! Flat id -> location lookup over every container of a plan.

use std::collections::HashMap;

use crate::model::{Location, Plan};

/// Borrowed projection of a plan's locations, keyed by id
#[derive(Debug)]
pub struct ItemRegistry<'a> {
    by_id: HashMap<&'a str, &'a Location>,
}

impl<'a> ItemRegistry<'a> {
    pub fn build(plan: &'a Plan) -> Self {
        let by_id = plan
            .containers()
            .iter()
            .flat_map(|c| c.locations.iter())
            .map(|loc| (loc.id.as_str(), loc))
            .collect();
        Self { by_id }
    }

    pub fn lookup(&self, id: &str) -> Option<&'a Location> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Container, ContainerKind, Location, Plan};

    #[test]
    fn test_lookup_across_containers() {
        let plan = Plan::new(vec![
            Container::new("saved", "Saved", ContainerKind::Saved)
                .with_locations(vec![Location::new("loc1", "Ghibli Museum", "Tokyo vlog")]),
            Container::new("day-1", "Day 1", ContainerKind::Day)
                .with_locations(vec![Location::new("loc3", "Shibuya Crossing", "Tokyo vlog")]),
        ])
        .unwrap();

        let registry = plan.registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("loc3").map(|l| l.name.as_str()), Some("Shibuya Crossing"));
        assert!(registry.lookup("loc9").is_none());
        assert!(!registry.contains("saved"));
    }
}
