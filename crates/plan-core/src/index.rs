//! Container Index
//!
//! Resolves which container holds a location, and where.

use std::collections::HashMap;

use crate::model::{Location, Plan};

#[derive(Debug)]
pub struct ContainerIndex<'a> {
    plan: &'a Plan,
    /// location id -> (container id, index in container)
    positions: HashMap<&'a str, (&'a str, usize)>,
}

impl<'a> ContainerIndex<'a> {
    pub fn build(plan: &'a Plan) -> Self {
        let mut positions = HashMap::with_capacity(plan.total_items());
        for container in plan.containers() {
            for (i, loc) in container.locations.iter().enumerate() {
                positions.insert(loc.id.as_str(), (container.id.as_str(), i));
            }
        }
        Self { plan, positions }
    }

    /// Owning container of a location.
    ///
    /// `None` means the location is in no container, which a valid plan
    /// never produces for ids taken from it.
    pub fn container_of(&self, item_id: &str) -> Option<&'a str> {
        self.positions.get(item_id).map(|(container, _)| *container)
    }

    /// Owning container and index of a location
    pub fn position_of(&self, item_id: &str) -> Option<(&'a str, usize)> {
        self.positions.get(item_id).copied()
    }

    /// Ordered locations of a container; empty for empty or unknown containers
    pub fn items_in(&self, container_id: &str) -> &'a [Location] {
        self.plan
            .container(container_id)
            .map(|c| c.locations.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_container(&self, container_id: &str) -> bool {
        self.plan.has_container(container_id)
    }
}
