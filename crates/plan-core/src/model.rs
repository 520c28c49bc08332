//! Plan Model
//!
//! Fixed-shape records for locations, containers, plans and trips.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::index::ContainerIndex;
use crate::registry::ItemRegistry;

/// A place to visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    /// Video that suggested this place
    pub video_source: String,
}

impl Location {
    pub fn new(id: impl Into<String>, name: impl Into<String>, video_source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            video_source: video_source.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Backlog of saved places with no schedule
    Saved,
    /// One day of the schedule
    Day,
}

/// Ordered list of locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub title: String,
    pub kind: ContainerKind,
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl Container {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ContainerKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            locations: Vec::new(),
        }
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// All containers of one planning session.
///
/// Container ids are unique and every location is held by exactly one
/// container. Both hold from construction on; only [`Plan::move_item`]
/// mutates the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Container>", into = "Vec<Container>")]
pub struct Plan {
    pub(crate) containers: Vec<Container>,
}

impl Plan {
    /// Build a plan, rejecting duplicate container ids and duplicated locations
    pub fn new(containers: Vec<Container>) -> PlanResult<Self> {
        let mut container_ids = HashSet::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for container in &containers {
            if !container_ids.insert(container.id.as_str()) {
                return Err(PlanError::DuplicateContainer(container.id.clone()));
            }
            for loc in &container.locations {
                if let Some(first) = owners.insert(loc.id.as_str(), container.id.as_str()) {
                    return Err(PlanError::DuplicateItem {
                        item: loc.id.clone(),
                        first: first.to_string(),
                        second: container.id.clone(),
                    });
                }
            }
        }

        Ok(Self { containers })
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.iter().any(|c| c.id == id)
    }

    /// The backlog container, if the plan has one
    pub fn saved(&self) -> Option<&Container> {
        self.containers.iter().find(|c| c.kind == ContainerKind::Saved)
    }

    /// Day containers in schedule order
    pub fn days(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter().filter(|c| c.kind == ContainerKind::Day)
    }

    pub fn total_items(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    pub fn registry(&self) -> ItemRegistry<'_> {
        ItemRegistry::build(self)
    }

    pub fn index(&self) -> ContainerIndex<'_> {
        ContainerIndex::build(self)
    }

    pub(crate) fn position_in_vec(&self, container_id: &str) -> Option<usize> {
        self.containers.iter().position(|c| c.id == container_id)
    }
}

impl TryFrom<Vec<Container>> for Plan {
    type Error = PlanError;

    fn try_from(containers: Vec<Container>) -> PlanResult<Self> {
        Plan::new(containers)
    }
}

impl From<Plan> for Vec<Container> {
    fn from(plan: Plan) -> Self {
        plan.containers
    }
}

/// A trip and its itinerary plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    /// Free text such as "7 days"
    pub duration: String,
    pub cover_image: String,
    pub plan: Plan,
}

impl Trip {
    /// Number of locations across every container of the plan
    pub fn locations_count(&self) -> usize {
        self.plan.total_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: &str) -> Location {
        Location::new(id, format!("Place {}", id), "vlog")
    }

    #[test]
    fn test_new_rejects_duplicate_container() {
        let result = Plan::new(vec![
            Container::new("day-1", "Day 1", ContainerKind::Day),
            Container::new("day-1", "Day 1 again", ContainerKind::Day),
        ]);
        assert_eq!(result, Err(PlanError::DuplicateContainer("day-1".to_string())));
    }

    #[test]
    fn test_new_rejects_duplicate_item() {
        let result = Plan::new(vec![
            Container::new("saved", "Saved", ContainerKind::Saved).with_locations(vec![loc("a")]),
            Container::new("day-1", "Day 1", ContainerKind::Day).with_locations(vec![loc("a")]),
        ]);
        assert_eq!(
            result,
            Err(PlanError::DuplicateItem {
                item: "a".to_string(),
                first: "saved".to_string(),
                second: "day-1".to_string(),
            })
        );
    }

    #[test]
    fn test_saved_and_days() {
        let plan = Plan::new(vec![
            Container::new("saved", "Saved", ContainerKind::Saved).with_locations(vec![loc("a"), loc("b")]),
            Container::new("day-1", "Day 1", ContainerKind::Day).with_locations(vec![loc("c")]),
            Container::new("day-2", "Day 2", ContainerKind::Day),
        ])
        .unwrap();

        assert_eq!(plan.saved().map(|c| c.id.as_str()), Some("saved"));
        let days: Vec<_> = plan.days().map(|c| c.id.as_str()).collect();
        assert_eq!(days, vec!["day-1", "day-2"]);
        assert_eq!(plan.total_items(), 3);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"id": "saved", "title": "Saved", "kind": "saved",
             "locations": [{"id": "a", "name": "A", "video_source": "v"}]},
            {"id": "day-1", "title": "Day 1", "kind": "day",
             "locations": [{"id": "a", "name": "A", "video_source": "v"}]}
        ]"#;
        let result: Result<Plan, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_trip_locations_count_is_derived() {
        let json = r#"{
            "id": "trip1", "title": "Tokyo", "duration": "7 days", "cover_image": "tokyo.png",
            "plan": [
                {"id": "saved", "title": "Saved", "kind": "saved",
                 "locations": [{"id": "a", "name": "A", "video_source": "v"},
                               {"id": "b", "name": "B", "video_source": "v"}]},
                {"id": "day-1", "title": "Day 1", "kind": "day"}
            ]
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.locations_count(), 2);
        assert!(trip.plan.container("day-1").unwrap().is_empty());
    }
}
