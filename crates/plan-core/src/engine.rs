//! Move Engine
//!
//! Reorders a location inside its container or transfers it to another one.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::model::Plan;

/// A fully resolved move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source_container: String,
    pub target_container: String,
    pub source_index: usize,
    pub target_index: usize,
}

/// What a move did to the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Same container and same index
    Unchanged,
    Reordered {
        item_id: String,
        container: String,
        from: usize,
        to: usize,
    },
    Transferred {
        item_id: String,
        from_container: String,
        to_container: String,
        from: usize,
        /// Final index in the target container
        to: usize,
    },
}

impl MoveOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, MoveOutcome::Unchanged)
    }
}

impl Plan {
    /// Move the location at `source_index` of `source_container` to
    /// `target_index` of `target_container`.
    ///
    /// Within one container the location is removed and reinserted at
    /// `target_index`, clamped to the end of the list. Across containers an
    /// index that is not a valid position in the target list appends.
    /// Errors leave the plan untouched.
    pub fn move_item(
        &mut self,
        source_container: &str,
        target_container: &str,
        source_index: usize,
        target_index: usize,
    ) -> PlanResult<MoveOutcome> {
        let si = self
            .position_in_vec(source_container)
            .ok_or_else(|| PlanError::UnknownContainer(source_container.to_string()))?;
        let ti = self
            .position_in_vec(target_container)
            .ok_or_else(|| PlanError::UnknownContainer(target_container.to_string()))?;

        let len = self.containers[si].len();
        if source_index >= len {
            return Err(PlanError::SourceIndexOutOfRange {
                container: source_container.to_string(),
                index: source_index,
                len,
            });
        }

        if si == ti {
            if source_index == target_index {
                return Ok(MoveOutcome::Unchanged);
            }
            let list = &mut self.containers[si].locations;
            let moved = list.remove(source_index);
            let to = target_index.min(list.len());
            let item_id = moved.id.clone();
            list.insert(to, moved);

            debug!("[MOVE] reorder {} in {}: {} -> {}", item_id, source_container, source_index, to);
            if to == source_index {
                return Ok(MoveOutcome::Unchanged);
            }
            return Ok(MoveOutcome::Reordered {
                item_id,
                container: source_container.to_string(),
                from: source_index,
                to,
            });
        }

        let moved = self.containers[si].locations.remove(source_index);
        let item_id = moved.id.clone();
        let target = &mut self.containers[ti].locations;
        let to = if target_index < target.len() {
            target.insert(target_index, moved);
            target_index
        } else {
            target.push(moved);
            target.len() - 1
        };

        debug!(
            "[MOVE] transfer {} from {}[{}] to {}[{}]",
            item_id, source_container, source_index, target_container, to
        );
        Ok(MoveOutcome::Transferred {
            item_id,
            from_container: source_container.to_string(),
            to_container: target_container.to_string(),
            from: source_index,
            to,
        })
    }

    pub fn apply(&mut self, request: &MoveRequest) -> PlanResult<MoveOutcome> {
        self.move_item(
            &request.source_container,
            &request.target_container,
            request.source_index,
            request.target_index,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, ContainerKind, Location};

    fn plan(containers: &[(&str, &[&str])]) -> Plan {
        Plan::new(
            containers
                .iter()
                .map(|(id, items)| {
                    let kind = if *id == "saved" { ContainerKind::Saved } else { ContainerKind::Day };
                    Container::new(*id, *id, kind).with_locations(
                        items.iter().map(|i| Location::new(*i, i.to_uppercase(), "vlog")).collect(),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    fn ids(plan: &Plan, container: &str) -> Vec<String> {
        plan.container(container)
            .unwrap()
            .locations
            .iter()
            .map(|l| l.id.clone())
            .collect()
    }

    #[test]
    fn test_reorder_forward() {
        let mut p = plan(&[("c", &["a", "b", "c", "d"])]);
        let outcome = p.move_item("c", "c", 0, 2).unwrap();
        assert_eq!(ids(&p, "c"), vec!["b", "c", "a", "d"]);
        assert_eq!(
            outcome,
            MoveOutcome::Reordered { item_id: "a".into(), container: "c".into(), from: 0, to: 2 }
        );
    }

    #[test]
    fn test_reorder_backward() {
        let mut p = plan(&[("c", &["a", "b", "c", "d"])]);
        p.move_item("c", "c", 3, 1).unwrap();
        assert_eq!(ids(&p, "c"), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut p = plan(&[("c", &["a", "b", "c"])]);
        let before = p.clone();
        assert_eq!(p.move_item("c", "c", 1, 1).unwrap(), MoveOutcome::Unchanged);
        assert_eq!(p, before);
    }

    #[test]
    fn test_reorder_past_end_moves_to_end() {
        let mut p = plan(&[("c", &["a", "b", "c"])]);
        p.move_item("c", "c", 0, 3).unwrap();
        assert_eq!(ids(&p, "c"), vec!["b", "c", "a"]);

        p.move_item("c", "c", 0, 42).unwrap();
        assert_eq!(ids(&p, "c"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_last_to_end_is_unchanged() {
        let mut p = plan(&[("c", &["a", "b", "c"])]);
        assert_eq!(p.move_item("c", "c", 2, 3).unwrap(), MoveOutcome::Unchanged);
        assert_eq!(ids(&p, "c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_transfer_inserts_before_target() {
        let mut p = plan(&[("src", &["a", "b"]), ("dst", &["x", "y"])]);
        let outcome = p.move_item("src", "dst", 0, 1).unwrap();
        assert_eq!(ids(&p, "src"), vec!["b"]);
        assert_eq!(ids(&p, "dst"), vec!["x", "a", "y"]);
        assert_eq!(
            outcome,
            MoveOutcome::Transferred {
                item_id: "a".into(),
                from_container: "src".into(),
                to_container: "dst".into(),
                from: 0,
                to: 1,
            }
        );
    }

    #[test]
    fn test_transfer_out_of_range_appends() {
        let mut p = plan(&[("src", &["a", "b"]), ("dst", &["x", "y"])]);
        p.move_item("src", "dst", 1, 2).unwrap();
        assert_eq!(ids(&p, "dst"), vec!["x", "y", "b"]);

        p.move_item("src", "dst", 0, usize::MAX).unwrap();
        assert_eq!(ids(&p, "dst"), vec!["x", "y", "b", "a"]);
        assert!(ids(&p, "src").is_empty());
    }

    #[test]
    fn test_transfer_into_empty_container() {
        let mut p = plan(&[("saved", &["a", "b", "c"]), ("day1", &[])]);
        p.move_item("saved", "day1", 1, 0).unwrap();
        assert_eq!(ids(&p, "saved"), vec!["a", "c"]);
        assert_eq!(ids(&p, "day1"), vec!["b"]);
    }

    #[test]
    fn test_unknown_container_is_rejected_without_mutation() {
        let mut p = plan(&[("src", &["a"]), ("dst", &[])]);
        let before = p.clone();
        assert_eq!(
            p.move_item("src", "nowhere", 0, 0),
            Err(PlanError::UnknownContainer("nowhere".into()))
        );
        assert_eq!(
            p.move_item("nowhere", "dst", 0, 0),
            Err(PlanError::UnknownContainer("nowhere".into()))
        );
        assert_eq!(p, before);
    }

    #[test]
    fn test_source_index_out_of_range() {
        let mut p = plan(&[("src", &["a"]), ("dst", &[])]);
        let before = p.clone();
        assert_eq!(
            p.move_item("src", "dst", 1, 0),
            Err(PlanError::SourceIndexOutOfRange { container: "src".into(), index: 1, len: 1 })
        );
        assert_eq!(p, before);
    }

    #[test]
    fn test_apply_request() {
        let mut p = plan(&[("src", &["a", "b"]), ("dst", &["x"])]);
        let request = MoveRequest {
            source_container: "src".into(),
            target_container: "dst".into(),
            source_index: 1,
            target_index: 0,
        };
        assert!(p.apply(&request).unwrap().is_change());
        assert_eq!(ids(&p, "dst"), vec!["b", "x"]);
    }
}
