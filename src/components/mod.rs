//! UI Components
//!
//! Reusable Leptos components.

mod drop_container;
mod itinerary_planner;
mod location_card;
mod planner_default_view;
mod trip_list;

pub use drop_container::DropContainer;
pub use itinerary_planner::ItineraryPlanner;
pub use location_card::LocationCard;
pub use planner_default_view::PlannerDefaultView;
pub use trip_list::TripList;
