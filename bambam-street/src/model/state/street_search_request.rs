use crate::model::intersection::{self, IntersectionTraversalCalculator};
use bambam_street_core::model::mode::StreetMode;
use bambam_street_core::model::preferences::RoutingPreferences;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// the traveler's request as seen by edge traversal. shared by every state of a search.
#[derive(Clone, Debug)]
pub struct StreetSearchRequest {
    pub mode: StreetMode,
    /// search backwards in time from the destination
    pub arrive_by: bool,
    pub wheelchair: bool,
    pub start_time: DateTime<Utc>,
    pub preferences: Arc<RoutingPreferences>,
    pub intersection_traversal_calculator: Arc<dyn IntersectionTraversalCalculator>,
}

impl StreetSearchRequest {
    /// a depart-after request using the intersection model named in the preferences.
    pub fn new(mode: StreetMode, preferences: RoutingPreferences) -> StreetSearchRequest {
        let calculator = intersection::from_preferences(&preferences.street);
        StreetSearchRequest {
            mode,
            arrive_by: false,
            wheelchair: false,
            start_time: DateTime::<Utc>::UNIX_EPOCH,
            preferences: Arc::new(preferences),
            intersection_traversal_calculator: calculator,
        }
    }

    pub fn with_arrive_by(mut self, arrive_by: bool) -> StreetSearchRequest {
        self.arrive_by = arrive_by;
        self
    }

    pub fn with_wheelchair(mut self, wheelchair: bool) -> StreetSearchRequest {
        self.wheelchair = wheelchair;
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> StreetSearchRequest {
        self.start_time = start_time;
        self
    }

    pub fn with_intersection_traversal_calculator(
        mut self,
        calculator: Arc<dyn IntersectionTraversalCalculator>,
    ) -> StreetSearchRequest {
        self.intersection_traversal_calculator = calculator;
        self
    }

    pub fn preferences(&self) -> &RoutingPreferences {
        &self.preferences
    }
}
