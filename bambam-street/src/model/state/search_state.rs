use super::{StateData, StateEditor, StreetSearchRequest};
use crate::model::edge::TraversalError;
use crate::model::graph::{EdgeId, Graph, GraphError, VertexId};
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::rental::{RentalFormFactor, RentalStatus, VehicleRentalState};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use uom::si::f64::Time;
use uom::si::time::second;

/// a point in a search: where the traveler is, how they got there and at what cost.
/// states are immutable; successors are derived with a [`StateEditor`] and keep
/// a shared pointer to their predecessor.
#[derive(Clone, Debug)]
pub struct State {
    pub(crate) vertex: VertexId,
    pub(crate) back_edge: Option<EdgeId>,
    pub(crate) back_state: Option<Arc<State>>,
    pub(crate) back_mode: Option<TraverseMode>,
    pub(crate) back_walking_bike: bool,
    /// milliseconds since the unix epoch
    pub(crate) time_ms: i64,
    pub(crate) weight: f64,
    pub(crate) walk_distance: f64,
    pub(crate) state_data: Arc<StateData>,
    pub(crate) request: Arc<StreetSearchRequest>,
}

impl State {
    /// a search origin in the request's base mode.
    pub fn new(
        graph: &Graph,
        vertex: VertexId,
        request: Arc<StreetSearchRequest>,
    ) -> Result<State, GraphError> {
        let data = StateData::initial_state_data(&request);
        State::with_state_data(graph, vertex, request, data)
    }

    /// all origins of a search at the given vertex.
    pub fn initial_states(
        graph: &Graph,
        vertex: VertexId,
        request: Arc<StreetSearchRequest>,
    ) -> Result<Vec<Arc<State>>, GraphError> {
        StateData::initial_state_datas(&request)
            .into_iter()
            .map(|data| State::with_state_data(graph, vertex, request.clone(), data).map(Arc::new))
            .collect()
    }

    fn with_state_data(
        graph: &Graph,
        vertex: VertexId,
        request: Arc<StreetSearchRequest>,
        mut data: StateData,
    ) -> Result<State, GraphError> {
        let v = graph.vertex(vertex)?;
        if request.arrive_by {
            data.no_rental_drop_off_zones_at_start_of_reverse_search = v.rental_restricted_networks();
        }
        Ok(State {
            vertex,
            back_edge: None,
            back_state: None,
            back_mode: None,
            back_walking_bike: false,
            time_ms: request.start_time.timestamp_millis(),
            weight: 0.0,
            walk_distance: 0.0,
            state_data: Arc::new(data),
            request,
        })
    }

    pub fn edit(self: &Arc<State>, edge: &crate::model::graph::Edge) -> StateEditor {
        StateEditor::new(self, edge)
    }

    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn back_edge(&self) -> Option<EdgeId> {
        self.back_edge
    }

    pub fn back_state(&self) -> Option<&Arc<State>> {
        self.back_state.as_ref()
    }

    pub fn back_mode(&self) -> Option<TraverseMode> {
        self.back_mode
    }

    pub fn is_back_walking_bike(&self) -> bool {
        self.back_walking_bike
    }

    pub fn request(&self) -> &StreetSearchRequest {
        &self.request
    }

    pub fn state_data(&self) -> &Arc<StateData> {
        &self.state_data
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn walk_distance(&self) -> f64 {
        self.walk_distance
    }

    pub fn elapsed_time_milliseconds(&self) -> i64 {
        (self.time_ms - self.request.start_time.timestamp_millis()).abs()
    }

    /// elapsed whole seconds, rounded up.
    pub fn elapsed_time_seconds(&self) -> i64 {
        (self.elapsed_time_milliseconds() + 999) / 1000
    }

    pub fn elapsed_time(&self) -> Time {
        Time::new::<second>(self.elapsed_time_milliseconds() as f64 / 1000.0)
    }

    pub fn time_milliseconds(&self) -> i64 {
        self.time_ms
    }

    /// clock time in whole seconds, rounded towards the search origin.
    pub fn time_seconds(&self) -> i64 {
        if self.request.arrive_by {
            self.time_ms.div_euclid(1000)
        } else {
            (self.time_ms + 999).div_euclid(1000)
        }
    }

    pub fn time(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.time_ms).unwrap_or(self.request.start_time)
    }

    pub fn current_mode(&self) -> TraverseMode {
        self.state_data.current_mode
    }

    pub fn vehicle_rental_state(&self) -> VehicleRentalState {
        self.state_data.vehicle_rental_state
    }

    pub fn vehicle_rental_network(&self) -> Option<&str> {
        self.state_data.rental_network.as_deref()
    }

    pub fn vehicle_rental_form_factor(&self) -> Option<RentalFormFactor> {
        self.state_data.rental_form_factor
    }

    pub fn is_renting_vehicle(&self) -> bool {
        self.state_data.vehicle_rental_state.is_renting()
    }

    pub fn is_renting_floating_vehicle(&self) -> bool {
        self.state_data.vehicle_rental_state == VehicleRentalState::RentingFloating
    }

    pub fn is_renting_vehicle_from_station(&self) -> bool {
        self.state_data.vehicle_rental_state == VehicleRentalState::RentingFromStation
    }

    pub fn may_keep_rented_vehicle_at_destination(&self) -> bool {
        self.state_data.may_keep_rented_vehicle_at_destination
    }

    pub fn is_vehicle_parked(&self) -> bool {
        self.state_data.vehicle_parked
    }

    pub fn is_inside_no_rental_drop_off_area(&self) -> bool {
        self.state_data.inside_no_rental_drop_off_area
    }

    pub fn has_entered_no_thru_traffic_area(&self) -> bool {
        self.state_data.entered_no_thru_traffic_area
    }

    pub fn no_rental_drop_off_zones_at_start_of_reverse_search(&self) -> &BTreeSet<String> {
        &self.state_data.no_rental_drop_off_zones_at_start_of_reverse_search
    }

    /// whether a path may end in this state.
    pub fn is_final(&self) -> bool {
        let mode = self.request.mode;
        let renting = mode.includes_renting();
        let parking = mode.includes_parking();
        if self.request.arrive_by {
            (!renting || !self.is_renting_vehicle()) && (!parking || !self.is_vehicle_parked())
        } else {
            let rental_finished = !renting
                || match self.vehicle_rental_state() {
                    VehicleRentalState::BeforeRenting | VehicleRentalState::HaveRented => true,
                    VehicleRentalState::RentingFloating => !self.is_inside_no_rental_drop_off_area(),
                    VehicleRentalState::RentingFromStation => {
                        self.request
                            .preferences
                            .rental(self.current_mode())
                            .allow_arriving_in_rented_vehicle_at_destination
                            && self.may_keep_rented_vehicle_at_destination()
                    }
                };
            rental_finished && (!parking || self.is_vehicle_parked())
        }
    }

    /// this state and its predecessors, most recent first.
    pub fn path(self: &Arc<State>) -> impl Iterator<Item = &Arc<State>> {
        std::iter::successors(Some(self), |s| s.back_state.as_ref())
    }

    /// replays the path ending in this state in the opposite time direction, reusing
    /// each recorded weight, duration and walk distance instead of traversing again.
    ///
    /// the returned state sits at the vertex where the original path began.
    pub fn reverse(self: &Arc<State>, graph: &Graph) -> Result<Arc<State>, TraversalError> {
        let mut request = self.request.as_ref().clone();
        request.arrive_by = !request.arrive_by;
        request.start_time = self.time();
        let request = Arc::new(request);
        let mut current = Arc::new(State {
            vertex: self.vertex,
            back_edge: None,
            back_state: None,
            back_mode: None,
            back_walking_bike: false,
            time_ms: self.time_ms,
            weight: 0.0,
            walk_distance: 0.0,
            state_data: self.state_data.clone(),
            request,
        });
        let mut orig = self;
        while let (Some(edge_id), Some(prev)) = (orig.back_edge, orig.back_state.as_ref()) {
            let edge = graph.edge(edge_id)?;
            let mut editor = StateEditor::new(&current, edge);
            editor.increment_time_in_milliseconds((orig.time_ms - prev.time_ms).abs());
            editor.increment_weight(orig.weight - prev.weight);
            editor.increment_walk_distance(orig.walk_distance - prev.walk_distance);
            editor.set_back_mode(orig.back_mode);
            editor.set_back_walking_bike(orig.back_walking_bike);
            editor.set_state_data(prev.state_data.clone());
            current = editor
                .make_state()
                .map(Arc::new)
                .ok_or_else(|| TraversalError::InvalidPath(format!("cannot reverse across {edge_id}")))?;
            orig = prev;
        }
        Ok(current)
    }
}

impl RentalStatus for State {
    fn is_renting_vehicle(&self) -> bool {
        State::is_renting_vehicle(self)
    }

    fn rental_network(&self) -> Option<&str> {
        self.vehicle_rental_network()
    }
}
