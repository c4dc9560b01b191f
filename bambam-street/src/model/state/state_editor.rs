use super::{State, StateData};
use crate::model::graph::Edge;
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::rental::{RentalFormFactor, VehicleRentalState};
use std::collections::BTreeSet;
use std::sync::Arc;

/// builds a successor of a state across one edge. the shared [`StateData`] is
/// copied the first time a field of it changes and never again. the back mode
/// starts unset and is filled in by the edge being traversed.
///
/// increments must be non-negative and finite. any other increment marks the
/// editor defective and [`StateEditor::make_state`] then yields nothing.
#[derive(Debug)]
pub struct StateEditor {
    child: State,
    defective: bool,
}

impl StateEditor {
    pub fn new(parent: &Arc<State>, edge: &Edge) -> StateEditor {
        let mut child = parent.as_ref().clone();
        child.back_state = Some(parent.clone());
        child.back_edge = Some(edge.id);
        child.back_mode = None;
        child.back_walking_bike = false;
        child.vertex = if parent.request.arrive_by {
            edge.from
        } else {
            edge.to
        };
        StateEditor {
            child,
            defective: false,
        }
    }

    /// the finished successor, or `None` if an invalid increment was applied.
    pub fn make_state(self) -> Option<State> {
        if self.defective {
            return None;
        }
        Some(self.child)
    }

    pub fn is_defective(&self) -> bool {
        self.defective
    }

    fn arrive_by(&self) -> bool {
        self.child.request.arrive_by
    }

    fn data_mut(&mut self) -> &mut StateData {
        Arc::make_mut(&mut self.child.state_data)
    }

    pub(crate) fn set_state_data(&mut self, data: Arc<StateData>) {
        self.child.state_data = data;
    }

    fn reject(&mut self, what: &str, value: f64) {
        log::warn!(
            "invalid {what} increment {value} on edge {:?}, dropping state",
            self.child.back_edge
        );
        self.defective = true;
    }

    pub fn increment_weight(&mut self, weight: f64) {
        if !weight.is_finite() || weight < 0.0 {
            self.reject("weight", weight);
            return;
        }
        self.child.weight += weight;
    }

    /// advances the clock in the search direction: forwards for depart-after,
    /// backwards for arrive-by.
    pub fn increment_time_in_milliseconds(&mut self, milliseconds: i64) {
        if milliseconds < 0 {
            self.reject("time", milliseconds as f64);
            return;
        }
        if self.arrive_by() {
            self.child.time_ms -= milliseconds;
        } else {
            self.child.time_ms += milliseconds;
        }
    }

    pub fn increment_time_in_seconds(&mut self, seconds: f64) {
        if !seconds.is_finite() || seconds < 0.0 {
            self.reject("time", seconds);
            return;
        }
        self.increment_time_in_milliseconds((seconds * 1000.0).ceil() as i64);
    }

    pub fn increment_walk_distance(&mut self, meters: f64) {
        if !meters.is_finite() || meters < 0.0 {
            self.reject("walk distance", meters);
            return;
        }
        self.child.walk_distance += meters;
    }

    pub fn set_back_mode(&mut self, mode: Option<TraverseMode>) {
        self.child.back_mode = mode;
    }

    pub fn set_back_walking_bike(&mut self, walking_bike: bool) {
        self.child.back_walking_bike = walking_bike;
    }

    pub fn set_entered_no_through_traffic_area(&mut self) {
        self.data_mut().entered_no_thru_traffic_area = true;
    }

    pub fn enter_no_rental_drop_off_area(&mut self) {
        self.data_mut().inside_no_rental_drop_off_area = true;
    }

    pub fn leave_no_rental_drop_off_area(&mut self) {
        self.data_mut().inside_no_rental_drop_off_area = false;
    }

    /// forget the drop-off bans of a reverse search origin once the search has
    /// committed to a specific network.
    pub fn reset_started_in_no_drop_off_zone(&mut self) {
        self.data_mut().no_rental_drop_off_zones_at_start_of_reverse_search = BTreeSet::new();
    }

    pub fn set_vehicle_parked(&mut self, parked: bool, mode: TraverseMode) {
        let data = self.data_mut();
        data.vehicle_parked = parked;
        data.current_mode = mode;
    }

    fn set_not_renting(&mut self, rental_state: VehicleRentalState) {
        let data = self.data_mut();
        data.vehicle_rental_state = rental_state;
        data.current_mode = TraverseMode::Walk;
        data.rental_network = None;
        data.rental_form_factor = None;
    }

    fn set_renting(
        &mut self,
        rental_state: VehicleRentalState,
        form_factor: Option<RentalFormFactor>,
        network: Option<&str>,
    ) {
        let data = self.data_mut();
        data.vehicle_rental_state = rental_state;
        data.current_mode = form_factor
            .map(|ff| ff.traverse_mode())
            .unwrap_or(TraverseMode::Bicycle);
        data.rental_network = network.map(String::from);
        data.rental_form_factor = form_factor;
    }

    /// picks up a free-floating vehicle. in a reverse search this undoes the
    /// rental, so the traveler is on foot before it.
    pub fn begin_floating_vehicle_renting(&mut self, form_factor: RentalFormFactor, network: &str) {
        if self.arrive_by() {
            self.set_not_renting(VehicleRentalState::BeforeRenting);
            let data = self.data_mut();
            data.may_keep_rented_vehicle_at_destination = false;
            data.inside_no_rental_drop_off_area = false;
        } else {
            self.set_renting(
                VehicleRentalState::RentingFloating,
                Some(form_factor),
                Some(network),
            );
        }
    }

    pub fn begin_vehicle_renting_at_station(
        &mut self,
        form_factor: RentalFormFactor,
        network: &str,
        may_keep_at_destination: bool,
    ) {
        self.data_mut().may_keep_rented_vehicle_at_destination = may_keep_at_destination;
        if self.arrive_by() {
            self.set_not_renting(VehicleRentalState::BeforeRenting);
            self.child.back_walking_bike = false;
        } else {
            self.set_renting(
                VehicleRentalState::RentingFromStation,
                Some(form_factor),
                Some(network),
            );
        }
    }

    /// leaves a floating vehicle on the street. in a reverse search the traveler
    /// was riding it before, on the given network when known.
    pub fn drop_floating_vehicle(
        &mut self,
        form_factor: Option<RentalFormFactor>,
        network: Option<&str>,
    ) {
        self.data_mut().may_keep_rented_vehicle_at_destination = false;
        if self.arrive_by() {
            self.set_renting(VehicleRentalState::RentingFloating, form_factor, network);
        } else {
            self.set_not_renting(VehicleRentalState::HaveRented);
            self.child.back_walking_bike = false;
        }
    }

    pub fn drop_off_rented_vehicle_at_station(&mut self, form_factor: RentalFormFactor, network: &str) {
        self.data_mut().may_keep_rented_vehicle_at_destination = false;
        if self.arrive_by() {
            self.set_renting(
                VehicleRentalState::RentingFromStation,
                Some(form_factor),
                Some(network),
            );
        } else {
            self.set_not_renting(VehicleRentalState::HaveRented);
            self.child.back_walking_bike = false;
        }
    }
}
