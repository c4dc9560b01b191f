use super::{EdgeContext, Traversable, TraversalError};
use crate::model::state::State;
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::parking::VehicleParking;
use std::sync::Arc;

/// parks (or, searching backwards, unparks) a bicycle or car inside a facility.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleParkingEdge {
    pub parking: Arc<VehicleParking>,
}

impl VehicleParkingEdge {
    pub fn new(parking: Arc<VehicleParking>) -> VehicleParkingEdge {
        VehicleParkingEdge { parking }
    }

    fn park(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Vec<State> {
        let request = s0.request();
        let mode = s0.current_mode();
        let parks = !s0.is_vehicle_parked()
            && ((request.mode.includes_biking() && mode == TraverseMode::Bicycle)
                || (request.mode.includes_driving() && mode == TraverseMode::Car));
        if !parks {
            return vec![];
        }
        let preferences = request.preferences().parking(mode);
        if !self.parking.has_spaces_available(
            mode,
            request.wheelchair,
            preferences.use_availability_information,
        ) {
            return vec![];
        }
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(None);
        editor.increment_weight(preferences.cost);
        editor.increment_time_in_seconds(preferences.time);
        editor.set_vehicle_parked(true, TraverseMode::Walk);
        editor.make_state().into_iter().collect()
    }

    fn unpark(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Vec<State> {
        if s0.current_mode() != TraverseMode::Walk || !s0.is_vehicle_parked() {
            return vec![];
        }
        let request = s0.request();
        let vehicle = if request.mode.includes_biking() {
            TraverseMode::Bicycle
        } else if request.mode.includes_driving() {
            TraverseMode::Car
        } else {
            return vec![];
        };
        let preferences = request.preferences().parking(vehicle);
        if !self.parking.has_spaces_available(
            vehicle,
            request.wheelchair,
            preferences.use_availability_information,
        ) {
            return vec![];
        }
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(None);
        editor.increment_weight(preferences.cost);
        editor.increment_time_in_seconds(preferences.time);
        editor.set_vehicle_parked(false, vehicle);
        editor.make_state().into_iter().collect()
    }
}

impl Traversable for VehicleParkingEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        if !s0.request().mode.includes_parking() {
            return Ok(vec![]);
        }
        if s0.request().arrive_by {
            Ok(self.unpark(ctx, s0))
        } else {
            Ok(self.park(ctx, s0))
        }
    }
}
