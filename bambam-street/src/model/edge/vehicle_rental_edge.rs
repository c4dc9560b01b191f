use super::street_vehicle_rental_link::rental_place;
use super::{EdgeContext, Traversable, TraversalError};
use crate::model::graph::GraphError;
use crate::model::state::{State, StateEditor};
use bambam_street_core::model::preferences::VehicleRentalPreferences;
use bambam_street_core::model::rental::{RentalFormFactor, VehicleRentalPlace, VehicleRentalState};
use std::sync::Arc;

/// picks up or returns a rental vehicle of one form factor. a loop on the rental
/// place vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRentalEdge {
    pub form_factor: RentalFormFactor,
}

impl VehicleRentalEdge {
    pub fn new(form_factor: RentalFormFactor) -> VehicleRentalEdge {
        VehicleRentalEdge { form_factor }
    }

    fn can_pick_up(&self, place: &VehicleRentalPlace, realtime: bool) -> bool {
        !(realtime && !place.allow_pickup_now())
            && place
                .available_pickup_form_factors(realtime)
                .contains(&self.form_factor)
    }

    fn can_drop_off(&self, place: &VehicleRentalPlace, realtime: bool) -> bool {
        !(realtime && !place.allow_drop_off_now())
            && place
                .available_drop_off_form_factors(realtime)
                .contains(&self.form_factor)
    }

    /// forward search. returns whether a vehicle is picked up.
    fn rent_or_return(
        &self,
        s0: &State,
        editor: &mut StateEditor,
        place: &VehicleRentalPlace,
        preferences: &VehicleRentalPreferences,
    ) -> Option<bool> {
        let realtime = preferences.use_availability_information;
        match s0.vehicle_rental_state() {
            VehicleRentalState::BeforeRenting => {
                if !self.can_pick_up(place, realtime) {
                    return None;
                }
                if place.is_floating_vehicle() {
                    editor.begin_floating_vehicle_renting(self.form_factor, place.network());
                } else {
                    let may_keep = preferences.allow_arriving_in_rented_vehicle_at_destination
                        && place.is_arriving_in_rental_vehicle_at_destination_allowed();
                    editor.begin_vehicle_renting_at_station(
                        self.form_factor,
                        place.network(),
                        may_keep,
                    );
                }
                Some(true)
            }
            VehicleRentalState::HaveRented => None,
            VehicleRentalState::RentingFloating | VehicleRentalState::RentingFromStation => {
                if !compatible_network(s0, place) || !self.can_drop_off(place, realtime) {
                    return None;
                }
                editor.drop_off_rented_vehicle_at_station(self.form_factor, place.network());
                Some(false)
            }
        }
    }

    /// reverse search. returns whether the vehicle was picked up here.
    fn unrent_or_unreturn(
        &self,
        s0: &State,
        editor: &mut StateEditor,
        place: &VehicleRentalPlace,
        preferences: &VehicleRentalPreferences,
    ) -> Option<bool> {
        let realtime = preferences.use_availability_information;
        match s0.vehicle_rental_state() {
            VehicleRentalState::BeforeRenting => None,
            VehicleRentalState::HaveRented => {
                if !self.can_drop_off(place, realtime) {
                    return None;
                }
                editor.drop_off_rented_vehicle_at_station(self.form_factor, place.network());
                Some(false)
            }
            VehicleRentalState::RentingFloating => {
                if !self.can_pick_up(place, realtime)
                    || !place.is_floating_vehicle()
                    || s0
                        .no_rental_drop_off_zones_at_start_of_reverse_search()
                        .contains(place.network())
                    || !compatible_network(s0, place)
                {
                    return None;
                }
                editor.begin_floating_vehicle_renting(self.form_factor, place.network());
                Some(true)
            }
            VehicleRentalState::RentingFromStation => {
                if !self.can_pick_up(place, realtime)
                    || (s0.may_keep_rented_vehicle_at_destination()
                        && !place.is_arriving_in_rental_vehicle_at_destination_allowed())
                    || !compatible_network(s0, place)
                {
                    return None;
                }
                editor.begin_vehicle_renting_at_station(self.form_factor, place.network(), false);
                Some(true)
            }
        }
    }
}

/// a vehicle can only be returned to (or, backwards, taken from) its own network.
fn compatible_network(s0: &State, place: &VehicleRentalPlace) -> bool {
    s0.vehicle_rental_network()
        .map(|network| network == place.network())
        .unwrap_or(true)
}

impl Traversable for VehicleRentalEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let request = s0.request();
        let vehicle_mode = self.form_factor.traverse_mode();
        let requested = request
            .mode
            .rental_form_factor()
            .map(|ff| ff.traverse_mode());
        if requested != Some(vehicle_mode) {
            return Ok(vec![]);
        }
        let place = rental_place(ctx.from).ok_or_else(|| {
            GraphError::InvalidEdge(format!(
                "rental edge {} is not on a rental place",
                ctx.edge.id
            ))
        })?;
        let preferences = request.preferences().rental(vehicle_mode);
        if !preferences.allows_network(place.network()) {
            return Ok(vec![]);
        }

        let mut editor = s0.edit(ctx.edge);
        let picked_up = if request.arrive_by {
            self.unrent_or_unreturn(s0, &mut editor, place, preferences)
        } else {
            self.rent_or_return(s0, &mut editor, place, preferences)
        };
        let Some(picked_up) = picked_up else {
            return Ok(vec![]);
        };
        if picked_up {
            editor.increment_weight(preferences.pickup_cost);
            editor.increment_time_in_seconds(preferences.pickup_time);
        } else {
            editor.increment_weight(preferences.drop_off_cost);
            editor.increment_time_in_seconds(preferences.drop_off_time);
        }
        editor.set_back_mode(None);
        log::debug!(
            "{} {} at {} on network {}",
            if picked_up { "pickup" } else { "drop-off" },
            self.form_factor,
            place.id(),
            place.network()
        );
        Ok(editor.make_state().into_iter().collect())
    }
}
