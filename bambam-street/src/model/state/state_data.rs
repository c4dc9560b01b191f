use super::StreetSearchRequest;
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::rental::{RentalFormFactor, VehicleRentalState};
use std::collections::BTreeSet;

/// the part of a search state that rarely changes between edges. states share
/// it behind an `Arc` and a [`super::StateEditor`] copies it on first write.
#[derive(Clone, Debug, PartialEq)]
pub struct StateData {
    pub(crate) current_mode: TraverseMode,
    pub(crate) vehicle_rental_state: VehicleRentalState,
    /// `None` while the network is not (yet) known
    pub(crate) rental_network: Option<String>,
    pub(crate) rental_form_factor: Option<RentalFormFactor>,
    pub(crate) may_keep_rented_vehicle_at_destination: bool,
    pub(crate) vehicle_parked: bool,
    pub(crate) inside_no_rental_drop_off_area: bool,
    pub(crate) entered_no_thru_traffic_area: bool,
    /// networks whose drop-off ban covered the origin of a reverse search
    pub(crate) no_rental_drop_off_zones_at_start_of_reverse_search: BTreeSet<String>,
}

impl StateData {
    fn in_mode(mode: TraverseMode) -> StateData {
        StateData {
            current_mode: mode,
            vehicle_rental_state: VehicleRentalState::BeforeRenting,
            rental_network: None,
            rental_form_factor: None,
            may_keep_rented_vehicle_at_destination: false,
            vehicle_parked: false,
            inside_no_rental_drop_off_area: false,
            entered_no_thru_traffic_area: false,
            no_rental_drop_off_zones_at_start_of_reverse_search: BTreeSet::new(),
        }
    }

    /// the starting data for the request's base mode, ignoring rental and parking.
    pub fn initial_state_data(request: &StreetSearchRequest) -> StateData {
        StateData::in_mode(request.mode.base_traverse_mode())
    }

    /// every distinct situation a search may begin in. a reverse rental search
    /// cannot know how the traveler arrives, so it starts riding from a station,
    /// riding a floating vehicle and on foot after returning one.
    pub fn initial_state_datas(request: &StreetSearchRequest) -> Vec<StateData> {
        let mode = request.mode;
        if mode.includes_renting() {
            let form_factor = mode.rental_form_factor();
            let vehicle_mode = form_factor
                .map(|ff| ff.traverse_mode())
                .unwrap_or(TraverseMode::Bicycle);
            if request.arrive_by {
                let may_keep = request
                    .preferences
                    .rental(vehicle_mode)
                    .allow_arriving_in_rented_vehicle_at_destination;
                let station = StateData {
                    vehicle_rental_state: VehicleRentalState::RentingFromStation,
                    may_keep_rented_vehicle_at_destination: may_keep,
                    rental_form_factor: form_factor,
                    ..StateData::in_mode(vehicle_mode)
                };
                let floating = StateData {
                    vehicle_rental_state: VehicleRentalState::RentingFloating,
                    rental_form_factor: form_factor,
                    ..StateData::in_mode(vehicle_mode)
                };
                let on_foot = StateData {
                    vehicle_rental_state: VehicleRentalState::HaveRented,
                    rental_form_factor: form_factor,
                    ..StateData::in_mode(TraverseMode::Walk)
                };
                vec![station, floating, on_foot]
            } else {
                vec![StateData::in_mode(TraverseMode::Walk)]
            }
        } else if mode.includes_parking() {
            if request.arrive_by {
                vec![StateData {
                    vehicle_parked: true,
                    ..StateData::in_mode(TraverseMode::Walk)
                }]
            } else {
                vec![StateData::in_mode(mode.base_traverse_mode())]
            }
        } else {
            vec![StateData::initial_state_data(request)]
        }
    }

    pub fn current_mode(&self) -> TraverseMode {
        self.current_mode
    }

    pub fn vehicle_rental_state(&self) -> VehicleRentalState {
        self.vehicle_rental_state
    }

    pub fn rental_network(&self) -> Option<&str> {
        self.rental_network.as_deref()
    }

    pub fn rental_form_factor(&self) -> Option<RentalFormFactor> {
        self.rental_form_factor
    }

    pub fn no_rental_drop_off_zones_at_start_of_reverse_search(&self) -> &BTreeSet<String> {
        &self.no_rental_drop_off_zones_at_start_of_reverse_search
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bambam_street_core::model::mode::StreetMode;
    use bambam_street_core::model::preferences::RoutingPreferences;

    #[test]
    fn test_reverse_rental_starts_three_ways() {
        let request = StreetSearchRequest::new(StreetMode::ScooterRental, RoutingPreferences::default())
            .with_arrive_by(true);
        let datas = StateData::initial_state_datas(&request);
        let states: Vec<_> = datas.iter().map(|d| d.vehicle_rental_state).collect();
        assert_eq!(
            states,
            vec![
                VehicleRentalState::RentingFromStation,
                VehicleRentalState::RentingFloating,
                VehicleRentalState::HaveRented
            ]
        );
        assert!(datas.iter().all(|d| d.rental_form_factor == Some(RentalFormFactor::Scooter)));
        assert_eq!(datas[0].current_mode, TraverseMode::Scooter);
        assert_eq!(datas[2].current_mode, TraverseMode::Walk);
        assert!(!datas[0].may_keep_rented_vehicle_at_destination);
    }

    #[test]
    fn test_forward_rental_starts_on_foot() {
        let request = StreetSearchRequest::new(StreetMode::BikeRental, RoutingPreferences::default());
        let datas = StateData::initial_state_datas(&request);
        assert_eq!(datas.len(), 1);
        assert_eq!(datas[0].vehicle_rental_state, VehicleRentalState::BeforeRenting);
        assert_eq!(datas[0].current_mode, TraverseMode::Walk);
    }

    #[test]
    fn test_parking() {
        let forward = StreetSearchRequest::new(StreetMode::CarToPark, RoutingPreferences::default());
        let datas = StateData::initial_state_datas(&forward);
        assert_eq!(datas[0].current_mode, TraverseMode::Car);
        assert!(!datas[0].vehicle_parked);
        let reverse = forward.with_arrive_by(true);
        let datas = StateData::initial_state_datas(&reverse);
        assert_eq!(datas[0].current_mode, TraverseMode::Walk);
        assert!(datas[0].vehicle_parked);
    }
}
