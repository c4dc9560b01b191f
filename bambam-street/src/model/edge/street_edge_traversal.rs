use super::{EdgeContext, StreetEdge, Traversable, TraversalError};
use crate::model::state::{State, StateEditor};
use bambam_street_core::model::cost::wheelchair_reluctance;
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::preferences::{RoutingPreferences, VehicleRoutingOptimizeType};
use bambam_street_core::model::rental::VehicleRentalState;
use std::sync::Arc;

/// streets at or below this bicycle safety factor are dedicated cycling infrastructure
const SAFEST_STREETS_SAFETY_FACTOR: f64 = 0.1;
/// weight multiplier for dedicated cycling infrastructure under safest-streets routing
const SAFEST_STREETS_BONUS: f64 = 0.66;

impl Traversable for StreetEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let request = s0.request();
        let renting = request.mode.includes_renting();
        let arrive_by_rental = renting && request.arrive_by;

        if arrive_by_rental && ctx.to.rental_traversal_banned(s0.as_ref()) {
            return Ok(vec![]);
        }
        if arrive_by_rental && starts_walking_in_no_drop_off_zone_and_exits_it(ctx, s0) {
            return self.split_states_exiting_no_drop_off_zone(ctx, s0);
        }

        let leaves_restricted_zone =
            arrive_by_rental && leaves_zone_with_rental_restrictions_having_rented(ctx, s0);
        let editor = if (renting && ctx.to.rental_traversal_banned(s0.as_ref()))
            || leaves_restricted_zone
        {
            // the vehicle stays behind and the traveler continues on foot
            self.do_traverse(ctx, s0, TraverseMode::Walk, false)?
                .map(|mut editor| {
                    editor.drop_floating_vehicle(
                        s0.vehicle_rental_form_factor(),
                        s0.vehicle_rental_network(),
                    );
                    editor
                })
        } else if s0.current_mode() == TraverseMode::Bicycle {
            if self.can_traverse(TraverseMode::Bicycle) {
                self.do_traverse(ctx, s0, TraverseMode::Bicycle, false)?
            } else if self.can_traverse(TraverseMode::Walk) {
                self.do_traverse(ctx, s0, TraverseMode::Walk, true)?
            } else {
                None
            }
        } else if self.can_traverse(s0.current_mode()) {
            self.do_traverse(ctx, s0, s0.current_mode(), false)?
        } else {
            None
        };

        let state = match editor.and_then(|e| e.make_state()) {
            Some(state) => state,
            None => return Ok(vec![]),
        };

        if leaves_restricted_zone {
            let walk = self
                .do_traverse(ctx, s0, TraverseMode::Walk, false)?
                .and_then(|e| e.make_state());
            return Ok(walk.into_iter().chain(std::iter::once(state)).collect());
        }

        let entering_no_drop_off_zone = state.is_renting_vehicle()
            && !ctx.from.rental_drop_off_banned(s0.as_ref())
            && ctx.to.rental_drop_off_banned(s0.as_ref());
        if entering_no_drop_off_zone {
            if let Some(mut fork) = self.do_traverse(ctx, s0, TraverseMode::Walk, false)? {
                fork.drop_floating_vehicle(
                    state.vehicle_rental_form_factor(),
                    state.vehicle_rental_network(),
                );
                fork.leave_no_rental_drop_off_area();
                let fork = fork.make_state();
                return Ok(fork.into_iter().chain(std::iter::once(state)).collect());
            }
        }

        Ok(vec![state])
    }
}

/// a reverse search that began on foot inside a no-drop-off zone reaches its
/// border: the vehicle may have been left just outside.
fn starts_walking_in_no_drop_off_zone_and_exits_it(ctx: &EdgeContext, s0: &State) -> bool {
    s0.current_mode() == TraverseMode::Walk
        && !s0
            .no_rental_drop_off_zones_at_start_of_reverse_search()
            .is_empty()
        && ctx.from.rental_restricted_networks().is_empty()
        && !ctx.to.rental_restricted_networks().is_empty()
}

fn leaves_zone_with_rental_restrictions_having_rented(ctx: &EdgeContext, s0: &State) -> bool {
    s0.vehicle_rental_state() == VehicleRentalState::HaveRented
        && !ctx.from.rental_restrictions().has_restrictions()
        && ctx.to.rental_restrictions().has_restrictions()
}

impl StreetEdge {
    /// one walking state that stays on foot, then one renting state per network
    /// banning drop-off at the to-vertex, then a renting state of unknown network.
    fn split_states_exiting_no_drop_off_zone(
        &self,
        ctx: &EdgeContext,
        s0: &Arc<State>,
    ) -> Result<Vec<State>, TraversalError> {
        let request = s0.request();
        let preferences = request.preferences();
        let form_factor = s0
            .vehicle_rental_form_factor()
            .or(request.mode.rental_form_factor());

        let mut states: Vec<State> = self
            .do_traverse(ctx, s0, TraverseMode::Walk, false)?
            .and_then(|e| e.make_state())
            .into_iter()
            .collect();

        let mut renting = vec![];
        for network in ctx.to.rental_restricted_networks() {
            let Some(mut editor) = self.do_traverse(ctx, s0, TraverseMode::Walk, false)? else {
                continue;
            };
            editor.drop_floating_vehicle(form_factor, Some(&network));
            editor.reset_started_in_no_drop_off_zone();
            if let Some(state) = editor.make_state() {
                if preferences
                    .rental(state.current_mode())
                    .allows_network(&network)
                {
                    renting.push(state);
                }
            }
        }
        if !renting.is_empty() {
            if let Some(mut editor) = self.do_traverse(ctx, s0, TraverseMode::Walk, false)? {
                editor.drop_floating_vehicle(form_factor, None);
                renting.extend(editor.make_state());
            }
        }
        states.extend(renting);
        Ok(states)
    }

    /// the costs of moving along this street in one mode, or `None` if the move is
    /// not allowed (u-turn, turn restriction, leaving a no-thru-traffic area).
    fn do_traverse(
        &self,
        ctx: &EdgeContext,
        s0: &Arc<State>,
        mode: TraverseMode,
        walking_bike: bool,
    ) -> Result<Option<StateEditor>, TraversalError> {
        let back_edge = ctx.back_edge(s0)?;
        if back_edge.is_some_and(|back| ctx.graph.is_reverse_of(back, ctx.edge)) {
            return Ok(None);
        }
        let request = s0.request();
        let preferences = request.preferences();

        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(Some(mode));
        editor.set_back_walking_bike(walking_bike);

        // getting on or off the bike
        if back_edge.is_some()
            && s0.back_mode().is_some()
            && s0.current_mode() == TraverseMode::Bicycle
            && s0.is_back_walking_bike() != walking_bike
        {
            editor.increment_time_in_seconds(preferences.bike.walking.mount_dismount_time);
            editor.increment_weight(preferences.bike.walking.mount_dismount_cost);
        }

        let back_street = back_edge.and_then(|e| e.street());
        if self.is_no_thru_traffic(mode) {
            if back_street.is_some_and(|b| !b.is_no_thru_traffic(mode)) {
                editor.set_entered_no_through_traffic_area();
            }
        } else if s0.has_entered_no_thru_traffic_area() {
            return Ok(None);
        }

        if request.mode.includes_renting() {
            if ctx.to.rental_drop_off_banned(s0.as_ref()) {
                editor.enter_no_rental_drop_off_area();
            } else if s0.is_inside_no_rental_drop_off_area() {
                editor.leave_no_rental_drop_off_area();
            }
        }

        let speed = self.calculate_speed(preferences, mode, walking_bike);
        let (time, mut weight) = match mode {
            TraverseMode::Bicycle | TraverseMode::Scooter => {
                self.cycling_costs(preferences, mode, speed)
            }
            TraverseMode::Walk => {
                self.walking_costs(preferences, request.wheelchair, walking_bike, speed)
            }
            TraverseMode::Car => {
                let time = self.distance_meters() / speed;
                let weight = if self.is_stairs() {
                    time * preferences.walk.stairs_reluctance
                } else {
                    time
                };
                (time, weight * preferences.car.reluctance)
            }
        };
        let mut time_ms = (1000.0 * time).ceil() as i64;

        if let (Some(back), Some(back_street)) = (back_edge, back_street) {
            let back_mode = s0.back_mode().unwrap_or(mode);
            let now = s0.time();
            let turn_allowed = if request.arrive_by {
                self.can_turn_onto(ctx.graph, back.id, back_mode, &now)
            } else {
                back_street.can_turn_onto(ctx.graph, ctx.edge.id, mode, &now)
            };
            if !turn_allowed {
                log::debug!(
                    "turn between {} and {} is restricted for {mode}",
                    back.id,
                    ctx.edge.id
                );
                return Ok(None);
            }
            let back_speed =
                back_street.calculate_speed(preferences, back_mode, s0.is_back_walking_bike());
            let calculator = &request.intersection_traversal_calculator;
            let duration = if request.arrive_by {
                if ctx.to.is_intersection() {
                    calculator.compute_traversal_duration(
                        ctx.to, self, back_street, back_mode, speed, back_speed,
                    )
                } else {
                    0.0
                }
            } else if ctx.from.is_intersection() {
                calculator.compute_traversal_duration(
                    ctx.from,
                    back_street,
                    self,
                    mode,
                    back_speed,
                    speed,
                )
            } else {
                0.0
            };
            if !mode.is_in_car() {
                editor.increment_walk_distance(duration / 100.0);
            }
            time_ms += (1000.0 * duration).ceil() as i64;
            weight += preferences.street.turn_reluctance * duration;
        }

        if !mode.is_in_car() {
            editor.increment_walk_distance(self.distance_with_elevation());
        }
        editor.increment_time_in_milliseconds(time_ms);
        editor.increment_weight(weight);
        Ok(Some(editor))
    }

    /// (seconds, weight) riding a bicycle or scooter.
    fn cycling_costs(
        &self,
        preferences: &RoutingPreferences,
        mode: TraverseMode,
        speed: f64,
    ) -> (f64, f64) {
        let (optimize_type, triangle, reluctance) = match mode {
            TraverseMode::Scooter => (
                preferences.scooter.optimize_type,
                preferences.scooter.optimize_triangle,
                preferences.scooter.reluctance,
            ),
            _ => (
                preferences.bike.optimize_type,
                preferences.bike.optimize_triangle,
                preferences.bike.reluctance,
            ),
        };
        let time = self.effective_bike_distance() / speed;
        let weight = match optimize_type {
            VehicleRoutingOptimizeType::SafestStreets => {
                let weight = self.bicycle_safety_factor() * self.distance_meters() / speed;
                if self.bicycle_safety_factor() <= SAFEST_STREETS_SAFETY_FACTOR {
                    weight * SAFEST_STREETS_BONUS
                } else {
                    weight
                }
            }
            VehicleRoutingOptimizeType::SafeStreets => {
                self.effective_bicycle_safety_distance() / speed
            }
            VehicleRoutingOptimizeType::FlatStreets => self.effective_bike_work_distance() / speed,
            VehicleRoutingOptimizeType::ShortestDuration => self.effective_bike_distance() / speed,
            VehicleRoutingOptimizeType::Triangle => {
                let blend = triangle.time * self.effective_bike_distance()
                    + triangle.slope * self.effective_bike_work_distance()
                    + triangle.safety * self.effective_bicycle_safety_distance();
                blend / speed
            }
        };
        (time, weight * reluctance)
    }

    /// (seconds, weight) on foot, in a wheelchair or pushing a bike.
    fn walking_costs(
        &self,
        preferences: &RoutingPreferences,
        wheelchair: bool,
        walking_bike: bool,
        speed: f64,
    ) -> (f64, f64) {
        if wheelchair {
            let time = self.effective_walk_distance() / speed;
            let reluctance = wheelchair_reluctance(
                preferences,
                self.max_slope(),
                self.is_wheelchair_accessible(),
                self.is_stairs(),
            );
            (time, self.effective_bike_distance() / speed * reluctance)
        } else if walking_bike {
            let time = self.effective_bike_distance() / speed;
            let weight = if self.is_stairs() {
                time * preferences.bike.walking.stairs_reluctance
            } else {
                time
            };
            (time, weight * preferences.bike.walking.reluctance)
        } else {
            let time = self.effective_walk_distance() / speed;
            let safety = preferences.walk.safety_factor;
            let weight = (self.effective_walk_safety_distance() * safety
                + self.effective_walk_distance() * (1.0 - safety))
                / speed;
            let weight = if self.is_stairs() {
                weight * preferences.walk.stairs_reluctance
            } else {
                weight
            };
            (time, weight * preferences.walk.reluctance)
        }
    }
}
