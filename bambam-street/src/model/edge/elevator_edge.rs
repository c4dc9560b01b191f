use super::{EdgeContext, Traversable, TraversalError};
use crate::model::state::State;
use bambam_street_core::model::accessibility::{Accessibility, AccessibilityCost};
use bambam_street_core::model::mode::{StreetTraversalPermission, TraverseMode};
use std::sync::Arc;

/// enters an elevator car from a floor. charges the wait for the car.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElevatorBoardEdge;

/// moves an elevator car between floors.
#[derive(Clone, Debug, PartialEq)]
pub struct ElevatorHopEdge {
    /// number of floors traveled
    pub levels: f64,
    /// seconds, 0 when unknown
    pub travel_time: f64,
    pub permission: StreetTraversalPermission,
    pub wheelchair_accessibility: Accessibility,
}

/// leaves an elevator car onto a floor. free.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElevatorAlightEdge;

fn elevator_back_mode(s0: &State) -> TraverseMode {
    if s0.current_mode().is_driving() {
        TraverseMode::Car
    } else {
        TraverseMode::Walk
    }
}

impl Traversable for ElevatorBoardEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let elevator = &s0.request().preferences().street.elevator;
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(Some(elevator_back_mode(s0)));
        editor.increment_weight(elevator.board_cost);
        editor.increment_time_in_seconds(elevator.board_time);
        Ok(editor.make_state().into_iter().collect())
    }
}

impl ElevatorHopEdge {
    pub fn new(levels: f64, travel_time: f64) -> ElevatorHopEdge {
        ElevatorHopEdge {
            levels,
            travel_time,
            permission: StreetTraversalPermission::All,
            wheelchair_accessibility: Accessibility::Possible,
        }
    }
}

impl Traversable for ElevatorHopEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let request = s0.request();
        let preferences = request.preferences();
        let mut editor = s0.edit(ctx.edge);

        if request.wheelchair {
            match preferences
                .wheelchair
                .elevator
                .evaluate(self.wheelchair_accessibility)
            {
                AccessibilityCost::Rejected => return Ok(vec![]),
                AccessibilityCost::Cost(cost) => editor.increment_weight(cost),
            }
        }
        if !self.permission.allows(s0.current_mode()) {
            return Ok(vec![]);
        }

        let elevator = &preferences.street.elevator;
        editor.set_back_mode(Some(elevator_back_mode(s0)));
        if self.travel_time > 0.0 {
            editor.increment_weight(elevator.reluctance * self.travel_time);
            editor.increment_time_in_seconds(self.travel_time);
        } else {
            editor.increment_weight(self.levels * elevator.hop_cost);
            editor.increment_time_in_seconds(self.levels * elevator.hop_time);
        }
        Ok(editor.make_state().into_iter().collect())
    }
}

impl Traversable for ElevatorAlightEdge {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(Some(elevator_back_mode(s0)));
        Ok(editor.make_state().into_iter().collect())
    }
}
