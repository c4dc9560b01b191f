use super::{EdgeContext, Traversable, TraversalError};
use crate::model::graph::{GraphError, VertexKind};
use crate::model::state::State;
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::parking::VehicleParkingEntrance;
use std::sync::Arc;

/// connects the street network with an entrance of a parking facility.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StreetVehicleParkingLink;

impl Traversable for StreetVehicleParkingLink {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        if ctx
            .back_edge(s0)?
            .is_some_and(|back| back.is_vehicle_parking_link())
        {
            return Ok(vec![]);
        }
        let entrance = [ctx.to, ctx.from]
            .into_iter()
            .find_map(|v| match &v.kind {
                VertexKind::VehicleParkingEntrance(entrance) => Some(entrance),
                _ => None,
            })
            .ok_or_else(|| {
                GraphError::InvalidEdge(format!(
                    "parking link {} does not touch a parking entrance",
                    ctx.edge.id
                ))
            })?;
        if !accessible(entrance, s0.current_mode()) {
            return Ok(vec![]);
        }
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(None);
        editor.increment_weight(1.0);
        Ok(editor.make_state().into_iter().collect())
    }
}

fn accessible(entrance: &VehicleParkingEntrance, mode: TraverseMode) -> bool {
    if mode == TraverseMode::Car {
        entrance.car_accessible
    } else {
        entrance.walk_accessible
    }
}
