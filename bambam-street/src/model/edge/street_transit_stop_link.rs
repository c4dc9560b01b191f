use super::{EdgeContext, Traversable, TraversalError};
use crate::model::graph::{Edge, Graph, GraphError, TransitStopVertex, Vertex, VertexId, VertexKind};
use crate::model::state::State;
use bambam_street_core::model::accessibility::AccessibilityCost;
use bambam_street_core::model::mode::TraverseMode;
use std::sync::Arc;

/// weight of using a link, so that detours through a stop are never free
const LINK_COST: f64 = 1.0;

/// connects the street network with a transit stop, in either direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StreetTransitStopLink;

fn as_stop(vertex: &Vertex) -> Option<&TransitStopVertex> {
    match &vertex.kind {
        VertexKind::TransitStop(stop) => Some(stop),
        _ => None,
    }
}

/// the stop end of a stop link.
fn stop_vertex(graph: &Graph, edge: &Edge) -> Result<VertexId, GraphError> {
    [edge.to, edge.from]
        .into_iter()
        .find(|id| {
            graph
                .vertex(*id)
                .map(|v| as_stop(v).is_some())
                .unwrap_or(false)
        })
        .ok_or_else(|| {
            GraphError::InvalidEdge(format!("stop link {} does not touch a transit stop", edge.id))
        })
}

impl Traversable for StreetTransitStopLink {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        let stop_id = stop_vertex(ctx.graph, ctx.edge)?;
        // street -> stop -> street is not a shortcut
        if let Some(back) = ctx.back_edge(s0)? {
            if back.is_transit_stop_link() && stop_vertex(ctx.graph, back)? == stop_id {
                return Ok(vec![]);
            }
        }
        let stop = ctx
            .graph
            .vertex(stop_id)
            .map(as_stop)?
            .ok_or(GraphError::InvalidVertex(format!("{stop_id} is not a transit stop")))?;

        let request = s0.request();
        let preferences = request.preferences();
        let mut editor = s0.edit(ctx.edge);

        if request.wheelchair {
            match preferences.wheelchair.stop.evaluate(stop.wheelchair_accessibility) {
                AccessibilityCost::Rejected => return Ok(vec![]),
                AccessibilityCost::Cost(cost) => editor.increment_weight(cost),
            }
        }

        match s0.current_mode() {
            TraverseMode::Bicycle | TraverseMode::Scooter | TraverseMode::Car => {
                if request.mode.includes_parking() && !s0.is_vehicle_parked() {
                    // the vehicle has to be parked before boarding
                    return Ok(vec![]);
                }
                let may_keep = s0.may_keep_rented_vehicle_at_destination()
                    && preferences
                        .rental(s0.current_mode())
                        .allow_arriving_in_rented_vehicle_at_destination;
                if s0.is_renting_vehicle_from_station() && !may_keep {
                    return Ok(vec![]);
                }
            }
            TraverseMode::Walk => {}
        }

        let street_to_stop_time = if ctx.to.id == stop_id {
            stop.street_to_stop_time
        } else {
            0.0
        };
        editor.set_back_mode(None);
        editor.increment_time_in_seconds(street_to_stop_time);
        editor.increment_weight(LINK_COST + street_to_stop_time);
        Ok(editor.make_state().into_iter().collect())
    }
}
