use super::{EdgeContext, Traversable, TraversalError};
use crate::model::graph::{GraphError, Vertex, VertexKind};
use crate::model::state::State;
use bambam_street_core::model::rental::VehicleRentalPlace;
use std::sync::Arc;

/// connects the street network with a rental station or a parked rental vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StreetVehicleRentalLink;

pub(crate) fn rental_place(vertex: &Vertex) -> Option<&Arc<VehicleRentalPlace>> {
    match &vertex.kind {
        VertexKind::VehicleRentalPlace(place) => Some(place),
        _ => None,
    }
}

impl Traversable for StreetVehicleRentalLink {
    fn traverse(&self, ctx: &EdgeContext, s0: &Arc<State>) -> Result<Vec<State>, TraversalError> {
        if ctx
            .back_edge(s0)?
            .is_some_and(|back| back.is_vehicle_rental_link())
        {
            return Ok(vec![]);
        }
        let place = rental_place(ctx.to)
            .or_else(|| rental_place(ctx.from))
            .ok_or_else(|| {
                GraphError::InvalidEdge(format!(
                    "rental link {} does not touch a rental place",
                    ctx.edge.id
                ))
            })?;
        let request = s0.request();
        let mode = request
            .mode
            .rental_form_factor()
            .map(|ff| ff.traverse_mode())
            .unwrap_or_else(|| s0.current_mode());
        if !request
            .preferences()
            .rental(mode)
            .allows_network(place.network())
        {
            log::debug!(
                "rental place {} skipped, network {} not allowed",
                place.id(),
                place.network()
            );
            return Ok(vec![]);
        }
        let mut editor = s0.edit(ctx.edge);
        editor.set_back_mode(None);
        editor.increment_weight(1.0);
        Ok(editor.make_state().into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::edge::test_util::{coord, mock_request, mock_request_with, mock_state, traverse};
    use crate::model::graph::{EdgeId, EdgeKind, Graph};
    use bambam_street_core::model::mode::StreetMode;
    use bambam_street_core::model::preferences::RoutingPreferences;
    use bambam_street_core::model::rental::{RentalFormFactor, VehicleRentalVehicle};

    fn scooter_stand() -> (Graph, EdgeId, EdgeId) {
        let mut graph = Graph::new();
        let street = graph.add_vertex("street", coord(0.0, 0.0), VertexKind::intersection());
        let scooter = graph.add_vertex(
            "scooter",
            coord(0.0001, 0.0),
            VertexKind::VehicleRentalPlace(Arc::new(VehicleRentalPlace::FreeFloating(
                VehicleRentalVehicle {
                    id: "v1".to_string(),
                    network: "tier".to_string(),
                    form_factor: RentalFormFactor::Scooter,
                    is_reserved: false,
                    is_disabled: false,
                },
            ))),
        );
        let link = EdgeKind::StreetVehicleRentalLink(StreetVehicleRentalLink);
        let inbound = graph
            .build_and_connect(street, scooter, link.clone())
            .expect("test invariant failed: link builds");
        let outbound = graph
            .build_and_connect(scooter, street, link)
            .expect("test invariant failed: link builds");
        (graph, inbound, outbound)
    }

    #[test]
    fn test_link_to_place() {
        let (graph, inbound, outbound) = scooter_stand();
        let s0 = mock_state(&graph, inbound, mock_request(StreetMode::ScooterRental, false));
        let s1 = traverse(&graph, inbound, &s0);
        assert_eq!(s1.len(), 1);
        assert_eq!(s1[0].weight(), 1.0);
        assert_eq!(s1[0].back_mode(), None);
        assert!(traverse(&graph, outbound, &s1[0]).is_empty());
    }

    #[test]
    fn test_network_filter() {
        let (graph, inbound, _) = scooter_stand();
        let mut prefs = RoutingPreferences::default();
        prefs.scooter.rental.banned_networks.insert("tier".to_string());
        let s0 = mock_state(
            &graph,
            inbound,
            mock_request_with(StreetMode::ScooterRental, false, prefs),
        );
        assert!(traverse(&graph, inbound, &s0).is_empty());

        // the bicycle network settings do not apply to scooters
        let mut prefs = RoutingPreferences::default();
        prefs.bike.rental.banned_networks.insert("tier".to_string());
        let s0 = mock_state(
            &graph,
            inbound,
            mock_request_with(StreetMode::ScooterRental, false, prefs),
        );
        assert_eq!(traverse(&graph, inbound, &s0).len(), 1);
    }
}
