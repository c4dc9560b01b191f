use super::{EdgeId, VertexId, VertexKind};
use bambam_street_core::model::{
    mode::StreetTraversalPermission,
    rental::{RentalRestrictionExtension, RentalStatus},
};
use geo::Coord;
use std::collections::BTreeSet;

/// a node of the street graph. edge lists are maintained by the [`super::Graph`].
#[derive(Clone, Debug)]
pub struct Vertex {
    pub id: VertexId,
    pub label: String,
    pub coordinate: Coord<f64>,
    pub kind: VertexKind,
    pub(crate) incoming: Vec<EdgeId>,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) rental_restrictions: RentalRestrictionExtension,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: &str, coordinate: Coord<f64>, kind: VertexKind) -> Vertex {
        Vertex {
            id,
            label: label.to_string(),
            coordinate,
            kind,
            incoming: vec![],
            outgoing: vec![],
            rental_restrictions: RentalRestrictionExtension::None,
        }
    }

    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub fn degree(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    pub fn rental_restrictions(&self) -> &RentalRestrictionExtension {
        &self.rental_restrictions
    }

    pub fn add_rental_restriction(&mut self, extension: &RentalRestrictionExtension) {
        self.rental_restrictions = self.rental_restrictions.add(extension);
    }

    pub fn remove_rental_restriction(&mut self, extension: &RentalRestrictionExtension) {
        self.rental_restrictions = self.rental_restrictions.remove(extension);
    }

    pub fn rental_traversal_banned(&self, state: &dyn RentalStatus) -> bool {
        self.rental_restrictions.traversal_banned(state)
    }

    pub fn rental_drop_off_banned(&self, state: &dyn RentalStatus) -> bool {
        self.rental_restrictions.drop_off_banned(state)
    }

    pub fn rental_restricted_networks(&self) -> BTreeSet<String> {
        self.rental_restrictions.no_drop_off_networks()
    }

    /// turn costs only apply at street intersections.
    pub fn is_intersection(&self) -> bool {
        matches!(
            self.kind,
            VertexKind::Intersection { .. } | VertexKind::Splitter | VertexKind::TemporarySplitter
        )
    }

    pub fn has_highway_traffic_light(&self) -> bool {
        matches!(
            self.kind,
            VertexKind::Intersection {
                highway_traffic_light: true,
                ..
            }
        )
    }

    pub fn has_crosswalk_traffic_light(&self) -> bool {
        matches!(
            self.kind,
            VertexKind::Intersection {
                crosswalk_traffic_light: true,
                ..
            }
        )
    }

    /// true if traffic passes through without turning decisions, either because
    /// it is marked so or because it joins exactly one street to another with no light.
    pub fn inferred_free_flowing(&self) -> bool {
        match self.kind {
            VertexKind::Intersection {
                free_flowing: true, ..
            } => true,
            _ => {
                self.incoming.len() == 1
                    && self.outgoing.len() == 1
                    && !self.has_highway_traffic_light()
                    && !self.has_crosswalk_traffic_light()
            }
        }
    }

    /// permission imposed by a barrier at this vertex. unrestricted for other vertices.
    pub fn barrier_permission(&self) -> StreetTraversalPermission {
        match self.kind {
            VertexKind::Barrier { permission } => permission,
            _ => StreetTraversalPermission::All,
        }
    }
}
