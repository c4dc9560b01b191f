use super::{EdgeId, Graph, GraphError, VertexId};
use bambam_street_core::model::rental::{
    GeofencingZone, RentalRestriction, RentalRestrictionExtension,
};
use geo::{Contains, Intersects, MultiPolygon, Point};

impl Graph {
    /// attaches a geofencing zone to every street vertex inside `area`.
    /// zones without any restriction are ignored.
    ///
    /// # Returns
    ///
    /// the number of vertices that received the zone
    pub fn apply_geofencing_zone(
        &mut self,
        zone: &GeofencingZone,
        area: &MultiPolygon<f64>,
    ) -> Result<usize, GraphError> {
        if !zone.has_restriction() {
            return Ok(0);
        }
        let extension: RentalRestrictionExtension =
            RentalRestriction::GeofencingZone(zone.clone()).into();
        let inside: Vec<VertexId> = self
            .vertices()
            .filter(|v| v.degree() > 0 && area.contains(&Point::from(v.coordinate)))
            .map(|v| v.id)
            .collect();
        for id in inside.iter() {
            self.vertex_mut(*id)?.add_rental_restriction(&extension);
        }
        log::debug!(
            "geofencing zone {} of network {} applied to {} vertices",
            zone.id,
            zone.network,
            inside.len()
        );
        Ok(inside.len())
    }

    /// marks every street edge that crosses the boundary of a network's operating
    /// area, so that vehicles of that network cannot be ridden out of it.
    ///
    /// # Returns
    ///
    /// the number of edges that cross the border
    pub fn apply_business_area(
        &mut self,
        network: &str,
        area: &MultiPolygon<f64>,
    ) -> Result<usize, GraphError> {
        let extension: RentalRestrictionExtension =
            RentalRestriction::business_area_border(network).into();
        let crossing: Vec<EdgeId> = self
            .edges()
            .filter_map(|e| e.street().map(|s| (e.id, s)))
            .filter(|(_, s)| {
                area.0
                    .iter()
                    .any(|polygon| polygon.exterior().intersects(s.geometry()))
            })
            .map(|(id, _)| id)
            .collect();
        for id in crossing.iter() {
            self.add_rental_restriction(*id, &extension)?;
        }
        log::debug!(
            "business area of network {network} crossed by {} edges",
            crossing.len()
        );
        Ok(crossing.len())
    }
}
