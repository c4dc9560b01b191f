use super::street_edge::StreetEdgeFlags;
use super::{AreaEdge, StreetEdge};
use crate::model::graph::{EdgeId, EdgeKind, Graph, GraphError, VertexId};
use bambam_street_core::model::cost::{ElevationProfile, StreetElevationExtension};
use bambam_street_core::model::mode::{StreetTraversalPermission, TraverseMode};
use bambam_street_core::util::geo_utils;
use geo::LineString;
use GraphError as E;

/// 25 mph
pub const DEFAULT_CAR_SPEED: f64 = 11.2;

/// assembles a [`StreetEdge`] and wires it into the graph. every attribute has
/// a default, so only the endpoints are required.
#[derive(Clone, Debug)]
pub struct StreetEdgeBuilder {
    from: VertexId,
    to: VertexId,
    geometry: Option<LineString<f64>>,
    name: String,
    length_mm: Option<i64>,
    length_m: Option<f64>,
    permission: StreetTraversalPermission,
    car_speed: f64,
    walk_safety_factor: f64,
    bicycle_safety_factor: f64,
    flags: StreetEdgeFlags,
    elevation_profile: Option<ElevationProfile>,
    parent: Option<EdgeId>,
}

impl StreetEdgeBuilder {
    pub fn new(from: VertexId, to: VertexId) -> StreetEdgeBuilder {
        StreetEdgeBuilder {
            from,
            to,
            geometry: None,
            name: String::new(),
            length_mm: None,
            length_m: None,
            permission: StreetTraversalPermission::All,
            car_speed: DEFAULT_CAR_SPEED,
            walk_safety_factor: 1.0,
            bicycle_safety_factor: 1.0,
            flags: StreetEdgeFlags {
                wheelchair_accessible: true,
                ..Default::default()
            },
            elevation_profile: None,
            parent: None,
        }
    }

    /// starts from the attributes of an existing street, for edges cut from it.
    /// geometry, length, elevation and restrictions are not copied.
    pub fn from_template(from: VertexId, to: VertexId, template: &StreetEdge) -> StreetEdgeBuilder {
        StreetEdgeBuilder {
            name: template.name.clone(),
            permission: template.permission,
            car_speed: template.car_speed,
            walk_safety_factor: template.walk_safety_factor,
            bicycle_safety_factor: template.bicycle_safety_factor,
            flags: template.flags,
            ..StreetEdgeBuilder::new(from, to)
        }
    }

    pub fn with_geometry(mut self, geometry: LineString<f64>) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_meter_length(mut self, meters: f64) -> Self {
        self.length_m = Some(meters);
        self.length_mm = None;
        self
    }

    pub fn with_millimeter_length(mut self, millimeters: i64) -> Self {
        self.length_mm = Some(millimeters);
        self.length_m = None;
        self
    }

    pub fn with_permission(mut self, permission: StreetTraversalPermission) -> Self {
        self.permission = permission;
        self
    }

    /// meters per second
    pub fn with_car_speed(mut self, car_speed: f64) -> Self {
        self.car_speed = car_speed;
        self
    }

    pub fn with_walk_safety_factor(mut self, factor: f64) -> Self {
        self.walk_safety_factor = factor;
        self
    }

    pub fn with_bicycle_safety_factor(mut self, factor: f64) -> Self {
        self.bicycle_safety_factor = factor;
        self
    }

    pub fn with_stairs(mut self, stairs: bool) -> Self {
        self.flags.stairs = stairs;
        self
    }

    pub fn with_back(mut self, back: bool) -> Self {
        self.flags.back = back;
        self
    }

    pub fn with_wheelchair_accessible(mut self, accessible: bool) -> Self {
        self.flags.wheelchair_accessible = accessible;
        self
    }

    pub fn with_slope_override(mut self, slope_override: bool) -> Self {
        self.flags.slope_override = slope_override;
        self
    }

    pub fn with_roundabout(mut self, roundabout: bool) -> Self {
        self.flags.roundabout = roundabout;
        self
    }

    pub fn with_no_thru_traffic(mut self, mode: TraverseMode, no_thru_traffic: bool) -> Self {
        match mode {
            TraverseMode::Walk => self.flags.walk_no_thru_traffic = no_thru_traffic,
            TraverseMode::Bicycle | TraverseMode::Scooter => {
                self.flags.bicycle_no_thru_traffic = no_thru_traffic
            }
            TraverseMode::Car => self.flags.motor_vehicle_no_thru_traffic = no_thru_traffic,
        }
        self
    }

    pub fn with_elevation_profile(mut self, profile: ElevationProfile) -> Self {
        self.elevation_profile = Some(profile);
        self
    }

    /// marks the edge as a temporary piece of `parent`.
    pub fn with_parent(mut self, parent: EdgeId) -> Self {
        self.parent = Some(parent);
        self
    }

    fn build(self, graph: &Graph) -> Result<StreetEdge, GraphError> {
        let from = graph.vertex(self.from)?;
        let to = graph.vertex(self.to)?;
        let geometry = match self.geometry {
            Some(g) if g.0.len() < 2 => {
                return Err(E::InvalidEdge(format!(
                    "street from {} to {} has a geometry with {} points",
                    self.from,
                    self.to,
                    g.0.len()
                )))
            }
            Some(g) => g,
            None => LineString::new(vec![from.coordinate, to.coordinate]),
        };
        let length_mm = match (self.length_mm, self.length_m) {
            (Some(mm), _) => mm,
            (None, Some(m)) if m.is_finite() && m >= 0.0 => (m * 1000.0).round() as i64,
            (None, Some(m)) => {
                return Err(E::InvalidEdge(format!("street length {m} is not valid")));
            }
            (None, None) => geo_utils::length_millimeters(&geometry),
        };
        if length_mm < 0 {
            return Err(E::InvalidEdge(format!(
                "street length {length_mm} mm is negative"
            )));
        }
        let factors = [
            ("car speed", self.car_speed),
            ("walk safety factor", self.walk_safety_factor),
            ("bicycle safety factor", self.bicycle_safety_factor),
        ];
        if let Some((key, value)) = factors.iter().find(|(_, v)| !v.is_finite() || *v <= 0.0) {
            return Err(E::InvalidEdge(format!(
                "{key} must be finite and positive, found {value}"
            )));
        }
        let distance_meters = length_mm as f64 / 1000.0;
        // barriers at either end restrict who may use the street
        let permission = self
            .permission
            .intersection(from.barrier_permission())
            .intersection(to.barrier_permission());
        let elevation = self
            .elevation_profile
            .map(|profile| {
                StreetElevationExtension::new(
                    distance_meters,
                    self.bicycle_safety_factor,
                    self.walk_safety_factor,
                    profile,
                    permission.allows(TraverseMode::Car),
                )
                .map_err(|e| {
                    E::InvalidEdge(format!(
                        "street from {} to {}: {e}",
                        self.from, self.to
                    ))
                })
            })
            .transpose()?;
        let in_angle = geo_utils::first_azimuth(&geometry)
            .map(geo_utils::azimuth_to_brads)
            .unwrap_or_default();
        let out_angle = geo_utils::last_azimuth(&geometry)
            .map(geo_utils::azimuth_to_brads)
            .unwrap_or_default();
        Ok(StreetEdge {
            name: self.name,
            geometry,
            length_mm,
            permission,
            car_speed: self.car_speed,
            walk_safety_factor: self.walk_safety_factor,
            bicycle_safety_factor: self.bicycle_safety_factor,
            flags: self.flags,
            in_angle,
            out_angle,
            elevation,
            parent: self.parent,
            turn_restrictions: vec![],
        })
    }

    pub fn build_and_connect(self, graph: &mut Graph) -> Result<EdgeId, GraphError> {
        let (from, to) = (self.from, self.to);
        let street = self.build(graph)?;
        graph.build_and_connect(from, to, EdgeKind::Street(street))
    }

    /// builds a walkable edge across an open area such as a plaza.
    pub fn build_area_and_connect(
        self,
        area_name: &str,
        graph: &mut Graph,
    ) -> Result<EdgeId, GraphError> {
        let (from, to) = (self.from, self.to);
        let street = self.build(graph)?;
        let area = AreaEdge {
            street,
            area_name: area_name.to_string(),
        };
        graph.build_and_connect(from, to, EdgeKind::Area(area))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::graph::VertexKind;
    use geo::Coord;

    fn two_vertices() -> (Graph, VertexId, VertexId) {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a", Coord { x: 0.0, y: 0.0 }, VertexKind::intersection());
        let b = graph.add_vertex("b", Coord { x: 0.001, y: 0.0 }, VertexKind::intersection());
        (graph, a, b)
    }

    #[test]
    fn test_defaults() {
        let (mut graph, a, b) = two_vertices();
        let id = StreetEdgeBuilder::new(a, b)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let street = graph.street_edge(id).expect("test invariant failed: street");
        assert_eq!(street.permission(), StreetTraversalPermission::All);
        assert_eq!(street.car_speed(), DEFAULT_CAR_SPEED);
        assert!(street.is_wheelchair_accessible());
        assert!(!street.is_stairs());
        // 0.001 degrees of longitude at the equator
        assert!((street.distance_meters() - 111.195).abs() < 0.01);
        assert_eq!(street.geometry().0.len(), 2);
        // heading east
        assert_eq!(street.in_angle(), -90);
        assert_eq!(street.out_angle(), -90);
    }

    #[test]
    fn test_explicit_length() {
        let (mut graph, a, b) = two_vertices();
        let id = StreetEdgeBuilder::new(a, b)
            .with_meter_length(100.0)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let street = graph.street_edge(id).expect("test invariant failed: street");
        assert_eq!(street.length_millimeters(), 100_000);
        assert_eq!(street.distance_meters(), 100.0);
        let id = StreetEdgeBuilder::new(b, a)
            .with_millimeter_length(1)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let street = graph.street_edge(id).expect("test invariant failed: street");
        assert_eq!(street.distance_meters(), 0.001);
    }

    #[test]
    fn test_invalid_attributes() {
        let (mut graph, a, b) = two_vertices();
        let result = StreetEdgeBuilder::new(a, b)
            .with_bicycle_safety_factor(0.0)
            .build_and_connect(&mut graph);
        assert!(matches!(result, Err(GraphError::InvalidEdge(_))));
        let result = StreetEdgeBuilder::new(a, b)
            .with_meter_length(f64::NAN)
            .build_and_connect(&mut graph);
        assert!(matches!(result, Err(GraphError::InvalidEdge(_))));
        let result = StreetEdgeBuilder::new(a, VertexId(7)).build_and_connect(&mut graph);
        assert!(matches!(result, Err(GraphError::VertexNotFound(_))));
        assert_eq!(graph.n_edges(), 0);
    }

    #[test]
    fn test_degenerate_elevation_is_build_fault() {
        let (mut graph, a, b) = two_vertices();
        let profile = ElevationProfile::new(vec![Coord { x: 0.0, y: 10.0 }, Coord { x: 0.0, y: 12.0 }])
            .expect("test invariant failed: profile");
        let result = StreetEdgeBuilder::new(a, b)
            .with_elevation_profile(profile)
            .build_and_connect(&mut graph);
        assert!(matches!(result, Err(GraphError::InvalidEdge(_))));
    }

    #[test]
    fn test_elevation_and_slope_override() {
        let (mut graph, a, b) = two_vertices();
        let profile = ElevationProfile::new(vec![Coord { x: 0.0, y: 10.0 }, Coord { x: 100.0, y: 15.0 }])
            .expect("test invariant failed: profile");
        let id = StreetEdgeBuilder::new(a, b)
            .with_meter_length(100.0)
            .with_elevation_profile(profile.clone())
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let street = graph.street_edge(id).expect("test invariant failed: street");
        assert!((street.max_slope() - 0.05).abs() < 1e-9);
        assert!(street.effective_bike_work_distance() > street.distance_meters());

        let id = StreetEdgeBuilder::new(a, b)
            .with_meter_length(100.0)
            .with_elevation_profile(profile)
            .with_slope_override(true)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let street = graph.street_edge(id).expect("test invariant failed: street");
        assert_eq!(street.max_slope(), 0.0);
        assert_eq!(street.effective_bike_work_distance(), 100.0);
    }

    #[test]
    fn test_barrier_restricts_permission() {
        let (mut graph, a, _) = two_vertices();
        let gate = graph.add_vertex(
            "bollard",
            Coord { x: 0.0, y: 0.001 },
            VertexKind::Barrier {
                permission: StreetTraversalPermission::PedestrianAndBicycle,
            },
        );
        let id = StreetEdgeBuilder::new(a, gate)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let street = graph.street_edge(id).expect("test invariant failed: street");
        assert_eq!(street.permission(), StreetTraversalPermission::PedestrianAndBicycle);
        assert!(!street.can_traverse(TraverseMode::Car));
    }

    #[test]
    fn test_area_edge() {
        let (mut graph, a, b) = two_vertices();
        let id = StreetEdgeBuilder::new(a, b)
            .with_name("plaza path")
            .build_area_and_connect("market square", &mut graph)
            .expect("test invariant failed: edge builds");
        let edge = graph.edge(id).expect("test invariant failed: edge");
        assert_eq!(edge.name(), "market square");
        assert!(edge.street().is_some());
    }
}
