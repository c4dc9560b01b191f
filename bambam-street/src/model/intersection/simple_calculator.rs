use super::IntersectionTraversalCalculator;
use crate::model::edge::StreetEdge;
use crate::model::graph::Vertex;
use bambam_street_core::model::mode::TraverseMode;
use bambam_street_core::model::preferences::DrivingDirection;

/// seconds spent waiting at a signalized intersection
const EXPECTED_TRAFFIC_LIGHT_SECONDS: f64 = 15.0;
const SAFE_TURN_SECONDS: f64 = 8.0;
const TURN_ACROSS_TRAFFIC_SECONDS: f64 = 8.0;
const STRAIGHT_SECONDS: f64 = 0.0;
/// degrees of turning per unit of the non-driving turn cost
const NON_DRIVING_TURN_DEGREES: f64 = 20.0;
const SAFE_TURN_BICYCLE_MULTIPLIER: f64 = 5.0;
const TURN_ACROSS_TRAFFIC_BICYCLE_MULTIPLIER: f64 = 15.0;

/// turn angles within [min, max) degrees, measured clockwise.
const RIGHT_TURN_RANGE: (i32, i32) = (45, 135);
const LEFT_TURN_RANGE: (i32, i32) = (225, 315);

/// turn costs from traffic lights and the angle between the two streets.
/// turning towards the curb is cheaper than turning across oncoming traffic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleIntersectionTraversalCalculator {
    driving_direction: DrivingDirection,
}

impl SimpleIntersectionTraversalCalculator {
    pub fn new(driving_direction: DrivingDirection) -> SimpleIntersectionTraversalCalculator {
        SimpleIntersectionTraversalCalculator { driving_direction }
    }

    /// clockwise angle in [0, 360) between leaving `from` and entering `to`.
    pub fn calculate_turn_angle(&self, from: &StreetEdge, to: &StreetEdge) -> i32 {
        let angle = to.in_angle() - from.out_angle();
        if angle < 0 {
            angle + 360
        } else {
            angle
        }
    }

    fn in_range(angle: i32, range: (i32, i32)) -> bool {
        range.0 <= angle && angle < range.1
    }

    pub fn is_safe_turn(&self, angle: i32) -> bool {
        match self.driving_direction {
            DrivingDirection::Right => Self::in_range(angle, RIGHT_TURN_RANGE),
            DrivingDirection::Left => Self::in_range(angle, LEFT_TURN_RANGE),
        }
    }

    pub fn is_turn_across_traffic(&self, angle: i32) -> bool {
        match self.driving_direction {
            DrivingDirection::Right => Self::in_range(angle, LEFT_TURN_RANGE),
            DrivingDirection::Left => Self::in_range(angle, RIGHT_TURN_RANGE),
        }
    }

    fn driving_duration(&self, vertex: &Vertex, from: &StreetEdge, to: &StreetEdge) -> f64 {
        if vertex.has_highway_traffic_light() {
            return EXPECTED_TRAFFIC_LIGHT_SECONDS;
        }
        let angle = self.calculate_turn_angle(from, to);
        if self.is_safe_turn(angle) {
            SAFE_TURN_SECONDS
        } else if self.is_turn_across_traffic(angle) {
            TURN_ACROSS_TRAFFIC_SECONDS
        } else {
            STRAIGHT_SECONDS
        }
    }

    fn non_driving_duration(
        &self,
        vertex: &Vertex,
        from: &StreetEdge,
        to: &StreetEdge,
        mode: TraverseMode,
        to_speed: f64,
    ) -> f64 {
        let angle = self.calculate_turn_angle(from, to);
        let turn = angle.min(360 - angle) as f64;
        let duration = turn / NON_DRIVING_TURN_DEGREES / to_speed;
        if vertex.has_crosswalk_traffic_light() {
            return duration + EXPECTED_TRAFFIC_LIGHT_SECONDS;
        }
        if mode == TraverseMode::Bicycle {
            if self.is_safe_turn(angle) {
                return duration * SAFE_TURN_BICYCLE_MULTIPLIER;
            }
            if self.is_turn_across_traffic(angle) {
                return duration * TURN_ACROSS_TRAFFIC_BICYCLE_MULTIPLIER;
            }
        }
        duration
    }
}

impl IntersectionTraversalCalculator for SimpleIntersectionTraversalCalculator {
    fn compute_traversal_duration(
        &self,
        vertex: &Vertex,
        from: &StreetEdge,
        to: &StreetEdge,
        mode: TraverseMode,
        _from_speed: f64,
        to_speed: f64,
    ) -> f64 {
        if vertex.inferred_free_flowing() {
            return 0.0;
        }
        if mode.is_driving() {
            self.driving_duration(vertex, from, to)
        } else {
            self.non_driving_duration(vertex, from, to, mode, to_speed)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::edge::StreetEdgeBuilder;
    use crate::model::graph::{EdgeId, Graph, VertexId, VertexKind};
    use geo::Coord;

    fn light(crosswalk: bool, highway: bool) -> VertexKind {
        VertexKind::Intersection {
            highway_traffic_light: highway,
            crosswalk_traffic_light: crosswalk,
            free_flowing: false,
        }
    }

    /// a plus-shaped intersection at the origin: an approach from the south and
    /// exits to the east, north and west.
    struct Crossing {
        graph: Graph,
        center: VertexId,
        north_bound: EdgeId,
        east: EdgeId,
        north: EdgeId,
        west: EdgeId,
        west_in: EdgeId,
    }

    fn mock_crossing(kind: VertexKind) -> Crossing {
        let mut graph = Graph::new();
        let south = graph.add_vertex("south", Coord { x: 0.0, y: -0.001 }, VertexKind::intersection());
        let center = graph.add_vertex("center", Coord { x: 0.0, y: 0.0 }, kind);
        let east_v = graph.add_vertex("east", Coord { x: 0.001, y: 0.0 }, VertexKind::intersection());
        let north_v = graph.add_vertex("north", Coord { x: 0.0, y: 0.001 }, VertexKind::intersection());
        let west_v = graph.add_vertex("west", Coord { x: -0.001, y: 0.0 }, VertexKind::intersection());
        let mut build = |a, b| {
            StreetEdgeBuilder::new(a, b)
                .build_and_connect(&mut graph)
                .expect("test invariant failed: edge builds")
        };
        let north_bound = build(south, center);
        let east = build(center, east_v);
        let north = build(center, north_v);
        let west = build(center, west_v);
        let west_in = build(west_v, center);
        Crossing {
            graph,
            center,
            north_bound,
            east,
            north,
            west,
            west_in,
        }
    }

    fn duration(
        crossing: &Crossing,
        calculator: &SimpleIntersectionTraversalCalculator,
        from: EdgeId,
        to: EdgeId,
        mode: TraverseMode,
    ) -> f64 {
        let graph = &crossing.graph;
        let vertex = graph
            .vertex(crossing.center)
            .expect("test invariant failed: vertex");
        let from = graph.street_edge(from).expect("test invariant failed: from");
        let to = graph.street_edge(to).expect("test invariant failed: to");
        calculator.compute_traversal_duration(vertex, from, to, mode, 40.0, 40.0)
    }

    #[test]
    fn test_turn_angles() {
        let crossing = mock_crossing(VertexKind::intersection());
        let calculator = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Right);
        let graph = &crossing.graph;
        let from = graph
            .street_edge(crossing.north_bound)
            .expect("test invariant failed: edge");
        let east = graph.street_edge(crossing.east).expect("test invariant failed: edge");
        let west = graph.street_edge(crossing.west).expect("test invariant failed: edge");
        let north = graph.street_edge(crossing.north).expect("test invariant failed: edge");

        let right = calculator.calculate_turn_angle(from, east);
        let left = calculator.calculate_turn_angle(from, west);
        let straight = calculator.calculate_turn_angle(from, north);
        assert_eq!(right, 90);
        assert_eq!(left, 270);
        assert_eq!(straight, 0);
        assert!(calculator.is_safe_turn(right));
        assert!(calculator.is_turn_across_traffic(left));
        assert!(!calculator.is_safe_turn(straight) && !calculator.is_turn_across_traffic(straight));

        let left_hand = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Left);
        assert!(left_hand.is_safe_turn(left));
        assert!(left_hand.is_turn_across_traffic(right));
    }

    #[test]
    fn test_bicycle_turns() {
        let crossing = mock_crossing(VertexKind::intersection());
        let right_hand = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Right);
        let left_hand = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Left);
        let (from, east, west) = (crossing.north_bound, crossing.east, crossing.west);
        let across = duration(&crossing, &right_hand, from, west, TraverseMode::Bicycle);
        let safe = duration(&crossing, &right_hand, from, east, TraverseMode::Bicycle);
        assert!((across - 1.6875).abs() < 1e-9);
        assert!((safe - 0.5625).abs() < 1e-9);
        let across = duration(&crossing, &left_hand, from, east, TraverseMode::Bicycle);
        let safe = duration(&crossing, &left_hand, from, west, TraverseMode::Bicycle);
        assert!((across - 1.6875).abs() < 1e-9);
        assert!((safe - 0.5625).abs() < 1e-9);
    }

    #[test]
    fn test_walk() {
        let crossing = mock_crossing(VertexKind::intersection());
        let calculator = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Right);
        let walk = duration(&crossing, &calculator, crossing.north_bound, crossing.east, TraverseMode::Walk);
        assert!((walk - 0.1125).abs() < 1e-9);
        let walk = duration(&crossing, &calculator, crossing.west_in, crossing.north, TraverseMode::Walk);
        assert!((walk - 0.1125).abs() < 1e-9);
    }

    #[test]
    fn test_crosswalk_light() {
        let crossing = mock_crossing(light(true, false));
        let calculator = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Right);
        for mode in [TraverseMode::Walk, TraverseMode::Bicycle] {
            let d = duration(&crossing, &calculator, crossing.north_bound, crossing.east, mode);
            assert!((d - 15.1125).abs() < 1e-9);
        }
    }

    #[test]
    fn test_driving() {
        let crossing = mock_crossing(VertexKind::intersection());
        let calculator = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Right);
        let car = TraverseMode::Car;
        assert_eq!(duration(&crossing, &calculator, crossing.north_bound, crossing.east, car), 8.0);
        assert_eq!(duration(&crossing, &calculator, crossing.north_bound, crossing.west, car), 8.0);
        assert_eq!(duration(&crossing, &calculator, crossing.north_bound, crossing.north, car), 0.0);

        let signalized = mock_crossing(light(false, true));
        assert_eq!(
            duration(&signalized, &calculator, signalized.north_bound, signalized.north, car),
            15.0
        );
    }

    #[test]
    fn test_free_flowing() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a", Coord { x: 0.0, y: -0.001 }, VertexKind::intersection());
        let b = graph.add_vertex("b", Coord { x: 0.0, y: 0.0 }, VertexKind::intersection());
        let c = graph.add_vertex("c", Coord { x: 0.001, y: 0.0 }, VertexKind::intersection());
        let ab = StreetEdgeBuilder::new(a, b)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let bc = StreetEdgeBuilder::new(b, c)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: edge builds");
        let calculator = SimpleIntersectionTraversalCalculator::new(DrivingDirection::Right);
        let vertex = graph.vertex(b).expect("test invariant failed: vertex");
        let from = graph.street_edge(ab).expect("test invariant failed: edge");
        let to = graph.street_edge(bc).expect("test invariant failed: edge");
        let d = calculator.compute_traversal_duration(vertex, from, to, TraverseMode::Car, 1.0, 1.0);
        assert_eq!(d, 0.0);
    }
}
