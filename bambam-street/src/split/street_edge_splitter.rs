use super::{DisposableEdgeCollection, LinkingDirection, SplitError, SplitStreetEdge};
use crate::model::edge::{StreetEdge, StreetEdgeBuilder};
use crate::model::graph::{EdgeId, EdgeKind, Graph, GraphError, VertexId};
use crate::model::restriction::TurnRestriction;
use bambam_street_core::model::cost::ElevationProfile;
use bambam_street_core::util::geo_utils;
use geo_types::LineString;
use itertools::Itertools;
use SplitError as E;

/// shorter profiles cannot carry an elevation extension
const MIN_PROFILE_METERS: f64 = 1e-3;

/// the edge being split, copied out of the graph so that it can be mutated.
struct ParentEdge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    street: StreetEdge,
    area_name: Option<String>,
}

impl ParentEdge {
    fn read(graph: &Graph, id: EdgeId) -> Result<ParentEdge, SplitError> {
        let edge = graph.edge(id)?;
        let street = edge.street().ok_or(GraphError::NotAStreetEdge(id))?.clone();
        let area_name = match &edge.kind {
            EdgeKind::Area(area) => Some(area.area_name.clone()),
            _ => None,
        };
        Ok(ParentEdge {
            id,
            from: edge.from,
            to: edge.to,
            street,
            area_name,
        })
    }

    fn check_splitter(&self, splitter: VertexId) -> Result<(), SplitError> {
        if splitter == self.from || splitter == self.to {
            return Err(E::InvalidSplit(format!(
                "vertex {splitter} is an endpoint of edge {}",
                self.id
            )));
        }
        Ok(())
    }

    fn cut(&self, graph: &Graph, splitter: VertexId) -> Result<geo_utils::LineSplit, SplitError> {
        let point = graph.vertex(splitter)?.coordinate;
        geo_utils::split_at_closest_point(&self.street.geometry, point)
            .map_err(|e| E::Geometry(format!("edge {} at vertex {splitter}: {e}", self.id)))
    }

    /// a builder for the part of this street between `start` and `end` meters.
    fn piece(
        &self,
        from: VertexId,
        to: VertexId,
        geometry: LineString<f64>,
        start: f64,
        end: f64,
    ) -> StreetEdgeBuilder {
        let builder = StreetEdgeBuilder::from_template(from, to, &self.street).with_geometry(geometry);
        match self.partial_profile(start, end) {
            Some(profile) => builder.with_elevation_profile(profile),
            None => builder,
        }
    }

    fn partial_profile(&self, start: f64, end: f64) -> Option<ElevationProfile> {
        let extension = self.street.raw_elevation()?;
        match extension.profile().partial(start, end) {
            Ok(profile) if profile.flat_length() >= MIN_PROFILE_METERS => Some(profile),
            Ok(profile) => {
                log::warn!(
                    "dropping elevation of split edge {} from {start} to {end} m, profile is only {} m long",
                    self.id,
                    profile.flat_length()
                );
                None
            }
            Err(e) => {
                log::warn!(
                    "dropping elevation of split edge {} from {start} to {end} m: {e}",
                    self.id
                );
                None
            }
        }
    }

    fn connect(&self, builder: StreetEdgeBuilder, graph: &mut Graph) -> Result<EdgeId, GraphError> {
        match &self.area_name {
            Some(name) => builder.build_area_and_connect(name, graph),
            None => builder.build_and_connect(graph),
        }
    }
}

/// lengths of the two pieces in millimeters. the back edge of a two-way street
/// rounds from its other end so that both directions are cut into equal lengths.
fn apportion(parent: &ParentEdge, fraction: f64) -> (i64, i64) {
    let total = parent.street.length_mm;
    let (head, tail) = if parent.street.is_back() {
        let tail = (total as f64 * (1.0 - fraction)) as i64;
        (total - tail, tail)
    } else {
        let head = (total as f64 * fraction) as i64;
        (head, total - head)
    };
    (
        at_least_one_millimeter(head, parent.id, "head"),
        at_least_one_millimeter(tail, parent.id, "tail"),
    )
}

fn at_least_one_millimeter(length_mm: i64, edge: EdgeId, piece: &str) -> i64 {
    if length_mm <= 0 {
        log::warn!("{piece} of split edge {edge} has length {length_mm} mm, using 1 mm");
        1
    } else {
        length_mm
    }
}

/// rental rules of the parent live on its from-vertex; the splitter starts the tail.
fn copy_rental_restrictions(
    graph: &mut Graph,
    from: VertexId,
    splitter: VertexId,
) -> Result<(), GraphError> {
    if from == splitter {
        return Ok(());
    }
    let restrictions = graph.vertex(from)?.rental_restrictions().clone();
    if restrictions.has_restrictions() {
        graph.vertex_mut(splitter)?.add_rental_restriction(&restrictions);
    }
    Ok(())
}

/// re-creates restrictions that lead onto the parent as restrictions onto the
/// head, and the parent's own restrictions as restrictions of the tail.
///
/// returns the restrictions added to edges other than the new pieces.
fn copy_turn_restrictions(
    graph: &mut Graph,
    parent: &ParentEdge,
    split: &SplitStreetEdge,
) -> Result<Vec<TurnRestriction>, GraphError> {
    let mut upstream = vec![];
    if let Some(head) = split.head {
        let mut onto_parent = vec![];
        for id in graph.vertex(parent.from)?.incoming() {
            if let Some(street) = graph.edge(*id)?.street() {
                onto_parent.extend(
                    street
                        .turn_restrictions()
                        .iter()
                        .filter(|r| r.to == parent.id && r.from != parent.id)
                        .map(|r| r.rewired(r.from, head)),
                );
            }
        }
        for restriction in onto_parent {
            log::debug!(
                "restriction from {} now leads onto split edge {head}",
                restriction.from
            );
            graph.add_turn_restriction(restriction.clone())?;
            upstream.push(restriction);
        }
    }
    if let Some(tail) = split.tail {
        let own = parent
            .street
            .turn_restrictions()
            .iter()
            .filter(|r| r.to != parent.id)
            .map(|r| r.rewired(tail, r.to))
            .collect_vec();
        if !own.is_empty() {
            log::debug!(
                "split edge {tail} takes over restrictions onto {}",
                own.iter().map(|r| r.to).join(", ")
            );
        }
        for restriction in own {
            graph.add_turn_restriction(restriction)?;
        }
    }
    Ok(upstream)
}

/// replaces a street with two streets meeting at `splitter`, permanently.
///
/// the pieces share the parent's attributes, split its length and elevation
/// profile and take over the turn restrictions that involve it. the parent is
/// removed from the graph.
pub fn split_destructively(
    graph: &mut Graph,
    edge: EdgeId,
    splitter: VertexId,
) -> Result<SplitStreetEdge, SplitError> {
    let parent = ParentEdge::read(graph, edge)?;
    parent.check_splitter(splitter)?;
    let cut = parent.cut(graph, splitter)?;
    let (head_mm, tail_mm) = apportion(&parent, cut.fraction);
    let head_m = head_mm as f64 / 1000.0;
    let distance = parent.street.distance_meters();

    let head_builder = parent
        .piece(parent.from, splitter, cut.head, 0.0, head_m)
        .with_millimeter_length(head_mm);
    let tail_builder = parent
        .piece(splitter, parent.to, cut.tail, head_m, distance)
        .with_millimeter_length(tail_mm);
    let head = parent.connect(head_builder, graph)?;
    let tail = parent.connect(tail_builder, graph)?;
    copy_rental_restrictions(graph, parent.from, splitter)?;

    let split = SplitStreetEdge {
        head: Some(head),
        tail: Some(tail),
    };
    copy_turn_restrictions(graph, &parent, &split)?;
    graph.remove_edge(edge)?;
    log::debug!("split edge {edge} at {splitter} into {head} ({head_mm} mm) and {tail} ({tail_mm} mm)");
    Ok(split)
}

/// overlays temporary pieces of a street meeting at `splitter`, leaving the
/// street itself untouched. everything added is recorded in `collection`.
pub fn split_non_destructively(
    graph: &mut Graph,
    edge: EdgeId,
    splitter: VertexId,
    direction: LinkingDirection,
    collection: &mut DisposableEdgeCollection,
) -> Result<SplitStreetEdge, SplitError> {
    let parent = ParentEdge::read(graph, edge)?;
    parent.check_splitter(splitter)?;
    let cut = parent.cut(graph, splitter)?;
    if graph.vertex(splitter)?.kind.is_temporary() {
        collection.add_vertex(splitter);
    }
    let distance = parent.street.distance_meters();

    let head = if direction.creates_head() {
        let head_m = geo_utils::length_millimeters(&cut.head) as f64 / 1000.0;
        let builder = parent
            .piece(parent.from, splitter, cut.head, 0.0, head_m)
            .with_parent(edge);
        let id = parent.connect(builder, graph)?;
        collection.add_edge(id);
        Some(id)
    } else {
        None
    };
    let tail = if direction.creates_tail() {
        let tail_m = geo_utils::length_millimeters(&cut.tail) as f64 / 1000.0;
        let builder = parent
            .piece(splitter, parent.to, cut.tail, (distance - tail_m).max(0.0), distance)
            .with_parent(edge);
        let id = parent.connect(builder, graph)?;
        collection.add_edge(id);
        copy_rental_restrictions(graph, parent.from, splitter)?;
        Some(id)
    } else {
        None
    };

    let split = SplitStreetEdge { head, tail };
    for restriction in copy_turn_restrictions(graph, &parent, &split)? {
        collection.add_turn_restriction(restriction);
    }
    Ok(split)
}

/// a temporary edge along the part of a street between two vertices placed on
/// it, for an origin and destination on the same street. `None` when `to` lies
/// before `from` along the street.
pub fn create_partial_edge(
    graph: &mut Graph,
    edge: EdgeId,
    from: VertexId,
    to: VertexId,
    collection: &mut DisposableEdgeCollection,
) -> Result<Option<EdgeId>, SplitError> {
    let parent = ParentEdge::read(graph, edge)?;
    let start_coord = graph.vertex(from)?.coordinate;
    let end_coord = graph.vertex(to)?.coordinate;
    let geometry = &parent.street.geometry;
    let fraction = |coord| {
        geo_utils::split_at_closest_point(geometry, coord)
            .map(|cut| cut.fraction)
            .map_err(|e| E::Geometry(format!("edge {edge}: {e}")))
    };
    let start = fraction(start_coord)?;
    let end = fraction(end_coord)?;
    if end <= start {
        log::debug!("no partial edge on {edge}, {to} does not lie after {from}");
        return Ok(None);
    }
    let partial = geo_utils::interior_line(geometry, start_coord, end_coord)
        .map_err(|e| E::Geometry(format!("edge {edge}: {e}")))?;
    let distance = parent.street.distance_meters();
    let start_m = distance * start;
    let length_m = distance * (end - start);

    let builder = parent
        .piece(from, to, partial, start_m, start_m + length_m)
        .with_meter_length(length_m)
        .with_parent(edge);
    let id = parent.connect(builder, graph)?;
    collection.add_edge(id);
    copy_rental_restrictions(graph, parent.from, from)?;
    Ok(Some(id))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::edge::FreeEdge;
    use crate::model::graph::VertexKind;
    use crate::model::restriction::TurnRestrictionType;
    use bambam_street_core::model::mode::{TraverseMode, TraverseModeSet};
    use bambam_street_core::model::rental::{GeofencingZone, RentalRestriction};
    use geo::Coord;

    fn coord(x: f64) -> Coord<f64> {
        Coord { x, y: 0.0 }
    }

    /// a -> b along the equator, 0.002 degrees long.
    fn street() -> (Graph, VertexId, VertexId, EdgeId) {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a", coord(0.0), VertexKind::intersection());
        let b = graph.add_vertex("b", coord(0.002), VertexKind::intersection());
        let e = StreetEdgeBuilder::new(a, b)
            .with_name("main st")
            .with_car_speed(15.0)
            .with_bicycle_safety_factor(1.5)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: street builds");
        (graph, a, b, e)
    }

    fn no_turn(from: EdgeId, to: EdgeId) -> TurnRestriction {
        TurnRestriction::new(
            from,
            to,
            TurnRestrictionType::NoTurn,
            TraverseModeSet::of(&[TraverseMode::Car]),
        )
    }

    #[test]
    fn test_split_destructively() {
        let (mut graph, a, b, e) = street();
        let original_mm = graph
            .street_edge(e)
            .expect("test invariant failed: street")
            .length_millimeters();
        let s = graph.add_vertex("s", coord(0.0005), VertexKind::Splitter);
        let split = split_destructively(&mut graph, e, s).expect("test invariant failed: split");
        let head = split.head.expect("test invariant failed: head");
        let tail = split.tail.expect("test invariant failed: tail");

        assert!(!graph.contains_edge(e));
        assert_eq!(graph.n_edges(), 2);
        let head_edge = graph.edge(head).expect("test invariant failed: head");
        let tail_edge = graph.edge(tail).expect("test invariant failed: tail");
        assert_eq!((head_edge.from, head_edge.to), (a, s));
        assert_eq!((tail_edge.from, tail_edge.to), (s, b));
        assert!(graph
            .vertex(a)
            .expect("test invariant failed: a")
            .outgoing()
            .contains(&head));

        let head_street = head_edge.street().expect("test invariant failed: street");
        let tail_street = tail_edge.street().expect("test invariant failed: street");
        assert_eq!(
            head_street.length_millimeters() + tail_street.length_millimeters(),
            original_mm
        );
        assert!((head_street.length_millimeters() as f64 / original_mm as f64 - 0.25).abs() < 1e-3);
        assert_eq!(head_street.name(), "main st");
        assert_eq!(tail_street.car_speed(), 15.0);
        assert_eq!(tail_street.bicycle_safety_factor(), 1.5);
        assert_eq!(head_street.parent(), None);
    }

    #[test]
    fn test_two_way_street_splits_into_equal_lengths() {
        let (mut graph, a, b, forward) = street();
        let back = StreetEdgeBuilder::new(b, a)
            .with_back(true)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: back street builds");
        let s = graph.add_vertex("s", coord(0.00071), VertexKind::Splitter);
        let f = split_destructively(&mut graph, forward, s).expect("test invariant failed: split");
        let r = split_destructively(&mut graph, back, s).expect("test invariant failed: split");
        let length = |id: Option<EdgeId>| {
            graph
                .street_edge(id.expect("test invariant failed: piece"))
                .expect("test invariant failed: street")
                .length_millimeters()
        };
        assert_eq!(length(f.head), length(r.tail));
        assert_eq!(length(f.tail), length(r.head));
    }

    #[test]
    fn test_zero_length_piece_clamped() {
        let _ = env_logger::builder().is_test(true).try_init();
        let (mut graph, _, _, e) = street();
        let s = graph.add_vertex("s", coord(0.0), VertexKind::Splitter);
        let split = split_destructively(&mut graph, e, s).expect("test invariant failed: split");
        let head = graph
            .street_edge(split.head.expect("test invariant failed: head"))
            .expect("test invariant failed: street");
        assert_eq!(head.length_millimeters(), 1);
    }

    #[test]
    fn test_destructive_split_moves_turn_restrictions() {
        let (mut graph, a, b, e) = street();
        let x = graph.add_vertex("x", coord(-0.001), VertexKind::intersection());
        let y = graph.add_vertex("y", coord(0.003), VertexKind::intersection());
        let upstream = StreetEdgeBuilder::new(x, a)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: street builds");
        let downstream = StreetEdgeBuilder::new(b, y)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: street builds");
        graph
            .add_turn_restriction(no_turn(upstream, e))
            .expect("test invariant failed: restriction");
        graph
            .add_turn_restriction(no_turn(e, downstream))
            .expect("test invariant failed: restriction");

        let s = graph.add_vertex("s", coord(0.001), VertexKind::Splitter);
        let split = split_destructively(&mut graph, e, s).expect("test invariant failed: split");
        let head = split.head.expect("test invariant failed: head");
        let tail = split.tail.expect("test invariant failed: tail");

        let onto = graph
            .turn_restrictions(upstream)
            .expect("test invariant failed: upstream");
        assert_eq!(onto.len(), 1);
        assert_eq!(onto[0].to, head);
        assert_eq!(onto[0].restriction_type, TurnRestrictionType::NoTurn);
        assert!(graph
            .turn_restrictions(head)
            .expect("test invariant failed: head")
            .is_empty());
        let from_tail = graph.turn_restrictions(tail).expect("test invariant failed: tail");
        assert_eq!(from_tail.len(), 1);
        assert_eq!((from_tail[0].from, from_tail[0].to), (tail, downstream));
    }

    #[test]
    fn test_rental_restrictions_copied_to_splitter() {
        let (mut graph, _, _, e) = street();
        let zone = RentalRestriction::GeofencingZone(GeofencingZone::new("zone", "tier", true, false));
        graph
            .add_rental_restriction(e, &zone.into())
            .expect("test invariant failed: restriction");
        let s = graph.add_vertex("s", coord(0.001), VertexKind::Splitter);
        split_destructively(&mut graph, e, s).expect("test invariant failed: split");
        let networks = graph
            .vertex(s)
            .expect("test invariant failed: splitter")
            .rental_restricted_networks();
        assert!(networks.contains("tier"));
    }

    #[test]
    fn test_split_elevation_profile() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a", coord(0.0), VertexKind::intersection());
        let b = graph.add_vertex("b", coord(0.001), VertexKind::intersection());
        // the profile covers only the first 10 m of the street
        let profile = ElevationProfile::new(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 1.0 }])
            .expect("test invariant failed: profile");
        let e = StreetEdgeBuilder::new(a, b)
            .with_meter_length(100.0)
            .with_elevation_profile(profile)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: street builds");
        let s = graph.add_vertex("s", coord(0.0005), VertexKind::Splitter);
        let split = split_destructively(&mut graph, e, s).expect("test invariant failed: split");
        let head = graph
            .street_edge(split.head.expect("test invariant failed: head"))
            .expect("test invariant failed: street");
        let tail = graph
            .street_edge(split.tail.expect("test invariant failed: tail"))
            .expect("test invariant failed: street");
        assert!((head.length_millimeters() - 50_000).abs() <= 1);
        assert!(head.elevation().is_some());
        assert!(tail.elevation().is_none());
    }

    #[test]
    fn test_split_area_edge() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a", coord(0.0), VertexKind::intersection());
        let b = graph.add_vertex("b", coord(0.001), VertexKind::intersection());
        let e = StreetEdgeBuilder::new(a, b)
            .build_area_and_connect("plaza", &mut graph)
            .expect("test invariant failed: area builds");
        let s = graph.add_vertex("s", coord(0.0005), VertexKind::Splitter);
        let split = split_destructively(&mut graph, e, s).expect("test invariant failed: split");
        let head = graph
            .edge(split.head.expect("test invariant failed: head"))
            .expect("test invariant failed: head");
        assert!(matches!(&head.kind, EdgeKind::Area(area) if area.area_name == "plaza"));
    }

    #[test]
    fn test_invalid_splits() {
        let (mut graph, a, b, e) = street();
        let result = split_destructively(&mut graph, e, a);
        assert!(matches!(result, Err(SplitError::InvalidSplit(_))));
        let link = graph
            .build_and_connect(b, a, EdgeKind::Free(FreeEdge))
            .expect("test invariant failed: link");
        let s = graph.add_vertex("s", coord(0.001), VertexKind::Splitter);
        let result = split_destructively(&mut graph, link, s);
        assert!(matches!(
            result,
            Err(SplitError::Graph(GraphError::NotAStreetEdge(_)))
        ));
        assert!(graph.contains_edge(e));
    }

    #[test]
    fn test_split_non_destructively_and_dispose() {
        let (mut graph, a, b, e) = street();
        let x = graph.add_vertex("x", coord(-0.001), VertexKind::intersection());
        let y = graph.add_vertex("y", coord(0.003), VertexKind::intersection());
        let upstream = StreetEdgeBuilder::new(x, a)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: street builds");
        let downstream = StreetEdgeBuilder::new(b, y)
            .build_and_connect(&mut graph)
            .expect("test invariant failed: street builds");
        graph
            .add_turn_restriction(no_turn(upstream, e))
            .expect("test invariant failed: restriction");
        graph
            .add_turn_restriction(no_turn(e, downstream))
            .expect("test invariant failed: restriction");
        let upstream_before = graph
            .turn_restrictions(upstream)
            .expect("test invariant failed: upstream")
            .to_vec();
        let own_before = graph
            .turn_restrictions(e)
            .expect("test invariant failed: own")
            .to_vec();
        let (n_vertices, n_edges) = (graph.n_vertices(), graph.n_edges());

        let mut collection = DisposableEdgeCollection::new();
        let s = graph.add_vertex("origin", coord(0.001), VertexKind::TemporarySplitter);
        let split = split_non_destructively(
            &mut graph,
            e,
            s,
            LinkingDirection::Bidirectional,
            &mut collection,
        )
        .expect("test invariant failed: split");
        let head = split.head.expect("test invariant failed: head");
        let tail = split.tail.expect("test invariant failed: tail");

        assert!(graph.contains_edge(e));
        assert_eq!(
            graph.turn_restrictions(e).expect("test invariant failed: own"),
            own_before.as_slice()
        );
        assert_eq!(graph.edge(head).expect("test invariant failed: head").parent(), Some(e));
        assert!(graph.is_equivalent(tail, e));
        assert_eq!(collection.edges(), &[head, tail]);
        assert_eq!(collection.vertices(), &[s]);
        assert_eq!(collection.turn_restrictions().len(), 1);
        assert_eq!(
            graph
                .turn_restrictions(upstream)
                .expect("test invariant failed: upstream")
                .len(),
            2
        );
        assert_eq!(
            graph.turn_restrictions(tail).expect("test invariant failed: tail")[0].to,
            downstream
        );

        collection
            .dispose(&mut graph)
            .expect("test invariant failed: dispose");
        assert_eq!(graph.n_edges(), n_edges);
        assert_eq!(graph.n_vertices(), n_vertices);
        assert!(!graph.contains_vertex(s));
        assert_eq!(
            graph
                .turn_restrictions(upstream)
                .expect("test invariant failed: upstream"),
            upstream_before.as_slice()
        );
        assert_eq!(
            graph.turn_restrictions(e).expect("test invariant failed: own"),
            own_before.as_slice()
        );
    }

    #[test]
    fn test_linking_direction() {
        let (mut graph, a, b, e) = street();
        let mut collection = DisposableEdgeCollection::new();
        let origin = graph.add_vertex("origin", coord(0.001), VertexKind::TemporarySplitter);
        let split = split_non_destructively(
            &mut graph,
            e,
            origin,
            LinkingDirection::Outgoing,
            &mut collection,
        )
        .expect("test invariant failed: split");
        let head = split.head.expect("test invariant failed: head");
        assert_eq!(split.tail, None);
        let head_edge = graph.edge(head).expect("test invariant failed: head");
        assert_eq!((head_edge.from, head_edge.to), (a, origin));

        let destination = graph.add_vertex("destination", coord(0.0015), VertexKind::TemporarySplitter);
        let split = split_non_destructively(
            &mut graph,
            e,
            destination,
            LinkingDirection::Incoming,
            &mut collection,
        )
        .expect("test invariant failed: split");
        assert_eq!(split.head, None);
        let tail = graph
            .edge(split.tail.expect("test invariant failed: tail"))
            .expect("test invariant failed: tail");
        assert_eq!((tail.from, tail.to), (destination, b));

        collection
            .dispose(&mut graph)
            .expect("test invariant failed: dispose");
        assert_eq!(graph.n_edges(), 1);
        assert_eq!(graph.n_vertices(), 2);
    }

    #[test]
    fn test_create_partial_edge() {
        let (mut graph, _, _, e) = street();
        let mut collection = DisposableEdgeCollection::new();
        let origin = graph.add_vertex("origin", coord(0.0005), VertexKind::TemporaryLocation { is_end: false });
        let destination =
            graph.add_vertex("destination", coord(0.0015), VertexKind::TemporaryLocation { is_end: true });
        collection.add_vertex(origin);
        collection.add_vertex(destination);

        let partial = create_partial_edge(&mut graph, e, origin, destination, &mut collection)
            .expect("test invariant failed: partial edge")
            .expect("test invariant failed: destination lies ahead");
        let parent_mm = graph
            .street_edge(e)
            .expect("test invariant failed: street")
            .length_millimeters();
        let street = graph.street_edge(partial).expect("test invariant failed: partial");
        assert_eq!(street.parent(), Some(e));
        assert!((street.length_millimeters() as f64 / parent_mm as f64 - 0.5).abs() < 1e-3);

        let backwards = create_partial_edge(&mut graph, e, destination, origin, &mut collection)
            .expect("test invariant failed: partial edge");
        assert_eq!(backwards, None);

        collection
            .dispose(&mut graph)
            .expect("test invariant failed: dispose");
        assert!(!graph.contains_edge(partial));
        assert!(!graph.contains_vertex(origin));
    }
}
