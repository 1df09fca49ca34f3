//! Unit tests for fm-ingest.
//!
//! All tests use hand-written document snippets so they run without any
//! export file on disk.

#[cfg(test)]
mod parser {
    use crate::parse_document;

    #[test]
    fn accepts_self_closing_and_open_forms() {
        let doc = parse_document(
            r#"<osm>
                 <node id="A" lat="1.0" lon="2.0"/>
                 <node id="B" lat="3.0" lon="4.0"></node>
               </osm>"#,
        )
        .unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.nodes[0].id, "A");
        assert_eq!(doc.nodes[1].id, "B");
    }

    #[test]
    fn collects_nested_tags() {
        let doc = parse_document(
            r#"<osm>
                 <node id="N">
                   <tag k="local_x" v="10"/>
                   <tag k="local_y" v="20"/>
                 </node>
               </osm>"#,
        )
        .unwrap();
        let node = &doc.nodes[0];
        assert_eq!(node.lat, None);
        assert_eq!(node.tags.get("local_x").map(String::as_str), Some("10"));
        assert_eq!(node.tags.get("local_y").map(String::as_str), Some("20"));
    }

    #[test]
    fn collects_way_refs_in_order() {
        let doc = parse_document(
            r#"<osm>
                 <way><nd ref="C"/><nd ref="A"/><nd ref="B"/></way>
               </osm>"#,
        )
        .unwrap();
        assert_eq!(doc.ways.len(), 1);
        assert_eq!(doc.ways[0].refs, vec!["C", "A", "B"]);
    }

    #[test]
    fn skips_unknown_elements_and_attributes() {
        let doc = parse_document(
            r#"<osm version="0.6">
                 <bounds minlat="0" minlon="0" maxlat="1" maxlon="1"/>
                 <node id="A" lat="1.0" lon="2.0" visible="true"/>
                 <relation id="7"><member ref="A"/></relation>
               </osm>"#,
        )
        .unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert!(doc.ways.is_empty());
    }

    #[test]
    fn skips_node_without_id() {
        let doc = parse_document(r#"<osm><node lat="1.0" lon="2.0"/></osm>"#).unwrap();
        assert!(doc.nodes.is_empty());
    }

    #[test]
    fn malformed_coordinate_becomes_absent_not_error() {
        let doc = parse_document(r#"<osm><node id="A" lat="abc" lon="2.0"/></osm>"#).unwrap();
        assert_eq!(doc.nodes[0].lat, None);
        assert_eq!(doc.nodes[0].lon, Some(2.0));
    }

    #[test]
    fn non_finite_coordinate_becomes_absent() {
        let doc = parse_document(r#"<osm><node id="A" lat="inf" lon="NaN"/></osm>"#).unwrap();
        assert_eq!(doc.nodes[0].lat, None);
        assert_eq!(doc.nodes[0].lon, None);
    }

    #[test]
    fn malformed_xml_fails_the_document() {
        assert!(parse_document(r#"<osm><node id="A" lat="1"/></mismatch>"#).is_err());
    }

    #[test]
    fn element_free_text_fails_the_document() {
        assert!(parse_document("").is_err());
        assert!(parse_document("503 Service Unavailable").is_err());
    }
}

#[cfg(test)]
mod resolver {
    use fm_core::{GeoPoint, Origin};

    use crate::{parse_document, resolve_nodes, METERS_PER_DEGREE};

    #[test]
    fn direct_coordinates_pass_through_unchanged() {
        let doc = parse_document(r#"<osm><node id="A" lat="10.5" lon="-20.25"/></osm>"#).unwrap();
        let table = resolve_nodes(&doc, Origin::default());
        assert_eq!(table["A"], GeoPoint::new(10.5, -20.25));
    }

    #[test]
    fn local_tags_linearize_around_origin() {
        let doc = parse_document(
            r#"<osm>
                 <node id="B">
                   <tag k="local_x" v="55660"/>
                   <tag k="local_y" v="-111320"/>
                 </node>
               </osm>"#,
        )
        .unwrap();
        let origin = Origin::new(35.0, 139.0);
        let table = resolve_nodes(&doc, origin);
        let expected = GeoPoint::new(
            origin.lat + -111_320.0 / METERS_PER_DEGREE,
            origin.lon + 55_660.0 / METERS_PER_DEGREE,
        );
        assert_eq!(table["B"], expected);
        assert_eq!(table["B"], GeoPoint::new(34.0, 139.5));
    }

    #[test]
    fn direct_coordinates_win_over_local_tags() {
        let doc = parse_document(
            r#"<osm>
                 <node id="A" lat="1.0" lon="2.0">
                   <tag k="local_x" v="999999"/>
                   <tag k="local_y" v="999999"/>
                 </node>
               </osm>"#,
        )
        .unwrap();
        let table = resolve_nodes(&doc, Origin::new(50.0, 50.0));
        assert_eq!(table["A"], GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn unresolvable_node_is_absent_not_placeholder() {
        let doc = parse_document(
            r#"<osm>
                 <node id="A"/>
                 <node id="B"><tag k="local_x" v="10"/></node>
                 <node id="C"><tag k="local_x" v="x"/><tag k="local_y" v="y"/></node>
               </osm>"#,
        )
        .unwrap();
        let table = resolve_nodes(&doc, Origin::default());
        assert!(table.is_empty());
        assert!(!table.contains_key("A"));
    }

    #[test]
    fn partial_direct_pair_falls_through_to_local_tags() {
        // lat present, lon missing → the direct pair is unusable as a whole.
        let doc = parse_document(
            r#"<osm>
                 <node id="A" lat="10.0">
                   <tag k="local_x" v="111320"/>
                   <tag k="local_y" v="111320"/>
                 </node>
               </osm>"#,
        )
        .unwrap();
        let table = resolve_nodes(&doc, Origin::new(0.0, 0.0));
        assert_eq!(table["A"], GeoPoint::new(1.0, 1.0));
    }

    #[test]
    fn every_resolved_point_is_finite() {
        let doc = parse_document(
            r#"<osm>
                 <node id="A" lat="10" lon="20"/>
                 <node id="B"><tag k="local_x" v="5"/><tag k="local_y" v="5"/></node>
                 <node id="C" lat="bad" lon="20"/>
               </osm>"#,
        )
        .unwrap();
        let table = resolve_nodes(&doc, Origin::default());
        assert!(table.values().all(|p| p.is_finite()));
        assert_eq!(table.len(), 2);
    }
}

#[cfg(test)]
mod assembler {
    use fm_core::{GeoPoint, Origin};

    use crate::{assemble_ways, parse_document, resolve_nodes};

    fn table_of(xml: &str) -> (crate::RawDocument, crate::NodeTable) {
        let doc = parse_document(xml).unwrap();
        let table = resolve_nodes(&doc, Origin::default());
        (doc, table)
    }

    #[test]
    fn unresolved_refs_are_dropped_in_place() {
        let (doc, table) = table_of(
            r#"<osm>
                 <node id="A" lat="0" lon="0"/>
                 <node id="B" lat="1" lon="1"/>
                 <way><nd ref="A"/><nd ref="ghost"/><nd ref="B"/></way>
               </osm>"#,
        );
        let ways = assemble_ways(&doc, &table);
        assert_eq!(ways.len(), 1);
        assert_eq!(
            ways[0].points,
            vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]
        );
    }

    #[test]
    fn degenerate_ways_are_discarded() {
        let (doc, table) = table_of(
            r#"<osm>
                 <node id="A" lat="0" lon="0"/>
                 <way><nd ref="A"/></way>
                 <way><nd ref="ghost"/><nd ref="phantom"/></way>
                 <way/>
               </osm>"#,
        );
        assert!(assemble_ways(&doc, &table).is_empty());
    }

    #[test]
    fn output_order_mirrors_document_order() {
        let (doc, table) = table_of(
            r#"<osm>
                 <node id="A" lat="0" lon="0"/>
                 <node id="B" lat="1" lon="1"/>
                 <node id="C" lat="2" lon="2"/>
                 <way><nd ref="C"/><nd ref="B"/></way>
                 <way><nd ref="A"/><nd ref="B"/></way>
               </osm>"#,
        );
        let ways = assemble_ways(&doc, &table);
        assert_eq!(ways[0].points[0], GeoPoint::new(2.0, 2.0));
        assert_eq!(ways[1].points[0], GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn every_emitted_way_has_at_least_two_finite_points() {
        let (doc, table) = table_of(
            r#"<osm>
                 <node id="A" lat="0" lon="0"/>
                 <node id="B" lat="1" lon="1"/>
                 <node id="C"/>
                 <way><nd ref="A"/><nd ref="B"/><nd ref="C"/></way>
                 <way><nd ref="C"/><nd ref="A"/></way>
               </osm>"#,
        );
        for way in assemble_ways(&doc, &table) {
            assert!(way.points.len() >= 2);
            assert!(way.points.iter().all(|p| p.is_finite()));
        }
    }

    /// End-to-end fixture: direct node + local-fallback node, one way.
    #[test]
    fn mixed_source_document_end_to_end() {
        let doc = parse_document(
            r#"<osm>
                 <node id="A" lat="10" lon="20"/>
                 <node id="B">
                   <tag k="local_x" v="111320"/>
                   <tag k="local_y" v="0"/>
                 </node>
                 <way><nd ref="A"/><nd ref="B"/></way>
               </osm>"#,
        )
        .unwrap();
        let table = resolve_nodes(&doc, Origin::new(10.0, 20.0));
        assert_eq!(table["B"], GeoPoint::new(10.0, 21.0));

        let ways = assemble_ways(&doc, &table);
        assert_eq!(ways.len(), 1);
        assert_eq!(
            ways[0].points,
            vec![GeoPoint::new(10.0, 20.0), GeoPoint::new(10.0, 21.0)]
        );
    }
}
