//! Unit tests for evac-graph.
//!
//! Buildings are hand-built or parsed from inline JSON; no files on disk.

#[cfg(test)]
mod helpers {
    use evac_core::ZoneId;

    use crate::{Building, BuildingBuilder, Transit, Zone};

    /// Corridor with two rooms off it and one exit:
    ///
    /// ```text
    ///   R1 ─d1─┐
    ///          C ─exit─ OUT
    ///   R2 ─d2─┘
    /// ```
    pub fn corridor() -> (Building, [ZoneId; 4]) {
        let mut b = BuildingBuilder::new("corridor");
        let out = b.add_outside();
        let c   = b.add_zone(Zone::room("Corridor", 30.0).with_key("c"));
        let r1  = b.add_zone(Zone::room("R1", 20.0).with_people(10.0).with_key("r1"));
        let r2  = b.add_zone(Zone::room("R2", 25.0).with_people(5.0).with_key("r2"));
        b.add_transit(Transit::door_out("Exit", 1.2).with_key("exit"), c, out);
        b.add_transit(Transit::door_int("D1", 0.9).with_key("d1"), r1, c);
        b.add_transit(Transit::door_int("D2", 0.9).with_key("d2"), c, r2);
        (b.build().unwrap(), [out, c, r1, r2])
    }
}

// ── Builder & graph structure ──────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use evac_core::{TransitId, ZoneSign};

    use crate::{BuildingBuilder, GraphError, OUTSIDE_AREA, Transit, Zone};

    #[test]
    fn csr_neighbors_in_registration_order() {
        let (bld, [out, c, r1, r2]) = super::helpers::corridor();
        let g = &bld.graph;
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.outside(), out);

        let from_c: Vec<_> = g.neighbors(c).collect();
        assert_eq!(from_c, vec![(TransitId(0), out), (TransitId(1), r1), (TransitId(2), r2)]);
        assert_eq!(g.out_degree(c), 3);
        assert_eq!(g.out_degree(r1), 1);
        assert_eq!(g.neighbors(out).collect::<Vec<_>>(), vec![(TransitId(0), c)]);
    }

    #[test]
    fn neighbors_are_stable_across_calls() {
        let (bld, [_, c, ..]) = super::helpers::corridor();
        let first: Vec<_> = bld.graph.neighbors(c).collect();
        let second: Vec<_> = bld.graph.neighbors(c).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_transit_in_both_adjacency_lists() {
        let (bld, _) = super::helpers::corridor();
        for t in &bld.transits {
            let [a, b] = t.zones;
            assert!(bld.graph.neighbors(a).any(|(id, to)| id == t.id && to == b));
            assert!(bld.graph.neighbors(b).any(|(id, to)| id == t.id && to == a));
        }
    }

    #[test]
    fn outside_gets_nominal_area() {
        let (bld, [out, ..]) = super::helpers::corridor();
        assert_eq!(bld.zone(out).area, OUTSIDE_AREA);
        assert_eq!(bld.zone(out).sign, ZoneSign::Outside);
    }

    #[test]
    fn aggregates() {
        let (bld, _) = super::helpers::corridor();
        assert_eq!(bld.interior_area(), 75.0);
        assert_eq!(bld.interior_people(), 15.0);
        assert_eq!(bld.evacuated_people(), 0.0);
        // Nothing visited before the first tick.
        assert_eq!(bld.reachable_people(), 0.0);
        assert_eq!(bld.zone_by_key("r2").map(|z| z.0), Some(3));
        assert_eq!(bld.transit_by_key("d1"), Some(TransitId(1)));
        assert_eq!(bld.zone_by_key("nope"), None);
    }

    #[test]
    fn other_side() {
        let (bld, [out, c, ..]) = super::helpers::corridor();
        let exit = bld.transit(TransitId(0));
        assert_eq!(exit.other_side(c), Some(out));
        assert_eq!(exit.other_side(out), Some(c));
    }

    #[test]
    fn missing_outside_is_rejected() {
        let mut b = BuildingBuilder::new("x");
        b.add_zone(Zone::room("R", 10.0));
        assert!(matches!(b.build(), Err(GraphError::NoOutside)));
    }

    #[test]
    fn second_outside_is_rejected() {
        let mut b = BuildingBuilder::new("x");
        b.add_outside();
        b.add_outside();
        assert!(matches!(b.build(), Err(GraphError::MultipleOutside(2))));
    }

    #[test]
    fn non_positive_area_is_rejected() {
        let mut b = BuildingBuilder::new("x");
        b.add_outside();
        b.add_zone(Zone::room("Zero", 0.0));
        assert!(matches!(b.build(), Err(GraphError::NonPositiveArea { .. })));
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut b = BuildingBuilder::new("x");
        b.add_outside();
        let r = b.add_zone(Zone::room("R", 10.0));
        b.add_transit(Transit::door_way("Loop", 1.0), r, r);
        assert!(matches!(b.build(), Err(GraphError::SelfLoop(_))));
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let mut b = BuildingBuilder::new("x");
        let out = b.add_outside();
        b.add_transit(Transit::door_out("Exit", 1.0), evac_core::ZoneId(9), out);
        assert!(matches!(b.build(), Err(GraphError::UnknownZone { .. })));
    }

    #[test]
    fn non_positive_width_is_rejected() {
        let mut b = BuildingBuilder::new("x");
        let out = b.add_outside();
        let r = b.add_zone(Zone::room("R", 10.0));
        b.add_transit(Transit::door_out("Exit", 0.0), r, out);
        assert!(matches!(b.build(), Err(GraphError::NonPositiveWidth { .. })));
    }

    #[test]
    fn interfloor_width_derived_from_stair_areas() {
        let mut b = BuildingBuilder::new("x");
        let out = b.add_outside();
        let s1 = b.add_zone(Zone::staircase("S1", 12.0));
        let s2 = b.add_zone(Zone::staircase("S2", 20.0).at_level(3.0));
        b.add_transit(Transit::door_out("Exit", 1.0), s1, out);
        let f = b.add_interfloor(Transit::door_way("Flight", 0.0), s1, s2);
        let bld = b.build().unwrap();
        assert_eq!(bld.transit(f).width, 4.0);
    }

    #[test]
    fn interfloor_between_rooms_needs_width() {
        let mut b = BuildingBuilder::new("x");
        let out = b.add_outside();
        let r = b.add_zone(Zone::room("R", 10.0));
        b.add_interfloor(Transit::door_way("Flight", 0.0), r, out);
        assert!(matches!(b.build(), Err(GraphError::MissingWidth { .. })));
    }

    #[test]
    fn narrow_door_is_accepted() {
        let mut b = BuildingBuilder::new("x");
        let out = b.add_outside();
        let r = b.add_zone(Zone::room("R", 10.0));
        b.add_transit(Transit::door_out("Hatch", 0.3), r, out);
        assert!(b.build().is_ok());
    }
}

// ── JSON loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use evac_core::{TransitSign, ZoneSign};

    use crate::{GraphError, load_building_json, load_building_reader, load_building_str};

    const TWO_FLOORS: &str = r#"{
        "name": "two floors",
        "zones": [
            { "key": "out", "name": "Outside",  "sign": "outside" },
            { "key": "r1",  "name": "Room 1",   "sign": "room",      "z_level": 0.0, "area": 30.0, "people": 12 },
            { "key": "s1",  "name": "Stair 1F", "sign": "staircase", "z_level": 0.0, "area": 12.0 },
            { "key": "s2",  "name": "Stair 2F", "sign": "staircase", "z_level": 3.3, "area": 12.0 }
        ],
        "transits": [
            { "key": "d1", "name": "Exit",  "sign": "door_way_out", "width": 1.2, "zones": ["s1", "out"] },
            { "key": "d2", "name": "D-1",   "sign": "door_way_int", "width": 0.9, "zones": ["r1", "s1"] },
            { "key": "f1", "name": "Stair", "sign": "door_way",                   "zones": ["s1", "s2"] }
        ]
    }"#;

    #[test]
    fn parses_zones_and_transits() {
        let bld = load_building_str(TWO_FLOORS).unwrap();
        assert_eq!(bld.name, "two floors");
        assert_eq!(bld.zones.len(), 4);
        assert_eq!(bld.transits.len(), 3);

        let r1 = bld.zone(bld.zone_by_key("r1").unwrap());
        assert_eq!(r1.sign, ZoneSign::Room);
        assert_eq!(r1.numofpeople, 12.0);

        let s2 = bld.zone(bld.zone_by_key("s2").unwrap());
        assert_eq!(s2.z_level, 3.3);

        let d1 = bld.transit(bld.transit_by_key("d1").unwrap());
        assert_eq!(d1.sign, TransitSign::DoorWayOut);
        assert_eq!(d1.width, 1.2);
    }

    #[test]
    fn missing_stair_width_is_derived() {
        let bld = load_building_str(TWO_FLOORS).unwrap();
        let f1 = bld.transit(bld.transit_by_key("f1").unwrap());
        assert!((f1.width - 12.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn reader_and_file_agree() {
        let from_reader = load_building_reader(std::io::Cursor::new(TWO_FLOORS)).unwrap();

        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(TWO_FLOORS.as_bytes()).unwrap();
        let from_file = load_building_json(f.path()).unwrap();

        assert_eq!(from_reader.zones, from_file.zones);
        assert_eq!(from_reader.transits, from_file.transits);
    }

    #[test]
    fn unknown_zone_key() {
        let json = r#"{
            "zones": [ { "key": "out", "sign": "outside" } ],
            "transits": [ { "key": "d", "width": 1.0, "zones": ["out", "ghost"] } ]
        }"#;
        assert!(matches!(load_building_str(json), Err(GraphError::UnknownZone { .. })));
    }

    #[test]
    fn room_without_area() {
        let json = r#"{ "zones": [ { "key": "out", "sign": "outside" }, { "key": "r", "sign": "room" } ] }"#;
        assert!(matches!(load_building_str(json), Err(GraphError::MissingArea(_))));
    }

    #[test]
    fn duplicate_zone_key() {
        let json = r#"{ "zones": [
            { "key": "out", "sign": "outside" },
            { "key": "r", "sign": "room", "area": 1.0 },
            { "key": "r", "sign": "room", "area": 2.0 }
        ] }"#;
        assert!(matches!(load_building_str(json), Err(GraphError::DuplicateKey(k)) if k == "r"));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(load_building_str("{ not json"), Err(GraphError::Json(_))));
    }

    #[test]
    fn missing_file() {
        let err = load_building_json(std::path::Path::new("/definitely/not/here.json"));
        assert!(matches!(err, Err(GraphError::Io(_))));
    }
}
