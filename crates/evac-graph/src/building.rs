//! The building arena and its builder.

use tracing::warn;

use evac_core::{TransitId, ZoneId, ZoneSign};

use crate::element::{OUTSIDE_AREA, Transit, Zone};
use crate::graph::ZoneGraph;
use crate::{GraphError, GraphResult};

/// Openings narrower than this (m) are accepted but reported.
pub const MIN_REASONABLE_WIDTH: f64 = 0.5;

// ── Building ──────────────────────────────────────────────────────────────────

/// Owner of every zone and transit record plus the graph joining them.
///
/// `zones[id.index()]` and `transits[id.index()]` are the records with that
/// ID.  Fields are `pub` so the wavefront can borrow the arenas and the
/// graph disjointly.
#[derive(Clone, Debug)]
pub struct Building {
    pub name:     String,
    pub zones:    Vec<Zone>,
    pub transits: Vec<Transit>,
    pub graph:    ZoneGraph,
}

impl Building {
    #[inline]
    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.index()]
    }

    #[inline]
    pub fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        &mut self.zones[id.index()]
    }

    #[inline]
    pub fn transit(&self, id: TransitId) -> &Transit {
        &self.transits[id.index()]
    }

    #[inline]
    pub fn transit_mut(&mut self, id: TransitId) -> &mut Transit {
        &mut self.transits[id.index()]
    }

    #[inline]
    pub fn outside_id(&self) -> ZoneId {
        self.graph.outside()
    }

    pub fn zone_by_key(&self, key: &str) -> Option<ZoneId> {
        self.zones.iter().find(|z| z.key == key).map(|z| z.id)
    }

    pub fn transit_by_key(&self, key: &str) -> Option<TransitId> {
        self.transits.iter().find(|t| t.key == key).map(|t| t.id)
    }

    pub fn interior_zones(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter().filter(|z| z.sign.is_interior())
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Summed area of rooms and staircases.
    pub fn interior_area(&self) -> f64 {
        self.interior_zones().map(|z| z.area).sum()
    }

    /// People still inside the building.
    pub fn interior_people(&self) -> f64 {
        self.interior_zones().map(|z| z.numofpeople).sum()
    }

    /// People who have reached the outside.
    pub fn evacuated_people(&self) -> f64 {
        self.zone(self.outside_id()).numofpeople
    }

    /// People in interior zones the wavefront reached during the last tick.
    /// Once this is zero nobody can leave any more.
    pub fn reachable_people(&self) -> f64 {
        self.interior_zones()
            .filter(|z| z.is_visited)
            .map(|z| z.numofpeople)
            .sum()
    }
}

// ── BuildingBuilder ───────────────────────────────────────────────────────────

/// Construct a [`Building`] incrementally, then call [`build`](Self::build).
///
/// Validation is deferred to `build()`, which checks the outside sink, zone
/// areas and transit ends/widths, and lays out the CSR graph.
///
/// # Example
///
/// ```
/// use evac_graph::{BuildingBuilder, Transit, Zone};
///
/// let mut b = BuildingBuilder::new("office");
/// let outside = b.add_outside();
/// let hall    = b.add_zone(Zone::room("Hall", 40.0).with_people(20.0));
/// b.add_transit(Transit::door_out("Main exit", 1.2), hall, outside);
/// let building = b.build().unwrap();
/// assert_eq!(building.graph.node_count(), 2);
/// assert_eq!(building.graph.edge_count(), 2); // both directions
/// ```
pub struct BuildingBuilder {
    name:      String,
    zones:     Vec<Zone>,
    raw_links: Vec<RawLink>,
}

struct RawLink {
    transit:      Transit,
    ends:         [ZoneId; 2],
    derive_width: bool,
}

impl BuildingBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), zones: Vec::new(), raw_links: Vec::new() }
    }

    pub fn with_capacity(name: impl Into<String>, zones: usize, transits: usize) -> Self {
        Self {
            name:      name.into(),
            zones:     Vec::with_capacity(zones),
            raw_links: Vec::with_capacity(transits),
        }
    }

    /// Add a zone and return its `ZoneId` (sequential from 0).
    pub fn add_zone(&mut self, mut zone: Zone) -> ZoneId {
        let id = ZoneId(self.zones.len() as u32);
        zone.id = id;
        if zone.sign == ZoneSign::Outside {
            zone.area = OUTSIDE_AREA;
        }
        self.zones.push(zone);
        id
    }

    /// Add the outside sink.
    pub fn add_outside(&mut self) -> ZoneId {
        self.add_zone(Zone::outside())
    }

    /// Join zones `a` and `b` with `transit`, using its own width.
    pub fn add_transit(&mut self, transit: Transit, a: ZoneId, b: ZoneId) -> TransitId {
        self.push_link(transit, [a, b], false)
    }

    /// Join two staircases on different floors.  The width is derived at
    /// `build()` as `sqrt((area_a + area_b) / 2)`.
    pub fn add_interfloor(&mut self, transit: Transit, a: ZoneId, b: ZoneId) -> TransitId {
        self.push_link(transit, [a, b], true)
    }

    fn push_link(&mut self, mut transit: Transit, ends: [ZoneId; 2], derive_width: bool) -> TransitId {
        let id = TransitId(self.raw_links.len() as u32);
        transit.id = id;
        transit.zones = ends;
        self.raw_links.push(RawLink { transit, ends, derive_width });
        id
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.index())
    }

    pub fn zone_count(&self) -> usize { self.zones.len() }
    pub fn transit_count(&self) -> usize { self.raw_links.len() }

    /// Validate and produce a [`Building`].
    pub fn build(self) -> GraphResult<Building> {
        // ── Outside sink ──────────────────────────────────────────────────
        let outsides: Vec<ZoneId> = self
            .zones
            .iter()
            .filter(|z| z.is_outside())
            .map(|z| z.id)
            .collect();
        let outside = match outsides.as_slice() {
            [] => return Err(GraphError::NoOutside),
            [o] => *o,
            many => return Err(GraphError::MultipleOutside(many.len())),
        };

        // ── Zone areas ────────────────────────────────────────────────────
        for z in self.zones.iter().filter(|z| z.sign.is_interior()) {
            if !(z.area > 0.0) || !z.area.is_finite() {
                return Err(GraphError::NonPositiveArea { name: z.name.clone(), area: z.area });
            }
        }

        // ── Transits ──────────────────────────────────────────────────────
        let mut transits = Vec::with_capacity(self.raw_links.len());
        for RawLink { mut transit, ends, derive_width } in self.raw_links {
            let [a, b] = ends;
            let (za, zb) = match (self.zones.get(a.index()), self.zones.get(b.index())) {
                (Some(za), Some(zb)) => (za, zb),
                (None, _) => return Err(unknown_zone(&transit, a)),
                (_, None) => return Err(unknown_zone(&transit, b)),
            };
            if a == b {
                return Err(GraphError::SelfLoop(transit.name));
            }

            if derive_width {
                if za.sign != ZoneSign::Staircase || zb.sign != ZoneSign::Staircase {
                    return Err(GraphError::MissingWidth { name: transit.name });
                }
                transit.width = ((za.area + zb.area) / 2.0).sqrt();
            } else if !(transit.width > 0.0) {
                return Err(GraphError::NonPositiveWidth {
                    name:  transit.name,
                    width: transit.width,
                });
            }

            if transit.width < MIN_REASONABLE_WIDTH {
                warn!(
                    transit = %transit.name,
                    width = transit.width,
                    "opening is narrower than {MIN_REASONABLE_WIDTH} m"
                );
            }
            transits.push(transit);
        }

        let graph = ZoneGraph::from_links(
            self.zones.len(),
            transits.iter().map(|t| (t.id, t.zones)),
            outside,
        );

        Ok(Building { name: self.name, zones: self.zones, transits, graph })
    }
}

fn unknown_zone(transit: &Transit, zone: ZoneId) -> GraphError {
    GraphError::UnknownZone { transit: transit.name.clone(), zone: zone.to_string() }
}
