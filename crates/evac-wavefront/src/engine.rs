//! The wavefront: one tick of potential propagation and people flow.

use tracing::trace;

use evac_core::{EvacConfig, ZoneId};
use evac_flow::{SpeedModel, StandardSpeedModel};
use evac_graph::{Building, Transit, Zone, ZoneGraph};

use crate::exchange;

/// One expansion recorded by [`Wavefront::pops`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pop {
    pub zone:      ZoneId,
    /// The zone's potential when it left the queue.
    pub potential: Option<f64>,
}

/// Propagates the potential field outward from the outside sink and moves
/// people towards it, one tick per [`step`](Self::step).
///
/// # Type parameter
///
/// `M` is the density/speed model.  The default is
/// [`StandardSpeedModel`]; swap it at compile time for different curves.
///
/// # Buffers
///
/// The worklist and the pop trace are kept between ticks so their
/// allocations are reused.  [`pops`](Self::pops) exposes the order in which
/// zones were expanded during the last tick.
pub struct Wavefront<M: SpeedModel = StandardSpeedModel> {
    pub config: EvacConfig,
    pub model:  M,

    worklist: Vec<ZoneId>,
    pops:     Vec<Pop>,
}

impl Wavefront<StandardSpeedModel> {
    /// Wavefront with the standard speed curves.
    pub fn with_config(config: EvacConfig) -> Self {
        Self::new(config, StandardSpeedModel::default())
    }
}

impl Default for Wavefront<StandardSpeedModel> {
    fn default() -> Self {
        Self::with_config(EvacConfig::default())
    }
}

impl<M: SpeedModel> Wavefront<M> {
    pub fn new(config: EvacConfig, model: M) -> Self {
        Self { config, model, worklist: Vec::new(), pops: Vec::new() }
    }

    /// Zones in the order they became the expanding zone during the last
    /// `step`.  The outside sink, which always expands first, is not listed.
    pub fn pops(&self) -> &[Pop] {
        &self.pops
    }

    /// Just the zone IDs of [`pops`](Self::pops).
    pub fn popped_zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.pops.iter().map(|p| p.zone)
    }

    /// [`step`](Self::step) over a whole building.
    pub fn step_building(&mut self, building: &mut Building) {
        let Building { graph, zones, transits, .. } = building;
        self.step(graph, zones, transits);
    }

    /// Advance every zone and transit by one tick.
    ///
    /// Resets the per-tick fields, then expands zones starting at the outside
    /// sink.  For each unvisited, unblocked transit of the expanding zone the
    /// zone on the other side gives people to the expanding zone, and is
    /// queued for expansion itself if it has further exits.  The queue is
    /// kept sorted by potential (unreached last, ties in insertion order).
    pub fn step(&mut self, graph: &ZoneGraph, zones: &mut [Zone], transits: &mut [Transit]) {
        reset(graph.outside(), zones, transits);
        self.worklist.clear();
        self.pops.clear();

        let mut current = graph.outside();
        let mut remaining = zones.len();

        loop {
            for (tid, giver) in graph.neighbors(current) {
                let transit = &transits[tid.index()];
                if transit.is_visited || transit.is_blocked {
                    continue;
                }

                let (potential, flow) = {
                    let receiving = &zones[current.index()];
                    let giving    = &zones[giver.index()];
                    let v = exchange::speed_at_exit(&self.config, &self.model, receiving, giving, transit.width);
                    (
                        exchange::potential_at_speed(receiving, giving, v),
                        exchange::flow_at_speed(&self.config, receiving, giving, transit, v),
                    )
                };

                let receiving = &mut zones[current.index()];
                receiving.potential = Some(potential);
                receiving.numofpeople += flow;

                let giving = &mut zones[giver.index()];
                giving.numofpeople -= flow;
                giving.is_visited = true;
                let giver_blocked = giving.is_blocked;

                let transit = &mut transits[tid.index()];
                transit.nop_proceeding = flow;
                transit.is_visited = true;

                if graph.out_degree(giver) > 1 && !giver_blocked && !self.worklist.contains(&giver) {
                    self.worklist.push(giver);
                }
            }

            // Stable: equal potentials keep queue order.
            let zones_ro: &[Zone] = zones;
            self.worklist.sort_by(|a, b| {
                let pa = zones_ro[a.index()].potential.unwrap_or(f64::INFINITY);
                let pb = zones_ro[b.index()].potential.unwrap_or(f64::INFINITY);
                pa.total_cmp(&pb)
            });

            if !self.worklist.is_empty() {
                current = self.worklist.remove(0);
                self.pops.push(Pop { zone: current, potential: zones[current.index()].potential });
            }

            if remaining == 0 {
                break;
            }
            remaining -= 1;
        }

        trace!(expanded = self.pops.len(), "wavefront step finished");
    }

    // ── Element-level helpers ─────────────────────────────────────────────

    pub fn speed_in_element(&self, receiving: &Zone, giver: &Zone) -> f64 {
        exchange::speed_in_element(&self.config, &self.model, receiving, giver)
    }

    pub fn speed_at_exit(&self, receiving: &Zone, giver: &Zone, width: f64) -> f64 {
        exchange::speed_at_exit(&self.config, &self.model, receiving, giver, width)
    }

    pub fn potential_element(&self, receiving: &Zone, giver: &Zone, transit: &Transit) -> f64 {
        exchange::potential_element(&self.config, &self.model, receiving, giver, transit)
    }

    pub fn part_people_flow(&self, receiving: &Zone, giver: &Zone, transit: &Transit) -> f64 {
        exchange::part_people_flow(&self.config, &self.model, receiving, giver, transit)
    }
}

/// Clear per-tick state.  `is_blocked` is left alone.
fn reset(outside: ZoneId, zones: &mut [Zone], transits: &mut [Transit]) {
    for z in zones.iter_mut() {
        z.is_visited = false;
        z.potential = None;
    }
    zones[outside.index()].potential = Some(0.0);

    for t in transits.iter_mut() {
        t.is_visited = false;
        t.nop_proceeding = 0.0;
    }
}
