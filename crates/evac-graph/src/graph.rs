//! Zone adjacency in CSR layout.
//!
//! Every transit contributes two directed edges, one from each end.  Given a
//! `ZoneId z`, its outgoing edges occupy
//!
//! ```text
//! edge_transit[ zone_out_start[z] .. zone_out_start[z+1] ]
//! edge_to     [ zone_out_start[z] .. zone_out_start[z+1] ]
//! ```
//!
//! Edges are stable-sorted by source zone, so within one zone they keep the
//! order in which their transits were registered.  The wavefront visits
//! neighbours in exactly this order, which makes every tick deterministic.

use evac_core::{TransitId, ZoneId};

/// Immutable zone graph.  Built by [`BuildingBuilder`](crate::BuildingBuilder).
#[derive(Clone, Debug, Default)]
pub struct ZoneGraph {
    /// CSR row pointer.  Length = `node_count + 1`.
    pub zone_out_start: Vec<u32>,
    /// Transit crossed by each edge.
    pub edge_transit:   Vec<TransitId>,
    /// Zone on the far side of each edge.
    pub edge_to:        Vec<ZoneId>,

    outside: ZoneId,
}

impl ZoneGraph {
    /// Build the CSR arrays for `zone_count` zones from `(transit, [a, b])`
    /// pairs given in registration order.
    pub(crate) fn from_links(
        zone_count: usize,
        links: impl IntoIterator<Item = (TransitId, [ZoneId; 2])>,
        outside: ZoneId,
    ) -> Self {
        let mut raw: Vec<(ZoneId, TransitId, ZoneId)> = Vec::new();
        for (t, [a, b]) in links {
            raw.push((a, t, b));
            raw.push((b, t, a));
        }
        // Stable: same-source edges keep registration order.
        raw.sort_by_key(|&(from, _, _)| from.0);

        let edge_transit: Vec<TransitId> = raw.iter().map(|e| e.1).collect();
        let edge_to:      Vec<ZoneId>    = raw.iter().map(|e| e.2).collect();

        let mut zone_out_start = vec![0u32; zone_count + 1];
        for &(from, _, _) in &raw {
            zone_out_start[from.index() + 1] += 1;
        }
        for i in 1..=zone_count {
            zone_out_start[i] += zone_out_start[i - 1];
        }
        debug_assert_eq!(zone_out_start[zone_count] as usize, raw.len());

        Self { zone_out_start, edge_transit, edge_to, outside }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.zone_out_start.len().saturating_sub(1)
    }

    /// Directed edge count (twice the number of transits).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// The unique outside sink.
    #[inline]
    pub fn outside(&self) -> ZoneId {
        self.outside
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `(transit, neighbour)` pairs of `zone`, in registration order.
    #[inline]
    pub fn neighbors(&self, zone: ZoneId) -> impl Iterator<Item = (TransitId, ZoneId)> + '_ {
        let start = self.zone_out_start[zone.index()] as usize;
        let end   = self.zone_out_start[zone.index() + 1] as usize;
        (start..end).map(move |i| (self.edge_transit[i], self.edge_to[i]))
    }

    #[inline]
    pub fn out_degree(&self, zone: ZoneId) -> usize {
        let start = self.zone_out_start[zone.index()] as usize;
        let end   = self.zone_out_start[zone.index() + 1] as usize;
        end - start
    }
}
