//! Independent simulations run side by side.

use evac_flow::SpeedModel;

use crate::{EvacSummary, Sim, SimObserver};

/// Run every simulation in `sims` to completion, each with its own observer
/// from `make_observer`.
///
/// Simulations share nothing, so with the `parallel` Cargo feature they run
/// on Rayon's thread pool.  Results are returned in input order either way.
pub fn run_batch<M, O, F>(sims: &mut [Sim<M>], make_observer: F) -> Vec<(EvacSummary, O)>
where
    M: SpeedModel,
    O: SimObserver + Send,
    F: Fn(&Sim<M>) -> O + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        sims.iter_mut()
            .map(|sim| {
                let mut observer = make_observer(sim);
                let summary = sim.run(&mut observer);
                (summary, observer)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        sims.par_iter_mut()
            .map(|sim| {
                let mut observer = make_observer(sim);
                let summary = sim.run(&mut observer);
                (summary, observer)
            })
            .collect()
    }
}
