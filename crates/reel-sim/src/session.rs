//! A base snapshot with its baseline and a memo of simulated results.
//!
//! Slider movement re-runs the same few inputs over and over; the session
//! keys finished results by (selection, slider bits). Results are identical
//! with or without the cache. A drag produces one key per distinct slider
//! value, so the memo is emptied once it reaches [`MAX_CACHED_RUNS`].

use reel_core::{Production, Scene, VfxShot};
use std::collections::HashMap;
use tracing::debug;

use crate::compare::{compare, Comparison};
use crate::engine::{compute_simulation, run_simulation, SimulationResult};
use crate::params::SimulationParams;
use crate::scenario::{ScenarioCatalog, ScenarioSelection};

/// Upper bound on memoized runs held by a session.
pub const MAX_CACHED_RUNS: usize = 256;

type RunKey = (ScenarioSelection, (u64, u64, u8));

pub struct SimulationSession {
    scenes: Vec<Scene>,
    vfx_shots: Vec<VfxShot>,
    catalog: ScenarioCatalog,
    baseline: SimulationResult,
    cache: HashMap<RunKey, SimulationResult>,
}

impl SimulationSession {
    /// Take ownership of a snapshot and compute its baseline once.
    pub fn new(scenes: Vec<Scene>, vfx_shots: Vec<VfxShot>, catalog: ScenarioCatalog) -> Self {
        let baseline = compute_simulation(&scenes, &vfx_shots);
        Self {
            scenes,
            vfx_shots,
            catalog,
            baseline,
            cache: HashMap::new(),
        }
    }

    pub fn from_production(p: &Production, catalog: ScenarioCatalog) -> Self {
        Self::new(p.scenes.clone(), p.vfx_shots.clone(), catalog)
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn baseline(&self) -> &SimulationResult {
        &self.baseline
    }

    pub fn simulate(
        &mut self,
        selection: &ScenarioSelection,
        params: &SimulationParams,
    ) -> SimulationResult {
        let key = (selection.clone(), params.key());
        if let Some(hit) = self.cache.get(&key) {
            debug!("simulation cache hit");
            return hit.clone();
        }
        debug!(cached = self.cache.len(), "simulation cache miss");
        let run = run_simulation(
            &self.scenes,
            &self.vfx_shots,
            selection,
            params,
            &self.catalog,
        );
        if self.cache.len() >= MAX_CACHED_RUNS {
            debug!(evicted = self.cache.len(), "simulation cache full, cleared");
            self.cache.clear();
        }
        self.cache.insert(key, run.result.clone());
        run.result
    }

    /// Simulate and compare against the baseline.
    pub fn compare(
        &mut self,
        selection: &ScenarioSelection,
        params: &SimulationParams,
    ) -> Comparison {
        let simulated = self.simulate(selection, params);
        compare(&self.baseline, &simulated)
    }

    pub fn cached_runs(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioId;
    use crate::test_support::scene;
    use reel_core::Complexity;

    fn session() -> SimulationSession {
        let scenes = vec![
            scene(6, Complexity::Song),
            scene(7, Complexity::Dialogue),
            scene(8, Complexity::Song),
        ];
        SimulationSession::new(scenes, vec![], ScenarioCatalog::default())
    }

    #[test]
    fn memoizes_identical_inputs() {
        let mut s = session();
        let sel: ScenarioSelection = [ScenarioId::CutItemSong].into_iter().collect();
        let p = SimulationParams::default();
        let a = s.simulate(&sel, &p);
        let b = s.simulate(&sel, &p);
        assert_eq!(a, b);
        assert_eq!(s.cached_runs(), 1);

        let other = SimulationParams {
            action_multiplier: 1.5,
            ..p
        };
        s.simulate(&sel, &other);
        assert_eq!(s.cached_runs(), 2);
        s.clear_cache();
        assert_eq!(s.cached_runs(), 0);
        assert_eq!(s.simulate(&sel, &p), a);
    }

    #[test]
    fn slider_drag_keeps_cache_bounded() {
        let mut s = session();
        let sel = ScenarioSelection::new();
        for i in 0..(MAX_CACHED_RUNS * 4) {
            let p = SimulationParams {
                action_multiplier: 1.0 + i as f64 * 1e-4,
                ..SimulationParams::default()
            };
            s.simulate(&sel, &p);
            assert!(s.cached_runs() <= MAX_CACHED_RUNS);
        }
        assert!(s.cached_runs() > 0);

        // a cleared entry is recomputed to the same value
        let p = SimulationParams {
            action_multiplier: 1.0,
            ..SimulationParams::default()
        };
        let again = s.simulate(&sel, &p);
        let fresh = run_simulation(s.scenes(), &[], &sel, &p, &ScenarioCatalog::default());
        assert_eq!(again, fresh.result);
    }

    #[test]
    fn baseline_is_unmodified_collection() {
        let mut s = session();
        assert_eq!(s.baseline().scene_count, 3);
        let sel: ScenarioSelection = [ScenarioId::RemoveSwitzerland].into_iter().collect();
        let c = s.compare(&sel, &SimulationParams::default());
        assert_eq!(c.simulated.scene_count, 2);
        assert_eq!(c.baseline.scene_count, 3);
        assert_eq!(s.scenes().len(), 3);
    }
}
