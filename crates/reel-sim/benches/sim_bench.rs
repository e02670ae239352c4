use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reel_core::{Complexity, Scene, SceneStatus, VfxIntensity, VfxShot, VfxShotStatus};
use reel_sim::{run_simulation, ScenarioCatalog, ScenarioId, ScenarioSelection, SimulationParams};
use rust_decimal::Decimal;

fn build_script(n_scenes: u32) -> (Vec<Scene>, Vec<VfxShot>) {
    let kinds = Complexity::ALL;
    let mut scenes = Vec::with_capacity(n_scenes as usize);
    let mut shots = Vec::new();
    for n in 1..=n_scenes {
        let complexity = kinds[(n as usize) % kinds.len()];
        let vfx_required = n % 3 == 0;
        scenes.push(Scene {
            id: format!("s{n}"),
            scene_number: n,
            description: format!("Scene {n}"),
            location: if n % 4 == 0 {
                "Vizag Shipyard".into()
            } else {
                "Ramoji Film City".into()
            },
            complexity,
            estimated_cost: Decimal::new(10 + (n as i64 % 70), 1),
            estimated_duration: 2.0 + (n % 10) as f64,
            vfx_required,
            vfx_intensity: vfx_required.then(|| VfxIntensity::from_index(n as usize % 4)),
            status: SceneStatus::Planned,
            cast_needed: vec!["Pushpa".into(), "Henchmen".into()],
        });
        if vfx_required {
            shots.push(VfxShot {
                id: format!("v{n}"),
                scene_number: n,
                description: String::new(),
                estimated_cost: Decimal::new(5, 1),
                complexity: VfxIntensity::Medium,
                status: VfxShotStatus::Pending,
                vendor: None,
            });
        }
    }
    (scenes, shots)
}

fn bench_simulation(c: &mut Criterion) {
    let (scenes, shots) = build_script(200);
    let catalog = ScenarioCatalog::default();
    let selection: ScenarioSelection = ScenarioId::ALL.into_iter().collect();
    let params = SimulationParams {
        action_multiplier: 1.4,
        vfx_scale: 1.5,
        song_count: 3,
    };
    c.bench_function("simulate 200 scenes, all scenarios", |b| {
        b.iter(|| {
            let _ = black_box(run_simulation(
                &scenes, &shots, &selection, &params, &catalog,
            ));
        })
    });
}

criterion_group!(benches, bench_simulation);
criterion_main!(benches);
