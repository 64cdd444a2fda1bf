use crystal_core::{
    CrystalSetConfig, CrystalSetRegistry, GrowthStage, PcgRng, RegistryError, RngOracle,
    RollContext, compute_seed, compute_yield, roll_advance, roll_yield, try_advance,
};

fn config(chance: u32, normal: f32, max: f32) -> CrystalSetConfig {
    CrystalSetConfig::builder("redstone")
        .drop("minecraft:redstone")
        .growth_chance(chance)
        .normal_drop(normal)
        .max_drop(max)
        .build_with_active(true)
        .unwrap()
}

#[test]
fn advancement_rate_converges_to_one_over_chance() {
    let rng = PcgRng;
    for chance in [1u32, 2, 5, 8] {
        let config = config(chance, 2.0, 4.0);
        let trials = 40_000u64;
        let advanced = (0..trials)
            .filter(|&tick| {
                let seed = compute_seed(0xC0FFEE, tick, chance, RollContext::Growth);
                roll_advance(GrowthStage::Empty, &config, &rng, seed) == GrowthStage::Small
            })
            .count();

        let rate = advanced as f64 / trials as f64;
        let expected = 1.0 / chance as f64;
        assert!(
            (rate - expected).abs() < 0.01,
            "chance {chance}: rate {rate} expected {expected}"
        );
    }
}

#[test]
fn empty_reaches_cluster_in_about_four_times_chance_ticks() {
    let rng = PcgRng;
    let config = config(5, 2.0, 4.0);
    let runs = 2_000u32;
    let mut total_ticks = 0u64;

    for run in 0..runs {
        let mut stage = GrowthStage::Empty;
        let mut tick = 0u64;
        while stage != GrowthStage::Cluster {
            let seed = compute_seed(7, tick, run, RollContext::Growth);
            let next = roll_advance(stage, &config, &rng, seed);
            assert!(next == stage || Some(next) == stage.successor());
            stage = next;
            tick += 1;
        }
        total_ticks += tick;
    }

    // Four successes at p = 1/5 take 20 ticks on average.
    let mean = total_ticks as f64 / runs as f64;
    assert!((mean - 20.0).abs() < 1.5, "mean ticks {mean}");
}

#[test]
fn cluster_never_changes() {
    let config = config(1, 2.0, 4.0);
    for draw in 0..16 {
        assert_eq!(try_advance(GrowthStage::Cluster, &config, draw), GrowthStage::Cluster);
    }
}

#[test]
fn yield_is_monotone_and_bounded() {
    let config = config(5, 1.5, 4.5);
    let rng = PcgRng;
    let mut draws: Vec<f32> = (0..5_000u64)
        .map(|i| rng.unit_f32(compute_seed(3, i, 0, RollContext::Yield)))
        .collect();
    draws.sort_by(f32::total_cmp);

    let counts: Vec<u32> = draws.iter().map(|&d| compute_yield(&config, d)).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    assert!(counts.iter().all(|&c| (1..=5).contains(&c)));
}

#[test]
fn rolled_yield_matches_reference_bounds() {
    let config = config(5, 2.0, 4.0);
    let rng = PcgRng;
    let mut seen = [false; 5];
    for i in 0..1_000u64 {
        let count = roll_yield(&config, &rng, compute_seed(11, i, 0, RollContext::Yield));
        assert!((2..=4).contains(&count));
        seen[count as usize] = true;
    }
    assert!(seen[2] && seen[3] && seen[4]);
}

#[test]
fn registry_keeps_single_entry_after_duplicate() {
    let mut registry = CrystalSetRegistry::new();
    registry.register(config(5, 2.0, 4.0)).unwrap();
    assert!(matches!(
        registry.register(config(3, 1.0, 2.0)),
        Err(RegistryError::DuplicateId(id)) if id == "redstone"
    ));
    assert_eq!(registry.all().filter(|c| c.id() == "redstone").count(), 1);
    assert_eq!(registry.get("redstone").unwrap().growth_chance(), 5);
}
