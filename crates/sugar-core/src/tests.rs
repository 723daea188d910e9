//! Unit tests for sugar-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ForagerId, PatchId};

    #[test]
    fn index_roundtrip() {
        let id = ForagerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ForagerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ForagerId(0) < ForagerId(1));
        assert!(PatchId(100) > PatchId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ForagerId::INVALID.0, u32::MAX);
        assert_eq!(PatchId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ForagerId(7).to_string(), "ForagerId(7)");
    }
}

#[cfg(test)]
mod entity {
    use crate::{Entity, EntityKind, ForagerId, PatchId};

    #[test]
    fn kind_mapping() {
        assert_eq!(Entity::Patch(PatchId(0)).kind(), EntityKind::SugarPatch);
        assert_eq!(Entity::Forager(ForagerId(0)).kind(), EntityKind::Forager);
    }

    #[test]
    fn mobility() {
        assert!(EntityKind::Forager.is_mobile());
        assert!(!EntityKind::SugarPatch.is_mobile());
    }

    #[test]
    fn display() {
        assert_eq!(Entity::Forager(ForagerId(3)).to_string(), "forager 3");
        assert_eq!(Entity::Patch(PatchId(12)).to_string(), "patch 12");
    }
}

#[cfg(test)]
mod pos {
    use crate::GridPos;

    #[test]
    fn dist_sq_axis_aligned() {
        let a = GridPos::new(2, 3);
        let b = GridPos::new(2, 7);
        assert_eq!(a.dist_sq(b), 16);
    }

    #[test]
    fn dist_sq_symmetric() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert_eq!(a.dist_sq(b), 25);
        assert_eq!(b.dist_sq(a), 25);
    }

    #[test]
    fn manhattan() {
        let a = GridPos::new(1, 1);
        let b = GridPos::new(4, 3);
        assert_eq!(a.manhattan(b), 5);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(7).to_string(), "T7");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(50..100);
            assert!((50..100).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn shuffle_deterministic() {
        let mut r1 = SimRng::new(9);
        let mut r2 = SimRng::new(9);
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        r1.shuffle(&mut a);
        r2.shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "child streams should diverge");
    }
}

#[cfg(test)]
mod config {
    use crate::ModelConfig;

    #[test]
    fn default_is_classic_scenario() {
        let cfg = ModelConfig::default();
        assert_eq!(cfg.width, 50);
        assert_eq!(cfg.height, 50);
        assert_eq!(cfg.initial_population, 100);
        assert_eq!(cfg.cell_count(), 2500);
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let cfg = ModelConfig { width: 0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = ModelConfig { height: 0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_population() {
        let cfg = ModelConfig { initial_population: 0, ..ModelConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_population_above_cell_count() {
        // The grid is multi-occupancy; crowding is allowed.
        let cfg = ModelConfig {
            width: 2,
            height: 2,
            initial_population: 50,
            ..ModelConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
