use farm_core::{
    AbilityConfig, CheckKind, FilterError, Rejection, ResourceKind, ResourceSnapshot, Status,
    Verdict, evaluate, is_usable,
};

fn valid_ability() -> AbilityConfig {
    AbilityConfig::new("valid")
}

fn player() -> ResourceSnapshot {
    ResourceSnapshot::builder("Mykezero")
        .status(Status::Standing)
        .hp(1000, 100)
        .mp(10000, 100)
        .tp(100)
        .build()
}

fn usable(snapshot: &ResourceSnapshot, ability: &AbilityConfig) -> bool {
    is_usable(Some(snapshot), ability).unwrap()
}

/// Readings spread across both scales, including the band edges.
const SAMPLES: [u32; 9] = [0, 1, 25, 99, 100, 999, 1000, 2999, 3000];

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_a_cure_with_full_mp_is_usable() {
    let ability = AbilityConfig::new("Cure")
        .with_mp_cost(1)
        .with_mp_reserve(0, 100);
    let snapshot = ResourceSnapshot::builder("x").mp(1, 100).build();

    assert_eq!(is_usable(Some(&snapshot), &ability), Ok(true));
}

#[test]
fn scenario_b_too_little_mp() {
    let ability = valid_ability().with_mp_cost(1);
    let mut snapshot = player();
    snapshot.mp_current = 0;

    assert!(!usable(&snapshot, &ability));
}

#[test]
fn scenario_c_mp_outside_reserve() {
    let ability = valid_ability().with_mp_reserve(0, 25);
    let mut snapshot = player();
    snapshot.mp_percent = 100;

    assert!(!usable(&snapshot, &ability));
}

#[test]
fn scenario_d_tp_reserve_fails_while_mp_reserve_passes() {
    let ability = valid_ability()
        .with_mp_reserve(1, 1)
        .with_tp_reserve(1000, 1000);
    let mut snapshot = player();
    snapshot.mp_percent = 1;
    snapshot.tp_current = 1;

    assert_eq!(
        evaluate(Some(&snapshot), &ability),
        Ok(Verdict::Rejected(Rejection::OutsideReserve {
            resource: ResourceKind::Tp,
            reading: 1,
            band: farm_core::ReserveBand::exact(1000),
        }))
    );
}

#[test]
fn scenario_e_disabled_with_perfect_stats() {
    let ability = valid_ability().with_enabled(false);
    assert!(!usable(&player(), &ability));
}

#[test]
fn too_little_tp() {
    let ability = valid_ability().with_tp_cost(1);
    let mut snapshot = player();
    snapshot.tp_current = 0;

    assert!(!usable(&snapshot, &ability));
}

#[test]
fn tp_outside_reserve() {
    let ability = valid_ability().with_tp_reserve(1000, 1000);
    let mut snapshot = player();
    snapshot.tp_current = 1;

    assert!(!usable(&snapshot, &ability));
}

#[test]
fn blank_name_is_unusable() {
    for name in ["", " ", "\t\n  "] {
        assert!(!usable(&player(), &AbilityConfig::new(name)));
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn disabled_is_never_usable() {
    for &reading in &SAMPLES {
        let snapshot = ResourceSnapshot::builder("x")
            .mp(reading, reading.min(100))
            .tp(reading)
            .build();
        let ability = valid_ability()
            .with_enabled(false)
            .with_mp_cost(reading)
            .with_tp_cost(reading);

        assert_eq!(is_usable(Some(&snapshot), &ability), Ok(false));
        assert_eq!(is_usable(None, &ability), Ok(false));
    }
}

#[test]
fn unaffordable_cost_is_never_usable() {
    for &cost in SAMPLES.iter().filter(|c| **c > 0) {
        let snapshot = ResourceSnapshot::builder("x")
            .mp(cost - 1, 100)
            .tp(cost - 1)
            .build();

        assert!(!usable(&snapshot, &valid_ability().with_mp_cost(cost)));
        assert!(!usable(&snapshot, &valid_ability().with_tp_cost(cost)));
    }
}

#[test]
fn exact_cost_is_affordable() {
    for &cost in SAMPLES.iter() {
        let snapshot = ResourceSnapshot::builder("x")
            .mp(cost, 100)
            .tp(cost)
            .build();

        assert!(usable(&snapshot, &valid_ability().with_mp_cost(cost)));
        assert!(usable(&snapshot, &valid_ability().with_tp_cost(cost)));
    }
}

#[test]
fn mp_reserve_applies_to_free_abilities() {
    let ability = valid_ability().with_mp_reserve(40, 60);
    assert_eq!(ability.mp_cost, 0);

    for percent in 0..=100 {
        let snapshot = ResourceSnapshot::builder("x").mp(0, percent).build();
        assert_eq!(
            usable(&snapshot, &ability),
            (40..=60).contains(&percent),
            "mp_percent={percent}"
        );
    }
}

#[test]
fn tp_reserve_applies_to_free_abilities() {
    let ability = valid_ability().with_tp_reserve(1000, 2000);
    assert_eq!(ability.tp_cost, 0);

    for &tp in &SAMPLES {
        let snapshot = ResourceSnapshot::builder("x").tp(tp).build();
        assert_eq!(
            usable(&snapshot, &ability),
            (1000..=2000).contains(&tp),
            "tp_current={tp}"
        );
    }
}

#[test]
fn reserve_bounds_are_inclusive() {
    let ability = valid_ability()
        .with_mp_reserve(20, 80)
        .with_tp_reserve(1000, 2000);

    for (mp, tp) in [(20, 1000), (80, 2000), (20, 2000), (80, 1000)] {
        let snapshot = ResourceSnapshot::builder("x").mp(0, mp).tp(tp).build();
        assert!(usable(&snapshot, &ability), "mp%={mp} tp={tp}");
    }

    for (mp, tp) in [(19, 1500), (81, 1500), (50, 999), (50, 2001)] {
        let snapshot = ResourceSnapshot::builder("x").mp(0, mp).tp(tp).build();
        assert!(!usable(&snapshot, &ability), "mp%={mp} tp={tp}");
    }
}

#[test]
fn reversed_band_is_never_usable() {
    let mp_reversed = valid_ability().with_mp_reserve(60, 40);
    let tp_reversed = valid_ability().with_tp_reserve(2000, 1000);

    for &reading in &SAMPLES {
        let snapshot = ResourceSnapshot::builder("x")
            .mp(reading, reading.min(100))
            .tp(reading)
            .build();
        assert!(!usable(&snapshot, &mp_reversed));
        assert!(!usable(&snapshot, &tp_reversed));
    }
}

// ============================================================================
// MP/TP reserve wiring
// ============================================================================

/// The TP band must be read against absolute TP, never against MP%.
#[test]
fn tp_reserve_is_not_checked_against_mp_percent() {
    // MP% = 50 would sit inside [0, 100] but TP 2500 is outside [0, 100].
    let ability = valid_ability().with_tp_reserve(0, 100);
    let snapshot = ResourceSnapshot::builder("x").mp(500, 50).tp(2500).build();
    assert!(!usable(&snapshot, &ability));

    // TP 1000 meets an exact 1000 tier; MP% could never reach 1000.
    let ability = valid_ability().with_tp_reserve(1000, 1000);
    let snapshot = ResourceSnapshot::builder("x").mp(500, 50).tp(1000).build();
    assert!(usable(&snapshot, &ability));
}

/// The MP band must be read against MP%, never against absolute MP or TP.
#[test]
fn mp_reserve_is_not_checked_against_absolute_values() {
    // Absolute MP (800) and TP (10) are both outside [20, 30]; MP% 25 is inside.
    let ability = valid_ability().with_mp_reserve(20, 30);
    let snapshot = ResourceSnapshot::builder("x").mp(800, 25).tp(10).build();
    assert!(usable(&snapshot, &ability));

    // MP% 90 is outside even though TP 25 would fit.
    let snapshot = ResourceSnapshot::builder("x").mp(800, 90).tp(25).build();
    assert!(!usable(&snapshot, &ability));
}

// ============================================================================
// Contract
// ============================================================================

#[test]
fn missing_snapshot_is_error_once_resources_are_needed() {
    assert_eq!(
        is_usable(None, &valid_ability().with_tp_cost(1000)),
        Err(FilterError::MissingSnapshot {
            check: CheckKind::TpAffordable
        })
    );
    assert_eq!(
        is_usable(None, &valid_ability()),
        Err(FilterError::MissingSnapshot {
            check: CheckKind::MpReserve
        })
    );
}

#[test]
fn evaluation_is_repeatable() {
    let ability = valid_ability().with_mp_cost(10).with_tp_reserve(0, 500);
    let snapshot = player();

    let first = evaluate(Some(&snapshot), &ability);
    for _ in 0..100 {
        assert_eq!(evaluate(Some(&snapshot), &ability), first);
    }
}
