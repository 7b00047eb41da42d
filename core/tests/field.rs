use hoshikuzu_core::field::{
    adaptive_count, generate_entities, step_entities, Entity, FieldConfig, ParticleField,
    OPACITY_TIERS, SIZE_TIER_COUNT, SIZE_TIER_STEP, STEP_DT_CAP_MS,
};

fn config(target: u32) -> FieldConfig {
    FieldConfig {
        target_count: target,
        icon_count: 6,
        seed: 0x5EED_0001,
        ..FieldConfig::default()
    }
}

fn assert_in_bounds(entities: &[Entity], width: f32, height: f32) {
    for entity in entities {
        assert!(
            entity.x >= 0.0 && entity.x <= (width - entity.size).max(0.0),
            "x out of bounds: {} (size {}, width {})",
            entity.x,
            entity.size,
            width
        );
        assert!(
            entity.y >= 0.0 && entity.y <= (height - entity.size).max(0.0),
            "y out of bounds: {} (size {}, height {})",
            entity.y,
            entity.size,
            height
        );
    }
}

#[test]
fn adaptive_count_large_viewport_keeps_target() {
    // 1200x800 at 8000 px^2 per entity supports 120; target wins.
    assert_eq!(adaptive_count(1200.0, 800.0, 50), 50);
}

#[test]
fn adaptive_count_small_viewport_caps() {
    assert_eq!(adaptive_count(200.0, 200.0, 50), 5);
    assert_eq!(adaptive_count(0.0, 800.0, 50), 0);
    assert_eq!(adaptive_count(1200.0, 0.0, 50), 0);
}

#[test]
fn regenerate_replaces_whole_set_and_respects_target() {
    let mut field = ParticleField::new(config(50));
    field.regenerate(1200.0, 800.0);
    assert_eq!(field.entities().len(), 50);
    assert_in_bounds(field.entities(), 1200.0, 800.0);

    field.regenerate(200.0, 200.0);
    assert!(field.entities().len() <= 5);
    assert_in_bounds(field.entities(), 200.0, 200.0);
}

#[test]
fn zero_area_yields_empty_set() {
    let mut field = ParticleField::new(config(50));
    field.regenerate(0.0, 600.0);
    assert!(field.entities().is_empty());
    // Harmless to step an empty field.
    field.step(16.0);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = generate_entities(&config(40), 1000.0, 700.0);
    let b = generate_entities(&config(40), 1000.0, 700.0);
    assert_eq!(a, b);

    let mut other = config(40);
    other.seed = 0xBEEF;
    let c = generate_entities(&other, 1000.0, 700.0);
    assert_ne!(a, c);
}

#[test]
fn size_and_opacity_vary_cyclically() {
    let entities = generate_entities(&config(12), 1200.0, 800.0);
    for (index, entity) in entities.iter().enumerate() {
        let expected_size = FieldConfig::default().base_size
            + (index as u32 % SIZE_TIER_COUNT) as f32 * SIZE_TIER_STEP;
        assert_eq!(entity.size, expected_size);
        assert_eq!(entity.opacity, OPACITY_TIERS[index % OPACITY_TIERS.len()]);
    }
}

#[test]
fn entities_never_leave_bounds() {
    let mut field = ParticleField::new(config(50));
    field.regenerate(640.0, 480.0);
    // Uneven dt sequence, long enough for many wall hits.
    let dts = [16.0, 33.0, 7.0, 50.0, 120.0, 16.6];
    for step in 0..2000 {
        field.step(dts[step % dts.len()]);
        assert_in_bounds(field.entities(), 640.0, 480.0);
    }
}

#[test]
fn trajectory_is_reproducible() {
    let mut a = ParticleField::new(config(30));
    let mut b = ParticleField::new(config(30));
    a.regenerate(800.0, 600.0);
    b.regenerate(800.0, 600.0);
    for _ in 0..500 {
        a.step(16.7);
        b.step(16.7);
    }
    assert_eq!(a.entities(), b.entities());
}

#[test]
fn reflection_clamps_and_flips_velocity() {
    let mut entities = vec![Entity {
        x: 760.0,
        y: 100.0,
        vx: 0.5,
        vy: 0.0,
        size: 32.0,
        rotation_deg: 0.0,
        rotation_speed: 0.0,
        opacity: 0.15,
        icon_index: 0,
    }];
    // 40ms at 0.5 px/ms crosses the right boundary (max x = 768).
    step_entities(&mut entities, 800.0, 600.0, 40.0);
    assert_eq!(entities[0].x, 768.0);
    assert_eq!(entities[0].vx, -0.5);
}

#[test]
fn corner_hit_flips_both_axes() {
    let mut entities = vec![Entity {
        x: 1.0,
        y: 1.0,
        vx: -0.2,
        vy: -0.2,
        size: 16.0,
        rotation_deg: 0.0,
        rotation_speed: 0.0,
        opacity: 0.15,
        icon_index: 0,
    }];
    step_entities(&mut entities, 400.0, 400.0, 30.0);
    assert_eq!(entities[0].x, 0.0);
    assert_eq!(entities[0].y, 0.0);
    assert!(entities[0].vx > 0.0);
    assert!(entities[0].vy > 0.0);
}

#[test]
fn dt_is_capped() {
    let mut entities = vec![Entity {
        x: 0.0,
        y: 0.0,
        vx: 0.1,
        vy: 0.0,
        size: 16.0,
        rotation_deg: 0.0,
        rotation_speed: 0.0,
        opacity: 0.15,
        icon_index: 0,
    }];
    // A huge pause must not translate into a huge jump.
    step_entities(&mut entities, 4000.0, 400.0, 10_000.0);
    assert_eq!(entities[0].x, 0.1 * STEP_DT_CAP_MS);
}
