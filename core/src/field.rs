//! Floating-icon particle field: batch generation and per-frame physics.

pub const DENSITY_PX_PER_ENTITY: f32 = 8000.0;

pub const SIZE_TIER_STEP: f32 = 8.0;
pub const SIZE_TIER_COUNT: u32 = 3;
pub const OPACITY_TIERS: [f32; 4] = [0.15, 0.16, 0.17, 0.18];

pub const CELL_JITTER_FRAC: f32 = 0.6;
pub const ROTATION_SPEED_MAX_DEG_MS: f32 = 0.03;

// 50ms caps a single step well below one entity size at configured speeds.
pub const STEP_DT_CAP_MS: f32 = 50.0;

pub const TARGET_COUNT_DEFAULT: u32 = 50;
pub const MIN_SPACING_DEFAULT: f32 = 90.0;
pub const SPEED_DEFAULT: f32 = 0.015;
pub const BASE_SIZE_DEFAULT: f32 = 28.0;

pub fn splitmix32(value: u32) -> u32 {
    let mut z = value.wrapping_add(0x9E37_79B9);
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt.wrapping_mul(0x632B_E5AB));
    (mixed >> 8) as f32 / (1u32 << 24) as f32
}

pub fn rand_range(seed: u32, salt: u32, min: f32, max: f32) -> f32 {
    min + (max - min) * rand_unit(seed, salt)
}

pub fn normalize_angle(mut angle: f32) -> f32 {
    angle %= 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    /// Pixels per millisecond.
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub rotation_deg: f32,
    /// Degrees per millisecond.
    pub rotation_speed: f32,
    pub opacity: f32,
    pub icon_index: usize,
}

/// Immutable per animation instance; a config change means a new instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub target_count: u32,
    pub min_spacing: f32,
    pub speed: f32,
    pub base_size: f32,
    pub icon_count: usize,
    pub seed: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            target_count: TARGET_COUNT_DEFAULT,
            min_spacing: MIN_SPACING_DEFAULT,
            speed: SPEED_DEFAULT,
            base_size: BASE_SIZE_DEFAULT,
            icon_count: 0,
            seed: 0,
        }
    }
}

/// Entity count for a given surface, capped by available area.
pub fn adaptive_count(width: f32, height: f32, target: u32) -> u32 {
    if width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let by_area = (width * height / DENSITY_PX_PER_ENTITY).floor() as u32;
    target.min(by_area)
}

pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    entities: Vec<Entity>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            entities: Vec::new(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Full replacement of the entity set for the given surface size.
    pub fn regenerate(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.entities = generate_entities(&self.config, self.width, self.height);
    }

    pub fn step(&mut self, dt_ms: f32) {
        step_entities(&mut self.entities, self.width, self.height, dt_ms);
    }
}

pub fn generate_entities(config: &FieldConfig, width: f32, height: f32) -> Vec<Entity> {
    let count = adaptive_count(width, height, config.target_count) as usize;
    if count == 0 {
        return Vec::new();
    }
    let cell = config.min_spacing.max(1.0);
    let cols = ((width / cell).floor() as usize).max(1);
    let rows = ((height / cell).floor() as usize).max(1);
    let mut cells: Vec<usize> = (0..cols * rows).collect();
    shuffle(&mut cells, config.seed);
    let count = count.min(cells.len());

    let mut entities = Vec::with_capacity(count);
    for (index, &cell_index) in cells.iter().take(count).enumerate() {
        let salt = index as u32 * 8;
        let col = (cell_index % cols) as f32;
        let row = (cell_index / cols) as f32;
        let size = config.base_size + (index as u32 % SIZE_TIER_COUNT) as f32 * SIZE_TIER_STEP;
        let max_x = (width - size).max(0.0);
        let max_y = (height - size).max(0.0);
        let x = (col * cell + rand_unit(config.seed, salt) * cell * CELL_JITTER_FRAC)
            .clamp(0.0, max_x);
        let y = (row * cell + rand_unit(config.seed, salt + 1) * cell * CELL_JITTER_FRAC)
            .clamp(0.0, max_y);
        let angle = rand_range(config.seed, salt + 2, 0.0, std::f32::consts::TAU);
        let rotation = rand_range(config.seed, salt + 3, 0.0, 360.0);
        let rotation_speed = rand_range(
            config.seed,
            salt + 4,
            -ROTATION_SPEED_MAX_DEG_MS,
            ROTATION_SPEED_MAX_DEG_MS,
        );
        entities.push(Entity {
            x,
            y,
            vx: angle.cos() * config.speed,
            vy: angle.sin() * config.speed,
            size,
            rotation_deg: rotation,
            rotation_speed,
            opacity: OPACITY_TIERS[index % OPACITY_TIERS.len()],
            icon_index: if config.icon_count > 0 {
                index % config.icon_count
            } else {
                0
            },
        });
    }
    entities
}

fn shuffle(items: &mut [usize], seed: u32) {
    for i in (1..items.len()).rev() {
        let j = (rand_unit(seed, 0x5AF7 ^ i as u32) * (i as f32 + 1.0)) as usize;
        items.swap(i, j.min(i));
    }
}

/// Advance all entities by one capped time increment, reflecting at bounds.
pub fn step_entities(entities: &mut [Entity], width: f32, height: f32, dt_ms: f32) {
    let dt = dt_ms.clamp(0.0, STEP_DT_CAP_MS);
    if dt == 0.0 {
        return;
    }
    for entity in entities.iter_mut() {
        entity.x += entity.vx * dt;
        entity.y += entity.vy * dt;
        entity.rotation_deg = normalize_angle(entity.rotation_deg + entity.rotation_speed * dt);

        let max_x = (width - entity.size).max(0.0);
        if entity.x < 0.0 {
            entity.x = 0.0;
            entity.vx = entity.vx.abs();
        } else if entity.x > max_x {
            entity.x = max_x;
            entity.vx = -entity.vx.abs();
        }
        let max_y = (height - entity.size).max(0.0);
        if entity.y < 0.0 {
            entity.y = 0.0;
            entity.vy = entity.vy.abs();
        } else if entity.y > max_y {
            entity.y = max_y;
            entity.vy = -entity.vy.abs();
        }
    }
}
