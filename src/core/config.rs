// TODO: some way to override these from user code.
pub const EPSILON: f32 = 1e-5;

/// Squared distance below which two points count as coincident.
pub const POINT_MERGE_EPSILON: f32 = 1e-7;

/// Obstacle depth at which a same-lane crash triggers.
pub const COLLISION_DEPTH: f32 = 18.0;
/// Depth past which the obstacle wraps back to the start of the track.
pub const TRACK_DEPTH: f32 = 20.0;
/// Scroll speed at race start and after a crash, in depth units per tick.
pub const BASE_SCROLL_SPEED: f32 = 0.05;

/// Gravity-sensor reading (y axis) that registers as a lane-switch motion.
pub const TILT_THRESHOLD: f32 = 2.5;

/// Countdown phase before the race proper starts.
pub const START_DELAY_MS: u32 = 4000;
/// Cadence of the survival clock's timer thread.
pub const TIMER_TICK_MS: u32 = 1000;

pub const RANKING_SIZE: usize = 5;
/// Largest time the MM:SS formatter can represent.
pub const MAX_DISPLAY_TIME_MS: u32 = 357_539;

/// Speed-up milestones: (total clock millis, new scroll speed).
pub const DIFFICULTY_SCHEDULE: [(u32, f32); 9] = [
    (35_000, 0.1),
    (65_000, 0.2),
    (95_000, 0.25),
    (125_000, 0.35),
    (155_000, 0.4),
    (185_000, 0.55),
    (215_000, 0.65),
    (245_000, 0.75),
    (275_000, 0.9),
];
