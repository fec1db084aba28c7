// DOM hooks and canvas styling used by the web frontend.

// Element lookup
pub const SHAPE_SELECTOR: &str = ".shape";
pub const GLOW_ELEMENT_ID: &str = "mouseGlow";
pub const PARTICLE_CANVAS_ID: &str = "clickParticleCanvas";

// Particle canvas sits above the page and never eats pointer events
pub const PARTICLE_CANVAS_Z_INDEX: u32 = 9999;
pub const PARTICLE_CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
];

// Events that end a press; a cancelled touch/pen stream never sends pointerup
pub const PRESS_END_EVENTS: &[&str] = &["pointerup", "pointercancel"];

// Config overrides are read from `<body data-fx-*>`
pub const CONFIG_ATTR_PREFIX: &str = "data-fx-";

// Frame statistics
pub const STATS_INTERVAL_SEC: f32 = 5.0;

// Date.now() has ms granularity; the settle timer waits one extra ms
pub const SETTLE_TIMER_SLACK_MS: i32 = 1;
