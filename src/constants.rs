// Scene, animation and carousel tuning constants.

// Glyph alphabet the floating symbols are drawn from
pub const SYMBOL_ALPHABET: [&str; 12] = [
    "+", "÷", "∑", "π", "∞", "=", "√", "≥", "≤", "∫", "%", "Ω",
];

// How many symbols a scene shows at once (distinct, chosen at load)
pub const SYMBOL_COUNT: usize = 3;

// World-space slots the chosen symbols are placed into, one per index
pub const SYMBOL_SLOTS: [[f32; 3]; 3] = [[-6.0, 1.0, 0.0], [1.0, -0.5, 0.0], [5.0, 2.0, 0.0]];

// Per-symbol angular increments (radians per frame, before SPIN_RATE_SCALE)
pub const SPIN_SPEED_X_MIN: f32 = 0.005;
pub const SPIN_SPEED_X_SPAN: f32 = 0.005;
pub const SPIN_SPEED_Y_MIN: f32 = 0.005;
pub const SPIN_SPEED_Y_SPAN: f32 = 0.002;
pub const SPIN_RATE_SCALE: f32 = 0.1;

// Vertical bobbing about each symbol's base height
pub const BOB_AMPLITUDE: f32 = 0.3;
pub const BOB_RATE: f32 = 100.0; // scales a symbol's y spin speed into rad/sec of bob phase

// Outline copy is the same mesh, uniformly enlarged
pub const OUTLINE_SCALE: f32 = 1.05;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Extruded text geometry
pub const TEXT_SIZE: f32 = 1.5;
pub const TEXT_DEPTH: f32 = 0.3;
pub const FLATTEN_TOLERANCE: f32 = 0.01; // lyon fill tolerance, in scaled glyph units

// Material and light rig
pub const SYMBOL_COLOR: [f32; 3] = [0.545, 0.576, 0.525]; // muted sage
pub const OUTLINE_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const POINT_LIGHT_POS: [f32; 3] = [10.0, 10.0, 10.0];

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 1.5;

// Carousel scroll extremes are detected within this tolerance
pub const EDGE_TOLERANCE_PX: f64 = 1.0;

// Typeface asset served next to the page
pub const TYPEFACE_URL: &str = "manrope.typeface.json";
