use crate::domain::state::{Course, Platform};

/// Ground line of the default course.
pub const DEFAULT_GROUND_Y: f32 = 315.0;

// Table order matters: the first matching platform wins a landing.
const DEFAULT_PLATFORMS: [Platform; 7] = [
    Platform::new(150.0, 240.0, 100.0, 10.0),
    Platform::new(350.0, 190.0, 120.0, 10.0),
    Platform::new(550.0, 140.0, 100.0, 10.0),
    Platform::new(100.0, 170.0, 80.0, 10.0),
    Platform::new(300.0, 90.0, 150.0, 10.0),
    Platform::new(500.0, 210.0, 120.0, 10.0),
    Platform::new(700.0, 160.0, 100.0, 10.0),
];

impl Default for Course {
    fn default() -> Self {
        Self {
            ground_y: DEFAULT_GROUND_Y,
            platforms: DEFAULT_PLATFORMS.to_vec(),
        }
    }
}
