use crate::domain::state::{Course, Platform};
use crate::domain::tuning::Hitbox;

/// What the actor came to rest on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Index into the course platform table.
    Platform(usize),
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub surface: Surface,
    /// y of the surface the actor's feet rest on.
    pub surface_y: f32,
}

/// Decides whether a vertical move from `prev_y` to `next_y` lands the actor.
///
/// Platforms are checked first, in table order, and the first match wins even
/// when a later platform is closer. A platform only catches an actor whose
/// feet were at or above its top edge before the move and reach or pass it
/// after, so fast falls cannot tunnel through thin platforms. The ground is
/// checked last and catches anything at or below it.
pub fn resolve(
    actor_x: f32,
    prev_y: f32,
    next_y: f32,
    hitbox: Hitbox,
    course: &Course,
) -> Option<Landing> {
    let feet_before = prev_y + hitbox.height;
    let feet_after = next_y + hitbox.height;

    let platform_hit = course.platforms.iter().position(|platform| {
        overlaps_horizontally(actor_x, hitbox.width, platform)
            && feet_before <= platform.y
            && feet_after >= platform.y
    });

    if let Some(index) = platform_hit {
        return Some(Landing {
            surface: Surface::Platform(index),
            surface_y: course.platforms[index].y,
        });
    }

    if feet_after >= course.ground_y {
        return Some(Landing {
            surface: Surface::Ground,
            surface_y: course.ground_y,
        });
    }

    None
}

// Inclusive on both edges: flush contact counts as overlap.
fn overlaps_horizontally(actor_x: f32, actor_width: f32, platform: &Platform) -> bool {
    actor_x + actor_width >= platform.x && actor_x <= platform.x + platform.width
}
