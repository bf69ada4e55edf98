use crate::models::color_tag::ColorTag;
use crate::models::event::EventId;
use crate::models::settings::ColorAssignment;

// Fibonacci hashing constant (2^64 / golden ratio)
const ID_HASH_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

/// Pick the colour tag for a freshly created event.
///
/// `created_so_far` counts every event the store has ever created, deleted
/// ones included, so rotation does not repeat after deletions.
pub(crate) fn pick_color(
    policy: ColorAssignment,
    id: EventId,
    created_so_far: usize,
) -> ColorTag {
    match policy {
        ColorAssignment::Rotating => ColorTag::from_index(created_so_far),
        ColorAssignment::Hashed => {
            let hashed = (id as u64).wrapping_mul(ID_HASH_MULTIPLIER) >> 32;
            ColorTag::from_index(hashed as usize)
        }
    }
}
