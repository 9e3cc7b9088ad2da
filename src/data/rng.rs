use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

pub struct RngPlugin;
impl Plugin for RngPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GlobalRng::default());
    }
}

/// Single RNG stream for all decorative randomness. Seeded so the backdrop
/// looks the same on every launch; nothing downstream depends on the values.
#[derive(Resource)]
pub struct GlobalRng {
    pub uniform: Pcg64Mcg,
}

impl Default for GlobalRng {
    fn default() -> Self {
        GlobalRng {
            uniform: Pcg64Mcg::seed_from_u64(54321),
        }
    }
}
