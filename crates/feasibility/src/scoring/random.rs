const SEED_MULTIPLIER: i128 = 31_415_927;
const SEED_MODULUS: i128 = 2_147_483_647;
const STREAM_INCREMENT: u32 = 0x6D2B_79F5;
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Maps a project id onto the seed space of the score stream.
///
/// The product is formed in `i128` so that `i64::MIN` has a well-defined
/// absolute value.
pub fn derive_seed(project_id: i64) -> u32 {
    let seed = (i128::from(project_id) * SEED_MULTIPLIER).abs() % SEED_MODULUS;
    // Always below 2^31 after the modulus.
    seed as u32
}

/// Mulberry32 stream. Every call to [`compute_scores`](super::compute_scores)
/// owns a fresh instance, so no state is shared between calls.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn for_project(project_id: i64) -> Self {
        Self::new(derive_seed(project_id))
    }

    /// Next draw in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(STREAM_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / UNIT_SCALE
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_unit())
    }
}
