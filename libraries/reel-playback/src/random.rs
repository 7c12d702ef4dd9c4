//! Random video selection
//!
//! The random source is supplied by the caller so sessions can be seeded for
//! deterministic runs.

use rand::seq::SliceRandom;
use rand::Rng;
use reel_core::Video;

/// Pick one candidate uniformly at random
pub fn choose_video<'a, R>(candidates: &[&'a Video], rng: &mut R) -> Option<&'a Video>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng).copied()
}
