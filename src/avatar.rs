//! Avatar assignment for users materialized in the store.

use rand::Rng;

use crate::users::{RawUser, User};

/// Number of distinct avatar images on the avatar host.
pub const AVATAR_COUNT: u32 = 70;

const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?img=";

/// Source of uniform draws in `[0, 1)`.
pub trait DrawSource: Send + Sync {
    fn draw(&self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngDraw;

impl DrawSource for ThreadRngDraw {
    fn draw(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Always returns the same draw. Used to make avatars assertable.
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl DrawSource for FixedDraw {
    fn draw(&self) -> f64 {
        self.0
    }
}

/// Map a unit draw onto an avatar index in `1..=AVATAR_COUNT`.
///
/// Out-of-range draws are clamped rather than producing a missing image.
pub fn avatar_index(draw: f64) -> u32 {
    let scaled = (draw * AVATAR_COUNT as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        return 1;
    }
    (scaled as u32).min(AVATAR_COUNT - 1) + 1
}

pub fn avatar_url(index: u32) -> String {
    format!("{}{}", AVATAR_BASE_URL, index)
}

/// Pick a fresh avatar URL.
pub fn random_avatar(source: &dyn DrawSource) -> String {
    avatar_url(avatar_index(source.draw()))
}

/// Attach a randomly selected avatar to a raw record.
pub fn assign_avatar(raw: RawUser, source: &dyn DrawSource) -> User {
    raw.with_avatar(random_avatar(source))
}

/// Returns the avatar index if `url` is a well-formed avatar URL.
pub fn parse_avatar_url(url: &str) -> Option<u32> {
    let index: u32 = url.strip_prefix(AVATAR_BASE_URL)?.parse().ok()?;
    (1..=AVATAR_COUNT).contains(&index).then_some(index)
}
