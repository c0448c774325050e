//! RNG module - piece sources
//!
//! The session asks a [`PieceSource`] for every new piece. Play uses
//! [`UniformSource`], which picks each kind independently and uniformly from
//! the catalog. Tests inject a [`SequenceSource`] to script exact piece orders.
//!
//! Also provides a simple LCG so seeded games are reproducible.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Supplies the kind of each newly spawned piece
pub trait PieceSource {
    fn next_kind(&mut self) -> ShapeKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> ShapeKind {
        (**self).next_kind()
    }
}

/// Uniform choice from the catalog on every draw
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<ShapeKind>,
    next: usize,
}

impl SequenceSource {
    /// Returns `None` for an empty list
    pub fn new(kinds: &[ShapeKind]) -> Option<Self> {
        if kinds.is_empty() {
            return None;
        }
        Some(Self {
            kinds: kinds.to_vec(),
            next: 0,
        })
    }

    /// Always the same kind
    pub fn repeat(kind: ShapeKind) -> Self {
        Self {
            kinds: vec![kind],
            next: 0,
        }
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
