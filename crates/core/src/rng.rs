//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven kinds with equal probability; there is no
//! bag or history. Also provides a simple LCG so games are reproducible from a
//! seed, and a scripted source for deterministic scenarios.

use crate::types::PieceKind;

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Pick one element uniformly; `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
    }

    /// Current internal state (re-seeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplies the kind of every newly spawned piece
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform random piece generator
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: SimpleRng,
    seed: u32,
}

impl Randomizer {
    /// Create a new randomizer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PieceSource for Randomizer {
    fn next_kind(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed sequence of kinds, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl ScriptedSource {
    /// Panics on an empty script.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted source needs at least one piece");
        Self { kinds, index: 0 }
    }

    /// The same kind forever
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
