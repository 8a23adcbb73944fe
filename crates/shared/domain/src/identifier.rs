//! Random account identifiers.

use rand::Rng;

/// Draws 64-bit identifiers from the thread-local CSPRNG.
///
/// Each call uses the calling thread's generator, so the type is freely
/// shareable. Uniqueness is probabilistic; collision checks belong to whoever
/// owns the stored identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierGenerator;

impl IdentifierGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a non-zero identifier (0 means "unassigned").
    pub fn generate(&self) -> u64 {
        rand::thread_rng().gen_range(1..=u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_no_collisions_across_trials() {
        let generator = IdentifierGenerator::new();
        let ids: HashSet<u64> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_never_zero() {
        let generator = IdentifierGenerator::new();
        assert!((0..1000).all(|_| generator.generate() != 0));
    }

    #[test]
    fn test_concurrent_generation() {
        let generator = IdentifierGenerator::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(move || {
                    (0..250).map(|_| generator.generate()).collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<u64> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 1000);
    }
}
