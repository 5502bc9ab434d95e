use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// Deterministic SHAKE256 stream.
///
/// The whole stream is a function of the seed bytes, so two generators built
/// from the same seed replay the same draws regardless of which thread owns
/// them.
pub struct ONDRng {
    state: [u8; 32],
    step: u64,
}

impl ONDRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Independent stream keyed by `label`, leaving `self` untouched.
    pub fn derive(&self, label: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[&self.state, label, b"OND_DERIVE"], &mut state);
        Self { state, step: 0 }
    }

    /// Uniform draw in [0, 1]. `ctx` domain-separates draws taken for
    /// different purposes from one stream.
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        shake(&[&state, &step_bytes, b"QSIM"], &mut self.state);

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        if self.state[0] < 16 {
            let state = self.state;
            shake(&[&state, b"SKIP"], &mut self.state);
        }

        (u64::from_be_bytes(out) as f64) / (u64::MAX as f64)
    }

    /// Index drawn with probability proportional to `weights`.
    ///
    /// Returns `None` when the weights carry no mass.
    pub fn next_weighted(&mut self, weights: &[f64], ctx: &[u8]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }

        let mut x = self.next_f64(ctx) * total;
        let mut last = None;
        for (idx, &w) in weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            if x < w {
                return Some(idx);
            }
            x -= w;
            last = Some(idx);
        }
        // x == total after rounding
        last
    }

    pub fn steps(&self) -> u64 {
        self.step
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}

#[cfg(test)]
mod tests {
    use super::ONDRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = ONDRng::new(b"seed");
        let mut b = ONDRng::new(b"seed");
        for _ in 0..32 {
            assert_eq!(a.next_f64(b"T").to_bits(), b.next_f64(b"T").to_bits());
        }
        assert_eq!(a.steps(), 32);
    }

    #[test]
    fn derived_streams_differ_by_label() {
        let root = ONDRng::new(b"seed");
        let mut a = root.derive(b"a");
        let mut b = root.derive(b"b");
        let mut a2 = root.derive(b"a");

        let xa = a.next_f64(b"T");
        assert_ne!(xa.to_bits(), b.next_f64(b"T").to_bits());
        assert_eq!(xa.to_bits(), a2.next_f64(b"T").to_bits());
    }

    #[test]
    fn weighted_draw_skips_empty_bins() {
        let mut rng = ONDRng::new(b"weights");
        for _ in 0..200 {
            let idx = rng.next_weighted(&[0.0, 0.25, 0.0, 0.75], b"W").unwrap();
            assert!(idx == 1 || idx == 3, "idx = {}", idx);
        }
        assert_eq!(rng.next_weighted(&[0.0, 0.0], b"W"), None);
    }
}
