//! Deterministic pseudo-random numbers for scramble generation.
//!
//! A small `xoroshiro128+` generator seeded through SplitMix64. Not
//! cryptographically secure; it exists so that a scramble seed replays
//! the exact same move sequence on every platform.

/// Stateful `xoroshiro128+` generator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Expand a single 64-bit seed into generator state via SplitMix64.
    ///
    /// Identical seeds produce identical draw sequences.
    pub(crate) fn seeded(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        if state == [0, 0] {
            // xoroshiro cannot leave the all-zero state.
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Prng { state }
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// The next integer in the inclusive range `[min, max]`, without
    /// modulo bias.
    pub(crate) fn next_in(&mut self, min: u64, max: u64) -> u64 {
        assert!(min <= max, "invalid range: {min}..={max}");
        let span = max.wrapping_sub(min).wrapping_add(1);
        if span == 0 {
            // The full u64 range wraps span to zero.
            return self.next_u64();
        }
        if span == 1 {
            return min;
        }

        let value = if span.is_power_of_two() {
            self.next_u64() & (span - 1)
        } else {
            let bound = u64::MAX - u64::MAX % span;
            loop {
                let candidate = self.next_u64();
                if candidate < bound {
                    break candidate % span;
                }
            }
        };

        min + value
    }
}
