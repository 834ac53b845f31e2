/*
 * The millisecond clock.
 *
 * A periodic timer interrupt calls `on_tick` once per millisecond; the main
 * loop calls `now`. The counter is the only value shared between interrupt
 * and thread mode, so it lives in an atomic. There is exactly one writer
 * (the interrupt handler), so the increment is a plain load/store pair and
 * works on cores without read-modify-write atomics too.
 *
 * Configuring the timer itself is board-specific and lives in the firmware.
 */

use core::sync::atomic::{AtomicU32, Ordering};

use crate::ports::ElapsedClock;
use crate::tick::Tick;

pub struct MillisecondClock {
    ticks: AtomicU32,
}

impl MillisecondClock {
    pub const fn new() -> Self {
        MillisecondClock {
            ticks: AtomicU32::new(0),
        }
    }

    /*
     * Call from the timer interrupt only. Must not be called concurrently
     * with itself: a second writer would lose increments.
     */
    #[inline]
    pub fn on_tick(&self) {
        let ticks = self.ticks.load(Ordering::Relaxed);
        self.ticks.store(ticks.wrapping_add(1), Ordering::Release);
    }

    /// Current tick count. A single aligned word load, so it can never
    /// observe a half-written counter.
    #[inline]
    pub fn now(&self) -> Tick {
        Tick::new(self.ticks.load(Ordering::Acquire))
    }
}

impl Default for MillisecondClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedClock for MillisecondClock {
    fn now(&self) -> Tick {
        MillisecondClock::now(self)
    }
}

#[cfg(test)]
impl MillisecondClock {
    fn starting_at(ticks: u32) -> Self {
        MillisecondClock {
            ticks: AtomicU32::new(ticks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(MillisecondClock::new().now(), Tick::new(0));
    }

    #[test]
    fn test_each_tick_advances_by_one() {
        let clock = MillisecondClock::new();
        for expected in 1..=1000 {
            clock.on_tick();
            assert_eq!(clock.now().get(), expected);
        }
    }

    #[test]
    fn test_wraps_at_max() {
        let clock = MillisecondClock::starting_at(u32::MAX);
        clock.on_tick();
        assert_eq!(clock.now(), Tick::new(0));
    }

    #[test]
    fn test_concurrent_reads_are_never_torn() {
        const TICKS: u32 = 200_000;
        let clock = MillisecondClock::starting_at(u32::MAX - TICKS / 2);
        let start = clock.now();

        std::thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..TICKS {
                    clock.on_tick();
                }
            });

            // Every observed value must be one some completed increment wrote,
            // so elapsed time seen by the reader only ever moves forward.
            let mut last = 0;
            while last < TICKS {
                let elapsed = clock.now().since(start);
                assert!(elapsed >= last, "went backwards: {elapsed} < {last}");
                assert!(elapsed <= TICKS, "read beyond last write: {elapsed}");
                last = elapsed;
            }
        });

        assert_eq!(clock.now().since(start), TICKS);
    }

    proptest! {
        #[test]
        fn prop_elapsed_counts_ticks(start: u32, before in 0u32..2_000, between in 0u32..20_000) {
            let clock = MillisecondClock::starting_at(start);
            for _ in 0..before {
                clock.on_tick();
            }
            let t1 = clock.now();
            for _ in 0..between {
                clock.on_tick();
            }
            let t2 = clock.now();
            prop_assert_eq!(t2.since(t1), between);
        }
    }
}
