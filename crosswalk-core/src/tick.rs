//! Points on the millisecond tick counter.

/// A reading of the tick counter.
///
/// The counter wraps at `u32::MAX` (roughly every 49.7 days), so ticks are
/// not `Ord`: comparing two absolute readings is meaningless
/// across a wrap. Use [`Tick::since`] to get a duration instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Tick(u32);

impl Tick {
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Correct across a single counter wrap, as long as the real interval is
    /// shorter than a full counter period.
    #[inline]
    #[must_use]
    pub const fn since(self, earlier: Tick) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// The tick `millis` after this one, wrapping.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Self(self.0.wrapping_add(millis))
    }
}
