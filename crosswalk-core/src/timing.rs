/*
 * Compiled-in timing of the crossing cycle, in milliseconds (clock ticks).
 *
 * There is no runtime configuration: changing these means rebuilding the
 * firmware.
 */

/// Period of the timer interrupt that drives the clock.
pub const TICK_PERIOD_MS: u32 = 1;

/// Yellow phase, and the flashing tail of the walk phase.
pub const SHORT_INTERVAL: u32 = 1500;

/// Minimum green before a button press is honoured, and the steady walk.
pub const LONG_INTERVAL: u32 = 5000;

/// Half-period of the flashing crosswalk lamp.
pub const FLASH_INTERVAL: u32 = 150;
