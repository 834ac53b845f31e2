/*
 * Drives the millisecond clock from the Cortex-M SysTick timer.
 *
 * Embassy's STM32 time driver is not enabled in this firmware, so SysTick is
 * free and the clock does not depend on any chip peripheral.
 */

use cortex_m::peripheral::SYST;
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::exception;
use crosswalk_core::MillisecondClock;
use crosswalk_core::timing::TICK_PERIOD_MS;
use defmt::info;

// embassy_stm32::init with the default config leaves the F103 running on the
// 8 MHz HSI oscillator.
pub const CORE_CLOCK_HZ: u32 = 8_000_000;

pub static CLOCK: MillisecondClock = MillisecondClock::new();

/// Reload value giving one SysTick wrap per clock tick.
pub const fn reload_value(core_clock_hz: u32) -> u32 {
    core_clock_hz / 1000 * TICK_PERIOD_MS - 1
}

/*
 * Must be called once, before the control loop starts reading the clock. The
 * exception is taken from the next SysTick wrap onward.
 */
pub fn start(mut syst: SYST) {
    let reload = reload_value(CORE_CLOCK_HZ);

    syst.disable_counter();
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();

    info!("millisecond clock started, reload {}", reload);
}

#[exception]
fn SysTick() {
    CLOCK.on_tick();
}
