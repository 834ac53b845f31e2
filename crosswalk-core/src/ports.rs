//! Hardware seams
//!
//! The controller only ever talks to the board through these three traits.
//! The firmware implements them on top of the chip HAL; the tests implement
//! them with plain cells.

use core::cell::Cell;

use crate::tick::Tick;

/// A single digital output driving one lamp.
///
/// `active == true` means the lamp is lit. Any active-low wiring is the
/// implementor's problem, not the caller's.
pub trait DigitalOutputPort {
    fn set(&mut self, active: bool);
}

/// A single digital input.
///
/// `true` means asserted (for the call button: pressed). Sampled
/// synchronously, without debouncing.
pub trait DigitalInputPort {
    fn read(&self) -> bool;
}

/// A monotonically advancing millisecond source.
pub trait ElapsedClock {
    fn now(&self) -> Tick;
}

impl<T: ElapsedClock + ?Sized> ElapsedClock for &T {
    fn now(&self) -> Tick {
        (**self).now()
    }
}

impl<T: DigitalInputPort + ?Sized> DigitalInputPort for &T {
    fn read(&self) -> bool {
        (**self).read()
    }
}

// A bare cell is a usable port, which is handy for simulations and tests.
impl DigitalInputPort for Cell<bool> {
    fn read(&self) -> bool {
        self.get()
    }
}

impl ElapsedClock for Cell<Tick> {
    fn now(&self) -> Tick {
        self.get()
    }
}
