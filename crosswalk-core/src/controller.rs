pub mod phase;
pub use phase::{Phase, outputs_for};

use enum_ordinalize::Ordinalize;

use crate::lamp::{Lamp, LampLevels, Outputs};
use crate::ports::{DigitalInputPort, DigitalOutputPort, ElapsedClock};
use crate::tick::Tick;
use crate::timing::FLASH_INTERVAL;

/// A phase change, as reported by [`CrosswalkController::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub at: Tick,
}

// Flash sub-timer. Only exists while the crosswalk signal is flashing.
#[derive(Debug, Clone, Copy)]
struct Flash {
    started: Tick,
    lit: bool,
}

/*
 * The crossing cycle, driven by polling.
 *
 * `poll` never blocks and does a constant amount of work, so it can be called
 * from a tight loop. All timing is relative to the tick at which the current
 * phase (or the current flash half-period) started, so the controller keeps
 * working when the clock wraps.
 */
pub struct CrosswalkController<C, B, O> {
    clock: C,
    button: B,
    lamps: [O; Lamp::VARIANT_COUNT],
    phase: Phase,
    phase_started: Tick,
    flash: Option<Flash>,
}

impl<C, B, O> CrosswalkController<C, B, O>
where
    C: ElapsedClock,
    B: DigitalInputPort,
    O: DigitalOutputPort,
{
    /// Starts the cycle in [`Phase::GreenStop`] at the current tick and
    /// writes every lamp once. `lamps` is indexed by [`Lamp::ordinal`].
    pub fn new(clock: C, button: B, lamps: [O; Lamp::VARIANT_COUNT]) -> Self {
        let now = clock.now();
        let mut controller = CrosswalkController {
            clock,
            button,
            lamps,
            phase: Phase::GreenStop,
            phase_started: now,
            flash: None,
        };
        controller.enter(Phase::GreenStop, now);
        controller
    }

    /// Runs one iteration of the control loop.
    pub fn poll(&mut self) -> Option<Transition> {
        let now = self.clock.now();
        let pressed = self.button.read();

        if self.may_leave(now.since(self.phase_started), pressed) {
            let from = self.phase;
            let to = from.next();
            self.enter(to, now);
            return Some(Transition { from, to, at: now });
        }

        self.advance_flash(now);
        None
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tick at which the current phase was entered.
    pub fn phase_started(&self) -> Tick {
        self.phase_started
    }

    pub fn outputs(&self) -> Outputs {
        self.phase.outputs()
    }

    /// Current level of every lamp, including the flash state.
    pub fn levels(&self) -> LampLevels {
        let mut levels = self.outputs().levels();
        if let Some(flash) = self.flash {
            levels[Lamp::Crosswalk.ordinal()] = flash.lit;
        }
        levels
    }

    // The button is sampled, not latched: it has to be held at the moment
    // the green dwell is over.
    fn may_leave(&self, elapsed: u32, pressed: bool) -> bool {
        elapsed >= self.phase.dwell() && (pressed || !self.phase.accepts_button())
    }

    fn enter(&mut self, phase: Phase, now: Tick) {
        let outputs = phase.outputs();

        self.phase = phase;
        self.phase_started = now;
        self.flash = outputs.crosswalk.is_flashing().then_some(Flash {
            started: now,
            lit: outputs.crosswalk.initial_level(),
        });

        self.apply(&outputs.levels());
    }

    fn advance_flash(&mut self, now: Tick) {
        let Some(flash) = self.flash.as_mut() else {
            return;
        };

        if now.since(flash.started) >= FLASH_INTERVAL {
            flash.started = now;
            flash.lit = !flash.lit;
            self.lamps[Lamp::Crosswalk.ordinal()].set(flash.lit);
        }
    }

    fn apply(&mut self, levels: &LampLevels) {
        for (lamp, &level) in self.lamps.iter_mut().zip(levels) {
            lamp.set(level);
        }
    }
}
