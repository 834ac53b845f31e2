/*
 * Lamps and what each phase shows on them.
 *
 * The control logic thinks in terms of "the traffic light is yellow" and "the
 * crosswalk says walk". This module turns that into one on/off level per
 * physical lamp, indexed by the lamp's ordinal, so the controller can drive a
 * plain array of output ports.
 */

use enum_ordinalize::Ordinalize;

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(usize)]
pub enum Lamp {
    // Vehicle traffic light.
    Red,
    Yellow,
    Green,

    // The single pedestrian lamp. Lit means walk; dark means stop.
    Crosswalk,
}

/// Lamp levels, indexed by [`Lamp::ordinal`].
pub type LampLevels = [bool; Lamp::VARIANT_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    Stop,
    Walk,
    // Stop, but the crosswalk lamp blinks to warn that the walk is ending.
    FlashingStop,
}

impl Signal {
    /// Level of the crosswalk lamp when this signal is first shown. A
    /// flashing signal always starts dark.
    pub fn initial_level(&self) -> bool {
        match self {
            Signal::Walk => true,
            Signal::Stop | Signal::FlashingStop => false,
        }
    }

    pub fn is_flashing(&self) -> bool {
        matches!(self, Signal::FlashingStop)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outputs {
    pub traffic_light: Color,
    pub crosswalk: Signal,
}

impl Outputs {
    pub const fn new(traffic_light: Color, crosswalk: Signal) -> Self {
        Outputs {
            traffic_light,
            crosswalk,
        }
    }

    /*
     * One level per lamp, with the crosswalk lamp at its initial level.
     * Exactly one traffic light lamp is lit at any time.
     */
    pub fn levels(&self) -> LampLevels {
        let mut levels = [false; Lamp::VARIANT_COUNT];

        let lit = match self.traffic_light {
            Color::Red => Lamp::Red,
            Color::Yellow => Lamp::Yellow,
            Color::Green => Lamp::Green,
        };
        levels[lit.ordinal()] = true;
        levels[Lamp::Crosswalk.ordinal()] = self.crosswalk.initial_level();

        levels
    }
}
