use crate::lamp::{Color, Outputs, Signal};
use crate::timing::{LONG_INTERVAL, SHORT_INTERVAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    GreenStop,
    YellowStop,
    RedWalk,
    RedFlashStop,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::GreenStop,
        Phase::YellowStop,
        Phase::RedWalk,
        Phase::RedFlashStop,
    ];

    /*
     * The fixed cycle. Where a phase is left to is independent of why it is
     * left; the exit conditions live in `dwell` and `accepts_button`.
     */
    pub fn next(&self) -> Phase {
        match self {
            Phase::GreenStop => Phase::YellowStop,
            Phase::YellowStop => Phase::RedWalk,
            Phase::RedWalk => Phase::RedFlashStop,
            Phase::RedFlashStop => Phase::GreenStop,
        }
    }

    /// Minimum time in the phase before it may be left.
    pub fn dwell(&self) -> u32 {
        match self {
            Phase::GreenStop | Phase::RedWalk => LONG_INTERVAL,
            Phase::YellowStop | Phase::RedFlashStop => SHORT_INTERVAL,
        }
    }

    /// Whether leaving this phase also needs the call button held.
    pub fn accepts_button(&self) -> bool {
        match self {
            Phase::GreenStop => true,
            Phase::YellowStop | Phase::RedWalk | Phase::RedFlashStop => false,
        }
    }

    pub fn outputs(&self) -> Outputs {
        outputs_for(*self)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::GreenStop => "green-stop",
            Phase::YellowStop => "yellow-stop",
            Phase::RedWalk => "red-walk",
            Phase::RedFlashStop => "red-flash-stop",
        }
    }
}

pub fn outputs_for(phase: Phase) -> Outputs {
    match phase {
        Phase::GreenStop => Outputs::new(Color::Green, Signal::Stop),
        Phase::YellowStop => Outputs::new(Color::Yellow, Signal::Stop),
        Phase::RedWalk => Outputs::new(Color::Red, Signal::Walk),
        Phase::RedFlashStop => Outputs::new(Color::Red, Signal::FlashingStop),
    }
}
