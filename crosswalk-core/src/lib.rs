//! Board-agnostic logic for the pedestrian crosswalk controller
//!
//! - [`clock::MillisecondClock`]: interrupt-driven millisecond tick counter
//! - [`controller::CrosswalkController`]: the four-phase crossing cycle
//! - [`ports`]: the digital I/O and clock traits a board has to provide
//!
//! Nothing in here touches hardware registers, so the whole crate runs and
//! tests on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod controller;
pub mod lamp;
pub mod ports;
pub mod tick;
pub mod timing;

pub use clock::MillisecondClock;
pub use controller::{CrosswalkController, Phase, Transition};
pub use lamp::{Color, Lamp, Outputs, Signal};
pub use ports::{DigitalInputPort, DigitalOutputPort, ElapsedClock};
pub use tick::Tick;
