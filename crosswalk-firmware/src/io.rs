/*
 * The I/O module for the crosswalk.
 *
 * This is the only part of the program that knows about the chip: it adapts
 * embassy GPIO to the port traits the controller uses, and owns the serial
 * port on which phase changes are announced. The controller hands transitions
 * to the announcer through a channel, so a slow UART never stalls the
 * control loop.
 */

use core::fmt::Write;

use crosswalk_core::{DigitalInputPort, DigitalOutputPort, Transition};
use defmt::warn;
use embassy_stm32::gpio::{Input, Level, Output};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartTx;
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Receiver};
use heapless::String;

pub const CHANNEL_CAPACITY: usize = 4;

// Deal with active-high or active-low, so that the state machine can just use
// easy to understand `true` for on logic.
pub struct LampPin<'d> {
    pin: Output<'d>,
    active_low: bool,
}

impl<'d> LampPin<'d> {
    pub fn new(pin: Output<'d>, active_low: bool) -> Self {
        LampPin { pin, active_low }
    }
}

impl DigitalOutputPort for LampPin<'_> {
    fn set(&mut self, active: bool) {
        let high = active != self.active_low;
        self.pin
            .set_level(if high { Level::High } else { Level::Low });
    }
}

// The call button pulls the pin to ground, so pressed reads low.
pub struct CallButton<'d> {
    pin: Input<'d>,
}

impl<'d> CallButton<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        CallButton { pin }
    }
}

impl DigitalInputPort for CallButton<'_> {
    fn read(&self) -> bool {
        self.pin.is_low()
    }
}

/// Formats the line sent on the serial port for a transition.
pub fn announcement(transition: &Transition) -> String<48> {
    let mut line = String::new();
    // 48 bytes always fits the longest phase name and a u32.
    let _ = writeln!(
        line,
        "phase {} at {}",
        transition.to.name(),
        transition.at.get()
    );
    line
}

#[embassy_executor::task]
pub async fn announce_task(
    mut usart: UartTx<'static, Async>,
    transitions: Receiver<'static, ThreadModeRawMutex, Transition, CHANNEL_CAPACITY>,
) -> ! {
    loop {
        let transition = transitions.receive().await;
        if usart
            .write(announcement(&transition).as_bytes())
            .await
            .is_err()
        {
            warn!("dropped announcement of {}", transition.to);
        }
    }
}
