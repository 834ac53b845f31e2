#![no_std]
#![no_main]

use crosswalk_core::{CrosswalkController, Lamp, Transition};
use defmt::{info, trace, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::usart::{Config, Uart};
use embassy_stm32::{bind_interrupts, peripherals, usart};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel};
use enum_ordinalize::Ordinalize;
use panic_halt as _;

mod io;
mod systick;
use io::{CHANNEL_CAPACITY, CallButton, LampPin, announce_task};

// The lamp board is driven active-high (pin high = lamp lit).
const LAMPS_ACTIVE_LOW: bool = false;

static TRANSITIONS: Channel<ThreadModeRawMutex, Transition, CHANNEL_CAPACITY> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Take the core peripherals before the HAL gets a chance to steal them.
    let core = cortex_m::Peripherals::take().unwrap();
    let peripherals = embassy_stm32::init(Default::default());
    info!("crosswalk controller starting");

    bind_interrupts!(struct Irqs {
        USART1 => usart::InterruptHandler<peripherals::USART1>;
    });
    let usart = Uart::new(
        peripherals.USART1,
        peripherals.PA10,
        peripherals.PA9,
        Irqs,
        peripherals.DMA1_CH4,
        peripherals.DMA1_CH5,
        Config::default(), // 115200 baud
    )
    .unwrap();
    let (usart_tx, _usart_rx) = usart.split();
    spawner
        .spawn(announce_task(usart_tx, TRANSITIONS.receiver()))
        .unwrap();

    // Indexed by lamp ordinal: red, yellow, green, crosswalk.
    let lamp = |pin| LampPin::new(pin, LAMPS_ACTIVE_LOW);
    let lamps = [
        lamp(Output::new(peripherals.PB10, Level::Low, Speed::Low)),
        lamp(Output::new(peripherals.PB12, Level::Low, Speed::Low)),
        lamp(Output::new(peripherals.PB14, Level::Low, Speed::Low)),
        lamp(Output::new(peripherals.PB7, Level::Low, Speed::Low)),
    ];
    let button = CallButton::new(Input::new(peripherals.PE11, Pull::Up));

    systick::start(core.SYST);

    let mut controller = CrosswalkController::new(&systick::CLOCK, button, lamps);
    let transitions = TRANSITIONS.sender();
    let mut crosswalk_lit = false;
    info!("entered {} at {}", controller.phase(), controller.phase_started());

    // Busy-poll the controller. Yielding lets the announcer run, but never
    // waits for anything.
    loop {
        if let Some(transition) = controller.poll() {
            info!(
                "{} -> {} at {}",
                transition.from, transition.to, transition.at
            );
            if transitions.try_send(transition).is_err() {
                warn!("announcement queue full");
            }
        }

        let lit = controller.levels()[Lamp::Crosswalk.ordinal()];
        if lit != crosswalk_lit {
            trace!("crosswalk lamp {}", lit);
            crosswalk_lit = lit;
        }

        yield_now().await;
    }
}
