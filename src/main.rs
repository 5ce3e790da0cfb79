#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
use tiny_dice::{
    board::BootRegisters,
    config::POWER_MODE,
    drivers::{Button, DiceDisplay},
    hal::{self, PortB, Power, Timer0},
    logger::EventLog,
    Application, PIPS,
};

#[cfg(all(target_arch = "avr", feature = "power-save"))]
type Idle = Power;
#[cfg(all(target_arch = "avr", not(feature = "power-save")))]
type Idle = tiny_dice::Spin;

#[cfg(all(target_arch = "avr", feature = "debug"))]
type Console = hal::SoftTx;
#[cfg(all(target_arch = "avr", not(feature = "debug")))]
type Console = tiny_dice::logger::NullConsole;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    // SAFETY: the only place the peripherals are taken. `take()` would pull
    // in a panic path that does not fit in flash.
    let dp = unsafe { avr_device::attiny13a::Peripherals::steal() };

    let boot = BootRegisters::for_mode(POWER_MODE);

    let pins = PortB::new(dp.PORTB, &boot).split();
    let timer = Timer0::new(dp.TC0, &boot);
    hal::enable_button_wake(&dp.EXINT, &boot);
    let mut power = Power::new(dp.CPU);
    power.configure(&dp.AC, &boot);

    #[cfg(feature = "power-save")]
    let idle: Idle = power;
    #[cfg(not(feature = "power-save"))]
    let idle: Idle = tiny_dice::Spin;

    #[cfg(feature = "debug")]
    let console: Console = hal::SoftTx::new(pins.console);
    #[cfg(not(feature = "debug"))]
    let console: Console = tiny_dice::logger::NullConsole;

    // SAFETY: all interrupt sources are configured above.
    unsafe { avr_device::interrupt::enable() };

    let mut app = Application::new(
        &PIPS,
        Button::new(pins.button),
        DiceDisplay::new(pins.leds),
        timer,
        idle,
        EventLog::new(console),
    );

    match app.run() {
        Ok(never) | Err(never) => match never {},
    }
}

#[cfg(target_arch = "avr")]
#[avr_device::interrupt(attiny13a)]
fn TIM0_OVF() {
    PIPS.advance();
}

// Only here to end idle sleep when the button changes
#[cfg(target_arch = "avr")]
#[avr_device::interrupt(attiny13a)]
fn PCINT0() {}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("tiny_dice only runs on the ATtiny13A; use `cargo test` on the host");
}
