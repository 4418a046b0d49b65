//! Filament dryer firmware
//!
//! Drying process controller for RP2040-based printer boards. Holds the
//! chamber and bed at preset temperatures, runs the auger stepper and both
//! fans, and takes commands from the endstop buttons and a host over
//! line-delimited JSON.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Delay, Instant};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dryer_core::actuator::ActuatorDriver;
use dryer_core::input::OverrideInput;
use dryer_core::sensor::SensorAdapter;
use dryer_drivers::input::Endstop;
use dryer_drivers::output::{ContinuousStepper, GpioSwitch, PwmFan};
use dryer_drivers::sensor::{NtcThermistor, Shtc3};

use crate::config::DRYER_CONFIG;
use crate::controller::DryerLoop;
use crate::hardware::{fan_pwm_config, stepper_pwm_config, AdcChannel, SharedAdc};

mod channels;
mod config;
mod controller;
mod hardware;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

// Both thermistors share the one ADC
static ADC: StaticCell<SharedAdc> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Filament dryer firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");
    info!("Configuration: {:?}", DRYER_CONFIG);

    // Host serial, 115200 baud
    let tx_buf = TX_BUF.init([0u8; 512]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for host communication");

    // Thermistors (TH0 bed, TH1 chamber)
    let adc: &'static SharedAdc = ADC.init(RefCell::new(Adc::new_blocking(
        p.ADC,
        adc::Config::default(),
    )));
    let bed = NtcThermistor::new(
        AdcChannel::new(adc, adc::Channel::new_pin(p.PIN_26, Pull::None)),
        DRYER_CONFIG.thermistor,
    );
    let chamber = NtcThermistor::new(
        AdcChannel::new(adc, adc::Channel::new_pin(p.PIN_27, Pull::None)),
        DRYER_CONFIG.thermistor,
    );

    // SHTC3 on I2C1
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_7, p.PIN_6, i2c::Config::default());
    let mut humidity = Shtc3::new(i2c, Delay);
    match humidity.read_id() {
        Ok(id) => info!("SHTC3 found, id {=u16:#x}", id),
        Err(e) => warn!("SHTC3 not responding: {:?}", e),
    }
    let sensors = SensorAdapter::new(bed, chamber, humidity);
    info!("Sensors initialized");

    // Heater and exhaust fan
    let heater = GpioSwitch::new_active_high(Output::new(p.PIN_21, Level::Low));
    let fan1 = GpioSwitch::new_active_high(Output::new(p.PIN_17, Level::Low));

    // Circulation fan on PWM1 A
    let fan2_pwm = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, fan_pwm_config());
    let fan2 = PwmFan::new(fan2_pwm.split().0.unwrap());

    // Auger stepper: fixed direction, clock on PWM7 A, active-low enable
    let _dir = Output::new(p.PIN_13, Level::Low);
    let step_pwm = Pwm::new_output_a(p.PWM_SLICE7, p.PIN_14, stepper_pwm_config());
    let stepper = ContinuousStepper::new(
        Output::new(p.PIN_15, Level::High),
        step_pwm.split().0.unwrap(),
    );

    let actuators = ActuatorDriver::new(heater, fan1, fan2, stepper);
    info!("Outputs initialized");

    // Endstops X/Y/Z double as PLA/PETG/STOP buttons
    let buttons = OverrideInput::new(
        Endstop::new(Input::new(p.PIN_4, Pull::Up)),
        Endstop::new(Input::new(p.PIN_3, Pull::Up)),
        Endstop::new(Input::new(p.PIN_25, Pull::Up)),
        DRYER_CONFIG.debounce_ms,
    );

    let now_ms = Instant::now().as_millis() as u32;
    let dryer = DryerLoop::new(&DRYER_CONFIG, sensors, actuators, buttons, now_ms);

    // Spawn tasks
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner.spawn(tasks::control_task(dryer)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
