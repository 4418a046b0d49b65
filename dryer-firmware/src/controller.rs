//! Control loop
//!
//! Owns the process and every piece of hardware it drives. One call to
//! `step` runs whichever cadence gates have opened:
//! - input: endstop buttons, then queued host commands
//! - humidity: one SHTC3 measurement
//! - control: preset evaluation, regulation, outputs
//! - seconds: dry timer and telemetry

use defmt::*;

use dryer_core::config::DryerConfig;
use dryer_core::control::{ActuatorCommand, ProcessController};
use dryer_core::scheduler::Cadence;
use dryer_core::sensor::SensorSnapshot;
use dryer_core::state::ControlEvent;
use dryer_core::traits::SensorError;
use dryer_protocol::StatusReport;

use crate::channels::{Outbound, COMMAND_CHANNEL, OUTBOUND};
use crate::hardware::{Actuators, Buttons, Sensors};

/// Debug level that enables the per-tick regulation trace
const TRACE_DEBUG_LEVEL: u8 = 2;

pub struct DryerLoop {
    process: ProcessController,
    sensors: Sensors,
    actuators: Actuators,
    buttons: Buttons,
    cadence: Cadence,
    /// Readings from the latest control tick
    snapshot: SensorSnapshot,
}

impl DryerLoop {
    pub fn new(
        config: &DryerConfig,
        sensors: Sensors,
        mut actuators: Actuators,
        buttons: Buttons,
        now_ms: u32,
    ) -> Self {
        actuators.all_off();
        let mut dryer = Self {
            process: ProcessController::new(config.regulation),
            sensors,
            actuators,
            buttons,
            cadence: Cadence::new(&config.cadence, now_ms),
            snapshot: SensorSnapshot {
                bed_c: Err(SensorError::NotReady),
                ambient_c: Err(SensorError::NotReady),
                abs_humidity: Err(SensorError::NotReady),
            },
        };
        // First humidity value without waiting a full humidity period
        dryer.poll_humidity();
        dryer
    }

    /// Run every gate that is due at `now_ms`
    pub fn step(&mut self, now_ms: u32) {
        let due = self.cadence.poll(now_ms);

        if due.input {
            self.poll_input(now_ms);
        }
        if due.humidity {
            self.poll_humidity();
        }
        if due.control {
            self.control();
        }
        if due.seconds > 0 {
            self.elapse(due.seconds);
        }
    }

    fn poll_input(&mut self, now_ms: u32) {
        if let Some(action) = self.buttons.poll(now_ms) {
            info!("Button: {:?}", action);
            self.process.apply_override(&action.to_override());
        }

        while let Ok(ov) = COMMAND_CHANNEL.try_receive() {
            debug!("Host command: {:?}", ov);
            self.process.apply_override(&ov);
        }
    }

    fn poll_humidity(&mut self) {
        match self.sensors.read_humidity_sensor() {
            Ok(reading) => debug!(
                "Humidity: {}%RH {}C {}g/m3",
                reading.relative_humidity, reading.temperature_c, reading.absolute_humidity
            ),
            Err(e) => warn!("Humidity sensor fault: {:?}", e),
        }
    }

    fn control(&mut self) {
        let snapshot = self.sensors.snapshot();
        report_fault("Bed", &self.snapshot.bed_c, &snapshot.bed_c);
        report_fault("Chamber", &self.snapshot.ambient_c, &snapshot.ambient_c);
        self.snapshot = snapshot;

        let (event, command) = self.process.tick(&snapshot);
        if let Some(event) = event {
            self.log_event(event);
        }
        self.actuators.apply(&command);

        if self.process.state().debug_level >= TRACE_DEBUG_LEVEL {
            self.trace_regulation(&command);
        }
    }

    fn elapse(&mut self, seconds: u32) {
        if let Some(event) = self.process.elapse_seconds(seconds) {
            self.log_event(event);
        }

        let report = StatusReport::new(
            self.process.state(),
            &self.snapshot,
            self.sensors.last_good(),
            self.process.heater_on(),
        );
        if OUTBOUND.try_send(Outbound::Status(report)).is_err() {
            warn!("Outbound channel full, dropping status");
        }
    }

    fn log_event(&self, event: ControlEvent) {
        let state = self.process.state();
        if event.is_transition() {
            info!("Run status -> {}", state.status.as_str());
        }
        match event {
            ControlEvent::PresetApplied(preset) => info!(
                "Preset {} applied: air {}C, bed {}C, timer {}s",
                preset.as_str(),
                state.target_air_temp_c,
                state.target_bed_temp_c,
                state.dry_timer_s
            ),
            ControlEvent::Stopped => info!("Process stopped, targets cleared"),
            ControlEvent::DryTimerExpired => info!("Dry timer expired"),
        }
    }

    fn trace_regulation(&self, command: &ActuatorCommand) {
        let state = self.process.state();
        debug!(
            "bed {:?}/{} air {:?}/{} heater={} fan1={} fan2={} stepper={}",
            self.snapshot.bed_c,
            state.target_bed_temp_c,
            self.snapshot.ambient_c,
            state.target_air_temp_c,
            command.heater_on,
            command.fan1_on,
            command.fan2_duty,
            command.stepper_on
        );
    }
}

/// Log a thermistor fault when it first appears or changes
fn report_fault(name: &str, previous: &Result<f32, SensorError>, current: &Result<f32, SensorError>) {
    match (previous, current) {
        (Err(was), Err(now)) if was == now => {}
        (_, Err(now)) => warn!("{} thermistor fault: {:?}", name, now),
        (Err(SensorError::NotReady), Ok(_)) => {}
        (Err(_), Ok(t)) => info!("{} thermistor recovered: {}C", name, t),
        (Ok(_), Ok(_)) => {}
    }
}
