//! Washing machine controller
//!
//! `start` runs one wash to completion on the caller's thread:
//!
//! 1. No configuration: nothing runs, `UnknownError`
//! 2. Resolve the program; unresolved: `UnknownError`
//! 3. Check the weight limit; over the limit: `TooHeavy`
//! 4. Pour, wash, release and (optionally) spin, in that order
//!
//! Steps 1-3 never touch the pump or engine. A failing device in step 4
//! stops the wash and is reported as `UnknownError`; device errors never
//! escape `start`.

use super::fault::{ActuatorFault, StepFailure};
use crate::config::{LaundryBatch, MachineSettings, ProgramConfiguration, SettingsError};
use crate::plan::{Step, WashPlan};
use crate::resolver::resolve_program;
use crate::state::{ErrorCode, LaundryStatus};
use crate::traits::{DirtDetector, Engine, WaterPump};
use crate::validation::{validate_batch, BatchCheck};

/// Wash controller owning its detector, engine and pump
///
/// Holds no state between washes other than its devices and settings.
/// `start` takes `&mut self`, so a pump/engine pair is never driven by
/// two washes at once.
pub struct WashingMachine<D, E, P> {
    detector: D,
    engine: E,
    pump: P,
    settings: MachineSettings,
}

impl<D, E, P> WashingMachine<D, E, P>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
{
    /// Create a controller with default settings
    pub fn new(detector: D, engine: E, pump: P) -> Self {
        Self {
            detector,
            engine,
            pump,
            settings: MachineSettings::default(),
        }
    }

    /// Create a controller with custom settings
    ///
    /// Settings that fail validation are rejected, so a controller never
    /// runs with unusable weight limits or thresholds.
    pub fn with_settings(
        detector: D,
        engine: E,
        pump: P,
        settings: MachineSettings,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            detector,
            engine,
            pump,
            settings,
        })
    }

    /// Get the active settings
    pub fn settings(&self) -> &MachineSettings {
        &self.settings
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }

    /// Consume the controller and return its devices
    pub fn into_parts(self) -> (D, E, P) {
        (self.detector, self.engine, self.pump)
    }

    /// Wash `batch` with the requested configuration
    ///
    /// An absent configuration is a normal request that cannot run.
    pub fn start(
        &mut self,
        batch: &LaundryBatch,
        configuration: Option<&ProgramConfiguration>,
    ) -> LaundryStatus {
        let Some(configuration) = configuration else {
            warn!("wash refused: no program configuration");
            return LaundryStatus::failure(ErrorCode::UnknownError);
        };

        info!(
            "wash requested: {} {} kg, program {}, spin {}",
            batch.material(),
            batch.weight_kg(),
            configuration.program,
            configuration.spin
        );

        let program = match resolve_program(
            configuration.program,
            batch,
            &mut self.detector,
            &self.settings.autodetect,
        ) {
            Ok(program) => program,
            Err(e) => {
                warn!("wash refused: program unresolved ({})", e);
                return LaundryStatus::failure(ErrorCode::UnknownError);
            }
        };

        if let BatchCheck::TooHeavy { limit_kg } = validate_batch(batch, &self.settings.limits) {
            warn!(
                "wash refused: {} kg exceeds {} kg limit",
                batch.weight_kg(),
                limit_kg
            );
            return LaundryStatus::failure(ErrorCode::TooHeavy);
        }

        let Some(plan) = WashPlan::new(program, batch.weight_kg(), configuration.spin) else {
            warn!("wash refused: {} has no duration", program);
            return LaundryStatus::failure(ErrorCode::UnknownError);
        };

        match self.execute(&plan) {
            Ok(()) => {
                info!("wash complete: {}", program);
                LaundryStatus::success(program)
            }
            Err(failure) => {
                warn!("wash aborted at {}: {}", failure.step, failure.fault);
                LaundryStatus::failure(ErrorCode::UnknownError)
            }
        }
    }

    /// Run every step of `plan` in order, stopping at the first failure
    fn execute(&mut self, plan: &WashPlan) -> Result<(), StepFailure> {
        for &step in plan.steps() {
            trace!("step: {}", step);
            self.run_step(step)
                .map_err(|fault| StepFailure { step, fault })?;
        }
        Ok(())
    }

    fn run_step(&mut self, step: Step) -> Result<(), ActuatorFault> {
        match step {
            Step::Pour { weight_kg } => self.pump.pour(weight_kg)?,
            Step::Wash { minutes } => self.engine.run_washing(minutes)?,
            Step::Release => self.pump.release()?,
            Step::Spin => self.engine.spin()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AutodetectPolicy, Material, Program, WeightLimits};
    use crate::state::Outcome;
    use crate::traits::{DetectorError, DirtDegree, EngineError, PumpError};
    use core::cell::RefCell;
    use heapless::Vec;

    /// Device call recorded by the mocks
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Assess,
        Pour(f32),
        RunWashing(u16),
        Release,
        Spin,
    }

    /// Call log shared by all mocks so cross-device order is visible
    type CallLog = RefCell<Vec<Call, 32>>;

    fn record(log: &CallLog, call: Call) {
        log.borrow_mut().push(call).unwrap();
    }

    struct MockDetector<'a> {
        log: &'a CallLog,
        reading: Result<DirtDegree, DetectorError>,
    }

    impl DirtDetector for MockDetector<'_> {
        fn assess(&mut self, _batch: &LaundryBatch) -> Result<DirtDegree, DetectorError> {
            record(self.log, Call::Assess);
            self.reading
        }
    }

    struct MockEngine<'a> {
        log: &'a CallLog,
        wash_result: Result<(), EngineError>,
        spin_result: Result<(), EngineError>,
    }

    impl Engine for MockEngine<'_> {
        fn run_washing(&mut self, duration_minutes: u16) -> Result<(), EngineError> {
            record(self.log, Call::RunWashing(duration_minutes));
            self.wash_result
        }

        fn spin(&mut self) -> Result<(), EngineError> {
            record(self.log, Call::Spin);
            self.spin_result
        }
    }

    struct MockPump<'a> {
        log: &'a CallLog,
        pour_result: Result<(), PumpError>,
        release_result: Result<(), PumpError>,
    }

    impl WaterPump for MockPump<'_> {
        fn pour(&mut self, weight_kg: f32) -> Result<(), PumpError> {
            record(self.log, Call::Pour(weight_kg));
            self.pour_result
        }

        fn release(&mut self) -> Result<(), PumpError> {
            record(self.log, Call::Release);
            self.release_result
        }
    }

    type TestMachine<'a> = WashingMachine<MockDetector<'a>, MockEngine<'a>, MockPump<'a>>;

    /// Machine whose devices all succeed and whose detector is not fitted
    fn machine(log: &CallLog) -> TestMachine<'_> {
        WashingMachine::new(
            MockDetector {
                log,
                reading: Err(DetectorError::Unavailable),
            },
            MockEngine {
                log,
                wash_result: Ok(()),
                spin_result: Ok(()),
            },
            MockPump {
                log,
                pour_result: Ok(()),
                release_result: Ok(()),
            },
        )
    }

    fn batch(material: Material, weight_kg: f32) -> LaundryBatch {
        LaundryBatch::new(material, weight_kg).unwrap()
    }

    fn with_spin(program: Program) -> ProgramConfiguration {
        ProgramConfiguration::new(program, true)
    }

    fn calls(log: &CallLog) -> Vec<Call, 32> {
        log.borrow().clone()
    }

    #[test]
    fn test_proper_batch_static_program() {
        let log = CallLog::default();
        let mut washer = machine(&log);

        let status = washer.start(&batch(Material::Cotton, 7.0), Some(&with_spin(Program::Long)));

        assert_eq!(status, LaundryStatus::success(Program::Long));
        assert_eq!(status.result(), Outcome::Success);
        assert_eq!(status.error_code(), ErrorCode::NoError);
    }

    #[test]
    fn test_devices_called_in_order() {
        let log = CallLog::default();
        let mut washer = machine(&log);

        washer.start(&batch(Material::Cotton, 7.0), Some(&with_spin(Program::Long)));

        assert_eq!(
            calls(&log).as_slice(),
            &[
                Call::Pour(7.0),
                Call::RunWashing(120),
                Call::Release,
                Call::Spin,
            ]
        );
    }

    #[test]
    fn test_no_spin_when_not_requested() {
        let log = CallLog::default();
        let mut washer = machine(&log);

        let config = ProgramConfiguration::new(Program::Long, false);
        let status = washer.start(&batch(Material::Cotton, 7.0), Some(&config));

        assert_eq!(status, LaundryStatus::success(Program::Long));
        assert_eq!(
            calls(&log).as_slice(),
            &[Call::Pour(7.0), Call::RunWashing(120), Call::Release]
        );
    }

    #[test]
    fn test_heavy_fabric_too_heavy() {
        let log = CallLog::default();
        let mut washer = machine(&log);

        let status = washer.start(&batch(Material::Jeans, 7.0), Some(&with_spin(Program::Long)));

        assert_eq!(status, LaundryStatus::failure(ErrorCode::TooHeavy));
        assert_eq!(status.executed_program(), None);
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn test_missing_configuration() {
        let log = CallLog::default();
        let mut washer = machine(&log);

        let status = washer.start(&batch(Material::Cotton, 7.0), None);

        assert_eq!(status, LaundryStatus::failure(ErrorCode::UnknownError));
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn test_autodetect_without_reading() {
        let log = CallLog::default();
        let mut washer = machine(&log);

        let status = washer.start(
            &batch(Material::Cotton, 7.0),
            Some(&with_spin(Program::Autodetect)),
        );

        assert_eq!(status, LaundryStatus::failure(ErrorCode::UnknownError));
        assert_eq!(calls(&log).as_slice(), &[Call::Assess]);
    }

    #[test]
    fn test_autodetect_picks_program() {
        let log = CallLog::default();
        let mut washer = machine(&log);
        washer.detector.reading = Ok(DirtDegree::new(75).unwrap());

        let status = washer.start(
            &batch(Material::Synthetic, 5.0),
            Some(&with_spin(Program::Autodetect)),
        );

        assert_eq!(status, LaundryStatus::success(Program::Long));
        assert_eq!(
            calls(&log).as_slice(),
            &[
                Call::Assess,
                Call::Pour(5.0),
                Call::RunWashing(120),
                Call::Release,
                Call::Spin,
            ]
        );
    }

    #[test]
    fn test_autodetect_then_too_heavy() {
        let log = CallLog::default();
        let mut washer = machine(&log);
        washer.detector.reading = Ok(DirtDegree::new(20).unwrap());

        let status = washer.start(
            &batch(Material::Wool, 6.0),
            Some(&with_spin(Program::Autodetect)),
        );

        assert_eq!(status, LaundryStatus::failure(ErrorCode::TooHeavy));
        assert_eq!(calls(&log).as_slice(), &[Call::Assess]);
    }

    #[test]
    fn test_pour_failure_stops_wash() {
        let log = CallLog::default();
        let mut washer = machine(&log);
        washer.pump.pour_result = Err(PumpError::NoSupply);

        let status = washer.start(&batch(Material::Cotton, 7.0), Some(&with_spin(Program::Long)));

        assert_eq!(status, LaundryStatus::failure(ErrorCode::UnknownError));
        assert_eq!(calls(&log).as_slice(), &[Call::Pour(7.0)]);
    }

    #[test]
    fn test_wash_failure_stops_wash() {
        let log = CallLog::default();
        let mut washer = machine(&log);
        washer.engine.wash_result = Err(EngineError::Overload);

        let status = washer.start(&batch(Material::Cotton, 7.0), Some(&with_spin(Program::Short)));

        assert_eq!(status, LaundryStatus::failure(ErrorCode::UnknownError));
        assert_eq!(
            calls(&log).as_slice(),
            &[Call::Pour(7.0), Call::RunWashing(30)]
        );
    }

    #[test]
    fn test_release_failure_skips_spin() {
        let log = CallLog::default();
        let mut washer = machine(&log);
        washer.pump.release_result = Err(PumpError::DrainBlocked);

        let status = washer.start(&batch(Material::Cotton, 7.0), Some(&with_spin(Program::Medium)));

        assert_eq!(status, LaundryStatus::failure(ErrorCode::UnknownError));
        assert_eq!(
            calls(&log).as_slice(),
            &[Call::Pour(7.0), Call::RunWashing(60), Call::Release]
        );
    }

    #[test]
    fn test_spin_failure_reported() {
        let log = CallLog::default();
        let mut washer = machine(&log);
        washer.engine.spin_result = Err(EngineError::Interlock);

        let status = washer.start(&batch(Material::Cotton, 7.0), Some(&with_spin(Program::Long)));

        assert_eq!(status, LaundryStatus::failure(ErrorCode::UnknownError));
        assert_eq!(calls(&log).len(), 4);
    }

    #[test]
    fn test_repeated_wash_has_no_memory() {
        let log = CallLog::default();
        let mut washer = machine(&log);
        let laundry = batch(Material::Cotton, 7.0);
        let config = with_spin(Program::Long);

        let first = washer.start(&laundry, Some(&config));
        let second = washer.start(&laundry, Some(&config));

        assert_eq!(first, second);
        let log = calls(&log);
        assert_eq!(log.len(), 8);
        assert_eq!(&log[..4], &log[4..]);
    }

    #[test]
    fn test_custom_limits() {
        let log = CallLog::default();
        let washer = machine(&log);
        let (detector, engine, pump) = washer.into_parts();

        let settings = MachineSettings {
            limits: WeightLimits {
                standard_kg: 6.0,
                heavy_kg: 3.0,
            },
            ..Default::default()
        };
        let mut washer = WashingMachine::with_settings(detector, engine, pump, settings).unwrap();
        assert_eq!(washer.settings().limits.standard_kg, 6.0);

        let status = washer.start(&batch(Material::Cotton, 7.0), Some(&with_spin(Program::Long)));
        assert_eq!(status, LaundryStatus::failure(ErrorCode::TooHeavy));
        assert!(calls(&log).is_empty());
    }

    #[test]
    fn test_borrowed_devices() {
        let log = CallLog::default();
        let (mut detector, mut engine, mut pump) = machine(&log).into_parts();

        {
            let mut washer = WashingMachine::new(&mut detector, &mut engine, &mut pump);
            let status =
                washer.start(&batch(Material::Delicate, 2.0), Some(&with_spin(Program::Short)));
            assert!(status.is_success());
        }

        pump.release_result = Err(PumpError::ValveFault);
        let mut washer = WashingMachine::new(&mut detector, &mut engine, &mut pump);
        let status =
            washer.start(&batch(Material::Delicate, 2.0), Some(&with_spin(Program::Short)));
        assert_eq!(status.error_code(), ErrorCode::UnknownError);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let log = CallLog::default();
        let (mut detector, mut engine, mut pump) = machine(&log).into_parts();

        let unbounded = MachineSettings {
            limits: WeightLimits {
                standard_kg: f32::NAN,
                heavy_kg: f32::NAN,
            },
            ..Default::default()
        };
        let result =
            WashingMachine::with_settings(&mut detector, &mut engine, &mut pump, unbounded);
        assert_eq!(result.err(), Some(SettingsError::InvalidLimits));

        let inverted = MachineSettings {
            limits: WeightLimits {
                standard_kg: 4.0,
                heavy_kg: 8.0,
            },
            ..Default::default()
        };
        let result =
            WashingMachine::with_settings(&mut detector, &mut engine, &mut pump, inverted);
        assert_eq!(result.err(), Some(SettingsError::InvalidLimits));

        let policy = MachineSettings {
            autodetect: AutodetectPolicy {
                heavy_soil_above: 10,
                light_soil_up_to: 50,
            },
            ..Default::default()
        };
        let result =
            WashingMachine::with_settings(&mut detector, &mut engine, &mut pump, policy);
        assert_eq!(result.err(), Some(SettingsError::InvalidPolicy));

        // Default limits stay in force: a heavy load is still refused
        let mut washer = WashingMachine::new(&mut detector, &mut engine, &mut pump);
        let status =
            washer.start(&batch(Material::Jeans, 500.0), Some(&with_spin(Program::Long)));
        assert_eq!(status, LaundryStatus::failure(ErrorCode::TooHeavy));
        assert!(calls(&log).is_empty());
    }
}
