use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{Clock, SampleSource, SensorTick, SourceStatus, XYZ};

use super::gaussian::GaussianNoise;
use crate::errors::PipelineError;

const GRAVITY_G: [f64; 3] = [0.0, 0.0, 1.0];

/// Parameters of the synthetic sensor.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub seed: u64,
    pub sampling_period_secs: f64,
    /// Noise on every acceleration axis [G].
    pub accel_noise_g: f64,
    /// Noise on every angular-rate axis [deg/s].
    pub gyro_noise_dps: f64,
    /// Instants between the start of two impact bursts.
    pub impact_every: u64,
    /// Length of an impact burst, in instants.
    pub impact_len: u64,
    /// Peak acceleration of an impact [G].
    pub impact_accel_g: f64,
    /// Peak angular rate of an impact [deg/s].
    pub impact_gyro_dps: f64,
    /// Probability that an instant misses its angular-rate reading.
    pub gyro_drop_probability: f64,
    /// Stop after this many instants.
    pub max_ticks: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sampling_period_secs: 0.01,
            accel_noise_g: 0.02,
            gyro_noise_dps: 2.0,
            impact_every: 200,
            impact_len: 15,
            impact_accel_g: 2.5,
            impact_gyro_dps: 400.0,
            gyro_drop_probability: 0.05,
            max_ticks: None,
        }
    }
}

/// Synthetic 6-axis sensor resting under gravity, with periodic impact bursts.
pub struct SimulatedSource {
    config: SimulationConfig,
    rng: StdRng,
    accel_noise: GaussianNoise,
    gyro_noise: GaussianNoise,
    start: Clock,
    tick: u64,
    current: SensorTick,
    last_acceleration: XYZ,
    last_angular_rate: XYZ,
}

impl SimulatedSource {
    /// Returns Config error if a noise level or probability is out of range.
    pub fn new(config: SimulationConfig) -> Result<Self, PipelineError> {
        if !(0.0..=1.0).contains(&config.gyro_drop_probability) {
            return Err(PipelineError::Config(format!(
                "gyro_drop_probability {} not in [0, 1]",
                config.gyro_drop_probability
            )));
        }
        if config.impact_every == 0 {
            return Err(PipelineError::Config("impact_every must be positive".to_string()));
        }
        let mut source = Self {
            rng: StdRng::seed_from_u64(config.seed),
            accel_noise: GaussianNoise::new(config.accel_noise_g)?,
            gyro_noise: GaussianNoise::new(config.gyro_noise_dps)?,
            start: Clock::now(),
            tick: 0,
            current: SensorTick::default(),
            last_acceleration: XYZ::new(GRAVITY_G),
            last_angular_rate: XYZ::default(),
            config,
        };
        source.current = source.next_tick();
        Ok(source)
    }

    /// Instants generated so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    fn in_impact(&self) -> bool {
        let impact_len = self.config.impact_len.min(self.config.impact_every);
        self.tick % self.config.impact_every >= self.config.impact_every - impact_len
    }

    fn next_tick(&mut self) -> SensorTick {
        let (acceleration, angular_rate) = if self.in_impact() {
            let direction = XYZ::new([
                self.rng.gen_range(-1.0..=1.0),
                self.rng.gen_range(-1.0..=1.0),
                self.rng.gen_range(-1.0..=1.0),
            ]);
            (
                direction * self.config.impact_accel_g,
                direction * self.config.impact_gyro_dps,
            )
        } else {
            (XYZ::new(GRAVITY_G), XYZ::default())
        };
        let acceleration = self.accel_noise.add_noise(&mut self.rng, acceleration);
        let angular_rate = self.gyro_noise.add_noise(&mut self.rng, angular_rate);
        let gyro_missing = self.rng.gen_bool(self.config.gyro_drop_probability);
        let timestamp =
            self.start.as_secs() + self.tick as f64 * self.config.sampling_period_secs;
        self.tick += 1;
        SensorTick::new(
            timestamp,
            Some(acceleration),
            (!gyro_missing).then_some(angular_rate),
        )
    }
}

impl SampleSource for SimulatedSource {
    fn acceleration_available(&self) -> bool {
        self.current.has_acceleration()
    }

    fn read_acceleration(&mut self) -> XYZ {
        if let Some(acceleration) = self.current.take_acceleration() {
            self.last_acceleration = acceleration;
        }
        self.last_acceleration
    }

    fn angular_rate_available(&self) -> bool {
        self.current.has_angular_rate()
    }

    fn read_angular_rate(&mut self) -> XYZ {
        if let Some(angular_rate) = self.current.take_angular_rate() {
            self.last_angular_rate = angular_rate;
        }
        self.last_angular_rate
    }

    fn advance(&mut self) -> SourceStatus {
        if self.config.max_ticks.is_some_and(|max| self.tick >= max) {
            self.current = SensorTick::empty(self.current.get_timestamp());
            return SourceStatus::Exhausted;
        }
        self.current = self.next_tick();
        SourceStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> SimulationConfig {
        SimulationConfig {
            accel_noise_g: 0.0,
            gyro_noise_dps: 0.0,
            gyro_drop_probability: 0.0,
            impact_every: 10,
            impact_len: 2,
            max_ticks: Some(20),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_resting_reading() {
        let mut source = SimulatedSource::new(quiet()).unwrap();
        assert!(source.acceleration_available() && source.angular_rate_available());
        assert_eq!(source.read_acceleration(), XYZ::new(GRAVITY_G));
        assert_eq!(source.read_angular_rate(), XYZ::default());
        assert!(!source.acceleration_available());
    }

    #[test]
    fn test_impact_bursts() {
        let mut source = SimulatedSource::new(quiet()).unwrap();
        let mut impacts = 0;
        loop {
            if source.read_acceleration() != XYZ::new(GRAVITY_G) {
                impacts += 1;
            }
            if source.advance() == SourceStatus::Exhausted {
                break;
            }
        }
        assert_eq!(source.ticks(), 20);
        assert_eq!(impacts, 4);
    }

    #[test]
    fn test_same_seed_same_readings() {
        let config = SimulationConfig {
            max_ticks: Some(50),
            ..SimulationConfig::default()
        };
        let mut a = SimulatedSource::new(config.clone()).unwrap();
        let mut b = SimulatedSource::new(config).unwrap();
        for _ in 0..50 {
            assert_eq!(a.read_acceleration(), b.read_acceleration());
            assert_eq!(a.angular_rate_available(), b.angular_rate_available());
            a.advance();
            b.advance();
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = SimulationConfig {
            gyro_drop_probability: 1.5,
            ..SimulationConfig::default()
        };
        assert!(SimulatedSource::new(config).is_err());
        let config = SimulationConfig {
            accel_noise_g: -1.0,
            ..SimulationConfig::default()
        };
        assert!(SimulatedSource::new(config).is_err());
    }
}
