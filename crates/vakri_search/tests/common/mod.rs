//! Deterministic synthetic oracle for integration tests.
//!
//! Each body follows an analytic longitude model (linear mean motion plus
//! one sinusoidal wobble) whose speed is the exact derivative. Wobble
//! amplitudes large enough to drive the speed negative produce clean
//! retrograde arcs at known times.

#![allow(dead_code)]

use std::collections::HashMap;
use std::f64::consts::TAU;

use vakri_core::{Body, Ephemeris, EphemerisError, EphemerisSnapshot};

/// Epoch all default models are anchored to (J2000.0).
pub const EPOCH_JD: f64 = 2_451_545.0;

#[derive(Debug, Clone, Copy)]
pub struct BodyModel {
    pub epoch_longitude_deg: f64,
    pub mean_rate: f64,
    pub wobble_amplitude_deg: f64,
    pub wobble_period_days: f64,
    pub wobble_phase_days: f64,
}

impl BodyModel {
    pub fn linear(epoch_longitude_deg: f64, mean_rate: f64) -> Self {
        Self {
            epoch_longitude_deg,
            mean_rate,
            wobble_amplitude_deg: 0.0,
            wobble_period_days: 1.0,
            wobble_phase_days: 0.0,
        }
    }

    fn phase(&self, dt: f64) -> f64 {
        TAU * (dt - self.wobble_phase_days) / self.wobble_period_days
    }

    pub fn longitude_deg(&self, dt: f64) -> f64 {
        self.epoch_longitude_deg + self.mean_rate * dt
            + self.wobble_amplitude_deg * self.phase(dt).sin()
    }

    pub fn speed(&self, dt: f64) -> f64 {
        self.mean_rate
            + self.wobble_amplitude_deg * (TAU / self.wobble_period_days) * self.phase(dt).cos()
    }
}

/// A model whose longitude speed is exactly `sin(2pi (t - t0) / 100)` with
/// the positive-to-negative crossing (station retrograde) at
/// `entering_offset_days` past the epoch. The matching station direct
/// follows 50 days later.
pub fn sine_speed_model(entering_offset_days: f64) -> BodyModel {
    BodyModel {
        epoch_longitude_deg: 180.0,
        mean_rate: 0.0,
        wobble_amplitude_deg: 100.0 / TAU,
        wobble_period_days: 100.0,
        wobble_phase_days: entering_offset_days - 25.0,
    }
}

pub struct SyntheticOracle {
    epoch_jd: f64,
    models: HashMap<Body, BodyModel>,
}

impl SyntheticOracle {
    /// An oracle with no bodies; add models with [`with_model`].
    ///
    /// [`with_model`]: SyntheticOracle::with_model
    pub fn empty() -> Self {
        Self {
            epoch_jd: EPOCH_JD,
            models: HashMap::new(),
        }
    }

    /// All ten bodies with J2000-anchored models. Mean rates and wobble
    /// periods are loosely realistic; every roster body's wobble is strong
    /// enough to go retrograde once per synodic period.
    pub fn j2000_defaults() -> Self {
        let mut models = HashMap::new();
        models.insert(Body::Sun, BodyModel::linear(280.46, 0.9856));
        models.insert(Body::Moon, BodyModel::linear(218.32, 13.1764));
        models.insert(
            Body::Mercury,
            BodyModel {
                epoch_longitude_deg: 250.2,
                mean_rate: 0.9856,
                wobble_amplitude_deg: 22.0,
                wobble_period_days: 116.0,
                wobble_phase_days: 0.0,
            },
        );
        models.insert(
            Body::Venus,
            BodyModel {
                epoch_longitude_deg: 181.98,
                mean_rate: 0.9856,
                wobble_amplitude_deg: 100.0,
                wobble_period_days: 584.0,
                wobble_phase_days: 130.0,
            },
        );
        models.insert(
            Body::Mars,
            BodyModel {
                epoch_longitude_deg: 355.43,
                mean_rate: 0.5240,
                wobble_amplitude_deg: 80.0,
                wobble_period_days: 780.0,
                wobble_phase_days: 320.0,
            },
        );
        models.insert(
            Body::Jupiter,
            BodyModel {
                epoch_longitude_deg: 34.35,
                mean_rate: 0.0831,
                wobble_amplitude_deg: 10.0,
                wobble_period_days: 399.0,
                wobble_phase_days: 40.0,
            },
        );
        models.insert(
            Body::Saturn,
            BodyModel {
                epoch_longitude_deg: 50.08,
                mean_rate: 0.0335,
                wobble_amplitude_deg: 6.0,
                wobble_period_days: 378.0,
                wobble_phase_days: 85.0,
            },
        );
        models.insert(
            Body::Uranus,
            BodyModel {
                epoch_longitude_deg: 314.05,
                mean_rate: 0.0117,
                wobble_amplitude_deg: 4.0,
                wobble_period_days: 370.0,
                wobble_phase_days: 160.0,
            },
        );
        models.insert(
            Body::Neptune,
            BodyModel {
                epoch_longitude_deg: 304.35,
                mean_rate: 0.0060,
                wobble_amplitude_deg: 3.0,
                wobble_period_days: 367.0,
                wobble_phase_days: 230.0,
            },
        );
        models.insert(
            Body::Pluto,
            BodyModel {
                epoch_longitude_deg: 238.93,
                mean_rate: 0.0040,
                wobble_amplitude_deg: 2.5,
                wobble_period_days: 367.0,
                wobble_phase_days: 300.0,
            },
        );
        Self {
            epoch_jd: EPOCH_JD,
            models,
        }
    }

    pub fn with_model(mut self, body: Body, model: BodyModel) -> Self {
        self.models.insert(body, model);
        self
    }

    pub fn model(&self, body: Body) -> &BodyModel {
        &self.models[&body]
    }

    pub fn epoch_jd(&self) -> f64 {
        self.epoch_jd
    }
}

impl Ephemeris for SyntheticOracle {
    fn calc(&self, body: Body, jd_ut: f64) -> Result<EphemerisSnapshot, EphemerisError> {
        let model = self
            .models
            .get(&body)
            .ok_or_else(|| EphemerisError::DataUnavailable(format!("no model for {body}")))?;
        let dt = jd_ut - self.epoch_jd;
        Ok(EphemerisSnapshot {
            jd_ut,
            longitude_deg: model.longitude_deg(dt).rem_euclid(360.0),
            latitude_deg: 0.0,
            longitude_speed: model.speed(dt),
            latitude_speed: 0.0,
            distance_au: 1.0,
            distance_speed: 0.0,
        })
    }
}
