use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::IntentError;

/// The five fixed authority signals. The set is closed and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthoritySignal {
    StrategicCognition,
    SystemsConstruction,
    OperationalTransformation,
    InstitutionalLeadership,
    PublicServiceStatesmanship,
}

impl AuthoritySignal {
    /// Total number of signals.
    pub const COUNT: usize = 5;

    /// All variants in canonical order.
    pub const ALL: [AuthoritySignal; 5] = [
        Self::StrategicCognition,
        Self::SystemsConstruction,
        Self::OperationalTransformation,
        Self::InstitutionalLeadership,
        Self::PublicServiceStatesmanship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrategicCognition => "strategic-cognition",
            Self::SystemsConstruction => "systems-construction",
            Self::OperationalTransformation => "operational-transformation",
            Self::InstitutionalLeadership => "institutional-leadership",
            Self::PublicServiceStatesmanship => "public-service-statesmanship",
        }
    }

    /// Position in [`AuthoritySignal::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::StrategicCognition => 0,
            Self::SystemsConstruction => 1,
            Self::OperationalTransformation => 2,
            Self::InstitutionalLeadership => 3,
            Self::PublicServiceStatesmanship => 4,
        }
    }
}

impl fmt::Display for AuthoritySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthoritySignal {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|signal| signal.as_str() == s)
            .ok_or_else(|| IntentError::UnknownSignal {
                name: s.to_string(),
            })
    }
}

/// A sparse signal → weight layer. Missing signals read as 0.
pub type SignalMap = BTreeMap<AuthoritySignal, f64>;

/// A fully resolved vector: exactly one finite, non-negative weight per signal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "SignalMap", from = "SignalMap")]
pub struct EffectiveVector {
    weights: [f64; AuthoritySignal::COUNT],
}

impl EffectiveVector {
    pub const ZERO: EffectiveVector = EffectiveVector {
        weights: [0.0; AuthoritySignal::COUNT],
    };

    /// Build from raw weights in canonical signal order.
    /// Non-finite and negative entries are coerced to 0.
    pub fn from_weights(weights: [f64; AuthoritySignal::COUNT]) -> Self {
        let mut out = Self::ZERO;
        for (slot, w) in out.weights.iter_mut().zip(weights) {
            *slot = sanitize(w);
        }
        out
    }

    pub fn get(&self, signal: AuthoritySignal) -> f64 {
        self.weights[signal.index()]
    }

    pub fn set(&mut self, signal: AuthoritySignal, weight: f64) {
        self.weights[signal.index()] = sanitize(weight);
    }

    /// Weights in canonical signal order.
    pub fn weights(&self) -> &[f64; AuthoritySignal::COUNT] {
        &self.weights
    }

    pub fn iter(&self) -> impl Iterator<Item = (AuthoritySignal, f64)> + '_ {
        AuthoritySignal::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Sum of all five weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|w| *w == 0.0)
    }

    /// Signals ranked ascending by weight. Ties keep canonical order.
    pub fn ascending_signals(&self) -> [AuthoritySignal; AuthoritySignal::COUNT] {
        let mut order = AuthoritySignal::ALL;
        order.sort_by(|a, b| self.get(*a).total_cmp(&self.get(*b)));
        order
    }

    /// Squared Euclidean distance to `other`.
    pub fn squared_distance(&self, other: &EffectiveVector) -> f64 {
        self.weights
            .iter()
            .zip(other.weights.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

impl From<EffectiveVector> for SignalMap {
    fn from(v: EffectiveVector) -> Self {
        v.iter().collect()
    }
}

impl From<SignalMap> for EffectiveVector {
    fn from(map: SignalMap) -> Self {
        let mut out = Self::ZERO;
        for (signal, weight) in map {
            out.set(signal, weight);
        }
        out
    }
}

fn sanitize(w: f64) -> f64 {
    if w.is_finite() {
        w.max(0.0)
    } else {
        0.0
    }
}
