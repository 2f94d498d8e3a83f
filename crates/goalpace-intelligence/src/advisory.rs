// ABOUTME: Advisory rule engine turning weight metrics and daily aggregates into short tips
// ABOUTME: Fixed-priority rules, capped output, and a guaranteed encouragement fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Advisory rule engine
//!
//! Rules are evaluated in a fixed order and each contributes at most one tip:
//!
//! 1. plateau detected
//! 2. rapid weight loss
//! 3. low average hydration over the aggregate window
//! 4. few sport days over the aggregate window
//!
//! If none fires, a single encouragement tip is returned. The list keeps rule
//! order and is truncated (never reordered) at the configured maximum.
//!
//! An empty aggregate window counts as zero water and zero sport days, so a
//! fresh store gets the hydration and activity tips.

use crate::config::intelligence::{AdvisoryConfig, IntelligenceConfig, Language};
use crate::pace_estimator::WeightMetrics;
use crate::Analysis;
use goalpace_core::models::DailyAggregate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of tip, stable across languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    /// Weight has stalled
    Plateau,
    /// Weight is dropping faster than is sustainable
    RapidLoss,
    /// Too little water logged
    Hydration,
    /// Too few sport days
    Activity,
    /// Nothing to flag
    Encouragement,
}

impl TipKind {
    /// Tip text in the given language
    #[must_use]
    pub const fn message(self, language: Language) -> &'static str {
        match language {
            Language::German => match self {
                Self::Plateau => {
                    "Plateau erkannt: Variiere Kalorienbilanz leicht und prüfe Wasserkonsum."
                }
                Self::RapidLoss => {
                    "Sehr schneller Gewichtsverlust: Achte auf Gesundheit und setze auf nachhaltige Pace."
                }
                Self::Hydration => "Mehr trinken: Ziel 35 ml/kg pro Tag hilft dem Stoffwechsel.",
                Self::Activity => {
                    "Mehr Bewegung: 2–3 leichte Sporteinheiten pro Woche steigern den Trend."
                }
                Self::Encouragement => "Weiter so! Stabiler Kurs – konsistent bleiben.",
            },
            Language::English => match self {
                Self::Plateau => {
                    "Plateau detected: vary your calorie balance slightly and check your water intake."
                }
                Self::RapidLoss => {
                    "Very fast weight loss: look after your health and aim for a sustainable pace."
                }
                Self::Hydration => {
                    "Drink more: aiming for 35 ml/kg per day helps your metabolism."
                }
                Self::Activity => {
                    "Move more: 2–3 light workouts per week improve the trend."
                }
                Self::Encouragement => "Keep it up! Steady course – stay consistent.",
            },
            Language::Polish => match self {
                Self::Plateau => {
                    "Wykryto plateau: lekko zmień bilans kaloryczny i sprawdź ilość wypijanej wody."
                }
                Self::RapidLoss => {
                    "Bardzo szybka utrata wagi: dbaj o zdrowie i stawiaj na zrównoważone tempo."
                }
                Self::Hydration => "Pij więcej: cel 35 ml/kg dziennie wspiera metabolizm.",
                Self::Activity => {
                    "Więcej ruchu: 2–3 lekkie treningi w tygodniu poprawiają trend."
                }
                Self::Encouragement => "Tak trzymaj! Stabilny kurs – zachowaj konsekwencję.",
            },
        }
    }
}

/// A single tip ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    /// Which rule produced the tip
    pub kind: TipKind,
    /// Localized text
    pub message: String,
}

/// Hydration and activity over the most recent day records
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailingAggregates {
    /// Day records included
    pub days: usize,
    /// Mean water units per day
    pub average_water: f64,
    /// Days with sport
    pub sport_days: usize,
}

/// Values the rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdvisoryInputs {
    /// Plateau flag from the metrics
    pub plateau: bool,
    /// Pace in kg/day from the metrics
    pub pace: f64,
    /// Hydration and activity over the aggregate window
    pub aggregates: TrailingAggregates,
}

impl AdvisoryInputs {
    /// Build rule inputs; metrics without enough data count as no plateau and zero pace
    #[must_use]
    pub fn new(metrics: Analysis<&WeightMetrics>, aggregates: TrailingAggregates) -> Self {
        let (plateau, pace) = match metrics {
            Analysis::Computed(metrics) => (metrics.plateau, metrics.pace),
            Analysis::InsufficientData => (false, 0.0),
        };
        Self {
            plateau,
            pace,
            aggregates,
        }
    }
}

/// Rule engine producing prioritized tips
pub struct AdvisoryEngine {
    config: AdvisoryConfig,
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisoryEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().advisory.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: AdvisoryConfig) -> Self {
        Self { config }
    }

    /// Tips for the given metrics and day records
    #[must_use]
    pub fn advise_for(
        &self,
        metrics: Analysis<&WeightMetrics>,
        aggregates: &[DailyAggregate],
    ) -> Vec<Tip> {
        let inputs = AdvisoryInputs::new(metrics, self.trailing_aggregates(aggregates));
        self.advise(&inputs)
    }

    /// Summarize the most recent day records (by count, ordered by date)
    ///
    /// Without any day records the summary is all zeros.
    #[must_use]
    pub fn trailing_aggregates(&self, aggregates: &[DailyAggregate]) -> TrailingAggregates {
        let mut ordered: Vec<&DailyAggregate> = aggregates.iter().collect();
        ordered.sort_by_key(|aggregate| aggregate.date);

        let window_start = ordered
            .len()
            .saturating_sub(self.config.limits.aggregate_window_days);
        let window = &ordered[window_start..];
        if window.is_empty() {
            debug!("No day records; hydration and activity count as zero");
            return TrailingAggregates::default();
        }

        let total_water: u64 = window.iter().map(|day| u64::from(day.water)).sum();
        #[allow(clippy::cast_precision_loss)] // Safe: small counts
        let average_water = total_water as f64 / window.len() as f64;

        TrailingAggregates {
            days: window.len(),
            average_water,
            sport_days: window.iter().filter(|day| day.sport).count(),
        }
    }

    /// Evaluate the rules in priority order
    ///
    /// Always returns between one and `max_tips` tips.
    #[must_use]
    pub fn advise(&self, inputs: &AdvisoryInputs) -> Vec<Tip> {
        let thresholds = &self.config.thresholds;
        let mut kinds = Vec::new();

        if inputs.plateau {
            kinds.push(TipKind::Plateau);
        }
        if inputs.pace < thresholds.rapid_loss_kg_per_day {
            kinds.push(TipKind::RapidLoss);
        }
        if inputs.aggregates.average_water < thresholds.hydration_min_units {
            kinds.push(TipKind::Hydration);
        }
        if inputs.aggregates.sport_days < thresholds.activity_min_days {
            kinds.push(TipKind::Activity);
        }
        if kinds.is_empty() {
            kinds.push(TipKind::Encouragement);
        }

        kinds.truncate(self.config.limits.max_tips.max(1));
        kinds
            .into_iter()
            .map(|kind| Tip {
                kind,
                message: kind.message(self.config.language).to_owned(),
            })
            .collect()
    }
}
