// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Dimension, DimensionScores};

/// Sub-scores strictly below this are flagged before anything is praised.
pub const CONCERN_THRESHOLD: u8 = 5;

pub const FIRST_CHECKIN_HINT: &str = "Faça seu primeiro check-in para ver suas métricas!";

pub fn doing_well_message(dim: Dimension) -> &'static str {
    match dim {
        Dimension::Sleep => "Você dormiu bem! Continue mantendo essa rotina. 😴",
        Dimension::Mood => "Seu humor está ótimo! Aproveite o dia. 😊",
        Dimension::Activity => "Parabéns pela atividade física! Continue assim. 💪",
        Dimension::Finance => "Suas finanças estão equilibradas! 💰",
    }
}

pub fn needs_attention_message(dim: Dimension) -> &'static str {
    match dim {
        Dimension::Sleep => "Tente dormir mais cedo hoje. O sono é fundamental para o equilíbrio! 🌙",
        Dimension::Mood => "Que tal uma meditação ou conversar com alguém querido? 💚",
        Dimension::Activity => "Uma caminhada de 15 minutos pode fazer maravilhas! 🚶",
        Dimension::Finance => "Revise seus gastos e veja onde pode economizar. 📊",
    }
}

/// Lowest sub-score; the first dimension in priority order wins ties.
pub fn weakest(scores: &DimensionScores) -> (Dimension, u8) {
    let mut it = scores.iter();
    let mut best = it.next().unwrap_or((Dimension::Sleep, scores.sleep));
    for (dim, v) in it {
        if v < best.1 {
            best = (dim, v);
        }
    }
    best
}

/// Highest sub-score; the first dimension in priority order wins ties.
pub fn strongest(scores: &DimensionScores) -> (Dimension, u8) {
    let mut it = scores.iter();
    let mut best = it.next().unwrap_or((Dimension::Sleep, scores.sleep));
    for (dim, v) in it {
        if v > best.1 {
            best = (dim, v);
        }
    }
    best
}

pub fn select_insight(scores: &DimensionScores) -> &'static str {
    let (dim, value) = weakest(scores);
    if value < CONCERN_THRESHOLD {
        return needs_attention_message(dim);
    }
    doing_well_message(strongest(scores).0)
}
