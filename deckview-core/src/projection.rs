//! Display projections: values computed purely from the current index.
//!
//! None of these hold state of their own; the presenter recomputes them from
//! the navigator whenever it draws.

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub current: usize,
    pub total: usize,
    /// Progress bar fill, `current / total * 100`.
    pub progress_percent: f64,
    /// One flag per jump control, slide 1 first. Exactly one is set.
    pub dots: Vec<bool>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Projection {
    pub fn compute(current: usize, total: usize) -> Self {
        let progress_percent = if total == 0 {
            0.0
        } else {
            current as f64 / total as f64 * 100.0
        };
        Self {
            current,
            total,
            progress_percent,
            dots: (1..=total).map(|i| i == current).collect(),
            prev_disabled: current <= 1,
            next_disabled: current >= total,
        }
    }

    /// Progress as a ratio in `0.0..=1.0`, for gauge widgets.
    pub fn progress_ratio(&self) -> f64 {
        (self.progress_percent / 100.0).clamp(0.0, 1.0)
    }

    /// Counter display text.
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }

    /// 1-based index of the active dot.
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.iter().position(|&active| active).map(|i| i + 1)
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        index
            .checked_sub(1)
            .and_then(|i| self.dots.get(i))
            .copied()
            .unwrap_or(false)
    }
}

/// Accessible label for a jump control.
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {index}")
}
