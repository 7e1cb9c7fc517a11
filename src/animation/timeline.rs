//! Labeled Timeline
//!
//! Ordered checkpoints on the sequence clock. Stage boundaries are recorded
//! as named labels (`centered`, `reposition`, `fade`, `done`) when the font
//! arrives, and the state machine triggers off them; no stage can start
//! before its predecessor's label is reached.

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    labels: Vec<(String, f32)>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a checkpoint. Labels are kept in insertion order.
    pub fn add_label(&mut self, name: &str, at: f32) {
        self.labels.push((name.to_string(), at));
    }

    /// Time of a checkpoint, if recorded.
    #[must_use]
    pub fn time_of(&self, name: &str) -> Option<f32> {
        self.labels
            .iter()
            .find(|(label, _)| label == name)
            .map(|&(_, at)| at)
    }

    /// Time of the last checkpoint, or `0.0` for an empty timeline.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.labels
            .iter()
            .map(|&(_, at)| at)
            .fold(0.0, f32::max)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, f32)> {
        self.labels.iter().map(|(name, at)| (name.as_str(), *at))
    }
}
