//! The cyclic playlist of morph targets.

use crate::sampler::PatternSpec;

#[derive(Debug, Clone)]
pub struct PatternSequencer {
    specs: Vec<PatternSpec>,
    index: usize,
}

impl PatternSequencer {
    /// `specs` must be non-empty; the sequencer starts on the first entry.
    pub fn new(specs: Vec<PatternSpec>) -> Self {
        assert!(!specs.is_empty(), "pattern list must be non-empty");
        Self { specs, index: 0 }
    }

    /// The default playlist: starts in free drift, walks through text lines
    /// in both length tiers, ends on the heart.
    pub fn playlist() -> Self {
        Self::new(vec![
            PatternSpec::Drift,
            PatternSpec::Text("COSMOS".into()),
            PatternSpec::Text("Look at the stars".into()),
            PatternSpec::Text("See how they shine".into()),
            PatternSpec::Text("A sky full of light".into()),
            PatternSpec::Text("HELLO".into()),
            PatternSpec::Heart,
        ])
    }

    pub fn current(&self) -> &PatternSpec {
        &self.specs[self.index]
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step to the next spec, wrapping at the end of the list.
    pub fn advance(&mut self) -> &PatternSpec {
        self.index = (self.index + 1) % self.specs.len();
        &self.specs[self.index]
    }
}
