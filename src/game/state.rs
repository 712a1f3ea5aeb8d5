use bevy_ecs::resource::Resource;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player touched a ghost outside power mode.
    Caught,
    /// Every pellet on the board was consumed.
    Cleared,
}

/// Latched round result. Once an outcome is recorded the round is over and
/// further outcomes are ignored.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct RoundState {
    outcome: Option<RoundOutcome>,
}

impl RoundState {
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Records the round's outcome; the first recorded outcome wins.
    pub fn finish(&mut self, outcome: RoundOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }
}
