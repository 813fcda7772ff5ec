//! Custom test assertions

use openai_completions::{CompletionResponse, ModelId};

/// Assertions for CompletionResponse
pub trait CompletionResponseAssertions {
    /// Assert response has at least one choice
    fn assert_has_choices(&self);

    /// Assert choice indices are 0..n in order
    fn assert_choices_in_order(&self);
}

impl<M: ModelId> CompletionResponseAssertions for CompletionResponse<M> {
    fn assert_has_choices(&self) {
        assert!(
            !self.choices.is_empty(),
            "Expected response to have at least one choice, got none"
        );
    }

    fn assert_choices_in_order(&self) {
        for (position, choice) in self.choices.iter().enumerate() {
            assert_eq!(
                choice.index as usize, position,
                "choice at position {} has index {}",
                position, choice.index
            );
        }
    }
}
