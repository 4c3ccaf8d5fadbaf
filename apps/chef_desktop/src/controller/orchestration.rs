//! Frame-local queue from UI widgets to the reducer.

use crate::controller::events::UiAction;

/// Actions recorded while a frame is drawn; applied at the start of the next one.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<UiAction>,
}

impl ActionQueue {
    pub fn dispatch(&mut self, action: UiAction) {
        tracing::debug!(action = action.name(), "queued ui action");
        self.pending.push(action);
    }

    pub fn take(&mut self) -> Vec<UiAction> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Course;

    #[test]
    fn take_drains_in_dispatch_order() {
        let mut queue = ActionQueue::default();
        queue.dispatch(UiAction::SeedShowcase);
        queue.dispatch(UiAction::AddShowcaseDish(Course::Main));

        assert_eq!(
            queue.take(),
            [UiAction::SeedShowcase, UiAction::AddShowcaseDish(Course::Main)]
        );
        assert!(queue.is_empty());
    }
}
