use std::io::Write;

use crate::client::PrioritizeCall;
use crate::types::PrioritizedTask;
use crate::Result;

/// The task list container. `render` throws away whatever was displayed
/// and rebuilds one card per task, in the order the server sent them; the
/// client never re-sorts.
///
/// The view also remembers the epoch of the last applied prioritize call,
/// so a response that was overtaken by a newer call cannot clobber the
/// list (last-issued-wins rather than last-arrival-wins).
#[derive(Debug, Default)]
pub struct TaskListView {
    cards: Vec<String>,
    last_epoch: u64,
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the container and rebuild it from `tasks`.
    pub fn render(&mut self, tasks: &[PrioritizedTask]) {
        self.cards.clear();
        self.cards.extend(tasks.iter().map(render_card));
    }

    /// Apply a prioritize response unless a newer call already rendered.
    /// Returns whether the view changed.
    pub fn apply(&mut self, call: &PrioritizeCall) -> bool {
        if call.epoch <= self.last_epoch {
            tracing::debug!(
                "Dropping stale prioritize response (epoch {} <= {})",
                call.epoch,
                self.last_epoch
            );
            return false;
        }
        self.last_epoch = call.epoch;
        self.render(&call.tasks);
        true
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Write the current cards to an explicit target.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.cards.is_empty() {
            writeln!(out, "No tasks to show.")?;
            return Ok(());
        }
        for card in &self.cards {
            writeln!(out, "{}", card)?;
        }
        Ok(())
    }
}

fn render_card(task: &PrioritizedTask) -> String {
    format!(
        "── {} ──\n  Priority Score: {}\n  Status: {}",
        task.name, task.score, task.status
    )
}
