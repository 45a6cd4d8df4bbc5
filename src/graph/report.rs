//! Human-readable cycle reports.

/// Renders the message carried by [`Error::CycleDetected`](crate::Error::CycleDetected).
///
/// The first line states how many cycles were found; each following line lists
/// one cycle as its names joined by `->`, closed by repeating the first name.
///
/// ```text
/// Detected 2 cycles:
///   a -> b -> a
///   c -> e -> d -> c
/// ```
#[must_use]
pub fn render_cycle_report(cycles: &[Vec<String>]) -> String {
    let plural = if cycles.len() == 1 { "" } else { "s" };
    let mut message = format!("Detected {} cycle{plural}:", cycles.len());

    for cycle in cycles {
        message.push_str("\n  ");
        message.push_str(&cycle.join(" -> "));
        if let Some(first) = cycle.first() {
            message.push_str(" -> ");
            message.push_str(first);
        }
    }

    message
}
