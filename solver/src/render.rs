use std::{io::Write, thread, time::Duration};

use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use common::{Grid, Snapshot, Trace, TraceEntry, TraceKind};

/// One snapshot per trace entry, built on a copy of `grid` with its visited
/// markers cleared and then repainted entry by entry.
pub fn frames(grid: &Grid, trace: &Trace) -> Vec<Snapshot> {
    let mut frame = grid.clone();
    frame.clear_visited();

    trace
        .iter()
        .map(|entry| {
            frame.set_visited(entry.position);
            frame.snapshot(entry.position)
        })
        .collect()
}

fn caption(entry: &TraceEntry) -> String {
    let verb = match entry.kind {
        TraceKind::Visit => "visit",
        TraceKind::Backtrack => "back to",
    };
    format!("step {}: {} {}", entry.order, verb, entry.position)
}

/// Redraws the maze in place for every step of `trace`, pausing `delay`
/// between frames.
pub fn replay<W: Write>(
    out: &mut W,
    grid: &Grid,
    trace: &Trace,
    delay: Duration,
) -> std::io::Result<()> {
    execute!(out, Hide)?;

    for (entry, snapshot) in trace.iter().zip(frames(grid, trace)) {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        for row in snapshot.rows() {
            out.queue(Print(row))?.queue(Print("\r\n"))?;
        }
        queue!(out, Print("\r\n"), Print(caption(entry)), Print("\r\n"))?;
        out.flush()?;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    execute!(out, Show)?;
    writeln!(out)
}
