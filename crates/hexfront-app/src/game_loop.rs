//! Frame loop thread — drives the engine at the configured frame rate
//! and publishes snapshots.
//!
//! The engine moves into the loop thread, which then owns all mutable
//! simulation state. Each frame issues both rosters' intents, advances
//! the engine by the measured elapsed milliseconds, and stores the
//! snapshot in shared state for synchronous polling. Shutdown arrives
//! via an `mpsc` channel.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use hexfront_core::enums::Team;
use hexfront_core::state::SimSnapshot;
use hexfront_sim::engine::SimulationEngine;

/// Commands accepted by the loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    Shutdown,
}

/// Handle to a running frame loop.
pub struct LoopHandle {
    pub commands: mpsc::Sender<LoopCommand>,
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    pub thread: JoinHandle<()>,
}

/// Spawn the frame loop in a new thread. The engine must already be
/// fully set up — spawning units can fail, and that belongs to the
/// startup path, not the loop.
pub fn spawn_frame_loop(mut engine: SimulationEngine, frame_rate: u32) -> LoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let snapshot_slot = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("hexfront-frame-loop".into())
        .spawn(move || {
            run_frame_loop(&mut engine, &cmd_rx, &snapshot_slot, frame_rate);
        })
        .expect("failed to spawn frame loop thread");

    LoopHandle {
        commands: cmd_tx,
        latest_snapshot,
        thread,
    }
}

/// The frame loop. Runs until Shutdown or channel disconnect.
fn run_frame_loop(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
    frame_rate: u32,
) {
    let frame_duration = Duration::from_nanos(1_000_000_000 / u64::from(frame_rate.max(1)));
    let mut next_frame_time = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // 1. Drain pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Intents first, then advance by the measured elapsed time.
        engine.issue_moves(Team::Blue);
        engine.issue_moves(Team::Red);
        let now = Instant::now();
        let delta_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;
        let snapshot = engine.tick(delta_ms);

        // 3. Publish for synchronous polling.
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. Sleep until the next frame.
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexfront_core::types::HexCoord;
    use hexfront_sim::engine::SimConfig;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();
        tx.send(LoopCommand::Shutdown).unwrap();
        assert_eq!(rx.try_recv().unwrap(), LoopCommand::Shutdown);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let mut engine = SimulationEngine::new(SimConfig {
            rows: 4,
            cols: 4,
            ..Default::default()
        });
        engine
            .spawn_unit(HexCoord::new(0, 0), Team::Blue, 1.0)
            .unwrap();

        let handle = spawn_frame_loop(engine, 60);
        std::thread::sleep(Duration::from_millis(100));
        handle.commands.send(LoopCommand::Shutdown).unwrap();
        handle.thread.join().unwrap();

        let slot = handle.latest_snapshot.lock().unwrap();
        let snapshot = slot.as_ref().expect("loop should have published");
        assert!(snapshot.time.tick > 0);
        assert_eq!(snapshot.units.len(), 1);
    }

    #[test]
    fn test_loop_exits_when_sender_drops() {
        let engine = SimulationEngine::new(SimConfig {
            rows: 2,
            cols: 2,
            ..Default::default()
        });
        let handle = spawn_frame_loop(engine, 60);
        drop(handle.commands);
        handle.thread.join().unwrap();
    }
}
