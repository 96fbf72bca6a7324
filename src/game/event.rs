//! Event System
//!
//! The simulation never plays sounds or writes logs itself. It records what
//! happened this frame into per-type queues, and the frame loop drains them:
//! 1. Player thrust spawns a trail puff → sends ThrustEvent
//! 2. Frame loop drains ThrustEvent → plays the jetpack sound
//! 3. Crash/restart/start events → logged

use macroquad::math::Vec2;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
#[derive(Debug, Default)]
pub struct Events {
    /// Jetpack puffed a trail particle
    pub thrust: EventQueue<ThrustEvent>,

    /// Player hit the zapper
    pub crash: EventQueue<CrashEvent>,

    /// A finished run was restarted
    pub restart: EventQueue<RestartEvent>,

    /// Menu was left for the first run
    pub start: EventQueue<StartEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.thrust.clear();
        self.crash.clear();
        self.restart.clear();
        self.start.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// A trail particle was emitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustEvent {
    /// Where the puff appeared
    pub position: Vec2,
}

/// The run ended on the zapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrashEvent {
    pub distance: u32,
    /// Best distance after this crash
    pub best_distance: u32,
    /// Did this run set a new best?
    pub new_best: bool,
}

/// Run restarted from the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartEvent {
    /// How the restart was requested
    pub trigger: RestartTrigger,
    /// Lane index the zapper respawned in
    pub lane: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartTrigger {
    Key,
    Button,
}

/// First run started from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartEvent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();

        events.crash.send(CrashEvent {
            distance: 12,
            best_distance: 12,
            new_best: true,
        });
        events.thrust.send(ThrustEvent { position: Vec2::ZERO });

        assert_eq!(events.crash.len(), 1);
        assert_eq!(events.thrust.len(), 1);

        events.clear_all();
        assert!(events.crash.is_empty());
        assert!(events.thrust.is_empty());
    }
}
