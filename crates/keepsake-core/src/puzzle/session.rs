use std::collections::HashSet;

use crate::api::experience::AppContext;
use crate::api::types::{AppEvent, EVENT_WORD_FOUND};
use crate::assets::catalog::FeedbackKind;
use crate::core::rng::Rng;
use crate::puzzle::evaluate::{evaluate, MatchOutcome};
use crate::puzzle::grid::{Grid, PLACEMENTS, WORDS};
use crate::puzzle::line::{line, Cell};
use crate::systems::notify::Notification;

/// Gross pointer phase of the puzzle screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Selecting,
    /// A notification is showing; all pointer input is inert.
    Blocked,
}

/// The active drag span. `end` tracks the latest cell the pointer crossed;
/// `start` never moves once the drag begins.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub start: Cell,
    pub end: Cell,
}

/// One attempt at the word search: a fresh grid, the found-word set, the
/// in-flight drag and at most one feedback notification. Progress lives and
/// dies with the session; navigating away discards it.
pub struct PuzzleSession {
    grid: Grid,
    found: HashSet<&'static str>,
    selection: Option<Selection>,
    notification: Option<Notification>,
    complete_pending: bool,
    completed: bool,
}

impl PuzzleSession {
    pub fn new(rng: &mut Rng) -> Self {
        Self {
            grid: Grid::build(rng),
            found: HashSet::new(),
            selection: None,
            notification: None,
            complete_pending: false,
            completed: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.notification.is_some() {
            SessionPhase::Blocked
        } else if self.selection.is_some() {
            SessionPhase::Selecting
        } else {
            SessionPhase::Idle
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn found_words(&self) -> &HashSet<&'static str> {
        &self.found
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Cells the in-flight drag currently denotes.
    pub fn selection_cells(&self) -> Vec<Cell> {
        self.selection
            .map(|s| line(s.start, s.end))
            .unwrap_or_default()
    }

    /// Cells covered by placements of already-found words.
    pub fn found_cells(&self) -> Vec<Cell> {
        PLACEMENTS
            .iter()
            .filter(|p| self.found.contains(p.word))
            .flat_map(|p| p.cells())
            .collect()
    }

    pub fn pointer_down(&mut self, cell: Cell) {
        if self.notification.is_some() {
            return;
        }
        self.selection = Some(Selection {
            start: cell,
            end: cell,
        });
    }

    pub fn pointer_move(&mut self, cell: Cell) {
        if self.notification.is_some() {
            return;
        }
        if let Some(selection) = &mut self.selection {
            selection.end = cell;
        }
    }

    /// Release the drag: read the selected run against the word list and
    /// raise feedback. A release with no drag in flight is a no-op.
    pub fn pointer_up(&mut self, ctx: &mut AppContext) {
        if self.notification.is_some() {
            self.selection = None;
            return;
        }
        let Some(selection) = self.selection.take() else {
            return;
        };
        let cells = line(selection.start, selection.end);
        match evaluate(&cells, &self.grid, &self.found) {
            MatchOutcome::NewMatch(word) => {
                self.found.insert(word);
                log::info!("found {word} ({}/{})", self.found.len(), WORDS.len());
                ctx.emit_event(AppEvent::new(
                    EVENT_WORD_FOUND,
                    self.found.len() as f32,
                    WORDS.len() as f32,
                    0.0,
                ));
                self.notification = Some(Notification::show(FeedbackKind::Correct, ctx));
                if self.found.len() == WORDS.len() {
                    // Hold the completion signal until the player has seen
                    // the final feedback resolve.
                    self.complete_pending = true;
                }
            }
            MatchOutcome::Wrong => {
                self.notification = Some(Notification::show(FeedbackKind::Wrong, ctx));
            }
            MatchOutcome::AlreadyFound(_) | MatchOutcome::Ignored => {}
        }
    }

    /// The bridge saw the notification sound finish. A soundless
    /// notification ignores this, since its deadline is the only trigger. True
    /// when the dismissal releases the completion signal.
    pub fn audio_ended(&mut self, ctx: &mut AppContext) -> bool {
        if self.notification.as_ref().is_some_and(Notification::has_sound) {
            self.dismiss(ctx)
        } else {
            false
        }
    }

    /// Advance the notification deadline. True when a dismissal releases
    /// the completion signal.
    pub fn tick(&mut self, dt: f32, ctx: &mut AppContext) -> bool {
        if self.notification.as_mut().is_some_and(|n| n.tick(dt)) {
            self.dismiss(ctx)
        } else {
            false
        }
    }

    fn dismiss(&mut self, ctx: &mut AppContext) -> bool {
        let Some(notification) = self.notification.take() else {
            return false;
        };
        notification.finish(ctx);
        if self.complete_pending && !self.completed {
            self.completed = true;
            return true;
        }
        false
    }

    /// Cancel everything still pending. Called when the player navigates
    /// away so no stale playback or deadline outlives the screen.
    pub fn abort(self, ctx: &mut AppContext) {
        if let Some(notification) = self.notification {
            notification.finish(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EVENT_PUZZLE_COMPLETE;
    use crate::puzzle::grid::PLACEMENTS;

    fn session() -> (PuzzleSession, AppContext) {
        let mut ctx = AppContext::new(42);
        let session = PuzzleSession::new(&mut ctx.rng);
        (session, ctx)
    }

    fn drag_placement(session: &mut PuzzleSession, ctx: &mut AppContext, word: &str) {
        let cells: Vec<Cell> = PLACEMENTS
            .iter()
            .find(|p| p.word == word)
            .unwrap()
            .cells()
            .collect();
        session.pointer_down(cells[0]);
        session.pointer_move(*cells.last().unwrap());
        session.pointer_up(ctx);
    }

    #[test]
    fn drag_through_a_word_raises_correct_feedback() {
        let (mut session, mut ctx) = session();
        drag_placement(&mut session, &mut ctx, "BURGER");
        assert!(session.found_words().contains("BURGER"));
        assert_eq!(session.phase(), SessionPhase::Blocked);
        assert_eq!(
            session.notification().unwrap().kind(),
            FeedbackKind::Correct
        );
    }

    #[test]
    fn long_miss_raises_wrong_feedback() {
        let (mut session, mut ctx) = session();
        session.pointer_down(Cell::new(5, 6));
        session.pointer_move(Cell::new(8, 6));
        session.pointer_up(&mut ctx);
        assert!(session.found_words().is_empty());
        assert_eq!(session.notification().unwrap().kind(), FeedbackKind::Wrong);
    }

    #[test]
    fn short_miss_stays_silent() {
        let (mut session, mut ctx) = session();
        session.pointer_down(Cell::new(9, 0));
        session.pointer_move(Cell::new(9, 1));
        session.pointer_up(&mut ctx);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.notification().is_none());
    }

    #[test]
    fn input_is_inert_while_blocked() {
        let (mut session, mut ctx) = session();
        drag_placement(&mut session, &mut ctx, "BURGER");
        assert_eq!(session.phase(), SessionPhase::Blocked);
        session.pointer_down(Cell::new(0, 0));
        assert!(session.selection_cells().is_empty());
        // Dismissal re-enables input.
        assert!(!session.tick(2.0, &mut ctx));
        assert_eq!(session.phase(), SessionPhase::Idle);
        session.pointer_down(Cell::new(0, 0));
        assert_eq!(session.phase(), SessionPhase::Selecting);
    }

    #[test]
    fn pointer_up_without_down_is_ignored() {
        let (mut session, mut ctx) = session();
        session.pointer_up(&mut ctx);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn refinding_a_word_gives_no_feedback() {
        let (mut session, mut ctx) = session();
        drag_placement(&mut session, &mut ctx, "BURGER");
        assert!(!session.tick(2.0, &mut ctx));
        drag_placement(&mut session, &mut ctx, "BURGER");
        assert!(session.notification().is_none());
        assert_eq!(session.found_words().len(), 1);
    }

    #[test]
    fn move_updates_end_only() {
        let (mut session, _ctx) = session();
        session.pointer_down(Cell::new(0, 0));
        session.pointer_move(Cell::new(0, 2));
        session.pointer_move(Cell::new(0, 4));
        let cells = session.selection_cells();
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(0, 4)));
    }

    #[test]
    fn completion_waits_for_final_dismissal() {
        let (mut session, mut ctx) = session();
        for word in ["BURGER", "BAKING", "STICKERS", "MATCHA"] {
            drag_placement(&mut session, &mut ctx, word);
            assert!(!session.tick(2.0, &mut ctx));
        }
        drag_placement(&mut session, &mut ctx, "CHEESECAKE");
        assert_eq!(session.found_words().len(), 5);
        // All words found, but the signal is held while feedback shows.
        assert!(!session.tick(1.0, &mut ctx));
        assert!(session.tick(1.1, &mut ctx));
        // And it never fires twice.
        assert!(!session.tick(5.0, &mut ctx));
        assert!(!ctx
            .events
            .iter()
            .any(|e| e.kind == EVENT_PUZZLE_COMPLETE));
    }

    #[test]
    fn both_dismissal_triggers_resolve_exactly_once() {
        use crate::api::types::EVENT_NOTIFICATION_DISMISSED;
        use crate::assets::catalog::AssetCatalog;
        use crate::assets::manifest::AssetManifest;

        let mut ctx = AppContext::new(42);
        let manifest = AssetManifest::from_json(
            r#"{ "sounds": { "correct": ["yay.mp3"], "wrong": ["buzz.mp3"] } }"#,
        )
        .unwrap();
        ctx.assets = AssetCatalog::from_manifest(&manifest);
        let mut session = PuzzleSession::new(&mut ctx.rng);

        drag_placement(&mut session, &mut ctx, "BURGER");
        assert!(session.notification().unwrap().has_sound());

        // The sound finishes first; the fallback deadline loses the race.
        assert!(!session.audio_ended(&mut ctx));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.tick(10.0, &mut ctx));
        assert!(!session.audio_ended(&mut ctx));

        let dismissals = ctx
            .events
            .iter()
            .filter(|e| e.kind == EVENT_NOTIFICATION_DISMISSED)
            .count();
        assert_eq!(dismissals, 1);
    }

    #[test]
    fn audio_ended_dismisses_only_sound_backed_feedback() {
        let (mut session, mut ctx) = session();
        // Catalog is empty, so this notification is silent.
        drag_placement(&mut session, &mut ctx, "BURGER");
        assert!(!session.audio_ended(&mut ctx));
        assert_eq!(session.phase(), SessionPhase::Blocked);
    }
}
