//! Active training session
//!
//! A session is a deep copy of one training day (or the freestyle circuit)
//! with per-set completion flags, a single rest countdown and an edit mode
//! for structural changes. Nothing here touches the stored plan; the caller
//! persists the record returned by [`ActiveSession::finish`] and drops the
//! session.

use chrono::Utc;
use tracing::{debug, info};

use crate::catalog;
use crate::error::SessionError;
use crate::plan::templates::FREESTYLE_EXERCISES;
use crate::plan::{PlannedExercise, TrainingDay};
use crate::progression::{CompletedSession, Rating};

pub const REST_EXTEND_SECONDS: u32 = 10;

/// Working copy of one plan row plus its completion flags.
/// `done.len()` always equals `planned.sets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExercise {
    pub planned: PlannedExercise,
    pub done: Vec<bool>,
}

impl SessionExercise {
    fn new(planned: PlannedExercise) -> Self {
        let done = vec![false; planned.sets as usize];
        Self { planned, done }
    }

    pub fn completed_sets(&self) -> usize {
        self.done.iter().filter(|d| **d).count()
    }

    pub fn is_complete(&self) -> bool {
        self.done.iter().all(|d| *d)
    }
}

#[derive(Debug)]
pub struct ActiveSession {
    day_index: Option<u32>,
    focus: String,
    exercises: Vec<SessionExercise>,
    rest_seconds: Option<u32>,
    edit_mode: bool,
    next_id: u32,
}

impl ActiveSession {
    /// Open a scheduled day. The day is deep-copied, so session edits never
    /// reach the plan.
    pub fn start(day: &TrainingDay) -> Self {
        let exercises: Vec<SessionExercise> = day
            .exercises
            .iter()
            .cloned()
            .map(SessionExercise::new)
            .collect();
        let next_id = exercises
            .iter()
            .map(|e| e.planned.id)
            .max()
            .unwrap_or(0)
            + 1;
        info!(day_index = day.day_index, focus = %day.focus, "session started");
        Self {
            day_index: Some(day.day_index),
            focus: day.focus.clone(),
            exercises,
            rest_seconds: None,
            edit_mode: false,
            next_id,
        }
    }

    /// Open a session not tied to any plan day, using the fixed circuit.
    pub fn freestyle() -> Self {
        let exercises: Vec<SessionExercise> = FREESTYLE_EXERCISES
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let exercise = catalog::find_exercise(entry.exercise_id)?;
                Some(SessionExercise::new(PlannedExercise {
                    id: i as u32 + 1,
                    exercise_id: Some(exercise.id),
                    name: exercise.name.to_string(),
                    sets: entry.sets,
                    reps: entry.reps.to_string(),
                    rest_seconds: entry.rest_seconds,
                }))
            })
            .collect();
        let next_id = exercises
            .iter()
            .map(|e| e.planned.id)
            .max()
            .unwrap_or(0)
            + 1;
        info!("freestyle session started");
        Self {
            day_index: None,
            focus: "Freestyle".to_string(),
            exercises,
            rest_seconds: None,
            edit_mode: false,
            next_id,
        }
    }

    pub fn day_index(&self) -> Option<u32> {
        self.day_index
    }

    pub fn focus(&self) -> &str {
        &self.focus
    }

    pub fn exercises(&self) -> &[SessionExercise] {
        &self.exercises
    }

    pub fn rest_seconds(&self) -> Option<u32> {
        self.rest_seconds
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.done.len()).sum()
    }

    pub fn completed_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.completed_sets()).sum()
    }

    pub fn progress_percent(&self) -> u32 {
        let total = self.total_sets();
        if total == 0 {
            return 0;
        }
        (self.completed_sets() as f64 * 100.0 / total as f64).round() as u32
    }

    /// Flip one completion flag. Completing a non-final set starts the rest
    /// countdown with that exercise's rest time; toggling off or completing
    /// the exercise's last set clears it.
    pub fn toggle_set(&mut self, exercise_id: u32, set_index: usize) -> Result<(), SessionError> {
        if self.edit_mode {
            return Err(SessionError::EditModeActive);
        }
        let exercise = self.exercise_mut(exercise_id)?;
        let sets = exercise.planned.sets;
        let rest = exercise.planned.rest_seconds;
        let Some(flag) = exercise.done.get_mut(set_index) else {
            return Err(SessionError::SetOutOfRange {
                index: set_index,
                sets,
            });
        };
        *flag = !*flag;
        let now_done = *flag;
        let final_set = set_index + 1 == sets as usize;

        if now_done && !final_set {
            self.rest_seconds = Some(rest);
        } else {
            self.rest_seconds = None;
        }
        Ok(())
    }

    /// One second of wall time. Clears the countdown when it reaches zero.
    pub fn tick(&mut self) {
        if let Some(remaining) = self.rest_seconds {
            let remaining = remaining.saturating_sub(1);
            self.rest_seconds = if remaining == 0 { None } else { Some(remaining) };
        }
    }

    /// Add time to a running countdown; no-op when none is active.
    pub fn extend_rest(&mut self) {
        if let Some(remaining) = &mut self.rest_seconds {
            *remaining += REST_EXTEND_SECONDS;
        }
    }

    /// Stop the clock without touching any completion flag.
    pub fn cancel_rest(&mut self) {
        self.rest_seconds = None;
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        debug!(edit_mode = self.edit_mode, "edit mode toggled");
    }

    pub fn set_name(&mut self, exercise_id: u32, name: impl Into<String>) -> Result<(), SessionError> {
        self.require_edit_mode()?;
        self.exercise_mut(exercise_id)?.planned.name = name.into();
        Ok(())
    }

    pub fn set_reps(&mut self, exercise_id: u32, reps: impl Into<String>) -> Result<(), SessionError> {
        self.require_edit_mode()?;
        self.exercise_mut(exercise_id)?.planned.reps = reps.into();
        Ok(())
    }

    pub fn set_rest(&mut self, exercise_id: u32, rest_seconds: u32) -> Result<(), SessionError> {
        self.require_edit_mode()?;
        self.exercise_mut(exercise_id)?.planned.rest_seconds = rest_seconds;
        Ok(())
    }

    /// Change an exercise's set count. Completion flags are reset to
    /// all-false at the new length; a partial carry-over could misreport
    /// progress, so the reset is deliberate.
    pub fn set_sets(&mut self, exercise_id: u32, sets: u32) -> Result<(), SessionError> {
        self.require_edit_mode()?;
        if sets == 0 {
            return Err(SessionError::InvalidSetCount);
        }
        let exercise = self.exercise_mut(exercise_id)?;
        if exercise.planned.sets != sets {
            exercise.planned.sets = sets;
            exercise.done = vec![false; sets as usize];
        }
        Ok(())
    }

    pub fn remove_exercise(&mut self, exercise_id: u32) -> Result<(), SessionError> {
        self.require_edit_mode()?;
        let position = self
            .exercises
            .iter()
            .position(|e| e.planned.id == exercise_id)
            .ok_or(SessionError::UnknownExercise(exercise_id))?;
        self.exercises.remove(position);
        Ok(())
    }

    /// Append an ad-hoc exercise and return its session-stable id.
    pub fn add_exercise(
        &mut self,
        name: impl Into<String>,
        sets: u32,
        reps: impl Into<String>,
        rest_seconds: u32,
        exercise_id: Option<u32>,
    ) -> Result<u32, SessionError> {
        self.require_edit_mode()?;
        if sets == 0 {
            return Err(SessionError::InvalidSetCount);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.exercises.push(SessionExercise::new(PlannedExercise {
            id,
            exercise_id,
            name: name.into(),
            sets,
            reps: reps.into(),
            rest_seconds,
        }));
        Ok(id)
    }

    /// Close the session into a history record. Requires at least one
    /// completed set; the caller persists the record and drops `self`.
    pub fn finish(&self, rating: Rating) -> Result<CompletedSession, SessionError> {
        if self.completed_sets() == 0 {
            return Err(SessionError::NothingCompleted);
        }
        info!(
            day_index = ?self.day_index,
            progress = self.progress_percent(),
            rating = rating.label(),
            "session finished"
        );
        Ok(CompletedSession {
            id: None,
            date: Utc::now(),
            day_index: self.day_index,
            rating,
        })
    }

    fn require_edit_mode(&self) -> Result<(), SessionError> {
        if self.edit_mode {
            Ok(())
        } else {
            Err(SessionError::EditModeOff)
        }
    }

    fn exercise_mut(&mut self, exercise_id: u32) -> Result<&mut SessionExercise, SessionError> {
        self.exercises
            .iter_mut()
            .find(|e| e.planned.id == exercise_id)
            .ok_or(SessionError::UnknownExercise(exercise_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_planned(id: u32, name: &str, sets: u32, rest_seconds: u32) -> PlannedExercise {
        PlannedExercise {
            id,
            exercise_id: None,
            name: name.to_string(),
            sets,
            reps: "10-12".to_string(),
            rest_seconds,
        }
    }

    fn create_day() -> TrainingDay {
        TrainingDay {
            day_index: 1,
            focus: "Push".to_string(),
            estimated_minutes: 14,
            exercises: vec![
                create_planned(1, "Bench Press", 3, 60),
                create_planned(2, "Lat Pulldown", 2, 45),
            ],
        }
    }

    #[test]
    fn test_start_copies_day_with_clean_flags() {
        let session = ActiveSession::start(&create_day());
        assert_eq!(session.day_index(), Some(1));
        assert_eq!(session.focus(), "Push");
        assert_eq!(session.exercises().len(), 2);
        assert!(session.exercises().iter().all(|e| e.completed_sets() == 0));
        assert_eq!(session.total_sets(), 5);
        assert_eq!(session.progress_percent(), 0);
        assert_eq!(session.rest_seconds(), None);
    }

    #[test]
    fn test_session_edits_never_touch_the_day() {
        let day = create_day();
        let mut session = ActiveSession::start(&day);
        session.toggle_edit_mode();
        session.set_sets(1, 5).unwrap();
        session.remove_exercise(2).unwrap();
        assert_eq!(day.exercises.len(), 2);
        assert_eq!(day.exercises[0].sets, 3);
    }

    #[test]
    fn test_toggle_completes_set_and_starts_rest() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(1, 0).unwrap();
        assert!(session.exercises()[0].done[0]);
        assert_eq!(session.rest_seconds(), Some(60));
        assert_eq!(session.completed_sets(), 1);
    }

    #[test]
    fn test_toggle_off_reverts_and_stops_rest() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(1, 0).unwrap();
        session.toggle_set(1, 0).unwrap();
        assert!(!session.exercises()[0].done[0]);
        assert_eq!(session.rest_seconds(), None);
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn test_final_set_suppresses_rest() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(1, 0).unwrap();
        assert_eq!(session.rest_seconds(), Some(60));
        // Last set of Bench Press: clock stops instead of restarting.
        session.toggle_set(1, 2).unwrap();
        assert_eq!(session.rest_seconds(), None);
        assert_eq!(session.completed_sets(), 2);
    }

    #[test]
    fn test_rest_uses_each_exercises_own_time() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(2, 0).unwrap();
        assert_eq!(session.rest_seconds(), Some(45));
        session.toggle_set(1, 0).unwrap();
        assert_eq!(session.rest_seconds(), Some(60));
    }

    #[test]
    fn test_tick_counts_down_and_clears() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(2, 0).unwrap();
        for _ in 0..44 {
            session.tick();
        }
        assert_eq!(session.rest_seconds(), Some(1));
        session.tick();
        assert_eq!(session.rest_seconds(), None);
        // Idle tick is harmless.
        session.tick();
        assert_eq!(session.rest_seconds(), None);
    }

    #[test]
    fn test_extend_and_cancel_rest() {
        let mut session = ActiveSession::start(&create_day());
        session.extend_rest();
        assert_eq!(session.rest_seconds(), None);

        session.toggle_set(1, 0).unwrap();
        session.extend_rest();
        assert_eq!(session.rest_seconds(), Some(70));

        session.cancel_rest();
        assert_eq!(session.rest_seconds(), None);
        // Canceling the clock marks nothing incomplete.
        assert_eq!(session.completed_sets(), 1);
    }

    #[test]
    fn test_unknown_exercise_and_bad_set_index() {
        let mut session = ActiveSession::start(&create_day());
        assert_eq!(
            session.toggle_set(99, 0),
            Err(SessionError::UnknownExercise(99))
        );
        assert_eq!(
            session.toggle_set(1, 3),
            Err(SessionError::SetOutOfRange { index: 3, sets: 3 })
        );
    }

    #[test]
    fn test_edit_mode_freezes_set_tracking() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_edit_mode();
        assert_eq!(session.toggle_set(1, 0), Err(SessionError::EditModeActive));
        session.toggle_edit_mode();
        assert!(session.toggle_set(1, 0).is_ok());
    }

    #[test]
    fn test_structural_edits_require_edit_mode() {
        let mut session = ActiveSession::start(&create_day());
        assert_eq!(session.set_sets(1, 4), Err(SessionError::EditModeOff));
        assert_eq!(session.remove_exercise(1), Err(SessionError::EditModeOff));
        assert_eq!(
            session.add_exercise("Face Pull", 3, "12-15", 45, None),
            Err(SessionError::EditModeOff)
        );
    }

    #[test]
    fn test_set_count_change_resets_completion() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(1, 0).unwrap();
        session.toggle_set(1, 1).unwrap();
        session.toggle_edit_mode();
        session.set_sets(1, 5).unwrap();
        let exercise = &session.exercises()[0];
        assert_eq!(exercise.planned.sets, 5);
        assert_eq!(exercise.done, vec![false; 5]);

        assert_eq!(session.set_sets(1, 0), Err(SessionError::InvalidSetCount));
    }

    #[test]
    fn test_unchanged_set_count_keeps_completion() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(1, 0).unwrap();
        session.toggle_edit_mode();
        session.set_sets(1, 3).unwrap();
        assert_eq!(session.exercises()[0].completed_sets(), 1);
    }

    #[test]
    fn test_modify_name_reps_rest() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_edit_mode();
        session.set_name(2, "Wide-Grip Pulldown").unwrap();
        session.set_reps(2, "6-8").unwrap();
        session.set_rest(2, 90).unwrap();
        let exercise = &session.exercises()[1].planned;
        assert_eq!(exercise.name, "Wide-Grip Pulldown");
        assert_eq!(exercise.reps, "6-8");
        assert_eq!(exercise.rest_seconds, 90);
    }

    #[test]
    fn test_remove_then_add_exercise() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_edit_mode();
        session.remove_exercise(1).unwrap();
        assert_eq!(session.exercises().len(), 1);
        assert_eq!(
            session.remove_exercise(1),
            Err(SessionError::UnknownExercise(1))
        );

        let id = session.add_exercise("Face Pull", 3, "12-15", 45, None).unwrap();
        assert_eq!(id, 3, "ids keep growing past removed ones");
        assert_eq!(session.exercises().len(), 2);
        assert_eq!(session.exercises()[1].done, vec![false; 3]);

        assert_eq!(
            session.add_exercise("Empty", 0, "10", 60, None),
            Err(SessionError::InvalidSetCount)
        );
    }

    #[test]
    fn test_finish_needs_one_completed_set() {
        let mut session = ActiveSession::start(&create_day());
        assert_eq!(
            session.finish(Rating::JustRight).unwrap_err(),
            SessionError::NothingCompleted
        );

        session.toggle_set(1, 0).unwrap();
        let record = session.finish(Rating::Hard).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.day_index, Some(1));
        assert_eq!(record.rating, Rating::Hard);
    }

    #[test]
    fn test_progress_percent_rounds() {
        let mut session = ActiveSession::start(&create_day());
        session.toggle_set(1, 0).unwrap();
        assert_eq!(session.progress_percent(), 20);
        session.toggle_set(2, 0).unwrap();
        assert_eq!(session.progress_percent(), 40);

        // Drop Lat Pulldown: 1 of 3 sets done, 33.3% rounds down.
        session.toggle_edit_mode();
        session.remove_exercise(2).unwrap();
        session.toggle_edit_mode();
        assert_eq!(session.progress_percent(), 33);
        // 2 of 3 rounds up to 67.
        session.toggle_set(1, 1).unwrap();
        assert_eq!(session.progress_percent(), 67);
    }

    #[test]
    fn test_freestyle_session_has_no_day_index() {
        let mut session = ActiveSession::freestyle();
        assert_eq!(session.day_index(), None);
        assert_eq!(session.focus(), "Freestyle");
        assert_eq!(session.exercises().len(), FREESTYLE_EXERCISES.len());

        let first = session.exercises()[0].planned.id;
        session.toggle_set(first, 0).unwrap();
        let record = session.finish(Rating::Light).unwrap();
        assert_eq!(record.day_index, None);
    }

    #[test]
    fn test_freestyle_add_gets_an_unused_id() {
        let mut session = ActiveSession::freestyle();
        let highest = session.exercises().iter().map(|e| e.planned.id).max().unwrap();

        session.toggle_edit_mode();
        let id = session.add_exercise("Side Plank", 2, "30 sec", 30, None).unwrap();
        assert!(id > highest, "id {id} collides with the circuit");

        let mut ids: Vec<u32> = session.exercises().iter().map(|e| e.planned.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before, "duplicate session ids after add");
    }

    #[test]
    fn test_completion_flag_tracks_all_sets() {
        let mut session = ActiveSession::start(&create_day());
        assert!(!session.exercises()[1].is_complete());
        session.toggle_set(2, 0).unwrap();
        assert!(!session.exercises()[1].is_complete());
        session.toggle_set(2, 1).unwrap();
        assert!(session.exercises()[1].is_complete());

        session.toggle_set(2, 0).unwrap();
        assert!(!session.exercises()[1].is_complete());
    }
}
