use std::fmt::Display;

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, error, info};

use crate::{
    generator::write_with_words, verify, word_score, Category, Coord, GameConfig, Grid,
    MatchResult, PointSink, Puzzle, PuzzleConfig, RecordStore, Result, Selection, WordPlacement,
};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every playable word was found before the countdown ran out.
    AllWordsFound,

    /// The countdown reached zero first.
    TimeUp,
}

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The countdown is running and selections are accepted.
    Active,

    /// The session ended. No further selections, hints or ticks have any effect.
    Complete(Outcome),
}

impl SessionState {
    /// Whether the session has ended.
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// The results of a finished session, handed to the [`PointSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// The category that was played.
    pub category: Category,
    /// How the session ended.
    pub outcome: Outcome,
    /// Points scored in the session.
    pub score: u32,
    /// Number of words found.
    pub words_found: usize,
    /// Number of playable words.
    pub words_total: usize,
    /// Hints used.
    pub hints_used: u32,
    /// Time played, in milliseconds.
    pub elapsed_ms: u64,
    /// Whether this session set a new best time for its category.
    pub new_record: bool,
}

/// A single timed game of word search.
///
/// The host forwards pointer events to [`begin_selection`](Self::begin_selection),
/// [`extend_selection`](Self::extend_selection) and [`release_selection`](Self::release_selection),
/// and calls [`tick`](Self::tick) once per second. Points go to the sink `S`; the best time per
/// category is kept in the store `R`.
#[derive(Debug)]
pub struct GameSession<S, R> {
    config: GameConfig,
    category: Category,
    grid: Grid,
    placements: Vec<WordPlacement>,
    words: Vec<String>,
    dropped: Vec<String>,
    selection: Option<Selection>,
    hint_cells: Vec<Coord>,
    found_words: Vec<String>,
    score: u32,
    time_remaining: u32,
    hints_used: u32,
    state: SessionState,
    best_time_ms: Option<u64>,
    summary: Option<SessionSummary>,
    sink: S,
    store: R,
}

impl<S: PointSink, R: RecordStore> GameSession<S, R> {
    /// Starts a session with the leading words of `category`.
    pub fn start<G: Rng + ?Sized>(
        config: GameConfig,
        category: Category,
        rng: &mut G,
        sink: S,
        store: R,
    ) -> Result<Self> {
        let words = category.draw(config.words_per_game);
        Self::with_words(config, category, &words, rng, sink, store)
    }

    /// Starts a session with an explicit word list. `category` only names the best-time record.
    pub fn with_words<G: Rng + ?Sized>(
        config: GameConfig,
        category: Category,
        words: &[String],
        rng: &mut G,
        sink: S,
        store: R,
    ) -> Result<Self> {
        let puzzle = generate(&config, words, rng)?;
        let (grid, placements, dropped) = puzzle.into_parts();
        let best_time_ms = store.get(&category.record_key());

        let session = Self {
            time_remaining: config.time_limit_secs,
            words: placements.iter().map(|p| p.word.clone()).collect(),
            config,
            category,
            grid,
            placements,
            dropped,
            selection: None,
            hint_cells: Vec::new(),
            found_words: Vec::new(),
            score: 0,
            hints_used: 0,
            state: SessionState::Active,
            best_time_ms,
            summary: None,
            sink,
            store,
        };

        info!(
            category = %session.category,
            words = session.words.len(),
            dropped = session.dropped.len(),
            best_time_ms = ?session.best_time_ms,
            "session started"
        );

        Ok(session)
    }

    /// Plays again with a fresh grid for the same category.
    pub fn restart<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        let words = self.category.draw(self.config.words_per_game);
        self.reset(self.category, &words, rng)
    }

    /// Switches to another category and starts over.
    pub fn change_category<G: Rng + ?Sized>(
        &mut self,
        category: Category,
        rng: &mut G,
    ) -> Result<()> {
        let words = category.draw(self.config.words_per_game);
        self.reset(category, &words, rng)
    }

    fn reset<G: Rng + ?Sized>(
        &mut self,
        category: Category,
        words: &[String],
        rng: &mut G,
    ) -> Result<()> {
        let (grid, placements, dropped) = generate(&self.config, words, rng)?.into_parts();

        self.category = category;
        self.words = placements.iter().map(|p| p.word.clone()).collect();
        self.grid = grid;
        self.placements = placements;
        self.dropped = dropped;
        self.selection = None;
        self.hint_cells.clear();
        self.found_words.clear();
        self.score = 0;
        self.time_remaining = self.config.time_limit_secs;
        self.hints_used = 0;
        self.state = SessionState::Active;
        self.best_time_ms = self.store.get(&category.record_key());
        self.summary = None;

        info!(category = %category, words = self.words.len(), "session restarted");

        Ok(())
    }

    /// Starts a drag on `coord`. Ignored outside the grid or after the session ended.
    pub fn begin_selection(&mut self, coord: Coord) {
        if self.state.is_complete() || !self.grid.contains(coord) {
            return;
        }

        let selection = Selection::begin(coord, self.grid.size());
        self.hint_cells.clear();
        self.grid.highlight(selection.cells());
        self.selection = Some(selection);
    }

    /// Moves the active drag to `coord`, highlighting the straight line from its start.
    pub fn extend_selection(&mut self, coord: Coord) {
        if self.state.is_complete() || !self.grid.contains(coord) {
            return;
        }

        if let Some(selection) = &mut self.selection {
            let cells = selection.extend_to(coord);
            self.grid.highlight(cells);
        }
    }

    /// Ends the active drag and checks the selected letters against the remaining words.
    ///
    /// Returns `None` when there was no drag to end.
    pub fn release_selection(&mut self) -> Option<MatchResult> {
        if self.state.is_complete() {
            return None;
        }

        let cells = self.selection.take()?.finish();
        let result = verify(&cells, &self.grid, &self.words, &self.found_words);

        match &result.matched {
            Some(word) => self.accept(word.clone(), &cells),
            None => self.grid.clear_selection(),
        }

        Some(result)
    }

    fn accept(&mut self, word: String, cells: &[Coord]) {
        let index = self.found_words.len();

        if let Some(placement) = self
            .placements
            .iter_mut()
            .find(|p| p.word == word && !p.found)
        {
            placement.found = true;
        }

        self.grid.mark_found(cells, index);
        self.grid.clear_selection();

        let points = word_score(&word, self.time_remaining, self.config.time_limit_secs);
        self.score = self.score.saturating_add(points);
        self.sink.points_earned(points);

        debug!(word = word.as_str(), points, score = self.score, "word found");
        self.found_words.push(word);

        if !self.words.is_empty() && self.found_words.len() == self.words.len() {
            self.complete(Outcome::AllWordsFound);
        }
    }

    /// Advances the countdown by one second, ending the session when it reaches zero.
    pub fn tick(&mut self) -> SessionState {
        if self.state.is_complete() {
            return self.state;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);

        if self.time_remaining == 0 {
            self.complete(Outcome::TimeUp);
        }

        self.state
    }

    /// Highlights the first letters of a random word that hasn't been found yet.
    ///
    /// Returns the highlighted cells, or `None` without changing anything when all hints are used
    /// up, no words remain, or the session has ended. Call [`clear_hint`](Self::clear_hint) once
    /// the hint has been shown long enough.
    pub fn use_hint<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Option<Vec<Coord>> {
        if self.state.is_complete() || self.hints_used >= self.config.max_hints {
            return None;
        }

        let unfound: Vec<&WordPlacement> = self.placements.iter().filter(|p| !p.found).collect();
        let placement = unfound.choose(rng)?;

        let cells: Vec<Coord> = placement
            .indices(self.grid.size())
            .into_iter()
            .take(self.config.hint_letters)
            .collect();

        self.grid.highlight_unfound(&cells);
        self.hint_cells = cells.clone();
        self.hints_used += 1;

        debug!(hints_used = self.hints_used, "hint shown");

        Some(cells)
    }

    /// Removes a hint's highlight, restoring the highlight of an active drag.
    pub fn clear_hint(&mut self) {
        if self.hint_cells.is_empty() {
            return;
        }

        self.hint_cells.clear();

        match &self.selection {
            Some(selection) => self.grid.highlight(selection.cells()),
            None => self.grid.clear_selection(),
        }
    }

    fn complete(&mut self, outcome: Outcome) {
        self.state = SessionState::Complete(outcome);
        self.selection = None;
        self.hint_cells.clear();
        self.grid.clear_selection();

        let elapsed_secs = self.config.time_limit_secs.saturating_sub(self.time_remaining);
        let elapsed_ms = u64::from(elapsed_secs) * 1000;

        let new_record = outcome == Outcome::AllWordsFound
            && self.best_time_ms.map_or(true, |best| elapsed_ms < best);

        if new_record {
            self.best_time_ms = Some(elapsed_ms);

            if let Err(err) = self.store.set(&self.category.record_key(), elapsed_ms) {
                error!(category = %self.category, "failed to save best time: {err}");
            }
        }

        let summary = SessionSummary {
            category: self.category,
            outcome,
            score: self.score,
            words_found: self.found_words.len(),
            words_total: self.words.len(),
            hints_used: self.hints_used,
            elapsed_ms,
            new_record,
        };

        info!(
            category = %self.category,
            ?outcome,
            score = self.score,
            elapsed_ms,
            new_record,
            "session complete"
        );

        self.sink.session_completed(&summary);
        self.summary = Some(summary);
    }

    /// The category being played.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Where each playable word is hidden.
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// The words the player has to find. Words that couldn't be placed are not included.
    pub fn target_words(&self) -> &[String] {
        &self.words
    }

    /// Words that couldn't be placed in the grid and were taken out of the game.
    pub fn dropped_words(&self) -> &[String] {
        &self.dropped
    }

    /// Words found so far, in the order they were found.
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    /// The cells of the active drag, if any.
    pub fn selection(&self) -> Option<&[Coord]> {
        self.selection.as_ref().map(Selection::cells)
    }

    /// Points scored in this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the countdown.
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Hints used so far.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Hints the player may still use.
    pub fn hints_left(&self) -> u32 {
        self.config.max_hints.saturating_sub(self.hints_used)
    }

    /// Where the session is in its lifecycle.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session has ended.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// The best time recorded for this category, including this session's.
    pub fn best_time_ms(&self) -> Option<u64> {
        self.best_time_ms
    }

    /// The results, once the session has ended.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// The point sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The record store.
    pub fn store(&self) -> &R {
        &self.store
    }
}

fn generate<G: Rng + ?Sized>(config: &GameConfig, words: &[String], rng: &mut G) -> Result<Puzzle> {
    let puzzle_config = PuzzleConfig {
        size: config.grid_size,
        words,
        placement_attempts: config.placement_attempts,
        layout_attempts: config.layout_attempts,
    };

    Puzzle::generate(&puzzle_config, rng)
}

impl<S, R> Display for GameSession<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_with_words(f, &self.grid, &self.placements)
    }
}
