//! Registry of live matches with one lock per match.
//!
//! Lookups clone the match handle and release the map shard before the
//! match lock is taken, so independent matches never contend and every
//! mutation of a single match is serialized.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::controller::{self, PointRequest};
use crate::domain::ledger::PlayerStatistics;
use crate::domain::roster::{Lineup, MatchId, PlayerId, Side};
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::state::Match;
use crate::errors::domain::{RegistryError, ScoringError};

pub type MatchHandle = Arc<Mutex<Match>>;

pub struct MatchRegistry<C: Clock = SystemClock> {
    matches: DashMap<MatchId, MatchHandle>,
    clock: C,
}

impl MatchRegistry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MatchRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MatchRegistry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            matches: DashMap::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn insert(&self, m: Match) -> Result<MatchSnapshot, RegistryError> {
        let id = m.id();
        let view = snapshot(&m);
        match self.matches.entry(id) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(RegistryError::DuplicateMatch(id)),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(m)));
                debug!(match_id = id, "Match registered");
                Ok(view)
            }
        }
    }

    /// Drop a match from the registry, returning its final state.
    pub fn remove(&self, id: MatchId) -> Result<Match, RegistryError> {
        let (_, handle) = self
            .matches
            .remove(&id)
            .ok_or(RegistryError::UnknownMatch(id))?;
        debug!(match_id = id, "Match removed");
        let m = match Arc::try_unwrap(handle) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().clone(),
        };
        Ok(m)
    }

    pub fn handle(&self, id: MatchId) -> Result<MatchHandle, RegistryError> {
        self.matches
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(RegistryError::UnknownMatch(id))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Run `f` with exclusive access to one match.
    pub fn with_match<R>(
        &self,
        id: MatchId,
        f: impl FnOnce(&mut Match, &C) -> Result<R, ScoringError>,
    ) -> Result<R, RegistryError> {
        let handle = self.handle(id)?;
        let mut guard = handle.lock();
        Ok(f(&mut *guard, &self.clock)?)
    }

    pub fn snapshot(&self, id: MatchId) -> Result<MatchSnapshot, RegistryError> {
        let handle = self.handle(id)?;
        let guard = handle.lock();
        Ok(snapshot(&*guard))
    }

    pub fn start_match(
        &self,
        id: MatchId,
        home: Lineup,
        away: Lineup,
    ) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, clock| controller::start_match(m, home, away, clock))
    }

    pub fn award_point(
        &self,
        id: MatchId,
        request: PointRequest,
    ) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, clock| controller::award_point(m, request, clock))
    }

    pub fn undo_point(&self, id: MatchId) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, _| controller::undo_point(m))
    }

    pub fn start_next_set(&self, id: MatchId) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, clock| controller::start_next_set(m, clock))
    }

    pub fn end_set(&self, id: MatchId) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, clock| controller::end_set(m, clock))
    }

    pub fn end_match(&self, id: MatchId) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, clock| controller::end_match(m, clock))
    }

    pub fn call_timeout(&self, id: MatchId, side: Side) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, _| controller::call_timeout(m, side))
    }

    pub fn suspend_match(&self, id: MatchId) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, _| controller::suspend_match(m))
    }

    pub fn resume_match(&self, id: MatchId) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |m, _| controller::resume_match(m))
    }

    pub fn statistics_for(
        &self,
        id: MatchId,
        player_id: PlayerId,
    ) -> Result<PlayerStatistics, RegistryError> {
        self.with_match(id, |m, _| Ok(controller::statistics_for(m, player_id)))
    }
}
