// Contact lifecycle tracking: one record per live finger/pointer

use crate::config::DuplicateStart;
use crate::error::Invalidation;
use crate::model::{ContactDatum, ContactId, Phase, RawEvent, Snapshot};
use crate::util::normalize_event;
use std::collections::BTreeMap;

/// One physical contact point.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    /// Start, Move or End. Cancel never reaches a record.
    pub phase: Phase,
    pub initial: Snapshot,
    pub previous: Snapshot,
    pub current: Snapshot,
    arrival: u64,
}

impl Contact {
    fn new(datum: &ContactDatum, time_stamp: f64, arrival: u64) -> Self {
        let snap = Snapshot::from_datum(datum, time_stamp);
        Self {
            id: datum.identifier,
            phase: Phase::Start,
            initial: snap,
            previous: snap,
            current: snap,
            arrival,
        }
    }

    pub fn update(&mut self, phase: Phase, datum: &ContactDatum, time_stamp: f64) {
        self.phase = phase;
        self.previous = self.current;
        self.current = Snapshot::from_datum(datum, time_stamp);
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::End
    }
}

#[derive(Debug, Default)]
pub struct ContactTracker {
    records: BTreeMap<ContactId, Contact>,
    arrivals: u64,
    duplicate_start: DuplicateStart,
}

impl ContactTracker {
    pub fn new(duplicate_start: DuplicateStart) -> Self {
        Self {
            duplicate_start,
            ..Default::default()
        }
    }

    /// Applies one raw event batch. Any inconsistency clears every record
    /// and reports why; there is no partial repair.
    pub fn ingest(&mut self, raw: &RawEvent) -> Result<(), Invalidation> {
        if let Some(touches) = &raw.touches {
            // no target list means the host does not scope contacts
            let targeted = raw.target_touches.as_ref().map_or(touches.len(), Vec::len);
            if touches.len() != targeted {
                self.reset();
                return Err(Invalidation::TargetMismatch {
                    total: touches.len(),
                    targeted,
                });
            }
        }

        let Some(phase) = normalize_event(&raw.kind) else {
            log::trace!("ignoring unrecognized event '{}'", raw.kind);
            return Ok(());
        };
        if phase == Phase::Cancel {
            self.reset();
            return Err(Invalidation::Cancelled);
        }

        if raw.is_multi_contact() {
            for datum in raw.changed_touches.iter().flatten() {
                self.apply(phase, datum, raw.time_stamp)?;
            }
        } else {
            let datum = ContactDatum {
                identifier: ContactId::POINTER,
                ..raw.pointer.unwrap_or_default()
            };
            if phase == Phase::Start {
                // the sole pointer record is always replaced; a release lost
                // outside the window must not swallow the next press
                self.begin(&datum, raw.time_stamp);
            } else {
                self.apply(phase, &datum, raw.time_stamp)?;
            }
        }
        Ok(())
    }

    fn apply(&mut self, phase: Phase, datum: &ContactDatum, time_stamp: f64) -> Result<(), Invalidation> {
        let id = datum.identifier;
        if phase == Phase::Start {
            let live = self.records.get(&id).is_some_and(Contact::is_active);
            if live && self.duplicate_start == DuplicateStart::Reset {
                self.reset();
                return Err(Invalidation::DuplicateStart(id));
            }
            // an ended record under a reused identifier is simply replaced
            self.begin(datum, time_stamp);
            return Ok(());
        }
        match self.records.get_mut(&id) {
            Some(contact) => contact.update(phase, datum, time_stamp),
            None => log::trace!("ignoring {} for untracked contact {}", phase, id),
        }
        Ok(())
    }

    fn begin(&mut self, datum: &ContactDatum, time_stamp: f64) {
        self.arrivals += 1;
        self.records
            .insert(datum.identifier, Contact::new(datum, time_stamp, self.arrivals));
    }

    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Contacts that have not ended yet.
    pub fn active_count(&self) -> usize {
        self.records.values().filter(|c| c.is_active()).count()
    }

    pub fn ended_count(&self) -> usize {
        self.records.values().filter(|c| !c.is_active()).count()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records in arrival order.
    pub fn contacts(&self) -> Vec<&Contact> {
        let mut all: Vec<&Contact> = self.records.values().collect();
        all.sort_by_key(|c| c.arrival);
        all
    }

    pub fn set_duplicate_start(&mut self, policy: DuplicateStart) {
        self.duplicate_start = policy;
    }
}
