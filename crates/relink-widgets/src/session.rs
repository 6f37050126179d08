#![forbid(unsafe_code)]

//! The pairing session: a three-state selection machine plus the pending
//! pairing set.
//!
//! The session is always in exactly one of `Idle`, left-armed, or
//! right-armed. Arming the opposite side of an armed item resolves the two
//! into a [`Pairing`] and returns to idle; arming the same side re-arms.
//! Everything that could go wrong — unknown ids, ids already claimed by a
//! pending pairing, out-of-range removals — degrades to a no-op, never an
//! error: stale input from a lagging render must not tear the state.

use crate::item::{ItemId, Side};
use crate::roster::Rosters;

/// A committed-but-unapplied proposal to exchange one left item with one
/// right item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Pairing {
    /// Id on the left roster.
    pub left: ItemId,

    /// Id on the right roster.
    pub right: ItemId,
}

impl Pairing {
    /// The endpoint of this pairing on the given side.
    #[must_use]
    pub const fn endpoint(&self, side: Side) -> ItemId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// The selection state: at most one item is armed, on at most one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Arm {
    /// Nothing armed.
    #[default]
    Idle,

    /// A left item is armed, awaiting a right partner.
    Left(ItemId),

    /// A right item is armed, awaiting a left partner.
    Right(ItemId),
}

impl Arm {
    /// The armed side and id, if any.
    #[must_use]
    pub const fn armed(self) -> Option<(Side, ItemId)> {
        match self {
            Arm::Idle => None,
            Arm::Left(id) => Some((Side::Left, id)),
            Arm::Right(id) => Some((Side::Right, id)),
        }
    }

    const fn of(side: Side, id: ItemId) -> Self {
        match side {
            Side::Left => Arm::Left(id),
            Side::Right => Arm::Right(id),
        }
    }
}

/// What a call to [`PairingSession::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The item is now armed (fresh arm or re-arm on the same side).
    Armed,

    /// The selection resolved into a pairing; the session is idle again.
    Paired,

    /// Nothing changed: unknown id, already-claimed id, or a re-select of
    /// the currently armed item.
    Ignored,
}

/// The pairing state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingSession {
    arm: Arm,
    pairings: Vec<Pairing>,
}

impl PairingSession {
    /// A fresh idle session with no pending pairings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection state.
    #[must_use]
    pub const fn arm(&self) -> Arm {
        self.arm
    }

    /// Pending pairings in creation order.
    #[must_use]
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    /// Number of pending pairings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether no pairings are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Whether an id is an endpoint of any pending pairing.
    #[must_use]
    pub fn is_claimed(&self, side: Side, id: ItemId) -> bool {
        self.pairings.iter().any(|p| p.endpoint(side) == id)
    }

    /// Select an item: arm it, re-arm, or resolve a pairing.
    ///
    /// Transitions:
    /// - unknown id or claimed id: no-op;
    /// - idle: arm the selected side;
    /// - same side armed, same id: no-op (idempotent re-select);
    /// - same side armed, other id: re-arm, no pairing emitted;
    /// - opposite side armed: append a pairing in creation order, go idle.
    pub fn select(&mut self, side: Side, id: ItemId, rosters: &Rosters) -> SelectOutcome {
        if !rosters.contains(side, id) {
            return SelectOutcome::Ignored;
        }
        // Uniqueness is enforced at creation: an endpoint already claimed by
        // a pending pairing cannot be armed or paired again.
        if self.is_claimed(side, id) {
            return SelectOutcome::Ignored;
        }

        let outcome = match (self.arm, side) {
            (Arm::Idle, _) => {
                self.arm = Arm::of(side, id);
                SelectOutcome::Armed
            }
            (Arm::Left(current), Side::Left) | (Arm::Right(current), Side::Right)
                if current == id =>
            {
                return SelectOutcome::Ignored;
            }
            (Arm::Left(_), Side::Left) | (Arm::Right(_), Side::Right) => {
                self.arm = Arm::of(side, id);
                SelectOutcome::Armed
            }
            (Arm::Left(left), Side::Right) => {
                self.pairings.push(Pairing { left, right: id });
                self.arm = Arm::Idle;
                SelectOutcome::Paired
            }
            (Arm::Right(right), Side::Left) => {
                self.pairings.push(Pairing { left: id, right });
                self.arm = Arm::Idle;
                SelectOutcome::Paired
            }
        };

        #[cfg(feature = "tracing")]
        self.log_transition(match outcome {
            SelectOutcome::Armed => "arm",
            SelectOutcome::Paired => "pair",
            SelectOutcome::Ignored => "ignore",
        });

        outcome
    }

    /// Drop the pending arm without emitting a pairing.
    pub fn disarm(&mut self) {
        if self.arm != Arm::Idle {
            self.arm = Arm::Idle;
            #[cfg(feature = "tracing")]
            self.log_transition("disarm");
        }
    }

    /// Remove one pairing by position, preserving the order of the rest.
    ///
    /// Out-of-range indices are a no-op. The arm state is untouched.
    pub fn remove(&mut self, index: usize) -> Option<Pairing> {
        if index >= self.pairings.len() {
            return None;
        }
        let removed = self.pairings.remove(index);
        #[cfg(feature = "tracing")]
        self.log_transition("remove");
        Some(removed)
    }

    /// Empty the pairing set and force idle.
    pub fn clear(&mut self) {
        self.pairings.clear();
        self.arm = Arm::Idle;
        #[cfg(feature = "tracing")]
        self.log_transition("clear");
    }

    #[cfg(feature = "tracing")]
    fn log_transition(&self, action: &str) {
        tracing::debug!(
            message = "connector.selection",
            action,
            armed = self.arm.armed().is_some(),
            pending = self.pairings.len()
        );
    }
}
