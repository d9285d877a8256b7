// Rust Bitcoin Library
// Written by
//   The Rust Bitcoin developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! Session state
//!
//! Volatile state scoped to one unlocked session of the device. The
//! unlock flow creates a [`Session`], the lock flow drops it; nothing
//! here is ever persisted. The signing flow is its single writer, the
//! UI and the authorization check its readers.

use util::coinjoin::CoinJoinAuthorization;

/// Progress of the current signing round, reported to the UI loader.
#[derive(Debug, Default, Clone)]
pub struct Progress {
    progress: u32,
    steps: u32,
}

impl Progress {
    /// Resets the counter for a transaction: every input is confirmed,
    /// digested and signed, every output confirmed once.
    pub fn init(&mut self, inputs: u32, outputs: u32) {
        self.progress = 0;
        self.steps = inputs + inputs + outputs + inputs;
    }

    /// Records one completed step.
    pub fn advance(&mut self) {
        self.progress = self.progress.saturating_add(1);
    }

    /// Completed fraction in thousandths, for the UI loader.
    pub fn permille(&self) -> u32 {
        if self.steps == 0 {
            0
        } else {
            1000 * self.progress / self.steps
        }
    }
}

/// Per-unlock state bundle.
#[derive(Debug, Default)]
pub struct Session {
    coinjoin_authorization: Option<CoinJoinAuthorization>,
    progress: Progress,
}

impl Session {
    /// Fresh state for a newly unlocked device.
    pub fn new() -> Session {
        Default::default()
    }

    /// The standing CoinJoin authorization, if one was granted this
    /// session.
    pub fn coinjoin_authorization(&self) -> Option<&CoinJoinAuthorization> {
        self.coinjoin_authorization.as_ref()
    }

    /// Installs an authorization, replacing any previous one.
    pub fn set_coinjoin_authorization(&mut self, authorization: CoinJoinAuthorization) {
        self.coinjoin_authorization = Some(authorization);
    }

    /// Revokes the authorization.
    pub fn clear_coinjoin_authorization(&mut self) {
        self.coinjoin_authorization = None;
    }

    /// The signing progress counter.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Write access for the signing flow.
    pub fn progress_mut(&mut self) -> &mut Progress {
        &mut self.progress
    }
}
