//! Multisig account metadata as returned by a node.
//!
//! These are read-only snapshots of chain state. The SDK never mutates
//! them; it only walks them to answer quorum questions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::account::PublicAccount;

/// The multisig configuration of a single account.
///
/// A plain (non-multisig) account reports `min_approval == 0` and
/// `min_removal == 0` with empty lists; the node returns an info object
/// for every account, multisig or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigAccountInfo {
    /// The account this info describes.
    pub account: PublicAccount,
    /// Cosignatures required to approve a transaction from this account.
    pub min_approval: u32,
    /// Cosignatures required to remove a cosignatory from this account.
    pub min_removal: u32,
    /// Accounts that cosign for this account.
    pub cosignatories: Vec<PublicAccount>,
    /// Accounts this account cosigns for.
    pub multisig_accounts: Vec<PublicAccount>,
}

impl MultisigAccountInfo {
    /// `true` if the account actually requires cosignatures.
    pub fn is_multisig(&self) -> bool {
        self.min_approval != 0 && self.min_removal != 0
    }
}

/// The full multisig ownership tree around one account, keyed by level.
///
/// Level numbering follows the node's convention: lower integer levels are
/// closer to the leaf cosignatories, and the quorum walk processes levels
/// in ascending key order so that an account satisfied at one level can
/// vouch for entries above it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultisigAccountGraphInfo {
    levels: BTreeMap<i32, Vec<MultisigAccountInfo>>,
}

impl MultisigAccountGraphInfo {
    pub fn new(levels: BTreeMap<i32, Vec<MultisigAccountInfo>>) -> Self {
        Self { levels }
    }

    /// The levels in ascending key order (`BTreeMap` iteration order).
    pub fn levels(&self) -> &BTreeMap<i32, Vec<MultisigAccountInfo>> {
        &self.levels
    }
}
