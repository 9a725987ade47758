//! Aggregate-complete readiness checking.
//!
//! An aggregate-complete transaction is only announceable once every inner
//! transaction's signer requirement is satisfied by the attached
//! cosignatures. [`AggregateTransactionService::is_complete`] answers that
//! question ahead of announcing, so callers can collect the missing
//! cosignatures instead of burning a fee on a guaranteed rejection.
//!
//! Multisig chain state comes from a [`MultisigRepository`], which nodes
//! expose over REST; tests plug in an in-memory map.

use async_trait::async_trait;
use futures::future::try_join_all;
use std::collections::HashSet;

use crate::codec::{self, CodecError};
use crate::model::{Address, MultisigAccountGraphInfo, MultisigAccountInfo, PublicKey};
use crate::transaction::{EmbeddedTransaction, SignedTransaction, TransactionType};

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Errors from the multisig state backend.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("no multisig information for account {0}")]
    AccountNotFound(Address),

    #[error("multisig repository backend failure: {0}")]
    Backend(String),
}

/// Read access to on-chain multisig state.
///
/// The node returns an info object for every account; plain accounts come
/// back with zero thresholds and empty cosignatory lists rather than an
/// error.
#[async_trait]
pub trait MultisigRepository: Send + Sync {
    /// The multisig configuration of a single account.
    async fn multisig_account_info(
        &self,
        address: &Address,
    ) -> Result<MultisigAccountInfo, RepositoryError>;

    /// The multisig ownership tree around an account, keyed by level.
    async fn multisig_account_graph_info(
        &self,
        address: &Address,
    ) -> Result<MultisigAccountGraphInfo, RepositoryError>;
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AggregateServiceError {
    /// Only aggregate-complete transactions can be checked; bonded
    /// aggregates collect cosignatures on-chain after announcement.
    #[error("expected an aggregate complete transaction, got {0}")]
    NotAggregateComplete(TransactionType),

    /// An inner transaction carried the all-zero placeholder signer, so
    /// there is no account to check a quorum for.
    #[error("inner transaction has no signer")]
    MissingInnerSigner,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Checks whether an aggregate-complete transaction has every cosignature
/// it needs.
pub struct AggregateTransactionService<R> {
    repository: R,
}

impl<R: MultisigRepository> AggregateTransactionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// `Ok(true)` when every inner transaction's signer requirement is met
    /// by the initiator plus the attached cosignatures.
    ///
    /// The signer set starts as the announcing signer and all cosignature
    /// signers. Each inner transaction is then checked against it: a plain
    /// signer account just has to be in the set, while a multisig signer
    /// account is checked against its ownership graph level by level. All
    /// inner transactions are queried concurrently and every one must pass.
    pub async fn is_complete(
        &self,
        signed: &SignedTransaction,
    ) -> Result<bool, AggregateServiceError> {
        if signed.transaction_type != TransactionType::AggregateComplete {
            return Err(AggregateServiceError::NotAggregateComplete(
                signed.transaction_type,
            ));
        }
        let transaction = codec::deserialize(&signed.payload)?;
        let body = transaction
            .as_aggregate()
            .ok_or(AggregateServiceError::NotAggregateComplete(
                transaction.transaction_type(),
            ))?;

        let mut signers: HashSet<PublicKey> =
            body.cosignatures.iter().map(|c| c.signer).collect();
        signers.insert(signed.signer);

        tracing::debug!(
            inner_count = body.transactions.len(),
            signer_count = signers.len(),
            "checking aggregate completeness"
        );

        let checks = body
            .transactions
            .iter()
            .map(|inner| self.check_inner(inner, &signers));
        let results = try_join_all(checks).await?;
        Ok(results.into_iter().all(|complete| complete))
    }

    /// The number of distinct cosignatories across the whole ownership
    /// graph of `address`: the most cosignatures an aggregate initiated by
    /// that account could ever need.
    pub async fn max_cosignatures(
        &self,
        address: &Address,
    ) -> Result<usize, AggregateServiceError> {
        let graph = self.repository.multisig_account_graph_info(address).await?;
        let distinct: HashSet<PublicKey> = graph
            .levels()
            .values()
            .flatten()
            .flat_map(|info| info.cosignatories.iter().map(|c| c.public_key))
            .collect();
        Ok(distinct.len())
    }

    async fn check_inner(
        &self,
        inner: &EmbeddedTransaction,
        signers: &HashSet<PublicKey>,
    ) -> Result<bool, AggregateServiceError> {
        let signer = inner
            .signer
            .ok_or(AggregateServiceError::MissingInnerSigner)?;
        let address = Address::from_public_key(inner.network, &signer);
        let info = self.repository.multisig_account_info(&address).await?;

        if info.is_multisig() {
            let graph = self
                .repository
                .multisig_account_graph_info(&info.account.address)
                .await?;
            Ok(validate_cosignatories(&graph, signers, inner))
        } else {
            Ok(signers.contains(&info.account.public_key))
        }
    }
}

/// Walks the multisig graph bottom-up and reports whether `cosignatories`
/// satisfy the signer's quorum.
///
/// Levels are visited in ascending key order. Within a level every entry
/// must be a multisig account whose threshold is met by the signatures
/// received so far; each satisfied entry's own key joins the received set,
/// so an entry can vouch for a later entry in the same walk. The first
/// level that passes in full decides the check.
///
/// A modification that removes cosignatories is held to the account's
/// removal threshold instead of its approval threshold.
fn validate_cosignatories(
    graph: &MultisigAccountGraphInfo,
    cosignatories: &HashSet<PublicKey>,
    inner: &EmbeddedTransaction,
) -> bool {
    let mut received: HashSet<PublicKey> = cosignatories.clone();
    let is_removal = inner.body.is_multisig_removal();

    graph.levels().values().any(|entries| {
        entries.iter().all(|multisig| {
            if !multisig.is_multisig() {
                return false;
            }
            let matched = multisig
                .cosignatories
                .iter()
                .filter(|c| received.contains(&c.public_key))
                .count() as u32;
            let required = if is_removal {
                multisig.min_removal
            } else {
                multisig.min_approval
            };
            if matched >= required {
                received.insert(multisig.account.public_key);
                true
            } else {
                false
            }
        })
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hash256, NetworkType, PublicAccount, Signature};
    use crate::transaction::{
        AggregateBody, Cosignature, MultisigAccountModificationBody, TransactionBody,
        TransactionBuilder, TransferBody, TRANSACTION_VERSION,
    };
    use std::collections::{BTreeMap, HashMap};

    struct MapRepository {
        infos: HashMap<Address, MultisigAccountInfo>,
        graphs: HashMap<Address, MultisigAccountGraphInfo>,
    }

    #[async_trait]
    impl MultisigRepository for MapRepository {
        async fn multisig_account_info(
            &self,
            address: &Address,
        ) -> Result<MultisigAccountInfo, RepositoryError> {
            self.infos
                .get(address)
                .cloned()
                .ok_or(RepositoryError::AccountNotFound(*address))
        }

        async fn multisig_account_graph_info(
            &self,
            address: &Address,
        ) -> Result<MultisigAccountGraphInfo, RepositoryError> {
            self.graphs
                .get(address)
                .cloned()
                .ok_or(RepositoryError::AccountNotFound(*address))
        }
    }

    fn account(seed: u8) -> PublicAccount {
        PublicAccount::from_public_key(NetworkType::PrivateTest, PublicKey::from_bytes([seed; 32]))
    }

    fn plain_info(owner: PublicAccount) -> MultisigAccountInfo {
        MultisigAccountInfo {
            account: owner,
            min_approval: 0,
            min_removal: 0,
            cosignatories: vec![],
            multisig_accounts: vec![],
        }
    }

    fn multisig_info(
        owner: PublicAccount,
        min_approval: u32,
        min_removal: u32,
        cosignatories: Vec<PublicAccount>,
    ) -> MultisigAccountInfo {
        MultisigAccountInfo {
            account: owner,
            min_approval,
            min_removal,
            cosignatories,
            multisig_accounts: vec![],
        }
    }

    fn inner_transfer(signer: PublicAccount) -> EmbeddedTransaction {
        EmbeddedTransaction {
            network: NetworkType::PrivateTest,
            version: TRANSACTION_VERSION,
            signer: Some(signer.public_key),
            body: TransactionBody::Transfer(TransferBody {
                recipient: account(99).address.into(),
                mosaics: vec![],
                message: None,
            }),
        }
    }

    fn inner_removal(signer: PublicAccount, deleted: PublicAccount) -> EmbeddedTransaction {
        EmbeddedTransaction {
            body: TransactionBody::MultisigAccountModification(MultisigAccountModificationBody {
                min_removal_delta: 0,
                min_approval_delta: 0,
                additions: vec![],
                deletions: vec![deleted.public_key],
            }),
            ..inner_transfer(signer)
        }
    }

    fn signed_complete(
        initiator: PublicAccount,
        transactions: Vec<EmbeddedTransaction>,
        cosigners: Vec<PublicAccount>,
    ) -> SignedTransaction {
        let cosignatures = cosigners
            .into_iter()
            .map(|c| Cosignature {
                signer: c.public_key,
                signature: Signature::from_bytes([0xcc; 64]),
            })
            .collect();
        let tx = TransactionBuilder::new(
            NetworkType::PrivateTest,
            TransactionBody::AggregateComplete(AggregateBody {
                transactions_hash: Hash256::default(),
                transactions,
                cosignatures,
            }),
        )
        .deadline(1)
        .signer(initiator.public_key)
        .build();
        let payload = codec::serialize(&tx).unwrap();
        SignedTransaction {
            payload,
            hash: Hash256::default(),
            signer: initiator.public_key,
            transaction_type: TransactionType::AggregateComplete,
        }
    }

    fn single_level_graph(entries: Vec<MultisigAccountInfo>) -> MultisigAccountGraphInfo {
        let mut levels = BTreeMap::new();
        levels.insert(0, entries);
        MultisigAccountGraphInfo::new(levels)
    }

    #[tokio::test]
    async fn plain_signer_only_needs_to_be_in_the_signer_set() {
        let alice = account(1);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::from([(alice.address, plain_info(alice))]),
            graphs: HashMap::new(),
        });

        let signed = signed_complete(alice, vec![inner_transfer(alice)], vec![]);
        assert!(service.is_complete(&signed).await.unwrap());

        // announced by someone else, with no cosignature from alice
        let mallory = account(2);
        let signed = signed_complete(mallory, vec![inner_transfer(alice)], vec![]);
        assert!(!service.is_complete(&signed).await.unwrap());
    }

    #[tokio::test]
    async fn two_of_two_multisig_needs_both_cosigners() {
        let multisig = account(10);
        let c1 = account(11);
        let c2 = account(12);
        let info = multisig_info(multisig, 2, 2, vec![c1, c2]);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::from([(multisig.address, info.clone())]),
            graphs: HashMap::from([(multisig.address, single_level_graph(vec![info]))]),
        });

        let both = signed_complete(c1, vec![inner_transfer(multisig)], vec![c2]);
        assert!(service.is_complete(&both).await.unwrap());

        let one = signed_complete(c1, vec![inner_transfer(multisig)], vec![]);
        assert!(!service.is_complete(&one).await.unwrap());
    }

    #[tokio::test]
    async fn removal_uses_the_removal_threshold() {
        let multisig = account(10);
        let c1 = account(11);
        let c2 = account(12);
        // approvals need both cosigners, removals only one
        let info = multisig_info(multisig, 2, 1, vec![c1, c2]);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::from([(multisig.address, info.clone())]),
            graphs: HashMap::from([(multisig.address, single_level_graph(vec![info]))]),
        });

        let removal = signed_complete(c1, vec![inner_removal(multisig, c2)], vec![]);
        assert!(service.is_complete(&removal).await.unwrap());

        let transfer = signed_complete(c1, vec![inner_transfer(multisig)], vec![]);
        assert!(!service.is_complete(&transfer).await.unwrap());
    }

    #[tokio::test]
    async fn satisfied_multisig_vouches_for_a_later_entry() {
        // A is 2-of-3 over {p1, p2, B}, where B is itself 1-of-2 over
        // {p3, p4}. p1 announces with a cosignature from p3: B's quorum is
        // met first, then B's key counts toward A's.
        let a = account(20);
        let b = account(21);
        let p1 = account(22);
        let p2 = account(23);
        let p3 = account(24);
        let p4 = account(25);

        let a_info = multisig_info(a, 2, 2, vec![p1, p2, b]);
        let b_info = multisig_info(b, 1, 1, vec![p3, p4]);
        let graph = single_level_graph(vec![b_info.clone(), a_info.clone()]);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::from([(a.address, a_info)]),
            graphs: HashMap::from([(a.address, graph)]),
        });

        let signed = signed_complete(p1, vec![inner_transfer(a)], vec![p3]);
        assert!(service.is_complete(&signed).await.unwrap());

        // without p3 the chain never starts
        let signed = signed_complete(p1, vec![inner_transfer(a)], vec![]);
        assert!(!service.is_complete(&signed).await.unwrap());
    }

    #[tokio::test]
    async fn every_inner_transaction_must_pass() {
        let alice = account(1);
        let bob = account(2);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::from([
                (alice.address, plain_info(alice)),
                (bob.address, plain_info(bob)),
            ]),
            graphs: HashMap::new(),
        });

        let signed = signed_complete(
            alice,
            vec![inner_transfer(alice), inner_transfer(bob)],
            vec![],
        );
        assert!(!service.is_complete(&signed).await.unwrap());

        let signed = signed_complete(
            alice,
            vec![inner_transfer(alice), inner_transfer(bob)],
            vec![bob],
        );
        assert!(service.is_complete(&signed).await.unwrap());
    }

    #[tokio::test]
    async fn bonded_aggregates_are_rejected() {
        let alice = account(1);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::new(),
            graphs: HashMap::new(),
        });
        let mut signed = signed_complete(alice, vec![], vec![]);
        signed.transaction_type = TransactionType::AggregateBonded;
        assert!(matches!(
            service.is_complete(&signed).await,
            Err(AggregateServiceError::NotAggregateComplete(
                TransactionType::AggregateBonded
            ))
        ));
    }

    #[tokio::test]
    async fn unsigned_inner_transaction_is_an_error() {
        let alice = account(1);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::new(),
            graphs: HashMap::new(),
        });
        let mut signed = signed_complete(alice, vec![inner_transfer(alice)], vec![]);
        // zero out the inner transaction's signer slot: header(128) +
        // transactionsHash(32) + payloadSize(4) + reserved(4) + size(4) +
        // reserved(4) puts it at offset 176
        signed.payload[176..208].fill(0);
        assert!(matches!(
            service.is_complete(&signed).await,
            Err(AggregateServiceError::MissingInnerSigner)
        ));
    }

    #[tokio::test]
    async fn unknown_account_surfaces_the_repository_error() {
        let alice = account(1);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::new(),
            graphs: HashMap::new(),
        });
        let signed = signed_complete(alice, vec![inner_transfer(alice)], vec![]);
        assert!(matches!(
            service.is_complete(&signed).await,
            Err(AggregateServiceError::Repository(
                RepositoryError::AccountNotFound(_)
            ))
        ));
    }

    #[tokio::test]
    async fn max_cosignatures_counts_distinct_cosignatories() {
        let a = account(20);
        let b = account(21);
        let p1 = account(22);
        let p2 = account(23);
        let p3 = account(24);

        // p2 cosigns on both levels but only counts once
        let mut levels = BTreeMap::new();
        levels.insert(0, vec![multisig_info(a, 1, 1, vec![p1, p2])]);
        levels.insert(1, vec![multisig_info(b, 1, 1, vec![p2, p3])]);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::new(),
            graphs: HashMap::from([(a.address, MultisigAccountGraphInfo::new(levels))]),
        });

        assert_eq!(service.max_cosignatures(&a.address).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn empty_aggregate_is_trivially_complete() {
        let alice = account(1);
        let service = AggregateTransactionService::new(MapRepository {
            infos: HashMap::new(),
            graphs: HashMap::new(),
        });
        let signed = signed_complete(alice, vec![], vec![]);
        assert!(service.is_complete(&signed).await.unwrap());
    }
}
