//! Higher-level services built on top of the codec and model layers.

pub mod aggregate;

pub use aggregate::{
    AggregateServiceError, AggregateTransactionService, MultisigRepository, RepositoryError,
};
