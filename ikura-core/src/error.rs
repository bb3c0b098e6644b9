//! Error types for the ikura core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias. Every generator checks its preconditions eagerly and reports
//! failures through [`GenError`] before any construction work begins.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a random structure.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenError {
    /// A range was supplied whose lower bound exceeds its upper bound, or
    /// whose bounds are unordered (NaN floats).
    #[error("invalid range: lo {lo} must not exceed hi {hi}")]
    InvalidRange {
        /// Rendered lower bound supplied by the caller.
        lo: String,
        /// Rendered upper bound supplied by the caller.
        hi: String,
    },
    /// A candidate set with zero entries was supplied.
    #[error("candidate set must contain at least one entry")]
    EmptyCandidateSet,
    /// A unique sample requested more values than the domain can provide.
    #[error("domain holds {distinct} distinct values but {requested} were requested")]
    DomainExhausted {
        /// Number of distinct values the caller asked for.
        requested: usize,
        /// Number of distinct values available in the domain.
        distinct: u128,
    },
    /// A structural generator was asked for zero nodes.
    #[error("structure requires at least one node")]
    EmptyStructure,
    /// A graph was requested with more edges than `n * (n - 1) / 2`.
    #[error("{node_count} nodes admit at most {max} edges but {requested} were requested")]
    TooManyEdges {
        /// Number of edges the caller asked for.
        requested: usize,
        /// Number of nodes in the requested graph.
        node_count: usize,
        /// Maximum number of edges a simple graph on `node_count` nodes admits.
        max: u128,
    },
    /// The binary tree ran out of attachment slots. Capacity grows by two for
    /// every accepted node, so this is a defensive check that cannot trigger
    /// for finite inputs.
    #[error("binary tree on {node_count} nodes ran out of attachment capacity")]
    CapacityExhausted {
        /// Number of nodes in the requested tree.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenError`] variants.
    enum GenErrorCode for GenError {
        /// A range's lower bound exceeded its upper bound.
        InvalidRange => InvalidRange { .. } => "GEN_INVALID_RANGE",
        /// A candidate set with zero entries was supplied.
        EmptyCandidateSet => EmptyCandidateSet => "GEN_EMPTY_CANDIDATE_SET",
        /// A unique sample requested more values than the domain provides.
        DomainExhausted => DomainExhausted { .. } => "GEN_DOMAIN_EXHAUSTED",
        /// A structural generator was asked for zero nodes.
        EmptyStructure => EmptyStructure => "GEN_EMPTY_STRUCTURE",
        /// A graph was requested with more edges than the node count admits.
        TooManyEdges => TooManyEdges { .. } => "GEN_TOO_MANY_EDGES",
        /// The binary tree ran out of attachment slots.
        CapacityExhausted => CapacityExhausted { .. } => "GEN_CAPACITY_EXHAUSTED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GenError>;
