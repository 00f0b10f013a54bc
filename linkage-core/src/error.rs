//! Error types for the linkage core library.
//!
//! Every public error enum carries a stable, machine-readable code so the CLI
//! can log failures without matching on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( { $($pattern:tt)* } )?
                    $( ( $($tuple:tt)* ) )?
                    => $code:expr
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
            #[must_use]
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
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(
                        Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

/// Precondition violations raised by [`crate::DisjointSetForest`].
///
/// Elements are reported through their `Debug` rendering so the error stays
/// independent of the forest's element type.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// `make_set` was called for an element that is already present.
    #[error("element {element} is already present in the forest")]
    DuplicateElement {
        /// Debug rendering of the offending element.
        element: String,
    },
    /// `find` or `union` referenced an element that was never inserted.
    #[error("element {element} was never inserted into the forest")]
    UnknownElement {
        /// Debug rendering of the missing element.
        element: String,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("forest invariant violated: {invariant} (slot {slot})")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
        /// Arena slot at which the violation was observed.
        slot: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// `make_set` was called for an element that is already present.
        DuplicateElement => DuplicateElement { .. } => "FOREST_DUPLICATE_ELEMENT",
        /// An operation referenced an element that was never inserted.
        UnknownElement => UnknownElement { .. } => "FOREST_UNKNOWN_ELEMENT",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "FOREST_INVARIANT_VIOLATION",
    }
}

/// Errors raised while building the weighted edge list.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EdgeError {
    /// The metric produced NaN or an infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// Index of the left endpoint in the node list.
        left: usize,
        /// Index of the right endpoint in the node list.
        right: usize,
    },
    /// The metric produced a negative weight.
    #[error("edge ({left}, {right}) has negative weight")]
    NegativeWeight {
        /// Index of the left endpoint in the node list.
        left: usize,
        /// Index of the right endpoint in the node list.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeError`] variants.
    enum EdgeErrorCode for EdgeError {
        /// The metric produced NaN or an infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "EDGE_NON_FINITE_WEIGHT",
        /// The metric produced a negative weight.
        NegativeWeight => NegativeWeight { .. } => "EDGE_NEGATIVE_WEIGHT",
    }
}

/// Error type produced when configuring or running a clustering pass.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LinkageError {
    /// A fixed-step stop condition must allow at least one step.
    #[error("step limit must be at least 1 (got {got})")]
    InvalidStepLimit {
        /// The rejected limit.
        got: usize,
    },
    /// Ranking must consider at least one component.
    #[error("top component count must be at least 1 (got {got})")]
    InvalidTopCount {
        /// The rejected count.
        got: usize,
    },
    /// The forest rejected an operation.
    #[error(transparent)]
    Forest(#[from] ForestError),
    /// Edge construction failed.
    #[error(transparent)]
    Edge(#[from] EdgeError),
}

define_error_codes! {
    /// Stable codes describing [`LinkageError`] variants.
    enum LinkageErrorCode for LinkageError {
        /// A fixed-step stop condition must allow at least one step.
        InvalidStepLimit => InvalidStepLimit { .. } => "LINKAGE_INVALID_STEP_LIMIT",
        /// Ranking must consider at least one component.
        InvalidTopCount => InvalidTopCount { .. } => "LINKAGE_INVALID_TOP_COUNT",
        /// The forest rejected an operation.
        ForestFailure => Forest(..) => "LINKAGE_FOREST_FAILURE",
        /// Edge construction failed.
        EdgeFailure => Edge(..) => "LINKAGE_EDGE_FAILURE",
    }
}

impl LinkageError {
    /// Retrieve the inner [`ForestErrorCode`] when the error originated in the forest.
    #[must_use]
    pub const fn forest_code(&self) -> Option<ForestErrorCode> {
        match self {
            Self::Forest(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LinkageError>;
