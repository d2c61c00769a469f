//! Error types for the spanwalk core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes for logging surfaces.

use std::fmt;

use thiserror::Error;

use crate::engine::EngineState;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::OrderedTree`], [`crate::OrderedMap`] and
/// [`crate::OrderedSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TreeError {
    /// An element comparing equal to the inserted one is already stored.
    #[error("an element with an equal key is already present")]
    DuplicateKey,
    /// The requested element (or any element, for minimum removal) is absent.
    #[error("`{operation}` found no matching element")]
    NotFound {
        /// Name of the operation that failed.
        operation: &'static str,
    },
    /// The operation is deliberately not implemented by the container.
    #[error("`{operation}` is not supported")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`TreeError`] variants.
    enum TreeErrorCode for TreeError {
        /// An element comparing equal to the inserted one is already stored.
        DuplicateKey => DuplicateKey => "TREE_DUPLICATE_KEY",
        /// The requested element is absent.
        NotFound => NotFound { .. } => "TREE_NOT_FOUND",
        /// The operation is deliberately not implemented.
        Unsupported => Unsupported { .. } => "TREE_UNSUPPORTED",
    }
}

/// An error produced by the typed-edge surface of [`crate::DirectedView`].
///
/// Structural graph mutations report precondition failures as `false`
/// instead; this type only covers requests the undirected model cannot
/// express at all.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A directed edge was requested from an undirected graph.
    #[error("directed edges cannot be added to an undirected graph")]
    DirectedEdge,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A directed edge was requested from an undirected graph.
        DirectedEdge => DirectedEdge => "GRAPH_DIRECTED_EDGE",
    }
}

/// Error type produced when driving a [`crate::StepEngine`] outside its
/// lifecycle.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EngineError {
    /// The engine has not been bound to a graph with `reset`.
    #[error("engine is not bound to a graph; call reset first")]
    NotBound,
    /// The requested transition is not valid from the current state.
    #[error("`{operation}` is not valid while the engine is {state}")]
    InvalidState {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Lifecycle state observed when the operation was attempted.
        state: EngineState,
    },
    /// The priority structure reported an unexpected failure.
    #[error("priority structure failed: {0}")]
    Tree(#[from] TreeError),
}

define_error_codes! {
    /// Stable codes describing [`EngineError`] variants.
    enum EngineErrorCode for EngineError {
        /// The engine has not been bound to a graph.
        NotBound => NotBound => "ENGINE_NOT_BOUND",
        /// The requested transition is not valid from the current state.
        InvalidState => InvalidState { .. } => "ENGINE_INVALID_STATE",
        /// The priority structure reported an unexpected failure.
        Tree => Tree(..) => "ENGINE_TREE",
    }
}

impl EngineError {
    /// Retrieve the inner [`TreeErrorCode`] when the error originated in the
    /// engine's priority structure.
    #[must_use]
    pub const fn tree_code(&self) -> Option<TreeErrorCode> {
        match self {
            Self::Tree(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the tree containers.
pub type Result<T> = core::result::Result<T, TreeError>;
