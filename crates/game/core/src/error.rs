//! Error infrastructure for delve-core.
//!
//! Every failing crawler operation reports a [`CrawlerError`]. Variants are
//! classified into two kinds:
//!
//! - **InvalidArgument**: out-of-domain input at construction or call time
//!   (negative damage, non-positive heal, negative stats, missing name)
//! - **IllegalState**: the operation is not allowed in the crawler's current
//!   state (acting on a dead crawler, stat overflow on level-up)
//!
//! Neither kind is retried by the core. A failed operation leaves the crawler
//! untouched.

use crate::crawler::StatKind;

/// Result alias used by every fallible crawler operation.
pub type CrawlerResult<T> = Result<T, CrawlerError>;

/// Classification of an error, used by callers to decide how to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Invalid input; the same call will fail again with the same arguments.
    InvalidArgument,

    /// The crawler is in a state that forbids the operation.
    ///
    /// These indicate a logic error in the calling driver, which should have
    /// checked [`Crawler::is_alive`](crate::Crawler::is_alive) first.
    IllegalState,
}

impl ErrorKind {
    /// Returns a human-readable description of this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::IllegalState => "illegal_state",
        }
    }
}

/// How seriously a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    Validation,

    /// Unexpected state for the operation. Indicates a driver bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }
}

impl From<ErrorKind> for ErrorSeverity {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidArgument => Self::Validation,
            ErrorKind::IllegalState => Self::Internal,
        }
    }
}

/// Common trait for delve-core errors.
///
/// Provides a uniform interface for classification and stable codes for
/// logging and tests.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised by crawler construction and crawler operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CrawlerError {
    #[error("max health must be greater than 0, got {0}")]
    NonPositiveMaxHealth(i32),

    #[error("defence points must not be negative, got {0}")]
    NegativeDefence(i32),

    #[error("attack points must not be negative, got {0}")]
    NegativeAttack(i32),

    #[error("level must not be negative, got {0}")]
    NegativeLevel(i32),

    #[error("crawler name must not be empty")]
    MissingName,

    #[error("damage must not be negative, got {0}")]
    NegativeDamage(i32),

    #[error("heal amount must be greater than 0, got {0}")]
    NonPositiveHeal(i32),

    #[error("crawler '{name}' is already dead")]
    AlreadyDead { name: String },

    #[error("{stat} of crawler '{name}' would overflow")]
    StatOverflow { name: String, stat: StatKind },
}

impl CrawlerError {
    pub(crate) fn already_dead(name: &str) -> Self {
        Self::AlreadyDead {
            name: name.to_owned(),
        }
    }

    /// Returns true if this error signals out-of-domain input.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns true if this error signals a forbidden state transition.
    pub fn is_illegal_state(&self) -> bool {
        self.kind() == ErrorKind::IllegalState
    }
}

impl GameError for CrawlerError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NonPositiveMaxHealth(_)
            | Self::NegativeDefence(_)
            | Self::NegativeAttack(_)
            | Self::NegativeLevel(_)
            | Self::MissingName
            | Self::NegativeDamage(_)
            | Self::NonPositiveHeal(_) => ErrorKind::InvalidArgument,
            Self::AlreadyDead { .. } | Self::StatOverflow { .. } => ErrorKind::IllegalState,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        self.kind().into()
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveMaxHealth(_) => "NON_POSITIVE_MAX_HEALTH",
            Self::NegativeDefence(_) => "NEGATIVE_DEFENCE",
            Self::NegativeAttack(_) => "NEGATIVE_ATTACK",
            Self::NegativeLevel(_) => "NEGATIVE_LEVEL",
            Self::MissingName => "MISSING_NAME",
            Self::NegativeDamage(_) => "NEGATIVE_DAMAGE",
            Self::NonPositiveHeal(_) => "NON_POSITIVE_HEAL",
            Self::AlreadyDead { .. } => "ALREADY_DEAD",
            Self::StatOverflow { .. } => "STAT_OVERFLOW",
        }
    }
}
