//! Error enums shared across the workspace.

use thiserror::Error;

use crate::GameType;

/// Failures inside a game evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid game parameters: {0}")]
    InvalidParams(&'static str),
    /// Guessing higher on the highest rank or lower on the lowest.
    #[error("guess has no winning card")]
    ImpossibleGuess,
    #[error("unknown round token")]
    UnknownRound,
    #[error("round belongs to a different account")]
    RoundOwnerMismatch,
    #[error("deck exhausted")]
    DeckExhausted,
    #[error("payout arithmetic overflow")]
    Overflow,
}

/// Failures surfaced by the casino facade.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CasinoError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("unknown account")]
    UnknownAccount,
    #[error("handle already registered")]
    HandleTaken,
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },
    #[error("{0} is disabled")]
    GameDisabled(GameType),
    #[error("bet below minimum of {min}")]
    BetBelowMinimum { min: u64 },
    #[error("bet above maximum of {max}")]
    BetAboveMaximum { max: u64 },
    #[error("transfers between accounts are disabled")]
    TransfersDisabled,
    #[error("cannot transfer to the same account")]
    SelfTransfer,
    #[error("amount must be non-zero")]
    ZeroAmount,
    #[error("daily reward not ready until {available_at}")]
    RewardNotReady { available_at: u64 },
}
