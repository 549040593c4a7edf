//! Game metadata and per-game configuration.

use std::collections::BTreeMap;

use parlay_types::{CasinoError, GameType, Settings};

/// Static metadata for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameInfo {
    pub name: &'static str,
    /// Nominal house edge in basis points, for display.
    pub house_edge_bps: u16,
}

/// Per-game runtime configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub enabled: bool,
    pub min_bet: u64,
    pub max_bet: u64,
}

/// Static metadata lookup.
pub fn game_info(game: GameType) -> GameInfo {
    match game {
        GameType::Coinflip => GameInfo {
            name: "Coinflip",
            house_edge_bps: 0,
        },
        GameType::Slots => GameInfo {
            name: "Slots",
            house_edge_bps: 800,
        },
        GameType::Blackjack => GameInfo {
            name: "Blackjack",
            house_edge_bps: 100,
        },
        GameType::Roulette => GameInfo {
            name: "Roulette",
            house_edge_bps: 270,
        },
        GameType::Dice => GameInfo {
            name: "Dice",
            house_edge_bps: 1_000,
        },
        GameType::Poker => GameInfo {
            name: "Poker",
            house_edge_bps: 350,
        },
        GameType::Crash => GameInfo {
            name: "Crash",
            house_edge_bps: 500,
        },
        GameType::HiLo => GameInfo {
            name: "Hi-Lo",
            house_edge_bps: 500,
        },
        GameType::MegaMultiplier => GameInfo {
            name: "MegaMultiplier",
            house_edge_bps: 2_000,
        },
    }
}

/// Which games are live and at what stakes.
#[derive(Clone, Debug)]
pub struct GameRegistry {
    configs: BTreeMap<GameType, GameConfig>,
}

impl GameRegistry {
    /// All games enabled with the settings' global bet limits.
    pub fn new(settings: &Settings) -> Self {
        let configs = GameType::ALL
            .into_iter()
            .map(|game| {
                (
                    game,
                    GameConfig {
                        enabled: true,
                        min_bet: settings.min_bet,
                        max_bet: settings.max_bet,
                    },
                )
            })
            .collect();
        Self { configs }
    }

    pub fn config(&self, game: GameType) -> GameConfig {
        // `new` seeds every variant of the closed enum.
        self.configs.get(&game).copied().unwrap_or(GameConfig {
            enabled: false,
            min_bet: 0,
            max_bet: 0,
        })
    }

    pub fn is_enabled(&self, game: GameType) -> bool {
        self.config(game).enabled
    }

    pub fn set_enabled(&mut self, game: GameType, enabled: bool) {
        if let Some(config) = self.configs.get_mut(&game) {
            config.enabled = enabled;
        }
    }

    pub fn set_bet_limits(&mut self, game: GameType, min_bet: u64, max_bet: u64) {
        if let Some(config) = self.configs.get_mut(&game) {
            config.min_bet = min_bet;
            config.max_bet = max_bet;
        }
    }

    /// Reject bets on disabled games or outside the limits.
    pub fn validate_bet(&self, game: GameType, bet: u64) -> Result<(), CasinoError> {
        let config = self.config(game);
        if !config.enabled {
            return Err(CasinoError::GameDisabled(game));
        }
        if bet < config.min_bet {
            return Err(CasinoError::BetBelowMinimum {
                min: config.min_bet,
            });
        }
        if bet > config.max_bet {
            return Err(CasinoError::BetAboveMaximum {
                max: config.max_bet,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_game() {
        let registry = GameRegistry::new(&Settings::default());
        for game in GameType::ALL {
            assert!(registry.is_enabled(game));
            let config = registry.config(game);
            assert_eq!(config.min_bet, 10);
            assert_eq!(config.max_bet, 10_000);
        }
    }

    #[test]
    fn bet_validation() {
        let mut registry = GameRegistry::new(&Settings::default());
        assert!(registry.validate_bet(GameType::Slots, 100).is_ok());
        assert_eq!(
            registry.validate_bet(GameType::Slots, 5),
            Err(CasinoError::BetBelowMinimum { min: 10 })
        );
        assert_eq!(
            registry.validate_bet(GameType::Slots, 20_000),
            Err(CasinoError::BetAboveMaximum { max: 10_000 })
        );

        registry.set_enabled(GameType::Slots, false);
        assert_eq!(
            registry.validate_bet(GameType::Slots, 100),
            Err(CasinoError::GameDisabled(GameType::Slots))
        );
    }

    #[test]
    fn per_game_limits_override() {
        let mut registry = GameRegistry::new(&Settings::default());
        registry.set_bet_limits(GameType::MegaMultiplier, 100, 1_000);
        assert_eq!(
            registry.validate_bet(GameType::MegaMultiplier, 50),
            Err(CasinoError::BetBelowMinimum { min: 100 })
        );
        assert!(registry
            .validate_bet(GameType::MegaMultiplier, 500)
            .is_ok());
    }
}
