//! Pokedex Module
//!
//! The user's collection of caught Pokemon and the catch roll.

use std::collections::BTreeMap;

use rand::Rng;

use crate::models::Pokemon;

/// Flat part of the catch difficulty every roll has to beat.
pub const BASE_CATCH_DIFFICULTY: u32 = 40;

/// Rolls are drawn from `0..ROLL_RANGE`.
pub const ROLL_RANGE: u32 = 100;

// == Pokedex ==
/// Caught Pokemon, keyed and ordered by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught Pokemon.
    ///
    /// Returns `false` and keeps the existing record if one with the same
    /// name is already present.
    pub fn add(&mut self, pokemon: Pokemon) -> bool {
        if self.contains(&pokemon.name) {
            return false;
        }
        self.caught.insert(pokemon.name.clone(), pokemon);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Names of all caught Pokemon in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

// == Catching ==

/// Value a roll must exceed to catch a Pokemon with `base_experience`.
///
/// Grows with experience but flattens out: the divisor rises by one for
/// every hundred points.
pub fn catch_difficulty(base_experience: u32) -> u32 {
    let scaler = base_experience / 100;
    let toughness = base_experience / (10 + scaler);
    BASE_CATCH_DIFFICULTY + toughness
}

/// Whether `roll` catches a Pokemon with `base_experience`.
pub fn attempt_catch(roll: u32, base_experience: u32) -> bool {
    roll > catch_difficulty(base_experience)
}

/// Source of catch rolls.
pub trait CatchRoll: Send {
    /// Returns a value in `0..ROLL_RANGE`.
    fn roll(&mut self) -> u32;
}

/// Rolls from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRoll;

impl CatchRoll for RandomRoll {
    fn roll(&mut self) -> u32 {
        rand::thread_rng().gen_range(0..ROLL_RANGE)
    }
}

/// Always rolls the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub u32);

impl CatchRoll for FixedRoll {
    fn roll(&mut self) -> u32 {
        self.0
    }
}
