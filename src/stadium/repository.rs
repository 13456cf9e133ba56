use async_trait::async_trait;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, instrument};

use super::models::{LeagueFilter, StadiumRecord};
use crate::shared::AppError;

/// Trait for stadium lookup operations
#[async_trait]
pub trait StadiumProvider {
    /// Picks one stadium matching the league filter whose id is not in the
    /// exclusion list. `Ok(None)` means the filter is exhausted.
    async fn random_stadium(
        &self,
        league: LeagueFilter,
        exclude: &[String],
    ) -> Result<Option<StadiumRecord>, AppError>;

    async fn all_stadiums(&self) -> Result<Vec<StadiumRecord>, AppError>;

    /// Distinct sport categories present in the data set.
    async fn sports(&self) -> Result<Vec<String>, AppError>;
}

/// On-disk shape of the stadium data set
#[derive(Debug, Deserialize)]
struct StadiumFile {
    stadiums: Vec<StadiumRecord>,
}

/// Stadium provider backed by a JSON data file loaded once at startup
#[derive(Debug)]
pub struct JsonStadiumRepository {
    stadiums: Vec<StadiumRecord>,
}

impl JsonStadiumRepository {
    pub fn new(stadiums: Vec<StadiumRecord>) -> Self {
        Self { stadiums }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Persistence(format!("failed to read {}: {}", path.display(), e))
        })?;
        let file: StadiumFile = serde_json::from_str(&raw).map_err(|e| {
            AppError::Persistence(format!("failed to parse {}: {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            count = file.stadiums.len(),
            "Loaded stadium data set"
        );

        Ok(Self::new(file.stadiums))
    }

    pub fn len(&self) -> usize {
        self.stadiums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stadiums.is_empty()
    }
}

#[async_trait]
impl StadiumProvider for JsonStadiumRepository {
    #[instrument(skip(self))]
    async fn random_stadium(
        &self,
        league: LeagueFilter,
        exclude: &[String],
    ) -> Result<Option<StadiumRecord>, AppError> {
        let candidates: Vec<&StadiumRecord> = self
            .stadiums
            .iter()
            .filter(|s| league.matches(s))
            .filter(|s| !exclude.contains(&s.id))
            .collect();

        debug!(
            league = %league,
            excluded = exclude.len(),
            candidates = candidates.len(),
            "Selecting random stadium"
        );

        Ok(candidates.choose(&mut rand::rng()).map(|s| (*s).clone()))
    }

    async fn all_stadiums(&self) -> Result<Vec<StadiumRecord>, AppError> {
        Ok(self.stadiums.clone())
    }

    async fn sports(&self) -> Result<Vec<String>, AppError> {
        let sports: BTreeSet<String> = self.stadiums.iter().map(|s| s.sport.clone()).collect();
        Ok(sports.into_iter().collect())
    }
}
