use super::BranchQueryService;
use crate::{
    application::{
        dto::{BankDirectoryDto, CityDirectoryDto, DirectoryLink, StateDirectoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::hierarchy::ResolvedPath,
};

pub struct BankDirectoryQuery {
    pub bank_slug: String,
}

pub struct StateDirectoryQuery {
    pub bank_slug: String,
    pub state_slug: String,
}

pub struct CityDirectoryQuery {
    pub bank_slug: String,
    pub state_slug: String,
    pub city_slug: String,
}

impl BranchQueryService {
    pub async fn list_banks(&self) -> ApplicationResult<Vec<DirectoryLink>> {
        let banks = self.catalog.distinct_banks().await?;
        Ok(banks
            .iter()
            .map(|bank| self.paths.bank(bank))
            .filter(DirectoryLink::is_routable)
            .collect())
    }

    pub async fn bank_directory(
        &self,
        query: BankDirectoryQuery,
    ) -> ApplicationResult<BankDirectoryDto> {
        let path = self.resolve(&[query.bank_slug.as_str()]).await?;
        let states = self.catalog.distinct_states(&path.bank).await?;

        Ok(BankDirectoryDto {
            states: states
                .iter()
                .map(|state| self.paths.state(&path.bank, state))
                .filter(DirectoryLink::is_routable)
                .collect(),
            bank: self.paths.bank(&path.bank),
        })
    }

    pub async fn state_directory(
        &self,
        query: StateDirectoryQuery,
    ) -> ApplicationResult<StateDirectoryDto> {
        let path = self
            .resolve(&[query.bank_slug.as_str(), query.state_slug.as_str()])
            .await?;
        let state = required(path.state, "state")?;
        let cities = self.catalog.distinct_cities(&path.bank, &state).await?;

        Ok(StateDirectoryDto {
            cities: cities
                .iter()
                .map(|city| self.paths.city(&path.bank, &state, city))
                .filter(DirectoryLink::is_routable)
                .collect(),
            state: self.paths.state(&path.bank, &state),
            bank: self.paths.bank(&path.bank),
        })
    }

    pub async fn city_directory(
        &self,
        query: CityDirectoryQuery,
    ) -> ApplicationResult<CityDirectoryDto> {
        let path = self
            .resolve(&[
                query.bank_slug.as_str(),
                query.state_slug.as_str(),
                query.city_slug.as_str(),
            ])
            .await?;
        let state = required(path.state, "state")?;
        let city = required(path.city, "city")?;
        let branches = self
            .catalog
            .branches_in_city(&path.bank, &state, &city)
            .await?;

        Ok(CityDirectoryDto {
            branches: branches.into_iter().map(Into::into).collect(),
            city: self.paths.city(&path.bank, &state, &city),
            state: self.paths.state(&path.bank, &state),
            bank: self.paths.bank(&path.bank),
        })
    }

    async fn resolve(&self, segments: &[&str]) -> ApplicationResult<ResolvedPath> {
        let resolution = self.resolver.resolve(segments).await?;
        Ok(resolution.into_result()?)
    }
}

fn required(value: Option<String>, level: &str) -> ApplicationResult<String> {
    value.ok_or_else(|| {
        ApplicationError::infrastructure(format!("{level} missing from resolved path"))
    })
}
