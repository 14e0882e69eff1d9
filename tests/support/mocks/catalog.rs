// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use futures::{StreamExt, stream};
use ifsc_directory::domain::branch::{
    Branch, BranchCatalog, BranchSummary, CatalogEntry, CatalogKind, CatalogStream, IfscCode,
    PageWindow,
};
use ifsc_directory::domain::errors::{DomainError, DomainResult};
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

/// メモリ上のブランチカタログ（IFSC 正規化順に保持）
pub struct InMemoryCatalog {
    branches: Vec<Branch>,
}

impl InMemoryCatalog {
    pub fn new(mut branches: Vec<Branch>) -> Self {
        branches.sort_by(|a, b| a.ifsc.cmp(&b.ifsc));
        Self { branches }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn listing(&self, kind: CatalogKind) -> Vec<CatalogEntry> {
        match kind {
            CatalogKind::Banks => self
                .branches
                .iter()
                .filter_map(|b| b.bank.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(|bank| CatalogEntry::Bank { bank })
                .collect(),
            CatalogKind::States => self
                .branches
                .iter()
                .filter_map(|b| Some((b.bank.clone()?, b.state.clone()?)))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(|(bank, state)| CatalogEntry::State { bank, state })
                .collect(),
            CatalogKind::Cities => self
                .branches
                .iter()
                .filter_map(|b| Some((b.bank.clone()?, b.state.clone()?, b.city.clone()?)))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(|(bank, state, city)| CatalogEntry::City { bank, state, city })
                .collect(),
            CatalogKind::Branches => self
                .branches
                .iter()
                .map(|b| CatalogEntry::Branch {
                    ifsc: b.ifsc.clone(),
                })
                .collect(),
        }
    }
}

fn distinct<'a>(names: impl Iterator<Item = Option<&'a String>>) -> Vec<String> {
    names
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn window_of(entries: Vec<CatalogEntry>, window: Option<PageWindow>) -> Vec<CatalogEntry> {
    match window {
        Some(w) => entries
            .into_iter()
            .skip(w.offset as usize)
            .take(w.limit as usize)
            .collect(),
        None => entries,
    }
}

#[async_trait]
impl BranchCatalog for InMemoryCatalog {
    async fn find_by_code(&self, code: &IfscCode) -> DomainResult<Option<Branch>> {
        Ok(self.branches.iter().find(|b| &b.ifsc == code).cloned())
    }

    async fn distinct_banks(&self) -> DomainResult<Vec<String>> {
        Ok(distinct(self.branches.iter().map(|b| b.bank.as_ref())))
    }

    async fn distinct_states(&self, bank: &str) -> DomainResult<Vec<String>> {
        Ok(distinct(
            self.branches
                .iter()
                .filter(|b| b.bank.as_deref() == Some(bank))
                .map(|b| b.state.as_ref()),
        ))
    }

    async fn distinct_cities(&self, bank: &str, state: &str) -> DomainResult<Vec<String>> {
        Ok(distinct(
            self.branches
                .iter()
                .filter(|b| b.bank.as_deref() == Some(bank) && b.state.as_deref() == Some(state))
                .map(|b| b.city.as_ref()),
        ))
    }

    async fn branches_in_city(
        &self,
        bank: &str,
        state: &str,
        city: &str,
    ) -> DomainResult<Vec<BranchSummary>> {
        Ok(self
            .branches
            .iter()
            .filter(|b| {
                b.bank.as_deref() == Some(bank)
                    && b.state.as_deref() == Some(state)
                    && b.city.as_deref() == Some(city)
            })
            .map(|b| BranchSummary {
                ifsc: b.ifsc.clone(),
                branch: b.branch.clone(),
                address: b.address.clone(),
            })
            .collect())
    }

    async fn count(&self, kind: CatalogKind) -> DomainResult<u64> {
        Ok(self.listing(kind).len() as u64)
    }

    fn stream_entries(&self, kind: CatalogKind, window: Option<PageWindow>) -> CatalogStream {
        let entries: Vec<DomainResult<CatalogEntry>> = window_of(self.listing(kind), window)
            .into_iter()
            .map(Ok)
            .collect();
        stream::iter(entries).boxed()
    }
}

/// 全操作がデータベース接続エラーを返すカタログ
pub struct UnavailableCatalog;

fn unavailable() -> DomainError {
    DomainError::Unavailable("pool timed out while waiting for an open connection".into())
}

#[async_trait]
impl BranchCatalog for UnavailableCatalog {
    async fn find_by_code(&self, _code: &IfscCode) -> DomainResult<Option<Branch>> {
        Err(unavailable())
    }

    async fn distinct_banks(&self) -> DomainResult<Vec<String>> {
        Err(unavailable())
    }

    async fn distinct_states(&self, _bank: &str) -> DomainResult<Vec<String>> {
        Err(unavailable())
    }

    async fn distinct_cities(&self, _bank: &str, _state: &str) -> DomainResult<Vec<String>> {
        Err(unavailable())
    }

    async fn branches_in_city(
        &self,
        _bank: &str,
        _state: &str,
        _city: &str,
    ) -> DomainResult<Vec<BranchSummary>> {
        Err(unavailable())
    }

    async fn count(&self, _kind: CatalogKind) -> DomainResult<u64> {
        Err(unavailable())
    }

    fn stream_entries(&self, _kind: CatalogKind, _window: Option<PageWindow>) -> CatalogStream {
        stream::iter(vec![Err(unavailable())]).boxed()
    }
}

/// 件数取得とクエリが失敗する（永続化エラー）カタログ。それ以外は内部カタログに委譲する
pub struct FailingQueryCatalog {
    pub inner: InMemoryCatalog,
    pub fail_count_for: Option<CatalogKind>,
    pub fail_lookup: bool,
}

impl FailingQueryCatalog {
    pub fn failing_count(inner: InMemoryCatalog, kind: CatalogKind) -> Self {
        Self {
            inner,
            fail_count_for: Some(kind),
            fail_lookup: false,
        }
    }

    pub fn failing_lookup(inner: InMemoryCatalog) -> Self {
        Self {
            inner,
            fail_count_for: None,
            fail_lookup: true,
        }
    }
}

#[async_trait]
impl BranchCatalog for FailingQueryCatalog {
    async fn find_by_code(&self, code: &IfscCode) -> DomainResult<Option<Branch>> {
        if self.fail_lookup {
            return Err(DomainError::Persistence(
                "column \"ifsc\" does not exist".into(),
            ));
        }
        self.inner.find_by_code(code).await
    }

    async fn distinct_banks(&self) -> DomainResult<Vec<String>> {
        self.inner.distinct_banks().await
    }

    async fn distinct_states(&self, bank: &str) -> DomainResult<Vec<String>> {
        self.inner.distinct_states(bank).await
    }

    async fn distinct_cities(&self, bank: &str, state: &str) -> DomainResult<Vec<String>> {
        self.inner.distinct_cities(bank, state).await
    }

    async fn branches_in_city(
        &self,
        bank: &str,
        state: &str,
        city: &str,
    ) -> DomainResult<Vec<BranchSummary>> {
        self.inner.branches_in_city(bank, state, city).await
    }

    async fn count(&self, kind: CatalogKind) -> DomainResult<u64> {
        if self.fail_count_for == Some(kind) {
            return Err(DomainError::Persistence("count failed".into()));
        }
        self.inner.count(kind).await
    }

    fn stream_entries(&self, kind: CatalogKind, window: Option<PageWindow>) -> CatalogStream {
        self.inner.stream_entries(kind, window)
    }
}

/// 指定件数を返した後にストリームがエラーで終わるカタログ
pub struct MidStreamFailingCatalog {
    pub inner: InMemoryCatalog,
    pub fail_after: usize,
}

#[async_trait]
impl BranchCatalog for MidStreamFailingCatalog {
    async fn find_by_code(&self, code: &IfscCode) -> DomainResult<Option<Branch>> {
        self.inner.find_by_code(code).await
    }

    async fn distinct_banks(&self) -> DomainResult<Vec<String>> {
        self.inner.distinct_banks().await
    }

    async fn distinct_states(&self, bank: &str) -> DomainResult<Vec<String>> {
        self.inner.distinct_states(bank).await
    }

    async fn distinct_cities(&self, bank: &str, state: &str) -> DomainResult<Vec<String>> {
        self.inner.distinct_cities(bank, state).await
    }

    async fn branches_in_city(
        &self,
        bank: &str,
        state: &str,
        city: &str,
    ) -> DomainResult<Vec<BranchSummary>> {
        self.inner.branches_in_city(bank, state, city).await
    }

    async fn count(&self, kind: CatalogKind) -> DomainResult<u64> {
        self.inner.count(kind).await
    }

    fn stream_entries(&self, kind: CatalogKind, window: Option<PageWindow>) -> CatalogStream {
        let failure = stream::iter(vec![Err(DomainError::Unavailable(
            "connection reset by peer".into(),
        ))]);
        self.inner
            .stream_entries(kind, window)
            .take(self.fail_after)
            .chain(failure)
            .boxed()
    }
}

/// 名前一覧の呼び出し回数を数えるカタログ
pub struct CountingCatalog {
    pub inner: InMemoryCatalog,
    calls: Mutex<HashMap<&'static str, usize>>,
    fail_next: Mutex<bool>,
}

impl CountingCatalog {
    pub fn new(inner: InMemoryCatalog) -> Self {
        Self {
            inner,
            calls: Mutex::new(HashMap::new()),
            fail_next: Mutex::new(false),
        }
    }

    pub fn calls(&self, method: &'static str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    /// 次の名前一覧呼び出しを一度だけ失敗させる
    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    fn record(&self, method: &'static str) -> DomainResult<()> {
        *self.calls.lock().unwrap().entry(method).or_default() += 1;
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(unavailable());
        }
        Ok(())
    }
}

#[async_trait]
impl BranchCatalog for CountingCatalog {
    async fn find_by_code(&self, code: &IfscCode) -> DomainResult<Option<Branch>> {
        *self.calls.lock().unwrap().entry("find_by_code").or_default() += 1;
        self.inner.find_by_code(code).await
    }

    async fn distinct_banks(&self) -> DomainResult<Vec<String>> {
        self.record("distinct_banks")?;
        self.inner.distinct_banks().await
    }

    async fn distinct_states(&self, bank: &str) -> DomainResult<Vec<String>> {
        self.record("distinct_states")?;
        self.inner.distinct_states(bank).await
    }

    async fn distinct_cities(&self, bank: &str, state: &str) -> DomainResult<Vec<String>> {
        self.record("distinct_cities")?;
        self.inner.distinct_cities(bank, state).await
    }

    async fn branches_in_city(
        &self,
        bank: &str,
        state: &str,
        city: &str,
    ) -> DomainResult<Vec<BranchSummary>> {
        self.inner.branches_in_city(bank, state, city).await
    }

    async fn count(&self, kind: CatalogKind) -> DomainResult<u64> {
        *self.calls.lock().unwrap().entry("count").or_default() += 1;
        self.inner.count(kind).await
    }

    fn stream_entries(&self, kind: CatalogKind, window: Option<PageWindow>) -> CatalogStream {
        self.inner.stream_entries(kind, window)
    }
}
