use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use table_data_api::table_data::{
    domain::{
        model::{
            entities::{handler_output::HandlerOutput, table_record::TableRecord},
            enums::table_data_domain_error::TableDataDomainError,
            queries::table_data_request::TableDataRequest,
        },
        services::data_handler::DataHandler,
    },
    infrastructure::persistence::repositories::{
        connection_string_resolver_repository::ConnectionStringResolverRepository,
        data_repository::DataRepository, data_repository_factory::DataRepositoryFactory,
    },
};

#[derive(Default)]
struct FakeDataRepositoryState {
    tables: HashMap<String, Option<Vec<TableRecord>>>,
    fault: Option<String>,
    table_exists_calls: usize,
    get_rows_calls: usize,
}

/// In-memory stand-in for one database.
pub struct FakeDataRepository {
    state: Mutex<FakeDataRepositoryState>,
}

impl FakeDataRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeDataRepositoryState::default()),
        }
    }

    pub fn with_table(self, table_name: &str, rows: Vec<TableRecord>) -> Self {
        self.state
            .lock()
            .expect("mutex poisoned")
            .tables
            .insert(table_name.to_string(), Some(rows));
        self
    }

    /// A table that exists but whose query produces no rows.
    pub fn with_empty_table(self, table_name: &str) -> Self {
        self.state
            .lock()
            .expect("mutex poisoned")
            .tables
            .insert(table_name.to_string(), None);
        self
    }

    pub fn set_fault(&self, message: &str) {
        self.state.lock().expect("mutex poisoned").fault = Some(message.to_string());
    }

    pub fn table_exists_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").table_exists_calls
    }

    pub fn get_rows_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").get_rows_calls
    }
}

#[async_trait]
impl DataRepository for FakeDataRepository {
    async fn table_exists(&self, table_name: &str) -> Result<bool, TableDataDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.table_exists_calls += 1;
        if let Some(message) = &state.fault {
            return Err(TableDataDomainError::InfrastructureError(message.clone()));
        }
        Ok(state.tables.contains_key(table_name))
    }

    async fn table_schema(&self, _table_name: &str) -> Result<String, TableDataDomainError> {
        Ok("public".to_string())
    }

    async fn get_rows(
        &self,
        table_name: &str,
    ) -> Result<Option<Vec<TableRecord>>, TableDataDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.get_rows_calls += 1;
        if let Some(message) = &state.fault {
            return Err(TableDataDomainError::InfrastructureError(message.clone()));
        }
        Ok(state.tables.get(table_name).cloned().flatten())
    }
}

#[derive(Default)]
struct FakeDataRepositoryFactoryState {
    repositories: HashMap<String, Arc<FakeDataRepository>>,
    create_calls: Vec<String>,
}

pub struct FakeDataRepositoryFactory {
    state: Mutex<FakeDataRepositoryFactoryState>,
}

impl FakeDataRepositoryFactory {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeDataRepositoryFactoryState::default()),
        }
    }

    pub fn with_database(self, database_name: &str, repository: Arc<FakeDataRepository>) -> Self {
        self.state
            .lock()
            .expect("mutex poisoned")
            .repositories
            .insert(database_name.to_string(), repository);
        self
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").create_calls.len()
    }
}

#[async_trait]
impl DataRepositoryFactory for FakeDataRepositoryFactory {
    async fn create_repository(&self, database_name: &str) -> Option<Arc<dyn DataRepository>> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.create_calls.push(database_name.to_string());
        state
            .repositories
            .get(database_name)
            .cloned()
            .map(|repository| repository as Arc<dyn DataRepository>)
    }
}

pub enum ConnectionStringLookup {
    Found(String),
    Missing,
    Fails,
}

pub struct FakeConnectionStringResolverRepository {
    lookup: ConnectionStringLookup,
}

impl FakeConnectionStringResolverRepository {
    pub fn new(lookup: ConnectionStringLookup) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl ConnectionStringResolverRepository for FakeConnectionStringResolverRepository {
    async fn resolve_connection_string(
        &self,
        _database_name: &str,
    ) -> Result<Option<String>, TableDataDomainError> {
        match &self.lookup {
            ConnectionStringLookup::Found(connection_string) => Ok(Some(connection_string.clone())),
            ConnectionStringLookup::Missing => Ok(None),
            ConnectionStringLookup::Fails => Err(TableDataDomainError::InfrastructureError(
                "configuration backend unreachable".to_string(),
            )),
        }
    }
}

type StubOutcome = Box<dyn Fn() -> Result<HandlerOutput, TableDataDomainError> + Send + Sync>;

#[derive(Default)]
struct StubDataHandlerCalls {
    can_handle: usize,
    execute: usize,
}

/// Scriptable chain link that records how often it was consulted.
pub struct StubDataHandler {
    name: &'static str,
    capable: bool,
    delay: Option<Duration>,
    outcome: StubOutcome,
    calls: Mutex<StubDataHandlerCalls>,
}

impl StubDataHandler {
    pub fn new(
        name: &'static str,
        capable: bool,
        outcome: impl Fn() -> Result<HandlerOutput, TableDataDomainError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            capable,
            delay: None,
            outcome: Box::new(outcome),
            calls: Mutex::new(StubDataHandlerCalls::default()),
        }
    }

    pub fn returning(name: &'static str, capable: bool, output: HandlerOutput) -> Self {
        Self::new(name, capable, move || Ok(output.clone()))
    }

    pub fn panicking(name: &'static str) -> Self {
        Self::new(name, true, || panic!("stub handler exploded"))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn can_handle_calls(&self) -> usize {
        self.calls.lock().expect("mutex poisoned").can_handle
    }

    pub fn execute_calls(&self) -> usize {
        self.calls.lock().expect("mutex poisoned").execute
    }
}

#[async_trait]
impl DataHandler for StubDataHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn can_handle(&self, _request: &TableDataRequest) -> bool {
        self.calls.lock().expect("mutex poisoned").can_handle += 1;
        self.capable
    }

    async fn execute(
        &self,
        _request: &TableDataRequest,
    ) -> Result<HandlerOutput, TableDataDomainError> {
        self.calls.lock().expect("mutex poisoned").execute += 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.outcome)()
    }
}
