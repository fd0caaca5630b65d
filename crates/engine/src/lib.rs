//! Bookkeeping engine.
//!
//! Records live in a [`RowStore`] as plain rows; the [`Engine`] reads them
//! into typed records and feeds them to the pure functions in [`aggregate`].

use std::sync::Arc;

pub use aggregate::{DashboardSummary, MonthlyReport, dashboard_summary, monthly_report};
pub use budgets::{BudgetLine, BudgetNew};
pub use debts::{DebtCredit, DebtCreditKind, DebtCreditNew, DebtStatus};
pub use error::EngineError;
pub use money::MoneyCents;
pub use row::{Row, Table};
pub use savings::{SavingsInvestment, SavingsInvestmentNew, SavingsKind};
pub use store::{CsvWorkbook, MemoryStore, RowStore, StoreError};
pub use transactions::{Transaction, TransactionKind, TransactionNew};

pub mod aggregate;
mod budgets;
mod debts;
mod error;
mod money;
mod row;
mod savings;
pub mod store;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug, Clone)]
pub struct Engine {
    store: Arc<dyn RowStore>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Run a blocking store call on the blocking pool.
    async fn with_store<T, F>(&self, call: F) -> ResultEngine<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn RowStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || call(store.as_ref()))
            .await
            .map_err(|err| EngineError::Task(err.to_string()))?;
        Ok(result?)
    }

    async fn records<R, F>(&self, table: Table, from_row: F) -> ResultEngine<Vec<R>>
    where
        R: Send + 'static,
        F: Fn(&Row) -> R + Send + 'static,
    {
        self.with_store(move |store| {
            let rows = store.fetch_rows(table)?;
            Ok(rows.iter().map(from_row).collect())
        })
        .await
    }

    async fn append(&self, table: Table, row: Row) -> ResultEngine<()> {
        self.with_store(move |store| store.append_row(table, row))
            .await?;
        tracing::debug!("appended row to {table}");
        Ok(())
    }

    /// Every ledger line.
    pub async fn transactions(&self) -> ResultEngine<Vec<Transaction>> {
        self.records(Table::Transactions, Transaction::from_row).await
    }

    /// Append a ledger line and return it as stored.
    pub async fn new_transaction(&self, new: TransactionNew) -> ResultEngine<Transaction> {
        let transaction = Transaction::from(new);
        self.append(Table::Transactions, transaction.to_row()).await?;
        Ok(transaction)
    }

    pub async fn budgets(&self) -> ResultEngine<Vec<BudgetLine>> {
        self.records(Table::Budget, BudgetLine::from_row).await
    }

    /// Append a budget line with nothing used yet.
    pub async fn new_budget(&self, new: BudgetNew) -> ResultEngine<BudgetLine> {
        let line = BudgetLine::from(new);
        self.append(Table::Budget, line.to_row()).await?;
        Ok(line)
    }

    pub async fn debts_credits(&self) -> ResultEngine<Vec<DebtCredit>> {
        self.records(Table::DebtCredit, DebtCredit::from_row).await
    }

    /// Append an unpaid debt or credit.
    pub async fn new_debt_credit(&self, new: DebtCreditNew) -> ResultEngine<DebtCredit> {
        let record = DebtCredit::from(new);
        self.append(Table::DebtCredit, record.to_row()).await?;
        Ok(record)
    }

    pub async fn savings_investments(&self) -> ResultEngine<Vec<SavingsInvestment>> {
        self.records(Table::SavingsInvestment, SavingsInvestment::from_row)
            .await
    }

    pub async fn new_savings_investment(
        &self,
        new: SavingsInvestmentNew,
    ) -> ResultEngine<SavingsInvestment> {
        let record = SavingsInvestment::from(new);
        self.append(Table::SavingsInvestment, record.to_row())
            .await?;
        Ok(record)
    }

    /// Dashboard totals over a fresh snapshot of the store.
    pub async fn dashboard(&self) -> ResultEngine<DashboardSummary> {
        let (transactions, debts, savings) = tokio::try_join!(
            self.transactions(),
            self.debts_credits(),
            self.savings_investments()
        )?;
        Ok(dashboard_summary(&transactions, &debts, &savings))
    }

    /// Income/expense report for `year`-`month` over a fresh snapshot.
    pub async fn monthly_report(&self, year: i32, month: u32) -> ResultEngine<MonthlyReport> {
        let transactions = self.transactions().await?;
        Ok(monthly_report(&transactions, year, month))
    }
}

#[derive(Debug, Default)]
pub struct EngineBuilder {
    store: Option<Arc<dyn RowStore>>,
}

impl EngineBuilder {
    /// Pass the required row store
    pub fn store(mut self, store: impl RowStore + 'static) -> EngineBuilder {
        self.store = Some(Arc::new(store));
        self
    }

    /// Construct `Engine`, creating any missing table.
    ///
    /// Without a store the engine runs on a fresh [`MemoryStore`].
    pub async fn build(self) -> ResultEngine<Engine> {
        let engine = Engine {
            store: self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
        };

        for table in Table::ALL {
            let created = engine
                .with_store(move |store| store.ensure_table(table))
                .await?;
            if created {
                tracing::info!("created table {table}");
            }
        }

        Ok(engine)
    }
}
