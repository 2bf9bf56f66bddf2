use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    db::schema_statements,
    response::{ApiResponse, Meta},
    store::Store,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatementOutcome {
    pub statement: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SetupReport {
    pub statements: Vec<StatementOutcome>,
}

impl SetupReport {
    pub fn is_complete(&self) -> bool {
        self.statements.iter().all(|s| s.error.is_none())
    }
}

/// Apply the schema one statement at a time. A failing statement is logged
/// and recorded; the remaining statements still run.
pub async fn setup_database(store: &dyn Store) -> SetupReport {
    let mut statements = Vec::new();
    for statement in schema_statements() {
        let summary = statement.lines().next().unwrap_or_default().trim().to_string();
        let error = match store.exec_statement(statement).await {
            Ok(_) => None,
            Err(err) => {
                tracing::error!(statement = %summary, error = %err, "schema statement failed");
                Some(err.to_string())
            }
        };
        statements.push(StatementOutcome {
            statement: summary,
            error,
        });
    }
    tracing::info!(statements = statements.len(), "database schema applied");
    SetupReport { statements }
}

pub async fn first_run(store: &dyn Store) -> ApiResponse<SetupReport> {
    let report = setup_database(store).await;
    let message = if report.is_complete() {
        "Database created successfully"
    } else {
        "Database setup failed"
    };
    ApiResponse::success(message, report, Some(Meta::empty()))
}
