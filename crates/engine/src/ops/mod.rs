use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod costing;
mod formulas;
mod ingredients;
mod recipes;

pub use costing::RecipeDetail;
pub use formulas::FormulaPatch;
pub use ingredients::IngredientPatch;
pub use recipes::RecipePatch;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} must not be empty"
        )));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(EngineError::InvalidName(format!(
            "{label} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

const MAX_NAME_LEN: usize = 80;

/// Validate a decimal(6,2) money/quantity field: strictly positive, at most
/// two fraction digits and at most four integral digits. The sqlite column
/// types are advisory, so out-of-contract values must be rejected here.
fn require_amount(value: Decimal, field: &str) -> ResultEngine<Decimal> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount(format!("{field} must be > 0")));
    }
    if value.scale() > 2 {
        return Err(EngineError::InvalidAmount(format!(
            "{field} must have at most 2 decimal places"
        )));
    }
    if value >= Decimal::from(10_000) {
        return Err(EngineError::InvalidAmount(format!(
            "{field} must be below 10000"
        )));
    }
    Ok(value)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
