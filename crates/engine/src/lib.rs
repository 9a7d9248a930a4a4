pub use error::EngineError;
pub use ops::{Engine, EngineBuilder, FormulaPatch, IngredientPatch, RecipeDetail, RecipePatch};
pub use units::Unit;

pub mod ingredients;
pub mod recipe_formulas;
pub mod recipes;

mod error;
mod ops;
mod units;

type ResultEngine<T> = Result<T, EngineError>;
