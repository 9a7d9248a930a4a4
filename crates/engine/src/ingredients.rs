//! Ingredient persistence model.
//!
//! An ingredient prices `amount` of product (expressed in `unit`) at
//! `cost_per_amount`. Name and article number are unique across the table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub article_number: i32,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub cost_per_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub amount: Decimal,
    pub unit: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_formulas::Entity")]
    RecipeFormulas,
}

impl Related<super::recipe_formulas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeFormulas.def()
    }
}

impl Related<super::recipes::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_formulas::Relation::Recipes.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_formulas::Relation::Ingredients.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
