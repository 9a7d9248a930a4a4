//! Recipe persistence model.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
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

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_formulas::Relation::Ingredients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_formulas::Relation::Recipes.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
