//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for Dispensa:
//!
//! - `ingredients`: purchasable items with a cost per amount/unit
//! - `recipes`: named compositions of ingredients
//! - `recipe_formulas`: per-recipe ingredient quantities (the join table)
//!
//! Uniqueness and positivity rules from the data model are also declared
//! here so the storage boundary rejects what the engine rejects.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Ingredients {
    Table,
    Id,
    Name,
    ArticleNumber,
    CostPerAmount,
    Amount,
    Unit,
}

#[derive(Iden)]
enum Recipes {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum RecipeFormulas {
    Table,
    Id,
    RecipeId,
    IngredientId,
    AmountPerRecipe,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ingredients::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Ingredients::Name)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Ingredients::ArticleNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Ingredients::CostPerAmount)
                            .decimal_len(6, 2)
                            .not_null()
                            .check(Expr::col(Ingredients::CostPerAmount).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Ingredients::Amount)
                            .decimal_len(6, 2)
                            .not_null()
                            .check(Expr::col(Ingredients::Amount).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Ingredients::Unit)
                            .string_len(10)
                            .not_null()
                            .check(Expr::col(Ingredients::Unit).is_in([
                                "gram",
                                "kilogram",
                                "centiliter",
                                "liter",
                            ])),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-ingredients-name-unique")
                    .table(Ingredients::Table)
                    .col(Ingredients::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-ingredients-article_number-unique")
                    .table(Ingredients::Table)
                    .col(Ingredients::ArticleNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recipes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recipes::Name).string_len(80).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-recipes-name-unique")
                    .table(Recipes::Table)
                    .col(Recipes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecipeFormulas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecipeFormulas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RecipeFormulas::RecipeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecipeFormulas::IngredientId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecipeFormulas::AmountPerRecipe)
                            .decimal_len(6, 2)
                            .not_null()
                            .check(Expr::col(RecipeFormulas::AmountPerRecipe).gt(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_formulas-recipe_id")
                            .from(RecipeFormulas::Table, RecipeFormulas::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_formulas-ingredient_id")
                            .from(RecipeFormulas::Table, RecipeFormulas::IngredientId)
                            .to(Ingredients::Table, Ingredients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-recipe_formulas-recipe_id")
                    .table(RecipeFormulas::Table)
                    .col(RecipeFormulas::RecipeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-recipe_formulas-ingredient_id")
                    .table(RecipeFormulas::Table)
                    .col(RecipeFormulas::IngredientId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(RecipeFormulas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Recipes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ingredients::Table).to_owned())
            .await?;
        Ok(())
    }
}
