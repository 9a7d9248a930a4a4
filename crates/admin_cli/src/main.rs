use std::error::Error;

use clap::{Args, Parser, Subcommand};
use engine::{Engine, Unit};
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};

#[derive(Parser, Debug)]
#[command(name = "dispensa_admin")]
#[command(about = "Admin utilities for Dispensa (seed and inspect the catalog)")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./dispensa.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

#[derive(Args, Debug)]
struct Ingredient {
    #[command(subcommand)]
    command: IngredientCommand,
}

#[derive(Subcommand, Debug)]
enum IngredientCommand {
    Create(IngredientCreateArgs),
    List,
}

#[derive(Args, Debug)]
struct IngredientCreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    article_number: i32,
    #[arg(long)]
    cost_per_amount: Decimal,
    #[arg(long)]
    amount: Decimal,
    #[arg(long)]
    unit: String,
}

#[derive(Args, Debug)]
struct Recipe {
    #[command(subcommand)]
    command: RecipeCommand,
}

#[derive(Subcommand, Debug)]
enum RecipeCommand {
    Create(RecipeCreateArgs),
    List,
    /// Print the costed formula lines and the total cost of a recipe.
    Cost(RecipeCostArgs),
}

#[derive(Args, Debug)]
struct RecipeCreateArgs {
    #[arg(long)]
    name: String,
}

#[derive(Args, Debug)]
struct RecipeCostArgs {
    #[arg(long)]
    id: i32,
}

async fn connect_db(
    database_url: &str,
) -> Result<DatabaseConnection, Box<dyn Error + Send + Sync>> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Ingredient(Ingredient {
            command: IngredientCommand::Create(args),
        }) => {
            let unit = match Unit::try_from(args.unit.as_str()) {
                Ok(unit) => unit,
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(2);
                }
            };

            let ingredient = engine
                .new_ingredient(
                    &args.name,
                    args.article_number,
                    args.cost_per_amount,
                    args.amount,
                    unit,
                )
                .await?;
            println!("created ingredient: {} (#{})", ingredient.name, ingredient.id);
        }
        Command::Ingredient(Ingredient {
            command: IngredientCommand::List,
        }) => {
            for ingredient in engine.list_ingredients().await? {
                println!(
                    "#{}\t{}\tarticle {}\t{} per {} {}",
                    ingredient.id,
                    ingredient.name,
                    ingredient.article_number,
                    ingredient.cost_per_amount,
                    ingredient.amount,
                    ingredient.unit,
                );
            }
        }
        Command::Recipe(Recipe {
            command: RecipeCommand::Create(args),
        }) => {
            let recipe = engine.new_recipe(&args.name).await?;
            println!("created recipe: {} (#{})", recipe.name, recipe.id);
        }
        Command::Recipe(Recipe {
            command: RecipeCommand::List,
        }) => {
            for recipe in engine.list_recipes().await? {
                println!("#{}\t{}", recipe.id, recipe.name);
            }
        }
        Command::Recipe(Recipe {
            command: RecipeCommand::Cost(args),
        }) => {
            for detail in engine.list_recipe_details(args.id).await? {
                println!(
                    "{}\t{} x {:.4}/{}\t= {:.2}",
                    detail.ingredient,
                    detail.amount_per_recipe,
                    detail.unit_cost,
                    detail.unit,
                    detail.cost,
                );
            }
            println!("total: {}", engine.total_cost(args.id).await?);
        }
    }

    Ok(())
}
