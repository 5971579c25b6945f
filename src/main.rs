use clap::Parser;
use meal_log::{cli, config, error, prompt, session, view};
use cli::{Cli, Commands};
use config::Config;
use error::{MealLogError, Result};
use session::{NoticeLevel, SaveStatus, Session};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 設定コマンド以外は設定ファイルが壊れていても既定値で続行
    let config = if matches!(cli.command, Commands::Config { .. }) {
        Config::load()?
    } else {
        let (config, error) = Config::load_or_default();
        if let Some(e) = error {
            eprintln!("⚠ 設定ファイルを読み込めません。既定値を使用します ({})", e);
        }
        config
    };
    let settings = config.resolve(cli.recipes.clone(), cli.log.clone());
    tracing::debug!(?settings, "settings resolved");

    match cli.command {
        Commands::Add { meal, image, no_image } => {
            println!("🌎 meal-log - 食事を追加\n");

            let mut session = Session::open(&settings);
            print_notices(&session);

            if session.recipes().is_empty() {
                println!("⚠ レシピが読み込まれていません。{} を用意してください", settings.recipes_path.display());
                return Ok(());
            }

            let interactive = meal.is_none();
            let title = match meal {
                Some(title) => title,
                None => match prompt::select_recipe(session.recipes())? {
                    Some(title) => title,
                    None => {
                        println!("キャンセルしました");
                        return Ok(());
                    }
                },
            };

            let image = match image {
                Some(path) => Some(path),
                None if interactive && !no_image => prompt::prompt_image_path()?,
                None => None,
            };

            let outcome = session.add_meal(&title, image.as_deref())?;

            match &outcome.save {
                SaveStatus::Saved(path) => println!("📂 ログを更新しました: {}", path.display()),
                SaveStatus::Failed(e) => eprintln!("❌ Excelへの保存に失敗しました: {}", e),
            }
            println!("✅ {} を記録しました ({})", outcome.record.meal, outcome.record.date);

            println!("\n💡 健康アドバイス");
            for tip in &outcome.tips {
                println!("- {}", tip);
            }
        }

        Commands::Log { last, json } => {
            let session = Session::open(&settings);
            print_notices(&session);

            let log = session.log();
            let records = match last {
                Some(n) => log.last(usize::try_from(n).unwrap_or(usize::MAX)),
                None => log.records(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(records)?);
            } else if log.is_empty() {
                println!("まだ食事が記録されていません");
            } else {
                println!("📖 食事ログ ({}件)\n", log.len());
                let first_index = log.len() - records.len() + 1;
                print!("{}", view::format_log_table(records, first_index));
            }
        }

        Commands::Recipes { show } => {
            let session = Session::open(&settings);
            print_notices(&session);

            let recipes = session.recipes();
            match show {
                Some(title) => {
                    let recipe = recipes
                        .find(&title)
                        .ok_or(MealLogError::RecipeNotFound(title))?;
                    print!("{}", view::format_recipe(recipe));
                }
                None => {
                    println!("📋 レシピ一覧 ({}件)", recipes.len());
                    for recipe in recipes.iter() {
                        println!("  - {} ({})", recipe.title, recipe.country);
                    }
                }
            }
        }

        Commands::Config { set_recipes, set_log, show } => {
            let mut config = config;

            if let Some(path) = set_recipes {
                config.set_recipes_path(path)?;
                println!("✔ レシピファイルを設定しました");
            }

            if let Some(path) = set_log {
                config.set_log_path(path)?;
                println!("✔ ログファイルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  レシピファイル: {}", config.recipes_path.display());
                println!("  ログファイル: {}", config.log_path.display());
                if settings.recipes_path != config.recipes_path || settings.log_path != config.log_path {
                    println!("  (実際に使用: {} / {})", settings.recipes_path.display(), settings.log_path.display());
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_notices(session: &Session) {
    for notice in session.notices() {
        match notice.level {
            NoticeLevel::Warning => eprintln!("⚠ {}", notice.message),
            NoticeLevel::Error => eprintln!("❌ {}", notice.message),
        }
    }
}
