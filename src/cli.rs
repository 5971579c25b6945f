use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meal-log")]
#[command(about = "レシピから食事を記録し、栄養ログをExcelに保存するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// レシピJSONファイル（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub recipes: Option<PathBuf>,

    /// 食事ログExcelファイル（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 食事を追加してログに保存
    Add {
        /// 料理名（省略時は一覧から選択）
        #[arg(short, long)]
        meal: Option<String>,

        /// 食事画像 (jpg/jpeg/png)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// 画像の入力を求めない
        #[arg(long)]
        no_image: bool,
    },

    /// 食事ログを表示
    Log {
        /// 最新N件のみ表示（1以上）
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        last: Option<u64>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// レシピ一覧/詳細を表示
    Recipes {
        /// 指定したレシピの詳細を表示
        #[arg(short, long)]
        show: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// レシピファイルのパスを設定
        #[arg(long)]
        set_recipes: Option<PathBuf>,

        /// ログファイルのパスを設定
        #[arg(long)]
        set_log: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from(["meal-log", "add", "--meal", "Pho", "--image", "pho.jpg"]);
        match cli.command {
            Commands::Add { meal, image, no_image } => {
                assert_eq!(meal.as_deref(), Some("Pho"));
                assert_eq!(image, Some(PathBuf::from("pho.jpg")));
                assert!(!no_image);
            }
            _ => panic!("add として解析されていない"),
        }
    }

    #[test]
    fn test_global_paths_after_subcommand() {
        let cli = Cli::parse_from(["meal-log", "log", "-n", "3", "--log", "other.xlsx", "-v"]);
        assert_eq!(cli.log, Some(PathBuf::from("other.xlsx")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Log { last: Some(3), json: false }));
    }

    #[test]
    fn test_last_zero_rejected() {
        let result = Cli::try_parse_from(["meal-log", "log", "--last", "0"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["meal-log", "log", "--last", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Log { last: Some(1), .. }));
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
