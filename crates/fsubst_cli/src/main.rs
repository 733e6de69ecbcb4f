use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use fsubst_diagnostics::{Diagnostic, Emitter};
use fsubst_driver::{
    check_definitions, expand_all, load_table, simplify_checked, simplify_unchecked, DriverError,
};
use fsubst_syntax::FunctionTable;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fsubst")]
#[command(about = "fsubst - 函数引用展开工具", version)]
struct Cli {
    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    /// 日志详细程度 (-v: debug, -vv: trace)；设置 RUST_LOG 时以其为准
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 展开表达式中的所有函数引用
    Simplify {
        /// 定义文件 (.json 或 `name = expression` 行格式)
        #[arg(short, long)]
        defs: PathBuf,

        /// 要展开的表达式
        #[arg(required_unless_present = "all")]
        expression: Option<String>,

        /// 展开定义文件中的每一个函数
        #[arg(long, conflicts_with = "expression")]
        all: bool,

        /// 跳过校验，直接展开
        #[arg(long)]
        assume_valid: bool,
    },

    /// 校验定义文件（以及可选的表达式）
    Check {
        /// 定义文件
        #[arg(short, long)]
        defs: PathBuf,

        /// 要校验的表达式
        expression: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let emitter = if cli.no_color {
        Emitter::without_colors()
    } else {
        Emitter::new()
    };

    match cli.command {
        Commands::Simplify {
            defs,
            expression,
            all,
            assume_valid,
        } => cmd_simplify(&emitter, &defs, expression.as_deref(), all, assume_valid)?,
        Commands::Check { defs, expression } => {
            cmd_check(&emitter, &defs, expression.as_deref())?
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, no_color: bool) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .init();
}

/// 读取定义文件；失败时输出诊断并退出
fn load(emitter: &Emitter, defs: &Path) -> FunctionTable {
    let path = defs.display().to_string();
    match load_table(defs) {
        Ok(table) => {
            if table.is_empty() {
                emitter.emit(&Diagnostic::warning("no function definitions loaded").with_file(&path));
            }
            table
        }
        Err(e) => fail(emitter, &e, &path, None, None),
    }
}

/// 输出诊断并以状态码 1 退出
fn fail(
    emitter: &Emitter,
    error: &DriverError,
    path: &str,
    expression: Option<&str>,
    table: Option<&FunctionTable>,
) -> ! {
    let count = error.emit(emitter, Some(path), expression, table);
    debug!(errors = count, "exiting with failure");
    std::process::exit(1);
}

/// 展开命令
fn cmd_simplify(
    emitter: &Emitter,
    defs: &Path,
    expression: Option<&str>,
    all: bool,
    assume_valid: bool,
) -> Result<()> {
    let path = defs.display().to_string();
    debug!(command = "simplify", defs = %path, all, assume_valid, "dispatch");
    let table = load(emitter, defs);

    if all {
        let expanded = match expand_all(&table) {
            Ok(expanded) => expanded,
            Err(e) => fail(emitter, &e, &path, None, Some(&table)),
        };
        info!(definitions = expanded.len(), "expanded all definitions");
        for (name, expansion) in expanded {
            println!("{} = {}", name, expansion);
        }
        return Ok(());
    }

    let Some(expression) = expression else {
        anyhow::bail!("缺少要展开的表达式");
    };
    let result = if assume_valid {
        simplify_unchecked(expression, &table)
    } else {
        simplify_checked(expression, &table)
    };
    match result {
        Ok(expanded) => {
            info!(expression, "expanded");
            println!("{}", expanded)
        }
        Err(e) => fail(emitter, &e, &path, Some(expression), Some(&table)),
    }

    Ok(())
}

/// 检查命令
fn cmd_check(emitter: &Emitter, defs: &Path, expression: Option<&str>) -> Result<()> {
    let path = defs.display().to_string();
    debug!(command = "check", defs = %path, expression, "dispatch");
    eprintln!("🔍 检查 {} ...", path);

    let table = load(emitter, defs);
    match check_definitions(&table, expression) {
        Ok(()) => {
            eprintln!("✅ 无错误 ({} 个定义)", table.len());
            Ok(())
        }
        Err(e) => {
            if let DriverError::Check(errors) = &e {
                eprintln!("❌ 发现 {} 个错误:", errors.len());
            }
            fail(emitter, &e, &path, expression, Some(&table))
        }
    }
}
