// ==========================================
// 销售明细规范化 - 命令行入口
// ==========================================
// 用法: sales-normalizer [INPUT] [OUTPUT_DIR] [--report PATH] ...（--help 查看全部参数）
// 退出码: 0 成功 / 1 失败（输入缺失时不写出任何文件）/ 2 参数错误
// ==========================================

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use sales_normalizer::config::{requested_locale, CliArgs};
use sales_normalizer::i18n::{set_locale, t_with_args};
use sales_normalizer::{logging, NormalizationPipeline, PipelineConfig, PipelineError, PipelineReport};
use std::process::ExitCode;

fn run(config: PipelineConfig) -> anyhow::Result<PipelineReport> {
    let input = config.input_path.display().to_string();
    NormalizationPipeline::from_config(config)
        .run()
        .with_context(|| format!("规范化处理失败: {}", input))
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn invalid_args(message: &str) -> ExitCode {
    eprintln!("{}", t_with_args("cli.invalid_args", &[("error", message)]));
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    // 先切换语言，参数错误提示也按 --lang 输出
    set_locale(&requested_locale(raw_args.iter().cloned()));

    let args = match CliArgs::try_parse_from(&raw_args) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => return invalid_args(err.to_string().trim_end()),
    };
    let config = match args.into_config() {
        Ok(config) => config,
        Err(err) => return invalid_args(&err.to_string()),
    };

    if config.json_logs {
        logging::init_json();
    } else {
        logging::init();
    }
    set_locale(&config.locale);

    tracing::info!("{} v{}", sales_normalizer::APP_NAME, sales_normalizer::VERSION);

    let input = config.input_path.display().to_string();
    match run(config) {
        Ok(report) => {
            let customers = file_name(&report.artifacts.customers);
            let products = file_name(&report.artifacts.products);
            let sales = file_name(&report.artifacts.sales);
            println!(
                "{}",
                t_with_args(
                    "pipeline.completed",
                    &[
                        ("customers", customers.as_str()),
                        ("products", products.as_str()),
                        ("sales", sales.as_str()),
                    ],
                )
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            let source_missing = err
                .downcast_ref::<PipelineError>()
                .map(PipelineError::is_source_not_found)
                .unwrap_or(false);

            if source_missing {
                eprintln!("{}", t_with_args("pipeline.source_not_found", &[("path", input.as_str())]));
            } else {
                let message = format!("{:#}", err);
                eprintln!("{}", t_with_args("pipeline.failed", &[("error", message.as_str())]));
            }
            ExitCode::FAILURE
        }
    }
}
