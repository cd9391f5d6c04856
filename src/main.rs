use serde_json::Value;
use std::env;
use std::fs;
use supervision_log_docx::{
    export_log_to_docx, export_logs_to_docx, normalize_record, normalize_records,
    suggested_batch_file_name, suggested_file_name, ExportConf,
};
use tracing_subscriber::EnvFilter;

fn usage(program: &str) {
    println!(
        "Usage: {} <log.json> [output.docx] [--config <conf.json>]",
        program
    );
    println!("  log.json 为单个对象时导出单条日志，为数组时批量导出");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut positional = Vec::new();
    let mut config_path = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--config" {
            config_path = iter.next().cloned();
        } else {
            positional.push(arg.clone());
        }
    }

    let input_path = match positional.first() {
        Some(path) => path.clone(),
        None => {
            usage(&args[0]);
            return;
        }
    };

    let conf = match config_path {
        Some(path) => match fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| ExportConf::from_json_str(&text).map_err(|e| e.to_string()))
        {
            Ok(conf) => conf,
            Err(e) => {
                println!("读取配置失败: {}", e);
                return;
            }
        },
        None => ExportConf::default(),
    };

    let input: Value = match fs::read_to_string(&input_path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(value) => value,
        Err(e) => {
            println!("读取日志失败: {}", e);
            return;
        }
    };

    let result = match input {
        Value::Array(records) => {
            let output = positional.get(1).cloned().unwrap_or_else(|| {
                suggested_batch_file_name(&normalize_records(&records), None)
            });
            export_logs_to_docx(records, None, output, Some(conf)).await
        }
        record => {
            let output = positional
                .get(1)
                .cloned()
                .unwrap_or_else(|| suggested_file_name(&normalize_record(&record)));
            export_log_to_docx(record, output, Some(conf)).await
        }
    };

    if result.success {
        println!(
            "{}: {}",
            result.message,
            result.file_path.unwrap_or_default()
        );
    } else {
        println!("{}", result.message);
    }
}
