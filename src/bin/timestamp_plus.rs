use alfred_workflows::application::timestamp;
use alfred_workflows::infrastructure::logging;
use alfred_workflows::interfaces::alfred::Workflow;
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*$").expect("valid regex"));

#[derive(Parser)]
#[command(name = "timestamp-plus")]
#[command(about = "Unix timestamp / formatted time converter for Alfred.")]
#[command(version)]
struct Cli {
    /// Timestamp or time string to convert
    #[arg(num_args = 0..)]
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let mut workflow = Workflow::new(&cli.query);

    if workflow.args.is_empty() {
        let (ts, time_str) = timestamp::now();
        workflow.add_item("当前时间戳", &ts.to_string());
        workflow.add_item("当前时间", &time_str);
    } else {
        let input = workflow.args.clone();

        // 纯数字按时间戳处理
        if let Some(caps) = DIGITS_RE.captures(&input) {
            if let Ok(ts) = caps[1].parse::<i64>() {
                if let Some(time_str) = timestamp::timestamp_to_time(ts) {
                    workflow.add_item("转换后的时间", &time_str);
                }
            }
        }

        // 没有匹配到时间戳时尝试解析时间字符串
        if workflow.items.is_empty() {
            if let Some(tm) = timestamp::parse_time_string(&input) {
                workflow.add_item("格式化时间", &tm.format(timestamp::TIME_FORMAT).to_string());
                workflow.add_item("Unix时间戳", &tm.timestamp().to_string());
            }
        }
    }

    if workflow.items.is_empty() {
        workflow.add_item("错误", "无法解析输入");
    }

    workflow.response().print()?;
    Ok(())
}
