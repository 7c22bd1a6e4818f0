use alfred_workflows::application::transform;
use alfred_workflows::infrastructure::logging;
use alfred_workflows::interfaces::alfred::Workflow;
use clap::Parser;

#[derive(Parser)]
#[command(name = "code")]
#[command(about = "String and encoding transforms for Alfred.")]
#[command(version)]
struct Cli {
    /// Text to transform
    #[arg(num_args = 0..)]
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let mut workflow = Workflow::new(&cli.query);
    let args = workflow.args.clone();

    workflow.add_item("Length", &transform::length(&args));
    workflow.add_item("upper", &args.to_uppercase());
    workflow.add_item("lower", &args.to_lowercase());
    workflow.add_item("reverse", &transform::reverse(&args));

    if let Some((number, lucky)) = transform::lucky_number(&args) {
        let prefix = if lucky { "✅" } else { "❌" };
        workflow.add_item(&format!("{}LUCKY NUMBER", prefix), &number);
    }

    workflow.add_item("MD5", &transform::md5_hex(&args));
    workflow.add_item("SHA256", &transform::sha256_hex(&args));
    workflow.add_item("EncodeBase64", &transform::encode_base64(&args));
    workflow.add_item("DecodeBase64", &transform::decode_base64(&args));
    workflow.add_item("EncodeStandardURL", &transform::encode_url(&args));
    workflow.add_item("EncodeAllURL", &transform::encode_all_url(&args));
    workflow.add_item("DecodeURL", &transform::decode_url(&args));
    workflow.add_item("ToHEX", &transform::to_hex(&args));
    workflow.add_item("FromHEX", &transform::from_hex(&args));
    workflow.add_item("EncodeHTMLEntities", &transform::encode_html_entities(&args));
    workflow.add_item("DecodeHTMLEntities", &transform::decode_html_entities(&args));

    let utf16 = transform::unicode_escape_utf16(&args);
    let utf32 = transform::unicode_escape_utf32(&args);
    workflow.add_item("UnicodeUTF16Escape 转义", &utf16);
    // 两种写法只在包含 BMP 之外的字符时有区别
    if utf32 != utf16 {
        workflow.add_item("UnicodeUTF32Escape 转义", &utf32);
    }
    workflow.add_item(
        "UnicodeUnEscape 兼容UTF16/UTF32 反转义",
        &transform::unicode_unescape(&args),
    );

    workflow.response().print()?;
    Ok(())
}
