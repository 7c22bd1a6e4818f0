//! Pure string and encoding transforms for the `code` workflow.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

/// 字符数（按 Unicode 码点计）
pub fn length(input: &str) -> String {
    input.chars().count().to_string()
}

pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// 幸运数字：纯数字串反复求各位之和直到个位，3/6/9 为幸运。
/// 非数字输入返回 None。
pub fn lucky_number(input: &str) -> Option<(String, bool)> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    loop {
        let sum: u32 = digits.iter().sum();
        if sum < 10 {
            return Some((sum.to_string(), matches!(sum, 3 | 6 | 9)));
        }
        digits = sum.to_string().chars().filter_map(|c| c.to_digit(10)).collect();
    }
}

pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn encode_base64(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// 标准 base64 解码，失败返回空串
pub fn decode_base64(input: &str) -> String {
    STANDARD
        .decode(input)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

pub fn encode_url(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

pub fn decode_url(input: &str) -> String {
    urlencoding::decode(input)
        .map(|s| s.into_owned())
        .unwrap_or_default()
}

/// 每个码点编码为 %XX 形式
pub fn encode_all_url(input: &str) -> String {
    input.chars().map(|c| format!("%{:02X}", c as u32)).collect()
}

/// 每个码点编码为 \XNN 形式
pub fn to_hex(input: &str) -> String {
    input.chars().map(|c| format!("\\X{:02X}", c as u32)).collect()
}

static HEX_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\\X").expect("valid regex"));

/// 解析 \XNN 序列为字节串，任一段不是合法字节返回空串
pub fn from_hex(input: &str) -> String {
    let mut bytes = Vec::new();
    for part in HEX_SPLIT_RE.split(input) {
        if part.is_empty() {
            continue;
        }
        match u8::from_str_radix(part, 16) {
            Ok(byte) => bytes.push(byte),
            Err(_) => return String::new(),
        }
    }
    String::from_utf8(bytes).unwrap_or_default()
}

/// 转义五个标准 HTML 实体
pub fn encode_html_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[xX][0-9A-Fa-f]+|#[0-9]+|[A-Za-z]+);").expect("valid regex"));

/// 反转义命名实体（五个标准实体和 nbsp）及数字实体 &#NNN; / &#xHHHH;，
/// 无法识别的实体原样保留
pub fn decode_html_entities(input: &str) -> String {
    ENTITY_RE
        .replace_all(input, |caps: &regex::Captures| {
            let body = &caps[1];
            let replacement = if let Some(hexpart) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hexpart, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
            } else if let Some(decpart) = body.strip_prefix('#') {
                decpart
                    .parse::<u32>()
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
            } else {
                match body {
                    "amp" => Some("&".to_string()),
                    "lt" => Some("<".to_string()),
                    "gt" => Some(">".to_string()),
                    "quot" => Some("\"".to_string()),
                    "apos" => Some("'".to_string()),
                    "nbsp" => Some("\u{a0}".to_string()),
                    _ => None,
                }
            };
            replacement.unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

// 超出基本多文种平面（BMP）的码点有两种转义写法，比如 😀：
// 1. 😀 —— UTF-16 代理对
// 2. \U0001F600 / U+1F600 —— 码点直接表示

/// UTF-16 风格转义：BMP 内 \uXXXX，之外用代理对 \uHHHH\uLLLL
pub fn unicode_escape_utf16(input: &str) -> String {
    let mut out = String::new();
    for c in input.chars() {
        if (c as u32) <= 0xFFFF {
            out.push_str(&format!("\\u{:04X}", c as u32));
        } else {
            let mut buf = [0u16; 2];
            for unit in c.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04X}", unit));
            }
        }
    }
    out
}

/// UTF-32 风格转义：BMP 内 \uXXXX，之外 \UXXXXXXXX
pub fn unicode_escape_utf32(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            let cp = c as u32;
            if cp <= 0xFFFF {
                format!("\\u{:04X}", cp)
            } else {
                format!("\\U{:08X}", cp)
            }
        })
        .collect()
}

// \UXXXXXXXX、U+10XXXX 和 U+XXXXX 三种码点写法
// 参考: U+hex https://r12a.github.io/app-conversion/
static UTF32_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\U([0-9A-Fa-f]{8})|U\+10([A-Fa-f0-9]{4})|U\+([0-9A-Fa-f]{1,5})")
        .expect("valid regex")
});

/// 反转义，兼容 UTF-16 代理对与 UTF-32/U+ 码点写法的混合输入
pub fn unicode_unescape(input: &str) -> String {
    // 先处理码点直接表示（\U0001F600 / U+1F600）
    let pass1 = UTF32_RE.replace_all(input, |caps: &regex::Captures| {
        let m = &caps[0];
        u32::from_str_radix(&m[2..], 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| m.to_string())
    });

    decode_utf16_escapes(&pass1)
}

fn hex4(s: &str, at: usize) -> Option<u16> {
    s.get(at..at + 4).and_then(|h| u16::from_str_radix(h, 16).ok())
}

// 解码 \uXXXX 序列，含 UTF-16 代理对；无法解码的部分原样保留
fn decode_utf16_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while !rest.is_empty() {
        if rest.starts_with("\\u") {
            if let Some(unit) = hex4(rest, 2) {
                if (0xD800..=0xDBFF).contains(&unit) && rest.get(6..8) == Some("\\u") {
                    if let Some(low) = hex4(rest, 8) {
                        if (0xDC00..=0xDFFF).contains(&low) {
                            let cp = 0x10000
                                + (((unit as u32) - 0xD800) << 10)
                                + ((low as u32) - 0xDC00);
                            if let Some(c) = char::from_u32(cp) {
                                out.push(c);
                                rest = &rest[12..];
                                continue;
                            }
                        }
                    }
                }
                // 孤立代理项走原样保留分支
                if let Some(c) = char::from_u32(unit as u32) {
                    out.push(c);
                    rest = &rest[6..];
                    continue;
                }
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}
