use crate::domain::model::TranslationResult;
use serde::{Deserialize, Serialize};

/// Alfred Workflow 中的一个结果项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    /// 选中后回传给 Alfred 的值
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub arg: String,
    /// 每行显示的 icon
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    /// 快速预览的 URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub quicklookurl: String,
}

impl From<TranslationResult> for Item {
    fn from(result: TranslationResult) -> Self {
        Item {
            title: result.title,
            subtitle: result.subtitle,
            arg: result.value,
            icon: String::new(),
            quicklookurl: result.url.unwrap_or_default(),
        }
    }
}

/// Alfred Workflow 的响应
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Response {
    pub items: Vec<Item>,
}

impl Response {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Print the response as one JSON line on stdout (the launcher protocol).
    pub fn print(&self) -> Result<(), serde_json::Error> {
        println!("{}", self.to_json()?);
        Ok(())
    }
}

/// Join positional arguments into the query text: single spaces between
/// arguments, surrounding whitespace trimmed.
pub fn join_args(args: &[String]) -> String {
    args.join(" ").trim().to_string()
}

/// Item builder used by the pure one-shot workflows (code / timestamp).
#[derive(Debug, Default)]
pub struct Workflow {
    pub args: String,
    pub items: Vec<Item>,
}

impl Workflow {
    pub fn new(args: &[String]) -> Self {
        Self {
            args: join_args(args),
            items: Vec::new(),
        }
    }

    /// Add a derived value item. Empty values and values identical to the
    /// input are skipped; lucky number rows are always shown.
    pub fn add_item(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        if value == self.args && !name.contains("LUCKY NUMBER") {
            return;
        }
        self.items.push(Item {
            title: value.to_string(),
            subtitle: name.to_string(),
            arg: value.to_string(),
            ..Default::default()
        });
    }

    pub fn response(self) -> Response {
        Response { items: self.items }
    }
}
