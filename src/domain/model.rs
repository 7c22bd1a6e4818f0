// 通用翻译结果，由各翻译服务归一化产生
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub title: String,
    pub subtitle: String,
    pub value: String,
    pub url: Option<String>, // 词典/预览链接
}
