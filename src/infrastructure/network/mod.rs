pub mod deeplx;
pub mod http;
pub mod youdao;

// Re-export for convenience
pub use deeplx::DeeplxTranslator;
pub use youdao::YoudaoTranslator;
