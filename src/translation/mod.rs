mod backend;
mod hub;
mod language;
mod request;

pub use backend::{Translator, TranslatorBackend};
pub use hub::{
    DEFAULT_API_KEY_ENV, DEFAULT_HUB_ENDPOINT, DEFAULT_INFERENCE_ENDPOINT, HubBackend, HubConfig,
    HubTranslator,
};
pub use language::{SUPPORTED_LANGUAGES, language_name, print_languages, validate_language};
pub use request::{TranslationRequest, TranslationResult, model_id_for_pair};
