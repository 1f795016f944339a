use std::num::NonZeroU32;

use crate::error::Result;

/// A loaded model, ready to translate.
pub trait Translator {
    /// Translates `text`, returning the capability's output unchanged.
    ///
    /// Failures are reported as [`crate::Error::Translation`].
    fn translate(&self, text: &str) -> Result<String>;
}

/// Something that can locate and load a translation model.
///
/// `max_length` bounds the tokenized input; it is passed through to the
/// model, which does any truncation itself.
pub trait TranslatorBackend {
    type Handle: Translator;

    /// Loads `model_id`. Unresolvable identifiers are reported as
    /// [`crate::Error::ModelNotFound`].
    fn load(&self, model_id: &str, max_length: NonZeroU32) -> Result<Self::Handle>;
}
