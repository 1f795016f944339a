//! The translate pipeline: input, model, translation, output.

use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::config::{
    ConfigFile, ConfigManager, ResolveOptions, Settings, resolve_log_config, resolve_settings,
};
use crate::error::{Error, Result};
use crate::input::{InputReader, InputSource};
use crate::logging;
use crate::sink::{self, Labels, OutputSink};
use crate::status;
use crate::translation::{
    HubBackend, TranslationRequest, TranslationResult, Translator, TranslatorBackend,
    language_name,
};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    /// Inline text (`--text`).
    pub text: Option<String>,
    /// Input file (`--input`).
    pub input: Option<PathBuf>,
    /// Output file (`--output`).
    pub output: Option<PathBuf>,
    pub resolve: ResolveOptions,
}

/// Progress of a single run. `Failed` is terminal and reachable from every
/// stage before `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    InputResolved,
    ModelLoaded,
    Translated,
    Emitted,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "configuration",
            Self::InputResolved => "input resolution",
            Self::ModelLoaded => "model loading",
            Self::Translated => "translation",
            Self::Emitted => "output",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

impl Stage {
    /// The stage that is entered when the step after `self` succeeds.
    const fn next(self) -> Self {
        match self {
            Self::Idle => Self::InputResolved,
            Self::InputResolved => Self::ModelLoaded,
            Self::ModelLoaded => Self::Translated,
            Self::Translated => Self::Emitted,
            Self::Emitted | Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }
}

fn log_failure(attempting: Stage, err: &Error) {
    error!(kind = err.kind(), stage = %attempting, "{err}");
}

/// Drives one invocation through its stages.
///
/// Every step runs once, in order; the first failure ends the run.
pub struct RunController<'a, B> {
    backend: &'a B,
    settings: &'a Settings,
    interactive: bool,
    stage: Stage,
}

impl<'a, B: TranslatorBackend> RunController<'a, B> {
    pub const fn new(backend: &'a B, settings: &'a Settings) -> Self {
        Self {
            backend,
            settings,
            interactive: false,
            stage: Stage::Idle,
        }
    }

    /// Marks stdin as a terminal, so reading it shows a prompt first.
    #[must_use]
    pub const fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Runs the pipeline. On failure the error is logged together with the
    /// step that failed and the controller ends in [`Stage::Failed`].
    pub fn run(
        &mut self,
        text: Option<String>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        stdin: impl Read,
        stdout: &mut impl Write,
    ) -> Result<()> {
        let result = self.pipeline(text, input, output, stdin, stdout);
        match &result {
            Ok(()) => self.advance(),
            Err(err) => {
                log_failure(self.stage.next(), err);
                self.stage = Stage::Failed;
            }
        }
        result
    }

    fn advance(&mut self) {
        let next = self.stage.next();
        debug!(from = ?self.stage, to = ?next, "Stage complete");
        self.stage = next;
    }

    fn pipeline(
        &mut self,
        text: Option<String>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        stdin: impl Read,
        stdout: &mut impl Write,
    ) -> Result<()> {
        let settings = self.settings;

        let source = InputSource::from_options(text, input)?;
        let sink = OutputSink::resolve(output, &source);

        let source_label =
            language_name(&settings.source_lang).unwrap_or(settings.source_lang.as_str());
        let target_label =
            language_name(&settings.target_lang).unwrap_or(settings.target_lang.as_str());

        if source.is_stdin() && self.interactive {
            status!(
                "{}",
                Style::hint(format!(
                    "Enter {source_label} text (press Ctrl+D to finish):"
                ))
            );
        }

        let source_text = InputReader::read(&source, stdin)?;
        let request = TranslationRequest::new(
            source_text,
            settings.source_lang.clone(),
            settings.target_lang.clone(),
            settings.model_override.clone(),
            settings.max_length,
        )?;
        self.advance();

        let model_id = request.model_id();
        debug!(
            %model_id,
            overridden = request.model_override().is_some(),
            "Model selected"
        );
        let spinner = Spinner::new(&format!("Loading model {model_id}..."));
        let translator = self.backend.load(&model_id, request.max_length())?;
        spinner.suspend(|| info!(%model_id, "Model loaded"));
        self.advance();

        spinner.set_message("Translating...");
        let translated_text = translator.translate(request.source_text())?;
        spinner.stop();
        info!("Translation successful");
        self.advance();

        let result = TranslationResult {
            original_text: request.source_text().to_string(),
            translated_text,
        };
        let labels = Labels {
            source: source_label,
            target: target_label,
        };
        sink::emit(&result, &sink, labels, stdout)?;
        self.advance();
        Ok(())
    }
}

/// Runs a translation against the Hugging Face Hub with the process's
/// stdin and stdout.
pub fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = ConfigManager::new().and_then(|manager| manager.load());

    let log_config = match &config_file {
        Ok(file) => resolve_log_config(&options.resolve, file),
        Err(_) => resolve_log_config(&options.resolve, &ConfigFile::default()),
    };
    logging::init(log_config);

    let settings = config_file
        .and_then(|file| resolve_settings(&options.resolve, &file))
        .inspect_err(|err| log_failure(Stage::Idle, err))?;
    debug!(
        source_lang = %settings.source_lang,
        target_lang = %settings.target_lang,
        max_length = settings.max_length.get(),
        "Resolved settings"
    );

    let backend = HubBackend::new(settings.hub.clone());
    let mut controller = RunController::new(&backend, &settings)
        .interactive(InputReader::stdin_is_interactive());

    controller.run(
        options.text,
        options.input,
        options.output,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )
}
