//! CLI context - bundles settings and flags.

use passforge::pass::{self, GenerationConfig, ValidationError};
use passforge::rand::{EntropySource, Source};
use passforge::settings::Settings;
use tracing::debug;

use super::output::{Sink, resolve_path};
use super::{CliFlags, ParseError, help, prompts, quiet};
use crate::terminal;

/// Why the run stopped before or instead of generating.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    /// An error was reported to the user.
    Failed,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments and layer them over saved settings.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        };

        Ok(Self { settings, flags })
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Exit> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        let config = self.resolve_config().map_err(report)?;

        let warnings = config.validate().map_err(report)?;
        prompts::generation_warnings(&warnings);

        debug!(
            length = config.length,
            classes = %config.classes.letters(),
            unique = config.unique,
            source = %self.settings.source,
            "resolved generation config"
        );

        self.handle_save();
        if self.flags.entropy && !quiet::enabled() {
            for line in terminal::strength_report(&config, self.settings.source) {
                eprintln!("{line}");
            }
        }

        self.generate_output(&config)
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            help::print();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings and build the generation config.
    fn resolve_config(&mut self) -> Result<GenerationConfig, ValidationError> {
        if let Some(ref raw) = self.flags.length {
            self.settings.pass_length = pass::parse_length(raw)?;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if let Some(classes) = self.flags.classes {
            self.settings.classes = classes;
        }
        for class in self.flags.without.iter() {
            self.settings.classes.remove(class);
        }
        if self.flags.unique {
            self.settings.unique = true;
        }
        if self.flags.hw {
            self.settings.source = EntropySource::Hardware;
        }

        Ok(self.settings.config())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&Settings::path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn open_sink(&self) -> Result<Sink, Exit> {
        if self.flags.clipboard {
            return Sink::clipboard().ok_or(Exit::Done);
        }
        if let Some(ref path) = self.flags.output {
            return Sink::file(&resolve_path(path)).map_err(|e| {
                prompts::error(&format!("Failed to open output file: {}", e));
                Exit::Failed
            });
        }
        Ok(Sink::terminal())
    }

    /// Generate passwords and hand them to the selected sink.
    pub fn generate_output(&self, config: &GenerationConfig) -> Result<(), Exit> {
        let count = self.settings.number_of_passwords.max(1);
        let mut rng = Source::new(self.settings.source);
        let mut sink = self.open_sink()?;

        for _ in 0..count {
            let generation = pass::generate(config, &mut rng).map_err(report)?;
            if let Err(e) = sink.push(&generation.password) {
                // Closed pipe or full disk; nothing more can be written
                debug!(error = %e, "output stopped");
                return Err(Exit::Failed);
            }
        }

        sink.finish().map_err(|e| {
            prompts::error(&format!("Failed to write output: {}", e));
            Exit::Failed
        })
    }
}

fn report(err: ValidationError) -> Exit {
    prompts::error(&format!("Error: {}", err));
    Exit::Failed
}
