use crate::core::generator::generate_sample_data;
use crate::core::input::Prompter;
use crate::core::menu::Menu;
use crate::core::persistence::ContainerRepository;
use crate::domain::model::StoreContainer;
use crate::domain::ports::Storage;
use std::io::{BufRead, Write};

pub const AUTO_MODE_TOKEN: &str = "-auto";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Batch,
}

impl RunMode {
    pub fn from_token(line: &str) -> Self {
        if line.trim() == AUTO_MODE_TOKEN {
            Self::Batch
        } else {
            Self::Interactive
        }
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub mode: RunMode,
    pub container: StoreContainer,
    pub saved: bool,
}

/// Load, run one session in the selected mode, save.
pub struct Controller<S: Storage> {
    repository: ContainerRepository<S>,
}

impl<S: Storage> Controller<S> {
    pub fn new(repository: ContainerRepository<S>) -> Self {
        Self { repository }
    }

    /// Nothing here is fatal: load and session failures are logged and the
    /// container is always written back.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> RunOutcome {
        let mut prompter = Prompter::new(input, output);

        let mode = match prompter.read_line() {
            Ok(Some(line)) => RunMode::from_token(&line),
            Ok(None) => RunMode::Interactive,
            Err(e) => {
                tracing::warn!("Could not read run mode: {}", e);
                RunMode::Interactive
            }
        };
        tracing::info!("Starting storekeeper in {:?} mode", mode);

        let mut container = self.repository.load();

        match mode {
            RunMode::Batch => generate_sample_data(&mut container),
            RunMode::Interactive => {
                let mut menu = Menu::new(prompter);
                if let Err(e) = menu.run(&mut container) {
                    tracing::error!("Interactive session ended early: {}", e);
                }
            }
        }

        let saved = match self.repository.save(&container) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    "Error saving data to file {}: {}",
                    self.repository.data_file(),
                    e
                );
                false
            }
        };

        RunOutcome {
            mode,
            container,
            saved,
        }
    }
}
