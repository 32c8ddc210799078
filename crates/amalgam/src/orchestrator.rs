use std::path::Path;

use log::info;

use crate::{
    config::Config,
    emitter::Emitter,
    error::Result,
    resolver::IncludeResolver,
    types::Amalgamation,
};

/// Runs the resolve-then-emit pipeline for one root file
#[derive(Debug, Clone, Default)]
pub struct Amalgamator {
    resolver: IncludeResolver,
    emitter: Emitter,
}

impl Amalgamator {
    pub fn new(config: Config) -> Self {
        Self {
            emitter: Emitter::new(config.guard),
            resolver: IncludeResolver::new(config),
        }
    }

    /// Flatten `root` without writing anything
    pub fn resolve(&self, root: &Path) -> Result<Amalgamation> {
        self.resolver.resolve(root)
    }

    /// Flatten `root` and write the result to `output`
    pub fn amalgamate(&self, root: &Path, output: &Path) -> Result<Amalgamation> {
        let amalgamation = self.resolve(root)?;
        self.emitter.emit(output, &amalgamation)?;

        info!(
            "Done, wrote {} file(s) and {} external include(s) to {}",
            amalgamation.sources.len(),
            amalgamation.externals.len(),
            output.display()
        );
        Ok(amalgamation)
    }
}
