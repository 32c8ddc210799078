use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, trace};

use crate::{
    config::Config,
    directive::{is_guard_pragma, parse_include},
    error::{AmalgamError, RecursionCause, Result},
    types::{Amalgamation, FxIndexSet, IncludeDirective},
};

/// Decorator line framing each boundary marker
pub const BOUNDARY_RULE: &str = "/////////////////////////////////////////////";

/// Walks a local include tree and flattens it into body lines and hoisted includes
#[derive(Debug, Clone, Default)]
pub struct IncludeResolver {
    config: Config,
}

impl IncludeResolver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Expand `root` and everything it includes locally
    ///
    /// Local includes are resolved against the directory of the file that
    /// names them, never against the process working directory.
    pub fn resolve(&self, root: &Path) -> Result<Amalgamation> {
        let label = root.file_name().map_or_else(
            || root.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        let mut walk = Walk::new(&self.config);
        walk.visit(root, &label)?;

        debug!(
            "Resolved {} into {} file(s), {} external include(s)",
            root.display(),
            walk.output.sources.len(),
            walk.output.externals.len()
        );
        Ok(walk.output)
    }
}

/// State of one depth-first traversal
struct Walk<'a> {
    config: &'a Config,
    output: Amalgamation,
    /// Canonical paths of the files currently being expanded, outermost first
    chain: Vec<PathBuf>,
    /// Canonical paths of files that carried `#pragma once`
    guarded: FxIndexSet<PathBuf>,
}

impl<'a> Walk<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            config,
            output: Amalgamation::default(),
            chain: Vec::new(),
            guarded: FxIndexSet::default(),
        }
    }

    fn visit(&mut self, path: &Path, label: &str) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| AmalgamError::from_io(path, e))?;

        if self.config.dedup_guarded && self.guarded.contains(&canonical) {
            debug!("Skipping already inlined guarded file {}", path.display());
            return Ok(());
        }
        self.check_recursion(path, &canonical)?;

        let contents = fs::read_to_string(path).map_err(|e| AmalgamError::from_io(path, e))?;
        info!("Including {}", path.display());

        self.push_boundary(label);
        self.output.sources.push(path.to_path_buf());
        self.chain.push(canonical);

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        for line in contents.lines() {
            if is_guard_pragma(line) {
                self.mark_guarded();
                continue;
            }
            match parse_include(line) {
                Some(directive) => self.include(&directive, base_dir)?,
                None => self.output.body.push(line.to_owned()),
            }
        }

        self.chain.pop();
        Ok(())
    }

    fn include(&mut self, directive: &IncludeDirective, base_dir: &Path) -> Result<()> {
        if let Some(relative) = directive.local_path() {
            return self.visit(&base_dir.join(relative), relative);
        }

        if self.output.externals.insert(directive.target.clone()) {
            trace!("Hoisting external include {}", directive.target);
        }
        Ok(())
    }

    fn check_recursion(&self, path: &Path, canonical: &Path) -> Result<()> {
        let cause = if self.chain.iter().any(|active| active == canonical) {
            RecursionCause::Cycle
        } else if self.chain.len() > self.config.max_depth {
            RecursionCause::Depth(self.config.max_depth)
        } else {
            return Ok(());
        };

        let mut chain = self.chain.clone();
        chain.push(canonical.to_path_buf());
        Err(AmalgamError::RecursionLimitExceeded {
            path: path.to_path_buf(),
            cause,
            chain,
        })
    }

    fn mark_guarded(&mut self) {
        if let Some(current) = self.chain.last() {
            self.guarded.insert(current.clone());
        }
    }

    fn push_boundary(&mut self, label: &str) {
        let body = &mut self.output.body;
        body.push(String::new());
        body.push(BOUNDARY_RULE.to_owned());
        body.push(format!("// {label}"));
        body.push(BOUNDARY_RULE.to_owned());
    }
}
