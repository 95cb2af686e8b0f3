/// Flags fixed when the lexer is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Verbosity; above zero every emitted token is logged.
    pub debug: u8,
    /// Skips pattern table validation in `Lexer::build`.
    pub optimize: bool,
    /// Echo diagnostics to stderr as they are recorded.
    pub print_to_stderr: bool,
    /// Call the brace hooks and the type lookup while scanning.
    pub invoke_hooks: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            debug: 1,
            optimize: false,
            print_to_stderr: true,
            invoke_hooks: false,
        }
    }
}

impl LexerOptions {
    pub fn with_debug(mut self, debug: u8) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn with_print_to_stderr(mut self, print_to_stderr: bool) -> Self {
        self.print_to_stderr = print_to_stderr;
        self
    }

    pub fn with_invoke_hooks(mut self, invoke_hooks: bool) -> Self {
        self.invoke_hooks = invoke_hooks;
        self
    }

    /// Applies every override that is set.
    pub fn merge(&mut self, overrides: &BuildOptions) {
        if let Some(debug) = overrides.debug {
            self.debug = debug;
        }
        if let Some(optimize) = overrides.optimize {
            self.optimize = optimize;
        }
        if let Some(print_to_stderr) = overrides.print_to_stderr {
            self.print_to_stderr = print_to_stderr;
        }
    }
}

/// Overrides accepted by `Lexer::build`. `None` keeps the construction value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub debug: Option<u8>,
    pub optimize: Option<bool>,
    pub print_to_stderr: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::{BuildOptions, LexerOptions};

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut options = LexerOptions::default().with_debug(3);
        options.merge(&BuildOptions {
            print_to_stderr: Some(false),
            ..BuildOptions::default()
        });

        assert_eq!(options.debug, 3);
        assert!(!options.optimize);
        assert!(!options.print_to_stderr);
    }

    #[test]
    fn test_merge_overrides_everything_set() {
        let mut options = LexerOptions::default();
        options.merge(&BuildOptions {
            debug: Some(0),
            optimize: Some(true),
            print_to_stderr: Some(false),
        });

        assert_eq!(options, LexerOptions::default().with_debug(0).with_optimize(true).with_print_to_stderr(false));
    }
}
